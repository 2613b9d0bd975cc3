use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use std::time::Duration;

mod app;
mod config;
mod graph;
mod history;
mod metrics;
mod ui;
mod utils;

use app::App;
use config::Config;
use ui::{render_graph, render_help, render_summary};

fn main() -> Result<()> {
    color_eyre::install()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("sysgauge=info")
        .with_writer(std::io::stderr)
        .init();

    info!("Starting sysgauge");

    let config = Config::load(config::default_path())?;
    let app = App::new(config)?;

    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();

    match &result {
        Ok(()) => info!("sysgauge exited successfully"),
        Err(e) => error!("sysgauge exited with error: {}", e),
    }

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        app.update()?;
        terminal.draw(|frame| render(&app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key_event(key.code)?;
                }
            }
        }

        if app.should_quit {
            break Ok(());
        }
    }
}

fn render(app: &App, frame: &mut Frame) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    app.render_header(frame, main_layout[0]);

    if app.show_help {
        render_help(frame, main_layout[1]);
    } else {
        let metrics = app.visible_metrics();
        let summary_height = if app.config.show_swap { 5 } else { 4 };

        let mut constraints = vec![Constraint::Length(summary_height)];
        constraints.extend(metrics.iter().map(|_| Constraint::Ratio(1, metrics.len() as u32)));

        let content_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(main_layout[1]);

        render_summary(app, frame, content_layout[0]);
        for (metric, area) in metrics.iter().zip(content_layout.iter().skip(1)) {
            render_graph(app, *metric, frame, *area);
        }
    }

    app.render_footer(frame, main_layout[2]);
}
