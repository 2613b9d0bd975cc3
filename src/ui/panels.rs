use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Sparkline, Wrap},
    Frame,
};

use crate::{
    app::App,
    history::Metric,
    utils::{human_readable_clock, human_readable_memory},
};

fn border_style(is_selected: bool) -> Style {
    if is_selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    }
}

fn graph_color(metric: Metric) -> Color {
    match metric {
        Metric::Cpu => Color::Green,
        Metric::Memory => Color::Cyan,
        Metric::Swap => Color::Magenta,
    }
}

pub fn render_summary(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title("💻 System")
        .borders(Borders::ALL)
        .border_style(border_style(false));

    let snapshot = &app.snapshot;
    let mut content = vec![
        format!("▶ CPU: {:5.1}% @ {}", snapshot.cpu_percent, human_readable_clock(snapshot.cpu_mhz)),
        format!(
            "▶ Memory: {} / {} ({:.1}%)",
            human_readable_memory(snapshot.memory_used_kb),
            human_readable_memory(snapshot.memory_total_kb),
            snapshot.memory_percent(),
        ),
    ];
    if app.config.show_swap {
        content.push(format!(
            "▶ Swap: {} / {} ({:.1}%)",
            human_readable_memory(snapshot.swap_used_kb),
            human_readable_memory(snapshot.swap_total_kb),
            snapshot.swap_percent(),
        ));
    }

    let paragraph = Paragraph::new(content.join("\n"))
        .style(Style::default().fg(Color::White))
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

pub fn render_graph(app: &App, metric: Metric, frame: &mut Frame, area: Rect) {
    let latest = app
        .history
        .latest(metric)
        .map(|percent| format!("{:.1}%", percent))
        .unwrap_or_else(|| "--".to_string());
    let title = format!(
        "{}: {} [{} samples]",
        metric.title(),
        latest,
        app.history.granularity
    );

    let data = app.history.sparkline_data(metric);
    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style(app.selected_panel == metric)),
        )
        .data(&data)
        .max(100)
        .style(Style::default().fg(graph_color(metric)));

    frame.render_widget(sparkline, area);
}
