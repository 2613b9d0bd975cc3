use chrono::Local;
use color_eyre::{eyre::WrapErr, Result};
use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;
use sysinfo::System;
use tracing::{debug, info};

use crate::{
    config::Config,
    history::{GraphHistory, Metric},
    metrics::Snapshot,
    utils::{truncate_string, CPU_BRAND_MAX_LEN, HOST_LABEL_MAX_LEN, MANUAL_REFRESH_COOLDOWN},
};

pub struct App {
    pub should_quit: bool,
    pub show_help: bool,
    pub system: System,
    pub config: Config,
    pub history: GraphHistory,
    pub snapshot: Snapshot,
    pub selected_panel: Metric,
    pub cpu_brand: String,
    pub last_update: Instant,
    pub last_manual_refresh: Instant,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let mut system = System::new();
        system.refresh_cpu_all();
        system.refresh_memory();

        let cpu_brand = system
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| "unknown cpu".to_string());

        let mut app = Self {
            should_quit: false,
            show_help: false,
            history: GraphHistory::new(config.graph_granularity),
            snapshot: Snapshot::default(),
            selected_panel: Metric::Cpu,
            cpu_brand,
            last_update: Instant::now(),
            last_manual_refresh: Instant::now(),
            system,
            config,
        };

        // Initial sample so the graphs are primed before the first frame
        app.sample()?;
        Ok(app)
    }

    /// Metrics shown as graphs, in panel order.
    pub fn visible_metrics(&self) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|metric| *metric != Metric::Swap || self.config.show_swap)
            .collect()
    }

    pub fn update(&mut self) -> Result<()> {
        if self.last_update.elapsed() >= self.config.update_interval() {
            self.system.refresh_cpu_all();
            self.system.refresh_memory();
            self.sample()?;
        }
        Ok(())
    }

    fn sample(&mut self) -> Result<()> {
        self.snapshot = Snapshot::collect(&self.system);
        self.history
            .update(&self.snapshot)
            .wrap_err("failed to record graph sample")?;
        self.last_update = Instant::now();
        Ok(())
    }

    pub fn refresh(&mut self) -> Result<()> {
        if self.last_manual_refresh.elapsed() < MANUAL_REFRESH_COOLDOWN {
            debug!("Manual refresh ignored, cooldown active");
            return Ok(());
        }
        self.system.refresh_cpu_all();
        self.system.refresh_memory();
        self.sample()?;
        self.last_manual_refresh = Instant::now();
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyCode) -> Result<()> {
        if self.show_help {
            match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return Ok(());
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.select_previous_panel();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.select_next_panel();
            }
            KeyCode::Char('r') => {
                self.refresh()?;
            }
            KeyCode::Char('c') => {
                info!("Clearing graph history");
                self.history.clear();
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            _ => {}
        }
        Ok(())
    }

    fn select_next_panel(&mut self) {
        let visible = self.visible_metrics();
        let current = visible
            .iter()
            .position(|metric| *metric == self.selected_panel)
            .unwrap_or(0);
        self.selected_panel = visible[(current + 1) % visible.len()];
    }

    fn select_previous_panel(&mut self) {
        let visible = self.visible_metrics();
        let current = visible
            .iter()
            .position(|metric| *metric == self.selected_panel)
            .unwrap_or(0);
        let prev = if current == 0 { visible.len() - 1 } else { current - 1 };
        self.selected_panel = visible[prev];
    }

    pub fn render_header(&self, frame: &mut Frame, area: Rect) {
        let hostname = System::host_name().unwrap_or_else(|| "unknown-host".to_string());
        let username = std::env::var("USERNAME")
            .or_else(|_| std::env::var("USER"))
            .unwrap_or_else(|_| "unknown-user".to_string());
        let host_label = truncate_string(&format!("{}@{}", username, hostname), HOST_LABEL_MAX_LEN);
        let title_text = format!(
            "{} :: {} :: {}",
            host_label,
            truncate_string(&self.cpu_brand, CPU_BRAND_MAX_LEN),
            Local::now().format("%H:%M:%S"),
        );
        let title = Paragraph::new(title_text)
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Green)));
        frame.render_widget(title, area);
    }

    pub fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let help_text = if self.show_help {
            "ESC or ? to close"
        } else {
            "←→hl (select graph) | r (refresh) | c (clear graphs) | ? (help) | q (quit)"
        };
        let footer = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(footer, area);
    }
}
