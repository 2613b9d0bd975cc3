use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_help(frame: &mut Frame, area: Rect) {
    let help_text = "
SYSGAUGE - HELP

KEYS:
  ← → h l  - Select graph
  r        - Sample now
  c        - Clear graph history
  ?        - Show/hide this help
  q / Esc  - Quit

GRAPHS:
  CPU      - Global CPU usage
  Memory   - Used share of physical memory
  Swap     - Used share of swap (hidden with \"show_swap\": false)

CONFIG:
  $SYSGAUGE_CONFIG or ~/.config/sysgauge/config.json
  graph_granularity, update_interval_ms, show_swap

Press '?' or Esc to close this help.
    ";

    let help_block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(help_text.trim())
        .style(Style::default().fg(Color::White))
        .block(help_block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
