pub mod colors;
pub mod list;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::keymap::describe;
use crate::session::Screen;

pub fn draw(
  f: &mut ratatui::Frame,
  app: &crate::App,
) {
  let full = f.area();
  if full.height == 0 || full.width == 0 { return; }
  let header = Rect { height: 1, ..full };
  draw_header(f, header, app);

  let body = Rect { y: full.y + 1, height: full.height.saturating_sub(1), ..full };
  draw_screen(f, body, app);
}

fn draw_header(f: &mut ratatui::Frame, area: Rect, app: &crate::App) {
  // {user}@{host}:{starting dir}
  let user = whoami::username().unwrap_or_default();
  let host = whoami::hostname().unwrap_or_default();
  let text = format!("{}@{}:{}", user, host, app.session().starting_dir().display());
  let shown = list::truncate_left(&text, area.width as usize);
  let p = Paragraph::new(shown)
    .alignment(Alignment::Left)
    .style(Style::default().fg(Color::Gray));
  f.render_widget(p, area);
}

fn legend_line(label: String, text: &str) -> Line<'static> {
  Line::from(vec![
    Span::styled(format!("[{}]", label), Style::default().add_modifier(Modifier::BOLD)),
    Span::raw(format!(" {}", text)),
  ])
}

fn draw_screen(f: &mut ratatui::Frame, area: Rect, app: &crate::App) {
  let session = app.session();
  let ui = &app.config().ui;
  let screen = session.screen();
  let accent = colors::screen_color(screen, &ui.theme);
  let border_fg = colors::themed(ui.theme.border_fg.as_ref(), Color::DarkGray);
  let help_fg = colors::themed(ui.theme.help_fg.as_ref(), Color::White);
  let path_fg = colors::themed(ui.theme.path_fg.as_ref(), Color::DarkGray);

  let box_w = area.width.min(ui.max_width.saturating_add(2));
  let inner_w = box_w.saturating_sub(2) as usize;
  let divider = Line::from(Span::styled("─".repeat(inner_w), Style::default().fg(border_fg)));

  let mut lines: Vec<Line> = Vec::new();
  lines.push(Line::from(vec![
    Span::styled("[help] ", Style::default().fg(accent).add_modifier(Modifier::BOLD)),
    Span::styled(session.help().to_string(), Style::default().fg(help_fg)),
  ]));
  lines.push(divider.clone());
  lines.extend(list::location_lines(session.locations(), inner_w, accent, path_fg));
  lines.push(divider);

  let keys = session.hotkeys();
  for other in [Screen::Select, Screen::Add, Screen::Delete] {
    if other != screen {
      lines.push(legend_line(describe(keys.switch_key(other)), other.title()));
    }
  }
  if let Some(cancel) = keys.cancel.first() {
    lines.push(legend_line(describe(cancel), "Exit"));
  }

  let box_h = (lines.len() as u16).saturating_add(2).min(area.height);
  let rect = Rect {
    x: area.x + (area.width - box_w) / 2,
    y: area.y + (area.height - box_h) / 2,
    width: box_w,
    height: box_h,
  };
  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(Style::default().fg(border_fg))
    .title(Span::styled(
      format!(" {} ", screen.title()),
      Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ));
  f.render_widget(Clear, rect);
  f.render_widget(Paragraph::new(lines).block(block), rect);
}
