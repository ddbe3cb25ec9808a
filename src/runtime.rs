use std::io;

use crossterm::{
  event,
  execute,
  terminal::{
    EnterAlternateScreen,
    LeaveAlternateScreen,
    disable_raw_mode,
    enable_raw_mode,
  },
};
use ratatui::{
  Terminal,
  backend::CrosstermBackend,
};

use crate::app::App;

/// Run the interactive session until it becomes terminal.
///
/// Events are read with a blocking `event::read`, so each key is fully
/// handled (including its effect) before the next one is accepted.
pub fn run_app(app: &mut App) -> Result<(), Box<dyn std::error::Error>>
{
  enable_raw_mode()?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend)?;
  terminal.clear()?;

  // Ensure we always restore the terminal even if an error occurs during event
  // handling
  let res: Result<(), Box<dyn std::error::Error>> = loop
  {
    if app.force_full_redraw
    {
      let _ = terminal.clear();
      app.force_full_redraw = false;
    }
    if let Err(e) = terminal.draw(|f| crate::ui::draw(f, app))
    {
      break Err(e.into());
    }
    match event::read()
    {
      Ok(ev) => match crate::runtime_util::process_event(app, ev)
      {
        Ok(true) => break Ok(()),
        Ok(false) =>
        {}
        Err(e) => break Err(e.into()),
      },
      Err(e) => break Err(e.into()),
    }
  };

  disable_raw_mode()?;
  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
  terminal.show_cursor()?;
  res
}
