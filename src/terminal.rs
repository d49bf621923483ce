use crate::app::BrowserView;
use crate::config::AppConfig;
use crate::domain::InputEvent;
use crate::error::BrowseError;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};

/// What the browser needs from a terminal: one blocking input source and a
/// way to draw the current state. Backend types never leak past this trait.
pub trait TerminalDriver {
    fn poll_event(&mut self) -> Result<InputEvent, BrowseError>;
    fn render(&mut self, view: &BrowserView<'_>) -> Result<(), BrowseError>;
}

pub struct CrosstermDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    config: AppConfig,
}

impl CrosstermDriver {
    pub fn start(config: AppConfig) -> Result<Self> {
        setup_terminal()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .context("failed to create terminal")?;
        Ok(Self { terminal, config })
    }

    pub fn restore(&mut self) -> Result<()> {
        restore_terminal(&mut self.terminal)
    }
}

impl TerminalDriver for CrosstermDriver {
    fn poll_event(&mut self) -> Result<InputEvent, BrowseError> {
        loop {
            let raw = event::read().map_err(BrowseError::DriverFatal)?;
            if let Some(event) = map_event(&raw) {
                return Ok(event);
            }
        }
    }

    fn render(&mut self, view: &BrowserView<'_>) -> Result<(), BrowseError> {
        let config = &self.config;
        self.terminal
            .draw(|frame| ui::draw(frame, view, config))
            .map_err(BrowseError::DriverFatal)?;
        Ok(())
    }
}

pub(crate) fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
        Event::Resize(width, height) => Some(InputEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(InputEvent::Quit);
    }

    let event = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => InputEvent::Quit,
        KeyCode::Down | KeyCode::Char('j') => InputEvent::MoveDown,
        KeyCode::Up | KeyCode::Char('k') => InputEvent::MoveUp,
        KeyCode::PageDown => InputEvent::PageDown,
        KeyCode::PageUp => InputEvent::PageUp,
        KeyCode::Left | KeyCode::Backspace => InputEvent::Ascend,
        KeyCode::Right | KeyCode::Enter => InputEvent::Descend,
        KeyCode::Char('h') | KeyCode::Char('H') => InputEvent::JumpHome,
        KeyCode::Char('b') | KeyCode::Char('B') => InputEvent::JumpInitial,
        _ => return None,
    };
    Some(event)
}

fn setup_terminal() -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen).context("failed to enter alternate screen")?;
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;
    Ok(())
}
