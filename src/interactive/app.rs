//! TUI application state and logic

use crate::controller::QueryController;
use crate::view::View;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How long to wait for a key before checking for finished lookups
const TICK: Duration = Duration::from_millis(50);

/// Application state
///
/// The query controller owns input, mode and fetch state. Everything else here is
/// shell state: independent toggles with no bearing on lookups.
pub struct App {
    pub controller: QueryController,
    pub show_help: bool,
    pub show_definitions: bool,
    pub scroll: u16,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(controller: QueryController) -> Self {
        Self {
            controller,
            show_help: false,
            show_definitions: true,
            scroll: 0,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn view(&self) -> View<'_> {
        View::project(self.controller.state())
    }

    pub fn push_char(&mut self, c: char) {
        let mut input = self.controller.input().to_string();
        input.push(c);
        self.controller.set_input(input);
    }

    pub fn pop_char(&mut self) {
        let mut input = self.controller.input().to_string();
        input.pop();
        self.controller.set_input(input);
    }

    pub fn cycle_mode(&mut self) {
        let next = self.controller.mode().next();
        self.controller.set_mode(next);
    }

    /// Submit the current input; blank input does nothing
    pub fn submit(&mut self) {
        if self.controller.trigger().is_some() {
            self.scroll = 0;
        }
    }

    pub const fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub const fn toggle_definitions(&mut self) {
        self.show_definitions = !self.show_definitions;
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).max(0);
        self.scroll = u16::try_from(next).unwrap_or(u16::MAX);
    }

    /// Apply lookups that finished since the last tick
    pub fn tick(&mut self) {
        self.controller.pump();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('d') => self.toggle_definitions(),
                _ => {}
            }
            return;
        }

        if self.show_help {
            // Any key closes the help dialog
            self.show_help = false;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(1) => self.toggle_help(),
            KeyCode::Tab => self.cycle_mode(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.pop_char(),
            KeyCode::Char(c) => self.push_char(c),
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-10),
            KeyCode::PageDown => self.scroll_by(10),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
