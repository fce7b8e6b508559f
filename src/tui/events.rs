use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::App;
use super::rendering::ui;

pub fn run_tui(input: Option<String>, output: Option<String>) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_folders(input, output);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('r') => app.rename(),
            KeyCode::Char('y') => app.toggle_use_year(),
            KeyCode::Char('s') => app.toggle_use_suffix(),
            KeyCode::Char('x') => app.reset(),
            KeyCode::Char('c') => app.should_quit = true,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            if app.show_help {
                app.toggle_help();
            } else {
                app.should_quit = true;
            }
        }
        KeyCode::F(1) => app.toggle_help(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        KeyCode::Down => app.next(),
        KeyCode::Up => app.previous(),
        KeyCode::Enter => app.handle_enter(),
        KeyCode::Backspace => app.handle_backspace(),
        KeyCode::Char(c) => app.handle_char(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::models::ConfigInputMode;

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        handle_key(app, KeyEvent::new(code, modifiers));
    }

    #[test]
    fn test_control_keys_toggle_options() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('y'), KeyModifiers::CONTROL);
        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(app.use_year);
        assert!(app.use_suffix);

        // Without the modifier the letter goes into the focused field.
        press(&mut app, KeyCode::Char('y'), KeyModifiers::NONE);
        assert_eq!(app.input_folder_input, "y");
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.config_input_mode, ConfigInputMode::OutputFolder);
        press(&mut app, KeyCode::BackTab, KeyModifiers::SHIFT);
        press(&mut app, KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(app.config_input_mode, ConfigInputMode::Files);
    }

    #[test]
    fn test_escape_closes_help_before_quitting() {
        let mut app = App::new();
        press(&mut app, KeyCode::F(1), KeyModifiers::NONE);
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(!app.show_help);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);
    }
}
