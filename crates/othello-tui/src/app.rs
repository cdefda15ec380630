use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::game::{Game, Screen};
use crate::ui;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Restore the terminal even when we panic mid-draw.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = Game::new();
    let result = run_loop(&mut terminal, &mut game);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut Game,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, game))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Only handle Press events (crossterm sends Press+Release on Windows)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if handle_key(game, key) {
                    return Ok(());
                }
            }
        }
    }
}

/// Handle a key event. Returns true if the app should quit.
fn handle_key(game: &mut Game, key: KeyEvent) -> bool {
    match game.screen {
        Screen::Menu => handle_menu_key(game, key),
        Screen::NameEntry => handle_name_entry_key(game, key),
        Screen::Playing => handle_playing_key(game, key),
        Screen::GameOver => handle_game_over_key(game, key),
    }
}

fn handle_menu_key(game: &mut Game, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => game.start_name_entry(),
        KeyCode::Char('q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}

fn handle_name_entry_key(game: &mut Game, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) => game.push_name_char(c),
        KeyCode::Backspace => game.pop_name_char(),
        KeyCode::Tab | KeyCode::Up | KeyCode::Down => game.toggle_name_field(),
        KeyCode::Enter => {
            // Enter confirms the first field, then starts the game.
            if game.editing_name == 0 {
                game.editing_name = 1;
            } else {
                game.start_new_game();
            }
        }
        KeyCode::Esc => game.screen = Screen::Menu,
        _ => {}
    }
    false
}

fn handle_playing_key(game: &mut Game, key: KeyEvent) -> bool {
    if game.show_quit_confirm {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return true,
            _ => game.show_quit_confirm = false,
        }
        return false;
    }

    match key.code {
        KeyCode::Up => game.move_cursor(-1, 0),
        KeyCode::Down => game.move_cursor(1, 0),
        KeyCode::Left => game.move_cursor(0, -1),
        KeyCode::Right => game.move_cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => game.play_selected(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            game.show_quit_confirm = true;
        }
        _ => {}
    }
    false
}

fn handle_game_over_key(game: &mut Game, key: KeyEvent) -> bool {
    match key.code {
        // Rematch keeps the entered names.
        KeyCode::Char('r') | KeyCode::Char('R') => game.start_new_game(),
        KeyCode::Enter | KeyCode::Char('n') => game.screen = Screen::Menu,
        KeyCode::Char('q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}
