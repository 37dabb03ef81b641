//! Interactive walk mode: queue key presses into the game state and redraw once per frame.

use std::{
    io::{self, stdout, Write},
    panic,
    thread,
    time::Duration,
};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use gridmaze::{
    game::{GameState, Input},
    Generator,
};

use crate::{error::AppError, logging::get_logger, render::render, settings::Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Input),
    NewMaze,
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('w') => Some(Action::Move(Input::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(Action::Move(Input::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(Action::Move(Input::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(Action::Move(Input::Right)),
        KeyCode::Char('n') => Some(Action::NewMaze),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Raw mode plus alternate screen for as long as it lives.
struct Screen;

impl Screen {
    fn turn_on() -> io::Result<Self> {
        let prev = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show);
            let _ = terminal::disable_raw_mode();
            prev(info)
        }));

        terminal::enable_raw_mode()?;
        execute!(stdout(), cursor::Hide, terminal::EnterAlternateScreen)?;
        Ok(Screen)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if !thread::panicking() {
            let _ = panic::take_hook();
        }

        let _ = execute!(stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn level_color(level: log::Level) -> Color {
    match level {
        log::Level::Error => Color::Red,
        log::Level::Warn => Color::Yellow,
        log::Level::Info => Color::White,
        log::Level::Debug => Color::Blue,
        log::Level::Trace => Color::Grey,
    }
}

pub fn status_line(game: &GameState) -> String {
    let maze = game.get_maze();
    format!(
        "{} {}x{} | seed {} | {} | moves {} | wasd/arrows move, n new maze, q quit",
        maze.algorithm,
        maze.size(),
        maze.size(),
        maze.seed,
        game.difficulty(),
        game.moves(),
    )
}

fn draw(out: &mut impl Write, game: &GameState, player_char: char) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All))?;

    let lines = render(&game.get_maze().grid, Some((game.player_cell(), player_char)));
    let mut row: u16 = 0;
    for line in &lines {
        queue!(out, cursor::MoveTo(0, row), Print(line))?;
        row += 1;
    }

    queue!(out, cursor::MoveTo(0, row + 1), Print(status_line(game)))?;
    row += 2;

    for message in get_logger().recent() {
        row += 1;
        queue!(
            out,
            cursor::MoveTo(0, row),
            SetForegroundColor(level_color(message.level)),
            Print('|'),
            ResetColor,
            Print(format!(" {} -> {}", message.source, message.message)),
        )?;
    }

    out.flush()
}

fn game_loop(game: &mut GameState, frame_delay: Duration, player_char: char) -> Result<(), AppError> {
    let _screen = Screen::turn_on()?;
    let mut out = stdout();

    loop {
        let mut delay = frame_delay;
        while event::poll(delay)? {
            // just so we read all events in the frame
            delay = Duration::from_millis(1);

            let Event::Key(key) = event::read()? else {
                continue;
            };
            match map_key(key) {
                Some(Action::Move(input)) => game.push_input(input),
                Some(Action::NewMaze) => {
                    let maze = game.get_maze();
                    let next = Generator::new(maze.algorithm).generate(maze.size())?;
                    game.replace_maze(next);
                }
                Some(Action::Quit) => return Ok(()),
                None => {}
            }
        }

        game.tick();
        draw(&mut out, game, player_char)?;
    }
}

/// Runs the walk mode until the player quits.
pub fn run(mut game: GameState, settings: &Settings) -> Result<(), AppError> {
    let logger = get_logger();
    logger.set_echo(false);
    let result = game_loop(
        &mut game,
        settings.get_frame_delay(),
        settings.get_player_char(),
    );
    logger.set_echo(true);

    log::info!("Left after {} moves", game.moves());
    result
}
