//! Terminal connect-four runner (default binary).
//!
//! One key press drives at most one engine call. The board is redrawn after
//! every event with the framebuffer renderer; on quit the final board is
//! printed to the normal screen.
//!
//! Logging goes through `env_logger` (`RUST_LOG`). Set `CONNECT_FOUR_LOG` to a
//! file path to capture engine logs without drawing over the game screen.

use std::fs::File;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_connect_four::core::{new_game, GameState};
use tui_connect_four::input::{handle_key_event, should_quit, wrong_input_message};
use tui_connect_four::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_connect_four::types::{GameAction, Outcome};

const LOG_FILE_ENV: &str = "CONNECT_FOUR_LOG";

fn main() -> Result<()> {
    init_logging()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    let game = result?;

    if game.moves_played() > 0 {
        print!("{}", game.board());
        println!("{}", final_status(&game));
    }
    Ok(())
}

fn init_logging() -> Result<()> {
    match std::env::var_os(LOG_FILE_ENV) {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create log file {}", path.to_string_lossy()))?;
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
                .init();
        }
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer) -> Result<GameState> {
    let mut game = new_game();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut info = String::new();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, &info, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    log::debug!("quit requested");
                    return Ok(game);
                }
                info = match handle_key_event(key) {
                    Some(action) => apply_action(&mut game, action),
                    None => wrong_input_message(key),
                };
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

/// Apply one input action and return the message to show.
fn apply_action(game: &mut GameState, action: GameAction) -> String {
    match action {
        GameAction::Restart => {
            game.restart();
            format!("new game #{}", game.episode_id() + 1)
        }
        GameAction::DropStone(_) if game.is_over() => {
            "game is over - press 'r' to play again or 'q' to quit".to_string()
        }
        GameAction::DropStone(column) => match game.apply_move(column) {
            Ok(placement) => match placement.outcome {
                Outcome::Win(player) => format!("player with stone: {:?}", player.stone()),
                Outcome::Draw => "no empty fields left - game ends with a draw".to_string(),
                Outcome::InProgress => String::new(),
            },
            Err(err) => err.to_string(),
        },
    }
}

fn final_status(game: &GameState) -> String {
    if let Some(player) = game.outcome().winner() {
        return format!("{player} wins");
    }
    if game.is_over() {
        "draw".to_string()
    } else {
        format!("game left unfinished, {} to move", game.to_move())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_connect_four::types::Player;

    #[test]
    fn engine_errors_become_messages() {
        let mut game = new_game();
        let msg = apply_action(&mut game, GameAction::DropStone(5));
        assert_eq!(msg, "wrong input: 5 (column out of board, expected 1-4)");
        assert_eq!(game.moves_played(), 0);
    }

    #[test]
    fn finished_game_is_not_fed_more_moves() {
        let mut game = new_game();
        let mut last = String::new();
        for column in [1, 2, 1, 2, 1, 2, 1] {
            last = apply_action(&mut game, GameAction::DropStone(column));
        }
        assert_eq!(last, "player with stone: 'o'");
        assert_eq!(game.outcome(), Outcome::Win(Player::Player1));
        assert_eq!(final_status(&game), "player 1 (o) wins");

        let before = game.clone();
        let msg = apply_action(&mut game, GameAction::DropStone(3));
        assert!(msg.starts_with("game is over"));
        assert_eq!(game, before);

        apply_action(&mut game, GameAction::Restart);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(final_status(&game), "game left unfinished, player 1 (o) to move");
    }

    #[test]
    fn final_status_reports_draw() {
        let mut game = new_game();
        for column in [1, 2, 1, 2, 2, 1, 2, 1, 3, 4, 3, 4, 4, 3, 4, 3] {
            apply_action(&mut game, GameAction::DropStone(column));
        }
        assert_eq!(game.outcome(), Outcome::Draw);
        assert_eq!(final_status(&game), "draw");
    }
}
