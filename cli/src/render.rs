use std::fmt::Write;

use sweeper_core::{Cell, Game, GameStatus};

fn symbol(cell: Cell, status: GameStatus) -> char {
    match cell {
        Cell::Covered { mine: true } if status == GameStatus::Lost => 'x',
        Cell::Covered { .. } => '#',
        Cell::Flagged { .. } => 'F',
        Cell::Open(0) => '.',
        Cell::Open(value) => char::from(b'0' + value),
        Cell::Exploded => '*',
    }
}

pub fn status_line(game: &Game) -> String {
    match game.status() {
        GameStatus::Idle => "Reveal your first square.".to_string(),
        GameStatus::InProgress => format!("Mines left: {}", game.mines_left()),
        GameStatus::Won => "You have won the game!".to_string(),
        GameStatus::Lost => "You lost the game.".to_string(),
    }
}

/// Grid with one row per line, covered cells as `#`.
pub fn board(game: &Game) -> String {
    let (width, _) = game.size();
    let mut out = String::with_capacity(game.cells().len() + usize::from(width) * 2);

    for row in game.cells().rows() {
        for &cell in row {
            out.push(symbol(cell, game.status()));
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{}", status_line(game));
    out
}
