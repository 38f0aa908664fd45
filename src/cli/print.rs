//! Plain-text rendering of a match.

use std::fmt::Write;

use crate::board::{ChessMatch, Color, MoveMatrix, Piece, Position};

/// Board with rank labels on the left and file letters underneath.
/// Squares marked in `highlights` get a `*` after them.
#[must_use]
pub fn render_board(game: &ChessMatch, highlights: Option<&MoveMatrix>) -> String {
    let mut out = String::new();
    for (row, cells) in game.pieces().iter().enumerate() {
        let _ = write!(out, "{} ", cells.len() - row);
        for (column, cell) in cells.iter().enumerate() {
            let symbol = cell.map_or('-', |p| p.symbol());
            let marked = highlights.map_or(false, |m| m.get(Position::new(row, column)));
            out.push(symbol);
            out.push(if marked { '*' } else { ' ' });
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    out
}

fn render_pieces(pieces: &[&Piece]) -> String {
    let symbols: Vec<String> = pieces.iter().map(|p| p.symbol().to_string()).collect();
    format!("[{}]", symbols.join(", "))
}

/// Board, captured pieces, turn and status lines
#[must_use]
pub fn render_match(game: &ChessMatch) -> String {
    let mut out = render_board(game, None);
    out.push('\n');
    out.push_str("Captured pieces:\n");
    for color in Color::BOTH {
        let _ = writeln!(
            out,
            "{color}: {}",
            render_pieces(&game.captured_by_color(color))
        );
    }
    let _ = writeln!(out, "\nTurn: {}", game.turn());

    match game.winner() {
        Some(winner) => {
            out.push_str("CHECKMATE!\n");
            let _ = writeln!(out, "Winner: {winner}");
        }
        None => {
            let _ = writeln!(out, "Waiting player: {}", game.current_player());
            if game.check() {
                out.push_str("CHECK!\n");
            }
        }
    }
    out
}
