//! Console front end: reads squares, prints the board.
//!
//! The loop is generic over its input and output so it can be driven from
//! tests as well as from a terminal.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{AlgebraicPosition, ChessMatch, MatchError, PROMOTION_KINDS};

pub mod print;

/// Error type that ends the console loop
#[derive(Debug)]
pub enum CliError {
    /// Reading or writing the console failed
    Io(io::Error),
    /// The engine reported a non-recoverable error
    Match(MatchError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "Console error: {e}"),
            CliError::Match(e) => write!(f, "Match aborted: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Match(e) => Some(e),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<MatchError> for CliError {
    fn from(e: MatchError) -> Self {
        CliError::Match(e)
    }
}

/// Read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, CliError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>, CliError> {
    write!(output, "{label}")?;
    output.flush()?;
    read_line(input)
}

/// Play `game` until checkmate or end of input.
///
/// Recoverable engine errors are printed and the player is asked again;
/// anything else ends the loop with an error.
pub fn run_cli_loop<R: BufRead, W: Write>(
    game: &mut ChessMatch,
    mut input: R,
    mut output: W,
) -> Result<(), CliError> {
    loop {
        write!(output, "{}", print::render_match(game))?;
        if game.checkmate() {
            return Ok(());
        }

        let Some(line) = prompt(&mut input, &mut output, "\nSource: ")? else {
            return Ok(());
        };
        let source = match line.parse::<AlgebraicPosition>() {
            Ok(square) => square,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };
        let moves = match game.legal_moves_from(source) {
            Ok(moves) => moves,
            Err(e) if e.is_recoverable() => {
                writeln!(output, "{e}")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        write!(output, "\n{}", print::render_board(game, Some(&moves)))?;

        let Some(line) = prompt(&mut input, &mut output, "\nTarget: ")? else {
            return Ok(());
        };
        let outcome = line
            .parse::<AlgebraicPosition>()
            .and_then(|target| game.perform_move(source, target));
        match outcome {
            Ok(_) => {}
            Err(e) if e.is_recoverable() => {
                writeln!(output, "{e}")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        if game.pending_promotion().is_some() {
            let choices: Vec<String> = PROMOTION_KINDS.iter().map(|k| k.letter().to_string()).collect();
            let label = format!("Enter piece for promotion ({}): ", choices.join("/"));
            if let Some(letter) = prompt(&mut input, &mut output, &label)? {
                let piece = game.promote(&letter)?;
                if letter != piece.kind().letter().to_string() {
                    writeln!(output, "Invalid choice, keeping {}", piece.kind().letter())?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, MatchBuilder, PieceKind};

    fn play(game: &mut ChessMatch, script: &str) -> String {
        let mut output = Vec::new();
        run_cli_loop(game, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_plays_a_move() {
        let mut game = ChessMatch::new();
        let out = play(&mut game, "e2\ne4\n");
        assert_eq!(game.turn(), 2);
        assert_eq!(game.current_player(), Color::Black);
        assert!(out.contains("Waiting player: Black"));
    }

    #[test]
    fn test_reports_bad_input_and_continues() {
        let mut game = ChessMatch::new();
        let out = play(&mut game, "z9\ne7\ne2\ne5\ne2\ne3\n");
        assert!(out.contains("Invalid position 'z9'"));
        assert!(out.contains("is not yours"));
        assert!(out.contains("can't move to e5"));
        assert_eq!(game.turn(), 2);
    }

    #[test]
    fn test_stops_at_checkmate() {
        let mut game = ChessMatch::new();
        let out = play(&mut game, "f2\nf3\ne7\ne5\ng2\ng4\nd8\nh4\na2\na3\n");
        assert!(game.checkmate());
        assert!(out.contains("CHECKMATE!"));
        assert!(out.contains("Winner: Black"));
        assert_eq!(game.piece_at("a2".parse().unwrap()).map(|p| p.kind()), Some(PieceKind::Pawn));
    }

    #[test]
    fn test_promotion_prompt() {
        let mut game = MatchBuilder::new()
            .piece("e1", Color::White, PieceKind::King)
            .piece("a8", Color::Black, PieceKind::King)
            .piece("h7", Color::White, PieceKind::Pawn)
            .build()
            .unwrap();
        let out = play(&mut game, "h7\nh8\nN\n");
        assert!(out.contains("Enter piece for promotion (Q/R/B/N): "));
        let promoted = game.piece_at("h8".parse().unwrap()).unwrap();
        assert_eq!(promoted.kind(), PieceKind::Knight);
    }

    #[test]
    fn test_invalid_promotion_keeps_queen() {
        let mut game = MatchBuilder::new()
            .piece("e1", Color::White, PieceKind::King)
            .piece("a8", Color::Black, PieceKind::King)
            .piece("h7", Color::White, PieceKind::Pawn)
            .build()
            .unwrap();
        let out = play(&mut game, "h7\nh8\nX\n");
        assert!(out.contains("Invalid choice, keeping Q"));
        assert_eq!(
            game.piece_at("h8".parse().unwrap()).map(|p| p.kind()),
            Some(PieceKind::Queen)
        );
    }
}
