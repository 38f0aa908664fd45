/// Log through the `log` facade when the `logging` feature is enabled;
/// expands to nothing otherwise.
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::$level!($($arg)+);
    };
}
pub(crate) use log_event;

pub mod board;
pub mod cli;

pub use board::{AlgebraicPosition, ChessMatch, Color, MatchError, Piece, PieceKind};
