use super::movegen::MoveContext;
use super::{ChessMatch, Color, MatchError, MoveMatrix, PieceKind, Position};

impl ChessMatch {
    /// Square of the king of `color`
    pub(crate) fn find_king(&self, color: Color) -> Result<Position, MatchError> {
        self.grid
            .iter()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(position, _)| position)
            .ok_or(MatchError::MissingKing { color })
    }

    /// Returns true if any opposing piece on the board could move onto the
    /// king of `color`.
    ///
    /// Fails with `MissingKing` if that king is not on the board.
    pub fn test_check(&self, color: Color) -> Result<bool, MatchError> {
        let king = self.find_king(color)?;
        // Castling lands on empty squares only, so it never reaches a king
        // and the threat map can be skipped here.
        let ctx = MoveContext::new(self.en_passant_vulnerable);
        Ok(self
            .active_pieces_of(color.opponent())
            .any(|piece| piece.possible_move(king, &self.grid, &ctx)))
    }

    /// Returns true if `color` is in check and no move of any of its pieces
    /// gets the king out of check.
    ///
    /// Every candidate move is made, tested and undone; the match is left
    /// exactly as it was.
    pub fn test_checkmate(&mut self, color: Color) -> Result<bool, MatchError> {
        if !self.test_check(color)? {
            return Ok(false);
        }

        let candidates: Vec<(Position, MoveMatrix)> = self
            .active_pieces_of(color)
            .filter_map(|piece| Some((piece.position?, self.legal_moves_of(piece))))
            .collect();

        for (from, moves) in candidates {
            for to in moves.positions() {
                let info = self.make_move(from, to)?;
                let still_in_check = self.test_check(color);
                self.undo_move(info)?;
                if !still_in_check? {
                    crate::log_event!(trace, "{color} escapes check via {from} -> {to}");
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }
}
