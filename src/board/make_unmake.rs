use super::{AlgebraicPosition, ChessMatch, MatchError, Piece, PieceKind, Position};

/// A piece taken off the board by `make_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Capture {
    pub(crate) piece: Piece,
    /// Square the piece stood on; differs from the target for en passant
    pub(crate) square: Position,
    /// Slot the piece held in the active roster
    pub(crate) active_index: Option<usize>,
}

/// Everything `undo_move` needs to reverse one `make_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct UnmakeInfo {
    pub(crate) from: Position,
    pub(crate) to: Position,
    pub(crate) capture: Option<Capture>,
    /// Rook relocated by castling: (from, to)
    pub(crate) rook: Option<(Position, Position)>,
}

impl UnmakeInfo {
    /// The piece this move captured, if any
    #[must_use]
    pub(crate) fn captured(&self) -> Option<&Piece> {
        self.capture.as_ref().map(|c| &c.piece)
    }
}

impl ChessMatch {
    /// Apply a move without any legality checks.
    ///
    /// Handles the castling rook and the en passant capture. The turn,
    /// flags and en passant registration are left alone.
    pub(crate) fn make_move(
        &mut self,
        from: Position,
        to: Position,
    ) -> Result<UnmakeInfo, MatchError> {
        let mut mover = self
            .grid
            .remove(from)?
            .ok_or(MatchError::NoPieceAtSource {
                square: AlgebraicPosition::from_position(from)?,
            })?;
        mover.move_count += 1;
        let kind = mover.kind;

        let mut capture = match self.grid.remove(to)? {
            Some(victim) => Some(self.capture(victim, to)),
            None => None,
        };
        self.grid.place(mover, to)?;

        let mut rook = None;
        if kind == PieceKind::King
            && from.row() == to.row()
            && from.column().abs_diff(to.column()) == 2
        {
            let (rook_from, rook_to) = if to.column() > from.column() {
                (
                    Position::new(from.row(), self.grid.columns() - 1),
                    Position::new(from.row(), to.column() - 1),
                )
            } else {
                (
                    Position::new(from.row(), 0),
                    Position::new(from.row(), to.column() + 1),
                )
            };
            if let Some(mut castle_rook) = self.grid.remove(rook_from)? {
                castle_rook.move_count += 1;
                self.grid.place(castle_rook, rook_to)?;
                rook = Some((rook_from, rook_to));
            }
        }

        if kind == PieceKind::Pawn && from.column() != to.column() && capture.is_none() {
            let victim_square = Position::new(from.row(), to.column());
            if let Some(victim) = self.grid.remove(victim_square)? {
                capture = Some(self.capture(victim, victim_square));
                crate::log_event!(trace, "pawn takes en passant on {to}");
            }
        }

        Ok(UnmakeInfo {
            from,
            to,
            capture,
            rook,
        })
    }

    /// Exact inverse of `make_move`.
    pub(crate) fn undo_move(&mut self, info: UnmakeInfo) -> Result<(), MatchError> {
        if let Some((rook_from, rook_to)) = info.rook {
            if let Some(mut castle_rook) = self.grid.remove(rook_to)? {
                castle_rook.move_count = castle_rook.move_count.saturating_sub(1);
                self.grid.place(castle_rook, rook_from)?;
            }
        }

        if let Some(mut mover) = self.grid.remove(info.to)? {
            mover.move_count = mover.move_count.saturating_sub(1);
            self.grid.place(mover, info.from)?;
        }

        if let Some(capture) = info.capture {
            if let Some(victim) = self.captured.pop() {
                self.grid.place(victim, capture.square)?;
                if let Some(idx) = capture.active_index {
                    self.active.insert(idx, victim.id);
                }
            }
        }

        Ok(())
    }

    /// Move a piece just lifted off the board into the captured roster
    fn capture(&mut self, victim: Piece, square: Position) -> Capture {
        let active_index = self.active.iter().position(|&id| id == victim.id);
        if let Some(idx) = active_index {
            self.active.remove(idx);
        }
        self.captured.push(victim);
        Capture {
            piece: victim,
            square,
            active_index,
        }
    }
}
