use super::{AlgebraicPosition, ChessMatch, Color, MatchError, MoveMatrix, Piece, PieceKind};

impl ChessMatch {
    /// Squares the piece on `source` can move to.
    ///
    /// Fails if `source` is empty, holds an opponent's piece, or holds a
    /// piece with nowhere to go.
    pub fn legal_moves_from(&self, source: AlgebraicPosition) -> Result<MoveMatrix, MatchError> {
        self.validate_source(source)
    }

    /// Play the current player's piece from `source` to `target`.
    ///
    /// Returns the captured piece, if any. A pawn reaching the last rank is
    /// replaced by a queen at once; call [`ChessMatch::promote`] to pick a
    /// different piece. On error the match is unchanged.
    pub fn perform_move(
        &mut self,
        source: AlgebraicPosition,
        target: AlgebraicPosition,
    ) -> Result<Option<Piece>, MatchError> {
        if self.options.enforce_game_over {
            if let Some(winner) = self.winner() {
                return Err(MatchError::GameOver { winner });
            }
        }

        let moves = self.validate_source(source)?;
        let (from, to) = (source.to_position(), target.to_position());
        if !moves.get(to) {
            return Err(MatchError::IllegalTarget {
                from: source,
                to: target,
            });
        }

        let mover = self.current_player;
        let info = self.make_move(from, to)?;
        let self_check = self.test_check(mover);
        if !matches!(self_check, Ok(false)) {
            self.undo_move(info)?;
            self_check?;
            crate::log_event!(warn, "{mover} {source} -> {target} rejected: own king in check");
            return Err(MatchError::SelfCheck {
                from: source,
                to: target,
            });
        }
        let captured = info.captured().copied();

        self.promoted = None;
        let moved = self.grid.get(to)?.copied();
        if let Some(pawn) = moved.filter(|p| p.kind == PieceKind::Pawn) {
            if to.row() == pawn.color.promotion_row() {
                self.promoted = Some(pawn.id);
                self.replace_promoted(PieceKind::Queen)?;
            }
        }

        self.en_passant_vulnerable = moved
            .filter(|p| p.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2)
            .map(|p| p.id);

        let opponent = mover.opponent();
        self.check = self.test_check(opponent)?;
        crate::log_event!(debug, "turn {}: {mover} {source} -> {target}", self.turn);

        if self.test_checkmate(opponent)? {
            self.checkmate = true;
            crate::log_event!(info, "checkmate, {mover} wins on turn {}", self.turn);
        } else {
            if self.check {
                crate::log_event!(info, "{opponent} is in check");
            }
            self.next_turn();
        }

        Ok(captured)
    }

    /// Replace the piece from the last promotion with a `B`, `N`, `R` or
    /// `Q` of the same color on the same square.
    ///
    /// Any other letter keeps the piece already installed and returns it.
    /// Either way the choice is made: nothing is pending afterwards.
    pub fn promote(&mut self, letter: &str) -> Result<Piece, MatchError> {
        let current = self
            .pending_promotion()
            .copied()
            .ok_or(MatchError::NoPendingPromotion)?;

        let Some(kind) = PieceKind::from_promotion_letter(letter) else {
            self.promoted = None;
            return Ok(current);
        };
        let promoted = self.replace_promoted(kind)?;
        self.promoted = None;
        self.refresh_status(promoted.color)?;
        Ok(promoted)
    }

    /// Recompute check and checkmate against the opponent of `mover` after
    /// the piece `mover` just promoted has been swapped. Only valid before
    /// the opponent replies, which holds since `promote` needs a pending
    /// piece.
    fn refresh_status(&mut self, mover: Color) -> Result<(), MatchError> {
        let opponent = mover.opponent();
        let was_checkmate = self.checkmate;
        self.check = self.test_check(opponent)?;
        self.checkmate = self.test_checkmate(opponent)?;

        match (was_checkmate, self.checkmate) {
            (true, false) => self.next_turn(),
            (false, true) => {
                self.turn -= 1;
                self.current_player = mover;
            }
            _ => {}
        }
        Ok(())
    }

    fn validate_source(&self, source: AlgebraicPosition) -> Result<MoveMatrix, MatchError> {
        let piece = self
            .grid
            .get(source.to_position())?
            .ok_or(MatchError::NoPieceAtSource { square: source })?;

        if piece.color != self.current_player {
            return Err(MatchError::OpponentPieceSelected { square: source });
        }

        let moves = self.legal_moves_of(piece);
        if !moves.any() {
            return Err(MatchError::NoLegalMoves { square: source });
        }
        Ok(moves)
    }

    /// Swap the pending promotion piece for a fresh piece of `kind`
    fn replace_promoted(&mut self, kind: PieceKind) -> Result<Piece, MatchError> {
        let pending = self
            .pending_promotion()
            .copied()
            .ok_or(MatchError::NoPendingPromotion)?;
        let Some(position) = pending.position else {
            return Err(MatchError::NoPendingPromotion);
        };

        self.grid.remove(position)?;
        self.active.retain(|&id| id != pending.id);
        let id = self.spawn(kind, pending.color, position)?;
        self.promoted = Some(id);

        let promoted = self
            .locate(id)
            .copied()
            .ok_or(MatchError::NoPendingPromotion)?;
        crate::log_event!(debug, "{} promoted to {:?} on {position}", pending.color, kind);
        Ok(promoted)
    }

    fn next_turn(&mut self) {
        self.turn += 1;
        self.current_player = self.current_player.opponent();
    }
}
