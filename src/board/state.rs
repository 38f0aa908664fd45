use super::grid::Grid;
use super::movegen::{Castling, MoveContext};
use super::options::{CastlingRule, MatchOptions};
use super::{
    AlgebraicPosition, Color, MatchBuilder, MatchError, MoveMatrix, Piece, PieceId, PieceKind,
    Position, BOARD_SIZE,
};

/// State of one chess match.
///
/// The match owns the grid (and through it every piece on the board) and
/// the captured roster. The active roster lists the identities of the
/// pieces on the board in the order they were placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChessMatch {
    pub(crate) grid: Grid<Piece>,
    pub(crate) turn: u32,
    pub(crate) current_player: Color,
    pub(crate) check: bool,
    pub(crate) checkmate: bool,
    pub(crate) en_passant_vulnerable: Option<PieceId>,
    pub(crate) promoted: Option<PieceId>,
    pub(crate) active: Vec<PieceId>,
    pub(crate) captured: Vec<Piece>,
    pub(crate) next_id: u16,
    pub(crate) options: MatchOptions,
}

impl ChessMatch {
    /// A match in the standard starting position with default options
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(MatchOptions::default())
    }

    /// A match in the standard starting position
    #[must_use]
    pub fn with_options(options: MatchOptions) -> Self {
        MatchBuilder::starting_position()
            .options(options)
            .build()
            .expect("standard layout fits an empty 8x8 board")
    }

    pub(crate) fn empty(options: MatchOptions) -> Result<Self, MatchError> {
        Ok(ChessMatch {
            grid: Grid::new(BOARD_SIZE, BOARD_SIZE)?,
            turn: 1,
            current_player: Color::White,
            check: false,
            checkmate: false,
            en_passant_vulnerable: None,
            promoted: None,
            active: Vec::new(),
            captured: Vec::new(),
            next_id: 0,
            options,
        })
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Returns true if the side that just received a move is in check.
    /// After checkmate that is the loser, not the current player.
    #[must_use]
    pub fn check(&self) -> bool {
        self.check
    }

    #[must_use]
    pub fn checkmate(&self) -> bool {
        self.checkmate
    }

    /// Winner of a finished match. The turn does not advance on the
    /// mating move, so the winner is the current player.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.checkmate.then_some(self.current_player)
    }

    #[must_use]
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    #[must_use]
    pub fn grid(&self) -> &Grid<Piece> {
        &self.grid
    }

    /// Piece standing on `square`
    #[must_use]
    pub fn piece_at(&self, square: AlgebraicPosition) -> Option<&Piece> {
        self.grid.get(square.to_position()).ok().flatten()
    }

    /// Board snapshot, row 0 being rank 8
    #[must_use]
    pub fn pieces(&self) -> Vec<Vec<Option<Piece>>> {
        let mut rows = vec![vec![None; self.grid.columns()]; self.grid.rows()];
        for (position, piece) in self.grid.iter() {
            rows[position.row()][position.column()] = Some(*piece);
        }
        rows
    }

    /// Pieces on the board, in roster order
    pub fn active_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.active.iter().filter_map(move |&id| self.locate(id))
    }

    /// Captured pieces, oldest first
    #[must_use]
    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }

    /// Captured pieces of one color, oldest first
    #[must_use]
    pub fn captured_by_color(&self, color: Color) -> Vec<&Piece> {
        self.captured.iter().filter(|p| p.color == color).collect()
    }

    /// Pawn that may currently be taken en passant
    #[must_use]
    pub fn en_passant_vulnerable(&self) -> Option<&Piece> {
        self.en_passant_vulnerable.and_then(|id| self.locate(id))
    }

    /// Piece installed by the last promotion, set only until `promote`
    /// makes the choice
    #[must_use]
    pub fn pending_promotion(&self) -> Option<&Piece> {
        self.promoted.and_then(|id| self.locate(id))
    }

    /// Find a piece on the board by identity
    pub(crate) fn locate(&self, id: PieceId) -> Option<&Piece> {
        self.grid
            .iter()
            .find(|(_, piece)| piece.id == id)
            .map(|(_, piece)| piece)
    }

    pub(crate) fn active_pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.active_pieces().filter(move |p| p.color == color)
    }

    /// Create a piece, put it on the board and append it to the roster
    pub(crate) fn spawn(
        &mut self,
        kind: PieceKind,
        color: Color,
        position: Position,
    ) -> Result<PieceId, MatchError> {
        let id = PieceId(self.next_id);
        self.grid.place(Piece::new(id, kind, color), position)?;
        self.next_id += 1;
        self.active.push(id);
        Ok(id)
    }

    /// Legal moves of a piece in this match, ignoring self-check
    pub(crate) fn legal_moves_of(&self, piece: &Piece) -> MoveMatrix {
        let threats = (piece.kind == PieceKind::King
            && piece.move_count == 0
            && self.options.castling == CastlingRule::Strict)
            .then(|| self.threatened_by(piece.color.opponent()));

        let ctx = MoveContext {
            en_passant_vulnerable: self.en_passant_vulnerable,
            castling: match &threats {
                Some(map) => Castling::AvoidThreats(map),
                None => Castling::Unchecked,
            },
        };
        piece.legal_moves(&self.grid, &ctx)
    }

    /// Every square attacked by a piece of `color`
    pub(crate) fn threatened_by(&self, color: Color) -> MoveMatrix {
        let mut threats = MoveMatrix::new(self.grid.rows(), self.grid.columns());
        for piece in self.active_pieces_of(color) {
            threats |= &piece.attacks(&self.grid);
        }
        threats
    }
}

impl Default for ChessMatch {
    fn default() -> Self {
        ChessMatch::new()
    }
}
