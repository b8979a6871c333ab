use super::{home_rook_square, rook_home_owner, GameState, Piece, PieceKind, Square};

impl GameState {
    /// Apply a move the caller has already confirmed legal.
    ///
    /// Handles the castling rook, the en-passant victim, queen promotion,
    /// the touched flags, the capture counter and the en-passant file. No
    /// validation is repeated here.
    pub fn apply(&mut self, from: Square, to: Square) {
        let Some(piece) = self.board.take(from) else {
            debug_assert!(false, "apply called on empty square {from}");
            return;
        };
        let color = piece.color;
        let mut placed = piece;
        let mut captured = self.board.get(to).is_some();
        let mut double_step_file = None;

        match piece.kind {
            PieceKind::King => {
                self.side_mut(color).move_king(to);
                let d_file = to.file() as i8 - from.file() as i8;
                if d_file.abs() == 2 {
                    let kingside = d_file > 0;
                    let rook_from = home_rook_square(color, kingside);
                    if let Some(rook_to) = from.offset(0, d_file.signum()) {
                        let rook = self.board.take(rook_from);
                        self.board.set(rook_to, rook);
                    }
                }
            }
            PieceKind::Pawn => {
                if let Some(victim) = self.en_passant_victim(from, to, color) {
                    self.board.set(victim, None);
                    captured = true;
                }
                if from.rank().abs_diff(to.rank()) == 2 {
                    double_step_file = Some(from.file());
                }
                if to.rank() == color.pawn_promotion_rank() {
                    placed = Piece::new(color, PieceKind::Queen);
                }
            }
            _ => {}
        }

        for sq in [from, to] {
            if let Some((owner, kingside)) = rook_home_owner(sq) {
                self.side_mut(owner).touch_rook(kingside);
            }
        }

        self.board.set(to, Some(placed));
        self.en_passant_file = double_step_file;
        self.plies_since_capture = if captured {
            0
        } else {
            self.plies_since_capture.saturating_add(1)
        };
        self.side_to_move = color.opponent();

        debug_assert!(self.kings_present(), "king missing after {from}{to}");
    }

    /// Copy of this position with the move applied
    #[must_use]
    pub fn after(&self, from: Square, to: Square) -> GameState {
        let mut next = *self;
        next.apply(from, to);
        next
    }
}
