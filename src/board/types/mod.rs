//! Core chess types.
//!
//! - `PieceKind`, `Color` and `Piece` - pieces and their signed tile codes
//! - `Square` - 0-63 board index
//! - `Bitboard` - 64-bit square set used for attack masks
//! - `Move` - a (from, to) pair
//! - `SideState` - king location and castling touched flags per color

mod bitboard;
mod moves;
mod piece;
mod side;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::Move;
pub use piece::{Color, Piece, PieceKind};
pub use side::{home_king_square, home_rook_square, SideState};
pub use square::Square;

pub(crate) use side::rook_home_owner;
