//! Material values and piece-square tables.
//!
//! Tables are written from White's side with a1 first (index = square index)
//! and hold percentage multipliers applied to the piece's material value.
//! Black reads them through `Square::flip_vertical`.

/// Centipawn value per kind, indexed by `PieceKind::index`
/// (king, queen, rook, bishop, knight, pawn).
pub(crate) const MATERIAL: [i32; 6] = [200, 900, 500, 330, 320, 100];

#[rustfmt::skip]
const KING: [i32; 64] = [
    110, 115, 105, 95, 95, 105, 115, 110,
    105, 105, 100, 95, 95, 100, 105, 105,
     95,  90,  90, 85, 85,  90,  90,  95,
     90,  85,  85, 80, 80,  85,  85,  90,
     85,  80,  80, 75, 75,  80,  80,  85,
     85,  80,  80, 75, 75,  80,  80,  85,
     85,  80,  80, 75, 75,  80,  80,  85,
     85,  80,  80, 75, 75,  80,  80,  85,
];

#[rustfmt::skip]
const QUEEN: [i32; 64] = [
     96,  98,  98,  99,  99,  98,  98,  96,
     98, 100, 101, 100, 100, 100, 100,  98,
     98, 101, 101, 101, 101, 101, 100,  98,
    100, 100, 101, 101, 101, 101, 100,  99,
     99, 100, 101, 101, 101, 101, 100,  99,
     98, 100, 101, 101, 101, 101, 100,  98,
     98, 100, 100, 100, 100, 100, 100,  98,
     96,  98,  98,  99,  99,  98,  98,  96,
];

#[rustfmt::skip]
const ROOK: [i32; 64] = [
    100, 100, 100, 102, 102, 100, 100, 100,
     99, 100, 100, 100, 100, 100, 100,  99,
     99, 100, 100, 100, 100, 100, 100,  99,
     99, 100, 100, 100, 100, 100, 100,  99,
     99, 100, 100, 100, 100, 100, 100,  99,
     99, 100, 100, 100, 100, 100, 100,  99,
    102, 104, 104, 104, 104, 104, 104, 102,
    100, 100, 100, 100, 100, 100, 100, 100,
];

#[rustfmt::skip]
const BISHOP: [i32; 64] = [
     94,  97,  97,  97,  97,  97,  97,  94,
     97, 102, 100, 100, 100, 100, 102,  97,
     97, 103, 103, 103, 103, 103, 103,  97,
     97, 100, 103, 103, 103, 103, 100,  97,
     97, 102, 102, 103, 103, 102, 102,  97,
     97, 100, 102, 103, 103, 102, 100,  97,
     97, 100, 100, 100, 100, 100, 100,  97,
     94,  97,  97,  97,  97,  97,  97,  94,
];

#[rustfmt::skip]
const KNIGHT: [i32; 64] = [
     84,  88,  91,  91,  91,  91,  88,  84,
     88,  94, 100, 102, 102, 100,  94,  88,
     91, 102, 104, 105, 105, 104, 102,  91,
     91, 100, 105, 106, 106, 105, 100,  91,
     91, 102, 105, 106, 106, 105, 102,  91,
     91, 100, 104, 105, 105, 104, 100,  91,
     88,  94, 100, 100, 100, 100,  94,  88,
     84,  88,  91,  91,  91,  91,  88,  84,
];

#[rustfmt::skip]
const PAWN: [i32; 64] = [
    100, 100, 100, 100, 100, 100, 100, 100,
    105, 110, 110,  80,  80, 110, 110, 105,
    105,  95,  90, 100, 100,  90,  95, 105,
    100, 100, 100, 120, 120, 100, 100, 100,
    105, 105, 110, 125, 125, 110, 105, 105,
    110, 110, 120, 130, 130, 120, 110, 110,
    150, 150, 150, 150, 150, 150, 150, 150,
    100, 100, 100, 100, 100, 100, 100, 100,
];

/// Indexed by `PieceKind::index`
pub(crate) const BONUS: [[i32; 64]; 6] = [KING, QUEEN, ROOK, BISHOP, KNIGHT, PAWN];
