//! Image catalog: the board image and the twelve piece cutouts with their
//! native pixel sizes. Queried once when the session is laid out; piece
//! natives differ because jigsaw tabs extend past the 256x256 cell.

use crate::model::{GridShape, Size};

pub const BOARD_IMAGE: &str = "assets/puzzle_complete.png";

pub const BOARD_NATIVE: Size = Size {
    width: 1024.0,
    height: 768.0,
};

pub const GRID: GridShape = GridShape { rows: 3, cols: 4 };

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieceImage {
    pub asset: &'static str,
    pub native: Size,
}

const fn piece(asset: &'static str, width: f64, height: f64) -> PieceImage {
    PieceImage {
        asset,
        native: Size { width, height },
    }
}

pub const PIECES: [PieceImage; 12] = [
    piece("assets/puzzle_piece1.png", 256.0, 310.0),
    piece("assets/puzzle_piece2.png", 322.0, 256.0),
    piece("assets/puzzle_piece3.png", 310.0, 312.0),
    piece("assets/puzzle_piece4.png", 318.0, 256.0),
    piece("assets/puzzle_piece5.png", 256.0, 318.0),
    piece("assets/puzzle_piece6.png", 328.0, 322.0),
    piece("assets/puzzle_piece7.png", 312.0, 310.0),
    piece("assets/puzzle_piece8.png", 256.0, 328.0),
    piece("assets/puzzle_piece9.png", 320.0, 256.0),
    piece("assets/puzzle_piece10.png", 308.0, 256.0),
    piece("assets/puzzle_piece11.png", 324.0, 316.0),
    piece("assets/puzzle_piece12.png", 256.0, 256.0),
];

pub fn piece_natives() -> Vec<Size> {
    PIECES.iter().map(|p| p.native).collect()
}
