use crate::coord::Coord;
use crate::piece::{Piece, Type::*};
use crate::player::Player;
use std::ops::{Index, IndexMut};

/// An 8x8 board stored row-major as signed cell values.
///
/// A cell holds `sign * magnitude`: positive for White, negative for Black,
/// magnitudes pawn=1, bishop=2, knight=3, rook=4, queen=5, king=6, and `0`
/// for an empty square.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [i8; 64],
}

pub const WIDTH: i8 = 8;
pub const HEIGHT: i8 = 8;

impl Board {
    pub fn empty() -> Self {
        Self { cells: [0; 64] }
    }

    pub fn with_pieces(pieces: &[(Coord, Piece)]) -> Self {
        let mut board = Self::empty();
        for (coord, piece) in pieces {
            board.add_piece(*coord, *piece);
        }
        board
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row >= 0 && coord.row < HEIGHT && coord.col >= 0 && coord.col < WIDTH
    }

    pub fn get(&self, coord: Coord) -> i8 {
        self[coord]
    }

    pub fn add_piece(&mut self, coord: Coord, piece: Piece) {
        assert_eq!(self[coord], 0);
        self[coord] = piece.value();
    }

    pub fn remove_piece(&mut self, coord: Coord) {
        assert_ne!(self[coord], 0);
        self[coord] = 0;
    }

    /// First square holding `player`'s king, scanning the 64 cells in
    /// row-major order.
    pub fn king_coord(&self, player: Player) -> Option<Coord> {
        let king = Piece::new(player, King).value();
        for (i, cell) in self.cells.iter().enumerate() {
            if *cell == king {
                return Some(Coord::new(i as i8 / WIDTH, i as i8 % WIDTH));
            }
        }
        None
    }
}

impl Index<Coord> for Board {
    type Output = i8;

    fn index(&self, coord: Coord) -> &Self::Output {
        debug_assert!(self.in_bounds(coord));
        &self.cells[(coord.row * WIDTH + coord.col) as usize]
    }
}

impl Index<(i8, i8)> for Board {
    type Output = i8;

    fn index(&self, (row, col): (i8, i8)) -> &Self::Output {
        self.index(Coord { row, col })
    }
}

impl IndexMut<Coord> for Board {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        debug_assert!(self.in_bounds(coord));
        &mut self.cells[(coord.row * WIDTH + coord.col) as usize]
    }
}

impl IndexMut<(i8, i8)> for Board {
    fn index_mut(&mut self, (row, col): (i8, i8)) -> &mut Self::Output {
        self.index_mut(Coord { row, col })
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in (0..HEIGHT).rev() {
            for col in 0..WIDTH {
                write!(f, "{:3}", self[(row, col)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Board {
    /// Standard chess starting position, White on rows 0 and 1.
    pub fn classical() -> Self {
        use crate::player::Player::*;
        let mut board = Self::empty();
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        for col in 0..WIDTH {
            board.add_piece(Coord::new(1, col), Piece::new(White, Pawn));
            board.add_piece(Coord::new(6, col), Piece::new(Black, Pawn));
        }
        for (col, ty) in back_rank.into_iter().enumerate() {
            board.add_piece(Coord::new(0, col as i8), Piece::new(White, ty));
            board.add_piece(Coord::new(7, col as i8), Piece::new(Black, ty));
        }
        board
    }
}

#[test]
fn test_board() {
    use crate::player::Player::*;
    let mut b = Board::empty();
    let p1 = Piece::new(White, Bishop);
    let p2 = Piece::new(Black, Knight);
    b.add_piece(Coord::new(0, 0), p1);
    b.add_piece(Coord::new(3, 3), p2);
    assert_eq!(b[(0, 0)], p1.value());
    assert_eq!(b[(3, 3)], p2.value());
    assert_eq!(b[(0, 3)], 0);
    b.remove_piece(Coord::new(3, 3));
    assert_eq!(b[(3, 3)], 0);
}

#[test]
fn test_in_bounds() {
    let b = Board::empty();
    assert!(b.in_bounds(Coord::new(0, 0)));
    assert!(b.in_bounds(Coord::new(7, 7)));
    assert!(!b.in_bounds(Coord::new(-1, 0)));
    assert!(!b.in_bounds(Coord::new(0, -1)));
    assert!(!b.in_bounds(Coord::new(8, 0)));
    assert!(!b.in_bounds(Coord::new(0, 8)));
}

#[test]
fn test_king_coord() {
    use crate::player::Player::*;
    let b = Board::with_pieces(&[
        (Coord::new(2, 5), Piece::new(White, King)),
        (Coord::new(6, 1), Piece::new(Black, King)),
    ]);
    assert_eq!(b.king_coord(White), Some(Coord::new(2, 5)));
    assert_eq!(b.king_coord(Black), Some(Coord::new(6, 1)));
    assert_eq!(Board::empty().king_coord(White), None);
}

#[test]
fn test_king_coord_first_match_wins() {
    use crate::player::Player::*;
    // Malformed board with two kings; scan order makes the lower
    // row-major index win.
    let b = Board::with_pieces(&[
        (Coord::new(5, 0), Piece::new(White, King)),
        (Coord::new(1, 7), Piece::new(White, King)),
    ]);
    assert_eq!(b.king_coord(White), Some(Coord::new(1, 7)));
}

#[test]
fn test_classical() {
    use crate::player::Player::*;
    let b = Board::classical();
    assert_eq!(b.king_coord(White), Some(Coord::new(0, 4)));
    assert_eq!(b.king_coord(Black), Some(Coord::new(7, 4)));
    assert_eq!(b[(0, 0)], Piece::new(White, Rook).value());
    assert_eq!(b[(6, 3)], Piece::new(Black, Pawn).value());
    assert_eq!(b[(4, 4)], 0);
}

#[test]
#[should_panic]
#[cfg(debug_assertions)]
fn test_board_panic_row() {
    let b = Board::empty();
    let _ = b[(8, 1)];
}

#[test]
#[should_panic]
#[cfg(debug_assertions)]
fn test_board_panic_col() {
    let b = Board::empty();
    let _ = b[(1, -1)];
}

#[test]
#[should_panic]
#[cfg(debug_assertions)]
fn test_mut_board_panic_row() {
    let mut b = Board::empty();
    b[(-1, 1)] = 0;
}

#[test]
#[should_panic]
#[cfg(debug_assertions)]
fn test_mut_board_panic_col() {
    let mut b = Board::empty();
    b[(1, 8)] = 0;
}
