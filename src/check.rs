use crate::board::Board;
use crate::coord::Coord;
use crate::piece::{Piece, Type, Type::*};
use crate::player::Player;
use arrayvec::ArrayVec;
use log::trace;
use thiserror::Error;

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The board holds no king of the requested color. Malformed input,
    /// never folded into a "not in check" result.
    #[error("no {0:?} king on the board")]
    KingNotFound(Player),
}

/// All distinct rotations/reflections of `offset`: 4 for orthogonal and
/// diagonal offsets, 8 for knight-like ones.
fn offsets(offset: Coord) -> ArrayVec<Coord, 8> {
    assert!(offset.row >= 0);
    assert!(offset.col >= 0);
    assert!(offset.row > 0 || offset.col > 0);
    let mut ret = ArrayVec::new();
    ret.push(Coord {
        row: offset.row,
        col: offset.col,
    });
    ret.push(Coord {
        row: -offset.col,
        col: offset.row,
    });
    ret.push(Coord {
        row: -offset.row,
        col: -offset.col,
    });
    ret.push(Coord {
        row: offset.col,
        col: -offset.row,
    });
    if offset.row != offset.col && offset.row != 0 && offset.col != 0 {
        ret.push(Coord {
            row: offset.col,
            col: offset.row,
        });
        ret.push(Coord {
            row: -offset.row,
            col: offset.col,
        });
        ret.push(Coord {
            row: -offset.col,
            col: -offset.row,
        });
        ret.push(Coord {
            row: offset.row,
            col: -offset.col,
        });
    }
    ret
}

// Walks outward from coord over empty squares; returns the type of the
// first piece hit if it belongs to player's opponent.
fn enemy_piece_rider(board: &Board, coord: Coord, offset: Coord, player: Player) -> Option<Type> {
    let mut try_coord = coord + offset;
    while board.in_bounds(try_coord) {
        if let Some(p) = Piece::from_value(board[try_coord]) {
            if p.player != player {
                return Some(p.ty);
            } else {
                return None;
            }
        }
        try_coord = try_coord + offset;
    }
    None
}

fn enemy_piece_leaper(board: &Board, coord: Coord, offset: Coord, player: Player) -> Option<Type> {
    let try_coord = coord + offset;
    if board.in_bounds(try_coord) {
        if let Some(p) = Piece::from_value(board[try_coord]) {
            if p.player != player {
                return Some(p.ty);
            } else {
                return None;
            }
        }
    }
    None
}

/// Whether any of `player`'s opponent's pieces attacks `coord`.
///
/// Scans run in a fixed order (pawn, knight, orthogonal riders, diagonal
/// riders) and the first hit short-circuits.
pub fn square_attacked(board: &Board, coord: Coord, player: Player) -> bool {
    // Enemy pawns capture from one rank in player's forward direction.
    let forward = player.sign();
    for dc in [-1, 1] {
        let o = Coord::new(forward, dc);
        if enemy_piece_leaper(board, coord, o, player) == Some(Pawn) {
            trace!("{:?} attacked by pawn on {:?}", coord, coord + o);
            return true;
        }
    }
    for o in offsets(Coord::new(2, 1)) {
        if enemy_piece_leaper(board, coord, o, player) == Some(Knight) {
            trace!("{:?} attacked by knight on {:?}", coord, coord + o);
            return true;
        }
    }
    for o in offsets(Coord::new(1, 0)) {
        match enemy_piece_rider(board, coord, o, player) {
            Some(Rook) | Some(Queen) => {
                trace!("{:?} attacked along rank/file {:?}", coord, o);
                return true;
            }
            _ => {}
        }
    }
    for o in offsets(Coord::new(1, 1)) {
        match enemy_piece_rider(board, coord, o, player) {
            Some(Bishop) | Some(Queen) => {
                trace!("{:?} attacked along diagonal {:?}", coord, o);
                return true;
            }
            _ => {}
        }
    }
    false
}

/// Whether `player`'s king is attacked.
///
/// Fails with [`CheckError::KingNotFound`] when the board holds no king of
/// that color.
pub fn is_in_check(board: &Board, player: Player) -> Result<bool, CheckError> {
    let king_coord = board
        .king_coord(player)
        .ok_or(CheckError::KingNotFound(player))?;
    Ok(square_attacked(board, king_coord, player))
}

#[cfg(test)]
use crate::player::Player::*;

#[test]
fn test_offsets() {
    let orthogonal = offsets(Coord::new(1, 0));
    assert_eq!(orthogonal.len(), 4);
    for o in [(1, 0), (0, 1), (-1, 0), (0, -1)] {
        assert!(orthogonal.contains(&o.into()));
    }

    let diagonal = offsets(Coord::new(1, 1));
    assert_eq!(diagonal.len(), 4);
    for o in [(1, 1), (-1, 1), (-1, -1), (1, -1)] {
        assert!(diagonal.contains(&o.into()));
    }

    let knight = offsets(Coord::new(2, 1));
    assert_eq!(knight.len(), 8);
    for o in [
        (2, 1),
        (2, -1),
        (-2, 1),
        (-2, -1),
        (1, 2),
        (1, -2),
        (-1, 2),
        (-1, -2),
    ] {
        assert!(knight.contains(&o.into()));
    }
}

#[test]
fn test_king_not_found() {
    assert_eq!(
        is_in_check(&Board::empty(), White),
        Err(CheckError::KingNotFound(White))
    );

    let board = Board::with_pieces(&[(Coord::new(0, 0), Piece::new(White, King))]);
    assert_eq!(is_in_check(&board, White), Ok(false));
    assert_eq!(
        is_in_check(&board, Black),
        Err(CheckError::KingNotFound(Black))
    );
}

#[test]
fn test_lone_king_not_in_check() {
    let board = Board::with_pieces(&[(Coord::new(4, 4), Piece::new(White, King))]);
    assert_eq!(is_in_check(&board, White), Ok(false));
}

#[test]
fn test_classical_not_in_check() {
    let board = Board::classical();
    assert_eq!(is_in_check(&board, White), Ok(false));
    assert_eq!(is_in_check(&board, Black), Ok(false));
}

#[test]
fn test_rook() {
    {
        let board = Board::with_pieces(&[
            (Coord::new(0, 0), Piece::new(White, King)),
            (Coord::new(0, 7), Piece::new(Black, Rook)),
        ]);
        assert_eq!(is_in_check(&board, White), Ok(true));
    }
    {
        // Along a file.
        let board = Board::with_pieces(&[
            (Coord::new(0, 3), Piece::new(White, King)),
            (Coord::new(6, 3), Piece::new(Black, Rook)),
        ]);
        assert_eq!(is_in_check(&board, White), Ok(true));
    }
    {
        // A rook never checks diagonally.
        let board = Board::with_pieces(&[
            (Coord::new(0, 0), Piece::new(White, King)),
            (Coord::new(5, 5), Piece::new(Black, Rook)),
        ]);
        assert_eq!(is_in_check(&board, White), Ok(false));
    }
}

#[test]
fn test_rook_blockers() {
    for blocker in [
        Piece::new(Black, Pawn),
        Piece::new(Black, Knight),
        Piece::new(White, Bishop),
        Piece::new(White, Queen),
    ] {
        let board = Board::with_pieces(&[
            (Coord::new(0, 0), Piece::new(White, King)),
            (Coord::new(0, 3), blocker),
            (Coord::new(0, 7), Piece::new(Black, Rook)),
        ]);
        assert_eq!(is_in_check(&board, White), Ok(false));
    }
    // A blocking enemy queen is itself the checker.
    let board = Board::with_pieces(&[
        (Coord::new(0, 0), Piece::new(White, King)),
        (Coord::new(0, 3), Piece::new(Black, Queen)),
        (Coord::new(0, 7), Piece::new(Black, Rook)),
    ]);
    assert_eq!(is_in_check(&board, White), Ok(true));
}

#[test]
fn test_bishop() {
    {
        let board = Board::with_pieces(&[
            (Coord::new(4, 4), Piece::new(White, King)),
            (Coord::new(3, 3), Piece::new(Black, Bishop)),
        ]);
        assert_eq!(is_in_check(&board, White), Ok(true));
    }
    {
        let board = Board::with_pieces(&[
            (Coord::new(4, 4), Piece::new(White, King)),
            (Coord::new(2, 2), Piece::new(Black, Bishop)),
        ]);
        assert_eq!(is_in_check(&board, White), Ok(true));
    }
    {
        // Interposed piece of either side blocks the diagonal.
        for blocker in [Piece::new(White, Pawn), Piece::new(Black, Pawn)] {
            let board = Board::with_pieces(&[
                (Coord::new(4, 4), Piece::new(White, King)),
                (Coord::new(3, 3), blocker),
                (Coord::new(2, 2), Piece::new(Black, Bishop)),
            ]);
            assert_eq!(is_in_check(&board, White), Ok(false));
        }
    }
    {
        // A bishop never checks orthogonally.
        let board = Board::with_pieces(&[
            (Coord::new(4, 4), Piece::new(White, King)),
            (Coord::new(4, 0), Piece::new(Black, Bishop)),
        ]);
        assert_eq!(is_in_check(&board, White), Ok(false));
    }
}

#[test]
fn test_queen() {
    for queen_coord in [
        Coord::new(4, 0),
        Coord::new(4, 7),
        Coord::new(0, 4),
        Coord::new(7, 4),
        Coord::new(0, 0),
        Coord::new(7, 7),
        Coord::new(1, 7),
        Coord::new(7, 1),
    ] {
        let board = Board::with_pieces(&[
            (Coord::new(4, 4), Piece::new(White, King)),
            (queen_coord, Piece::new(Black, Queen)),
        ]);
        assert_eq!(is_in_check(&board, White), Ok(true));
    }
    // Off every line of the king.
    let board = Board::with_pieces(&[
        (Coord::new(4, 4), Piece::new(White, King)),
        (Coord::new(6, 5), Piece::new(Black, Queen)),
    ]);
    assert_eq!(is_in_check(&board, White), Ok(false));
}

#[test]
fn test_knight() {
    let king_coord = Coord::new(4, 4);
    let knight_offsets = [
        (2, 1),
        (2, -1),
        (-2, 1),
        (-2, -1),
        (1, 2),
        (1, -2),
        (-1, 2),
        (-1, -2),
    ];
    for o in knight_offsets {
        let board = Board::with_pieces(&[
            (king_coord, Piece::new(White, King)),
            (king_coord + o.into(), Piece::new(Black, Knight)),
        ]);
        assert_eq!(is_in_check(&board, White), Ok(true));
    }
    // Knights don't slide and attack nothing outside the 8 offsets.
    for o in [(1, 0), (1, 1), (2, 2), (3, 1), (0, 3)] {
        let board = Board::with_pieces(&[
            (king_coord, Piece::new(White, King)),
            (king_coord + o.into(), Piece::new(Black, Knight)),
        ]);
        assert_eq!(is_in_check(&board, White), Ok(false));
    }
}

#[test]
fn test_pawn() {
    {
        // Black pawns attack the white king from one rank above.
        let board = Board::with_pieces(&[
            (Coord::new(4, 4), Piece::new(White, King)),
            (Coord::new(5, 3), Piece::new(Black, Pawn)),
        ]);
        assert_eq!(is_in_check(&board, White), Ok(true));

        let board = Board::with_pieces(&[
            (Coord::new(4, 4), Piece::new(White, King)),
            (Coord::new(5, 5), Piece::new(Black, Pawn)),
        ]);
        assert_eq!(is_in_check(&board, White), Ok(true));
    }
    {
        // Not from the rank below, and never from straight ahead.
        for pawn_coord in [Coord::new(3, 3), Coord::new(3, 5), Coord::new(5, 4)] {
            let board = Board::with_pieces(&[
                (Coord::new(4, 4), Piece::new(White, King)),
                (pawn_coord, Piece::new(Black, Pawn)),
            ]);
            assert_eq!(is_in_check(&board, White), Ok(false));
        }
    }
    {
        // Mirrored for the black king.
        let board = Board::with_pieces(&[
            (Coord::new(4, 4), Piece::new(Black, King)),
            (Coord::new(3, 5), Piece::new(White, Pawn)),
        ]);
        assert_eq!(is_in_check(&board, Black), Ok(true));

        let board = Board::with_pieces(&[
            (Coord::new(4, 4), Piece::new(Black, King)),
            (Coord::new(5, 5), Piece::new(White, Pawn)),
        ]);
        assert_eq!(is_in_check(&board, Black), Ok(false));
    }
}

#[test]
fn test_friendly_pieces_never_check() {
    use crate::board::{HEIGHT, WIDTH};
    for ty in [Pawn, Bishop, Knight, Rook, Queen] {
        let mut board = Board::with_pieces(&[(Coord::new(4, 4), Piece::new(White, King))]);
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                let coord = Coord::new(row, col);
                if board[coord] == 0 {
                    board.add_piece(coord, Piece::new(White, ty));
                }
            }
        }
        assert_eq!(is_in_check(&board, White), Ok(false));
    }
}

#[test]
fn test_square_attacked_non_king_square() {
    let board = Board::with_pieces(&[(Coord::new(0, 0), Piece::new(Black, Rook))]);
    assert!(square_attacked(&board, Coord::new(0, 5), White));
    assert!(square_attacked(&board, Coord::new(6, 0), White));
    assert!(!square_attacked(&board, Coord::new(1, 1), White));
    assert!(!square_attacked(&board, Coord::new(0, 5), Black));
}

#[test]
fn test_edge_scans_stay_on_board() {
    // Lone kings in each corner; every scan runs into the board edge.
    for king_coord in [
        Coord::new(0, 0),
        Coord::new(0, 7),
        Coord::new(7, 0),
        Coord::new(7, 7),
    ] {
        let board = Board::with_pieces(&[(king_coord, Piece::new(White, King))]);
        assert_eq!(is_in_check(&board, White), Ok(false));
    }
}
