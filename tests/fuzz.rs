use incheck::board::{Board, HEIGHT, WIDTH};
use incheck::check::is_in_check;
use incheck::coord::Coord;
use incheck::piece::{Piece, Type, Type::*};
use incheck::player::{opponent, Player, Player::*};
use rand::{thread_rng, Rng};

fn valid_piece_for_coord(piece: Piece, coord: Coord) -> bool {
    match piece.ty {
        Pawn => coord.row != 0 && coord.row != HEIGHT - 1,
        _ => true,
    }
}

fn add_piece_to_rand_coord<R: Rng + ?Sized>(rng: &mut R, board: &mut Board, piece: Piece) {
    loop {
        let coord = Coord::new(rng.gen_range(0..HEIGHT), rng.gen_range(0..WIDTH));
        if board[coord] != 0 {
            continue;
        }
        if !valid_piece_for_coord(piece, coord) {
            continue;
        }
        board.add_piece(coord, piece);
        return;
    }
}

fn rand_player<R: Rng + ?Sized>(rng: &mut R) -> Player {
    if rng.gen() {
        White
    } else {
        Black
    }
}

fn rand_non_king_type<R: Rng + ?Sized>(rng: &mut R) -> Type {
    match rng.gen_range(0..5) {
        0 => Pawn,
        1 => Bishop,
        2 => Knight,
        3 => Rook,
        _ => Queen,
    }
}

fn rand_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut board = Board::empty();
    for player in [White, Black] {
        add_piece_to_rand_coord(rng, &mut board, Piece::new(player, King));
    }

    if rng.gen() {
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                let coord = Coord::new(row, col);
                if board[coord] != 0 {
                    continue;
                }
                let piece = Piece::new(rand_player(rng), rand_non_king_type(rng));
                if !valid_piece_for_coord(piece, coord) {
                    continue;
                }
                if rng.gen_bool(1.0 / 8.0) {
                    board.add_piece(coord, piece);
                }
            }
        }
    } else {
        for player in [White, Black] {
            for _ in 0..(rng.gen_range(5..10)) {
                let piece = Piece::new(player, rand_non_king_type(rng));
                add_piece_to_rand_coord(rng, &mut board, piece);
            }
        }
    }
    board
}

/// Straight walk from `from` toward `to`, true when every square strictly
/// between them is empty. `from`/`to` must share a rank, file, or diagonal.
fn path_clear(board: &Board, from: Coord, to: Coord) -> bool {
    let step = Coord::new(
        (to.row - from.row).signum(),
        (to.col - from.col).signum(),
    );
    let mut coord = from + step;
    while coord != to {
        if board[coord] != 0 {
            return false;
        }
        coord = coord + step;
    }
    true
}

/// Piece-by-piece attack rules, written independently of the scan-based
/// detector. Enemy kings are not considered attackers, matching the
/// detector's scope.
fn oracle_attacks(board: &Board, from: Coord, to: Coord, piece: Piece) -> bool {
    let dr = to.row - from.row;
    let dc = to.col - from.col;
    match piece.ty {
        Pawn => dr == piece.player.sign() && dc.abs() == 1,
        Knight => (dr.abs() == 2 && dc.abs() == 1) || (dr.abs() == 1 && dc.abs() == 2),
        Bishop => dr.abs() == dc.abs() && dr != 0 && path_clear(board, from, to),
        Rook => (dr == 0) != (dc == 0) && path_clear(board, from, to),
        Queen => {
            (dr.abs() == dc.abs() || dr == 0 || dc == 0)
                && (dr, dc) != (0, 0)
                && path_clear(board, from, to)
        }
        King => false,
    }
}

fn oracle_is_in_check(board: &Board, player: Player) -> bool {
    let king_coord = board.king_coord(player).unwrap();
    for row in 0..HEIGHT {
        for col in 0..WIDTH {
            let coord = Coord::new(row, col);
            if let Some(piece) = Piece::from_value(board[coord]) {
                if piece.player == opponent(player)
                    && oracle_attacks(board, coord, king_coord, piece)
                {
                    return true;
                }
            }
        }
    }
    false
}

fn check_player_is_in_check(board: &Board, player: Player) {
    if is_in_check(board, player).unwrap() != oracle_is_in_check(board, player) {
        println!("{:?}", board);
        println!("{:?}", player);
        panic!("is_in_check mismatch");
    }
}

#[test]
fn fuzz_is_in_check() {
    let mut rng = thread_rng();
    for _ in 0..1000 {
        let board = rand_board(&mut rng);
        check_player_is_in_check(&board, White);
        check_player_is_in_check(&board, Black);
    }
}
