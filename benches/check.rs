use criterion::{black_box, criterion_group, criterion_main, Criterion};
use incheck::board::Board;
use incheck::check::is_in_check;
use incheck::coord::Coord;
use incheck::piece::{Piece, Type::*};
use incheck::player::Player::*;

fn run_is_in_check(c: &mut Criterion) {
    let classical = Board::classical();
    // Lone kings: every slider scan runs to the board edge.
    let sparse = Board::with_pieces(&[
        (Coord::new(3, 3), Piece::new(White, King)),
        (Coord::new(4, 5), Piece::new(Black, King)),
    ]);
    c.bench_function("is_in_check_classical", |b| {
        b.iter(|| is_in_check(black_box(&classical), White))
    });
    c.bench_function("is_in_check_sparse", |b| {
        b.iter(|| is_in_check(black_box(&sparse), White))
    });
}

criterion_group!(benches, run_is_in_check);
criterion_main!(benches);
