use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridfall::core::shapes::definitions;
use gridfall::core::{Board, GameSession};
use gridfall::types::{PieceColor, BOARD_HEIGHT, BOARD_WIDTH};

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::with_seed(12345);
    session.start();

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            session.tick();
            black_box(session.score());
        })
    });
}

fn bench_clear_four_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
            for y in 16..BOARD_HEIGHT as i32 {
                for x in 0..BOARD_WIDTH as i32 {
                    board.set(x, y, Some(PieceColor::Cyan));
                }
            }
            black_box(board.clear_full_rows())
        })
    });
}

fn bench_placement_check(c: &mut Criterion) {
    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    let (shape, _) = definitions().into_iter().next().unwrap();

    c.bench_function("is_valid_placement", |b| {
        b.iter(|| black_box(board.is_valid_placement(black_box(&shape), 4, 10)))
    });
}

fn bench_rotation(c: &mut Criterion) {
    let (shape, _) = definitions().into_iter().nth(2).unwrap();

    c.bench_function("rotate_cw", |b| b.iter(|| black_box(shape.rotated_cw())));
}

criterion_group!(
    benches,
    bench_tick,
    bench_clear_four_rows,
    bench_placement_check,
    bench_rotation
);
criterion_main!(benches);
