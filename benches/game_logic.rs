use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{Board, BoardSnapshot, GameState, Piece};
use blockfall::timer::TimerSet;
use blockfall::types::{PieceKind, PressSnapshot};

fn bench_tick(c: &mut Criterion) {
    let mut game = GameState::new(12345);
    game.start();
    let mut timers = TimerSet::new();
    let input = PressSnapshot::default();

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            game.tick(black_box(&input), &mut timers);
            for fired in timers.tick() {
                game.dispatch(fired, &mut timers);
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_legality(c: &mut Criterion) {
    let board = Board::new();
    let piece = Piece::spawn(PieceKind::T);

    c.bench_function("is_legal", |b| {
        b.iter(|| board.is_legal(black_box(piece.cells())))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = GameState::new(12345);
    game.start();
    let mut out = BoardSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| game.snapshot_into(black_box(&mut out)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_legality,
    bench_snapshot
);
criterion_main!(benches);
