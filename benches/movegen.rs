//! Criterion benchmarks measure time of move generation and perft calculation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kingrow::draughts::board::Board;
use kingrow::draughts::core::Player;
use kingrow::draughts::perft::perft;

/// Boards reached by always playing the first or the last legal move, which
/// includes middlegames with captures and endgames with kings.
fn sample_boards() -> Vec<(Board, Player)> {
    let mut boards = vec![];
    for pick_last in [false, true] {
        let mut board = Board::starting();
        let mut player = Player::One;
        for _ in 0..100 {
            let moves = board.legal_moves(player);
            let next_move = if pick_last { moves.last() } else { moves.first() };
            let Some(next_move) = next_move else {
                break;
            };
            boards.push((board, player));
            board = board.apply(next_move);
            player = player.opponent();
        }
    }
    boards
}

fn generate_moves(boards: &[(Board, Player)]) {
    for (board, player) in boards {
        let _ = std::hint::black_box(board.legal_moves(*player));
    }
}

fn movegen_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Move generation");
    let boards = sample_boards();
    group.throughput(criterion::Throughput::Elements(boards.len() as u64));
    let _ = group.bench_with_input(
        BenchmarkId::new("legal_moves", format!("{} boards", boards.len())),
        &boards,
        |b, boards| {
            b.iter(|| generate_moves(boards));
        },
    );
    group.finish();
}

criterion_group! {
    name = movegen;
    config = Criterion::default().sample_size(100);
    targets = movegen_bench
}

// This acts both as performance and correctness test.
fn perft_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    for (depth, nodes) in [(3, 302), (4, 1_469), (5, 7_361)] {
        group.throughput(criterion::Throughput::Elements(nodes));
        let _ = group.bench_with_input(
            BenchmarkId::new("perft", format!("starting board, depth {depth}")),
            &depth,
            |b, &depth| {
                b.iter(|| {
                    assert_eq!(perft(&Board::starting(), Player::One, depth), nodes);
                });
            },
        );
    }
    group.finish();
}

criterion_group! {
    name = perft_group;
    config = Criterion::default().sample_size(10);
    targets = perft_bench
}

criterion_main!(movegen, perft_group);
