//! Criterion benchmarks measure time of legal move enumeration and move
//! validation.

use chess_rules::chess::core::{Move, Square};
use chess_rules::chess::game::Game;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use shakmaty::{CastlingMode, Chess, Position as ShakmatyPosition};

/// Openings and middlegames reached from the starting position.
const GAMES: [&str; 4] = [
    "",
    "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6",
    "d2d4 d7d5 b1c3 b8c6 c1f4 c8f5 d1d2 d8d7",
    "e2e4 c7c5 g1f3 d7d6 d2d4 c5d4 f3d4 g8f6 b1c3 a7a6 c1e3 e7e5 d4b3 c8e6 f2f3 f8e7",
];

fn setup(moves: &str) -> Game {
    let mut game = Game::new();
    for uci in moves.split_whitespace() {
        let next_move = Move::from_uci(uci).unwrap();
        assert!(game.attempt_move(next_move.from, next_move.to).is_committed());
    }
    game
}

fn setup_reference(moves: &str) -> Chess {
    let mut position = Chess::default();
    for uci in moves.split_whitespace() {
        let next_move = position
            .legal_moves()
            .into_iter()
            .find(|m| m.to_uci(CastlingMode::Standard).to_string() == uci)
            .unwrap();
        position.play_unchecked(&next_move);
    }
    position
}

fn perft(game: &Game, depth: u8) -> u64 {
    let moves = game.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|next_move| {
            let mut next = game.clone();
            assert!(next.attempt_move(next_move.from, next_move.to).is_committed());
            perft(&next, depth - 1)
        })
        .sum()
}

fn legal_moves_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Legal moves");
    let games: Vec<Game> = GAMES.iter().map(|moves| setup(moves)).collect();
    group.throughput(criterion::Throughput::Elements(games.len() as u64));
    group.bench_with_input(
        BenchmarkId::new("legal_moves", format!("{} positions", games.len())),
        &games,
        |b, games| {
            b.iter(|| {
                for game in games {
                    std::hint::black_box(game.legal_moves());
                }
            });
        },
    );
    // shakmaty generates moves from bitboards and is a reference point rather
    // than a target.
    let positions: Vec<Chess> = GAMES.iter().map(|moves| setup_reference(moves)).collect();
    group.bench_with_input(
        BenchmarkId::new("legal_moves_reference_shakmaty", format!("{} positions", positions.len())),
        &positions,
        |b, positions| {
            b.iter(|| {
                for position in positions {
                    std::hint::black_box(position.legal_moves());
                }
            });
        },
    );
    group.finish();
}

fn attempt_move_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Attempt move");
    let game = setup(GAMES[1]);
    for (name, from, to) in [
        ("committed", Square::E1, Square::G1),
        ("illegal", Square::D1, Square::D5),
        ("wrong turn", Square::E8, Square::G8),
    ] {
        group.bench_with_input(BenchmarkId::new("attempt_move", name), &game, |b, game| {
            b.iter_batched(
                || game.clone(),
                |mut game| std::hint::black_box(game.attempt_move(from, to)),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group! {
    name = legality;
    config = Criterion::default().sample_size(50);
    targets = legal_moves_bench, attempt_move_bench
}

// This acts both as performance and correctness test.
fn perft_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    // No en passant or underpromotion is possible this shallow, so the counts
    // match standard chess.
    for (depth, nodes) in [(3, 8_902), (4, 197_281)] {
        group.throughput(criterion::Throughput::Elements(nodes));
        group.bench_with_input(
            BenchmarkId::new("perft", format!("starting position, depth {depth}")),
            &depth,
            |b, &depth| {
                b.iter(|| assert_eq!(perft(&Game::new(), depth), nodes));
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

criterion_main!(legality, perft_group);
