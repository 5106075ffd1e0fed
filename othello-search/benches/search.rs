use criterion::*;

#[cfg(unix)]
use pprof::criterion::{Output, PProfProfiler};

use othello_rules::test_utils;
use othello_rules::GameState;

fn criterion_best_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_move");
    group.sample_size(20);

    let midgame = test_utils::random_game(42)[20];
    for depth in 1..6 {
        group.bench_with_input(BenchmarkId::new("opening", depth), &depth, |b, &depth| {
            b.iter(|| othello_search::best_move(black_box(GameState::default()), depth))
        });
        group.bench_with_input(BenchmarkId::new("midgame", depth), &depth, |b, &depth| {
            b.iter(|| othello_search::best_move(black_box(midgame), depth))
        });
    }

    group.finish();
}

fn criterion_full_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_full_game");
    group.sample_size(10);

    for depth in 1..4 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| othello_search::simulate_full_game(black_box(GameState::default()), depth))
        });
    }

    group.finish();
}

#[cfg(unix)]
criterion_group! {
    name = search;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_best_move, criterion_full_game
}

#[cfg(not(unix))]
criterion_group! {
    name = search;
    config = Criterion::default();
    targets = criterion_best_move, criterion_full_game
}

criterion_main!(search);
