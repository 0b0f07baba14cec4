use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use padel_americano::{
    Match, PlayerName, Side, leaderboard,
    schedule::scheduler,
};

fn roster(n: usize) -> Vec<PlayerName> {
    (0..n).map(|i| format!("player{i}")).collect()
}

/// Helper to build a fully scored schedule for leaderboard benches.
fn finished_rounds(players: &[PlayerName], num_courts: usize) -> Vec<Vec<Match>> {
    let mut rounds = scheduler::build(players, num_courts).rounds;
    for (i, m) in rounds.iter_mut().flatten().enumerate() {
        m.set_score(Side::A, &((i * 3 + 1) % 9).to_string());
        m.set_score(Side::B, &((i * 5 + 2) % 9).to_string());
        m.finished = true;
    }
    rounds
}

/// Benchmark full schedule generation across roster sizes.
fn bench_schedule_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule_build");
    for n in [8, 16, 24] {
        let players = roster(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &players, |b, players| {
            b.iter(|| scheduler::build(players, 2));
        });
    }
    group.finish();
}

/// Benchmark the full-history leaderboard recompute, which runs after
/// every finished or reopened match.
fn bench_leaderboard_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaderboard_recompute");
    for n in [8, 16, 24] {
        let players = roster(n);
        let rounds = finished_rounds(&players, 2);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(players, rounds),
            |b, (players, rounds)| {
                b.iter(|| leaderboard::compute(players, rounds));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_schedule_build, bench_leaderboard_recompute);
criterion_main!(benches);
