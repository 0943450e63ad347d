//! Criterion benchmarks for the balancing loop.
//!
//! Uses seeded random cohorts so runs are comparable across changes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use team_balancer::balance::{BalanceConfig, BalanceRunner};
use team_balancer::model::{Choice, Cohort, Gender, Proficiency, Student, StudentRegistry, TeamRoster};
use team_balancer::swap::generate_candidates;

/// Random cohort of `teams * per_team` students. Choice-3 students are
/// packed into the first teams so the loop has work to do.
fn random_cohort(teams: usize, per_team: usize, seed: u64) -> Cohort {
    let mut rng = StdRng::seed_from_u64(seed);
    let total = teams * per_team;
    let mut registry = StudentRegistry::new();
    let mut roster = TeamRoster::new();

    for t in 0..teams {
        let mut members = Vec::with_capacity(per_team);
        for i in 0..per_team {
            let idx = t * per_team + i;
            let name = format!("s{idx}");
            let choice = if t < teams / 3 {
                Choice::Three
            } else if rng.random_bool(0.5) {
                Choice::One
            } else {
                Choice::Two
            };
            let gender = if rng.random_bool(0.5) { Gender::A } else { Gender::B };
            let proficiency = if rng.random_bool(0.6) {
                Proficiency::Proficient
            } else {
                Proficiency::NotProficient
            };
            let mut student = Student::new(name.clone(), choice, gender, proficiency);
            if rng.random_bool(0.3) {
                student = student.with_friend(format!("s{}", rng.random_range(0..total)));
            }
            if rng.random_bool(0.05) {
                student = student.locked();
            }
            registry.insert(student).expect("unique names");
            members.push(name);
        }
        roster
            .add_team(format!("T{}", t + 1), members)
            .expect("each student placed once");
    }
    Cohort::new(registry, roster)
}

fn bench_balance(c: &mut Criterion) {
    let mut group = c.benchmark_group("balance");
    let config = BalanceConfig::default()
        .with_target_choice3_spread(1)
        .with_target_gender_spread(2)
        .with_target_proficiency_spread(2);

    for &(teams, per_team) in &[(6usize, 8usize), (12, 10), (24, 12)] {
        let cohort = random_cohort(teams, per_team, 42);
        group.bench_with_input(
            BenchmarkId::new("teams", format!("{teams}x{per_team}")),
            &cohort,
            |b, cohort| {
                b.iter(|| {
                    let mut cohort = cohort.clone();
                    black_box(BalanceRunner::run(&mut cohort, &config))
                });
            },
        );
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_candidates");
    for &per_team in &[8usize, 16, 32] {
        let cohort = random_cohort(3, per_team, 7);
        group.bench_with_input(BenchmarkId::new("per_team", per_team), &cohort, |b, cohort| {
            b.iter(|| black_box(generate_candidates(cohort, "T1", "T3")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_balance, bench_generate);
criterion_main!(benches);
