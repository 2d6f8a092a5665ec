//! Performance benchmarks for the Roster Ranking Engine.
//!
//! Covers the library pipeline on class-sized and year-sized rosters, and the
//! `/rank` endpoint end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use roster_ranking::api::{AppState, RankRequest, create_router};
use roster_ranking::calculation::{compute_average, rank_roster};
use roster_ranking::config::{ConfigLoader, GradingPolicy};
use roster_ranking::models::{RosterRecord, StudentScore};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// Builds a roster with a spread of scores, some final exams and one
/// ungraded student in every twenty.
fn create_roster(student_count: usize) -> Vec<StudentScore> {
    (0..student_count)
        .map(|i| {
            let id = i as i64 + 1;
            if i % 20 == 19 {
                return StudentScore::with_partials(id, None, None);
            }
            let p1 = Decimal::new((i * 37 % 101) as i64, 1);
            let p2 = Decimal::new((i * 53 % 101) as i64, 1);
            let mut score = StudentScore::with_partials(id, Some(p1), Some(p2));
            if i % 4 == 0 {
                score.score_final_exam = Some(Decimal::new((i * 71 % 101) as i64, 1));
            }
            score
        })
        .collect()
}

/// Benchmark: Single student average.
fn bench_single_average(c: &mut Criterion) {
    let score = StudentScore {
        student_id: 1,
        score_partial1: Some(Decimal::new(40, 1)),
        score_partial2: Some(Decimal::new(50, 1)),
        score_final_exam: Some(Decimal::new(60, 1)),
    };

    c.bench_function("single_average", |b| {
        b.iter(|| black_box(compute_average(black_box(&score))))
    });
}

/// Benchmark: Library pipeline on growing rosters.
fn bench_rank_roster(c: &mut Criterion) {
    let policy = GradingPolicy::default();
    let mut group = c.benchmark_group("rank_roster");

    for student_count in [30, 300, 3000].iter() {
        let roster = create_roster(*student_count);

        group.throughput(Throughput::Elements(*student_count as u64));
        group.bench_with_input(
            BenchmarkId::new("students", student_count),
            student_count,
            |b, _| b.iter(|| black_box(rank_roster(black_box(&roster), &policy))),
        );
    }

    group.finish();
}

/// Benchmark: `/rank` over HTTP for one class roster.
fn bench_rank_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let request = RankRequest {
        students: create_roster(30).iter().map(RosterRecord::from).collect(),
    };
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("rank_endpoint_30", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/rank")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_average,
    bench_rank_roster,
    bench_rank_endpoint,
);
criterion_main!(benches);
