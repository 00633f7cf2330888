//! Benchmarks for the record filter and stats paths
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use versozap_admin::domain::{
    filter_logs, filter_users, log_stats, user_stats, LogCategory, LogEntry, LogLevel, LogQuery,
    ReadingPlan, StatusFilter, User, UserQuery,
};

fn create_test_users(count: usize) -> Vec<User> {
    (0..count)
        .map(|i| User {
            id: i as u64,
            name: Some(format!("Usuário {}", i)),
            email: Some(format!("usuario{}@email.com", i)),
            phone: Some(format!("119{:08}", i)),
            bible_version: Some("ARC".to_string()),
            reading_plan: if i % 2 == 0 {
                ReadingPlan::Chronological
            } else {
                ReadingPlan::ByBook
            },
            send_time: if i % 3 == 0 {
                None
            } else {
                Some("08:00".to_string())
            },
        })
        .collect()
}

fn create_test_logs(count: usize) -> Vec<LogEntry> {
    let levels = LogLevel::all();
    let categories = LogCategory::all();

    (0..count)
        .map(|i| {
            LogEntry::new(
                i as u64,
                chrono::Utc::now(),
                levels[i % levels.len()],
                categories[i % categories.len()],
                format!("Mensagem enviada com sucesso para +55119{:08}", i),
            )
            .detail("userId", i as u64)
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [100, 1000, 10000] {
        let users = create_test_users(size);
        let logs = create_test_logs(size);

        group.throughput(Throughput::Elements(size as u64));

        let query = UserQuery {
            search: Some("usuario7".to_string()),
            status: StatusFilter::Active,
        };
        group.bench_function(format!("users_search_{}", size), |b| {
            b.iter(|| filter_users(black_box(users.clone()), black_box(&query)))
        });

        let query = LogQuery {
            search: Some("sucesso".to_string()),
            level: Some(LogLevel::Error),
            category: None,
        };
        group.bench_function(format!("logs_search_{}", size), |b| {
            b.iter(|| filter_logs(black_box(logs.clone()), black_box(&query)))
        });
    }

    group.finish();
}

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");

    for size in [100, 1000, 10000] {
        let users = create_test_users(size);
        let logs = create_test_logs(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("user_stats_{}", size), |b| {
            b.iter(|| user_stats(black_box(&users)))
        });

        group.bench_function(format!("log_stats_{}", size), |b| {
            b.iter(|| log_stats(black_box(&logs)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_stats);
criterion_main!(benches);
