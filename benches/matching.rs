use criterion::{Criterion, criterion_group, criterion_main};
use prorata_book::Book;
use rand::Rng;

/// Builds a book with `depth` resting sell orders at a single price level,
/// simulating the pro-rata contention the teacher's FIFO bench never had to
/// model (many makers at one price competing for a pro-rata share).
fn seeded_book(depth: u64) -> Book {
    let mut book = Book::new("SYM");
    let mut rng = rand::rng();
    for id in 0..depth {
        let size = rng.random_range(1..=1000);
        book.add_order(id, format!("maker-{id}"), "SYM", size, false, 100)
            .unwrap();
    }
    book
}

fn bench_pro_rata_contention(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_order_crossing_depth");
    for depth in [10u64, 100, 1_000] {
        group.bench_function(format!("depth_{depth}"), |b| {
            b.iter_batched(
                || seeded_book(depth),
                |mut book| {
                    let total: i32 = book.snapshot().asks.iter().map(|(_, s)| *s).sum();
                    book.add_order(u64::MAX, "taker", "SYM", total / 2, true, 100)
                        .unwrap();
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_rest_and_cancel(c: &mut Criterion) {
    c.bench_function("rest_then_cancel", |b| {
        b.iter_batched(
            || Book::new("SYM"),
            |mut book| {
                book.add_order(1, "A", "SYM", 10, true, 100).unwrap();
                book.cancel(1);
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_pro_rata_contention, bench_rest_and_cancel);
criterion_main!(benches);
