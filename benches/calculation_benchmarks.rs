//! Performance benchmarks for the Pricing Engine.
//!
//! Covers the pure calculation path and a full quote through the HTTP
//! router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use pricing_engine::api::{AppState, QuoteRequest, create_router};
use pricing_engine::calculation::{
    CurrencyFormat, build_quote, compute_selling_price, format_money, resolve_bulk_price,
};
use pricing_engine::config::ConfigLoader;
use pricing_engine::models::{PricingInput, PricingTier};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn default_input() -> PricingInput {
    ConfigLoader::builtin().defaults().input.clone()
}

/// Creates `count` tiers every 10 units, each 1% deeper than the last.
fn create_tiers(count: u32) -> Vec<PricingTier> {
    (1..=count)
        .map(|i| PricingTier::new(i * 10, Decimal::from(i.min(100))))
        .collect()
}

fn bench_selling_price(c: &mut Criterion) {
    let input = default_input();
    c.bench_function("compute_selling_price", |b| {
        b.iter(|| compute_selling_price(black_box(&input)).unwrap())
    });
}

fn bench_bulk_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_bulk_price");
    let base_price = Decimal::new(182996625, 7);

    for tier_count in [3u32, 30, 300] {
        let tiers = create_tiers(tier_count);
        group.throughput(Throughput::Elements(tier_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(tier_count),
            &tiers,
            |b, tiers| b.iter(|| resolve_bulk_price(black_box(base_price), 1_000, tiers)),
        );
    }

    group.finish();
}

fn bench_format_money(c: &mut Criterion) {
    let amount = Decimal::new(123456789, 2);
    c.bench_function("format_money", |b| {
        b.iter(|| format_money(black_box(amount)))
    });
}

fn bench_build_quote(c: &mut Criterion) {
    let input = default_input();
    let tiers = create_tiers(3);
    let format = CurrencyFormat::brl();

    c.bench_function("build_quote", |b| {
        b.iter(|| build_quote(black_box(&input), &tiers, &[1, 75], &format).unwrap())
    });
}

fn bench_quote_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::builtin();
    let body = serde_json::to_string(&QuoteRequest::from(config.defaults())).unwrap();
    let router = create_router(AppState::new(config));

    c.bench_function("post_quote", |b| {
        b.to_async(&rt).iter(|| {
            let router = router.clone();
            let body = body.clone();
            async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/quote")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response)
            }
        })
    });
}

criterion_group!(
    benches,
    bench_selling_price,
    bench_bulk_resolution,
    bench_format_money,
    bench_build_quote,
    bench_quote_endpoint
);
criterion_main!(benches);
