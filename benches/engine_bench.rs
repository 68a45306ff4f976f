use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use beleg::core::*;
use beleg::lifecycle::{Engine, TransitionEvent};
use beleg::stock::{MemoryLedger, check_availability};

fn build_10_line_requisition() -> Document {
    let mut builder = DocumentBuilder::new(DocumentKind::Requisition, "BENCH-001")
        .description("benchmark requisition")
        .owner_store("MAIN")
        .counterparty_store("FRONT");
    for i in 1..=10 {
        builder = builder.add_line(
            LineItemBuilder::new(i.to_string(), format!("item {i}"))
                .quantity(dec!(5))
                .unit_price(dec!(9.99))
                .build(),
        );
    }
    builder.build("bench").unwrap()
}

fn build_1000_line_claim() -> Document {
    let mut builder = DocumentBuilder::new(DocumentKind::ExpenseClaim, "BENCH-BIG")
        .description("benchmark claim");
    for i in 1..=1000 {
        builder = builder.add_line(
            LineItemBuilder::new(i.to_string(), format!("receipt {i}"))
                .quantity(dec!(2))
                .unit_price(dec!(9.99))
                .build(),
        );
    }
    builder.build("bench").unwrap()
}

fn stocked_ledger() -> MemoryLedger {
    let ledger = MemoryLedger::new();
    for i in 1..=10 {
        ledger.set("MAIN", i.to_string(), dec!(1000));
    }
    ledger
}

// ── Document construction and totals ───────────────────────────────

fn bench_build_document(c: &mut Criterion) {
    c.bench_function("build_requisition_10_lines", |b| {
        b.iter(|| black_box(build_10_line_requisition()));
    });
}

fn bench_recompute_1000_lines(c: &mut Criterion) {
    let mut doc = build_1000_line_claim();
    c.bench_function("recompute_1000_lines", |b| {
        b.iter(|| black_box(recompute(black_box(&mut doc))));
    });
}

// ── Validation ─────────────────────────────────────────────────────

fn bench_validate(c: &mut Criterion) {
    let doc = build_10_line_requisition();
    c.bench_function("validate_10_lines", |b| {
        b.iter(|| black_box(validate_document(black_box(&doc), &ValidationOptions::default())));
    });

    let big = build_1000_line_claim();
    c.bench_function("validate_1000_lines", |b| {
        b.iter(|| black_box(validate_document(black_box(&big), &ValidationOptions::default())));
    });
}

fn bench_stock_check(c: &mut Criterion) {
    let doc = build_10_line_requisition();
    let ledger = stocked_ledger();
    let policy = WorkflowPolicy::default();
    c.bench_function("check_availability_10_lines", |b| {
        b.iter(|| black_box(check_availability(black_box(&doc), &ledger, &policy)));
    });
}

// ── Lifecycle ──────────────────────────────────────────────────────

fn bench_full_lifecycle(c: &mut Criterion) {
    c.bench_function("lifecycle_draft_to_issued", |b| {
        b.iter(|| {
            let ledger = stocked_ledger();
            let engine = Engine::new(&ledger, WorkflowPolicy::default());
            let mut doc = build_10_line_requisition();
            engine
                .request_transition(&mut doc, TransitionEvent::Submit, Some("bench"), "bench")
                .unwrap();
            engine
                .request_transition(&mut doc, TransitionEvent::Approve, Some("bench"), "bench")
                .unwrap();
            engine
                .request_transition(&mut doc, TransitionEvent::Issue, Some("bench"), "bench")
                .unwrap();
            black_box(doc)
        });
    });
}

// ── Persistence ────────────────────────────────────────────────────

fn bench_json_round_trip(c: &mut Criterion) {
    let doc = build_10_line_requisition();
    let json = serde_json::to_string(&doc).unwrap();

    c.bench_function("json_serialize_10_lines", |b| {
        b.iter(|| black_box(serde_json::to_string(black_box(&doc))));
    });
    c.bench_function("json_parse_10_lines", |b| {
        b.iter(|| black_box(serde_json::from_str::<Document>(black_box(&json))));
    });
}

criterion_group!(
    benches,
    bench_build_document,
    bench_recompute_1000_lines,
    bench_validate,
    bench_stock_check,
    bench_full_lifecycle,
    bench_json_round_trip,
);
criterion_main!(benches);
