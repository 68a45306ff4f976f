use beleg::core::*;
use beleg::lifecycle::{Engine, TransitionEvent};
use beleg::stock::{MemoryLedger, StockSnapshot};
use rust_decimal_macros::dec;

fn main() {
    let ledger = MemoryLedger::new();
    ledger.set("MAIN", "42", dec!(20));
    ledger.set("MAIN", "77", dec!(3));
    let engine = Engine::new(&ledger, WorkflowPolicy::default());

    // ── 1. Stock guard refuses an overdrawn requisition ───────────────
    println!("=== Insufficient Stock ===");
    let mut overdrawn = DocumentBuilder::new(DocumentKind::Requisition, "REQ-2026-00001")
        .description("restock front store")
        .owner_store("MAIN")
        .counterparty_store("FRONT")
        .add_line(
            LineItemBuilder::new("77", "paper cups 100pc")
                .quantity(dec!(10))
                .unit_price(dec!(4.25))
                .build(),
        )
        .build("karim")
        .expect("requisition should build");

    match engine.request_transition(&mut overdrawn, TransitionEvent::Submit, None, "karim") {
        Ok(stage) => println!("  Submitted (unexpected): {stage:?}"),
        Err(e) => println!("  Rejected: {e}"),
    }
    println!("  Stage is still {:?}", overdrawn.stage);

    // ── 2. A covered requisition moves stock on Issue ─────────────────
    println!("\n=== Issue ===");
    let mut requisition = DocumentBuilder::new(DocumentKind::Requisition, "REQ-2026-00002")
        .description("restock front store")
        .owner_store("MAIN")
        .counterparty_store("FRONT")
        .add_line(
            LineItemBuilder::new("42", "espresso beans 1kg")
                .quantity(dec!(5))
                .unit_price(dec!(10.00))
                .build(),
        )
        .build("karim")
        .expect("requisition should build");

    let steps = [
        (TransitionEvent::Submit, Some("front store is out")),
        (TransitionEvent::Approve, Some("ok")),
        (TransitionEvent::Issue, Some("handed over")),
    ];
    for (event, remarks) in steps {
        let stage = engine
            .request_transition(&mut requisition, event, remarks, "karim")
            .expect("transition should be legal");
        println!("  {:>7} -> {:?}", event.code(), stage);
    }

    println!("\n  MAIN/42:  {}", ledger.available("MAIN", "42"));
    println!("  FRONT/42: {}", ledger.available("FRONT", "42"));
}
