use beleg::core::*;
use beleg::lifecycle::{Engine, TransitionEvent};
use beleg::stock::{MemoryLedger, StockSnapshot};
use rust_decimal_macros::dec;

fn main() {
    let ledger = MemoryLedger::new();
    ledger.set("MAIN", "42", dec!(10));
    let engine = Engine::new(&ledger, WorkflowPolicy::default());

    println!("Before: MAIN/42 = {}", ledger.available("MAIN", "42"));

    // A stocktake found two damaged bags.
    let mut adjustment = DocumentBuilder::new(DocumentKind::StockAdjustment, "ADJ-2026-00001")
        .description("stocktake correction, week 34")
        .owner_store("MAIN")
        .add_line(
            LineItemBuilder::new("42", "espresso beans 1kg")
                .quantity(dec!(-1))
                .unit_price(dec!(10.00))
                .build(),
        )
        .build("karim")
        .expect("adjustment should build");

    engine
        .request_transition(&mut adjustment, TransitionEvent::Submit, None, "karim")
        .expect("submit");

    // Adjustments stay editable while submitted; the recount found a
    // second damaged bag.
    adjustment
        .update_line("42", LineField::Quantity, "-2")
        .expect("line should be editable");

    engine
        .request_transition(
            &mut adjustment,
            TransitionEvent::Approve,
            Some("recount verified"),
            "dana",
        )
        .expect("approve");
    engine
        .request_transition(
            &mut adjustment,
            TransitionEvent::Issue,
            Some("books updated"),
            "dana",
        )
        .expect("issue");

    println!("Stage:  {:?}", adjustment.stage);
    println!("Total:  {}", adjustment.total.unwrap());
    println!("After:  MAIN/42 = {}", ledger.available("MAIN", "42"));
}
