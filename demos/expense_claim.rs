use beleg::core::*;
use beleg::lifecycle::{Engine, TransitionEvent};
use beleg::stock::MemoryLedger;
use rust_decimal_macros::dec;

fn main() {
    // Expense claims never touch stock, so an empty ledger is fine.
    let ledger = MemoryLedger::new();
    let engine = Engine::new(&ledger, WorkflowPolicy::default());

    let mut claim = DocumentBuilder::new(DocumentKind::ExpenseClaim, "EXP-2026-00001")
        .description("conference travel, Berlin")
        .add_line(
            LineItemBuilder::new("HOTEL", "hotel night")
                .quantity(dec!(3))
                .unit_price(dec!(120.00))
                .build(),
        )
        .add_line(
            LineItemBuilder::new("TRAIN", "train ticket")
                .quantity(dec!(2))
                .unit_price(dec!(49.50))
                .remarks("return trip")
                .build(),
        )
        .build("lena")
        .expect("claim should build");

    println!("Document: {} ({})", claim.number, claim.kind.code());
    println!("Total:    {}", claim.total.unwrap());
    println!("---");

    // ── Walk the full approval chain ──────────────────────────────────
    let steps = [
        (TransitionEvent::Submit, None),
        (TransitionEvent::Approve, Some("receipts checked")),
        (TransitionEvent::Issue, Some("posted to payroll")),
    ];
    for (event, remarks) in steps {
        let stage = engine
            .request_transition(&mut claim, event, remarks, "dana")
            .expect("transition should be legal");
        println!("{:>8} -> {:?}", event.code(), stage);
    }

    // ── Audit trail ───────────────────────────────────────────────────
    println!("---");
    for entry in &claim.history {
        println!(
            "{}  {:?}  {}  {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.stage,
            entry.actor,
            entry.remarks.as_deref().unwrap_or("-"),
        );
    }
}
