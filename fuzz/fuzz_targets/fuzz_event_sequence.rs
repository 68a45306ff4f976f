#![no_main]

use beleg::core::{DocumentBuilder, DocumentKind, LineItemBuilder, WorkflowPolicy};
use beleg::lifecycle::{Engine, TransitionEvent};
use beleg::stock::MemoryLedger;
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|data: &[u8]| {
    let ledger = MemoryLedger::new();
    ledger.set("MAIN", "42", Decimal::from(100));
    let engine = Engine::new(&ledger, WorkflowPolicy::default());

    let mut doc = DocumentBuilder::new(DocumentKind::Requisition, "REQ-FUZZ-00001")
        .description("fuzz fixture")
        .owner_store("MAIN")
        .counterparty_store("FRONT")
        .add_line(
            LineItemBuilder::new("42", "fuzz item")
                .quantity(Decimal::from(3))
                .unit_price(Decimal::ONE)
                .build(),
        )
        .build("fuzz")
        .unwrap();

    // Each byte picks an event and whether remarks come along. No byte
    // sequence may panic or leave the document on an unknown stage.
    for byte in data {
        let event = TransitionEvent::ALL[usize::from(byte % 5)];
        let remarks = (byte & 0x80 != 0).then_some("fuzz step");
        let _ = engine.request_transition(&mut doc, event, remarks, "fuzz");
        assert!(beleg::core::Stage::from_code(doc.stage.code()).is_some());
    }
});
