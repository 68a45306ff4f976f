#![no_main]

use beleg::core::{DocumentBuilder, DocumentKind, LineField, LineItemBuilder};
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    let mut doc = DocumentBuilder::new(DocumentKind::StockAdjustment, "ADJ-FUZZ-00001")
        .description("fuzz fixture")
        .owner_store("MAIN")
        .add_line(
            LineItemBuilder::new("42", "fuzz item")
                .quantity(Decimal::ONE)
                .unit_price(Decimal::ONE)
                .build(),
        )
        .build("fuzz")
        .unwrap();

    // Raw values through every addressable field must coerce, never panic.
    doc.update_line("42", LineField::Quantity, raw).unwrap();
    doc.update_line("42", LineField::UnitPrice, raw).unwrap();
    doc.update_line("42", LineField::Remarks, raw).unwrap();
    let _ = beleg::core::recompute(&mut doc);
    let _ = beleg::core::validate_document(&doc, &beleg::core::ValidationOptions::default());
});
