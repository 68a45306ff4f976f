#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        if let Ok(mut doc) = serde_json::from_str::<beleg::core::Document>(s) {
            let _ = beleg::core::validate_document(
                &doc,
                &beleg::core::ValidationOptions::default(),
            );
            let _ = beleg::core::recompute(&mut doc);
            let _ = serde_json::to_string(&doc);
        }
    }
});
