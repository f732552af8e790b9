#![no_main]

use libfuzzer_sys::fuzz_target;

// Any record that decodes must validate without panicking.
fuzz_target!(|data: &[u8]| {
    if let Ok(record) = serde_json::from_slice::<apilint::Record>(data) {
        let _ = apilint::validate_endpoint(&record, &apilint::Validators::default());
    }
});
