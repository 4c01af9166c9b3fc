#![no_main]
use libfuzzer_sys::fuzz_target;
use perftdiff::{compare, Record};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(record) = Record::parse(input) else {
        return;
    };
    // Comparing a record with itself never reports differences.
    if let Ok(comparison) = compare(&record, &record) {
        assert!(comparison.is_match());
        let (first, second) = comparison.totals();
        assert_eq!(first, second);
    }
});
