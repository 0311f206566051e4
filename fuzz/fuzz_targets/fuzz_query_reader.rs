#![no_main]

use libfuzzer_sys::fuzz_target;
use rowquery_core::{read_query, run, Row};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string (ignore invalid UTF-8)
    if let Ok(text) = std::str::from_utf8(data) {
        if text.len() > 10_000 {
            return;
        }

        // Reading and running must never panic
        if let Ok(query) = read_query(text) {
            let rows = vec![
                Row::new().with("id", 1).with("name", "John"),
                Row::new().with("id", 2).with("name", "Jane"),
            ];
            let _ = run(&rows, &query);
        }
    }
});
