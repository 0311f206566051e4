#![no_main]

use libfuzzer_sys::fuzz_target;
use rowquery_ingest::CsvLoader;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if text.len() > 100_000 {
            return;
        }

        // Malformed input must surface as an error, never a panic
        let _ = CsvLoader::new().load_str(text);
    }
});
