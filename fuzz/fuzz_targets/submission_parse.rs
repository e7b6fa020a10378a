#![no_main]

use libfuzzer_sys::fuzz_target;
use scoring::{Selections, StudentRecord};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(selections) = serde_json::from_str::<Selections>(text) {
        let _ = StudentRecord::assemble(&selections);
    }
});
