//! Fuzz target for the line auditor.
//!
//! Goal: The auditor should **never panic** on any input.
//! It may report every line, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_script_auditor
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only test valid UTF-8 strings (scripts are read as UTF-8)
    if let Ok(text) = std::str::from_utf8(data) {
        // Auditing arbitrary text - should never panic
        let _ = shellguard_repo::fuzz::audit_source(text);
    }
});
