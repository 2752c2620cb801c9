//! Fuzz target for model file parsing and validation.
//!
//! JSON and TOML model parsing must handle arbitrary input without
//! panicking, and so must validating whatever parses.

#![no_main]

use fmax_config::{validate_model, ModelConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    for parsed in [ModelConfig::from_json_str(text), ModelConfig::from_toml_str(text)] {
        if let Ok(model) = parsed {
            let _ = validate_model(&model);
        }
    }
});
