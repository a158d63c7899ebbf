#![no_main]

use launchboard::config::LauncherConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing may fail; it must never panic, and validation must accept whatever parsed
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = serde_json::from_str::<LauncherConfig>(s) {
            let preferences = config.preferences.validated();
            assert!(preferences.page_size >= 1);
        }
    }
});
