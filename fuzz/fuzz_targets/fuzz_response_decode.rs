#![no_main]

use libfuzzer_sys::fuzz_target;
use snowtide::protocol::LoginResponse;

fuzz_target!(|data: &[u8]| {
    // Response bodies arrive as arbitrary bytes before decoding; the
    // envelope parser must reject garbage without panicking.
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = serde_json::from_str::<LoginResponse>(text);
    }
});
