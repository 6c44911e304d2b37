#![no_main]
use chess_rules::chess::core::Move;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(parsed) = Move::from_uci(input) {
            assert_eq!(Move::from_uci(&parsed.to_string()).ok(), Some(parsed));
        }
    }
});
