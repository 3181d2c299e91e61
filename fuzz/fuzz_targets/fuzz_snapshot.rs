#![no_main]

//! Snapshot parsing fuzzer.
//!
//! Arbitrary bytes go through snapshot parsing; anything that parses is
//! handed to a decision pass. Neither step may panic.

use libfuzzer_sys::fuzz_target;
use tactician::protocol::parse_tick;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(turn) = parse_tick(text) {
        let actions = tactician::compute_actions(&turn);
        assert!(actions.len() <= turn.own_team().map_or(0, |t| t.units.len()));
    }
});
