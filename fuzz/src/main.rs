//! AFL harness for the TLC configuration codec.
//!
//! Any input is accepted by the parser, so the interesting failure is a
//! rendering that does not survive being parsed again.

unsafe extern "C" {
    fn __AFL_LOOP(cnt: u32) -> i32;
}
use std::io::{self, Read};

use tlacli::cfg::{format, parse};

/// Configuration files are small; cap each testcase.
const MAX_INPUT: usize = 64 * 1024;

fn main() {
    let mut data = Vec::with_capacity(MAX_INPUT);
    loop {
        if unsafe { __AFL_LOOP(1000) } == 0 {
            break;
        }
        data.clear();
        if io::stdin()
            .take(MAX_INPUT as u64)
            .read_to_end(&mut data)
            .is_err()
        {
            return;
        }

        let text = String::from_utf8_lossy(&data);
        let once = format(&parse(&text));
        let twice = format(&parse(&once));
        // Panic on instability so AFL records a crash.
        assert_eq!(once, twice, "rendering is not stable");
    }
}
