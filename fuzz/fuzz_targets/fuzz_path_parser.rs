#![no_main]

use libfuzzer_sys::fuzz_target;
use smooth_stroke::{parse_path_data, write_path_data};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(strokes) = parse_path_data(text) {
            let _ = write_path_data(&strokes, 3);
        }
    }
});
