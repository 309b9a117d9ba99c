#![no_main]

use libfuzzer_sys::fuzz_target;
use smooth_stroke::{fit, Point, SmoothingOptions, StrokeBuilder};

fuzz_target!(|data: &[u8]| {
    let points: Vec<Point> = data
        .chunks_exact(4)
        .map(|c| {
            let x = i16::from_le_bytes([c[0], c[1]]) as f64;
            let y = i16::from_le_bytes([c[2], c[3]]) as f64;
            Point::new(x, y)
        })
        .collect();
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    let mut builder = StrokeBuilder::new(SmoothingOptions::default());
    builder.begin(*first);
    for p in rest {
        builder.add_point(*p);
    }
    let _ = builder.end();
    let _ = fit(&points);
});
