//! Writer für Path-Data-Strings.

use crate::core::Point;
use crate::stroke::{Stroke, StrokeSegment};

/// Schreibt alle Striche als Path-Data.
///
/// # Parameter
/// - `strokes`: Die zu exportierenden Striche in Zeichenreihenfolge
/// - `precision`: Nachkommastellen; abschließende Nullen werden entfernt
pub fn write_path_data(strokes: &[Stroke], precision: usize) -> String {
    let mut output = String::new();

    for stroke in strokes {
        let Some(first) = stroke.segments.first() else {
            continue;
        };
        let mut pen = first.start();
        push_command(&mut output, 'M', &[pen], precision);

        for segment in &stroke.segments {
            if segment.start() != pen {
                // Nicht zusammenhängend → neu ansetzen
                push_command(&mut output, 'M', &[segment.start()], precision);
            }
            match segment {
                StrokeSegment::Dot(p) => push_command(&mut output, 'L', &[*p], precision),
                StrokeSegment::Line { end, .. } => {
                    push_command(&mut output, 'L', &[*end], precision)
                }
                StrokeSegment::Curve(c) => {
                    push_command(&mut output, 'C', &[c.c1, c.c2, c.end], precision)
                }
            }
            pen = segment.end();
        }
    }

    output
}

fn push_command(output: &mut String, command: char, points: &[Point], precision: usize) {
    if !output.is_empty() {
        output.push(' ');
    }
    output.push(command);
    for p in points {
        output.push_str(&format!(
            " {} {}",
            format_number(p.x, precision),
            format_number(p.y, precision)
        ));
    }
}

/// Formatiert eine Koordinate mit fester Genauigkeit ohne überflüssige Nullen.
///
/// `-0` wird als `0` ausgegeben.
pub fn format_number(value: f64, precision: usize) -> String {
    let mut text = format!("{:.*}", precision, value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}
