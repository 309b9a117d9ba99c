//! Fertige Strich-Geometrie: Knoten plus Segmente in Zeichenreihenfolge.

use crate::core::{fit, CubicSegment, Point};
use serde::{Deserialize, Serialize};

/// Ein zeichenbares Stück eines Strichs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StrokeSegment {
    /// Einzelner Punkt (Strich mit nur einem Knoten)
    Dot(Point),
    /// Gerade Linie (Fallback, solange keine Kurve verfügbar ist)
    Line { start: Point, end: Point },
    /// Geglättetes kubisches Segment
    Curve(CubicSegment),
}

impl StrokeSegment {
    pub fn start(&self) -> Point {
        match self {
            StrokeSegment::Dot(p) => *p,
            StrokeSegment::Line { start, .. } => *start,
            StrokeSegment::Curve(seg) => seg.start,
        }
    }

    pub fn end(&self) -> Point {
        match self {
            StrokeSegment::Dot(p) => *p,
            StrokeSegment::Line { end, .. } => *end,
            StrokeSegment::Curve(seg) => seg.end,
        }
    }

    pub fn is_curve(&self) -> bool {
        matches!(self, StrokeSegment::Curve(_))
    }
}

/// Ein abgeschlossener Strich.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stroke {
    /// Akzeptierte Knoten in Eingabereihenfolge
    pub knots: Vec<Point>,
    /// Lückenlose Segmentfolge vom ersten bis zum letzten Knoten
    pub segments: Vec<StrokeSegment>,
}

impl Stroke {
    /// Fit-after-stroke: berechnet alle Segmente einmalig mit dem Batch-Solver.
    ///
    /// Unter drei Knoten entstehen Linien bzw. ein Punkt.
    pub fn fitted(knots: Vec<Point>) -> Self {
        let segments = match fit(&knots) {
            Some(controls) => controls
                .segments(&knots)
                .into_iter()
                .map(StrokeSegment::Curve)
                .collect(),
            None => straight_segments(&knots),
        };
        Self { knots, segments }
    }

    /// Baut die Segmente aus den eigenen Knoten per Batch-Solver neu auf.
    pub fn refit(&self) -> Self {
        Self::fitted(self.knots.clone())
    }

    pub fn curve_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_curve()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }
}

/// Linien zwischen aufeinanderfolgenden Knoten; ein einzelner Knoten wird zum Punkt.
pub fn straight_segments(knots: &[Point]) -> Vec<StrokeSegment> {
    match knots {
        [] => Vec::new(),
        [single] => vec![StrokeSegment::Dot(*single)],
        _ => knots
            .windows(2)
            .map(|w| StrokeSegment::Line {
                start: w[0],
                end: w[1],
            })
            .collect(),
    }
}
