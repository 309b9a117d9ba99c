//! Lifecycle eines Strichs: Punkte filtern, Streaming-Generator füttern, Paare dämpfen.
//!
//! **Ablauf:** `begin()` beim Zeiger-Down → `add_point()` pro Bewegung →
//! `end()` beim Zeiger-Up (oder `cancel()`).

use super::segment::{straight_segments, Stroke, StrokeSegment};
use crate::core::{dampen_pair, CubicSegment, Point, SplineStream};
use crate::shared::SmoothingOptions;

/// Baut genau einen Strich zur Zeit inkrementell auf.
#[derive(Debug, Clone)]
pub struct StrokeBuilder {
    options: SmoothingOptions,
    stream: SplineStream,
    knots: Vec<Point>,
    segments: Vec<StrokeSegment>,
    /// Index des letzten Knotens, bis zu dem Segmente existieren
    covered: usize,
    active: bool,
}

impl StrokeBuilder {
    pub fn new(options: SmoothingOptions) -> Self {
        let stream = SplineStream::new(options.seed_strategy);
        Self {
            options,
            stream,
            knots: Vec::new(),
            segments: Vec::new(),
            covered: 0,
            active: false,
        }
    }

    pub fn options(&self) -> &SmoothingOptions {
        &self.options
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Bisher akzeptierte Knoten des laufenden Strichs.
    pub fn knots(&self) -> &[Point] {
        &self.knots
    }

    /// Bisher erzeugte Segmente des laufenden Strichs.
    pub fn segments(&self) -> &[StrokeSegment] {
        &self.segments
    }

    /// Beginnt einen neuen Strich; ein noch laufender wird verworfen.
    pub fn begin(&mut self, point: Point) {
        if self.active {
            log::debug!(
                "Laufender Strich mit {} Knoten verworfen",
                self.knots.len()
            );
        }
        self.reset();
        self.active = true;
        self.stream.start();
        self.accept(point);
    }

    /// Nimmt einen Zeigerpunkt entgegen und liefert die dadurch neu entstandenen Segmente.
    ///
    /// Punkte zu nah am letzten Knoten werden ignoriert (leere Rückgabe).
    pub fn add_point(&mut self, point: Point) -> &[StrokeSegment] {
        let before = self.segments.len();
        let too_close = self
            .knots
            .last()
            .is_some_and(|last| last.distance(point) < self.options.min_point_distance);
        if self.active && !too_close {
            self.accept(point);
        }
        &self.segments[before..]
    }

    /// Schließt den Strich ab und füllt nicht geglättete Lücken mit Linien.
    pub fn end(&mut self) -> Option<Stroke> {
        if !self.active {
            return None;
        }
        self.stream.stop();

        let last_index = self.knots.len().saturating_sub(1);
        if self.knots.len() == 1 {
            self.segments = straight_segments(&self.knots);
        } else {
            self.fill_lines(last_index);
        }

        let stroke = Stroke {
            knots: std::mem::take(&mut self.knots),
            segments: std::mem::take(&mut self.segments),
        };
        log::debug!(
            "Strich abgeschlossen: {} Knoten, {} Segmente ({} Kurven)",
            stroke.knots.len(),
            stroke.segments.len(),
            stroke.curve_count()
        );
        self.reset();
        Some(stroke)
    }

    /// Bricht den laufenden Strich ohne Ergebnis ab.
    pub fn cancel(&mut self) {
        self.stream.stop();
        self.reset();
    }

    fn reset(&mut self) {
        self.knots.clear();
        self.segments.clear();
        self.covered = 0;
        self.active = false;
    }

    fn accept(&mut self, point: Point) {
        self.knots.push(point);
        let Some(pair) = self.stream.supply(point) else {
            return;
        };

        let end_index = self.knots.len() - 1;
        let stride = self.stream.strategy().knot_stride();
        let Some(start_index) = end_index.checked_sub(stride) else {
            return;
        };

        let pair = match self.options.dampening_limit() {
            Some(limit) => dampen_pair(pair, point, limit),
            None => pair,
        };

        self.fill_lines(start_index);
        self.segments.push(StrokeSegment::Curve(CubicSegment::new(
            self.knots[start_index],
            pair.c1,
            pair.c2,
            point,
        )));
        self.covered = end_index;
    }

    /// Linien von `covered` bis einschließlich Knoten `until`.
    fn fill_lines(&mut self, until: usize) {
        while self.covered < until {
            let start = self.knots[self.covered];
            let end = self.knots[self.covered + 1];
            self.segments.push(StrokeSegment::Line { start, end });
            self.covered += 1;
        }
    }
}

impl Default for StrokeBuilder {
    fn default() -> Self {
        Self::new(SmoothingOptions::default())
    }
}
