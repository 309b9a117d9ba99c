//! Kubisches Bézier-Segment zwischen zwei Knoten (für Renderer und Serializer).

use super::point::Point;
use serde::{Deserialize, Serialize};

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Ein vollständiges kubisches Segment: Start-Knoten, zwei Kontrollpunkte, End-Knoten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub start: Point,
    pub c1: Point,
    pub c2: Point,
    pub end: Point,
}

impl CubicSegment {
    pub fn new(start: Point, c1: Point, c2: Point, end: Point) -> Self {
        Self { start, c1, c2, end }
    }

    /// Position auf dem Segment für t ∈ [0, 1].
    pub fn point_at(&self, t: f64) -> Point {
        cubic_bezier(self.start, self.c1, self.c2, self.end, t)
    }

    /// Approximierte Länge über `samples` Polylinien-Abschnitte.
    pub fn approx_length(&self, samples: usize) -> f64 {
        let samples = samples.max(1);
        let mut length = 0.0;
        let mut prev = self.start;
        for i in 1..=samples {
            let p = self.point_at(i as f64 / samples as f64);
            length += prev.distance(p);
            prev = p;
        }
        length
    }

    /// Dichte Punktliste inkl. Start- und Endpunkt (für Polylinien-Renderer).
    pub fn flatten(&self, samples: usize) -> Vec<Point> {
        let samples = samples.max(1);
        (0..=samples)
            .map(|i| self.point_at(i as f64 / samples as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn arch() -> CubicSegment {
        CubicSegment::new(
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        )
    }

    #[test]
    fn test_point_at_endpoints() {
        let seg = arch();
        assert_eq!(seg.point_at(0.0), seg.start);
        assert_eq!(seg.point_at(1.0), seg.end);
    }

    #[test]
    fn test_point_at_midpoint_of_symmetric_arch() {
        let mid = arch().point_at(0.5);
        assert_abs_diff_eq!(mid.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.y, 7.5, epsilon = 1e-12);
    }

    #[test]
    fn test_approx_length_of_straight_segment() {
        let seg = CubicSegment::new(
            Point::ZERO,
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        );
        assert_abs_diff_eq!(seg.approx_length(32), 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_flatten_includes_both_ends() {
        let seg = arch();
        let pts = seg.flatten(8);
        assert_eq!(pts.len(), 9);
        assert_eq!(pts[0], seg.start);
        assert_eq!(pts[8], seg.end);
    }
}
