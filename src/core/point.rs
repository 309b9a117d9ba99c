//! Punkt- und Kontrollpunkt-Typen plus die Spiegel-Hilfsfunktionen.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Ein Abtastpunkt in Koordinaten der Zeichenfläche.
///
/// Reiner Werttyp, keine Identität über die Koordinaten hinaus.
pub type Point = DVec2;

/// Die beiden Bézier-Kontrollpunkte des kubischen Segments, das an einem Knoten endet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPointPair {
    /// Kontrollpunkt auf der Startseite des Segments
    pub c1: Point,
    /// Kontrollpunkt auf der Endseite des Segments
    pub c2: Point,
}

impl ControlPointPair {
    pub fn new(c1: Point, c2: Point) -> Self {
        Self { c1, c2 }
    }
}

/// Punktspiegelung von `point` durch `anchor`: `2·anchor − point`.
pub fn reflect(point: Point, anchor: Point) -> Point {
    2.0 * anchor - point
}

/// Komponentenweiser Mittelwert zweier Punkte.
pub fn midpoint(a: Point, b: Point) -> Point {
    (a + b) / 2.0
}
