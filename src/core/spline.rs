//! Batch-Spline-Solver: glatte kubische Bézier-Kontrollpunkte durch alle Knoten eines Strichs.
//!
//! Löst das feste tridiagonale Gleichungssystem einmal pro Aufruf
//! (Thomas-Algorithmus, O(n)). Beide Achsen werden komponentenweise über
//! `DVec2` gelöst; die Koeffizienten sind für x und y identisch.
//!
//! Segment `i` verläuft von `points[i]` nach `points[i + 1]` mit den
//! Kontrollpunkten `(first[i], second[i])`.

use super::bezier::CubicSegment;
use super::point::{midpoint, reflect, ControlPointPair, Point};

/// Mindestanzahl an Knoten, ab der eine Kurve berechnet wird.
pub const MIN_CURVE_POINTS: usize = 3;

/// Diagonal-Koeffizient der ersten Zeile.
const DIAG_FIRST: f64 = 2.0;
/// Diagonal-Koeffizient der inneren Zeilen.
const DIAG_INTERIOR: f64 = 4.0;
/// Diagonal-Koeffizient der letzten Zeile.
const DIAG_LAST: f64 = 3.5;

/// Ergebnis des Batch-Solvers: erste und zweite Kontrollpunkte, index-gleich.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoints {
    /// Erster Kontrollpunkt je Segment (Startseite)
    pub first: Vec<Point>,
    /// Zweiter Kontrollpunkt je Segment (Endseite)
    pub second: Vec<Point>,
}

impl ControlPoints {
    /// Anzahl der Segmente.
    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Kontrollpunkt-Paar des Segments `index`.
    pub fn pair(&self, index: usize) -> Option<ControlPointPair> {
        let c1 = *self.first.get(index)?;
        let c2 = *self.second.get(index)?;
        Some(ControlPointPair::new(c1, c2))
    }

    /// Alle Paare in Segment-Reihenfolge.
    pub fn pairs(&self) -> impl Iterator<Item = ControlPointPair> + '_ {
        self.first
            .iter()
            .zip(&self.second)
            .map(|(&c1, &c2)| ControlPointPair::new(c1, c2))
    }

    /// Setzt die Kontrollpunkte mit den Knoten zu vollständigen Segmenten zusammen.
    ///
    /// `points` muss die Knotenfolge sein, aus der die Kontrollpunkte berechnet wurden.
    pub fn segments(&self, points: &[Point]) -> Vec<CubicSegment> {
        points
            .windows(2)
            .zip(self.pairs())
            .map(|(knots, pair)| CubicSegment::new(knots[0], pair.c1, pair.c2, knots[1]))
            .collect()
    }
}

/// Berechnet die Bézier-Kontrollpunkte für eine geordnete Knotenfolge.
///
/// Gibt `None` zurück bei weniger als [`MIN_CURVE_POINTS`] Knoten; der Aufrufer
/// zeichnet dann gerade Linien. Duplikate und kollineare Abschnitte sind erlaubt.
pub fn fit(points: &[Point]) -> Option<ControlPoints> {
    if points.len() < MIN_CURVE_POINTS {
        return None;
    }
    let n = points.len() - 1;

    let rhs = build_rhs(points);
    let first = solve_tridiagonal(&rhs);

    let mut second = Vec::with_capacity(n);
    for i in 0..n - 1 {
        second.push(reflect(first[i + 1], points[i + 1]));
    }
    second.push(midpoint(points[n], first[n - 1]));

    Some(ControlPoints { first, second })
}

/// Rechte Seite des Systems (Länge `n = points.len() - 1`).
fn build_rhs(points: &[Point]) -> Vec<Point> {
    let n = points.len() - 1;
    let mut rhs = Vec::with_capacity(n);
    rhs.push(points[0] + 2.0 * points[1]);
    for i in 1..n - 1 {
        rhs.push(4.0 * points[i] + 2.0 * points[i + 1]);
    }
    rhs.push((8.0 * points[n - 1] + points[n]) / 2.0);
    rhs
}

/// Thomas-Algorithmus für das feste Muster (Diagonale 2 / 4 / 3.5, Nebendiagonalen 1).
///
/// Diagonal dominant, daher ohne Pivotisierung stabil.
fn solve_tridiagonal(rhs: &[Point]) -> Vec<Point> {
    let n = rhs.len();
    let mut x = Vec::with_capacity(n);
    // Eliminationsfaktoren der Vorwärtsrunde
    let mut factors = vec![0.0f64; n];

    let mut pivot = DIAG_FIRST;
    x.push(rhs[0] / pivot);
    for i in 1..n {
        factors[i] = 1.0 / pivot;
        let diag = if i < n - 1 { DIAG_INTERIOR } else { DIAG_LAST };
        pivot = diag - factors[i];
        let value = (rhs[i] - x[i - 1]) / pivot;
        x.push(value);
    }

    for i in (0..n - 1).rev() {
        let next = x[i + 1];
        x[i] -= factors[i + 1] * next;
    }

    x
}
