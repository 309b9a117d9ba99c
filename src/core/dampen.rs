//! Dämpfung von Kontrollpunkten gegen Überschwinger bei großen Sprüngen im Eingabestrom.
//!
//! Liegt ein Kontrollpunkt weiter als `max_distance` vom Knoten entfernt, wird er
//! so oft halbiert zum Knoten gezogen, bis der Abstand im Limit liegt.

use super::point::{midpoint, ControlPointPair, Point};

/// Obergrenze der Halbierungsschritte.
///
/// Deckt den gesamten f64-Exponentenbereich ab (2^1024 bis 2^-1074), bei endlichen
/// Abständen wird das Limit also immer erreicht, bevor die Schleife abbricht.
pub const MAX_DAMPEN_STEPS: u32 = 2100;

/// Dämpft einen Kontrollpunkt in Richtung `knot` und liefert die Anzahl der Schritte mit.
///
/// Nicht-endliche Abstände lassen den Punkt unverändert.
pub fn dampen_with_steps(control: Point, knot: Point, max_distance: f64) -> (Point, u32) {
    let mut distance = control.distance(knot);
    if !distance.is_finite() {
        return (control, 0);
    }
    if max_distance <= 0.0 {
        return (knot, u32::from(distance > 0.0));
    }

    let mut current = control;
    let mut steps = 0;
    while distance > max_distance && steps < MAX_DAMPEN_STEPS {
        current = midpoint(current, knot);
        distance = current.distance(knot);
        steps += 1;
    }
    (current, steps)
}

/// Dämpft einen einzelnen Kontrollpunkt in Richtung `knot`.
pub fn dampen_control_point(control: Point, knot: Point, max_distance: f64) -> Point {
    dampen_with_steps(control, knot, max_distance).0
}

/// Dämpft beide Kontrollpunkte eines Paars identisch zum selben Knoten.
pub fn dampen_pair(pair: ControlPointPair, knot: Point, max_distance: f64) -> ControlPointPair {
    ControlPointPair::new(
        dampen_control_point(pair.c1, knot, max_distance),
        dampen_control_point(pair.c2, knot, max_distance),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dampen_within_bound_is_untouched() {
        let control = Point::new(3.0, 4.0);
        let (result, steps) = dampen_with_steps(control, Point::ZERO, 8.0);
        assert_eq!(result, control);
        assert_eq!(steps, 0);
    }

    #[test]
    fn test_dampen_pulls_into_bound() {
        let knot = Point::new(100.0, 100.0);
        let control = Point::new(100.0, 164.0);
        let (result, steps) = dampen_with_steps(control, knot, 8.0);
        // 64 → 32 → 16 → 8
        assert_eq!(steps, 3);
        assert_eq!(result, Point::new(100.0, 108.0));
    }

    #[test]
    fn test_dampen_terminates_within_ten_steps_for_realistic_ranges() {
        let knot = Point::new(512.0, 384.0);
        for &(dx, dy) in &[(4000.0, -3000.0), (-8000.0, 10.0), (9.0, 0.0), (0.0, -5000.0)] {
            let control = knot + Point::new(dx, dy);
            let (result, steps) = dampen_with_steps(control, knot, 8.0);
            assert!(steps <= 10, "Zu viele Schritte: {steps}");
            assert!(result.distance(knot) <= 8.0);
        }
    }

    #[test]
    fn test_dampen_huge_finite_distance_reaches_bound() {
        let knot = Point::new(3.0, -2.0);
        for &offset in &[1e25, 1e300, f64::MAX / 4.0] {
            let control = knot + Point::new(offset, offset);
            let (result, steps) = dampen_with_steps(control, knot, 8.0);
            assert!(steps < MAX_DAMPEN_STEPS);
            assert!(result.distance(knot) <= 8.0, "Abstand {}", result.distance(knot));
        }
    }

    #[test]
    fn test_dampen_tiny_limit_reaches_bound() {
        let knot = Point::ZERO;
        let (result, steps) = dampen_with_steps(Point::new(1e200, 0.0), knot, 1e-300);
        assert!(steps < MAX_DAMPEN_STEPS);
        assert!(result.distance(knot) <= 1e-300);
    }

    #[test]
    fn test_dampen_never_overshoots_knot() {
        let knot = Point::new(10.0, 0.0);
        let control = Point::new(-90.0, 0.0);
        let result = dampen_control_point(control, knot, 8.0);
        // bleibt auf der Ursprungsseite des Knotens
        assert!(result.x <= knot.x);
        assert!(result.x > control.x);
    }

    #[test]
    fn test_dampen_non_finite_is_left_alone() {
        let control = Point::new(f64::INFINITY, 0.0);
        let (result, steps) = dampen_with_steps(control, Point::ZERO, 8.0);
        assert_eq!(steps, 0);
        assert!(result.x.is_infinite());

        let nan = Point::new(f64::NAN, 1.0);
        assert!(dampen_control_point(nan, Point::ZERO, 8.0).x.is_nan());
    }

    #[test]
    fn test_dampen_zero_limit_snaps_to_knot() {
        let knot = Point::new(1.0, 2.0);
        assert_eq!(dampen_control_point(Point::new(50.0, 2.0), knot, 0.0), knot);
    }

    #[test]
    fn test_dampen_pair_applies_to_both_points() {
        let knot = Point::ZERO;
        let pair = ControlPointPair::new(Point::new(32.0, 0.0), Point::new(0.0, -16.0));
        let damped = dampen_pair(pair, knot, 8.0);
        assert_eq!(damped.c1, Point::new(8.0, 0.0));
        assert_eq!(damped.c2, Point::new(0.0, -8.0));
    }
}
