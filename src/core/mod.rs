//! Kurven-Kern: Punkttypen, Batch-Solver, Streaming-Generator, Dämpfung.

pub mod bezier;
pub mod dampen;
pub mod point;
/// Spline-Berechnung
///
/// - `spline`: Batch-Solver über einen kompletten Strich
/// - `streaming`: inkrementeller Generator, ein Paar pro Punkt
pub mod spline;
pub mod streaming;

pub use bezier::{cubic_bezier, CubicSegment};
pub use dampen::{dampen_control_point, dampen_pair, dampen_with_steps};
pub use point::{midpoint, reflect, ControlPointPair, Point};
pub use spline::{fit, ControlPoints, MIN_CURVE_POINTS};
pub use streaming::{SeedStrategy, SplineStream, StreamPhase};
