//! Smooth Stroke Library.
//! Glättet freihand gezeichnete Zeiger-Striche zu kubischen Bézier-Kurven,
//! als Batch-Fit oder inkrementell pro Punkt, und serialisiert sie als Path-Data.

pub mod core;
pub mod format;
pub mod shared;
pub mod stroke;

pub use crate::core::{fit, ControlPointPair, ControlPoints, CubicSegment, Point};
pub use crate::core::{SeedStrategy, SplineStream, StreamPhase};
pub use format::{parse_path_data, write_path_data};
pub use shared::SmoothingOptions;
pub use stroke::{Stroke, StrokeBuilder, StrokeData, StrokeSegment};
