//! Geteilte Konfiguration für Stroke-Builder, Serializer und Binary.

pub mod options;

pub use options::SmoothingOptions;
pub use options::{MAX_CONTROL_DISTANCE, MIN_POINT_DISTANCE, PATH_PRECISION};
