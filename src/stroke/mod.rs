//! Strich-Ebene über dem Kurven-Kern: Builder-Lifecycle, fertige Striche, Rohdaten.

pub mod builder;
pub mod data;
pub mod segment;

pub use builder::StrokeBuilder;
pub use data::StrokeData;
pub use segment::{straight_segments, Stroke, StrokeSegment};
