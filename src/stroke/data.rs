//! Rohdaten-Export/-Import der Striche als JSON (Knoten je Strich).

use super::builder::StrokeBuilder;
use super::segment::Stroke;
use crate::core::Point;
use crate::shared::SmoothingOptions;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Serialisierbare Knotenlisten aller Striche einer Zeichnung.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrokeData {
    /// Ein Eintrag pro Strich, Koordinaten als `[x, y]`
    pub strokes: Vec<Vec<[f64; 2]>>,
}

impl StrokeData {
    pub fn from_strokes(strokes: &[Stroke]) -> Self {
        Self {
            strokes: strokes
                .iter()
                .map(|s| s.knots.iter().map(|p| p.to_array()).collect())
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Strich-Daten konnten nicht serialisiert werden")
    }

    /// Liest Strich-Daten; leere Striche und nicht-endliche Koordinaten werden abgelehnt.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: Self =
            serde_json::from_str(json).context("Strich-Daten sind kein gültiges JSON")?;
        for (stroke_index, stroke) in data.strokes.iter().enumerate() {
            if stroke.is_empty() {
                bail!("Strich {} enthält keine Punkte", stroke_index);
            }
            if let Some(point_index) = stroke
                .iter()
                .position(|[x, y]| !x.is_finite() || !y.is_finite())
            {
                bail!(
                    "Strich {}: Punkt {} hat keine endlichen Koordinaten",
                    stroke_index,
                    point_index
                );
            }
        }
        Ok(data)
    }

    /// Spielt alle Striche erneut durch einen `StrokeBuilder` ab.
    pub fn replay(&self, options: &SmoothingOptions) -> Vec<Stroke> {
        let mut builder = StrokeBuilder::new(options.clone());
        let mut result = Vec::with_capacity(self.strokes.len());
        for points in &self.strokes {
            let mut iter = points.iter().map(|&p| Point::from_array(p));
            let Some(first) = iter.next() else {
                continue;
            };
            builder.begin(first);
            for p in iter {
                builder.add_point(p);
            }
            if let Some(stroke) = builder.end() {
                result.push(stroke);
            }
        }
        log::debug!("{} Striche aus Rohdaten abgespielt", result.len());
        result
    }
}
