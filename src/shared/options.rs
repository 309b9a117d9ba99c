//! Zentrale Konfiguration für die Strich-Glättung.
//!
//! `SmoothingOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::SeedStrategy;
use serde::{Deserialize, Serialize};

// ── Dämpfung ────────────────────────────────────────────────────────

/// Maximaler Abstand eines Kontrollpunkts zum neuen Knoten (Zeichenflächen-Einheiten).
pub const MAX_CONTROL_DISTANCE: f64 = 8.0;

// ── Eingabe-Filter ──────────────────────────────────────────────────

/// Punkte näher als dieser Abstand zum letzten Knoten werden verworfen.
pub const MIN_POINT_DISTANCE: f64 = 1.0;

// ── Serialisierung ──────────────────────────────────────────────────

/// Nachkommastellen in Path-Data-Strings.
pub const PATH_PRECISION: usize = 2;

/// Dateiname der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "smooth_stroke.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Glättungs-Optionen.
/// Wird als `smooth_stroke.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothingOptions {
    // ── Dämpfung ────────────────────────────────────────────────
    /// Kontrollpunkte bei großen Sprüngen zum Knoten ziehen
    pub dampen_controls: bool,
    /// Maximaler Abstand Kontrollpunkt → Knoten
    pub max_control_distance: f64,

    // ── Eingabe ─────────────────────────────────────────────────
    /// Mindestabstand zwischen zwei aufeinanderfolgenden Knoten
    pub min_point_distance: f64,

    // ── Ausgabe ─────────────────────────────────────────────────
    /// Nachkommastellen für Path-Data
    #[serde(default = "default_path_precision")]
    pub path_precision: usize,

    // ── Generator ───────────────────────────────────────────────
    /// Seed-/Update-Strategie des Streaming-Generators (TOML-Tabelle, daher zuletzt)
    #[serde(default)]
    pub seed_strategy: SeedStrategy,
}

impl Default for SmoothingOptions {
    fn default() -> Self {
        Self {
            dampen_controls: true,
            max_control_distance: MAX_CONTROL_DISTANCE,
            min_point_distance: MIN_POINT_DISTANCE,
            path_precision: PATH_PRECISION,
            seed_strategy: SeedStrategy::default(),
        }
    }
}

/// Serde-Default für `path_precision` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_path_precision() -> usize {
    PATH_PRECISION
}

impl SmoothingOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("smooth-stroke"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Effektiver Dämpfungs-Abstand, `None` wenn die Dämpfung abgeschaltet ist.
    pub fn dampening_limit(&self) -> Option<f64> {
        self.dampen_controls.then_some(self.max_control_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let opts = SmoothingOptions::default();
        assert_eq!(opts.max_control_distance, MAX_CONTROL_DISTANCE);
        assert_eq!(opts.min_point_distance, MIN_POINT_DISTANCE);
        assert_eq!(opts.path_precision, PATH_PRECISION);
        assert_eq!(opts.seed_strategy, SeedStrategy::Reflect);
        assert_eq!(opts.dampening_limit(), Some(8.0));
    }

    #[test]
    fn test_toml_roundtrip_with_rebatch_strategy() {
        let opts = SmoothingOptions {
            seed_strategy: SeedStrategy::Rebatch {
                decimation_interval: 4,
            },
            ..SmoothingOptions::default()
        };
        let text = toml::to_string_pretty(&opts).expect("TOML-Export fehlgeschlagen");
        let parsed: SmoothingOptions = toml::from_str(&text).expect("TOML-Import fehlgeschlagen");
        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let text = r#"
            dampen_controls = false
            max_control_distance = 12.5
            min_point_distance = 0.0
        "#;
        let parsed: SmoothingOptions = toml::from_str(text).expect("TOML-Import fehlgeschlagen");
        assert_eq!(parsed.path_precision, PATH_PRECISION);
        assert_eq!(parsed.seed_strategy, SeedStrategy::Reflect);
        assert_eq!(parsed.dampening_limit(), None);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("smooth_stroke_does_not_exist.toml");
        let opts = SmoothingOptions::load_from_file(&path);
        assert_eq!(opts, SmoothingOptions::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "smooth_stroke_options_{}.toml",
            std::process::id()
        ));
        let opts = SmoothingOptions {
            max_control_distance: 4.0,
            path_precision: 3,
            ..SmoothingOptions::default()
        };
        opts.save_to_file(&path).expect("Speichern fehlgeschlagen");
        let loaded = SmoothingOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }
}
