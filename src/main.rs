//! Smooth Stroke (Kommandozeile).
//!
//! Liest Zeigerpunkte aus einer Datei oder stdin und gibt die geglätteten
//! Striche als Path-Data aus.

use anyhow::{bail, Context, Result};
use smooth_stroke::{write_path_data, Point, SmoothingOptions, Stroke, StrokeData};
use std::io::Read;

fn main() -> Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Smooth Stroke v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SmoothingOptions::config_path();
        let options = SmoothingOptions::load_from_file(&config_path);

        let input = Self::read_input()?;
        let data = parse_input(&input)?;
        let strokes: Vec<Stroke> = data.replay(&options);

        log::info!(
            "{} Striche geglättet ({} Kurven-Segmente)",
            strokes.len(),
            strokes.iter().map(Stroke::curve_count).sum::<usize>()
        );
        println!("{}", write_path_data(&strokes, options.path_precision));
        Ok(())
    }

    fn read_input() -> Result<String> {
        match std::env::args().nth(1) {
            Some(path) => std::fs::read_to_string(&path)
                .with_context(|| format!("Punkte-Datei '{}' nicht lesbar", path)),
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("stdin nicht lesbar")?;
                Ok(buffer)
            }
        }
    }
}

/// JSON (`StrokeData`) oder Textformat: `x,y` pro Zeile, Leerzeile trennt Striche.
fn parse_input(input: &str) -> Result<StrokeData> {
    if input.trim_start().starts_with('{') {
        return StrokeData::from_json(input);
    }

    let mut data = StrokeData::default();
    let mut current: Vec<[f64; 2]> = Vec::new();
    for (line_no, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                data.strokes.push(std::mem::take(&mut current));
            }
            continue;
        }
        let point = parse_point(line)
            .with_context(|| format!("Zeile {}: ungültiger Punkt '{}'", line_no + 1, line))?;
        current.push(point.to_array());
    }
    if !current.is_empty() {
        data.strokes.push(current);
    }
    Ok(data)
}

fn parse_point(line: &str) -> Result<Point> {
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let x: f64 = parts.next().context("x fehlt")?.parse()?;
    let y: f64 = parts.next().context("y fehlt")?.parse()?;
    if parts.next().is_some() {
        bail!("mehr als zwei Koordinaten");
    }
    if !x.is_finite() || !y.is_finite() {
        bail!("Koordinaten müssen endlich sein");
    }
    Ok(Point::new(x, y))
}
