//! Streaming-Spline-Generator: ein Kontrollpunkt-Paar pro eingehendem Punkt.
//!
//! **Ablauf:** `start()` → wiederholt `supply(point)` → `stop()`.
//! Die ersten drei Punkte werden gepuffert; mit dem dritten Punkt wird der
//! Batch-Solver einmal über genau diese drei Punkte gerechnet (Seed). Danach
//! liefert jede Spiegelung des letzten zweiten Kontrollpunkts am letzten Knoten
//! das neue Paar in O(1).
//!
//! Alternativ (`SeedStrategy::Rebatch`) werden nur ausgedünnte Knoten behalten
//! und der Batch-Solver bei jedem neuen Knoten neu gerechnet.

use super::point::{midpoint, reflect, ControlPointPair, Point};
use super::spline::{fit, MIN_CURVE_POINTS};
use serde::{Deserialize, Serialize};

/// Wie der Generator nach dem Puffern weiterrechnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeedStrategy {
    /// 3-Punkte-Seed, danach Spiegelung (O(1) pro Punkt)
    #[default]
    Reflect,
    /// Jeden `decimation_interval`-ten Punkt als Knoten behalten und neu lösen
    Rebatch { decimation_interval: usize },
}

impl SeedStrategy {
    /// Abstand (in gelieferten Punkten) zwischen Start- und End-Knoten eines gelieferten Paars.
    pub fn knot_stride(&self) -> usize {
        match *self {
            SeedStrategy::Reflect => 1,
            SeedStrategy::Rebatch {
                decimation_interval,
            } => decimation_interval.max(1),
        }
    }
}

/// Nach außen sichtbare Phase des Generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamPhase {
    /// Kein Strich aktiv (vor `start()` oder nach `stop()`)
    Stopped,
    /// Weniger als drei Knoten empfangen
    Buffering,
    /// Liefert pro Knoten ein Paar
    Active,
}

#[derive(Debug, Clone, PartialEq)]
enum StreamState {
    Stopped,
    Empty,
    One(Point),
    Two(Point, Point),
    Active {
        p_minus1: Point,
        control2: Point,
    },
    Decimated { knots: Vec<Point>, received: usize },
}

/// Zustandsbehafteter Generator für genau einen Strich.
///
/// Single-Owner: alle Mutationen laufen über `&mut self`, kein geteilter Zustand.
#[derive(Debug, Clone)]
pub struct SplineStream {
    strategy: SeedStrategy,
    state: StreamState,
    last_pair: Option<ControlPointPair>,
}

impl SplineStream {
    /// Erstellt einen gestoppten Generator mit der gegebenen Strategie.
    pub fn new(strategy: SeedStrategy) -> Self {
        Self {
            strategy,
            state: StreamState::Stopped,
            last_pair: None,
        }
    }

    pub fn strategy(&self) -> SeedStrategy {
        self.strategy
    }

    /// Setzt den gesamten Zustand zurück und beginnt einen neuen Strich.
    pub fn start(&mut self) {
        self.state = match self.strategy {
            SeedStrategy::Reflect => StreamState::Empty,
            SeedStrategy::Rebatch { .. } => StreamState::Decimated {
                knots: Vec::new(),
                received: 0,
            },
        };
        self.last_pair = None;
        log::trace!("SplineStream gestartet ({:?})", self.strategy);
    }

    /// Verwirft den Zustand; weitere `supply`-Aufrufe liefern nichts bis zum nächsten `start()`.
    pub fn stop(&mut self) {
        self.state = StreamState::Stopped;
        self.last_pair = None;
        log::trace!("SplineStream gestoppt");
    }

    pub fn phase(&self) -> StreamPhase {
        match &self.state {
            StreamState::Stopped => StreamPhase::Stopped,
            StreamState::Empty | StreamState::One(_) | StreamState::Two(..) => {
                StreamPhase::Buffering
            }
            StreamState::Active { .. } => StreamPhase::Active,
            StreamState::Decimated { knots, .. } => {
                if knots.len() < MIN_CURVE_POINTS {
                    StreamPhase::Buffering
                } else {
                    StreamPhase::Active
                }
            }
        }
    }

    /// Zuletzt geliefertes Paar (unabhängig von späteren Dämpfungen durch den Aufrufer).
    pub fn last_pair(&self) -> Option<ControlPointPair> {
        self.last_pair
    }

    /// Nimmt den nächsten Punkt entgegen und liefert ggf. das Paar des Segments,
    /// das an diesem Punkt endet.
    pub fn supply(&mut self, point: Point) -> Option<ControlPointPair> {
        let pair = match &mut self.state {
            StreamState::Stopped => return None,
            StreamState::Empty => {
                self.state = StreamState::One(point);
                return None;
            }
            StreamState::One(first) => {
                self.state = StreamState::Two(*first, point);
                return None;
            }
            StreamState::Two(first, second) => {
                let window = [*first, *second, point];
                let seed = fit(&window).and_then(|cp| cp.pair(1))?;
                self.state = StreamState::Active {
                    p_minus1: point,
                    control2: seed.c2,
                };
                seed
            }
            StreamState::Active {
                p_minus1,
                control2,
            } => {
                let c1 = reflect(*control2, *p_minus1);
                let c2 = midpoint(point, c1);
                *p_minus1 = point;
                *control2 = c2;
                ControlPointPair::new(c1, c2)
            }
            StreamState::Decimated { knots, received } => {
                let interval = self.strategy.knot_stride();
                let keep = *received % interval == 0;
                *received += 1;
                if !keep {
                    return None;
                }
                knots.push(point);
                let controls = fit(knots.as_slice())?;
                controls.pair(controls.len() - 1)?
            }
        };

        self.last_pair = Some(pair);
        Some(pair)
    }
}

impl Default for SplineStream {
    fn default() -> Self {
        Self::new(SeedStrategy::Reflect)
    }
}
