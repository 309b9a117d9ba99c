//! Parser für Path-Data-Strings.
//!
//! Unterstützt `M L H V C S Z` (absolut und relativ) inkl. impliziter
//! Befehlswiederholung. Jedes `M` beginnt einen neuen Strich.

mod tokens;

use crate::core::{reflect, CubicSegment, Point};
use crate::stroke::{Stroke, StrokeSegment};
use anyhow::{bail, Result};
use tokens::{tokenize, Token};

/// Parsed Path-Data zu Strichen.
pub fn parse_path_data(input: &str) -> Result<Vec<Stroke>> {
    let tokens = tokenize(input)?;
    let mut state = ParseState::default();
    let mut index = 0;

    while index < tokens.len() {
        let (command, offset) = match tokens[index] {
            Token::Command(c, offset) => {
                index += 1;
                if c.eq_ignore_ascii_case(&'z') {
                    state.close_subpath(offset)?;
                    state.command = None;
                    continue;
                }
                (c, offset)
            }
            Token::Number(_, offset) => match state.command {
                // Implizite Wiederholung des letzten Befehls
                Some(c) => (c, offset),
                None => bail!("Zahl ohne vorangehenden Befehl an Position {}", offset),
            },
        };

        let arity = arity(command);
        let Some(args) = read_numbers(&tokens, index, arity) else {
            bail!(
                "Befehl '{}' an Position {} erwartet {} Zahlen",
                command,
                offset,
                arity
            );
        };
        index += arity;

        state.apply(command, &args, offset)?;
        // Nach M/m folgen implizite L/l
        state.command = Some(match command {
            'M' => 'L',
            'm' => 'l',
            other => other,
        });
    }

    Ok(state.finish())
}

fn arity(command: char) -> usize {
    match command.to_ascii_uppercase() {
        'M' | 'L' => 2,
        'H' | 'V' => 1,
        'C' => 6,
        'S' => 4,
        _ => 0,
    }
}

fn read_numbers(tokens: &[Token], start: usize, count: usize) -> Option<Vec<f64>> {
    let slice = tokens.get(start..start + count)?;
    slice
        .iter()
        .map(|t| match t {
            Token::Number(v, _) => Some(*v),
            Token::Command(..) => None,
        })
        .collect()
}

/// Laufender Teilpfad (ein Strich).
#[derive(Debug)]
struct Subpath {
    start: Point,
    knots: Vec<Point>,
    segments: Vec<StrokeSegment>,
}

impl Subpath {
    fn new(start: Point) -> Self {
        Self {
            start,
            knots: vec![start],
            segments: Vec::new(),
        }
    }

    fn into_stroke(self) -> Stroke {
        // Ein einzelnes M oder eine Linie der Länge 0 ist ein Punkt
        let is_dot = match self.segments.as_slice() {
            [] => true,
            [StrokeSegment::Line { start, end }] => start == end,
            _ => false,
        };
        if is_dot {
            return Stroke {
                knots: vec![self.start],
                segments: vec![StrokeSegment::Dot(self.start)],
            };
        }
        Stroke {
            knots: self.knots,
            segments: self.segments,
        }
    }
}

#[derive(Debug, Default)]
struct ParseState {
    strokes: Vec<Stroke>,
    current: Option<Subpath>,
    pen: Point,
    /// Zweiter Kontrollpunkt des vorherigen C/S (für Spiegelung in S)
    last_c2: Option<Point>,
    command: Option<char>,
}

impl ParseState {
    fn apply(&mut self, command: char, args: &[f64], offset: usize) -> Result<()> {
        let relative = command.is_ascii_lowercase();
        let base = if relative { self.pen } else { Point::ZERO };
        let at = |i: usize| base + Point::new(args[i], args[i + 1]);

        match command.to_ascii_uppercase() {
            'M' => {
                self.finish_subpath();
                let p = at(0);
                self.current = Some(Subpath::new(p));
                self.pen = p;
                self.last_c2 = None;
            }
            'L' => self.line_to(at(0), offset)?,
            'H' => {
                let x = if relative { self.pen.x + args[0] } else { args[0] };
                self.line_to(Point::new(x, self.pen.y), offset)?;
            }
            'V' => {
                let y = if relative { self.pen.y + args[0] } else { args[0] };
                self.line_to(Point::new(self.pen.x, y), offset)?;
            }
            'C' => self.curve_to(at(0), at(2), at(4), offset)?,
            'S' => {
                let c1 = self.last_c2.map_or(self.pen, |c2| reflect(c2, self.pen));
                self.curve_to(c1, at(0), at(2), offset)?;
            }
            other => bail!("Unbekannter Befehl '{}' an Position {}", other, offset),
        }
        Ok(())
    }

    fn subpath(&mut self, offset: usize) -> Result<&mut Subpath> {
        match self.current.as_mut() {
            Some(subpath) => Ok(subpath),
            None => bail!("Pfad muss mit M beginnen (Position {})", offset),
        }
    }

    fn line_to(&mut self, end: Point, offset: usize) -> Result<()> {
        let start = self.pen;
        let subpath = self.subpath(offset)?;
        subpath.segments.push(StrokeSegment::Line { start, end });
        subpath.knots.push(end);
        self.pen = end;
        self.last_c2 = None;
        Ok(())
    }

    fn curve_to(&mut self, c1: Point, c2: Point, end: Point, offset: usize) -> Result<()> {
        let start = self.pen;
        let subpath = self.subpath(offset)?;
        subpath
            .segments
            .push(StrokeSegment::Curve(CubicSegment::new(start, c1, c2, end)));
        subpath.knots.push(end);
        self.pen = end;
        self.last_c2 = Some(c2);
        Ok(())
    }

    fn close_subpath(&mut self, offset: usize) -> Result<()> {
        let start = self.subpath(offset)?.start;
        if self.pen != start {
            self.line_to(start, offset)?;
        }
        self.pen = start;
        self.last_c2 = None;
        Ok(())
    }

    fn finish_subpath(&mut self) {
        if let Some(subpath) = self.current.take() {
            self.strokes.push(subpath.into_stroke());
        }
    }

    fn finish(mut self) -> Vec<Stroke> {
        self.finish_subpath();
        self.strokes
    }
}
