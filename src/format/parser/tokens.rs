//! Zerlegt Path-Data in Befehle und Zahlen.

use anyhow::{bail, Context, Result};

/// Ein lexikalisches Element mit Byte-Position im Eingabestring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Token {
    Command(char, usize),
    Number(f64, usize),
}

const COMMANDS: &str = "MmLlHhVvCcSsZz";

/// Zerlegt den Eingabestring; Leerraum und Kommas trennen Zahlen.
///
/// Zahlen dürfen ohne Trenner aufeinander folgen (`10-5`, `1.5.5`).
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];
        if b.is_ascii_whitespace() || b == b',' {
            pos += 1;
            continue;
        }
        if COMMANDS.as_bytes().contains(&b) {
            tokens.push(Token::Command(b as char, pos));
            pos += 1;
            continue;
        }
        if b == b'+' || b == b'-' || b == b'.' || b.is_ascii_digit() {
            let start = pos;
            pos = scan_number(bytes, pos);
            let text = &input[start..pos];
            let value = text
                .parse::<f64>()
                .with_context(|| format!("Ungültige Zahl '{}' an Position {}", text, start))?;
            tokens.push(Token::Number(value, start));
            continue;
        }
        let ch = input[pos..].chars().next().unwrap_or('?');
        bail!("Unerwartetes Zeichen '{}' an Position {}", ch, pos);
    }

    Ok(tokens)
}

/// Liefert das Ende der Zahl, die bei `start` beginnt.
fn scan_number(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    if matches!(bytes.get(pos), Some(b'+' | b'-')) {
        pos += 1;
    }
    while matches!(bytes.get(pos), Some(b) if b.is_ascii_digit()) {
        pos += 1;
    }
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        while matches!(bytes.get(pos), Some(b) if b.is_ascii_digit()) {
            pos += 1;
        }
    }
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        if matches!(bytes.get(exp), Some(b) if b.is_ascii_digit()) {
            while matches!(bytes.get(exp), Some(b) if b.is_ascii_digit()) {
                exp += 1;
            }
            pos = exp;
        }
    }
    pos
}
