#![forbid(unsafe_code)]

//! Escape-sequence scanning: stripping and SGR-to-span parsing.
//!
//! The scanner recognizes CSI sequences (`ESC [ ... final`) and OSC
//! sequences (`ESC ] ... BEL` or `ESC ] ... ESC \`). SGR sequences
//! (`CSI ... m`) are decoded into [`Style`] changes; other recognized
//! sequences are dropped. Malformed or incomplete sequences are kept as
//! literal characters rather than raised as errors — width math treats
//! them like any other text.

use crate::styled::StyleSpan;
use glowbox_style::{Attrs, Rgb, Style};

const ESC: char = '\u{1b}';
const BEL: char = '\u{07}';

/// One scanned piece of an escape-coded string.
enum Piece<'a> {
    /// Literal text (including rescued malformed escapes).
    Text(&'a str),
    /// SGR parameter bytes (between `ESC[` and `m`).
    Sgr(&'a str),
    /// A recognized non-SGR sequence, stripped from output.
    Stripped,
}

/// Scan a string into text/SGR/stripped pieces.
fn pieces(input: &str) -> Vec<Piece<'_>> {
    let mut out = Vec::new();
    let mut rest = input;

    while let Some(esc_pos) = rest.find(ESC) {
        if esc_pos > 0 {
            out.push(Piece::Text(&rest[..esc_pos]));
        }
        let tail = &rest[esc_pos..];
        let after_esc = &tail[ESC.len_utf8()..];

        if let Some(csi_body) = after_esc.strip_prefix('[') {
            // CSI: parameter bytes 0x30-0x3f, intermediate 0x20-0x2f, final 0x40-0x7e
            match csi_body.find(|c: char| ('\u{40}'..='\u{7e}').contains(&c)) {
                Some(final_pos) => {
                    let final_char = csi_body[final_pos..].chars().next().unwrap_or(' ');
                    let params = &csi_body[..final_pos];
                    if final_char == 'm' {
                        out.push(Piece::Sgr(params));
                    } else {
                        out.push(Piece::Stripped);
                    }
                    rest = &csi_body[final_pos + final_char.len_utf8()..];
                }
                None => {
                    // Incomplete CSI at end of input: keep it as literal text.
                    out.push(Piece::Text(tail));
                    rest = "";
                }
            }
        } else if let Some(osc_body) = after_esc.strip_prefix(']') {
            let bel = osc_body.find(BEL);
            let st = osc_body.find("\u{1b}\\");
            match (bel, st) {
                (Some(b), Some(s)) if b < s => {
                    out.push(Piece::Stripped);
                    rest = &osc_body[b + BEL.len_utf8()..];
                }
                (_, Some(s)) => {
                    out.push(Piece::Stripped);
                    rest = &osc_body[s + 2..];
                }
                (Some(b), None) => {
                    out.push(Piece::Stripped);
                    rest = &osc_body[b + BEL.len_utf8()..];
                }
                (None, None) => {
                    out.push(Piece::Text(tail));
                    rest = "";
                }
            }
        } else {
            // Bare ESC (or ESC + unrecognized introducer): literal character.
            out.push(Piece::Text(&tail[..ESC.len_utf8()]));
            rest = after_esc;
        }
    }

    if !rest.is_empty() {
        out.push(Piece::Text(rest));
    }
    out
}

/// Remove all recognized escape sequences, keeping visible content.
///
/// Malformed/incomplete sequences are preserved as literal characters.
#[must_use]
pub fn strip_ansi(input: &str) -> String {
    if !input.contains(ESC) {
        return input.to_string();
    }
    let mut plain = String::with_capacity(input.len());
    for piece in pieces(input) {
        if let Piece::Text(t) = piece {
            plain.push_str(t);
        }
    }
    plain
}

/// Parse an escape-coded string into plain text plus style spans.
///
/// Span boundaries are character indices into the returned plain text.
/// Spans are emitted in order and never overlap.
#[must_use]
pub fn parse_ansi(input: &str) -> (String, Vec<StyleSpan>) {
    if !input.contains(ESC) {
        return (input.to_string(), Vec::new());
    }

    let mut plain = String::with_capacity(input.len());
    let mut chars = 0usize;
    let mut spans = Vec::new();
    let mut current = Style::new();
    let mut run_start = 0usize;

    for piece in pieces(input) {
        match piece {
            Piece::Text(t) => {
                plain.push_str(t);
                chars += t.chars().count();
            }
            Piece::Sgr(params) => {
                let next = apply_sgr(current, params);
                if next != current {
                    if !current.is_plain() && chars > run_start {
                        spans.push(StyleSpan::new(run_start, chars, current));
                    }
                    current = next;
                    run_start = chars;
                }
            }
            Piece::Stripped => {}
        }
    }
    if !current.is_plain() && chars > run_start {
        spans.push(StyleSpan::new(run_start, chars, current));
    }

    (plain, spans)
}

/// Apply SGR parameter bytes to a style, returning the updated style.
fn apply_sgr(mut style: Style, params: &str) -> Style {
    // Accept both `;`-separated and `:`-separated subparameters.
    let mut codes: Vec<u16> = Vec::new();
    for part in params.split([';', ':']) {
        if part.is_empty() {
            codes.push(0);
        } else if let Ok(n) = part.parse::<u16>() {
            codes.push(n);
        } else {
            // Unparseable parameter: ignore the whole sequence.
            return style;
        }
    }
    if codes.is_empty() {
        codes.push(0);
    }

    let mut i = 0;
    while i < codes.len() {
        match codes[i] {
            0 => style = Style::new(),
            1 => style.attrs |= Attrs::BOLD,
            2 => style.attrs |= Attrs::DIM,
            3 => style.attrs |= Attrs::ITALIC,
            4 => style.attrs |= Attrs::UNDERLINE,
            7 => style.attrs |= Attrs::REVERSE,
            9 => style.attrs |= Attrs::STRIKETHROUGH,
            22 => style.attrs &= !(Attrs::BOLD | Attrs::DIM),
            23 => style.attrs &= !Attrs::ITALIC,
            24 => style.attrs &= !Attrs::UNDERLINE,
            27 => style.attrs &= !Attrs::REVERSE,
            29 => style.attrs &= !Attrs::STRIKETHROUGH,
            n @ 30..=37 => style.fg = Some(BASIC_PALETTE[(n - 30) as usize]),
            39 => style.fg = None,
            n @ 40..=47 => style.bg = Some(BASIC_PALETTE[(n - 40) as usize]),
            49 => style.bg = None,
            n @ 90..=97 => style.fg = Some(BASIC_PALETTE[(n - 90 + 8) as usize]),
            n @ 100..=107 => style.bg = Some(BASIC_PALETTE[(n - 100 + 8) as usize]),
            38 | 48 => {
                let is_fg = codes[i] == 38;
                match codes.get(i + 1) {
                    Some(2) => {
                        if let (Some(&r), Some(&g), Some(&b)) =
                            (codes.get(i + 2), codes.get(i + 3), codes.get(i + 4))
                        {
                            let color = Rgb::new(r as u8, g as u8, b as u8);
                            if is_fg {
                                style.fg = Some(color);
                            } else {
                                style.bg = Some(color);
                            }
                        }
                        i += 4;
                    }
                    Some(5) => {
                        if let Some(&idx) = codes.get(i + 2) {
                            let color = xterm_256(idx as u8);
                            if is_fg {
                                style.fg = Some(color);
                            } else {
                                style.bg = Some(color);
                            }
                        }
                        i += 2;
                    }
                    _ => {}
                }
            }
            _ => {}
        }
        i += 1;
    }
    style
}

/// The standard 16-color palette as RGB (xterm defaults).
const BASIC_PALETTE: [Rgb; 16] = [
    Rgb::new(0, 0, 0),
    Rgb::new(205, 0, 0),
    Rgb::new(0, 205, 0),
    Rgb::new(205, 205, 0),
    Rgb::new(0, 0, 238),
    Rgb::new(205, 0, 205),
    Rgb::new(0, 205, 205),
    Rgb::new(229, 229, 229),
    Rgb::new(127, 127, 127),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(92, 92, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 255, 255),
];

/// Map an xterm 256-color index to RGB.
fn xterm_256(idx: u8) -> Rgb {
    match idx {
        0..=15 => BASIC_PALETTE[idx as usize],
        16..=231 => {
            let n = idx - 16;
            let level = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            Rgb::new(level(n / 36), level((n / 6) % 6), level(n % 6))
        }
        232..=255 => {
            let gray = 8 + 10 * (idx - 232);
            Rgb::new(gray, gray, gray)
        }
    }
}
