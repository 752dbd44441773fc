use crate::feature::Arc;
use crate::feature::Couple;
use crate::feature::Feature;
use crate::feature::Float;
use crate::feature::Segment;

use core::fmt;
use core::str::FromStr;
use alloc::vec::Vec;

use ParseErrorKind::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    EmptyInput,
    MalformedHeader,
    UnknownShape,
    ArityMismatch,
    NonNumericToken,
    UnterminatedFeature,
}

impl ParseErrorKind {
    pub fn as_text(self) -> &'static str {
        match self {
            EmptyInput => "empty line",
            MalformedHeader => "expected 'FEATURE x y'",
            UnknownShape => "unknown shape, expected LINE, SPLINE or ARC",
            ArityMismatch => "wrong number of arguments (LINE takes 2, ARC 5, SPLINE an even count >= 4)",
            NonNumericToken => "argument is not a finite number",
            UnterminatedFeature => "FEATURE is never closed by END",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

/// Parsing failure; `line` counts from 1 in the original text.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl core::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

fn number(token: &str) -> Result<Float, ParseErrorKind> {
    match token.parse::<Float>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(NonNumericToken),
    }
}

fn numbers<'a, I: Iterator<Item = &'a str>>(tokens: I) -> Result<Vec<Float>, ParseErrorKind> {
    tokens.map(number).collect()
}

impl FromStr for Segment {
    type Err = ParseErrorKind;

    /// Parses a single `LINE`, `SPLINE` or `ARC` line.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().ok_or(EmptyInput)?;
        let arity = tokens.clone().count();

        let is = |expected: &str| keyword.eq_ignore_ascii_case(expected);

        if is("LINE") {
            if arity != 2 {
                return Err(ArityMismatch);
            }
            let n = numbers(tokens)?;
            Ok(Segment::LineTo(Couple::new(n[0], n[1])))
        } else if is("SPLINE") {
            if arity < 4 || arity % 2 != 0 {
                return Err(ArityMismatch);
            }
            let n = numbers(tokens)?;
            let points = n.chunks(2).map(|p| Couple::new(p[0], p[1])).collect();
            Ok(Segment::Spline(points))
        } else if is("ARC") {
            if arity != 5 {
                return Err(ArityMismatch);
            }
            let n = numbers(tokens)?;
            Ok(Segment::Arc(Arc::new(n[0], n[1], n[2], n[3], n[4])))
        } else {
            Err(UnknownShape)
        }
    }
}

fn header(line: &str) -> Result<Couple, ParseErrorKind> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [keyword, x, y] if keyword.eq_ignore_ascii_case("FEATURE") => {
            Ok(Couple::new(number(x)?, number(y)?))
        }
        _ => Err(MalformedHeader),
    }
}

fn is_end(line: &str) -> bool {
    line.eq_ignore_ascii_case("END")
}

/// Parses every feature of `text`, stopping at the first malformed line.
///
/// Blank lines and lines starting with `#` are ignored.
pub fn parse(text: &str) -> ParseResult<Vec<Feature>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let mut features = Vec::new();
    let fail = |line, kind| ParseError { line, kind };

    while let Some((header_line, content)) = lines.next() {
        let start = header(content).map_err(|kind| fail(header_line, kind))?;
        let mut feature = Feature::new(start);

        loop {
            let (line, content) = lines.next().ok_or(fail(header_line, UnterminatedFeature))?;
            if is_end(content) {
                break;
            }
            let segment = content.parse::<Segment>().map_err(|kind| fail(line, kind))?;
            feature.segments.push(segment);
        }

        log::trace!("feature at line {}: {} segment(s)", header_line, feature.segments.len());
        features.push(feature);
    }

    log::debug!("parsed {} feature(s)", features.len());
    Ok(features)
}
