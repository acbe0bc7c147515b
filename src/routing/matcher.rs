//! Path pattern compilation and matching.
//!
//! # Responsibilities
//! - Compile `/literal/:named` patterns into segments
//! - Align a concrete path against a pattern, binding named segments
//! - Render a pattern back into a concrete path (reverse lookup)
//!
//! # Design Decisions
//! - Literal segments are case-sensitive, compared byte-for-byte
//! - Named segments match any non-empty value; no decoding is applied
//! - Segment counts must be equal (no prefix matches)
//! - No regex to guarantee O(n) matching

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Parameters bound by a match, keyed by segment name.
pub type Params = BTreeMap<String, String>;

/// Marker that introduces a named segment.
pub const PARAM_SIGIL: char = ':';

/// Error produced when a pattern string cannot be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must start with '/'")]
    MissingLeadingSlash,

    #[error("pattern has an empty segment at position {0}")]
    EmptySegment(usize),

    #[error("named segment at position {0} has no name")]
    EmptyParamName(usize),

    #[error("parameter '{0}' appears more than once")]
    DuplicateParam(String),
}

/// Reason a pattern could not be rendered with the supplied parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No value was supplied for the named segment.
    Missing(String),
    /// The supplied value would not survive a round trip through `matches`.
    Invalid { param: String, value: String },
}

/// A single compiled pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Named(String),
}

/// A compiled path pattern such as `/champ/:champ`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Compile a pattern string.
    ///
    /// The root pattern `/` compiles to zero segments.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let rest = raw
            .strip_prefix('/')
            .ok_or(PatternError::MissingLeadingSlash)?;

        let mut segments = Vec::new();
        for (index, part) in split_segments(rest).enumerate() {
            if part.is_empty() {
                return Err(PatternError::EmptySegment(index));
            }

            match part.strip_prefix(PARAM_SIGIL) {
                Some("") => return Err(PatternError::EmptyParamName(index)),
                Some(name) => {
                    let seen = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Named(n) if n == name));
                    if seen {
                        return Err(PatternError::DuplicateParam(name.to_string()));
                    }
                    segments.push(Segment::Named(name.to_string()));
                }
                None => segments.push(Segment::Literal(part.to_string())),
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern as it was written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the named segments, in pattern order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Named(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Align `path` against this pattern.
    ///
    /// Returns the bound parameters on a full-length alignment, `None`
    /// otherwise. Paths not starting with `/` never match.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let rest = path.strip_prefix('/')?;
        let mut parts = split_segments(rest);
        let mut params = Params::new();

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Literal(_) => return None,
                Segment::Named(_) if part.is_empty() => return None,
                Segment::Named(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }

        // Leftover segments mean the path is longer than the pattern.
        if parts.next().is_some() {
            return None;
        }

        Some(params)
    }

    /// Substitute `params` into the pattern. Extra parameters are ignored.
    pub fn render(&self, params: &Params) -> Result<String, RenderError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(literal) => path.push_str(literal),
                Segment::Named(name) => {
                    let value = params
                        .get(name)
                        .ok_or_else(|| RenderError::Missing(name.clone()))?;
                    if !is_valid_param_value(value) {
                        return Err(RenderError::Invalid {
                            param: name.clone(),
                            value: value.clone(),
                        });
                    }
                    path.push_str(value);
                }
            }
        }

        Ok(path)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A value can be substituted only if the rendered path reaches `matches`
/// unchanged: no separators, no dot segments a client would collapse, and
/// nothing a client would percent-encode.
fn is_valid_param_value(value: &str) -> bool {
    !value.is_empty()
        && value != "."
        && value != ".."
        && !value
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace() || c.is_control())
}

/// Split the part of a path after its leading `/`. An empty remainder has
/// zero segments, which is what makes `/` the root.
fn split_segments(rest: &str) -> impl Iterator<Item = &str> {
    (!rest.is_empty()).then(|| rest.split('/')).into_iter().flatten()
}
