//! URL path patterns such as `/rewind/:riotId/:region/calendar`.
//!
//! Matching is full-pattern: a path matches only when it has exactly as many
//! segments as the pattern. A longer path is never captured by a shorter
//! pattern, so `/rewind/a/NA/calendar` can not land on `/rewind/:riotId/:region`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::fmt;

use super::Params;
use crate::error::RouterError;

/// Characters escaped when a parameter value is written back into a path.
/// `#` matters most: Riot IDs look like `Name#TAG` and the fragment would
/// otherwise end there.
const SEGMENT: &AsciiSet = &SEGMENT_RAW.add(b'%');

/// `SEGMENT` without `%`, for values kept undecoded (see `decode_segment`).
const SEGMENT_RAW: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(raw: &str) -> Result<Self, RouterError> {
        if !raw.starts_with('/') {
            return Err(RouterError::invalid_pattern(raw, "must start with `/`"));
        }

        let mut segments = Vec::new();
        let body = raw.trim_start_matches('/');
        // "/" is the root pattern with zero segments.
        if !body.is_empty() {
            for part in body.trim_end_matches('/').split('/') {
                if part.is_empty() {
                    return Err(RouterError::invalid_pattern(raw, "empty segment"));
                }
                match part.strip_prefix(':') {
                    Some("") => {
                        return Err(RouterError::invalid_pattern(raw, "unnamed parameter"));
                    }
                    Some(name) => {
                        let duplicate = segments
                            .iter()
                            .any(|s| matches!(s, Segment::Param(p) if p == name));
                        if duplicate {
                            return Err(RouterError::invalid_pattern(
                                raw,
                                format!("parameter `{}` used twice", name),
                            ));
                        }
                        segments.push(Segment::Param(name.to_string()));
                    }
                    None => segments.push(Segment::Literal(part.to_string())),
                }
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a location path (no query, no fragment) against this pattern.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) => {
                    if !lit.eq_ignore_ascii_case(part) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.as_str(), decode_segment(part));
                }
            }
        }
        Some(params)
    }

    /// True when every path accepted by `other` is also accepted by `self`,
    /// i.e. `other` declared after `self` would be unreachable.
    pub fn covers(&self, other: &PathPattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(mine, theirs)| match (mine, theirs) {
                    (Segment::Param(_), _) => true,
                    (Segment::Literal(a), Segment::Literal(b)) => a.eq_ignore_ascii_case(b),
                    (Segment::Literal(_), Segment::Param(_)) => false,
                })
    }

    /// Reverse routing: substitute `params` into the pattern. `route` only
    /// names the route in the error.
    pub fn build(&self, route: &str, params: &Params) -> Result<String, RouterError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(lit) => path.push_str(lit),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| RouterError::MissingParam {
                            route: route.to_string(),
                            param: name.clone(),
                        })?;
                    // A value that does not decode was captured raw; writing its
                    // escapes back untouched keeps the link pointing at it.
                    let set = if is_decodable(value) { SEGMENT } else { SEGMENT_RAW };
                    path.extend(utf8_percent_encode(value, set));
                }
            }
        }
        Ok(path)
    }
}

/// Percent-decode a captured segment. Escapes that are not valid UTF-8
/// (`%FF`) leave the segment as it was written.
fn decode_segment(part: &str) -> String {
    match percent_decode_str(part).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => part.to_string(),
    }
}

fn is_decodable(value: &str) -> bool {
    percent_decode_str(value).decode_utf8().is_ok()
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
