//! Name normalization and camelCase-aware tokenization.

use serde::Serialize;

/// Rig-namespace prefixes removed before comparison. Matched ASCII
/// case-insensitively at the start of the name; at most one is stripped.
pub const RIG_PREFIXES: &[&str] = &["mixamorig:", "mixamorig_", "DEF-", "ORG-", "MCH-"];

const SEPARATORS: &[char] = &['_', '.', '-', ':', ' '];

fn is_separator(c: char) -> bool { SEPARATORS.contains(&c) }

pub fn strip_prefix(name: &str) -> &str {
    for prefix in RIG_PREFIXES {
        if name.len() >= prefix.len()
            && name.is_char_boundary(prefix.len())
            && name[..prefix.len()].eq_ignore_ascii_case(prefix)
        {
            return &name[prefix.len()..];
        }
    }
    name
}

/// Case- and separator-insensitive comparison key.
pub fn normalize(name: &str) -> String {
    strip_prefix(name)
        .chars()
        .filter(|c| !is_separator(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Splits on separators, then at camelCase / PascalCase boundaries.
///
/// `"mixamorig:LeftUpLeg"` -> `["left", "up", "leg"]`,
/// `"UpperArm_L_01"` -> `["upper", "arm", "l", "01"]`,
/// `"HTMLBone"` -> `["html", "bone"]`.
pub fn tokenize(name: &str) -> Vec<String> {
    strip_prefix(name)
        .split(is_separator)
        .flat_map(split_case)
        .map(|t| t.to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

fn split_case(segment: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = segment.char_indices().collect();
    let mut parts = Vec::new();
    let mut start = 0;
    for i in 1..chars.len() {
        let prev = chars[i - 1].1;
        let cur = chars[i].1;
        let lower_to_upper = prev.is_lowercase() && cur.is_uppercase();
        // "HTMLBone": split before the 'B' that opens the next word.
        let acronym_end = prev.is_uppercase()
            && cur.is_uppercase()
            && chars.get(i + 1).map_or(false, |(_, next)| next.is_lowercase());
        if lower_to_upper || acronym_end {
            let at = chars[i].0;
            parts.push(&segment[start..at]);
            start = at;
        }
    }
    parts.push(&segment[start..]);
    parts
}

/// Every comparison form of one name, computed once up front.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PreprocessedBone {
    pub original: String,
    pub stripped: String,
    pub normalized: String,
    pub tokens: Vec<String>,
}

impl PreprocessedBone {
    pub fn new(name: &str) -> Self {
        Self {
            original: name.to_string(),
            stripped: strip_prefix(name).to_string(),
            normalized: normalize(name),
            tokens: tokenize(name),
        }
    }

    /// True when `needle` occurs as a contiguous run of whole tokens.
    pub fn contains_tokens(&self, needle: &[String]) -> bool {
        if needle.is_empty() || needle.len() > self.tokens.len() { return false; }
        self.tokens.windows(needle.len()).any(|w| w == needle)
    }
}
