use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A parsed Likert item key: `q<N>` optionally followed by `_<sub>` segments.
///
/// `q7` is item 7, `q13_1_3` is sub-item `[1, 3]` of item 13. Keys carrying a
/// non-numeric segment (`q12_reasons`) are not items.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemKey {
    pub number: u32,
    pub sub: Vec<u32>,
}

impl ItemKey {
    pub fn parse(key: &str) -> Option<Self> {
        let rest = key.strip_prefix('q')?;
        let mut segments = rest.split('_');
        let number = parse_digits(segments.next()?)?;
        let sub = segments.map(parse_digits).collect::<Option<Vec<_>>>()?;
        Some(Self { number, sub })
    }

    /// True for sub-items such as `q13_1_3`.
    pub fn is_composite(&self) -> bool {
        !self.sub.is_empty()
    }
}

// `str::parse::<u32>` accepts a leading `+`; item keys never carry one.
fn parse_digits(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl FromStr for ItemKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CoreError::InvalidItemKey(s.to_string()))
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.number)?;
        for sub in &self.sub {
            write!(f, "_{sub}")?;
        }
        Ok(())
    }
}
