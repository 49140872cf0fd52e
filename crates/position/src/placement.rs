//! Placement parsing: a side plus a cross-axis alignment.

use crate::error::{PositionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which side of the reference element the floating element sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Above the reference
    Top,
    /// Below the reference
    Bottom,
    /// To the left of the reference
    Left,
    /// To the right of the reference
    Right,
}

impl Side {
    /// All sides.
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// The side across the reference element.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// True for `top` and `bottom`, whose cross axis is horizontal.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "top" => Ok(Side::Top),
            "bottom" => Ok(Side::Bottom),
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(PositionError::InvalidPlacement(format!("unknown side '{}'", other))),
        }
    }
}

/// Cross-axis alignment relative to the reference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Leading edges aligned
    Start,
    /// Centered on the reference midpoint
    #[default]
    Center,
    /// Trailing edges aligned
    End,
}

impl Alignment {
    /// Order in which auto-align tries alternatives.
    pub const ALL: [Alignment; 3] = [Alignment::Start, Alignment::Center, Alignment::End];

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Start => "start",
            Alignment::Center => "center",
            Alignment::End => "end",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "start" => Ok(Alignment::Start),
            "center" => Ok(Alignment::Center),
            "end" => Ok(Alignment::End),
            other => Err(PositionError::InvalidPlacement(format!("unknown alignment '{}'", other))),
        }
    }
}

/// A side and alignment, written as `"side"` or `"side-alignment"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Placement {
    /// Side of the reference element
    pub side: Side,
    /// Cross-axis alignment
    pub alignment: Alignment,
}

impl Placement {
    /// Creates a placement.
    #[inline]
    pub fn new(side: Side, alignment: Alignment) -> Self {
        Self { side, alignment }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::new(Side::Bottom, Alignment::Center)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alignment {
            Alignment::Center => write!(f, "{}", self.side),
            alignment => write!(f, "{}-{}", self.side, alignment),
        }
    }
}

impl FromStr for Placement {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (side, alignment) = match s.split_once('-') {
            Some((side, alignment)) => (side.parse()?, alignment.parse()?),
            None => (s.parse()?, Alignment::Center),
        };
        Ok(Self { side, alignment })
    }
}

impl TryFrom<String> for Placement {
    type Error = PositionError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Placement> for String {
    fn from(placement: Placement) -> Self {
        placement.to_string()
    }
}

/// Parses `"side"` or `"side-alignment"`; alignment defaults to `center`.
///
/// # Example
/// ```
/// use sveltacular_position::{parse_placement, Alignment, Side};
///
/// let placement = parse_placement("bottom-end").unwrap();
/// assert_eq!(placement.side, Side::Bottom);
/// assert_eq!(placement.alignment, Alignment::End);
/// ```
pub fn parse_placement(placement: &str) -> Result<Placement> {
    placement.parse()
}

/// Returns the side across the reference element.
#[inline]
pub fn get_opposite_side(side: Side) -> Side {
    side.opposite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_alignment() {
        let p = parse_placement("bottom-end").unwrap();
        assert_eq!(p, Placement::new(Side::Bottom, Alignment::End));
    }

    #[test]
    fn test_parse_side_only_defaults_to_center() {
        let p = parse_placement("top").unwrap();
        assert_eq!(p, Placement::new(Side::Top, Alignment::Center));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_placement("middle").is_err());
        assert!(parse_placement("top-middle").is_err());
        assert!(parse_placement("").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for s in ["left-start", "right-end", "top", "bottom"] {
            assert_eq!(parse_placement(s).unwrap().to_string(), s);
        }
        assert_eq!(parse_placement("top-center").unwrap().to_string(), "top");
    }

    #[test]
    fn test_opposite_side() {
        assert_eq!(get_opposite_side(Side::Top), Side::Bottom);
        assert_eq!(get_opposite_side(Side::Left), Side::Right);
        for side in Side::ALL {
            assert_eq!(get_opposite_side(get_opposite_side(side)), side);
        }
    }

    #[test]
    fn test_serde_as_string() {
        let p: Placement = serde_json::from_str("\"left-start\"").unwrap();
        assert_eq!(p, Placement::new(Side::Left, Alignment::Start));
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"left-start\"");
        assert!(serde_json::from_str::<Placement>("\"diagonal\"").is_err());
    }
}
