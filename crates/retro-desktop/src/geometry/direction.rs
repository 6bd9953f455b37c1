//! Resize handle directions

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use crate::error::DesktopError;

/// Edges a resize handle moves: any combination of N, S, E and W.
///
/// Handles in the shell are the four edges and the four corners, so only
/// those eight combinations can be parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ResizeDirection {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl ResizeDirection {
    pub const N: Self = Self::edges(true, false, false, false);
    pub const S: Self = Self::edges(false, true, false, false);
    pub const E: Self = Self::edges(false, false, true, false);
    pub const W: Self = Self::edges(false, false, false, true);
    pub const NE: Self = Self::edges(true, false, true, false);
    pub const NW: Self = Self::edges(true, false, false, true);
    pub const SE: Self = Self::edges(false, true, true, false);
    pub const SW: Self = Self::edges(false, true, false, true);

    /// All handle directions, edges first
    pub const ALL: [Self; 8] = [
        Self::N, Self::S, Self::E, Self::W,
        Self::NE, Self::NW, Self::SE, Self::SW,
    ];

    const fn edges(north: bool, south: bool, east: bool, west: bool) -> Self {
        Self { north, south, east, west }
    }

    /// Check if this is a corner handle
    #[inline]
    pub fn is_corner(&self) -> bool {
        (self.north || self.south) && (self.east || self.west)
    }

    /// Handle designation as used in the `resize-<dir>` class names
    pub fn as_str(&self) -> &'static str {
        match (self.north, self.south, self.east, self.west) {
            (true, false, false, false) => "n",
            (false, true, false, false) => "s",
            (false, false, true, false) => "e",
            (false, false, false, true) => "w",
            (true, false, true, false) => "ne",
            (true, false, false, true) => "nw",
            (false, true, true, false) => "se",
            (false, true, false, true) => "sw",
            _ => "",
        }
    }

    /// Get CSS cursor style for this handle
    pub fn cursor(&self) -> &'static str {
        match self.as_str() {
            "n" | "s" => "ns-resize",
            "e" | "w" => "ew-resize",
            "ne" | "sw" => "nesw-resize",
            "nw" | "se" => "nwse-resize",
            _ => "default",
        }
    }
}

impl FromStr for ResizeDirection {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let direction = match s {
            "n" => Self::N,
            "s" => Self::S,
            "e" => Self::E,
            "w" => Self::W,
            "ne" => Self::NE,
            "nw" => Self::NW,
            "se" => Self::SE,
            "sw" => Self::SW,
            other => return Err(DesktopError::UnknownResizeDirection(other.to_string())),
        };
        Ok(direction)
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ResizeDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
