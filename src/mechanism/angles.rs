//! Fault angle domains and canonical wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which of the three fault angles a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleKind {
    /// Compass bearing of the fault trace, clockwise from North: [0, 360).
    Strike,
    /// Inclination of the fault plane below horizontal: [0, 90].
    Dip,
    /// Slip direction in the fault plane, from the strike direction: (-180, 180].
    Rake,
}

impl AngleKind {
    /// Returns all three kinds in argument order.
    pub const fn all() -> [AngleKind; 3] {
        [AngleKind::Strike, AngleKind::Dip, AngleKind::Rake]
    }

    /// Returns the lowercase name used in messages and CLI output.
    pub const fn name(self) -> &'static str {
        match self {
            AngleKind::Strike => "strike",
            AngleKind::Dip => "dip",
            AngleKind::Rake => "rake",
        }
    }

    /// Returns the documented domain in interval notation.
    pub const fn domain(self) -> &'static str {
        match self {
            AngleKind::Strike => "[0, 360)",
            AngleKind::Dip => "[0, 90]",
            AngleKind::Rake => "(-180, 180]",
        }
    }

    /// Checks whether `deg` lies in this kind's domain.
    ///
    /// NaN and infinities are never contained.
    pub fn contains(self, deg: f64) -> bool {
        match self {
            AngleKind::Strike => (0.0..360.0).contains(&deg),
            AngleKind::Dip => (0.0..=90.0).contains(&deg),
            // No std range excludes its start bound.
            AngleKind::Rake => deg > -180.0 && deg <= 180.0,
        }
    }
}

impl fmt::Display for AngleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a strike angle into [0, 360).
pub fn wrap_strike(deg: f64) -> f64 {
    let w = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if w >= 360.0 {
        0.0
    } else {
        w
    }
}

/// Maps a rake angle into (-180, 180]. Both -180 and 180 map to 180.
pub fn wrap_rake(deg: f64) -> f64 {
    let w = wrap_strike(deg);
    if w > 180.0 {
        w - 360.0
    } else {
        w
    }
}
