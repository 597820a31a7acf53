//! Product rating and its five-star rendering.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Number of star slots shown for a rating.
pub const STAR_SLOTS: usize = 5;

/// One slot of a star row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Star {
    Empty,
    Half,
    Full,
}

impl Star {
    /// Character used when rendering the slot in a terminal.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '☆',
            Self::Half => '⯪',
            Self::Full => '★',
        }
    }
}

/// A continuous product rating on a 0–5 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    /// Create a rating from its raw value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Derive the five star slots.
    ///
    /// Slot `i` is full when `rating - i >= 1.0`, half when `>= 0.5`,
    /// empty otherwise.
    #[must_use]
    pub fn stars(self) -> [Star; STAR_SLOTS] {
        let mut slots = [Star::Empty; STAR_SLOTS];
        for (slot, star) in (0_u32..).zip(slots.iter_mut()) {
            let diff = self.0 - f64::from(slot);
            if diff >= 1.0 {
                *star = Star::Full;
            } else if diff >= 0.5 {
                *star = Star::Half;
            }
        }
        slots
    }

    /// Star row as a printable string.
    #[must_use]
    pub fn star_row(self) -> String {
        self.stars().iter().map(|s| s.glyph()).collect()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}/5", self.0)
    }
}
