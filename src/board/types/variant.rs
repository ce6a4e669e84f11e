//! Rule variants.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The supported rule sets.
///
/// | variant       | board | setup rows | flying kings | men capture back | max capture |
/// |---------------|-------|------------|--------------|------------------|-------------|
/// | American      | 8x8   | 3          | no           | no               | no          |
/// | Brazilian     | 8x8   | 3          | yes          | yes              | yes         |
/// | International | 10x10 | 4          | yes          | yes              | yes         |
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Variant {
    American,
    #[default]
    Brazilian,
    International,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::American, Variant::Brazilian, Variant::International];

    #[inline]
    #[must_use]
    pub const fn board_size(self) -> usize {
        match self {
            Variant::International => 10,
            Variant::American | Variant::Brazilian => 8,
        }
    }

    /// Rows filled with men at the start of a game, per side
    #[inline]
    #[must_use]
    pub const fn setup_rows(self) -> usize {
        match self {
            Variant::International => 4,
            Variant::American | Variant::Brazilian => 3,
        }
    }

    /// Kings slide any distance along a diagonal
    #[inline]
    #[must_use]
    pub const fn flying_kings(self) -> bool {
        !matches!(self, Variant::American)
    }

    /// Men may capture backward
    #[inline]
    #[must_use]
    pub const fn men_capture_backward(self) -> bool {
        !matches!(self, Variant::American)
    }

    /// Only the captures taking the most pieces are legal
    #[inline]
    #[must_use]
    pub const fn maximum_capture(self) -> bool {
        !matches!(self, Variant::American)
    }

    /// A man crowned during a capture ends the turn there
    #[inline]
    #[must_use]
    pub const fn promotion_ends_capture(self) -> bool {
        matches!(self, Variant::International)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::American => write!(f, "American"),
            Variant::Brazilian => write!(f, "Brazilian"),
            Variant::International => write!(f, "International"),
        }
    }
}
