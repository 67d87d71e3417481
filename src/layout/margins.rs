use crate::units::Mm;
use serde::{Deserialize, Serialize};

/// Margins are used when laying out objects on a page. Layout functions keep
/// their write cursor between the top and bottom margins and wrap text to the
/// width between the left and right margins; the margins are guidelines and do
/// not by themselves stop content from overflowing.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: Mm,
    pub right: Mm,
    pub bottom: Mm,
    pub left: Mm,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Mm, right: Mm, bottom: Mm, left: Mm) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Mm>>(value: D) -> Margins {
        let value: Mm = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}
