//! Length units used throughout layout.
//!
//! Page geometry is expressed in millimetres ([`Mm`]) with the origin at the
//! top-left corner of the page and y growing downwards. Font sizes are
//! expressed in typographic points ([`Pt`]). The PDF writer converts to PDF
//! user space (points, bottom-left origin) at the very end.

use derive_more::{Add, AddAssign, Display, Div, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};

/// Millimetres per point
const MM_PER_PT: f32 = 25.4 / 72.0;

/// A length in typographic points (1/72 inch)
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    Sum,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display("{_0}pt")]
#[serde(transparent)]
pub struct Pt(pub f32);

/// A length in millimetres
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    Sum,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display("{_0}mm")]
#[serde(transparent)]
pub struct Mm(pub f32);

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Mm {
        Mm(pt.0 * MM_PER_PT)
    }
}

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Pt {
        Pt(mm.0 / MM_PER_PT)
    }
}

impl Mm {
    /// The larger of two lengths
    pub fn max(self, other: Mm) -> Mm {
        Mm(self.0.max(other.0))
    }

    /// The smaller of two lengths
    pub fn min(self, other: Mm) -> Mm {
        Mm(self.0.min(other.0))
    }

    /// How many times `unit` fits into `self`
    pub fn ratio(self, unit: Mm) -> f32 {
        self.0 / unit.0
    }
}
