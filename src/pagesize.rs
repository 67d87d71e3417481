//! Paper formats supported for export.
//!
//! All formats are portrait, expressed as (width, height) in millimetres.
//!
//! # Example
//!
//! ```
//! use pdf_export::pagesize::PageFormat;
//! use pdf_export::Mm;
//!
//! let (width, height) = PageFormat::Letter.size();
//! assert_eq!(width, Mm(215.9));
//! assert_eq!(height, Mm(279.4));
//! ```

use crate::units::*;
use serde::{Deserialize, Serialize};

/// Page dimensions as (width, height)
pub type PageSize = (Mm, Mm);

pub const A4: PageSize = (Mm(210.0), Mm(297.0));
pub const LETTER: PageSize = (Mm(215.9), Mm(279.4));

/// A named paper format. Every page of a document shares the same format.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageFormat {
    /// ISO A4, 210 × 297 mm
    #[default]
    A4,
    /// US Letter, 215.9 × 279.4 mm
    Letter,
}

impl PageFormat {
    /// The (width, height) of the format
    pub fn size(self) -> PageSize {
        match self {
            PageFormat::A4 => A4,
            PageFormat::Letter => LETTER,
        }
    }

    pub fn width(self) -> Mm {
        self.size().0
    }

    pub fn height(self) -> Mm {
        self.size().1
    }
}
