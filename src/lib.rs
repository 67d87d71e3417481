mod bitmap;
pub use bitmap::*;

mod colour;
pub use colour::*;

mod compose;
pub use compose::*;

mod document;
pub use document::*;

mod export;
pub use export::*;

mod info;
pub use info::*;

pub mod layout;

pub mod options;

pub mod pagesize;

mod paginate;
pub use paginate::*;

pub mod raster;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

pub mod writer;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
