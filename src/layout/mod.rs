//! Text measurement and flow layout.
//!
//! This module provides the pieces that turn strings into positioned lines:
//!
//! - [`TextMeasurer`](crate::layout::TextMeasurer) measures and wraps text, with
//!   [`StandardMetrics`](crate::layout::StandardMetrics) implementing it for the
//!   standard Helvetica faces
//! - [`LayoutEngine`](crate::layout::LayoutEngine) places wrapped blocks at a
//!   vertical cursor and breaks pages when the cursor runs past the bottom margin
//! - [`Margins`](crate::layout::Margins) describe the content area of a page
//!
//! # Example
//!
//! ```
//! use pdf_export::layout::{LayoutEngine, Margins, StandardMetrics};
//! use pdf_export::pagesize::PageFormat;
//! use pdf_export::{FontWeight, Mm, Pt};
//!
//! let mut engine = LayoutEngine::new(StandardMetrics, PageFormat::A4, Margins::all(Mm(15.0)));
//! engine.add_text("Hello, world!", Pt(20.0), FontWeight::Bold);
//! assert_eq!(engine.cursor(), Mm(23.0));
//!
//! let document = engine.finish();
//! assert_eq!(document.page_count(), 1);
//! ```

mod engine;
mod margins;
pub mod metrics;
mod text;

pub use engine::*;
pub use margins::*;
pub use text::*;
