//! Page writer backends.
//!
//! A [PageWriter] opens one [PageSession] per document. The session receives
//! drawing primitives in page order and serializes everything on
//! [PageSession::save]. Coordinates are millimetres from the top-left corner of
//! the page; text `y` values are baselines.

use crate::bitmap::Bitmap;
use crate::colour::Colour;
use crate::document::TextStyle;
use crate::info::Info;
use crate::pagesize::PageFormat;
use crate::rect::Rect;
use crate::units::Mm;
use crate::WriteError;
use id_arena::Id;

mod pdf;
mod recording;

pub use self::pdf::*;
pub use recording::*;

/// Creates writer sessions. Implementations must not share mutable state
/// between sessions so that exports can run concurrently.
pub trait PageWriter {
    type Session: PageSession;

    /// Start a new document whose pages all have the given format. The
    /// session starts out on its first page.
    fn new_document(&self, format: PageFormat) -> Result<Self::Session, WriteError>;
}

/// A single document being written
pub trait PageSession {
    /// What a successful save produces
    type Output;

    /// Attach document metadata
    fn set_info(&mut self, _info: &Info) -> Result<(), WriteError> {
        Ok(())
    }

    /// Draw lines of text starting with the first baseline at `(x, y)`
    fn place_text(
        &mut self,
        lines: &[String],
        x: Mm,
        y: Mm,
        style: TextStyle,
    ) -> Result<(), WriteError>;

    /// Draw `bitmap` scaled into `frame`, hiding anything outside of `clip`.
    /// The same `id` is passed every time the same bitmap is placed.
    fn place_image(
        &mut self,
        id: Id<Bitmap>,
        bitmap: &Bitmap,
        frame: Rect,
        clip: Option<Rect>,
    ) -> Result<(), WriteError>;

    /// Draw a straight line
    fn draw_rule(&mut self, from: (Mm, Mm), to: (Mm, Mm), colour: Colour)
        -> Result<(), WriteError>;

    /// Finish the current page and start a new one
    fn new_page(&mut self) -> Result<(), WriteError>;

    /// Serialize the document under `filename`
    fn save(self, filename: &str) -> Result<Self::Output, WriteError>;
}
