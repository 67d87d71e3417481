use crate::bitmap::Bitmap;
use crate::colour::Colour;
use crate::document::TextStyle;
use crate::info::Info;
use crate::pagesize::PageFormat;
use crate::rect::Rect;
use crate::units::Mm;
use crate::writer::{PageSession, PageWriter};
use crate::WriteError;
use id_arena::Id;

/// A primitive received by a [RecordingSession]
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Info(Info),
    Text {
        lines: Vec<String>,
        x: Mm,
        y: Mm,
        style: TextStyle,
    },
    Image {
        /// Index of the bitmap within its document
        bitmap: usize,
        pixel_width: u32,
        pixel_height: u32,
        frame: Rect,
        clip: Option<Rect>,
    },
    Rule {
        from: (Mm, Mm),
        to: (Mm, Mm),
        colour: Colour,
    },
    NewPage,
}

/// Everything a [RecordingSession] received, in order
#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    pub filename: String,
    pub format: PageFormat,
    pub ops: Vec<Op>,
}

impl Recording {
    pub fn page_count(&self) -> usize {
        1 + self.ops.iter().filter(|op| **op == Op::NewPage).count()
    }

    /// The operations of each page, in page order
    pub fn pages(&self) -> Vec<&[Op]> {
        self.ops.split(|op| *op == Op::NewPage).collect()
    }
}

/// An in-memory page writer that records primitives instead of serializing
/// them, for checking layouts without producing a real file.
///
/// It can be told to fail after a number of primitives to exercise error
/// handling part-way through a document.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingWriter {
    fail_after: Option<usize>,
}

impl RecordingWriter {
    pub fn new() -> RecordingWriter {
        RecordingWriter::default()
    }

    /// Accept `count` primitives per document, then fail every later one
    pub fn failing_after(count: usize) -> RecordingWriter {
        RecordingWriter {
            fail_after: Some(count),
        }
    }
}

impl PageWriter for RecordingWriter {
    type Session = RecordingSession;

    fn new_document(&self, format: PageFormat) -> Result<RecordingSession, WriteError> {
        Ok(RecordingSession {
            format,
            fail_after: self.fail_after,
            ops: Vec::new(),
        })
    }
}

pub struct RecordingSession {
    format: PageFormat,
    fail_after: Option<usize>,
    ops: Vec<Op>,
}

impl RecordingSession {
    fn record(&mut self, op: Op) -> Result<(), WriteError> {
        if let Some(limit) = self.fail_after {
            if self.ops.len() >= limit {
                return Err(WriteError::Backend(format!(
                    "refusing primitive {} of the document",
                    self.ops.len() + 1
                )));
            }
        }
        self.ops.push(op);
        Ok(())
    }
}

impl PageSession for RecordingSession {
    type Output = Recording;

    fn set_info(&mut self, info: &Info) -> Result<(), WriteError> {
        self.record(Op::Info(info.clone()))
    }

    fn place_text(
        &mut self,
        lines: &[String],
        x: Mm,
        y: Mm,
        style: TextStyle,
    ) -> Result<(), WriteError> {
        self.record(Op::Text {
            lines: lines.to_vec(),
            x,
            y,
            style,
        })
    }

    fn place_image(
        &mut self,
        id: Id<Bitmap>,
        bitmap: &Bitmap,
        frame: Rect,
        clip: Option<Rect>,
    ) -> Result<(), WriteError> {
        self.record(Op::Image {
            bitmap: id.index(),
            pixel_width: bitmap.pixel_width(),
            pixel_height: bitmap.pixel_height(),
            frame,
            clip,
        })
    }

    fn draw_rule(
        &mut self,
        from: (Mm, Mm),
        to: (Mm, Mm),
        colour: Colour,
    ) -> Result<(), WriteError> {
        self.record(Op::Rule { from, to, colour })
    }

    fn new_page(&mut self) -> Result<(), WriteError> {
        self.record(Op::NewPage)
    }

    fn save(self, filename: &str) -> Result<Recording, WriteError> {
        if let Some(limit) = self.fail_after {
            if self.ops.len() >= limit {
                return Err(WriteError::Backend(format!("refusing to save {filename}")));
            }
        }
        Ok(Recording {
            filename: filename.to_string(),
            format: self.format,
            ops: self.ops,
        })
    }
}
