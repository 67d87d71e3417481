use crate::{
    bitmap::Bitmap,
    colour::Colour,
    info::Info,
    layout::Margins,
    pagesize::PageFormat,
    rect::Rect,
    units::{Mm, Pt},
    writer::PageSession,
    WriteError,
};
use id_arena::{Arena, Id};

/// Weight of the standard face used for a run of text
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font size and weight of a run of text
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub size: Pt,
    pub weight: FontWeight,
}

impl TextStyle {
    pub fn normal(size: Pt) -> TextStyle {
        TextStyle {
            size,
            weight: FontWeight::Normal,
        }
    }

    pub fn bold(size: Pt) -> TextStyle {
        TextStyle {
            size,
            weight: FontWeight::Bold,
        }
    }
}

/// Lines of text placed on a page. `y` is the baseline of the first line;
/// subsequent lines are spaced by `line_height`.
#[derive(Clone, PartialEq, Debug)]
pub struct TextRun {
    pub lines: Vec<String>,
    pub style: TextStyle,
    pub x: Mm,
    pub y: Mm,
    pub line_height: Mm,
}

impl TextRun {
    /// Total vertical extent of the run
    pub fn height(&self) -> Mm {
        self.line_height * self.lines.len() as f32
    }
}

/// The part of a rendered image that a page reveals, measured from the top
/// of the full rendered image
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct VisibleSlice {
    pub top: Mm,
    pub height: Mm,
}

/// A bitmap drawn on a page
#[derive(Clone, PartialEq, Debug)]
pub struct ImagePlacement {
    pub bitmap: Id<Bitmap>,
    /// Where the bitmap is drawn; may extend beyond the page
    pub frame: Rect,
    /// Anything drawn outside of this rectangle is hidden
    pub clip: Option<Rect>,
    pub visible: VisibleSlice,
}

/// A straight line between two points
#[derive(Clone, PartialEq, Debug)]
pub struct RulePlacement {
    pub from: (Mm, Mm),
    pub to: (Mm, Mm),
    pub colour: Colour,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ContentBlock {
    Text(TextRun),
    Image(ImagePlacement),
    Rule(RulePlacement),
}

#[derive(Clone, PartialEq, Debug)]
pub struct Page {
    pub index: usize,
    /// The placed blocks, in the order they were added
    pub blocks: Vec<ContentBlock>,
}

impl Page {
    pub fn new(index: usize) -> Page {
        Page {
            index,
            blocks: Vec::default(),
        }
    }

    pub fn add_block(&mut self, block: ContentBlock) {
        self.blocks.push(block);
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.blocks.iter().filter_map(|block| match block {
            ContentBlock::Text(run) => Some(run),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &ImagePlacement> {
        self.blocks.iter().filter_map(|block| match block {
            ContentBlock::Image(image) => Some(image),
            _ => None,
        })
    }
}

/// A laid-out document: a fixed page format and margins, the pages in order,
/// and the bitmaps that image placements refer to. A document always has at
/// least one page.
///
/// Documents are plain values; nothing is serialized until
/// [Document::render] replays them into a [PageSession].
pub struct Document {
    pub format: PageFormat,
    pub margins: Margins,
    pub info: Option<Info>,
    pub bitmaps: Arena<Bitmap>,
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a document with a single empty page
    pub fn new(format: PageFormat, margins: Margins) -> Document {
        Document {
            format,
            margins,
            info: None,
            bitmaps: Arena::new(),
            pages: vec![Page::new(0)],
        }
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Append a new, empty page, returning its index
    pub fn add_page(&mut self) -> usize {
        let index = self.pages.len();
        self.pages.push(Page::new(index));
        index
    }

    /// The last page of the document, which is where content is added
    pub fn current_page_mut(&mut self) -> &mut Page {
        // a document is never without pages
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Store a bitmap in the document so placements can refer to it
    pub fn add_bitmap(&mut self, bitmap: Bitmap) -> Id<Bitmap> {
        self.bitmaps.alloc(bitmap)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The area within the margins
    pub fn content_box(&self) -> Rect {
        let (width, height) = self.format.size();
        Rect {
            x1: self.margins.left,
            y1: self.margins.top,
            x2: width - self.margins.right,
            y2: height - self.margins.bottom,
        }
    }

    /// Replay the document into a writer session: one `new_page` between
    /// consecutive pages, and every block in the order it was placed.
    pub fn render<S: PageSession>(&self, session: &mut S) -> Result<(), WriteError> {
        if let Some(info) = &self.info {
            session.set_info(info)?;
        }

        for page in self.pages.iter() {
            if page.index > 0 {
                session.new_page()?;
            }

            for block in page.blocks.iter() {
                match block {
                    ContentBlock::Text(run) => {
                        session.place_text(&run.lines, run.x, run.y, run.style)?;
                    }
                    ContentBlock::Image(placement) => {
                        let bitmap = self
                            .bitmaps
                            .get(placement.bitmap)
                            .ok_or(WriteError::BitmapMissing)?;
                        session.place_image(
                            placement.bitmap,
                            bitmap,
                            placement.frame,
                            placement.clip,
                        )?;
                    }
                    ContentBlock::Rule(rule) => {
                        session.draw_rule(rule.from, rule.to, rule.colour)?;
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_documents_have_one_page() {
        let document = Document::new(PageFormat::A4, Margins::all(Mm(10.0)));
        assert_eq!(document.page_count(), 1);
        assert_eq!(document.pages[0].index, 0);
        assert!(document.pages[0].blocks.is_empty());
    }

    #[test]
    fn content_box_sits_inside_the_margins() {
        let document = Document::new(
            PageFormat::Letter,
            Margins::trbl(Mm(10.0), Mm(20.0), Mm(30.0), Mm(40.0)),
        );
        let content = document.content_box();
        assert_eq!(content.x1, Mm(40.0));
        assert_eq!(content.y1, Mm(10.0));
        assert!((content.width().0 - 155.9).abs() < 1e-4);
        assert!((content.height().0 - 239.4).abs() < 1e-4);
    }

    #[test]
    fn pages_are_indexed_in_order() {
        let mut document = Document::new(PageFormat::A4, Margins::all(Mm(10.0)));
        assert_eq!(document.add_page(), 1);
        assert_eq!(document.add_page(), 2);
        document.current_page_mut().add_block(ContentBlock::Rule(RulePlacement {
            from: (Mm(0.0), Mm(0.0)),
            to: (Mm(1.0), Mm(0.0)),
            colour: crate::colours::BLACK,
        }));
        assert_eq!(document.pages[2].blocks.len(), 1);
        assert!(document.pages[1].blocks.is_empty());
    }
}
