use crate::colour::Colour;
use crate::document::*;
use crate::layout::{line_height, Margins, TextMeasurer};
use crate::pagesize::PageFormat;
use crate::units::{Mm, Pt};

/// Flows text down the pages of a [Document] using a vertical write cursor.
///
/// The cursor starts at the top margin. Each call to [LayoutEngine::add_text]
/// places a whole block of wrapped lines at the cursor, advances the cursor by
/// `lines × line_height(size)` and, if the cursor now sits below the bottom
/// margin, immediately starts a new page and resets the cursor to the top
/// margin.
///
/// The break check runs between blocks only. A block taller than the room left
/// on its page is still placed in full and runs past the bottom margin, and a
/// last block that ends below the margin leaves an empty page behind it.
pub struct LayoutEngine<M: TextMeasurer> {
    measurer: M,
    document: Document,
    cursor: Mm,
}

impl<M: TextMeasurer> LayoutEngine<M> {
    pub fn new(measurer: M, format: PageFormat, margins: Margins) -> LayoutEngine<M> {
        LayoutEngine {
            measurer,
            document: Document::new(format, margins),
            cursor: margins.top,
        }
    }

    /// Current vertical write position on the current page
    pub fn cursor(&self) -> Mm {
        self.cursor
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// The lowest position the cursor may reach before a page break is due
    pub fn bottom_limit(&self) -> Mm {
        self.document.format.height() - self.document.margins.bottom
    }

    /// Wrap and place a block of text, breaking to a new page afterwards if
    /// the block ended below the bottom margin
    pub fn add_text(&mut self, text: &str, size: Pt, weight: FontWeight) {
        let cursor = self.place_text(text, size, weight);
        if cursor > self.bottom_limit() {
            log::debug!(
                "cursor at {cursor} is past {}, breaking to page {}",
                self.bottom_limit(),
                self.document.page_count() + 1
            );
            self.break_page();
        }
    }

    /// Wrap and place a block of text and advance the cursor past it, without
    /// checking the bottom margin. Returns the new cursor position.
    pub fn place_text(&mut self, text: &str, size: Pt, weight: FontWeight) -> Mm {
        let content = self.document.content_box();
        let lines = self
            .measurer
            .split_text_to_size(text, size, weight, content.width());

        let run = TextRun {
            lines,
            style: TextStyle { size, weight },
            x: content.x1,
            y: self.cursor,
            line_height: line_height(size),
        };
        self.cursor += run.height();
        self.document
            .current_page_mut()
            .add_block(ContentBlock::Text(run));

        self.cursor
    }

    /// Place a single, unwrapped line of text with its baseline at `y`. The
    /// cursor is left untouched.
    pub fn place_line_at(&mut self, text: &str, size: Pt, weight: FontWeight, y: Mm) {
        let run = TextRun {
            lines: vec![text.to_string()],
            style: TextStyle { size, weight },
            x: self.document.margins.left,
            y,
            line_height: line_height(size),
        };
        self.document
            .current_page_mut()
            .add_block(ContentBlock::Text(run));
    }

    /// Move the cursor down without checking the bottom margin
    pub fn advance(&mut self, by: Mm) {
        self.cursor += by;
    }

    /// Draw a horizontal rule across the content width at the cursor
    pub fn rule(&mut self, colour: Colour) {
        let content = self.document.content_box();
        let y = self.cursor;
        self.document
            .current_page_mut()
            .add_block(ContentBlock::Rule(RulePlacement {
                from: (content.x1, y),
                to: (content.x2, y),
                colour,
            }));
    }

    /// Start a new page and move the cursor back to the top margin
    pub fn break_page(&mut self) {
        self.document.add_page();
        self.cursor = self.document.margins.top;
    }

    pub fn finish(self) -> Document {
        self.document
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::layout::StandardMetrics;

    /// Every character is one millimetre wide, every line fits 100 of them
    struct Fixed;

    impl TextMeasurer for Fixed {
        fn width_of_text(&self, text: &str, _size: Pt, _weight: FontWeight) -> Mm {
            Mm(text.chars().count() as f32)
        }
    }

    fn engine() -> LayoutEngine<Fixed> {
        // A4 with 55mm side margins leaves exactly 100mm of width
        LayoutEngine::new(
            Fixed,
            PageFormat::A4,
            Margins::trbl(Mm(10.0), Mm(55.0), Mm(10.0), Mm(55.0)),
        )
    }

    #[test]
    fn cursor_starts_at_the_top_margin() {
        let engine = engine();
        assert_eq!(engine.cursor(), Mm(10.0));
        assert_eq!(engine.bottom_limit(), Mm(287.0));
    }

    #[test]
    fn text_is_placed_before_the_cursor_advances() {
        let mut engine = engine();
        engine.add_text(&"x".repeat(250), Pt(10.0), FontWeight::Bold);

        // 3 lines at 10pt, 4mm apiece
        assert_eq!(engine.cursor(), Mm(22.0));

        let document = engine.finish();
        let run = document.pages[0].text_runs().next().expect("a run was placed");
        assert_eq!(run.y, Mm(10.0));
        assert_eq!(run.x, Mm(55.0));
        assert_eq!(run.lines.len(), 3);
        assert_eq!(run.style, TextStyle::bold(Pt(10.0)));
    }

    #[test]
    fn breaks_once_the_cursor_passes_the_bottom_margin() {
        let mut engine = engine();
        // each block is one line at 25pt, i.e. 10mm; 27 blocks bring the
        // cursor to exactly 280mm, the 28th to 290mm which is past 287mm
        for _ in 0..27 {
            engine.add_text("line", Pt(25.0), FontWeight::Normal);
        }
        assert_eq!(engine.document().page_count(), 1);
        engine.add_text("line", Pt(25.0), FontWeight::Normal);
        assert_eq!(engine.document().page_count(), 2);
        assert_eq!(engine.cursor(), Mm(10.0));

        engine.add_text("next", Pt(25.0), FontWeight::Normal);
        let document = engine.finish();
        assert_eq!(document.pages[0].text_runs().count(), 28);
        let next = document.pages[1].text_runs().next().expect("second page has text");
        assert_eq!(next.lines, vec!["next".to_string()]);
        assert_eq!(next.y, Mm(10.0));
    }

    #[test]
    fn a_cursor_exactly_on_the_limit_does_not_break() {
        let mut engine = LayoutEngine::new(Fixed, PageFormat::A4, Margins::all(Mm(0.0)));
        engine.advance(Mm(287.0));
        engine.add_text("fits", Pt(25.0), FontWeight::Normal);
        assert_eq!(engine.cursor(), Mm(297.0));
        assert_eq!(engine.document().page_count(), 1);
    }

    #[test]
    fn oversized_blocks_overflow_instead_of_splitting() {
        let mut engine = engine();
        // 80 lines at 10pt is 320mm, taller than the whole page
        engine.add_text(&"x".repeat(8000), Pt(10.0), FontWeight::Normal);
        let document = engine.finish();

        assert_eq!(document.page_count(), 2);
        let run = document.pages[0].text_runs().next().expect("run placed");
        assert_eq!(run.lines.len(), 80);
        assert!(run.y + run.height() > Mm(287.0));
        // the break is eager, so the trailing page is left empty
        assert!(document.pages[1].blocks.is_empty());
    }

    #[test]
    fn place_text_never_breaks() {
        let mut engine = engine();
        engine.advance(Mm(280.0));
        let cursor = engine.place_text("one line", Pt(25.0), FontWeight::Normal);
        assert_eq!(cursor, Mm(300.0));
        assert_eq!(engine.document().page_count(), 1);
    }

    #[test]
    fn rules_span_the_content_width() {
        let mut engine = engine();
        engine.advance(Mm(5.0));
        engine.rule(crate::colours::RULE_GREY);
        let document = engine.finish();
        match &document.pages[0].blocks[0] {
            ContentBlock::Rule(rule) => {
                assert_eq!(rule.from, (Mm(55.0), Mm(15.0)));
                assert_eq!(rule.to, (Mm(155.0), Mm(15.0)));
            }
            other => panic!("expected a rule, got {other:?}"),
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let lay_out = || {
            let mut engine =
                LayoutEngine::new(StandardMetrics, PageFormat::Letter, Margins::all(Mm(15.0)));
            for paragraph in 0..40 {
                engine.add_text(
                    &format!("Paragraph {paragraph}: {}", "lorem ipsum dolor ".repeat(12)),
                    Pt(11.0),
                    FontWeight::Normal,
                );
            }
            engine.finish().pages
        };
        assert_eq!(lay_out(), lay_out());
    }
}
