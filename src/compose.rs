//! Builds complete documents for each kind of export.

use crate::bitmap::Bitmap;
use crate::colour::colours;
use crate::document::{Document, FontWeight};
use crate::info::Info;
use crate::layout::{LayoutEngine, Margins, StandardMetrics, TextMeasurer};
use crate::options::{CoverLetterOptions, ElementExportOptions, ResumeOptions};
use crate::paginate::ImagePaginator;
use crate::units::{Mm, Pt};
use serde::{Deserialize, Serialize};

/// Visual variant of a résumé
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Modern,
    Classic,
    Minimal,
}

/// Section heading and body text settings of a [Template]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TemplateStyle {
    pub heading: &'static str,
    pub heading_size: Pt,
    pub body_size: Pt,
}

impl Template {
    pub fn style(self) -> TemplateStyle {
        match self {
            Template::Modern => TemplateStyle {
                heading: "Professional Summary",
                heading_size: Pt(14.0),
                body_size: Pt(11.0),
            },
            Template::Classic => TemplateStyle {
                heading: "PROFESSIONAL SUMMARY",
                heading_size: Pt(14.0),
                body_size: Pt(10.0),
            },
            Template::Minimal => TemplateStyle {
                heading: "About",
                heading_size: Pt(12.0),
                body_size: Pt(10.0),
            },
        }
    }
}

/// Turns export inputs into laid-out [Document]s. Composition never fails;
/// anything that can go wrong happens while capturing or writing.
#[derive(Debug, Default, Clone)]
pub struct DocumentComposer<M: TextMeasurer = StandardMetrics> {
    measurer: M,
}

impl DocumentComposer<StandardMetrics> {
    pub fn new() -> DocumentComposer<StandardMetrics> {
        DocumentComposer {
            measurer: StandardMetrics,
        }
    }
}

impl<M: TextMeasurer> DocumentComposer<M> {
    pub fn with_measurer(measurer: M) -> DocumentComposer<M> {
        DocumentComposer { measurer }
    }

    /// Spread a captured element over as many pages as it needs
    pub fn compose_element(&self, bitmap: Bitmap, options: &ElementExportOptions) -> Document {
        let margins = options.margins();
        let mut document = Document::new(options.format, margins);
        let mut info = Info::new();
        info.title(&options.filename);
        document.set_info(info);

        ImagePaginator::new(options.format, margins, options.slicing).lay_out(&mut document, bitmap);
        document
    }

    /// Header, divider, then a single summary section in the template's style
    pub fn compose_resume(&self, text: &str, options: &ResumeOptions) -> Document {
        let style = options.template.style();
        let mut engine = LayoutEngine::new(
            &self.measurer,
            options.format,
            Margins::all(options.margin),
        );
        let mut info = Info::new();
        info.title("Resume")
            .author(&options.name)
            .subject(&options.title);
        engine.document_mut().set_info(info);

        engine.add_text(&options.name, Pt(20.0), FontWeight::Bold);
        engine.add_text(&options.title, Pt(12.0), FontWeight::Normal);
        engine.add_text(&options.contact, Pt(10.0), FontWeight::Normal);

        engine.advance(Mm(5.0));
        engine.rule(colours::RULE_GREY);
        engine.advance(Mm(5.0));

        engine.add_text(style.heading, style.heading_size, FontWeight::Bold);
        engine.add_text(text, style.body_size, FontWeight::Normal);

        engine.finish()
    }

    /// A single-page letter. The body is placed without a page break check and
    /// the closing is positioned from wherever the body ended, so a long body
    /// pushes the signature past the bottom margin.
    pub fn compose_cover_letter(&self, content: &str, options: &CoverLetterOptions) -> Document {
        let date = options.resolved_date();
        let mut engine = LayoutEngine::new(
            &self.measurer,
            options.format,
            Margins::all(options.margin),
        );
        let mut info = Info::new();
        info.title("Cover Letter")
            .author(&options.signer)
            .subject(format!("Letter to {}", options.recipient))
            .creation_date(date);
        engine.document_mut().set_info(info);

        let top = engine.cursor();
        engine.place_line_at(
            &date.format("%B %-d, %Y").to_string(),
            Pt(10.0),
            FontWeight::Normal,
            top,
        );
        engine.advance(Mm(15.0));

        let salutation = engine.cursor();
        engine.place_line_at(
            &format!("Dear {},", options.recipient),
            Pt(11.0),
            FontWeight::Normal,
            salutation,
        );
        engine.advance(Mm(10.0));

        engine.place_text(content, Pt(11.0), FontWeight::Normal);
        engine.advance(Mm(10.0));

        let closing = engine.cursor();
        engine.place_line_at("Sincerely,", Pt(11.0), FontWeight::Normal, closing + Mm(10.0));
        engine.advance(Mm(25.0));
        let signature = engine.cursor();
        engine.place_line_at(&options.signer, Pt(11.0), FontWeight::Normal, signature);

        engine.finish()
    }
}
