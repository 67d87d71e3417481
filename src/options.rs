//! Export configuration.
//!
//! Every export takes an explicit options value. Each recognised option has a
//! documented default, and the option structs deserialize from camelCase JSON
//! with any missing field falling back to that default.
//!
//! ```
//! use pdf_export::options::ElementExportOptions;
//! use pdf_export::pagesize::PageFormat;
//! use pdf_export::Mm;
//!
//! let options = ElementExportOptions::new()
//!     .with_filename("report.pdf")
//!     .with_format(PageFormat::Letter);
//! assert_eq!(options.quality, 2.0);
//! assert_eq!(options.margin_left, Mm(10.0));
//! ```

use crate::compose::Template;
use crate::layout::Margins;
use crate::pagesize::PageFormat;
use crate::paginate::Slicing;
use crate::units::Mm;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Options for exporting a rasterized element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementExportOptions {
    /// Name of the saved document, defaults to `document.pdf`
    pub filename: String,
    pub format: PageFormat,
    /// Scale the element is captured at. Only affects bitmap resolution, the
    /// pagination is computed from the bitmap's aspect ratio.
    pub quality: f32,
    pub margin_top: Mm,
    pub margin_right: Mm,
    pub margin_bottom: Mm,
    pub margin_left: Mm,
    pub slicing: Slicing,
}

impl Default for ElementExportOptions {
    fn default() -> Self {
        ElementExportOptions {
            filename: "document.pdf".to_string(),
            format: PageFormat::A4,
            quality: 2.0,
            margin_top: Mm(10.0),
            margin_right: Mm(10.0),
            margin_bottom: Mm(10.0),
            margin_left: Mm(10.0),
            slicing: Slicing::Crop,
        }
    }
}

impl ElementExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn with_format(mut self, format: PageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_quality(mut self, quality: f32) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margin_top = margins.top;
        self.margin_right = margins.right;
        self.margin_bottom = margins.bottom;
        self.margin_left = margins.left;
        self
    }

    pub fn with_slicing(mut self, slicing: Slicing) -> Self {
        self.slicing = slicing;
        self
    }

    pub fn margins(&self) -> Margins {
        Margins::trbl(
            self.margin_top,
            self.margin_right,
            self.margin_bottom,
            self.margin_left,
        )
    }
}

/// Options for exporting résumé text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeOptions {
    /// Name of the saved document, defaults to `resume.pdf`
    pub filename: String,
    pub template: Template,
    pub format: PageFormat,
    /// Margin on all four sides, defaults to 15mm
    pub margin: Mm,
    pub name: String,
    pub title: String,
    pub contact: String,
}

impl Default for ResumeOptions {
    fn default() -> Self {
        ResumeOptions {
            filename: "resume.pdf".to_string(),
            template: Template::Modern,
            format: PageFormat::A4,
            margin: Mm(15.0),
            name: "Your Name".to_string(),
            title: "Professional Title".to_string(),
            contact: "email@example.com | (123) 456-7890 | linkedin.com/in/yourprofile"
                .to_string(),
        }
    }
}

impl ResumeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    pub fn with_format(mut self, format: PageFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the name, professional title and contact line of the header
    pub fn with_header(
        mut self,
        name: impl Into<String>,
        title: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        self.name = name.into();
        self.title = title.into();
        self.contact = contact.into();
        self
    }
}

/// Options for exporting a cover letter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoverLetterOptions {
    /// Name of the saved document, defaults to `cover-letter.pdf`
    pub filename: String,
    /// Who the letter is addressed to, defaults to `Hiring Manager`
    pub recipient: String,
    /// Name under the signature, defaults to `Your Name`
    pub signer: String,
    pub format: PageFormat,
    /// Margin on all four sides, defaults to 20mm
    pub margin: Mm,
    /// Date printed at the top of the letter; today's local date when unset
    pub date: Option<NaiveDate>,
}

impl Default for CoverLetterOptions {
    fn default() -> Self {
        CoverLetterOptions {
            filename: "cover-letter.pdf".to_string(),
            recipient: "Hiring Manager".to_string(),
            signer: "Your Name".to_string(),
            format: PageFormat::A4,
            margin: Mm(20.0),
            date: None,
        }
    }
}

impl CoverLetterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    pub fn with_signer(mut self, signer: impl Into<String>) -> Self {
        self.signer = signer.into();
        self
    }

    pub fn with_format(mut self, format: PageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// The date to print, resolving an unset date to today
    pub fn resolved_date(&self) -> NaiveDate {
        self.date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn element_defaults() {
        let options = ElementExportOptions::default();
        assert_eq!(options.filename, "document.pdf");
        assert_eq!(options.format, PageFormat::A4);
        assert_eq!(options.quality, 2.0);
        assert_eq!(options.margins(), Margins::all(Mm(10.0)));
        assert_eq!(options.slicing, Slicing::Crop);
    }

    #[test]
    fn missing_json_fields_take_defaults() {
        let options: ElementExportOptions =
            serde_json::from_str(r#"{"format":"Letter","marginTop":25,"slicing":"clipWindow"}"#)
                .expect("options parse");
        assert_eq!(options.format, PageFormat::Letter);
        assert_eq!(options.margin_top, Mm(25.0));
        assert_eq!(options.margin_bottom, Mm(10.0));
        assert_eq!(options.filename, "document.pdf");
        assert_eq!(options.slicing, Slicing::ClipWindow);
    }

    #[test]
    fn resume_and_cover_letter_defaults() {
        let resume: ResumeOptions = serde_json::from_str(r#"{"template":"classic"}"#)
            .expect("options parse");
        assert_eq!(resume.template, Template::Classic);
        assert_eq!(resume.filename, "resume.pdf");
        assert_eq!(resume.margin, Mm(15.0));

        let letter: CoverLetterOptions =
            serde_json::from_str(r#"{"date":"2026-10-19"}"#).expect("options parse");
        assert_eq!(letter.recipient, "Hiring Manager");
        assert_eq!(letter.filename, "cover-letter.pdf");
        assert_eq!(
            letter.resolved_date(),
            NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
        );
    }
}
