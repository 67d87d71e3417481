use crate::bitmap::Bitmap;
use crate::colour::{colours, Colour};
use crate::document::{FontWeight, TextStyle};
use crate::info::Info;
use crate::layout::{line_height, metrics};
use crate::pagesize::PageFormat;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::{Mm, Pt};
use crate::writer::{PageSession, PageWriter};
use crate::WriteError;
use id_arena::Id;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Ref, Str};
use std::collections::HashMap;
use std::path::PathBuf;

/// Width of separator rules
const RULE_WIDTH: Mm = Mm(0.2);

#[derive(Debug, Clone, PartialEq)]
enum Destination {
    Directory(PathBuf),
    Memory,
}

/// Writes documents as PDF using the non-embedded Helvetica base fonts.
///
/// The whole document is built in memory and only written out in
/// [PageSession::save], in a single write, so a failed export never leaves a
/// partial file behind.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfWriter {
    destination: Destination,
}

impl PdfWriter {
    /// Save documents into `directory`, named by the export's filename
    pub fn new<P: Into<PathBuf>>(directory: P) -> PdfWriter {
        PdfWriter {
            destination: Destination::Directory(directory.into()),
        }
    }

    /// Keep saved documents in memory only
    pub fn in_memory() -> PdfWriter {
        PdfWriter {
            destination: Destination::Memory,
        }
    }
}

/// A finished PDF
#[derive(Debug, Clone, PartialEq)]
pub struct SavedPdf {
    pub filename: String,
    /// Where the file was written, unless the writer is in-memory
    pub path: Option<PathBuf>,
    pub page_count: usize,
    pub bytes: Vec<u8>,
}

impl PageWriter for PdfWriter {
    type Session = PdfSession;

    fn new_document(&self, format: PageFormat) -> Result<PdfSession, WriteError> {
        let mut refs = ObjectReferences::new();
        let catalog = refs.gen(RefType::Catalog);
        let page_tree = refs.gen(RefType::PageTree);
        refs.gen(RefType::Font(FontWeight::Normal));
        refs.gen(RefType::Font(FontWeight::Bold));

        Ok(PdfSession {
            destination: self.destination.clone(),
            format,
            writer: Pdf::new(),
            refs,
            catalog,
            page_tree,
            info: None,
            page_refs: Vec::new(),
            content: Content::new(),
            page_images: Vec::new(),
            images: HashMap::new(),
        })
    }
}

/// A PDF document being written by a [PdfWriter]
pub struct PdfSession {
    destination: Destination,
    format: PageFormat,
    writer: Pdf,
    refs: ObjectReferences,
    catalog: Ref,
    page_tree: Ref,
    info: Option<Info>,
    page_refs: Vec<Ref>,
    /// content stream of the page currently being written
    content: Content,
    /// images referenced by the current page
    page_images: Vec<usize>,
    /// images already embedded, keyed by the document's bitmap id
    images: HashMap<Id<Bitmap>, usize>,
}

fn font_name(weight: FontWeight) -> &'static [u8] {
    match weight {
        FontWeight::Normal => b"F1",
        FontWeight::Bold => b"F2",
    }
}

fn image_name(index: usize) -> String {
    format!("I{index}")
}

impl PdfSession {
    /// Convert a top-left based position in millimetres to PDF user space
    fn to_pdf(&self, x: Mm, y: Mm) -> (f32, f32) {
        let x: Pt = x.into();
        let y: Pt = (self.format.height() - y).into();
        (x.0, y.0)
    }

    /// Convert a top-left based rectangle to PDF `(x, y, width, height)`
    /// with `(x, y)` the lower-left corner
    fn to_pdf_rect(&self, rect: Rect) -> (f32, f32, f32, f32) {
        let (x, y) = self.to_pdf(rect.x1, rect.y2);
        let width: Pt = rect.width().into();
        let height: Pt = rect.height().into();
        (x, y, width.0, height.0)
    }

    fn write_image(&mut self, index: usize, bitmap: &Bitmap) {
        let encoded = bitmap.encode();
        let id = self.refs.gen(RefType::Image(index));
        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| self.refs.gen(RefType::ImageMask(index)));

        let mut image = self.writer.image_xobject(id, encoded.rgb.as_slice());
        image.filter(Filter::FlateDecode);
        image.width(encoded.width as i32);
        image.height(encoded.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        // add a transparency mask if we have one
        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = self.writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(encoded.width as i32);
            s_mask.height(encoded.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }
    }

    /// Write out the current page and its content stream
    fn flush_page(&mut self) -> Result<(), WriteError> {
        let index = self.page_refs.len();
        let page_id = self.refs.gen(RefType::Page(index));
        let content_id = self.refs.gen(RefType::ContentForPage(index));
        let content = std::mem::replace(&mut self.content, Content::new());
        let page_images = std::mem::take(&mut self.page_images);

        let font_regular = self
            .refs
            .get(RefType::Font(FontWeight::Normal))
            .ok_or_else(|| WriteError::Backend("regular font was never allocated".into()))?;
        let font_bold = self
            .refs
            .get(RefType::Font(FontWeight::Bold))
            .ok_or_else(|| WriteError::Backend("bold font was never allocated".into()))?;
        let image_refs = page_images
            .iter()
            .map(|&i| {
                self.refs
                    .get(RefType::Image(i))
                    .map(|id| (image_name(i), id))
                    .ok_or(WriteError::BitmapMissing)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (width, height) = self.format.size();
        let (width, height): (Pt, Pt) = (width.into(), height.into());

        {
            let mut page = self.writer.page(page_id);
            page.media_box(pdf_writer::Rect::new(0.0, 0.0, width.0, height.0));
            page.parent(self.page_tree);
            page.contents(content_id);

            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(Name(font_name(FontWeight::Normal)), font_regular);
            fonts.pair(Name(font_name(FontWeight::Bold)), font_bold);
            fonts.finish();

            if !image_refs.is_empty() {
                let mut x_objects = resources.x_objects();
                for (name, id) in image_refs.iter() {
                    x_objects.pair(Name(name.as_bytes()), *id);
                }
                x_objects.finish();
            }
            resources.finish();
        }

        self.writer.stream(content_id, &content.finish());
        self.page_refs.push(page_id);
        Ok(())
    }
}

impl PageSession for PdfSession {
    type Output = SavedPdf;

    fn set_info(&mut self, info: &Info) -> Result<(), WriteError> {
        self.info = Some(info.clone());
        Ok(())
    }

    fn place_text(
        &mut self,
        lines: &[String],
        x: Mm,
        y: Mm,
        style: TextStyle,
    ) -> Result<(), WriteError> {
        let leading = line_height(style.size);

        match colours::BLACK {
            Colour::RGB { r, g, b } => self.content.set_fill_rgb(r, g, b),
            Colour::Grey { g } => self.content.set_fill_gray(g),
        };
        self.content.begin_text();
        self.content
            .set_font(Name(font_name(style.weight)), style.size.0);
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let (px, py) = self.to_pdf(x, y + leading * i as f32);
            let encoded: Vec<u8> = line.chars().map(metrics::win_ansi).collect();
            self.content.set_text_matrix([1.0, 0.0, 0.0, 1.0, px, py]);
            self.content.show(Str(&encoded));
        }
        self.content.end_text();
        Ok(())
    }

    fn place_image(
        &mut self,
        id: Id<Bitmap>,
        bitmap: &Bitmap,
        frame: Rect,
        clip: Option<Rect>,
    ) -> Result<(), WriteError> {
        let index = match self.images.get(&id) {
            Some(&index) => index,
            None => {
                let index = self.images.len();
                self.write_image(index, bitmap);
                self.images.insert(id, index);
                index
            }
        };
        if !self.page_images.contains(&index) {
            self.page_images.push(index);
        }

        let (x, y, width, height) = self.to_pdf_rect(frame);
        let clip = clip.map(|clip| self.to_pdf_rect(clip));
        let name = image_name(index);

        self.content.save_state();
        if let Some((cx, cy, cw, ch)) = clip {
            self.content.rect(cx, cy, cw, ch);
            self.content.clip_nonzero();
            self.content.end_path();
        }
        self.content.transform([width, 0.0, 0.0, height, x, y]);
        self.content.x_object(Name(name.as_bytes()));
        self.content.restore_state();
        Ok(())
    }

    fn draw_rule(
        &mut self,
        from: (Mm, Mm),
        to: (Mm, Mm),
        colour: Colour,
    ) -> Result<(), WriteError> {
        let (x1, y1) = self.to_pdf(from.0, from.1);
        let (x2, y2) = self.to_pdf(to.0, to.1);
        let width: Pt = RULE_WIDTH.into();

        self.content.save_state();
        match colour {
            Colour::RGB { r, g, b } => self.content.set_stroke_rgb(r, g, b),
            Colour::Grey { g } => self.content.set_stroke_gray(g),
        };
        self.content.set_line_width(width.0);
        self.content.move_to(x1, y1);
        self.content.line_to(x2, y2);
        self.content.stroke();
        self.content.restore_state();
        Ok(())
    }

    fn new_page(&mut self) -> Result<(), WriteError> {
        self.flush_page()
    }

    fn save(mut self, filename: &str) -> Result<SavedPdf, WriteError> {
        self.flush_page()?;

        for (weight, base_font) in [
            (FontWeight::Normal, b"Helvetica".as_slice()),
            (FontWeight::Bold, b"Helvetica-Bold".as_slice()),
        ] {
            let id = self.refs.get_or_gen(RefType::Font(weight));
            self.writer
                .type1_font(id)
                .base_font(Name(base_font))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let page_count = self.page_refs.len();
        self.writer
            .pages(self.page_tree)
            .count(page_count as i32)
            .kids(self.page_refs.iter().copied());
        self.writer.catalog(self.catalog).pages(self.page_tree);

        if let Some(info) = &self.info {
            info.write(&mut self.refs, &mut self.writer);
        }

        let bytes = self.writer.finish();
        let path = match &self.destination {
            Destination::Directory(directory) => {
                let path = directory.join(filename);
                std::fs::write(&path, &bytes)?;
                Some(path)
            }
            Destination::Memory => None,
        };

        log::info!("saved {filename} ({page_count} page(s), {} bytes)", bytes.len());

        Ok(SavedPdf {
            filename: filename.to_string(),
            path,
            page_count,
            bytes,
        })
    }
}
