use crate::compose::DocumentComposer;
use crate::document::Document;
use crate::layout::{StandardMetrics, TextMeasurer};
use crate::options::{CoverLetterOptions, ElementExportOptions, ResumeOptions};
use crate::raster::Rasterizer;
use crate::writer::{PageSession, PageWriter};
use crate::ExportError;

/// What a successful export with writer `W` produces
pub type ExportOutput<W> = <<W as PageWriter>::Session as PageSession>::Output;

/// Runs whole exports: capture (for elements), compose, then write and save.
///
/// Any failure aborts the export and is reported once as an [ExportError]; no
/// output is saved and nothing is retried. An exporter holds no mutable state,
/// so a single instance can serve concurrent exports.
#[derive(Debug, Clone)]
pub struct Exporter<W: PageWriter, M: TextMeasurer = StandardMetrics> {
    writer: W,
    composer: DocumentComposer<M>,
}

impl<W: PageWriter> Exporter<W, StandardMetrics> {
    pub fn new(writer: W) -> Exporter<W, StandardMetrics> {
        Exporter {
            writer,
            composer: DocumentComposer::new(),
        }
    }
}

impl<W: PageWriter, M: TextMeasurer> Exporter<W, M> {
    pub fn with_measurer(writer: W, measurer: M) -> Exporter<W, M> {
        Exporter {
            writer,
            composer: DocumentComposer::with_measurer(measurer),
        }
    }

    /// Capture `handle` at the configured quality and spread it over pages
    pub fn export_element<R: Rasterizer>(
        &self,
        rasterizer: &R,
        handle: &R::Handle,
        options: &ElementExportOptions,
    ) -> Result<ExportOutput<W>, ExportError> {
        let bitmap = rasterizer.capture(handle, options.quality).map_err(|e| {
            log::error!("failed to capture {}: {e}", options.filename);
            ExportError::from(e)
        })?;
        let document = self.composer.compose_element(bitmap, options);
        self.write(&document, &options.filename)
    }

    pub fn export_resume(
        &self,
        text: &str,
        options: &ResumeOptions,
    ) -> Result<ExportOutput<W>, ExportError> {
        let document = self.composer.compose_resume(text, options);
        self.write(&document, &options.filename)
    }

    pub fn export_cover_letter(
        &self,
        content: &str,
        options: &CoverLetterOptions,
    ) -> Result<ExportOutput<W>, ExportError> {
        let document = self.composer.compose_cover_letter(content, options);
        self.write(&document, &options.filename)
    }

    fn write(&self, document: &Document, filename: &str) -> Result<ExportOutput<W>, ExportError> {
        let result = self.writer.new_document(document.format).and_then(|mut session| {
            document.render(&mut session)?;
            session.save(filename)
        });
        result.map_err(|e| {
            log::error!("failed to write {filename}: {e}");
            ExportError::from(e)
        })
    }
}
