use pdf_export::options::ResumeOptions;
use pdf_export::writer::PdfWriter;
use pdf_export::{Exporter, Template};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let exporter = Exporter::new(PdfWriter::new("."));
    let summary = lipsum::lipsum_words(120);

    for template in [Template::Modern, Template::Classic, Template::Minimal] {
        let options = ResumeOptions::new()
            .with_template(template)
            .with_filename(format!("resume-{template:?}.pdf").to_lowercase())
            .with_header(
                "Jordan Example",
                "Software Developer",
                "jordan@example.com | (555) 010-0199",
            );
        exporter
            .export_resume(&summary, &options)
            .expect("can export resume");
    }
}
