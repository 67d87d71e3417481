use pdf_export::options::CoverLetterOptions;
use pdf_export::writer::PdfWriter;
use pdf_export::Exporter;

fn main() {
    env_logger::init();

    let body = (0..3)
        .map(|_| lipsum::lipsum_words(90))
        .collect::<Vec<_>>()
        .join("\n\n");

    let options = CoverLetterOptions::new()
        .with_recipient("Hiring Committee")
        .with_signer("Jordan Example");

    let saved = Exporter::new(PdfWriter::new("."))
        .export_cover_letter(&body, &options)
        .expect("can export cover letter");
    println!("wrote {}", saved.filename);
}
