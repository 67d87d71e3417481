use pdf_export::options::ElementExportOptions;
use pdf_export::pagesize::PageFormat;
use pdf_export::raster::SnapshotRasterizer;
use pdf_export::writer::PdfWriter;
use pdf_export::{Exporter, Slicing};
use std::path::PathBuf;

/// Paginate a pre-rendered snapshot of a tall element:
///
///     cargo run --example snapshot -- page.png [clip]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mut args = std::env::args().skip(1);
    let path = PathBuf::from(args.next().expect("usage: snapshot <image> [clip]"));
    let slicing = match args.next().as_deref() {
        Some("clip") => Slicing::ClipWindow,
        _ => Slicing::Crop,
    };

    let options = ElementExportOptions::new()
        .with_filename("snapshot.pdf")
        .with_format(PageFormat::Letter)
        .with_quality(1.0)
        .with_slicing(slicing);

    let saved = Exporter::new(PdfWriter::new("."))
        .export_element(&SnapshotRasterizer, path.as_path(), &options)
        .expect("can export snapshot");
    println!("wrote {} with {} page(s)", saved.filename, saved.page_count);
}
