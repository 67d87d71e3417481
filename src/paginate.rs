//! Slicing one tall raster image across pages.
//!
//! The image is scaled uniformly to the content width, giving a rendered
//! height `H`. Each page has `P = page height − top − bottom` of room, and page
//! `k` reveals the strip `[k·P, min((k+1)·P, H))` of the rendered image. Two
//! strategies are available, see [Slicing].

use crate::bitmap::Bitmap;
use crate::document::{ContentBlock, Document, ImagePlacement, VisibleSlice};
use crate::layout::Margins;
use crate::pagesize::PageFormat;
use crate::rect::Rect;
use crate::units::Mm;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// How the pages of a tall image are produced
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slicing {
    /// The bitmap is cropped into per-page strips of pixel rows. Each strip is
    /// drawn at the top margin, nudged up by however much of its first row
    /// belongs to the previous page, and clipped to the content box. Produces
    /// `ceil(H / P)` pages.
    #[default]
    Crop,
    /// The full bitmap is drawn on every page, shifted up by `P` per page, and
    /// clipped to the content box. The loop runs while the remaining height is
    /// `≥ 0`, producing `floor(H / P) + 1` pages; when `H` is an exact multiple
    /// of `P` the last page reveals nothing.
    ClipWindow,
}

/// Where one page's share of the image goes
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlacement {
    /// Where the (full or cropped) bitmap is drawn on the page
    pub frame: Rect,
    /// Clip rectangle; the content box in both slicing modes
    pub clip: Option<Rect>,
    /// The strip of the rendered image this page reveals
    pub visible: VisibleSlice,
    /// Pixel rows of the source bitmap to draw, for [Slicing::Crop]
    pub source_rows: Option<Range<u32>>,
}

/// Computes per-page placements for a single image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePaginator {
    pub format: PageFormat,
    pub margins: Margins,
    pub slicing: Slicing,
}

impl ImagePaginator {
    pub fn new(format: PageFormat, margins: Margins, slicing: Slicing) -> ImagePaginator {
        ImagePaginator {
            format,
            margins,
            slicing,
        }
    }

    fn content_box(&self) -> Rect {
        let (width, height) = self.format.size();
        Rect {
            x1: self.margins.left,
            y1: self.margins.top,
            x2: width - self.margins.right,
            y2: height - self.margins.bottom,
        }
    }

    /// Height of an image of the given pixel size once scaled to the content width
    pub fn rendered_height(&self, pixel_width: u32, pixel_height: u32) -> Mm {
        let scale = self.content_box().width().0 / pixel_width as f32;
        Mm(pixel_height as f32 * scale)
    }

    /// One placement per page, in page order. Returns no placements for an
    /// image with a zero dimension.
    pub fn paginate(&self, pixel_width: u32, pixel_height: u32) -> Vec<PagePlacement> {
        if pixel_width == 0 || pixel_height == 0 {
            return Vec::new();
        }

        match self.slicing {
            Slicing::Crop => self.paginate_crop(pixel_width, pixel_height),
            Slicing::ClipWindow => self.paginate_clip_window(pixel_width, pixel_height),
        }
    }

    fn paginate_clip_window(&self, pixel_width: u32, pixel_height: u32) -> Vec<PagePlacement> {
        let content = self.content_box();
        let page_height = content.height();
        let width = content.width();
        let height = self.rendered_height(pixel_width, pixel_height);

        let mut placements = Vec::new();
        let mut remaining = height;
        let mut offset = content.y1;
        loop {
            let top = page_height * placements.len() as f32;
            let visible = VisibleSlice {
                top,
                height: (height - top).max(Mm(0.0)).min(page_height),
            };
            placements.push(PagePlacement {
                frame: Rect::from_origin_size(content.x1, offset, width, height),
                clip: Some(content),
                visible,
                source_rows: None,
            });

            remaining -= page_height;
            offset -= page_height;
            if remaining < Mm(0.0) {
                break;
            }
        }

        placements
    }

    fn paginate_crop(&self, pixel_width: u32, pixel_height: u32) -> Vec<PagePlacement> {
        let content = self.content_box();
        let width = content.width();
        let page_height = content.height();
        let height = self.rendered_height(pixel_width, pixel_height);
        // millimetres per pixel
        let scale = width.0 / pixel_width as f32;

        // tails under 1e-5 of a page are float noise from an exact multiple of P
        let pages = (height.ratio(page_height) - 1e-5).ceil().max(1.0) as usize;

        let mut placements = Vec::with_capacity(pages);
        for k in 0..pages {
            let top = page_height * k as f32;
            let bottom = (page_height * (k + 1) as f32).min(height);

            // the strip covers every pixel row the page's slice touches, so a
            // row straddling a page edge is drawn on both pages and clipped
            let start = ((top.0 / scale).floor() as u32).min(pixel_height - 1);
            let end = ((bottom.0 / scale).ceil() as u32).clamp(start + 1, pixel_height);
            let lead = top - Mm(start as f32 * scale);

            placements.push(PagePlacement {
                frame: Rect::from_origin_size(
                    content.x1,
                    content.y1 - lead,
                    width,
                    Mm((end - start) as f32 * scale),
                ),
                clip: Some(content),
                visible: VisibleSlice {
                    top,
                    height: bottom - top,
                },
                source_rows: Some(start..end),
            });
        }

        placements
    }

    /// Paginate `bitmap` into `document`, adding a page for every placement
    /// after the first. The document keeps its single page when the bitmap is
    /// empty.
    pub fn lay_out(&self, document: &mut Document, bitmap: Bitmap) {
        if bitmap.is_empty() {
            log::warn!(
                "bitmap is {}x{} pixels, nothing to paginate",
                bitmap.pixel_width(),
                bitmap.pixel_height()
            );
            return;
        }

        let placements = self.paginate(bitmap.pixel_width(), bitmap.pixel_height());
        log::debug!(
            "paginating {}x{} bitmap over {} page(s) ({:?})",
            bitmap.pixel_width(),
            bitmap.pixel_height(),
            placements.len(),
            self.slicing
        );

        let mut shared = None;
        for (index, placement) in placements.into_iter().enumerate() {
            if index > 0 {
                document.add_page();
            }

            let id = match &placement.source_rows {
                Some(rows) => {
                    document.add_bitmap(bitmap.crop_rows(rows.start, rows.end - rows.start))
                }
                None => *shared.get_or_insert_with(|| document.add_bitmap(bitmap.clone())),
            };

            document
                .current_page_mut()
                .add_block(ContentBlock::Image(ImagePlacement {
                    bitmap: id,
                    frame: placement.frame,
                    clip: placement.clip,
                    visible: placement.visible,
                }));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn letter() -> ImagePaginator {
        ImagePaginator::new(PageFormat::Letter, Margins::all(Mm(10.0)), Slicing::Crop)
    }

    fn covered(placements: &[PagePlacement]) -> Mm {
        placements.iter().map(|p| p.visible.height).sum()
    }

    fn assert_close(actual: Mm, expected: Mm) {
        let tolerance = 1e-3 + expected.0.abs() * 1e-5;
        assert!(
            (actual.0 - expected.0).abs() < tolerance,
            "{actual} is not {expected}"
        );
    }

    fn assert_contiguous(placements: &[PagePlacement]) {
        let mut expected_top = Mm(0.0);
        for placement in placements.iter() {
            assert_close(placement.visible.top, expected_top);
            expected_top = placement.visible.top + placement.visible.height;
        }
    }

    #[test]
    fn scales_to_the_content_width() {
        let height = letter().rendered_height(800, 3000);
        assert!((height.0 - 734.625).abs() < 1e-3);
    }

    #[test]
    fn tall_letter_snapshot_takes_three_pages() {
        for slicing in [Slicing::Crop, Slicing::ClipWindow] {
            let paginator = ImagePaginator {
                slicing,
                ..letter()
            };
            let placements = paginator.paginate(800, 3000);
            assert_eq!(placements.len(), 3, "{slicing:?}");
            assert_close(covered(&placements), Mm(734.625));
            assert_contiguous(&placements);
        }
    }

    #[test]
    fn clip_window_shifts_up_one_page_at_a_time() {
        let paginator = ImagePaginator {
            slicing: Slicing::ClipWindow,
            ..letter()
        };
        let placements = paginator.paginate(800, 3000);
        let offsets: Vec<f32> = placements.iter().map(|p| p.frame.y1.0).collect();
        assert!((offsets[0] - 10.0).abs() < 1e-4);
        assert!((offsets[1] - (10.0 - 259.4)).abs() < 1e-3);
        assert!((offsets[2] - (10.0 - 2.0 * 259.4)).abs() < 1e-3);
        for placement in placements.iter() {
            assert!((placement.frame.height().0 - 734.625).abs() < 1e-3);
            assert_eq!(placement.clip, Some(paginator.content_box()));
            assert!(placement.source_rows.is_none());
        }
    }

    #[test]
    fn exact_multiple_with_crop_has_no_trailing_page() {
        // A4 with 10mm margins: 190mm wide, 277mm tall content; a 190x554
        // bitmap renders at 1mm per pixel, exactly two pages tall
        let paginator = ImagePaginator::new(PageFormat::A4, Margins::all(Mm(10.0)), Slicing::Crop);
        let placements = paginator.paginate(190, 554);
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].source_rows, Some(0..277));
        assert_eq!(placements[1].source_rows, Some(277..554));
        assert_eq!(covered(&placements), Mm(554.0));
    }

    #[test]
    fn exact_multiple_with_clip_window_leaves_a_blank_trailing_page() {
        let paginator =
            ImagePaginator::new(PageFormat::A4, Margins::all(Mm(10.0)), Slicing::ClipWindow);
        let placements = paginator.paginate(190, 554);
        assert_eq!(placements.len(), 3);
        assert_eq!(placements[2].visible.height, Mm(0.0));
        assert_eq!(placements[2].visible.top, Mm(554.0));
        assert_eq!(covered(&placements), Mm(554.0));
    }

    /// Strips start at row 0, end at the last row, and never skip a row; two
    /// neighbouring strips share at most the row straddling their page edge
    fn assert_rows_cover(placements: &[PagePlacement], pixel_height: u32) {
        let mut next = 0;
        for placement in placements.iter() {
            let rows = placement.source_rows.clone().expect("crop sets rows");
            assert!(rows.start <= next, "{rows:?} skips row {next}");
            assert!(rows.start + 1 >= next, "{rows:?} repeats rows before {next}");
            assert!(rows.end > rows.start);
            next = rows.end;
        }
        assert_eq!(next, pixel_height);
    }

    /// Every page reveals at most `P` and its strip covers exactly what it reveals
    fn assert_pages_fit(paginator: &ImagePaginator, placements: &[PagePlacement]) {
        let content = paginator.content_box();
        for placement in placements.iter() {
            assert!(placement.visible.height.0 <= content.height().0 + 1e-4);
            assert!(placement.visible.height > Mm(0.0));
            assert_eq!(placement.clip, Some(content));
            assert!(placement.frame.y1.0 <= content.y1.0 + 1e-4);
            assert!(
                placement.frame.y2.0 + 1e-3 >= (content.y1 + placement.visible.height).0,
                "strip ends before the visible slice does"
            );
        }
    }

    fn check_crop(paginator: ImagePaginator, pixel_width: u32, pixel_height: u32) {
        let placements = paginator.paginate(pixel_width, pixel_height);
        let rendered = paginator.rendered_height(pixel_width, pixel_height);
        let pages = rendered.ratio(paginator.content_box().height()).ceil() as usize;

        assert_eq!(placements.len(), pages.max(1), "{pixel_width}x{pixel_height}");
        assert_rows_cover(&placements, pixel_height);
        assert_pages_fit(&paginator, &placements);
        assert_close(covered(&placements), rendered);
        assert_contiguous(&placements);
    }

    #[test]
    fn crop_strips_cover_the_bitmap() {
        for (pixel_width, pixel_height) in [(800, 3000), (1, 1), (333, 10_001), (1200, 900)] {
            check_crop(letter(), pixel_width, pixel_height);
        }
    }

    #[test]
    fn crop_rows_taller_than_a_page() {
        // a single pixel row renders 190mm tall, more than the 177mm of room
        let paginator = ImagePaginator::new(
            PageFormat::A4,
            Margins::trbl(Mm(60.0), Mm(10.0), Mm(60.0), Mm(10.0)),
            Slicing::Crop,
        );
        check_crop(paginator, 1, 10);
        assert_eq!(paginator.paginate(1, 10).len(), 11);
    }

    #[test]
    fn crop_keeps_a_thin_final_slice_on_its_own_page() {
        // 875px at 0.95mm per pixel is 831.25mm, just over three 277mm pages
        let paginator = ImagePaginator::new(PageFormat::A4, Margins::all(Mm(10.0)), Slicing::Crop);
        check_crop(paginator, 200, 875);

        let placements = paginator.paginate(200, 875);
        assert_eq!(placements.len(), 4);
        assert_close(placements[3].visible.height, Mm(0.25));
        assert_eq!(placements[3].source_rows, Some(874..875));
    }

    #[test]
    fn crop_strips_straddling_a_page_edge_are_shifted_up() {
        let placements = letter().paginate(800, 3000);
        // 259.4mm of room at 0.244875mm per pixel puts the first edge inside
        // row 1059
        assert_eq!(placements[0].source_rows, Some(0..1060));
        assert_eq!(placements[1].source_rows, Some(1059..2119));
        let lead = Mm(259.4) - Mm(1059.0 * 0.244875);
        assert_close(placements[1].frame.y1, Mm(10.0) - lead);
    }

    #[test]
    fn short_images_fit_on_one_page() {
        let placements = letter().paginate(800, 200);
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].frame.y1, Mm(10.0));
    }

    #[test]
    fn empty_bitmaps_have_no_placements() {
        assert!(letter().paginate(0, 100).is_empty());
        assert!(letter().paginate(100, 0).is_empty());

        let mut document = Document::new(PageFormat::Letter, Margins::all(Mm(10.0)));
        letter().lay_out(&mut document, Bitmap::blank(0, 0));
        assert_eq!(document.page_count(), 1);
        assert!(document.pages[0].blocks.is_empty());
    }

    #[test]
    fn lay_out_crops_one_bitmap_per_page() {
        let mut document = Document::new(PageFormat::Letter, Margins::all(Mm(10.0)));
        letter().lay_out(&mut document, Bitmap::blank(800, 3000));
        assert_eq!(document.page_count(), 3);

        // neighbouring strips share the row straddling their page edge
        let heights: u32 = document
            .pages
            .iter()
            .flat_map(|page| page.images())
            .map(|image| document.bitmaps[image.bitmap].pixel_height())
            .sum();
        assert_eq!(heights, 3002);
    }

    #[test]
    fn lay_out_shares_the_bitmap_for_clip_windows() {
        let paginator = ImagePaginator {
            slicing: Slicing::ClipWindow,
            ..letter()
        };
        let mut document = Document::new(PageFormat::Letter, Margins::all(Mm(10.0)));
        paginator.lay_out(&mut document, Bitmap::blank(800, 3000));
        assert_eq!(document.page_count(), 3);
        assert_eq!(document.bitmaps.len(), 1);
    }
}
