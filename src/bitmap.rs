use image::{DynamicImage, GenericImageView};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};

/// A captured raster snapshot. Bitmaps are stored in a [Document](crate::Document)
/// and referred to by image placements through their arena id.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pub image: DynamicImage,
}

/// Zlib-compressed pixel data ready to be embedded as an image XObject
pub(crate) struct EncodedBitmap {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
    pub mask: Option<Vec<u8>>,
}

impl Bitmap {
    pub fn new(image: DynamicImage) -> Bitmap {
        Bitmap { image }
    }

    /// A white RGB bitmap of the given pixel size
    pub fn blank(pixel_width: u32, pixel_height: u32) -> Bitmap {
        let mut image = image::RgbImage::new(pixel_width, pixel_height);
        image.pixels_mut().for_each(|p| p.0 = [255, 255, 255]);
        Bitmap {
            image: DynamicImage::ImageRgb8(image),
        }
    }

    pub fn pixel_width(&self) -> u32 {
        self.image.width()
    }

    pub fn pixel_height(&self) -> u32 {
        self.image.height()
    }

    /// Either dimension is zero, so nothing can be drawn
    pub fn is_empty(&self) -> bool {
        self.pixel_width() == 0 || self.pixel_height() == 0
    }

    /// Copy out the full-width strip of `rows` pixel rows starting at `top`
    pub fn crop_rows(&self, top: u32, rows: u32) -> Bitmap {
        Bitmap {
            image: self.image.crop_imm(0, top, self.pixel_width(), rows),
        }
    }

    pub(crate) fn encode(&self) -> EncodedBitmap {
        let level = CompressionLevel::DefaultLevel as u8;

        let mask = self.image.color().has_alpha().then(|| {
            let alphas: Vec<_> = self.image.pixels().map(|p| (p.2).0[3]).collect();
            compress_to_vec_zlib(&alphas, level)
        });

        let rgb = compress_to_vec_zlib(self.image.to_rgb8().as_raw(), level);

        EncodedBitmap {
            width: self.pixel_width(),
            height: self.pixel_height(),
            rgb,
            mask,
        }
    }
}
