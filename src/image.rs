use crate::refs::{ObjectReferences, RefType};
use crate::Error;
use image::{ColorType, DynamicImage};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};

enum ImageData {
    /// An RGB8 JPEG whose bytes can be embedded as-is with `DctDecode`
    Jpeg(Vec<u8>),
    /// Anything else: decoded pixels, deflated at write time
    Raster(DynamicImage),
}

/// A raster image (typically the institution logo stamped in the sheet
/// header). Images are stored "globally" in the
/// [Document](crate::Document) and placed on pages by reference, so one
/// logo used on many pages is only embedded once.
pub struct Image {
    data: ImageData,
    /// Pixel width of the source image
    pub width: f32,
    /// Pixel height of the source image
    pub height: f32,
}

impl Image {
    /// Load an image from encoded bytes (PNG, JPEG, ...). RGB JPEGs keep
    /// their original bytes and are embedded directly; everything else is
    /// decoded and re-compressed losslessly.
    pub fn from_bytes(data: &[u8]) -> Result<Image, Error> {
        let format = image::guess_format(data)?;
        let decoded = image::load_from_memory_with_format(data, format)?;

        match (format, decoded.color()) {
            (image::ImageFormat::Jpeg, ColorType::Rgb8) => Ok(Image {
                width: decoded.width() as f32,
                height: decoded.height() as f32,
                data: ImageData::Jpeg(data.to_vec()),
            }),
            _ => Ok(Self::from_dynamic(decoded)),
        }
    }

    /// Wrap an already-decoded image.
    pub fn from_dynamic(image: DynamicImage) -> Image {
        Image {
            width: image.width() as f32,
            height: image.height() as f32,
            data: ImageData::Raster(image),
        }
    }

    /// Width over height of the source pixels, for aspect-preserving
    /// placement.
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        image_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), Error> {
        let id = refs.gen(RefType::Image(image_index));

        let (filter, bytes, mask) = match &self.data {
            ImageData::Jpeg(bytes) => (Filter::DctDecode, bytes.clone(), None),
            ImageData::Raster(image) => {
                use image::GenericImageView;
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<_> = image.pixels().map(|p| (p.2).0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);
                (Filter::FlateDecode, bytes, mask)
            }
        };

        let mut image = writer.image_xobject(id, bytes.as_slice());
        image.filter(filter);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);

        let mask_id = mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));
        if let Some(mask_id) = &mask_id {
            image.s_mask(*mask_id);
        }

        image.finish();

        if let (Some(mask_id), Some(mask)) = (mask_id, mask) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_decoded_pixels() {
        let pixels = image::RgbImage::new(12, 8);
        let img = Image::from_dynamic(DynamicImage::ImageRgb8(pixels));
        assert_eq!(img.width, 12.0);
        assert_eq!(img.height, 8.0);
        assert!((img.aspect_ratio() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn decodes_encoded_bytes() {
        let pixels = image::RgbImage::from_pixel(4, 4, image::Rgb([0x1f, 0x4e, 0x79]));
        let mut bytes: Vec<u8> = Vec::new();
        DynamicImage::ImageRgb8(pixels)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageOutputFormat::Png,
            )
            .unwrap();

        let img = Image::from_bytes(&bytes).unwrap();
        assert_eq!(img.width, 4.0);
        assert_eq!(img.height, 4.0);
    }
}
