use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageError, ImageReader, Luma};

use crate::{Error, Result};

/// Decode an encoded image (PNG, JPEG, ...) into a raster.
/// The format is guessed from the content.
pub fn decode(data: &[u8]) -> Result<DynamicImage> {
	log::trace!("decoding {} bytes...", data.len());
	let img = ImageReader::new(Cursor::new(data))
		.with_guessed_format()
		.map_err(|e| Error::Decode(ImageError::IoError(e)))?
		.decode()
		.map_err(Error::Decode)?;

	if img.width() == 0 || img.height() == 0 {
		return Err(Error::EmptyImage);
	}
	Ok(img)
}

/// Convert `img` to a single luminance channel.
///
/// Alpha is flattened onto a white background, so fully transparent pixels
/// end up at 255 and never print.
pub fn grayscale(img: &DynamicImage) -> Result<GrayImage> {
	let (w, h) = (img.width(), img.height());
	if w == 0 || h == 0 {
		return Err(Error::EmptyImage);
	}

	let la = img.to_luma_alpha8();
	let gray = GrayImage::from_fn(w, h, |x, y| {
		let [l, a] = la.get_pixel(x, y).0;
		Luma([over_white(l, a)])
	});
	log::trace!("converted {w}x{h} image to grayscale");
	Ok(gray)
}

fn over_white(l: u8, a: u8) -> u8 {
	let (l, a) = (l as u32, a as u32);
	((l * a + 255 * (255 - a) + 127) / 255) as u8
}
