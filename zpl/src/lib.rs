//! Convert raster images into ZPL labels.
//!
//! The image is reduced to a single luminance channel, stretched to a
//! byte-aligned 2:1 label, thresholded to one bit per pixel, packed MSB first
//! and embedded as hex in a `^GFA` graphic field.
//!
//! ```no_run
//! let png = std::fs::read("label.png")?;
//! let cmd = zpl::encode(&png, 560)?;
//! assert!(cmd.starts_with("^XA^FO0,0^GFA,"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use image::DynamicImage;

mod bitmap;
mod error;

pub mod bits;
pub mod command;
pub mod dims;
pub mod gray;
pub mod payload;
pub mod resize;

pub use crate::{
	bitmap::Bitmap,
	dims::Dimensions,
	error::{Error, Result, Stage},
};

/// Conversion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
	/// Requested label width in dots, rounded up to a multiple of 8.
	pub width: i64,
}

impl Options {
	pub const DEFAULT_WIDTH: i64 = 560;

	pub fn with_width(width: i64) -> Self {
		Self { width }
	}

	pub fn dimensions(&self) -> Result<Dimensions> {
		Dimensions::resolve(self.width)
	}
}

impl Default for Options {
	fn default() -> Self {
		Self::with_width(Self::DEFAULT_WIDTH)
	}
}

/// Image to ZPL converter.
#[derive(Debug, Clone, Copy)]
pub struct Converter {
	dims: Dimensions,
}

impl Converter {
	/// Construct a converter, rejecting an unusable width up front.
	pub fn new(options: Options) -> Result<Self> {
		Ok(Self {
			dims: options.dimensions()?,
		})
	}

	pub fn dimensions(&self) -> Dimensions {
		self.dims
	}

	/// Decode `data` and convert it into a label.
	pub fn convert(&self, data: &[u8]) -> Result<String> {
		let img = gray::decode(data)?;
		self.convert_image(&img)
	}

	/// Convert an already decoded image into a label.
	pub fn convert_image(&self, img: &DynamicImage) -> Result<String> {
		let cmd = self.bitmap(img)?.to_command();
		log::debug!("assembled command of {} bytes", cmd.len());
		Ok(cmd)
	}

	/// Run every stage up to packing.
	pub fn bitmap(&self, img: &DynamicImage) -> Result<Bitmap<'static>> {
		let gray = gray::grayscale(img)?;
		let gray = resize::resample(&gray, self.dims)?;

		log::trace!("binarizing...");
		let bits = bits::binarize(&gray);

		log::trace!("packing {} bits...", bits.len());
		let pixels = bits::pack(&bits);
		log::debug!(
			"packed {} bytes, {} per row",
			pixels.len(),
			self.dims.bytes_per_row(),
		);

		Bitmap::new(self.dims.width, self.dims.height, pixels)
	}
}

impl Default for Converter {
	fn default() -> Self {
		Self {
			dims: Dimensions {
				width: 560,
				height: 280,
			},
		}
	}
}

/// Convert the encoded image `data` into a label `width` dots wide.
pub fn encode(data: &[u8], width: i64) -> Result<String> {
	Converter::new(Options::with_width(width))?.convert(data)
}
