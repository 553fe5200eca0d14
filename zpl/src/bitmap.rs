use std::{borrow::Cow, fmt::{self, Debug, Formatter}};

use image::{GrayImage, Luma};

use crate::{bits, command, payload, Error, Result, Stage};

/// A packed monochrome raster, ready to be sent as a graphic field.
///
/// # Format
/// - 1 = black, 0 = white
/// - MSB: left, LSB: right
/// - every row is `bytes_per_row()` bytes long
pub struct Bitmap<'a> {
	width: u32,
	height: u32,
	pixels: Cow<'a, [u8]>,
}

impl<'a> Bitmap<'a> {
	/// Create a new bitmap from packed `pixels`.
	pub fn new(width: u32, height: u32, pixels: impl Into<Cow<'a, [u8]>>) -> Result<Self> {
		Self::do_new(width, height, pixels.into())
	}

	/// Pack row-major `bits` into a bitmap, padding each row to whole bytes.
	pub fn from_bits(width: u32, height: u32, bits: &[bool]) -> Result<Bitmap<'static>> {
		if bits.len() != width as usize * height as usize {
			return Err(Error::DimensionMismatch {
				stage: Stage::BitPacker,
				expected: (width, height),
				actual: (width, bits.len().checked_div(width as usize).unwrap_or(0) as u32),
			});
		}
		Bitmap::new(width, height, bits::pack_rows(bits, width as usize))
	}

	fn do_new(width: u32, height: u32, pixels: Cow<'a, [u8]>) -> Result<Self> {
		let expected = width.div_ceil(8) as usize * height as usize;
		if expected != pixels.len() {
			return Err(Error::DimensionMismatch {
				stage: Stage::BitPacker,
				expected: (width, height),
				actual: (width, (pixels.len() / width.div_ceil(8).max(1) as usize) as u32),
			});
		}

		Ok(Self {
			width,
			height,
			pixels,
		})
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn bytes_per_row(&self) -> usize {
		self.width.div_ceil(8) as usize
	}

	pub fn total_bytes(&self) -> usize {
		self.pixels.len()
	}

	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	/// Whether the pixel at `(x, y)` is black, `None` if out of bounds.
	pub fn get(&self, x: u32, y: u32) -> Option<bool> {
		if x >= self.width || y >= self.height {
			return None;
		}

		let b = self.pixels[y as usize * self.bytes_per_row() + x as usize / 8];
		Some(b & (128 >> (x % 8)) != 0)
	}

	/// Lower-case hex rendering of the packed pixels.
	pub fn to_hex(&self) -> String {
		payload::encode_hex(&self.pixels)
	}

	/// The complete ZPL label printing this bitmap at the origin.
	pub fn to_command(&self) -> String {
		command::assemble(self.total_bytes(), self.bytes_per_row(), &self.to_hex())
	}

	/// Render back into a black and white image, for previewing.
	pub fn to_image(&self) -> GrayImage {
		GrayImage::from_fn(self.width, self.height, |x, y| {
			match self.get(x, y) {
				Some(true) => Luma([0x00]),
				_ => Luma([0xff]),
			}
		})
	}

	pub fn into_owned(self) -> Bitmap<'static> {
		Bitmap {
			width: self.width,
			height: self.height,
			pixels: Cow::Owned(self.pixels.into_owned()),
		}
	}
}

impl Debug for Bitmap<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f
			.debug_struct("Bitmap")
			.field("width", &self.width)
			.field("height", &self.height)
			.field("bytes", &self.total_bytes())
			.finish()
	}
}
