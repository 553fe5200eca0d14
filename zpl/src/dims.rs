use crate::{Error, Result};

/// Round `x` up to the next multiple of 8, or `None` on overflow.
pub fn align8(x: u32) -> Option<u32> {
	x.checked_add(7).map(|x| x & !7)
}

/// Target size of the label graphic.
///
/// Both sides are multiples of 8 and `height` is `align8(width / 2)`.
/// The source image is stretched to this size, its aspect ratio is not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
	pub width: u32,
	pub height: u32,
}

impl Dimensions {
	/// Resolve the requested label `width` into byte-aligned dimensions.
	pub fn resolve(width: i64) -> Result<Self> {
		let invalid = || Error::InvalidConfiguration { width };

		if width <= 0 {
			return Err(invalid());
		}

		let w = u32::try_from(width)
			.ok()
			.and_then(align8)
			.ok_or_else(invalid)?;
		let h = align8(w / 2).ok_or_else(invalid)?;

		log::debug!("resolved width {width} to {w}x{h}");
		Ok(Self {
			width: w,
			height: h,
		})
	}

	/// Bytes per packed row. Exact, since `width` is byte-aligned.
	pub fn bytes_per_row(&self) -> usize {
		self.width as usize / 8
	}

	pub fn total_bytes(&self) -> usize {
		self.bytes_per_row() * self.height as usize
	}
}
