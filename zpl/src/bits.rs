use image::GrayImage;

/// Luma cut-off: anything strictly darker prints, `THRESHOLD` itself does not.
pub const THRESHOLD: u8 = 0x80;

/// Threshold `img` into one bit per pixel, row-major.
/// `true` is ink (black), `false` is background.
pub fn binarize(img: &GrayImage) -> Vec<bool> {
	binarize_with(img, THRESHOLD)
}

/// Like [`binarize()`], with a custom `threshold`.
pub fn binarize_with(img: &GrayImage, threshold: u8) -> Vec<bool> {
	img
		.pixels()
		.map(|c| c.0[0] < threshold)
		.collect()
}

/// Pack bits into bytes, MSB first.
/// The last byte is padded with zeros in its low bits.
pub fn pack(bits: &[bool]) -> Vec<u8> {
	bits
		.chunks(8)
		.map(pack_byte)
		.collect()
}

/// Pack each row of `width` bits separately, padding every row to a whole byte.
pub fn pack_rows(bits: &[bool], width: usize) -> Vec<u8> {
	if width == 0 {
		return Vec::new();
	}

	bits
		.chunks(width)
		.flat_map(pack)
		.collect()
}

fn pack_byte(chunk: &[bool]) -> u8 {
	chunk
		.iter()
		.enumerate()
		.fold(0u8, |acc, (i, &b)| {
			if b {
				acc | (128 >> i)
			} else {
				acc
			}
		})
}
