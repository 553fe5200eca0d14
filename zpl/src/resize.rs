use image::{imageops::{self, FilterType}, GrayImage};

use crate::{Dimensions, Error, Result, Stage};

/// Stretch `img` to exactly `dims` using bilinear filtering.
pub fn resample(img: &GrayImage, dims: Dimensions) -> Result<GrayImage> {
	if img.dimensions() == (dims.width, dims.height) {
		return Ok(img.clone());
	}

	log::trace!("resizing {:?} to {}x{}...", img.dimensions(), dims.width, dims.height);
	let out = imageops::resize(img, dims.width, dims.height, FilterType::Triangle);

	if out.dimensions() != (dims.width, dims.height) {
		return Err(Error::DimensionMismatch {
			stage: Stage::Resampler,
			expected: (dims.width, dims.height),
			actual: out.dimensions(),
		});
	}
	Ok(out)
}
