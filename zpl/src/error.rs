use std::fmt::{self, Display, Formatter};

use thiserror::Error;

/// Pipeline stage an [`Error`] originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
	DimensionResolver,
	GrayscaleNormalizer,
	Resampler,
	BitPacker,
}

#[derive(Debug, Error)]
pub enum Error {
	#[error("{}: invalid width {width}, must be positive", Stage::DimensionResolver)]
	InvalidConfiguration {
		width: i64,
	},

	#[error("{}: cannot decode image", Stage::GrayscaleNormalizer)]
	Decode(#[source] image::ImageError),

	#[error("{}: image has no pixels", Stage::GrayscaleNormalizer)]
	EmptyImage,

	#[error("{stage}: expected {}x{}, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
	DimensionMismatch {
		stage: Stage,
		expected: (u32, u32),
		actual: (u32, u32),
	},
}

impl Error {
	/// Returns `true` for failures caused by unusable image input.
	pub fn is_decode(&self) -> bool {
		matches!(self, Self::Decode(_) | Self::EmptyImage)
	}
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Display for Stage {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let s = match self {
			Self::DimensionResolver => "dimension resolver",
			Self::GrayscaleNormalizer => "grayscale normalizer",
			Self::Resampler => "resampler",
			Self::BitPacker => "bit packer",
		};
		f.write_str(s)
	}
}
