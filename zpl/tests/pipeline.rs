use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgba, RgbaImage};
use zpl::{Converter, Error, Options};

fn png(img: DynamicImage) -> Vec<u8> {
	let mut data = Vec::new();
	img
		.write_to(&mut Cursor::new(&mut data), ImageFormat::Png)
		.expect("failed to encode png");
	data
}

/// Split a `^GFA` label into its numeric fields and payload.
fn fields(cmd: &str) -> (usize, usize, usize, &str) {
	let body = cmd
		.strip_prefix("^XA^FO0,0^GFA,")
		.and_then(|s| s.strip_suffix("^XZ"))
		.expect("malformed command");
	let mut parts = body.splitn(4, ',');
	let mut num = || parts.next().unwrap().parse::<usize>().unwrap();
	let (a, b, c) = (num(), num(), num());
	(a, b, c, parts.next().unwrap())
}

#[test]
fn width_100_end_to_end() {
	let data = png(DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 40, Rgba([255, 255, 255, 255]))));
	let cmd = zpl::encode(&data, 100).unwrap();

	let (total, total2, row, hex) = fields(&cmd);
	assert_eq!(total, 728);
	assert_eq!(total2, 728);
	assert_eq!(row, 13);
	assert_eq!(hex.len(), 2 * 728);
	assert!(hex.chars().all(|c| c == '0'));
}

#[test]
fn default_width() {
	let data = png(DynamicImage::ImageLuma8(GrayImage::from_pixel(10, 10, Luma([0]))));
	let cmd = Converter::new(Options::default()).unwrap().convert(&data).unwrap();

	let (total, _, row, hex) = fields(&cmd);
	assert_eq!(row, 70);
	assert_eq!(total, 70 * 280);
	assert!(hex.chars().all(|c| c == 'f'));
}

#[test]
fn left_half_black() {
	let img = GrayImage::from_fn(64, 32, |x, _| if x < 32 { Luma([0]) } else { Luma([255]) });
	let conv = Converter::new(Options::with_width(64)).unwrap();
	let bmp = conv.bitmap(&DynamicImage::ImageLuma8(img)).unwrap();

	assert_eq!((bmp.width(), bmp.height()), (64, 32));
	for row in bmp.pixels().chunks(bmp.bytes_per_row()) {
		assert_eq!(row, [0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00]);
	}
}

#[test]
fn transparent_pixels_do_not_print() {
	let img = RgbaImage::from_pixel(16, 8, Rgba([0, 0, 0, 0]));
	let cmd = zpl::encode(&png(DynamicImage::ImageRgba8(img)), 16).unwrap();
	assert_eq!(cmd, "^XA^FO0,0^GFA,16,16,2,00000000000000000000000000000000^XZ");
}

#[test]
fn rejects_invalid_width() {
	let data = png(DynamicImage::new_luma8(4, 4));
	for w in [0, -8] {
		assert!(matches!(zpl::encode(&data, w), Err(Error::InvalidConfiguration { .. })));
	}
}

#[test]
fn rejects_corrupt_input() {
	let mut data = png(DynamicImage::new_luma8(4, 4));
	data.truncate(20);
	let e = zpl::encode(&data, 16).unwrap_err();
	assert!(e.is_decode(), "unexpected error: {e}");
}

#[test]
fn preview_round_trips_bitmap() {
	let img = GrayImage::from_fn(16, 8, |x, y| if (x + y) % 2 == 0 { Luma([0]) } else { Luma([255]) });
	let conv = Converter::new(Options::with_width(16)).unwrap();
	let bmp = conv.bitmap(&DynamicImage::ImageLuma8(img.clone())).unwrap();
	assert_eq!(bmp.to_image(), img);
	assert_eq!(bmp.pixels()[0], 0xaa);
	assert_eq!(bmp.pixels()[2], 0x55);
}
