/// Render `bytes` as lower-case hex, two digits per byte, no separators.
pub fn encode_hex(bytes: &[u8]) -> String {
	hex::encode(bytes)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn two_lowercase_digits_per_byte() {
		assert_eq!(encode_hex(&[0x00, 0xff, 0x0a]), "00ff0a");
		assert_eq!(encode_hex(&[]), "");
	}

	#[test]
	fn length_is_doubled() {
		let bytes: Vec<u8> = (0..=255).collect();
		let s = encode_hex(&bytes);
		assert_eq!(s.len(), 2 * bytes.len());
		assert!(s.starts_with("000102"));
		assert!(s.ends_with("fdfeff"));
	}
}
