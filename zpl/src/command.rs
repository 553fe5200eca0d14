//! ZPL command assembly.
//!
//! A label is a single `^GFA` (graphic field, ASCII hex) placed at the origin:
//!
//! ```text
//! ^XA^FO0,0^GFA,<total>,<total>,<row>,<hex>^XZ
//! ```
//!
//! `^GF` takes the binary byte count and the graphic field count, which are the
//! same for uncompressed data, followed by bytes per row and the payload.

/// Start of label.
pub const START: &str = "^XA";

/// Field origin at the top-left corner.
pub const ORIGIN: &str = "^FO0,0";

/// End of label.
pub const END: &str = "^XZ";

/// Wrap a hex payload into a complete label.
/// `hex` is not validated.
pub fn assemble(total_bytes: usize, bytes_per_row: usize, hex: &str) -> String {
	format!("{START}{ORIGIN}^GFA,{total_bytes},{total_bytes},{bytes_per_row},{hex}{END}")
}
