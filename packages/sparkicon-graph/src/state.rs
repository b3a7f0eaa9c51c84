use image::Rgba;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rgb {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}
impl Rgb {
	#[must_use]
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	#[must_use]
	pub fn hex_upper(self) -> String {
		format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
	}

	#[must_use]
	pub fn from_hex(hex: &str) -> Option<Self> {
		let hex = hex.strip_prefix('#').unwrap_or(hex);

		if hex.len() != 6 || !hex.is_ascii() {
			return None;
		}

		let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
		let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
		let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

		Some(Self { r, g, b })
	}

	/// The 4-channel pixel the raster actually stores; alpha is always opaque.
	#[must_use]
	pub const fn to_pixel(self) -> Rgba<u8> {
		Rgba([self.r, self.g, self.b, 255])
	}
}

#[derive(Clone, Copy, Default, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphStyle {
	/// One highlighted pixel per column, at the row matching the sample.
	#[default]
	Point,
	/// Filled column whose height is proportional to the sample.
	Bar,
}

#[derive(Clone, Copy, Default, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconFormat {
	Png,
	#[default]
	Jpeg,
}
