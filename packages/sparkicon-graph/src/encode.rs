use std::io::Cursor;

use color_eyre::eyre::{Result, WrapErr};
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::state::IconFormat;

pub fn encode_icon(image: &RgbaImage, format: IconFormat) -> Result<Vec<u8>> {
	let mut bytes = Vec::new();

	match format {
		IconFormat::Png => image
			.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
			.wrap_err("failed to encode icon as PNG")?,
		IconFormat::Jpeg => {
			// The JPEG codec has no alpha channel to write into.
			let rgb = DynamicImage::ImageRgba8(image.clone()).into_rgb8();

			rgb.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
				.wrap_err("failed to encode icon as JPEG")?;
		},
	}

	Ok(bytes)
}
