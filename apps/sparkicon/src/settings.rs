use std::fs;
use std::io::{self};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use sparkicon_graph::{GraphConfig, GraphStyle, IconFormat, Rgb};

const MAX_SIDE: u32 = 1_024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
	#[serde(default = "default_width")]
	pub width: u32,
	#[serde(default = "default_height")]
	pub height: u32,
	/// Hex color, e.g. "#006400".
	#[serde(default = "default_foreground")]
	pub foreground: String,
	#[serde(default = "default_background")]
	pub background: String,
	#[serde(default = "default_style")]
	pub style: GraphStyle,
	#[serde(default)]
	pub format: IconFormat,
	#[serde(default = "default_output")]
	pub output: PathBuf,
}
impl AppSettings {
	#[must_use]
	pub fn load() -> Self {
		let Some(path) = Self::path() else {
			return Self::default();
		};
		let Ok(bytes) = fs::read(&path) else {
			return Self::default();
		};
		let mut settings: Self = serde_json::from_slice(&bytes).unwrap_or_default();

		settings.width = settings.width.clamp(1, MAX_SIDE);
		settings.height = settings.height.clamp(1, MAX_SIDE);

		settings
	}

	pub fn save(&self) -> io::Result<()> {
		let Some(path) = Self::path() else {
			return Ok(());
		};
		let Some(dir) = path.parent() else {
			return Ok(());
		};

		fs::create_dir_all(dir)?;

		let json = serde_json::to_vec_pretty(self)
			.map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

		write_atomic(&path, &json)?;

		Ok(())
	}

	#[must_use]
	pub fn path() -> Option<PathBuf> {
		let dirs = ProjectDirs::from("dev", "sparkicon", "sparkicon")?;

		Some(dirs.config_dir().join("settings.json"))
	}

	#[must_use]
	pub fn graph_config(&self) -> GraphConfig {
		let defaults = GraphConfig::default();

		GraphConfig {
			width: self.width,
			height: self.height,
			foreground: parse_color(&self.foreground, "foreground", defaults.foreground),
			background: parse_color(&self.background, "background", defaults.background),
			style: self.style,
			format: self.format,
		}
	}
}

impl Default for AppSettings {
	fn default() -> Self {
		Self {
			width: default_width(),
			height: default_height(),
			foreground: default_foreground(),
			background: default_background(),
			style: default_style(),
			format: IconFormat::default(),
			output: default_output(),
		}
	}
}

fn parse_color(hex: &str, field: &'static str, fallback: Rgb) -> Rgb {
	match Rgb::from_hex(hex) {
		Some(color) => color,
		None => {
			tracing::warn!(
				field,
				hex,
				fallback = %fallback.hex_upper(),
				"Invalid color; using fallback."
			);

			fallback
		},
	}
}

fn default_width() -> u32 {
	100
}

fn default_height() -> u32 {
	100
}

fn default_foreground() -> String {
	GraphConfig::default().foreground.hex_upper()
}

fn default_background() -> String {
	GraphConfig::default().background.hex_upper()
}

fn default_style() -> GraphStyle {
	GraphStyle::Bar
}

fn default_output() -> PathBuf {
	PathBuf::from("sparkicon.jpg")
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
	let tmp = path.with_extension("json.tmp");

	fs::write(&tmp, bytes)?;
	fs::rename(&tmp, path)?;

	Ok(())
}
