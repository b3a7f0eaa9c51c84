use color_eyre::eyre::Result;
use image::RgbaImage;
use thiserror::Error;

use crate::encode::encode_icon;
use crate::state::{GraphStyle, IconFormat, Rgb};

#[derive(Clone, Copy, Debug)]
pub struct GraphConfig {
	pub width: u32,
	pub height: u32,
	pub foreground: Rgb,
	pub background: Rgb,
	pub style: GraphStyle,
	pub format: IconFormat,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			width: 100,
			height: 100,
			foreground: Rgb::new(0, 100, 0),
			background: Rgb::new(50, 50, 50),
			style: GraphStyle::Bar,
			format: IconFormat::Jpeg,
		}
	}
}

#[derive(Debug, Error)]
pub enum GraphError {
	#[error("graph canvas needs positive dimensions (got {width}x{height})")]
	EmptyCanvas { width: u32, height: u32 },
}

/// Scrolling sample graph rendered into a fixed-size raster.
///
/// Samples enter on the right, one column each, and age out on the left. The
/// graph holds no lock of its own; `push_sample` takes `&mut self`, so callers
/// that share a graph across threads serialize it themselves (and with it any
/// concurrent `to_icon` call).
pub struct Graph {
	icon: RgbaImage,
	config: GraphConfig,
}
impl Graph {
	pub fn new(config: GraphConfig) -> Result<Self, GraphError> {
		if config.width == 0 || config.height == 0 {
			return Err(GraphError::EmptyCanvas { width: config.width, height: config.height });
		}

		Ok(Self { icon: RgbaImage::new(config.width, config.height), config })
	}

	#[must_use]
	pub fn width(&self) -> u32 {
		self.config.width
	}

	#[must_use]
	pub fn height(&self) -> u32 {
		self.config.height
	}

	#[must_use]
	pub fn image(&self) -> &RgbaImage {
		&self.icon
	}

	/// Sets every cell to the background color. Call once before the first
	/// display so the icon has a defined appearance before samples arrive.
	pub fn blank(&mut self) {
		for x in 0..self.config.width {
			self.blank_column(x);
		}
	}

	pub fn blank_column(&mut self, x: u32) {
		if x >= self.config.width {
			return;
		}

		let background = self.config.background.to_pixel();

		for y in 0..self.config.height {
			self.icon.put_pixel(x, y, background);
		}
	}

	/// Ages out the oldest column and renders `value` into the freed one.
	/// Scrolling and rendering are a single unit; the grid is never observable
	/// between the two steps.
	pub fn push_sample(&mut self, value: i32) {
		self.scroll();
		self.render_column(value);
	}

	fn scroll(&mut self) {
		for x in 1..self.config.width {
			for y in 0..self.config.height {
				let pixel = *self.icon.get_pixel(x, y);

				self.icon.put_pixel(x - 1, y, pixel);
			}
		}
	}

	fn render_column(&mut self, value: i32) {
		let height = self.config.height;

		if value > height as i32 {
			tracing::warn!(
				value,
				height,
				"Sample exceeds the graph height; keeping the previous column."
			);

			return;
		}

		// Samples put 0 at the bottom, the raster puts row 0 at the top.
		let row = i64::from(height) - i64::from(value);
		let x = self.config.width - 1;
		let foreground = self.config.foreground.to_pixel();
		let background = self.config.background.to_pixel();

		for y in 0..height {
			let filled = match self.config.style {
				GraphStyle::Point => row == i64::from(y),
				GraphStyle::Bar => row <= i64::from(y),
			};

			self.icon.put_pixel(x, y, if filled { foreground } else { background });
		}
	}

	/// Encodes the current grid into ready-to-display icon bytes. Every call
	/// re-encodes from scratch and leaves the grid untouched.
	pub fn to_icon(&self) -> Result<Vec<u8>> {
		encode_icon(&self.icon, self.config.format)
	}
}

#[cfg(test)]
mod tests {
	use image::Rgba;

	use crate::graph::{Graph, GraphConfig, GraphError};
	use crate::state::{GraphStyle, Rgb};

	const FG: Rgb = Rgb::new(0, 100, 0);
	const BG: Rgb = Rgb::new(50, 50, 50);

	fn test_graph(width: u32, height: u32, style: GraphStyle) -> Graph {
		let config = GraphConfig {
			width,
			height,
			foreground: FG,
			background: BG,
			style,
			..GraphConfig::default()
		};
		let mut graph = Graph::new(config).unwrap();

		graph.blank();

		graph
	}

	fn column(graph: &Graph, x: u32) -> Vec<Rgba<u8>> {
		(0..graph.height()).map(|y| *graph.image().get_pixel(x, y)).collect()
	}

	fn foreground_count(graph: &Graph, x: u32) -> usize {
		column(graph, x).iter().filter(|pixel| **pixel == FG.to_pixel()).count()
	}

	#[test]
	fn new_rejects_empty_canvas() {
		let config = GraphConfig { width: 0, height: 10, ..GraphConfig::default() };

		assert!(matches!(Graph::new(config), Err(GraphError::EmptyCanvas { .. })));

		let config = GraphConfig { width: 10, height: 0, ..GraphConfig::default() };

		assert!(matches!(Graph::new(config), Err(GraphError::EmptyCanvas { .. })));
	}

	#[test]
	fn blank_fills_every_cell_with_background() {
		let graph = test_graph(5, 4, GraphStyle::Bar);

		for x in 0..5 {
			assert_eq!(foreground_count(&graph, x), 0);
			assert!(column(&graph, x).iter().all(|pixel| *pixel == BG.to_pixel()));
		}
	}

	#[test]
	fn blank_column_resets_only_that_column() {
		let mut graph = test_graph(3, 4, GraphStyle::Bar);

		graph.push_sample(4);
		graph.push_sample(4);

		graph.blank_column(2);

		assert_eq!(foreground_count(&graph, 1), 4);
		assert_eq!(foreground_count(&graph, 2), 0);
	}

	#[test]
	fn bar_column_holds_value_many_foreground_pixels() {
		for value in 0..=4 {
			let mut graph = test_graph(3, 4, GraphStyle::Bar);

			graph.push_sample(value);

			assert_eq!(foreground_count(&graph, 2), value as usize);

			// Filled from the bottom up; everything above stays background.
			let pixels = column(&graph, 2);

			for (y, pixel) in pixels.iter().enumerate() {
				let expected =
					if (y as i32) >= 4 - value { FG.to_pixel() } else { BG.to_pixel() };

				assert_eq!(*pixel, expected, "value {value}, row {y}");
			}
		}
	}

	#[test]
	fn point_column_holds_exactly_one_pixel() {
		for value in 1..=4_i32 {
			let mut graph = test_graph(3, 4, GraphStyle::Point);

			graph.push_sample(value);

			let pixels = column(&graph, 2);

			assert_eq!(foreground_count(&graph, 2), 1);
			assert_eq!(pixels[(4 - value) as usize], FG.to_pixel());
		}
	}

	#[test]
	fn point_column_at_zero_renders_all_background() {
		// The flipped row equals the height, which matches no raster row.
		let mut graph = test_graph(3, 4, GraphStyle::Point);

		graph.push_sample(0);

		assert_eq!(foreground_count(&graph, 2), 0);
	}

	#[test]
	fn negative_sample_renders_all_background() {
		let mut graph = test_graph(3, 4, GraphStyle::Bar);

		graph.push_sample(-3);

		assert_eq!(foreground_count(&graph, 2), 0);

		let mut graph = test_graph(3, 4, GraphStyle::Point);

		graph.push_sample(-1);

		assert_eq!(foreground_count(&graph, 2), 0);
	}

	#[test]
	fn scroll_shifts_columns_left_exactly() {
		let mut graph = test_graph(4, 4, GraphStyle::Bar);

		for value in [1, 2, 3, 4] {
			graph.push_sample(value);
		}

		let before: Vec<_> = (0..4).map(|x| column(&graph, x)).collect();

		graph.scroll();

		for x in 0..3 {
			assert_eq!(column(&graph, x), before[x as usize + 1]);
		}

		// The rightmost column holds a duplicate until the next render.
		assert_eq!(column(&graph, 3), before[3]);
	}

	#[test]
	fn pushed_samples_fill_the_window_right_to_left() {
		let mut graph = test_graph(6, 4, GraphStyle::Bar);
		let values = [1, 3, 2];

		for value in values {
			graph.push_sample(value);
		}

		// Oldest sample sits furthest left of the populated window.
		for (i, value) in values.iter().enumerate() {
			let x = 6 - values.len() as u32 + i as u32;

			assert_eq!(foreground_count(&graph, x), *value as usize);
		}

		for x in 0..3 {
			assert_eq!(foreground_count(&graph, x), 0);
		}
	}

	#[test]
	fn out_of_range_sample_keeps_the_previous_column() {
		let mut graph = test_graph(4, 4, GraphStyle::Bar);

		graph.push_sample(3);

		let rendered = column(&graph, 3);

		// Scroll duplicates the rightmost column and the skipped render leaves
		// the duplicate in place, so the last value repeats.
		graph.push_sample(5);

		assert_eq!(column(&graph, 3), rendered);
		assert_eq!(column(&graph, 2), rendered);
	}
}
