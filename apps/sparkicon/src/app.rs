use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

use sparkicon_graph::Graph;

use crate::settings::AppSettings;

/// Stands in for the icon-displaying host: reads one integer sample per stdin
/// line, advances the graph, and rewrites the icon file after each one.
pub fn run() -> Result<()> {
	let settings = AppSettings::load();

	if let Some(path) = AppSettings::path() {
		if !path.exists() {
			match settings.save() {
				Ok(()) => tracing::info!(path = %path.display(), "Wrote default settings."),
				Err(err) => tracing::warn!(error = %err, "Failed to write default settings."),
			}
		}
	}

	let config = settings.graph_config();
	let mut graph = Graph::new(config).wrap_err("invalid graph configuration")?;

	graph.blank();
	write_icon(&graph, &settings)?;

	tracing::info!(
		width = config.width,
		height = config.height,
		output = %settings.output.display(),
		"Waiting for samples on stdin, one integer per line."
	);

	for line in io::stdin().lock().lines() {
		let line = line.wrap_err("failed to read sample from stdin")?;
		let trimmed = line.trim();

		if trimmed.is_empty() {
			continue;
		}

		let value: i32 = match trimmed.parse() {
			Ok(value) => value,
			Err(err) => {
				tracing::warn!(line = %trimmed, error = %err, "Ignoring unparsable sample.");

				continue;
			},
		};

		graph.push_sample(value);

		if let Err(err) = write_icon(&graph, &settings) {
			tracing::warn!(error = %err, "Failed to update the icon; keeping the previous one.");
		}
	}

	Ok(())
}

fn write_icon(graph: &Graph, settings: &AppSettings) -> Result<()> {
	let bytes = graph.to_icon()?;

	write_atomic(&settings.output, &bytes)
		.wrap_err_with(|| format!("failed to write icon to {}", settings.output.display()))?;

	Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
	let tmp = path.with_extension("tmp");

	fs::write(&tmp, bytes)?;
	fs::rename(&tmp, path)?;

	Ok(())
}
