use color_eyre::eyre::Result;

mod app;
mod settings;

fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.init();

	tracing::info!(version = sparkicon_graph::graph_version(), "Starting sparkicon.");

	app::run()
}
