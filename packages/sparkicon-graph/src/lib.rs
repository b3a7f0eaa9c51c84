mod encode;
mod graph;
mod state;

pub use crate::encode::encode_icon;
pub use crate::graph::{Graph, GraphConfig, GraphError};
pub use crate::state::{GraphStyle, IconFormat, Rgb};

pub fn graph_version() -> &'static str {
	env!("CARGO_PKG_VERSION")
}
