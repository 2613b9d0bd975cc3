mod help;
mod panels;

pub use help::render_help;
pub use panels::{render_graph, render_summary};
