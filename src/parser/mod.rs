// rrdgraph info parser module

pub mod header;
pub mod line;

// Public API re-exports
pub use header::parse_graph_info;
pub use line::{classify_line, InfoLine};
