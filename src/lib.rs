// Library exports for rrdgraph-info

pub mod error;
pub mod format;
pub mod info;
pub mod inline;
pub mod numeric;
pub mod parser;

pub use error::{GraphInfoError, Result};
pub use format::ImageFormat;
pub use info::{GraphDimensions, GraphInfo, ImageDimensions, PrintValue, ValueRange};
pub use inline::{inline_image, svg_data_string};
pub use parser::parse_graph_info;
