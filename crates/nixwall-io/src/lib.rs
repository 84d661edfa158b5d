//! # Nixwall I/O
//!
//! SVG serialization of composed scenes, the single bulk write of the
//! finished document, and JSON config loading.

pub mod config_file;
pub mod output;
pub mod svg;

pub use config_file::{load_config, parse_config, ConfigFileError};
pub use output::write_svg_file;
pub use svg::{render_document, SvgError, SvgWriter};
