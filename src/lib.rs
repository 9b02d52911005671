//! Reader, colour scales and settings for fixed-header `TIME VALUE COLOR`
//! text files. The egui front end lives in the `tvc-viewer` binary.

pub mod color;
pub mod config;
pub mod data;

pub use color::{ColorScale, Colormap};
pub use config::ViewerConfig;
pub use data::model::{Dataset, Record};
pub use data::reader::{read, read_file, ReadError, Reader, HEADER_LINES};
