//! Various configuration options to control Retag

mod write_options;

pub use write_options::{ClearPolicy, PicturePolicy, WriteOptions};
