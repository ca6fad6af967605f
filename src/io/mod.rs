//! I/O layer for reading source images and writing alpha-capable outputs.
//! Provides the `reader` decode step and `writers` for atomic PNG/WebP
//! output files.
pub mod reader;
pub use reader::read_image;

pub mod writers;
