//! Core processing building blocks: fit-within resizing, rounded-rectangle
//! mask rasterization, alpha composition, and save helpers. These are
//! internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
