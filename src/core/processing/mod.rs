pub mod compose;
pub mod mask;
pub mod pipeline;
pub mod resize;
pub mod save;
