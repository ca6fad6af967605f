#![doc = r#"
LOGOPREP — proportional logo resizing with rounded-corner transparency.

This crate takes a logo or thumbnail image, scales it down to fit inside a
bounding box while preserving its aspect ratio (never upscaling), carves
antialiased rounded corners into its alpha channel, and writes the result in
an alpha-capable format (PNG or lossless WebP). It powers the LOGOPREP CLI
and can be embedded in your own Rust applications.

Stability
---------
The public library API is experimental in initial releases and may evolve as
the crate stabilizes. Breaking changes can occur.

Add dependency
--------------
```toml
[dependencies]
logoprep = "0.1"
```

Quick start: process a file
---------------------------
```rust,no_run
use std::path::Path;
use logoprep::{process_file_to_path, ProcessingParams, TargetSize};

fn main() -> logoprep::Result<()> {
    let params = ProcessingParams {
        size: TargetSize::square(250),
        radius: 50,
        format: None, // infer from the output extension
    };

    process_file_to_path(
        Path::new("assets/logo.png"),
        Path::new("assets/logo_rounded.png"),
        &params,
    )
}
```

Overwrite in place
------------------
```rust,no_run
use std::path::Path;
use logoprep::{process_file_in_place, ProcessingParams};

fn main() -> logoprep::Result<()> {
    // Defaults: fit inside 250x250, corner radius 50.
    process_file_in_place(Path::new("assets/logo.png"), &ProcessingParams::default())
}
```

Process in-memory to `ProcessedImage`
-------------------------------------
```rust,no_run
use std::path::Path;
use logoprep::{process_file_to_buffer, ProcessingParams};

fn main() -> logoprep::Result<()> {
    let img = process_file_to_buffer(Path::new("assets/logo.png"), &ProcessingParams::default())?;

    // Use `img.image` (an RGBA8 buffer) in your pipeline.
    println!("{}x{} as {}", img.width, img.height, img.format);
    Ok(())
}
```

Error handling
--------------
All public functions return `logoprep::Result<T>`; match on `logoprep::Error`
to handle specific cases, e.g. a missing input or an undecodable file.

```rust,no_run
use std::path::Path;
use logoprep::{process_file_in_place, Error, ProcessingParams};

fn main() {
    match process_file_in_place(Path::new("/bad/path.png"), &ProcessingParams::default()) {
        Ok(()) => {}
        Err(Error::NotFound { path }) => eprintln!("no such file: {}", path.display()),
        Err(Error::Decode { path, source }) => {
            eprintln!("cannot decode {}: {source}", path.display())
        }
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — core types (`TargetSize`, `OutputFormat`).
- [`io`] — image reader and atomic PNG/WebP writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{DEFAULT_CORNER_RADIUS, ProcessingParams};
pub use error::{Error, Result};
pub use types::{OutputFormat, TargetSize};

// High-level API re-exports
pub use api::{
    ProcessedImage, process_file_in_place, process_file_to_buffer, process_file_to_path,
};
pub use crate::core::processing::pipeline::process_image;
