//! Output generation for pipeline results.
//!
//! # Submodules
//!
//! - [`text`]: One summary line per URL, printed to stdout
//! - [`json`]: Writes a [`BiasEdition`](crate::models::BiasEdition) to a JSON file
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── 08-15-02.json
//!     └── 17-40-11.json
//! ```

pub mod json;
pub mod text;
