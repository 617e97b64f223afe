//! Utility functions shared by the CLI
//!
//! ## Modules
//!
//! - [`input`] - Memory-mapped input files
//! - [`lines`] - Offset-to-line mapping for match output
//! - [`progress`] - Optional build spinner (`progress` feature)

pub mod input;
pub mod lines;
pub mod progress;

pub use input::InputText;
pub use lines::LineMap;
pub use progress::{SPINNER_THRESHOLD, Spinner};
