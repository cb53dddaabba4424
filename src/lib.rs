//! nlconv: convert between literal backslash-n sequences and real newlines
//!
//! This library exposes nlconv's core functionality for use in property-based
//! tests. The main binary is at src/main.rs.

pub mod cli;
pub mod config;
pub mod converter;
pub mod logger;
pub mod session;

// Re-export commonly used types for convenience
pub use converter::{escape_newlines, unescape_newlines, Mode};
pub use session::{run_session, SessionOptions};
