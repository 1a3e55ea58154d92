//! REST API module.
//!
//! Request parsing and response shaping only; all business behavior lives
//! behind the idea-store port. Success bodies are bare JSON, failures are
//! the fixed `{"error": <message>}` shape.

mod ideas;
mod setup;
mod upload;

pub use ideas::*;
pub use setup::*;
pub use upload::*;
