//! Console command layer.
//!
//! Turns input lines into operations on the address book and turns the
//! results, including errors, into reply text.

pub mod handlers;
pub mod parser;
pub mod render;

pub use handlers::{dispatch, Outcome};
pub use parser::{parse_input, Command};
pub use render::{render_error, USAGE};
