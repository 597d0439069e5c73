//! Weather console: library crate for the terminal front end.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `wx-e2e-tests`) can reach `Console`, `HttpReplySource` and the
//! renderers.

pub mod config;
pub mod console;
pub mod error;
pub mod mock;
pub mod render;
pub mod source;

pub use config::ConsoleConfig;
pub use console::{Answer, Console};
pub use error::{ConsoleError, ConsoleResult};
pub use mock::MockReplySource;
pub use source::{HttpReplySource, ReplySource};
