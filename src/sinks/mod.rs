//! Output destinations
//!
//! The logger accepts any `Write + Send` value; these are the ones shipped
//! with the crate. Standard streams (`std::io::stderr()`, `std::io::stdout()`)
//! are used directly.

pub mod file;
pub mod memory;

pub use file::FileSink;
pub use memory::MemorySink;
