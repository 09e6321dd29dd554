//! Sink implementations
//!
//! Contains ConsoleSink, FileSink, and MemorySink.

mod console;
mod file;
mod memory;

pub use self::console::ConsoleSink;
pub use self::file::FileSink;
pub use self::memory::MemorySink;
