//! TUI module for terminal user interfaces

mod splitter;

pub use splitter::SplitterApp;
