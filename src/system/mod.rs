// src/system/mod.rs
pub mod clipboard;

pub use clipboard::{ClipboardError, ClipboardHelper, ClipboardSink, CommandClipboard, SystemClipboard};
