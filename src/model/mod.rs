pub mod buffer;
pub mod clipboard;
pub mod config;
pub mod cursor;
pub mod editor;
