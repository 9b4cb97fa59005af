pub mod bullets;
pub mod command;
pub mod editor;
pub mod entry;
pub mod error;
pub mod log;
pub mod resolve;
