pub mod ansi;
pub mod html;

pub use ansi::*;
pub use html::*;
