pub mod ansi;
pub mod format;
pub mod pager;
pub mod table;

pub use ansi::Painter;
pub use pager::{page_window, PageSlot};
pub use table::Table;
