pub mod fs;
pub mod ui;

pub use crate::fs::{read_json, write_json};
pub use crate::ui::spinner;
