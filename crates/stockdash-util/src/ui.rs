use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A ticking spinner with `msg` beside it; call `finish_and_clear()` once the work settles.
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        pb.set_style(style.tick_chars("|/-\\ "));
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
