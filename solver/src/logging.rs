use std::io::IsTerminal;

use colog::format::CologStyle;
use colored::Colorize;
use log::{Level, LevelFilter};

struct TimestampedStyle;

impl CologStyle for TimestampedStyle {
    fn prefix_token(&self, level: &Level) -> String {
        format!(
            "{} {}",
            chrono::Local::now()
                .format("%H:%M:%S%.3f")
                .to_string()
                .dimmed(),
            self.level_color(level, self.level_token(level))
        )
    }
}

pub struct Logger;

impl Logger {
    /// logs go to stderr, stdout is reserved for the simulator protocol
    pub fn init(level: LevelFilter) {
        colored::control::set_override(std::io::stderr().is_terminal());

        let mut builder = env_logger::Builder::new();
        builder
            .format(colog::formatter(TimestampedStyle))
            .filter_level(level)
            .target(env_logger::Target::Stderr)
            .init();
    }
}
