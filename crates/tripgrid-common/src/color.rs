//! Terminal color helpers.

use std::io::IsTerminal;
use std::sync::OnceLock;

static NO_COLOR: OnceLock<bool> = OnceLock::new();

pub fn init(no_color_flag: bool) {
    let _ = NO_COLOR.set(
        no_color_flag
            || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
            || !std::io::stdout().is_terminal(),
    );
}

pub fn is_disabled() -> bool {
    *NO_COLOR.get().unwrap_or(&false)
}

mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const DIM: &str = "\x1b[90m";
    pub const BOLD: &str = "\x1b[1m";
}

pub struct Colors;

fn paint(text: &str, code: &str) -> String {
    if is_disabled() {
        return text.to_string();
    }
    let mut out = String::with_capacity(code.len() + text.len() + codes::RESET.len());
    out.push_str(code);
    out.push_str(text);
    out.push_str(codes::RESET);
    out
}

impl Colors {
    pub fn error(text: &str) -> String {
        paint(text, codes::RED)
    }

    pub fn warning(text: &str) -> String {
        paint(text, codes::YELLOW)
    }

    pub fn dim(text: &str) -> String {
        paint(text, codes::DIM)
    }

    pub fn bold(text: &str) -> String {
        paint(text, codes::BOLD)
    }
}
