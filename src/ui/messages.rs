//! Console output helpers for status and pipeline progress lines.

use std::fmt;
use std::io::{self, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

fn paint<T: fmt::Display>(color: &str, icon: &str, msg: T) -> String {
    format!("{color}{BOLD}{icon} {RESET}{msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", paint(FG_BLUE, "ℹ️", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", paint(FG_GREEN, "✅", msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", paint(FG_YELLOW, "⚠️", msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", paint(FG_RED, "❌", msg));
}

/// Uppercase client banner at the start of each per-client pipeline.
pub fn banner(name: &str) {
    println!("{FG_BLUE}{BOLD}{}{RESET}", name.to_uppercase());
}

/// Start a pipeline step line, e.g. `Pulling info........`; finish it
/// with [`step_done`].
pub fn step(label: &str) {
    print!("{:.<20}", label);
    io::stdout().flush().ok();
}

pub fn step_done() {
    println!("done.");
}
