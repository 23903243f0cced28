//! User-facing CLI messages.

use std::io::BufRead;

use crate::terminal::{box_bottom, box_line, box_top, box_opt, print_rule};

pub fn warn(msg: &str) {
    eprintln!("\x1b[38;5;214mWarning: {msg}\x1b[0m");
}

/// Keep the process alive so clipboard ownership survives until the user is
/// done pasting (X11 selections die with their owner).
pub fn clipboard_hold(count: usize) {
    if count == 1 {
        println!("Password copied to clipboard! Press Enter to exit...");
    } else {
        println!("{count} passwords copied to clipboard! Press Enter to exit...");
    }
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}

pub fn print_help() {
    box_top("genpass");
    box_line("Generate random passwords with a strength meter.");
    print_rule();
    box_opt("-l, --length <N>", "Password length (default 16)");
    box_opt("-n, --number <N>", "How many passwords to generate (default 1)");
    box_opt("-b, --board", "Copy to the clipboard instead of printing");
    box_opt("-q, --quiet", "Print passwords only");
    box_opt("    --score", "Print the strength report after generating");
    box_opt("    --no-upper", "Drop uppercase letters");
    box_opt("    --no-lower", "Drop lowercase letters");
    box_opt("    --no-numbers", "Drop digits");
    box_opt("    --no-symbols", "Drop symbols");
    box_opt("    --theme <light|dark>", "Color palette for meter and messages");
    box_opt("-s, --saved", "Start from the saved settings, not the defaults");
    box_opt("    --save", "Persist the effective settings");
    box_opt("-h, --help", "Show this help");
    box_opt("-v, --version", "Show version");
    print_rule();
    box_line("Run with no arguments for the interactive screen.");
    box_line(&format!(
        "Ambiguous characters are never generated: {}",
        crate::pass::charset::AMBIGUOUS
    ));
    box_bottom();
}
