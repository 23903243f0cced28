mod context;
mod flags;
mod parse;
mod prompts;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use crate::terminal::print_error;

/// Run CLI mode.
pub fn run(args: Vec<String>) {
    match Context::new(args) {
        Ok(mut ctx) => {
            let _ = ctx.run();
        }
        Err(msg) => {
            print_error(&msg);
            println!("Run with --help for usage.");
            std::process::exit(2);
        }
    }
}
