//! CLI context - bundles settings, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, prompts};
use crate::pass::{self, output, strength};
use crate::rng::OsRandom;
use crate::settings::Settings;
use crate::terminal::print_error;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self { settings, flags })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        self.apply_flags()?;
        self.handle_save();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            prompts::print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("genpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings, rejecting the all-disabled state before
    /// it can reach the generator.
    fn apply_flags(&mut self) -> Result<(), Done> {
        if let Some(len) = self.flags.length {
            self.settings.length = len;
        }
        if self.flags.no_upper {
            self.settings.uppercase = false;
        }
        if self.flags.no_lower {
            self.settings.lowercase = false;
        }
        if self.flags.no_numbers {
            self.settings.numbers = false;
        }
        if self.flags.no_symbols {
            self.settings.symbols = false;
        }
        if let Some(theme) = self.flags.theme {
            self.settings.theme = theme;
        }

        if !self.settings.flags().any() {
            print_error("At least one character type must be selected");
            std::process::exit(1);
        }
        Ok(())
    }

    fn handle_save(&mut self) {
        if !self.flags.save {
            return;
        }
        if let Err(e) = self.settings.save_to_file() {
            prompts::warn(&format!("Failed to save settings: {}", e));
        } else if !self.flags.quiet {
            println!("Settings saved.");
        }
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) {
        let count = self.flags.number.unwrap_or(1).max(1);
        let flags = self.settings.flags();
        let mut rng = OsRandom;

        let mut board_buffer = String::new();
        let mut last_result = None;

        for _ in 0..count {
            let mut pass = match pass::generate(self.settings.length, flags, &mut rng) {
                Ok(p) => p,
                Err(e) => {
                    print_error(&e.to_string());
                    std::process::exit(1);
                }
            };

            if self.flags.score {
                last_result = Some(strength::score(&pass, flags));
            }

            if self.flags.board {
                board_buffer.push_str(&pass);
                board_buffer.push('\n');
            } else {
                println!("{pass}");
            }
            pass.zeroize();
        }

        if let Some(result) = last_result {
            if self.flags.quiet {
                println!("{} {}", result.score, result.level.label());
            } else {
                output::print_report(&result, self.settings.theme);
            }
        }

        if self.flags.board {
            self.copy_to_clipboard(&board_buffer, count);
            board_buffer.zeroize();
        }
    }

    fn copy_to_clipboard(&self, buffer: &str, count: usize) {
        let mut ctx = match ClipboardContext::new() {
            Ok(c) => c,
            Err(_) => {
                print_error("Clipboard unavailable");
                std::process::exit(1);
            }
        };
        if ctx.set_contents(buffer.to_string()).is_err() {
            print_error("Failed to copy to clipboard");
            std::process::exit(1);
        }
        if !self.flags.quiet {
            prompts::clipboard_hold(count);
        }
    }
}
