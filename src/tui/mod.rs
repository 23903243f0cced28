//! Interactive single-screen mode.
//!
//! One boxed screen showing the current password, the five-segment strength
//! meter, and the active settings. Every change regenerates immediately and
//! persists the settings, so the screen always reflects what is saved.

use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};
use log::warn;
use zeroize::Zeroize;

use crate::pass::{self, output, strength};
use crate::rng::OsRandom;
use crate::settings::Settings;
use crate::terminal::{
    RESET, RawModeGuard, box_bottom, box_line, box_line_center, box_top, clear, print_rule,
    reset_terminal,
};

/// Interactive length bounds. The generator itself accepts any length >= 1;
/// this range is a usability guard, matching the slider of a typical
/// password UI.
pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 64;

const GUARD_MSG: &str = "At least one character type must be selected";

/// Run the interactive screen until the user quits.
pub fn run() {
    reset_terminal();

    let mut settings = Settings::load_from_file().unwrap_or_else(|e| {
        warn!("failed to load settings: {e}");
        Settings::default()
    });
    settings.length = settings.length.clamp(MIN_LENGTH, MAX_LENGTH);

    let mut rng = OsRandom;
    let mut clipboard: Option<ClipboardContext> = None;
    let mut status: Option<String> = None;
    let mut password = String::new();
    regenerate(&mut password, &settings, &mut rng, &mut status);

    loop {
        draw(&password, &settings, status.take().as_deref());

        let Some((code, mods)) = read_key() else { break };
        match code {
            KeyCode::Char('c') if mods.contains(KeyModifiers::CONTROL) => break,
            KeyCode::Esc | KeyCode::Char('q') => break,
            KeyCode::Enter | KeyCode::Char('g') => {
                regenerate(&mut password, &settings, &mut rng, &mut status);
            }
            KeyCode::Char('c') => {
                status = Some(copy(&password, &mut clipboard).to_string());
            }
            KeyCode::Char('t') => {
                settings.theme = settings.theme.toggle();
                persist(&settings, &mut status);
            }
            KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
                if settings.length < MAX_LENGTH {
                    settings.length += 1;
                    regenerate(&mut password, &settings, &mut rng, &mut status);
                    persist(&settings, &mut status);
                }
            }
            KeyCode::Down | KeyCode::Char('-') => {
                if settings.length > MIN_LENGTH {
                    settings.length -= 1;
                    regenerate(&mut password, &settings, &mut rng, &mut status);
                    persist(&settings, &mut status);
                }
            }
            KeyCode::Char('u') => {
                toggle(&mut settings, |s| s.uppercase = !s.uppercase, &mut status);
                regenerate_if_ok(&mut password, &settings, &mut rng, &mut status);
            }
            KeyCode::Char('l') => {
                toggle(&mut settings, |s| s.lowercase = !s.lowercase, &mut status);
                regenerate_if_ok(&mut password, &settings, &mut rng, &mut status);
            }
            KeyCode::Char('n') => {
                toggle(&mut settings, |s| s.numbers = !s.numbers, &mut status);
                regenerate_if_ok(&mut password, &settings, &mut rng, &mut status);
            }
            KeyCode::Char('s') => {
                toggle(&mut settings, |s| s.symbols = !s.symbols, &mut status);
                regenerate_if_ok(&mut password, &settings, &mut rng, &mut status);
            }
            _ => {}
        }
    }

    password.zeroize();
    clear();
}

/// Apply a category flip unless it would leave nothing enabled. The guard
/// keeps the all-false state from ever reaching the generator.
fn toggle(settings: &mut Settings, flip: impl Fn(&mut Settings), status: &mut Option<String>) {
    let mut next = settings.clone();
    flip(&mut next);
    if next.flags().any() {
        *settings = next;
        persist(settings, status);
    } else {
        *status = Some(GUARD_MSG.to_string());
    }
}

/// Regenerate only when the last action did not set a warning.
fn regenerate_if_ok(
    password: &mut String,
    settings: &Settings,
    rng: &mut OsRandom,
    status: &mut Option<String>,
) {
    if status.is_none() {
        regenerate(password, settings, rng, status);
    }
}

fn regenerate(
    password: &mut String,
    settings: &Settings,
    rng: &mut OsRandom,
    status: &mut Option<String>,
) {
    password.zeroize();
    match pass::generate(settings.length, settings.flags(), rng) {
        Ok(p) => *password = p,
        Err(e) => *status = Some(e.to_string()),
    }
}

fn persist(settings: &Settings, status: &mut Option<String>) {
    if let Err(e) = settings.save_to_file() {
        *status = Some(format!("Failed to save settings: {e}"));
    }
}

fn copy(password: &str, clipboard: &mut Option<ClipboardContext>) -> &'static str {
    if password.is_empty() {
        return "No password to copy";
    }
    if clipboard.is_none() {
        *clipboard = ClipboardContext::new().ok();
    }
    match clipboard.as_mut() {
        Some(ctx) => match ctx.set_contents(password.to_string()) {
            Ok(()) => "Password copied to clipboard!",
            Err(_) => "Failed to copy password",
        },
        None => "Clipboard unavailable",
    }
}

fn draw(password: &str, settings: &Settings, status: Option<&str>) {
    let theme = settings.theme;
    let result = strength::score(password, settings.flags());

    clear();
    box_top("genpass");
    box_line_center(if password.is_empty() {
        "(press g to generate)"
    } else {
        password
    });
    print_rule();
    box_line(&format!(
        "{}  {}",
        output::meter(&result, theme),
        output::strength_text(&result, theme)
    ));
    box_line(&settings_line(settings));
    box_bottom();
    println!(
        "{}[g] new  [c] copy  [t] theme  [↑/↓] length  [u/l/n/s] toggle  [q] quit{RESET}",
        theme.dim()
    );
    match status {
        Some(msg) => println!("{}{msg}{RESET}", theme.warn()),
        None => println!(),
    }
}

fn settings_line(settings: &Settings) -> String {
    let mark = |on: bool| if on { '✓' } else { '✗' };
    format!(
        "Length: {:<3}  upper {}  lower {}  numbers {}  symbols {}  theme: {}",
        settings.length,
        mark(settings.uppercase),
        mark(settings.lowercase),
        mark(settings.numbers),
        mark(settings.symbols),
        settings.theme.name()
    )
}

/// Block for one key press, in raw mode for the duration of the read.
fn read_key() -> Option<(KeyCode, KeyModifiers)> {
    let _guard = RawModeGuard::new().ok()?;
    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                return Some((key.code, key.modifiers));
            }
            Ok(_) => {}
            Err(_) => return None,
        }
    }
}
