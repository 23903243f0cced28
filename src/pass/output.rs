//! Strength meter rendering and the CLI strength report.

use crate::terminal::{RESET, Theme, box_bottom, box_line, box_top};

use super::strength::StrengthResult;

const SEGMENTS: u8 = 5;

/// Render the five-segment meter, lit segments colored by level.
pub fn meter(result: &StrengthResult, theme: Theme) -> String {
    let lit = theme.level_color(result.level);
    let dim = theme.dim();
    let mut out = String::new();
    for i in 0..SEGMENTS {
        if i > 0 {
            out.push(' ');
        }
        if i < result.active_segments {
            out.push_str(lit);
            out.push_str("▰▰▰▰");
        } else {
            out.push_str(dim);
            out.push_str("▱▱▱▱");
        }
        out.push_str(RESET);
    }
    out
}

/// Render the "Level • description" line in the level's color.
pub fn strength_text(result: &StrengthResult, theme: Theme) -> String {
    format!(
        "{}{} • {}{RESET}",
        theme.level_color(result.level),
        result.level.label(),
        result.description
    )
}

/// Print the boxed strength report used by `--score`.
pub fn print_report(result: &StrengthResult, theme: Theme) {
    box_top("Strength");
    box_line(&format!("{}  {}/100", meter(result, theme), result.score));
    box_line(&strength_text(result, theme));
    box_bottom();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::CategoryFlags;
    use crate::pass::strength::score;
    use crate::terminal::console_width;

    #[test]
    fn meter_lights_the_active_segments() {
        let result = score(&"x".repeat(16), CategoryFlags::ALL); // very strong, 5 lit
        let rendered = meter(&result, Theme::Dark);
        assert_eq!(rendered.matches('▰').count(), 20);
        assert_eq!(rendered.matches('▱').count(), 0);

        let low = score(
            "ab",
            CategoryFlags {
                uppercase: false,
                lowercase: true,
                numbers: false,
                symbols: false,
            },
        );
        let rendered = meter(&low, Theme::Dark);
        assert_eq!(rendered.matches('▰').count(), 4);
        assert_eq!(rendered.matches('▱').count(), 16);
    }

    #[test]
    fn meter_display_width_is_stable_across_levels_and_themes() {
        let strong = score(&"x".repeat(16), CategoryFlags::ALL);
        let weak = score("x", CategoryFlags::ALL);
        assert_eq!(
            console_width(&meter(&strong, Theme::Dark)),
            console_width(&meter(&weak, Theme::Light)),
        );
    }
}
