//! Heuristic strength scoring.
//!
//! Length and category presence only; this is deliberately not an entropy
//! calculation (alphabet sizes are ignored beyond the boolean flags).

use super::charset::CategoryFlags;

const LENGTH_CAP: u32 = 40;

/// Discrete strength level, one of five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    fn from_score(score: u32) -> Self {
        match score {
            0..=19 => Self::VeryWeak,
            20..=39 => Self::Weak,
            40..=59 => Self::Medium,
            60..=79 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::VeryWeak => "Add more characters and character types",
            Self::Weak => "Could be stronger with more characters",
            Self::Medium => "Good, but could be stronger",
            Self::Strong => "Strong password",
            Self::VeryStrong => "Excellent password!",
        }
    }

    /// Meter segments lit for this level, 1 through 5.
    pub fn segments(self) -> u8 {
        match self {
            Self::VeryWeak => 1,
            Self::Weak => 2,
            Self::Medium => 3,
            Self::Strong => 4,
            Self::VeryStrong => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: u8,
    pub level: StrengthLevel,
    pub active_segments: u8,
    pub description: &'static str,
}

/// Score a password against the categories it was generated with.
///
/// Pure: same inputs always produce the same result.
pub fn score(password: &str, flags: CategoryFlags) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult {
            score: 0,
            level: StrengthLevel::VeryWeak,
            active_segments: 1,
            description: StrengthLevel::VeryWeak.description(),
        };
    }

    let length_score = (password.chars().count() as u32 * 2).min(LENGTH_CAP);

    let mut variety_score = 0;
    if flags.uppercase {
        variety_score += 10;
    }
    if flags.lowercase {
        variety_score += 10;
    }
    if flags.numbers {
        variety_score += 10;
    }
    if flags.symbols {
        // Symbols widen the search space the most.
        variety_score += 30;
    }

    let score = (length_score + variety_score).min(100);
    let level = StrengthLevel::from_score(score);

    StrengthResult {
        score: score as u8,
        level,
        active_segments: level.segments(),
        description: level.description(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(uppercase: bool, lowercase: bool, numbers: bool, symbols: bool) -> CategoryFlags {
        CategoryFlags {
            uppercase,
            lowercase,
            numbers,
            symbols,
        }
    }

    #[test]
    fn empty_password_short_circuits() {
        let r = score("", CategoryFlags::ALL);
        assert_eq!(r.score, 0);
        assert_eq!(r.level, StrengthLevel::VeryWeak);
        assert_eq!(r.active_segments, 1);
    }

    #[test]
    fn sixteen_chars_all_categories_is_very_strong() {
        let r = score(&"x".repeat(16), CategoryFlags::ALL);
        assert_eq!(r.score, 92); // min(100, 32 + 60)
        assert_eq!(r.level, StrengthLevel::VeryStrong);
        assert_eq!(r.active_segments, 5);
    }

    #[test]
    fn eight_chars_lowercase_only_is_weak() {
        let r = score("abcdefgh", flags(false, true, false, false));
        assert_eq!(r.score, 26); // 16 + 10
        assert_eq!(r.level, StrengthLevel::Weak);
        assert_eq!(r.active_segments, 2);
    }

    #[test]
    fn four_chars_upper_and_symbols_is_medium() {
        let r = score("A!B?", flags(true, false, false, true));
        assert_eq!(r.score, 48); // 8 + 40
        assert_eq!(r.level, StrengthLevel::Medium);
        assert_eq!(r.active_segments, 3);
    }

    #[test]
    fn score_is_monotonic_in_length_up_to_the_cap() {
        let f = flags(false, true, false, false);
        let mut prev = 0;
        for len in 1..=30 {
            let s = score(&"a".repeat(len), f).score;
            assert!(s >= prev, "score dropped at length {len}");
            prev = s;
        }
        // Past the cap, length no longer contributes.
        assert_eq!(score(&"a".repeat(20), f).score, score(&"a".repeat(64), f).score);
    }

    #[test]
    fn score_is_idempotent() {
        let f = CategoryFlags::ALL;
        assert_eq!(score("Tr0ub4dor&3", f), score("Tr0ub4dor&3", f));
    }
}
