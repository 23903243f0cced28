use crate::terminal::Theme;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub board: bool,
    pub saved: bool,
    pub save: bool,
    pub score: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_numbers: bool,
    pub no_symbols: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub theme: Option<Theme>,
}
