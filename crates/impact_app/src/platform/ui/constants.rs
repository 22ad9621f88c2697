pub const NEXT_KEYS: &[&str] = &["", "n", "next", "l"];
pub const PREV_KEYS: &[&str] = &["p", "prev", "h"];
pub const JUMP_KEYS: &[&str] = &["j", "J"];
pub const QUIT_KEYS: &[&str] = &["q", "quit"];

pub const WRAP_WIDTH: usize = 72;
pub const TICKER_SEPARATOR: &str = "·";
pub const FOOTNOTE: &str = "Impacts extracted from annual reports. This is an unofficial display.";
pub const HELP: &str = "[enter/n] next  [p] previous  [j <id>] jump  [q] quit";
