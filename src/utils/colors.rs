/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";

/// Grey for weekend rows, plain otherwise.
pub fn color_for_day(is_weekend: bool) -> &'static str {
    if is_weekend { GREY } else { RESET }
}

/// Green for worked amounts, grey for "not worked".
pub fn color_for_amount(amount: f64) -> &'static str {
    if amount > 0.0 { GREEN } else { GREY }
}
