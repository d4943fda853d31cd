use crate::render::labels::Language;
use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

fn number_locale(lang: Language) -> Locale {
    match lang {
        Language::Fr => Locale::fr,
        Language::En => Locale::en,
    }
}

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, EUR = 2). Unknown codes use 2.
fn decimal_places(currency: Option<Currency>) -> u32 {
    currency
        .map(|c| c.exponent().unwrap_or(0) as u32)
        .unwrap_or(2)
}

/// Format a cash amount in `currency_code` with the grouping and decimal
/// marks of the language: fr → `1 234,50 €`, en → `€1,234.50`.
///
/// Non-finite amounts render as zero.
pub fn format_money(amount: f64, currency_code: &str, lang: Language) -> String {
    let code = currency_code.trim().to_uppercase();
    let currency = Currency::from_code(&code);
    let places = decimal_places(currency);
    let scale = 10u64.pow(places);

    let amount = if amount.is_finite() { amount } else { 0.0 };
    let minor = (amount.abs() * scale as f64).round() as u64;
    let locale = number_locale(lang);

    let mut number = (minor / scale).to_formatted_string(&locale);
    if places > 0 {
        number.push_str(locale.decimal());
        number.push_str(&format!("{:0width$}", minor % scale, width = places as usize));
    }

    let symbol = currency
        .map(|c| c.symbol().to_string())
        .unwrap_or(code);
    let sign = if amount < 0.0 && minor > 0 { "-" } else { "" };

    match lang {
        Language::Fr => format!("{sign}{number}\u{a0}{symbol}"),
        Language::En => format!("{sign}{symbol}{number}"),
    }
}

/// Format a quantity (days or hours) with at most two decimals, trailing
/// zeros dropped: `1`, `1,5`, `2.25`.
pub fn format_quantity(value: f64, lang: Language) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let hundredths = (value.abs() * 100.0).round() as u64;
    let locale = number_locale(lang);

    let mut out = String::new();
    if value < 0.0 && hundredths > 0 {
        out.push('-');
    }
    out.push_str(&(hundredths / 100).to_formatted_string(&locale));

    let frac = hundredths % 100;
    if frac != 0 {
        let digits = format!("{:02}", frac);
        out.push_str(locale.decimal());
        out.push_str(digits.trim_end_matches('0'));
    }

    out
}
