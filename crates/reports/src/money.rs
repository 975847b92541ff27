/// Thousands separator for money columns. Decimals are never shown.
pub const GROUP_SEPARATOR: char = '.';

/// Formats whole currency units with thousands grouping: `12345678` → `12.345.678`.
pub fn format_money(units: i64) -> String {
    let digits = units.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if units < 0 {
        out.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
