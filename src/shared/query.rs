//! Query-string helpers

/// Parse a result cap from a `showLimit`-style parameter.
///
/// Accepts a leading integer prefix after optional whitespace and sign
/// (`"10abc"` is 10), read as hexadecimal after `0x`/`0X` (`"0x10"` is 16).
/// Anything without leading digits, or zero, means no cap. A negative value
/// caps at its magnitude.
pub fn parse_limit(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);

    let (body, radix) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (unsigned, 10),
    };

    let digits: &str = {
        let end = body
            .find(|c: char| !c.is_digit(radix))
            .unwrap_or(body.len());
        &body[..end]
    };

    if digits.is_empty() {
        return None;
    }

    let value = i64::from_str_radix(digits, radix).unwrap_or(i64::MAX);
    (value != 0).then_some(value)
}

/// Treat empty strings like missing parameters.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
