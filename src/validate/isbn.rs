//! ISBN-10 and ISBN-13 checksum validation for `book:isbn`.

/// Strip hyphens and whitespace, then validate the checksum. Returns the
/// cleaned identifier (uppercased, so a trailing `x` check digit becomes
/// `X`) or `None` when neither checksum holds.
pub fn normalize(value: &str) -> Option<String> {
    let cleaned: String = value
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();

    if valid_isbn10(&cleaned) || valid_isbn13(&cleaned) {
        Some(cleaned)
    } else {
        None
    }
}

/// Weighted sum with weights 10..1; check digit `X` counts as 10. Valid
/// when the sum is divisible by 11.
fn valid_isbn10(value: &str) -> bool {
    if value.chars().count() != 10 {
        return false;
    }
    let mut sum = 0u32;
    for (i, c) in value.chars().enumerate() {
        let digit = match c {
            '0'..='9' => c as u32 - '0' as u32,
            'X' if i == 9 => 10,
            _ => return false,
        };
        sum += digit * (10 - i as u32);
    }
    sum % 11 == 0
}

/// Alternating 1/3 weights; valid when the sum is divisible by 10.
fn valid_isbn13(value: &str) -> bool {
    if value.len() != 13 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let sum: u32 = value
        .bytes()
        .enumerate()
        .map(|(i, b)| u32::from(b - b'0') * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    sum % 10 == 0
}

// ── Unit tests ─────────────────────────────────────────────────────────────
