//! Placeholder IBAN handling.
//!
//! Accounts created without a plausible IBAN get a generated stand-in value made
//! of the country code followed by three random digit groups. No checksum is
//! computed or validated.

use rand::Rng;

/// Country code every generated IBAN starts with
pub const COUNTRY_CODE: &str = "DE";

/// Supplied IBANs shorter than this (after normalization) are replaced
pub const MIN_IBAN_LEN: usize = 8;

/// Strips whitespace and upper-cases an IBAN as entered by a client.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Whether a normalized IBAN is long enough to keep.
pub fn is_plausible(iban: &str) -> bool {
    iban.chars().count() >= MIN_IBAN_LEN
}

/// Generates `DE` + 2 digits + 8 digits + 8 digits.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}{}{}{}",
        COUNTRY_CODE,
        rng.gen_range(10..=99u32),
        rng.gen_range(10_000_000..=99_999_999u32),
        rng.gen_range(10_000_000..=99_999_999u32),
    )
}

/// Normalizes the supplied value, falling back to a generated IBAN when the
/// result is missing or implausibly short.
pub fn normalize_or_generate(raw: Option<&str>) -> String {
    let normalized = raw.map(normalize).unwrap_or_default();
    if is_plausible(&normalized) {
        normalized
    } else {
        generate()
    }
}

/// Renders an IBAN in blocks of four for display: `DE12 3456 7890 ...`
pub fn format_grouped(iban: &str) -> String {
    let chars: Vec<char> = iban.chars().collect();
    chars
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
