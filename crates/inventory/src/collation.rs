//! Locale-aware string ordering for display lists.
//!
//! Approximates the Unicode Collation Algorithm for Latin text in three levels:
//!
//! 1. **Primary**: base letters, ignoring case and accents (`café` == `Cafe`).
//! 2. **Secondary**: accents, ignoring case (`cafe` < `café`).
//! 3. **Tertiary**: raw code points, so distinct strings never compare equal.

use core::cmp::Ordering;

/// Compare two strings the way a human-facing list expects them ordered.
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    primary_key(left)
        .cmp(primary_key(right))
        .then_with(|| secondary_key(left).cmp(secondary_key(right)))
        .then_with(|| left.cmp(right))
}

fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(|ch| strip_diacritic(ch).to_lowercase())
}

fn secondary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Strip common Latin diacritical marks, returning the base character.
///
/// Covers the Latin-1 Supplement block. Characters outside it pass through
/// unchanged.
fn strip_diacritic(ch: char) -> char {
    match ch {
        '\u{00C0}'..='\u{00C6}' => 'A',
        '\u{00E0}'..='\u{00E6}' => 'a',
        '\u{00C7}' => 'C',
        '\u{00E7}' => 'c',
        '\u{00C8}'..='\u{00CB}' => 'E',
        '\u{00E8}'..='\u{00EB}' => 'e',
        '\u{00CC}'..='\u{00CF}' => 'I',
        '\u{00EC}'..='\u{00EF}' => 'i',
        '\u{00D1}' => 'N',
        '\u{00F1}' => 'n',
        '\u{00D2}'..='\u{00D6}' | '\u{00D8}' => 'O',
        '\u{00F2}'..='\u{00F6}' | '\u{00F8}' => 'o',
        '\u{00D9}'..='\u{00DC}' => 'U',
        '\u{00F9}'..='\u{00FC}' => 'u',
        '\u{00DD}' => 'Y',
        '\u{00FD}' | '\u{00FF}' => 'y',
        _ => ch,
    }
}
