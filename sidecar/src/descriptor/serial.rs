/// Derives the compact serial form of an analysis identifier:
/// the first 3 characters, a 2-character slice starting at the rounded
/// midpoint, and the last 4 characters, joined with hyphens.
///
/// Returns `None` when any slice cannot be taken (identifier too short, or
/// a slice landing off a character boundary). Absence is the expected
/// outcome for short identifiers, not an error.
pub fn serial_form(analysis_id: &str) -> Option<String> {
    let len = analysis_id.len();
    let mid = half_rounded(len);

    let first = analysis_id.get(..3)?;
    let middle = analysis_id.get(mid..mid + 2)?;
    let last = analysis_id.get(len.checked_sub(4)?..)?;

    Some(format!("{first}-{middle}-{last}"))
}

/// Half of `len`, rounded half-to-even for odd lengths.
fn half_rounded(len: usize) -> usize {
    let half = len / 2;
    if len % 2 == 0 || half % 2 == 0 {
        half
    } else {
        half + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_form_of_full_length_id() {
        // 32-character identifier: slices are [0..3], [16..18], [28..32].
        let id = "26071405f2f1c3a6f71d4141edb208e2";
        assert_eq!(serial_form(id), Some("260-f7-08e2".to_string()));
    }

    #[test]
    fn test_serial_form_short_ids() {
        assert_eq!(serial_form("ab"), None);
        assert_eq!(serial_form(""), None);
        assert_eq!(serial_form("abc"), None); // no room for the last 4
        // Four characters is the minimum that satisfies every slice.
        assert_eq!(serial_form("abcd"), Some("abc-cd-abcd".to_string()));
    }

    #[test]
    fn test_serial_form_odd_length_midpoint() {
        // len 9 -> half 4 (even), middle slice [4..6].
        assert_eq!(serial_form("012345678"), Some("012-45-5678".to_string()));
        // len 7 -> half 3 (odd), rounds up to 4, middle slice [4..6].
        assert_eq!(serial_form("0123456"), Some("012-45-3456".to_string()));
    }

    #[test]
    fn test_serial_form_non_ascii_is_skipped() {
        // A multi-byte character under a slice boundary yields None
        // instead of panicking.
        assert_eq!(serial_form("ab\u{00e9}defgh"), None);
    }
}
