//! Localized digit rendering for the value label.

/// Digit glyph table used when rendering numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigitSet {
    /// ASCII `0-9`.
    Latin,
    /// Extended Arabic-Indic digits used for Persian (default).
    #[default]
    Persian,
    /// Arabic-Indic digits.
    ArabicIndic,
}

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

impl DigitSet {
    /// Returns the glyph for a decimal digit in `0..=9`.
    pub fn glyph(self, digit: u8) -> char {
        let index = usize::from(digit.min(9));
        match self {
            DigitSet::Latin => char::from(b'0' + index as u8),
            DigitSet::Persian => PERSIAN_DIGITS[index],
            DigitSet::ArabicIndic => ARABIC_INDIC_DIGITS[index],
        }
    }

    /// Formats `value`, replacing each ASCII digit with this set's glyph.
    /// Other characters, such as a leading sign, are kept as is.
    pub fn format(self, value: i32) -> String {
        value
            .to_string()
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) => self.glyph(d as u8),
                None => c,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persian_keeps_digit_order() {
        assert_eq!(DigitSet::Persian.format(123), "۱۲۳");
        assert_eq!(DigitSet::Persian.format(0), "۰");
        assert_eq!(DigitSet::Persian.format(100), "۱۰۰");
    }

    #[test]
    fn test_other_sets() {
        assert_eq!(DigitSet::Latin.format(4096), "4096");
        assert_eq!(DigitSet::ArabicIndic.format(57), "٥٧");
    }

    #[test]
    fn test_sign_passes_through() {
        assert_eq!(DigitSet::Persian.format(-45), "-۴۵");
    }
}
