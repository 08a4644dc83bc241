use crate::common::error::{CalcError, Result};
use crate::common::types::NumeralSystem;

const ONES: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];
const TENS: [&str; 11] = [
    "", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC", "C",
];

/// Largest value accepted as an operand in either system.
pub const MAX_OPERAND: i64 = 10;
/// Largest value that can be encoded back to a Roman numeral.
pub const MAX_ROMAN: i64 = 100;

/// Read-only numeral lookup tables.
///
/// `encoded[n]` holds the canonical Roman spelling of `n` for 1..=100 and
/// index 0 is unused. Operand decoding only accepts the first ten entries.
#[derive(Debug, Clone)]
pub struct NumeralTable {
    encoded: Vec<String>,
}

impl NumeralTable {
    pub fn new() -> Self {
        let mut encoded = Vec::with_capacity(MAX_ROMAN as usize + 1);
        for n in 0..=MAX_ROMAN as usize {
            encoded.push(format!("{}{}", TENS[n / 10], ONES[n % 10]));
        }
        NumeralTable { encoded }
    }

    /// Value of a Roman operand token ("I".."X"), case-sensitive
    pub fn roman_value(&self, token: &str) -> Option<i64> {
        self.encoded[1..=MAX_OPERAND as usize]
            .iter()
            .position(|roman| roman == token)
            .map(|i| i as i64 + 1)
    }

    /// Canonical Roman spelling for 1..=100
    pub fn roman(&self, value: i64) -> Option<&str> {
        if (1..=MAX_ROMAN).contains(&value) {
            Some(self.encoded[value as usize].as_str())
        } else {
            None
        }
    }
}

impl Default for NumeralTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Token classification and conversion over a [`NumeralTable`].
#[derive(Debug, Clone, Copy)]
pub struct Numerals<'t> {
    table: &'t NumeralTable,
}

impl<'t> Numerals<'t> {
    pub fn new(table: &'t NumeralTable) -> Self {
        Numerals { table }
    }

    pub fn is_arabic(&self, token: &str) -> bool {
        token.parse::<i64>().is_ok()
    }

    pub fn is_roman(&self, token: &str) -> bool {
        self.table.roman_value(token).is_some()
    }

    pub fn classify(&self, token: &str) -> Option<NumeralSystem> {
        if self.is_arabic(token) {
            Some(NumeralSystem::Arabic)
        } else if self.is_roman(token) {
            Some(NumeralSystem::Roman)
        } else {
            None
        }
    }

    /// Integer value of a classified token. No range check.
    pub fn decode(&self, token: &str) -> Result<i64> {
        if let Ok(value) = token.parse::<i64>() {
            return Ok(value);
        }
        self.table
            .roman_value(token)
            .ok_or_else(|| CalcError::UnrecognizedNumeral {
                token: token.to_string(),
            })
    }

    pub fn encode_roman(&self, value: i64) -> Result<&'t str> {
        self.table
            .roman(value)
            .ok_or(CalcError::ResultRange { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

    #[test]
    fn test_operand_table_is_bijection() {
        let table = NumeralTable::new();
        for (i, roman) in CANONICAL.iter().enumerate() {
            let value = i as i64 + 1;
            assert_eq!(table.roman_value(roman), Some(value));
            assert_eq!(table.roman(value), Some(*roman));
        }
    }

    #[test]
    fn test_extended_table_spellings() {
        let table = NumeralTable::new();
        assert_eq!(table.roman(11), Some("XI"));
        assert_eq!(table.roman(14), Some("XIV"));
        assert_eq!(table.roman(40), Some("XL"));
        assert_eq!(table.roman(49), Some("XLIX"));
        assert_eq!(table.roman(90), Some("XC"));
        assert_eq!(table.roman(99), Some("XCIX"));
        assert_eq!(table.roman(100), Some("C"));
        assert_eq!(table.roman(0), None);
        assert_eq!(table.roman(101), None);
    }

    #[test]
    fn test_roman_decode_limited_to_operands() {
        let table = NumeralTable::new();
        assert_eq!(table.roman_value("XI"), None);
        assert_eq!(table.roman_value("C"), None);
        assert_eq!(table.roman_value(""), None);
    }

    #[test]
    fn test_classification() {
        let table = NumeralTable::new();
        let numerals = Numerals::new(&table);

        assert_eq!(numerals.classify("7"), Some(NumeralSystem::Arabic));
        assert_eq!(numerals.classify("-3"), Some(NumeralSystem::Arabic));
        assert_eq!(numerals.classify("+3"), Some(NumeralSystem::Arabic));
        assert_eq!(numerals.classify("0"), Some(NumeralSystem::Arabic));
        assert_eq!(numerals.classify("IV"), Some(NumeralSystem::Roman));
        assert_eq!(numerals.classify("iv"), None);
        assert_eq!(numerals.classify("IIII"), None);
        assert_eq!(numerals.classify("3.5"), None);
        assert_eq!(numerals.classify("99999999999999999999"), None);
    }

    #[test]
    fn test_roman_is_case_sensitive() {
        let table = NumeralTable::new();
        let numerals = Numerals::new(&table);
        for roman in CANONICAL {
            assert!(numerals.is_roman(roman));
            assert!(!numerals.is_roman(&roman.to_lowercase()));
            assert!(!numerals.is_arabic(roman));
        }
    }

    #[test]
    fn test_decode_encode_roundtrip() {
        let table = NumeralTable::new();
        let numerals = Numerals::new(&table);
        for n in 1..=MAX_OPERAND {
            let roman = numerals.encode_roman(n).unwrap();
            assert_eq!(numerals.decode(roman).unwrap(), n);
        }
    }

    #[test]
    fn test_decode_unclassified_fails() {
        let table = NumeralTable::new();
        let numerals = Numerals::new(&table);
        assert_eq!(
            numerals.decode("abc"),
            Err(CalcError::UnrecognizedNumeral {
                token: "abc".to_string()
            })
        );
        assert_eq!(numerals.decode("42").unwrap(), 42);
    }

    #[test]
    fn test_encode_out_of_range() {
        let table = NumeralTable::new();
        let numerals = Numerals::new(&table);
        assert_eq!(numerals.encode_roman(0), Err(CalcError::ResultRange { value: 0 }));
        assert_eq!(numerals.encode_roman(-4), Err(CalcError::ResultRange { value: -4 }));
        assert_eq!(
            numerals.encode_roman(101),
            Err(CalcError::ResultRange { value: 101 })
        );
    }
}
