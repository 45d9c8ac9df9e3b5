//! Decimal digit extraction
//!
//! Splits a number into its decimal digits, most-significant first, so the
//! renderer can lay them out left to right.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single decimal digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    /// Create a digit, returning `None` outside 0-9
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Numeric value of the digit
    pub fn value(self) -> u8 {
        self.0
    }

    /// The 4-bit encoding as (A, B, C, D) = (8s, 4s, 2s, 1s)
    pub fn bits(self) -> (bool, bool, bool, bool) {
        (
            self.0 & 8 == 8,
            self.0 & 4 == 4,
            self.0 & 2 == 2,
            self.0 & 1 == 1,
        )
    }

    /// All ten digits in ascending order
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..=9).map(Digit)
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Digit::new(value).ok_or_else(|| format!("digit out of range: {}", value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decimal digits of a number, most-significant first
///
/// Never empty: zero is represented by a single `0` digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Digit>", into = "Vec<Digit>")]
pub struct Digits {
    digits: Vec<Digit>,
}

impl Digits {
    /// Extract the digits of a non-negative number
    pub fn from_unsigned(mut num: u64) -> Self {
        if num == 0 {
            return Self {
                digits: vec![Digit::ZERO],
            };
        }

        // Least-significant digit comes out first; collect onto a stack
        let mut stack = Vec::with_capacity(20);
        while num > 0 {
            stack.push(Digit((num % 10) as u8));
            num /= 10;
        }

        let mut digits = Vec::with_capacity(stack.len());
        while let Some(digit) = stack.pop() {
            digits.push(digit);
        }

        Self { digits }
    }

    /// Extract the digits of a signed number, rejecting negatives
    pub fn from_signed(num: i64) -> Result<Self> {
        if num < 0 {
            return Err(Error::InvalidInput(num.to_string()));
        }
        Ok(Self::from_unsigned(num as u64))
    }

    /// Parse decimal text such as a command-line argument
    ///
    /// Surrounding whitespace and a leading `+` are ignored and leading
    /// zeros are dropped. The text is not limited to the range of any
    /// integer type.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Parse(input.to_string()));
        }

        let significant = body.trim_start_matches('0');
        if significant.is_empty() {
            return Ok(Self::from_unsigned(0));
        }
        if negative {
            return Err(Error::InvalidInput(trimmed.to_string()));
        }

        Ok(Self {
            digits: significant.bytes().map(|b| Digit(b - b'0')).collect(),
        })
    }

    /// Number of digits
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Iterate over the digits, most-significant first
    pub fn iter(&self) -> impl Iterator<Item = Digit> + '_ {
        self.digits.iter().copied()
    }

    /// Borrow the digits as a slice
    pub fn as_slice(&self) -> &[Digit] {
        &self.digits
    }
}

impl TryFrom<Vec<Digit>> for Digits {
    type Error = String;

    fn try_from(digits: Vec<Digit>) -> std::result::Result<Self, Self::Error> {
        if digits.is_empty() {
            return Err("digit sequence must not be empty".to_string());
        }
        Ok(Self { digits })
    }
}

impl From<Digits> for Vec<Digit> {
    fn from(digits: Digits) -> Self {
        digits.digits
    }
}

impl<'a> IntoIterator for &'a Digits {
    type Item = &'a Digit;
    type IntoIter = std::slice::Iter<'a, Digit>;

    fn into_iter(self) -> Self::IntoIter {
        self.digits.iter()
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(digits: &Digits) -> Vec<u8> {
        digits.iter().map(Digit::value).collect()
    }

    #[test]
    fn test_digit_range() {
        assert_eq!(Digit::new(0).map(Digit::value), Some(0));
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert!(Digit::new(10).is_none());
        assert_eq!(Digit::all().count(), 10);
    }

    #[test]
    fn test_digit_bits() {
        assert_eq!(Digit::new(0).unwrap().bits(), (false, false, false, false));
        assert_eq!(Digit::new(1).unwrap().bits(), (false, false, false, true));
        assert_eq!(Digit::new(6).unwrap().bits(), (false, true, true, false));
        assert_eq!(Digit::new(8).unwrap().bits(), (true, false, false, false));
        assert_eq!(Digit::new(9).unwrap().bits(), (true, false, false, true));
    }

    #[test]
    fn test_extract_most_significant_first() {
        let digits = Digits::from_unsigned(1234567890);
        assert_eq!(values(&digits), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0]);
        assert_eq!(digits.len(), 10);
    }

    #[test]
    fn test_extract_zero_yields_single_digit() {
        let digits = Digits::from_unsigned(0);
        assert_eq!(values(&digits), vec![0]);
        assert!(!digits.is_empty());
    }

    #[test]
    fn test_extract_trailing_zeros() {
        assert_eq!(values(&Digits::from_unsigned(1000)), vec![1, 0, 0, 0]);
    }

    #[test]
    fn test_extract_u64_max() {
        let digits = Digits::from_unsigned(u64::MAX);
        assert_eq!(digits.to_string(), u64::MAX.to_string());
        assert_eq!(digits.len(), 20);
    }

    #[test]
    fn test_signed_rejects_negative() {
        assert!(matches!(
            Digits::from_signed(-42),
            Err(Error::InvalidInput(ref n)) if n == "-42"
        ));
        assert_eq!(values(&Digits::from_signed(42).unwrap()), vec![4, 2]);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Digits::parse("  907 ").unwrap().to_string(), "907");
        assert_eq!(Digits::parse("007").unwrap().to_string(), "7");
        assert_eq!(Digits::parse("-0").unwrap().to_string(), "0");
        assert!(matches!(Digits::parse("-5"), Err(Error::InvalidInput(_))));
        assert!(matches!(Digits::parse("+12").map(|d| d.to_string()), Ok(ref s) if s == "12"));
        assert!(matches!(Digits::parse("12a"), Err(Error::Parse(_))));
        assert!(matches!(Digits::parse(""), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_beyond_u64() {
        let text = "123456789012345678901234";
        let digits = Digits::parse(text).unwrap();
        assert_eq!(digits.len(), 24);
        assert_eq!(digits.to_string(), text);
        assert_eq!(Digits::parse("000").unwrap().to_string(), "0");
        assert!(matches!(Digits::parse("-"), Err(Error::Parse(_))));
        assert!(matches!(Digits::parse("1 2"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_huge_negative_is_invalid_input() {
        assert!(matches!(
            Digits::parse("-99999999999999999999"),
            Err(Error::InvalidInput(ref n)) if n == "-99999999999999999999"
        ));
        assert!(matches!(Digits::parse("-00"), Ok(ref d) if d.to_string() == "0"));
    }

    #[test]
    fn test_digits_serde_rejects_empty() {
        assert!(serde_json::from_str::<Digits>("[]").is_err());
        assert!(serde_json::from_str::<Digits>(r#"{"digits":[]}"#).is_err());

        let digits = Digits::from_unsigned(407);
        let json = serde_json::to_string(&digits).unwrap();
        assert_eq!(json, "[4,0,7]");
        assert_eq!(serde_json::from_str::<Digits>(&json).unwrap(), digits);
    }

    #[test]
    fn test_digit_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Digit>("7").is_ok());
        assert!(serde_json::from_str::<Digit>("12").is_err());
    }
}
