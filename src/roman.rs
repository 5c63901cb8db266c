//! Roman numeral rendering for Republican years.

use crate::consts::ROMAN_NUMERALS;
use crate::types::Year;
use std::fmt;

/// Display adapter writing a number as a Roman numeral.
///
/// Uses the greedy subtractive notation (`IV`, `XC`, `CM`...). Values above
/// 3999 repeat `M`. Zero has no Roman form and renders as nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Roman(pub u16);

impl fmt::Display for Roman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut remaining = self.0;
        for &(value, symbol) in &ROMAN_NUMERALS {
            while remaining >= value {
                f.write_str(symbol)?;
                remaining -= value;
            }
        }
        Ok(())
    }
}

impl From<Year> for Roman {
    fn from(year: Year) -> Self {
        Self(year.get())
    }
}

/// Renders `value` as a Roman numeral string
pub fn to_roman(value: u16) -> String {
    Roman(value).to_string()
}
