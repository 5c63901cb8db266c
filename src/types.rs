use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_IN_SEXTILE_YEAR, DAYS_IN_YEAR, GREGORIAN_CYCLE,
    SANSCULOTTIDES_DAYS, SANSCULOTTIDES_DAYS_SEXTILE, SEXTILE_CYCLE, SEXTILE_RULE_START,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;

/// A Republican year, counted from year I (1792-1793).
/// Uses `NonZeroU16` internally, so there is no year 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Year I, the first year of the calendar
    pub const ONE: Self = Self(NonZeroU16::MIN);

    /// Creates a new Year, validating that it's non-zero
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0.
    pub fn new(value: u16) -> Result<Self, DateError> {
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(DateError::InvalidYear(value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// The following year, or `None` past `u16::MAX`
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Whether this year carries a sixth Sans-culottide
    pub const fn is_sextile(self) -> bool {
        is_sextile(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The twelve 30-day months plus the Sans-culottides, which close the year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Month {
    #[display(fmt = "Vendémiaire")]
    Vendemiaire = 1,
    #[display(fmt = "Brumaire")]
    Brumaire = 2,
    #[display(fmt = "Frimaire")]
    Frimaire = 3,
    #[display(fmt = "Nivôse")]
    Nivose = 4,
    #[display(fmt = "Pluviôse")]
    Pluviose = 5,
    #[display(fmt = "Ventôse")]
    Ventose = 6,
    #[display(fmt = "Germinal")]
    Germinal = 7,
    #[display(fmt = "Floréal")]
    Floreal = 8,
    #[display(fmt = "Prairial")]
    Prairial = 9,
    #[display(fmt = "Messidor")]
    Messidor = 10,
    #[display(fmt = "Thermidor")]
    Thermidor = 11,
    #[display(fmt = "Fructidor")]
    Fructidor = 12,
    /// Intercalary pseudo-month holding the 5 or 6 complementary days
    #[display(fmt = "Sans-culottides")]
    SansCulottides = 13,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Self; 13] = [
        Self::Vendemiaire,
        Self::Brumaire,
        Self::Frimaire,
        Self::Nivose,
        Self::Pluviose,
        Self::Ventose,
        Self::Germinal,
        Self::Floreal,
        Self::Prairial,
        Self::Messidor,
        Self::Thermidor,
        Self::Fructidor,
        Self::SansCulottides,
    ];

    /// Looks a month up by its ordinal (1 = Vendémiaire, 13 = Sans-culottides)
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the ordinal is 0 or > 13.
    pub fn new(ordinal: u8) -> Result<Self, DateError> {
        ordinal
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)))
            .copied()
            .ok_or(DateError::InvalidMonth(ordinal))
    }

    /// Position in the year, 1-based
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// The month that follows, or `None` after the Sans-culottides
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(usize::from(self.ordinal())).copied()
    }

    pub const fn is_sans_culottides(self) -> bool {
        matches!(self, Self::SansCulottides)
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.ordinal()
    }
}

/// The named complementary days that end each year.
/// `Revolution` only exists in sextile years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[repr(u8)]
pub enum SansCulottide {
    #[display(fmt = "de la Vertu")]
    Vertu = 1,
    #[display(fmt = "du Génie")]
    Genie = 2,
    #[display(fmt = "du Travail")]
    Travail = 3,
    #[display(fmt = "de l'Opinion")]
    Opinion = 4,
    #[display(fmt = "des Récompenses")]
    Recompenses = 5,
    #[display(fmt = "de la Révolution")]
    Revolution = 6,
}

impl SansCulottide {
    pub const ALL: [Self; 6] = [
        Self::Vertu,
        Self::Genie,
        Self::Travail,
        Self::Opinion,
        Self::Recompenses,
        Self::Revolution,
    ];

    /// Looks a complementary day up by its position (1..=6)
    pub fn new(day: u8) -> Option<Self> {
        day.checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)))
            .copied()
    }

    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

// Helper functions

/// Whether the Republican `year` is sextile (has six Sans-culottides).
///
/// Years from `SEXTILE_RULE_START` on follow the Gregorian pattern. Earlier
/// years were sextile when they preceded a multiple of four (III, VII, XI, XV).
pub const fn is_sextile(year: u16) -> bool {
    if year >= SEXTILE_RULE_START {
        (year % SEXTILE_CYCLE == 0 && year % CENTURY_CYCLE != 0) || year % GREGORIAN_CYCLE == 0
    } else {
        (year + 1) % SEXTILE_CYCLE == 0
    }
}

pub const fn days_in_month(year: u16, month: Month) -> u8 {
    match month {
        Month::SansCulottides if is_sextile(year) => SANSCULOTTIDES_DAYS_SEXTILE,
        Month::SansCulottides => SANSCULOTTIDES_DAYS,
        _ => DAYS_IN_MONTH,
    }
}

pub const fn days_in_year(year: u16) -> u16 {
    if is_sextile(year) {
        DAYS_IN_SEXTILE_YEAR
    } else {
        DAYS_IN_YEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(233).is_ok());
        assert!(Year::new(u16::MAX).is_ok());
    }

    #[test]
    fn test_year_new_invalid_zero() {
        let result = Year::new(0);
        assert!(matches!(result, Err(DateError::InvalidYear(0))));
    }

    #[test]
    fn test_year_next() {
        assert_eq!(Year::ONE.next(), Some(Year::new(2).unwrap()));
        assert_eq!(Year::new(u16::MAX).unwrap().next(), None);
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(233).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "233");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        let result: Result<Year, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }

    #[test]
    fn test_month_new_valid() {
        for ordinal in 1..=13 {
            let month = Month::new(ordinal).unwrap();
            assert_eq!(month.ordinal(), ordinal, "Month {ordinal} should round-trip");
        }
        assert_eq!(Month::new(1).unwrap(), Month::Vendemiaire);
        assert_eq!(Month::new(13).unwrap(), Month::SansCulottides);
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(14), Err(DateError::InvalidMonth(14))));
        assert!(matches!(Month::new(255), Err(DateError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_next() {
        assert_eq!(Month::Vendemiaire.next(), Some(Month::Brumaire));
        assert_eq!(Month::Fructidor.next(), Some(Month::SansCulottides));
        assert_eq!(Month::SansCulottides.next(), None);
    }

    #[test]
    fn test_month_ordering() {
        assert!(Month::Vendemiaire < Month::Brumaire);
        assert!(Month::Fructidor < Month::SansCulottides);
        for pair in Month::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_month_display() {
        let names: Vec<String> = Month::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            [
                "Vendémiaire",
                "Brumaire",
                "Frimaire",
                "Nivôse",
                "Pluviôse",
                "Ventôse",
                "Germinal",
                "Floréal",
                "Prairial",
                "Messidor",
                "Thermidor",
                "Fructidor",
                "Sans-culottides",
            ]
        );
    }

    #[test]
    fn test_month_serde() {
        let json = serde_json::to_string(&Month::Nivose).unwrap();
        assert_eq!(json, "4");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Month::Nivose);

        let result: Result<Month, _> = serde_json::from_str("14");
        assert!(result.is_err());
    }

    #[test]
    fn test_sans_culottide_names() {
        let names: Vec<String> = SansCulottide::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            [
                "de la Vertu",
                "du Génie",
                "du Travail",
                "de l'Opinion",
                "des Récompenses",
                "de la Révolution",
            ]
        );
    }

    #[test]
    fn test_sans_culottide_new() {
        assert_eq!(SansCulottide::new(1), Some(SansCulottide::Vertu));
        assert_eq!(SansCulottide::new(6), Some(SansCulottide::Revolution));
        assert_eq!(SansCulottide::new(0), None);
        assert_eq!(SansCulottide::new(7), None);
        assert_eq!(SansCulottide::Recompenses.ordinal(), 5);
    }

    #[test]
    fn test_is_sextile_cases() {
        struct TestCase {
            year: u16,
            sextile: bool,
            description: &'static str,
        }

        let cases = [
            // Observed regime: (year + 1) divisible by 4
            TestCase {
                year: 3,
                sextile: true,
                description: "year III precedes a multiple of 4",
            },
            TestCase {
                year: 11,
                sextile: true,
                description: "year XI precedes a multiple of 4",
            },
            TestCase {
                year: 15,
                sextile: true,
                description: "year XV precedes a multiple of 4",
            },
            TestCase {
                year: 2,
                sextile: false,
                description: "year II is common",
            },
            TestCase {
                year: 16,
                sextile: false,
                description: "divisible by 4 but still in the observed regime",
            },
            // Gregorian-style regime
            TestCase {
                year: 17,
                sextile: false,
                description: "last observed-regime year",
            },
            TestCase {
                year: 19,
                sextile: false,
                description: "(year + 1) divisible by 4 no longer matters",
            },
            TestCase {
                year: 20,
                sextile: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 100,
                sextile: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 300,
                sextile: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 400,
                sextile: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 2000,
                sextile: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_sextile(case.year),
                case.sextile,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.sextile { "sextile" } else { "common" }
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        for month in &Month::ALL[..12] {
            assert_eq!(days_in_month(2, *month), 30, "{month} should have 30 days");
        }
        assert_eq!(days_in_month(2, Month::SansCulottides), 5);
        assert_eq!(days_in_month(3, Month::SansCulottides), 6);
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(1), 365);
        assert_eq!(days_in_year(3), 366);
        assert_eq!(days_in_year(18), 365);
        assert_eq!(days_in_year(20), 366);
    }
}
