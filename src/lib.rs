mod consts;
mod convert;
mod prelude;
mod roman;
mod types;

pub use consts::*;
pub use convert::{days_since_epoch, republican_text};
pub use roman::{Roman, to_roman};
pub use types::{Month, SansCulottide, Year, days_in_month, days_in_year, is_sextile};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A date in the French Republican Calendar.
///
/// Always valid: ordinary months hold days 1-30, the Sans-culottides hold
/// days 1-5 (1-6 in sextile years), and there is no year 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u16, u8, u8)", into = "(u16, u8, u8)")]
pub struct RepublicanDate {
    year: Year,
    month: Month,
    day: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid month: {0} (must be 1-{max})", max = SANSCULOTTIDES)]
    InvalidMonth(u8),
    #[error("Invalid day: {day} (must be 1-{max})", max = DAYS_IN_MONTH)]
    InvalidDay { day: u8 },
    #[error(
        "Invalid Sans-culottide {day}: there are only {common} ({sextile_days} in a sextile year), and year {year} is {label}",
        common = SANSCULOTTIDES_DAYS,
        sextile_days = SANSCULOTTIDES_DAYS_SEXTILE,
        label = sextile_label(.sextile)
    )]
    InvalidSansCulottide { year: u16, day: u8, sextile: bool },
    #[error("Invalid year: {0} (there is no year 0)")]
    InvalidYear(u16),
    #[error("{0} is before the Republican epoch ({epoch})", epoch = EPOCH)]
    DateBeforeEpoch(Date),
    #[error("Invalid Gregorian date: {0}")]
    Gregorian(String),
}

impl From<jiff::Error> for DateError {
    fn from(err: jiff::Error) -> Self {
        Self::Gregorian(err.to_string())
    }
}

const fn sextile_label(sextile: &bool) -> &'static str {
    if *sextile { "sextile" } else { "not sextile" }
}

impl RepublicanDate {
    /// 1 Vendémiaire an I
    pub const EPOCH: Self = Self::from_parts(Year::ONE, Month::Vendemiaire, MIN_DAY);

    /// Creates a date, validating day and year against the month.
    ///
    /// # Errors
    /// - `DateError::InvalidDay` if `day` is outside 1-30
    /// - `DateError::InvalidSansCulottide` for a sixth complementary day in a
    ///   common year, or a seventh or later at all
    /// - `DateError::InvalidYear` if `year` is 0
    pub fn new(year: u16, month: Month, day: u8) -> Result<Self, DateError> {
        Self::validate(year, month, day).inspect_err(|err| {
            log::debug!(
                "rejected Republican date {year}/{}/{day}: {err}",
                month.ordinal()
            );
        })
    }

    fn validate(year: u16, month: Month, day: u8) -> Result<Self, DateError> {
        if !(MIN_DAY..=DAYS_IN_MONTH).contains(&day) {
            return Err(DateError::InvalidDay { day });
        }
        if month.is_sans_culottides() && day > SANSCULOTTIDES_DAYS {
            let sextile = is_sextile(year);
            if !sextile || day > SANSCULOTTIDES_DAYS_SEXTILE {
                return Err(DateError::InvalidSansCulottide { year, day, sextile });
            }
        }
        let year = Year::new(year)?;
        Ok(Self::from_parts(year, month, day))
    }

    /// Assembles a date from parts already known to be consistent
    pub(crate) const fn from_parts(year: Year, month: Month, day: u8) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    /// Day of the month, or position among the Sans-culottides
    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn is_sextile(&self) -> bool {
        self.year.is_sextile()
    }

    /// The named complementary day, if this date falls in the Sans-culottides
    pub fn sans_culottide(&self) -> Option<SansCulottide> {
        if self.month.is_sans_culottides() {
            SansCulottide::new(self.day)
        } else {
            None
        }
    }

    /// The following day. Returns `None` only past year `u16::MAX`.
    pub fn succ(&self) -> Option<Self> {
        let Self { year, month, day } = *self;
        if day < days_in_month(year.get(), month) {
            return Some(Self::from_parts(year, month, day + 1));
        }
        match month.next() {
            Some(next) => Some(Self::from_parts(year, next, MIN_DAY)),
            None => year
                .next()
                .map(|next| Self::from_parts(next, Month::Vendemiaire, MIN_DAY)),
        }
    }

    /// Converts to storage columns: (year, month ordinal, day)
    pub const fn to_columns(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.ordinal(), self.day)
    }

    /// Creates from storage columns: (year, month ordinal, day)
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` for an unknown ordinal, otherwise
    /// the same errors as [`RepublicanDate::new`].
    pub fn from_columns(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let month = Month::new(month)?;
        Self::new(year, month, day)
    }
}

impl Default for RepublicanDate {
    fn default() -> Self {
        Self::EPOCH
    }
}

impl PartialOrd for RepublicanDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RepublicanDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_columns().cmp(&other.to_columns())
    }
}

impl fmt::Display for RepublicanDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = Roman::from(self.year);
        match self.sans_culottide() {
            Some(feast) => write!(f, "Jour {feast} de l'An {year}"),
            None => write!(f, "{} {} de l'An {year}", self.day, self.month),
        }
    }
}

impl TryFrom<(u16, u8, u8)> for RepublicanDate {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_columns(value.0, value.1, value.2)
    }
}

impl From<RepublicanDate> for (u16, u8, u8) {
    fn from(date: RepublicanDate) -> Self {
        date.to_columns()
    }
}
