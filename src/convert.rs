//! Gregorian to Republican conversion.
//!
//! Dates are located by counting whole days from the epoch
//! (1 Vendémiaire an I, September 22, 1792). Dates after January 1, 1806
//! are extrapolated: the calendar had been abolished by then.

use crate::consts::{DAYS_IN_MONTH, EPOCH, MIN_DAY};
use crate::types::{Month, Year, days_in_year};
use crate::{DateError, RepublicanDate};
use jiff::civil::Date;

/// Whole days from the epoch to `date`, negative before it.
///
/// # Errors
/// Returns `DateError::Gregorian` if jiff cannot compute the span.
pub fn days_since_epoch(date: Date) -> Result<i32, DateError> {
    Ok(EPOCH.until(date)?.get_days())
}

impl RepublicanDate {
    /// Converts a Gregorian date into the Republican calendar.
    ///
    /// # Errors
    /// Returns `DateError::DateBeforeEpoch` for dates earlier than
    /// September 22, 1792.
    pub fn from_gregorian(date: Date) -> Result<Self, DateError> {
        let offset = days_since_epoch(date)?;
        let Ok(mut remaining) = u32::try_from(offset) else {
            log::debug!(
                "refusing to convert {date}: {} days before the epoch",
                offset.unsigned_abs()
            );
            return Err(DateError::DateBeforeEpoch(date));
        };
        log::trace!("converting {date}: {offset} days after the epoch");

        let out_of_range = || DateError::Gregorian(format!("{date} is out of range"));

        // Skip whole years, then split what is left into 30-day months.
        let mut year = Year::ONE;
        loop {
            let length = u32::from(days_in_year(year.get()));
            if remaining < length {
                break;
            }
            remaining -= length;
            year = year.next().ok_or_else(out_of_range)?;
        }

        let month_index =
            u8::try_from(remaining / u32::from(DAYS_IN_MONTH)).map_err(|_| out_of_range())?;
        let day_index =
            u8::try_from(remaining % u32::from(DAYS_IN_MONTH)).map_err(|_| out_of_range())?;
        let month = Month::new(month_index + 1)?;

        Ok(Self::from_parts(year, month, day_index + MIN_DAY))
    }

    /// Converts a raw Gregorian `(year, month, day)` triple.
    ///
    /// # Errors
    /// Returns `DateError::Gregorian` if the triple is not a valid Gregorian
    /// date, or `DateError::DateBeforeEpoch` if it precedes the epoch.
    pub fn from_ymd(year: i16, month: i8, day: i8) -> Result<Self, DateError> {
        Self::from_gregorian(Date::new(year, month, day)?)
    }

    /// Gregorian date corresponding to 1 Vendémiaire an I
    pub const fn epoch_gregorian() -> Date {
        EPOCH
    }
}

/// Renders a Gregorian `(year, month, day)` as Republican calendar text,
/// e.g. `"16 Vendémiaire de l'An CCXXXIII"` for 2024-10-07.
///
/// # Errors
/// Same as [`RepublicanDate::from_ymd`].
pub fn republican_text(year: i16, month: i8, day: i8) -> Result<String, DateError> {
    RepublicanDate::from_ymd(year, month, day).map(|date| date.to_string())
}
