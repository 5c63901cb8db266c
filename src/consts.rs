use jiff::civil::{self, Date};

/// Gregorian date of 1 Vendémiaire, year I (September 22, 1792)
pub const EPOCH: Date = civil::date(1792, 9, 22);

/// First day of a month, used for rollovers
pub const MIN_DAY: u8 = 1;

/// Every ordinary month has exactly 30 days
pub const DAYS_IN_MONTH: u8 = 30;

/// Number of ordinary (named) months
pub const ORDINARY_MONTHS: u8 = 12;

/// Ordinal of the Sans-culottides pseudo-month
pub const SANSCULOTTIDES: u8 = 13;

/// Sans-culottides in a common year
pub const SANSCULOTTIDES_DAYS: u8 = 5;

/// Sans-culottides in a sextile year (adds the Jour de la Révolution)
pub const SANSCULOTTIDES_DAYS_SEXTILE: u8 = 6;

/// Days in a common year
pub const DAYS_IN_YEAR: u16 = 365;

/// Days in a sextile year
pub const DAYS_IN_SEXTILE_YEAR: u16 = 366;

/// Years below this one had their sextile years fixed by observation
/// rather than by the Gregorian-style rule.
pub const SEXTILE_RULE_START: u16 = 18;

/// Sextile years occur every 4 years...
pub(crate) const SEXTILE_CYCLE: u16 = 4;
/// ...except century years...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...unless they are divisible by 400
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Roman numeral symbols, descending by value
pub const ROMAN_NUMERALS: [(u16, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];
