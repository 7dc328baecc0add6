/// Minimum accepted year (inclusive)
pub const MIN_YEAR: u16 = 1900;

/// Maximum accepted year (inclusive)
pub const MAX_YEAR: u16 = 2100;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// A leading token above this value can only be a day of the month.
pub const AMBIGUITY_THRESHOLD: i64 = MAX_MONTH as i64;

/// Preferred component separator (`MM/DD/YYYY`, `DD/MM/YYYY`)
pub const SLASH_SEPARATOR: char = '/';
/// Fallback component separator (`MM-DD-YYYY`, `DD-MM-YYYY`)
pub const DASH_SEPARATOR: char = '-';

/// Number of components in a full date string
pub(crate) const DATE_COMPONENTS: usize = 3;
