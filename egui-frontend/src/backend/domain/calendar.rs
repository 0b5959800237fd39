//! Calendar domain logic for the subscription calendar.
//!
//! This module turns a month/year selection and the subscription list into a
//! Sunday-first grid of cells. The UI only draws the cells; all date math and
//! due-day matching happen here.

use chrono::{Datelike, NaiveDate};
use shared::{CalendarCell, CalendarMonth, Subscription};

/// Weekday column labels, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Length of the Gregorian leap-year cycle
const GREGORIAN_CYCLE_YEARS: i32 = 400;
/// First year of the cycle used for weekday lookups
const GREGORIAN_CYCLE_BASE: i32 = 2000;

const MONTH_NAMES: [&str; 12] = [
    "JANUARY", "FEBRUARY", "MARCH", "APRIL", "MAY", "JUNE",
    "JULY", "AUGUST", "SEPTEMBER", "OCTOBER", "NOVEMBER", "DECEMBER",
];

/// Calendar service that builds month grids. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarService;

impl CalendarService {
    /// Create a new CalendarService instance
    pub fn new() -> Self {
        Self
    }

    /// Build the grid for `month` (0 = January) of `year`.
    ///
    /// Out-of-range months roll over into the neighbouring years, so every
    /// integer pair produces a grid.
    pub fn build(&self, month: i32, year: i32, subscriptions: &[Subscription]) -> CalendarMonth {
        let (month, year) = normalize_month(month, year);
        let days_in_month = self.days_in_month(month, year);
        let first_weekday_offset = self.first_weekday_offset(month, year);

        log::debug!(
            "🗓️ Building calendar for {} {}: {} days, first weekday {}",
            self.month_name(month),
            year,
            days_in_month,
            first_weekday_offset
        );

        let mut cells = Vec::with_capacity((first_weekday_offset + days_in_month) as usize);

        // Blank cells before the 1st
        cells.extend((0..first_weekday_offset).map(|_| CalendarCell::blank()));

        for day in 1..=days_in_month {
            let due: Vec<Subscription> = subscriptions
                .iter()
                .filter(|sub| sub.due_day == day)
                .cloned()
                .collect();
            cells.push(CalendarCell::day(day, due));
        }

        CalendarMonth {
            month,
            year,
            first_weekday_offset,
            days_in_month,
            cells,
        }
    }

    /// Get the number of days in a given month (0-11) and year
    pub fn days_in_month(&self, month: u32, year: i32) -> u32 {
        match month {
            1 => if self.is_leap_year(year) { 29 } else { 28 },
            3 | 5 | 8 | 10 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Weekday of the 1st of the month (0 = Sunday, 6 = Saturday)
    ///
    /// The Gregorian calendar repeats every 400 years (146097 days, a whole
    /// number of weeks), so the year is folded into that cycle first. This
    /// keeps every `i32` year inside chrono's supported range.
    pub fn first_weekday_offset(&self, month: u32, year: i32) -> u32 {
        let cycle_year = GREGORIAN_CYCLE_BASE + year.rem_euclid(GREGORIAN_CYCLE_YEARS);
        match NaiveDate::from_ymd_opt(cycle_year, month + 1, 1) {
            Some(date) => date.weekday().num_days_from_sunday(),
            None => {
                log::warn!("Month index {} out of range, using Sunday as first weekday", month);
                0
            }
        }
    }

    /// Upper-case English name for a month index (0-11)
    pub fn month_name(&self, month: u32) -> &'static str {
        MONTH_NAMES
            .get(month as usize)
            .copied()
            .unwrap_or("INVALID MONTH")
    }

    /// All twelve month names in order
    pub fn month_names(&self) -> &'static [&'static str; 12] {
        &MONTH_NAMES
    }

    /// Navigate to the previous month. January of `i32::MIN` has no
    /// predecessor and is returned unchanged.
    pub fn previous_month(&self, month: u32, year: i32) -> (u32, i32) {
        if month > 0 {
            return (month - 1, year);
        }
        match year.checked_sub(1) {
            Some(previous_year) => (11, previous_year),
            None => (0, year),
        }
    }

    /// Navigate to the next month. December of `i32::MAX` has no successor
    /// and is returned unchanged.
    pub fn next_month(&self, month: u32, year: i32) -> (u32, i32) {
        if month < 11 {
            return (month + 1, year);
        }
        match year.checked_add(1) {
            Some(next_year) => (0, next_year),
            None => (11, year),
        }
    }
}

/// Fold an arbitrary month index into 0-11, carrying whole years.
///
/// The carry is done in `i64`. A result beyond the `i32` year range pins to
/// the first or last month the calendar can represent.
fn normalize_month(month: i32, year: i32) -> (u32, i32) {
    let carried = i64::from(year) + i64::from(month.div_euclid(12));
    match i32::try_from(carried) {
        Ok(year) => (month.rem_euclid(12) as u32, year),
        Err(_) if carried < 0 => {
            log::warn!("Month {} of year {} is before the first representable year", month, year);
            (0, i32::MIN)
        }
        Err(_) => {
            log::warn!("Month {} of year {} is past the last representable year", month, year);
            (11, i32::MAX)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_subscriptions() -> Vec<Subscription> {
        vec![
            Subscription::new("ChatGPT", "openai", 27.52, 2),
            Subscription::new("Netflix", "netflix", 15.99, 15),
            Subscription::new("Spotify", "spotify", 9.99, 1),
            Subscription::new("Adobe", "adobe", 7.99, 2),
            Subscription::new("Gym", "gym", 30.00, 31),
        ]
    }

    #[test]
    fn test_days_in_month() {
        let service = CalendarService::new();

        assert_eq!(service.days_in_month(0, 2025), 31); // January
        assert_eq!(service.days_in_month(3, 2025), 30); // April
        assert_eq!(service.days_in_month(1, 2025), 28); // February (non-leap)
        assert_eq!(service.days_in_month(1, 2024), 29); // February (leap year)
        assert_eq!(service.days_in_month(11, 2024), 31); // December
    }

    #[test]
    fn test_is_leap_year() {
        let service = CalendarService::new();

        assert!(!service.is_leap_year(2025));
        assert!(service.is_leap_year(2024));
        assert!(!service.is_leap_year(1900));
        assert!(service.is_leap_year(2000));
    }

    #[test]
    fn test_first_weekday_offset() {
        let service = CalendarService::new();

        assert_eq!(service.first_weekday_offset(0, 2024), 1); // Mon Jan 1 2024
        assert_eq!(service.first_weekday_offset(8, 2024), 0); // Sun Sep 1 2024
        assert_eq!(service.first_weekday_offset(1, 2025), 6); // Sat Feb 1 2025
    }

    #[test]
    fn test_grid_length_matches_offset_plus_days() {
        let service = CalendarService::new();

        for year in [1900, 1999, 2000, 2023, 2024, 2025, 2100] {
            for month in 0..12 {
                let grid = service.build(month as i32, year, &[]);
                let expected = service.first_weekday_offset(month, year) + service.days_in_month(month, year);
                assert_eq!(grid.cells.len() as u32, expected, "{}/{}", month, year);
            }
        }
    }

    #[test]
    fn test_day_numbers_are_sequential() {
        let service = CalendarService::new();

        for month in 0..12 {
            let grid = service.build(month, 2026, &[]);
            let days: Vec<u32> = grid.day_cells().filter_map(|cell| cell.day_number).collect();
            let expected: Vec<u32> = (1..=grid.days_in_month).collect();
            assert_eq!(days, expected);

            // Blank cells only appear before the first day
            let leading = grid.cells.iter().take_while(|cell| cell.is_blank()).count();
            assert_eq!(leading as u32, grid.first_weekday_offset);
        }
    }

    #[test]
    fn test_february_leap_and_common_year() {
        let service = CalendarService::new();

        assert_eq!(service.build(1, 2024, &[]).day_cells().count(), 29);
        assert_eq!(service.build(1, 2023, &[]).day_cells().count(), 28);
    }

    #[test]
    fn test_due_day_beyond_month_never_matches() {
        let service = CalendarService::new();
        let subs = default_subscriptions();

        let april = service.build(3, 2024, &subs);
        assert!(april
            .day_cells()
            .all(|cell| cell.subscriptions_due.iter().all(|sub| sub.name != "Gym")));

        let may = service.build(4, 2024, &subs);
        let day_31 = may.cell_for_day(31).unwrap();
        assert_eq!(day_31.subscriptions_due.len(), 1);
        assert_eq!(day_31.subscriptions_due[0].name, "Gym");
    }

    #[test]
    fn test_subscriptions_grouped_in_input_order() {
        let service = CalendarService::new();
        let grid = service.build(6, 2025, &default_subscriptions());

        let names: Vec<&str> = grid
            .cell_for_day(2)
            .unwrap()
            .subscriptions_due
            .iter()
            .map(|sub| sub.name.as_str())
            .collect();
        assert_eq!(names, vec!["ChatGPT", "Adobe"]);

        assert!(grid.cell_for_day(3).unwrap().subscriptions_due.is_empty());
        assert_eq!(grid.cell_for_day(15).unwrap().subscriptions_due[0].name, "Netflix");
    }

    #[test]
    fn test_build_is_idempotent() {
        let service = CalendarService::new();
        let subs = default_subscriptions();

        assert_eq!(service.build(9, 2026, &subs), service.build(9, 2026, &subs));
    }

    #[test]
    fn test_out_of_range_months_roll_over() {
        let service = CalendarService::new();

        let rolled = service.build(12, 2024, &[]);
        assert_eq!((rolled.month, rolled.year), (0, 2025));

        let back = service.build(-1, 2024, &[]);
        assert_eq!((back.month, back.year), (11, 2023));
    }

    #[test]
    fn test_extreme_month_offsets_still_build_valid_grids() {
        let service = CalendarService::new();

        for (month, year) in [
            (i32::MAX, 0),
            (i32::MIN, 0),
            (i32::MAX, 2024),
            (i32::MIN, -2024),
            (12, i32::MAX),
            (-1, i32::MIN),
            (0, i32::MAX),
            (11, i32::MIN),
        ] {
            let grid = service.build(month, year, &[]);
            assert!(grid.month < 12, "{}/{}", month, year);
            assert_eq!(grid.cells.len() as u32, grid.first_weekday_offset + grid.days_in_month);
            let days: Vec<u32> = grid.day_cells().filter_map(|cell| cell.day_number).collect();
            assert_eq!(days, (1..=grid.days_in_month).collect::<Vec<u32>>(), "{}/{}", month, year);
        }
    }

    #[test]
    fn test_rollover_past_year_range_pins_to_the_boundary() {
        let service = CalendarService::new();

        let past_end = service.build(12, i32::MAX, &[]);
        assert_eq!((past_end.month, past_end.year), (11, i32::MAX));

        let before_start = service.build(-1, i32::MIN, &[]);
        assert_eq!((before_start.month, before_start.year), (0, i32::MIN));

        // i32::MAX months is 178956970 years and 7 months
        let far = service.build(i32::MAX, 0, &[]);
        assert_eq!((far.month, far.year), (7, 178_956_970));
    }

    #[test]
    fn test_weekday_repeats_every_400_years() {
        let service = CalendarService::new();

        assert_eq!(service.first_weekday_offset(0, 2024 + 400 * 1000), service.first_weekday_offset(0, 2024));
        assert_eq!(service.first_weekday_offset(0, 2024 - 400 * 1000), 1);
        for month in 0..12 {
            assert_eq!(
                service.first_weekday_offset(month, 1_999_999_625),
                service.first_weekday_offset(month, 2025),
            );
        }
        // Weekdays stay in range at the ends of the year type
        assert!(service.first_weekday_offset(11, i32::MAX) < 7);
        assert!(service.first_weekday_offset(0, i32::MIN) < 7);
    }

    #[test]
    fn test_month_navigation_stops_at_year_range() {
        let service = CalendarService::new();

        assert_eq!(service.previous_month(0, i32::MIN), (0, i32::MIN));
        assert_eq!(service.next_month(11, i32::MAX), (11, i32::MAX));
        assert_eq!(service.previous_month(1, i32::MIN), (0, i32::MIN));
        assert_eq!(service.next_month(10, i32::MAX), (11, i32::MAX));
    }

    #[test]
    fn test_month_navigation_wraps_years() {
        let service = CalendarService::new();

        assert_eq!(service.previous_month(0, 2025), (11, 2024));
        assert_eq!(service.previous_month(5, 2025), (4, 2025));
        assert_eq!(service.next_month(11, 2025), (0, 2026));
        assert_eq!(service.next_month(5, 2025), (6, 2025));
    }

    #[test]
    fn test_month_name() {
        let service = CalendarService::new();

        assert_eq!(service.month_name(0), "JANUARY");
        assert_eq!(service.month_name(1), "FEBRUARY");
        assert_eq!(service.month_name(11), "DECEMBER");
        assert_eq!(service.month_name(12), "INVALID MONTH");
    }
}
