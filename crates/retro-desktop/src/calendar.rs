//! Month view behind the taskbar clock

use serde::Serialize;

/// Cells in the month grid: six weeks of seven days
pub const GRID_CELLS: usize = 42;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// A calendar date, month counted from 1
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Create a date, or None if the month or day does not exist
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        let view = CalendarMonth::new(year, month)?;
        (1..=view.days()).contains(&day).then_some(Self { year, month, day })
    }

    /// The month this date falls in
    pub fn month_view(self) -> CalendarMonth {
        CalendarMonth {
            year: self.year,
            month: self.month,
        }
    }
}

/// A month shown by the calendar popup, month counted from 1
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
}

/// One cell of the month grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub day: u32,
    /// False for the trailing days of the previous month and the leading
    /// days of the next one
    pub in_month: bool,
    pub is_today: bool,
}

impl CalendarMonth {
    /// Create a month view, or None if `month` is not 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// English month name
    pub fn name(self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Move by `delta` months, crossing years as needed
    pub fn shifted(self, delta: i32) -> Self {
        let index = self.year * 12 + (self.month as i32 - 1) + delta;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Number of days in the month
    pub fn days(self) -> u32 {
        match self.month {
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Weekday of the 1st, 0 = Sunday
    pub fn first_weekday(self) -> u32 {
        weekday(self.year, self.month, 1)
    }

    /// Six-week grid starting on the Sunday on or before the 1st
    pub fn grid(self, today: CalendarDate) -> Vec<CalendarDay> {
        let lead = self.first_weekday();
        let previous = self.shifted(-1).days();
        let showing_today = today.month_view() == self;

        let mut cells = Vec::with_capacity(GRID_CELLS);
        cells.extend((previous - lead + 1..=previous).map(|day| CalendarDay {
            day,
            in_month: false,
            is_today: false,
        }));
        cells.extend((1..=self.days()).map(|day| CalendarDay {
            day,
            in_month: true,
            is_today: showing_today && day == today.day,
        }));
        let trailing = GRID_CELLS - cells.len();
        cells.extend((1..=trailing as u32).map(|day| CalendarDay {
            day,
            in_month: false,
            is_today: false,
        }));
        cells
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Day of week for a Gregorian date, 0 = Sunday (Sakamoto's method)
fn weekday(year: i32, month: u32, day: u32) -> u32 {
    const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = if month < 3 { year - 1 } else { year };
    let w = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + OFFSETS[(month - 1) as usize] + day as i32;
    w.rem_euclid(7) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32) -> CalendarMonth {
        CalendarMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(month(2024, 2).days(), 29);
        assert_eq!(month(2023, 2).days(), 28);
        assert_eq!(month(1900, 2).days(), 28);
        assert_eq!(month(2000, 2).days(), 29);
        assert_eq!(month(2024, 4).days(), 30);
        assert_eq!(month(2024, 12).days(), 31);
    }

    #[test]
    fn test_first_weekday() {
        // 1 January 2024 was a Monday, 1 September 2024 a Sunday
        assert_eq!(month(2024, 1).first_weekday(), 1);
        assert_eq!(month(2024, 9).first_weekday(), 0);
        assert_eq!(month(2026, 10).first_weekday(), 4);
    }

    #[test]
    fn test_shifted_crosses_years() {
        assert_eq!(month(2024, 12).shifted(1), month(2025, 1));
        assert_eq!(month(2024, 1).shifted(-1), month(2023, 12));
        assert_eq!(month(2024, 5).shifted(-17), month(2022, 12));
        assert_eq!(month(2024, 5).shifted(0), month(2024, 5));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(CalendarMonth::new(2024, 0).is_none());
        assert!(CalendarMonth::new(2024, 13).is_none());
        assert!(CalendarDate::new(2023, 2, 29).is_none());
        assert!(CalendarDate::new(2024, 2, 29).is_some());
    }

    #[test]
    fn test_grid_layout() {
        let today = CalendarDate::new(2024, 2, 14).unwrap();
        let grid = month(2024, 2).grid(today);

        assert_eq!(grid.len(), GRID_CELLS);
        // February 2024 starts on a Thursday: 28..31 January lead in
        assert_eq!(grid[0], CalendarDay { day: 28, in_month: false, is_today: false });
        assert_eq!(grid[4], CalendarDay { day: 1, in_month: true, is_today: false });
        assert!(grid[17].is_today && grid[17].day == 14);
        assert_eq!(grid.iter().filter(|d| d.in_month).count(), 29);
        assert_eq!(grid[33], CalendarDay { day: 1, in_month: false, is_today: false });
        assert_eq!(grid[41].day, 9);
    }

    #[test]
    fn test_grid_marks_today_only_in_its_month() {
        let today = CalendarDate::new(2024, 2, 14).unwrap();
        assert!(month(2024, 3).grid(today).iter().all(|d| !d.is_today));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month(2024, 1).name(), "January");
        assert_eq!(month(2024, 12).name(), "December");
    }
}
