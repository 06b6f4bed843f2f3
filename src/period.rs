//! Bimonthly period labels and the weekly-table windows they select.
//!
//! The weekly table holds 16 rows per two-month span, so the period with
//! ordinal `x` (1..=12) covers rows `[16 * (x - 1), 16 * x)`.

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Rows of the weekly table per bimonthly period
pub const ROWS_PER_PERIOD: usize = 16;

/// Number of bimonthly periods covered by the dataset
pub const PERIOD_COUNT: usize = 12;

/// Rows the weekly table needs for every window to be in bounds
pub const REQUIRED_WEEKLY_ROWS: usize = ROWS_PER_PERIOD * PERIOD_COUNT;

/// A two-month span of 2011 or 2012
///
/// Serialized as its label, e.g. `"Jan - Feb 2011"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PeriodLabel {
    JanFeb2011,
    MarApr2011,
    MayJun2011,
    JulAug2011,
    SepOct2011,
    NovDec2011,
    JanFeb2012,
    MarApr2012,
    MayJun2012,
    JulAug2012,
    SepOct2012,
    NovDec2012,
}

struct PeriodEntry {
    label: &'static str,
    /// Label used by the dashboard's period selector
    alias: &'static str,
    period: PeriodLabel,
    start: NaiveDate,
    end: NaiveDate,
}

// Evaluated at compile time; a bad literal fails the build
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date in period table"),
    }
}

const fn entry(
    label: &'static str,
    alias: &'static str,
    period: PeriodLabel,
    start: NaiveDate,
    end: NaiveDate,
) -> PeriodEntry {
    PeriodEntry {
        label,
        alias,
        period,
        start,
        end,
    }
}

/// Periods in ordinal order
static PERIOD_TABLE: [PeriodEntry; PERIOD_COUNT] = [
    entry("Jan - Feb 2011", "Januari - Februari 2011", PeriodLabel::JanFeb2011, ymd(2011, 1, 1), ymd(2011, 2, 28)),
    entry("Mar - Apr 2011", "Maret - April 2011", PeriodLabel::MarApr2011, ymd(2011, 3, 1), ymd(2011, 4, 30)),
    entry("May - Jun 2011", "Mei - Juni 2011", PeriodLabel::MayJun2011, ymd(2011, 5, 1), ymd(2011, 6, 30)),
    entry("Jul - Aug 2011", "Juli - Agustus 2011", PeriodLabel::JulAug2011, ymd(2011, 7, 1), ymd(2011, 8, 31)),
    entry("Sep - Oct 2011", "September - Oktober 2011", PeriodLabel::SepOct2011, ymd(2011, 9, 1), ymd(2011, 10, 31)),
    entry("Nov - Dec 2011", "November - Desember 2011", PeriodLabel::NovDec2011, ymd(2011, 11, 1), ymd(2011, 12, 31)),
    entry("Jan - Feb 2012", "Januari - Februari 2012", PeriodLabel::JanFeb2012, ymd(2012, 1, 1), ymd(2012, 2, 29)),
    entry("Mar - Apr 2012", "Maret - April 2012", PeriodLabel::MarApr2012, ymd(2012, 3, 1), ymd(2012, 4, 30)),
    entry("May - Jun 2012", "Mei - Juni 2012", PeriodLabel::MayJun2012, ymd(2012, 5, 1), ymd(2012, 6, 30)),
    entry("Jul - Aug 2012", "Juli - Agustus 2012", PeriodLabel::JulAug2012, ymd(2012, 7, 1), ymd(2012, 8, 31)),
    entry("Sep - Oct 2012", "September - Oktober 2012", PeriodLabel::SepOct2012, ymd(2012, 9, 1), ymd(2012, 10, 31)),
    entry("Nov - Dec 2012", "November - Desember 2012", PeriodLabel::NovDec2012, ymd(2012, 11, 1), ymd(2012, 12, 31)),
];

impl PeriodLabel {
    /// All periods in ordinal order
    pub fn all() -> impl Iterator<Item = PeriodLabel> {
        PERIOD_TABLE.iter().map(|e| e.period)
    }

    fn entry(self) -> &'static PeriodEntry {
        &PERIOD_TABLE[self as usize]
    }

    /// Ordinal in 1..=12
    pub fn ordinal(self) -> usize {
        self as usize + 1
    }

    pub fn from_ordinal(ordinal: usize) -> Result<Self> {
        ordinal
            .checked_sub(1)
            .and_then(|i| PERIOD_TABLE.get(i))
            .map(|e| e.period)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "period ordinal {} is outside 1..={}",
                    ordinal, PERIOD_COUNT
                ))
            })
    }

    /// Canonical label, e.g. `"Jan - Feb 2011"`
    pub fn label(self) -> &'static str {
        self.entry().label
    }

    /// Label shown by the dashboard's selector, e.g. `"Januari - Februari 2011"`
    pub fn selector_label(self) -> &'static str {
        self.entry().alias
    }

    /// Parse a label
    ///
    /// Accepts the canonical label and the selector label; whitespace around
    /// the hyphen is ignored, so `"Jan-Feb 2011"` matches too.
    pub fn parse(label: &str) -> Result<Self> {
        let key = normalize(label);
        PERIOD_TABLE
            .iter()
            .find(|e| normalize(e.label) == key || normalize(e.alias) == key)
            .map(|e| e.period)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown period label: {:?}", label)))
    }

    /// Rows of the weekly table this period covers
    pub fn window(self) -> WeeklyWindow {
        let upper = ROWS_PER_PERIOD * self.ordinal();
        WeeklyWindow {
            lower: upper - ROWS_PER_PERIOD,
            upper,
        }
    }

    pub fn year(self) -> i32 {
        if self.ordinal() <= 6 {
            2011
        } else {
            2012
        }
    }

    /// First day of the span
    pub fn start_date(self) -> NaiveDate {
        self.entry().start
    }

    /// Last day of the span
    pub fn end_date(self) -> NaiveDate {
        self.entry().end
    }

    /// Whether `date` falls within the span
    pub fn contains(self, date: NaiveDate) -> bool {
        self.start_date() <= date && date <= self.end_date()
    }
}

// "Jan - Feb 2011", "Jan-Feb 2011" and " Jan -Feb 2011 " share one key
fn normalize(label: &str) -> String {
    label
        .trim()
        .split('-')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("-")
}

impl fmt::Display for PeriodLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PeriodLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PeriodLabel::parse(s)
    }
}

impl TryFrom<String> for PeriodLabel {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        PeriodLabel::parse(&s)
    }
}

impl From<PeriodLabel> for String {
    fn from(period: PeriodLabel) -> Self {
        period.label().to_string()
    }
}

/// Half-open row range `[lower, upper)` over the weekly table
///
/// Always one of the 12 period windows; see [`PeriodLabel::window`] and
/// [`WeeklyWindow::from_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeeklyWindow {
    lower: usize,
    upper: usize,
}

#[derive(Deserialize)]
struct WindowBounds {
    lower: usize,
    upper: usize,
}

impl<'de> Deserialize<'de> for WeeklyWindow {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bounds = WindowBounds::deserialize(deserializer)?;
        WeeklyWindow::from_bounds(bounds.lower, bounds.upper).map_err(de::Error::custom)
    }
}

impl WeeklyWindow {
    /// The period window with these bounds
    ///
    /// Fails with `InvalidArgument` unless `[lower, upper)` is one of the 12
    /// period windows.
    pub fn from_bounds(lower: usize, upper: usize) -> Result<Self> {
        PeriodLabel::all()
            .map(PeriodLabel::window)
            .find(|w| w.lower == lower && w.upper == upper)
            .ok_or_else(|| {
                Error::InvalidArgument(format!("rows {}..{} are not a period window", lower, upper))
            })
    }

    pub fn lower(&self) -> usize {
        self.lower
    }

    pub fn upper(&self) -> usize {
        self.upper
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.lower, self.upper)
    }

    pub fn len(&self) -> usize {
        self.upper - self.lower
    }

    pub fn is_empty(&self) -> bool {
        self.upper == self.lower
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.lower..self.upper
    }
}

/// Map a period label to its window over the weekly table
///
/// Table bounds are not checked here; see [`crate::weekly::slice_window`].
///
/// # Example
/// ```rust
/// use bikeshare::period::select_window;
///
/// assert_eq!(select_window("Jan - Feb 2011").unwrap().bounds(), (0, 16));
/// assert_eq!(select_window("Nov-Dec 2012").unwrap().bounds(), (176, 192));
/// assert!(select_window("Foo").is_err());
/// ```
pub fn select_window(label: &str) -> Result<WeeklyWindow> {
    let period = PeriodLabel::parse(label)?;
    let window = period.window();
    log::debug!(
        "period {} (ordinal {}) -> rows {}..{}",
        period,
        period.ordinal(),
        window.lower,
        window.upper
    );
    Ok(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_first_and_last_window() {
        assert_eq!(select_window("Jan - Feb 2011").unwrap().bounds(), (0, 16));
        assert_eq!(select_window("Nov - Dec 2012").unwrap().bounds(), (176, 192));
    }

    #[test]
    fn test_compact_label_form() {
        assert_eq!(
            select_window("Jan-Feb 2011").unwrap(),
            select_window("Jan - Feb 2011").unwrap()
        );
        assert_eq!(
            PeriodLabel::parse("  Jul -Aug 2012 ").unwrap(),
            PeriodLabel::JulAug2012
        );
    }

    #[test]
    fn test_selector_labels() {
        assert_eq!(
            PeriodLabel::parse("Januari - Februari 2011").unwrap(),
            PeriodLabel::JanFeb2011
        );
        assert_eq!(
            select_window("November - Desember 2012").unwrap().bounds(),
            (176, 192)
        );
        for period in PeriodLabel::all() {
            assert_eq!(PeriodLabel::parse(period.selector_label()).unwrap(), period);
        }
    }

    #[test]
    fn test_unknown_label() {
        for label in ["Foo", "", "Jan - Feb 2013", "jan - feb 2011", "Feb - Mar 2011"] {
            assert!(select_window(label).unwrap_err().is_invalid_argument());
        }
    }

    #[test]
    fn test_ordinals_follow_table() {
        for (i, period) in PeriodLabel::all().enumerate() {
            assert_eq!(period.ordinal(), i + 1);
            assert_eq!(PeriodLabel::from_ordinal(i + 1).unwrap(), period);
            assert_eq!(period.label().parse::<PeriodLabel>().unwrap(), period);
        }
        assert!(PeriodLabel::from_ordinal(0).is_err());
        assert!(PeriodLabel::from_ordinal(13).is_err());
    }

    #[test]
    fn test_windows_tile_table() {
        let mut expected_lower = 0;
        for period in PeriodLabel::all() {
            let w = period.window();
            assert_eq!(w.lower(), expected_lower);
            assert_eq!(w.len(), ROWS_PER_PERIOD);
            expected_lower = w.upper();
        }
        assert_eq!(expected_lower, REQUIRED_WEEKLY_ROWS);
    }

    #[test]
    fn test_calendar_span() {
        let p = PeriodLabel::JanFeb2012;
        assert_eq!(p.start_date(), NaiveDate::from_ymd_opt(2012, 1, 1).unwrap());
        // 2012 is a leap year
        assert_eq!(p.end_date(), NaiveDate::from_ymd_opt(2012, 2, 29).unwrap());

        let p = PeriodLabel::NovDec2011;
        assert_eq!(p.start_date(), NaiveDate::from_ymd_opt(2011, 11, 1).unwrap());
        assert_eq!(p.end_date(), NaiveDate::from_ymd_opt(2011, 12, 31).unwrap());
        assert!(p.contains(NaiveDate::from_ymd_opt(2011, 12, 25).unwrap()));
        assert!(!p.contains(NaiveDate::from_ymd_opt(2012, 1, 1).unwrap()));
    }

    #[test]
    fn test_spans_are_contiguous() {
        let periods: Vec<_> = PeriodLabel::all().collect();
        for pair in periods.windows(2) {
            assert_eq!(pair[0].end_date().succ_opt().unwrap(), pair[1].start_date());
        }
        for period in periods {
            assert_eq!(period.start_date().year(), period.year());
            assert_eq!(period.start_date().day(), 1);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(PeriodLabel::SepOct2011.to_string(), "Sep - Oct 2011");
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&PeriodLabel::MarApr2012).unwrap();
        assert_eq!(json, r#""Mar - Apr 2012""#);
        assert_eq!(
            serde_json::from_str::<PeriodLabel>(&json).unwrap(),
            PeriodLabel::MarApr2012
        );
        assert_eq!(
            serde_json::from_str::<PeriodLabel>(r#""Mar-Apr 2012""#).unwrap(),
            PeriodLabel::MarApr2012
        );
        assert!(serde_json::from_str::<PeriodLabel>(r#""MarApr2012""#).is_err());
    }

    #[test]
    fn test_window_serde_rejects_invalid_bounds() {
        assert!(serde_json::from_str::<WeeklyWindow>(r#"{"lower":16,"upper":0}"#).is_err());
        assert!(serde_json::from_str::<WeeklyWindow>(r#"{"lower":0,"upper":17}"#).is_err());
        assert!(serde_json::from_str::<WeeklyWindow>(r#"{"lower":192,"upper":208}"#).is_err());

        let window = PeriodLabel::MayJun2011.window();
        let json = serde_json::to_string(&window).unwrap();
        assert_eq!(json, r#"{"lower":32,"upper":48}"#);
        let back: WeeklyWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, window);
        assert_eq!(back.len(), 16);
    }

    #[test]
    fn test_window_from_bounds() {
        assert_eq!(
            WeeklyWindow::from_bounds(176, 192).unwrap(),
            PeriodLabel::NovDec2012.window()
        );
        assert!(WeeklyWindow::from_bounds(16, 0).unwrap_err().is_invalid_argument());
        assert!(WeeklyWindow::from_bounds(8, 24).is_err());
    }
}
