use regex::Regex;
use std::sync::LazyLock;

/// Broadcast date extracted from a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirDate {
    /// Four-digit year (two-digit input is widened, see [`four_digit_year`]).
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

// Two field orderings, distinguished by which capture set is populated:
// month-day-year with a 2- or 4-digit year, and year-month-day with a
// 4-digit year. The triple must be bounded by non-digits on both sides so
// a longer digit run is never carved up into a bogus date.
static RE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \D
        (?:
            (?P<month1>\d\d)[-/_.](?P<day1>\d\d)[-/_.](?P<year1>\d\d(?:\d\d)?)
          | (?P<year2>\d{4})[-/_.](?P<month2>\d\d)[-/_.](?P<day2>\d\d)
        )
        \D",
    )
    .unwrap()
});

/// Match a broadcast-date triple anywhere in the bare filename.
pub fn try_extract(file_name: &str) -> Option<AirDate> {
    let caps = RE_DATE.captures(file_name)?;

    if let Some(month) = caps.name("month1") {
        Some(AirDate {
            year: four_digit_year(caps["year1"].parse().ok()?),
            month: month.as_str().parse().ok()?,
            day: caps["day1"].parse().ok()?,
        })
    } else {
        Some(AirDate {
            year: four_digit_year(caps["year2"].parse().ok()?),
            month: caps["month2"].parse().ok()?,
            day: caps["day2"].parse().ok()?,
        })
    }
}

/// Widen a two-digit year. Values above 99 are already four digits and pass
/// through; 41–99 land in the 1900s, 0–40 in the 2000s. The cutoff at 40 is
/// a compatibility constant and must not change.
pub fn four_digit_year(raw: i32) -> i32 {
    if raw > 99 {
        raw
    } else if raw > 40 {
        raw + 1900
    } else {
        raw + 2000
    }
}
