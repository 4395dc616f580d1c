use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::model::task::Priority;

/// Scan a sentence for a natural-language date expression and resolve it
/// against `today`. The scan is case-insensitive, runs left to right over
/// whitespace tokens, and the first recognized expression wins.
///
/// Ambiguous calendar cycles resolve to the future: "monday" is the next
/// upcoming Monday, "june 5" rolls to next year once it has passed.
/// Returns `None` when the sentence names no date; a malformed expression
/// is treated the same, never as an error.
pub fn scan_date(sentence: &str, today: NaiveDate) -> Option<NaiveDate> {
    let lowered = sentence.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split_whitespace()
        .map(trim_token)
        .filter(|t| !t.is_empty())
        .collect();

    for (i, token) in tokens.iter().enumerate() {
        // 1. Anchors
        match *token {
            "today" | "tonight" => return Some(today),
            "tomorrow" => return Some(today + Duration::days(1)),
            "yesterday" => return Some(today - Duration::days(1)),
            _ => {}
        }

        // 2. Weekday names ("friday", "next friday", "this friday" all
        // resolve to the next upcoming Friday)
        if let Some(weekday) = parse_weekday_name(token) {
            return Some(next_weekday(today, weekday));
        }

        // 3. "next week" / "next month"
        if *token == "next" {
            match tokens.get(i + 1).copied() {
                Some("week") => return Some(today + Duration::days(7)),
                Some("month") => return Some(add_months(today, 1)),
                _ => {}
            }
        }

        // 4. "end of week" / "end of month"
        if *token == "end" && tokens.get(i + 1).copied() == Some("of") {
            match tokens.get(i + 2).copied() {
                Some("week") => return Some(end_of_week(today)),
                Some("month") => return Some(end_of_month(today)),
                _ => {}
            }
        }

        // 5. Relative offsets: "in 3 days", "in two weeks", "in a month"
        if *token == "in" {
            if let (Some(count), Some(unit)) = (
                tokens.get(i + 1).and_then(|t| parse_count_token(t)),
                tokens.get(i + 2).copied(),
            ) {
                match unit {
                    "day" | "days" => return Some(today + Duration::days(count)),
                    "week" | "weeks" => return Some(today + Duration::weeks(count)),
                    "month" | "months" => return Some(add_months(today, count)),
                    _ => {}
                }
            }
        }

        // 6. Month-name dates: "june 5", "june 5th 2027", "5th of june"
        if let Some(month) = parse_month_name(token) {
            if let Some(day) = tokens.get(i + 1).and_then(|t| parse_day_token(t)) {
                let year = tokens.get(i + 2).and_then(|t| parse_year_token(t));
                if let Some(date) = month_day_date(today, month, day, year) {
                    return Some(date);
                }
            }
            let day_index = if i >= 2 && tokens[i - 1] == "of" {
                Some(i - 2)
            } else if i >= 1 {
                Some(i - 1)
            } else {
                None
            };
            if let Some(day) = day_index
                .and_then(|d| tokens.get(d))
                .and_then(|t| parse_day_token(t))
            {
                if let Some(date) = month_day_date(today, month, day, None) {
                    return Some(date);
                }
            }
        }

        // 7. Numeric formats: 2025-01-15, 1/15/2025, 1/15
        if let Some(date) = numeric_date(token, today) {
            return Some(date);
        }
    }

    None
}

/// Heuristic deadline for a sentence with no date expression: the more
/// urgent the task reads, the sooner the assumed deadline.
pub fn fallback_deadline(priority: Priority, today: NaiveDate) -> NaiveDate {
    let lead_days = match priority {
        Priority::High => 1,
        Priority::Medium => 3,
        Priority::Low => 7,
    };
    today + Duration::days(lead_days)
}

fn trim_token(token: &str) -> &str {
    token.trim_matches(|c: char| {
        matches!(c, ',' | '.' | ';' | ':' | '!' | '?' | '(' | ')' | '"' | '\'')
    })
}

fn parse_weekday_name(token: &str) -> Option<Weekday> {
    match token {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

fn parse_month_name(token: &str) -> Option<u32> {
    match token {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

fn parse_day_token(token: &str) -> Option<u32> {
    let digits = token
        .strip_suffix("st")
        .or_else(|| token.strip_suffix("nd"))
        .or_else(|| token.strip_suffix("rd"))
        .or_else(|| token.strip_suffix("th"))
        .unwrap_or(token);
    let day: u32 = digits.parse().ok()?;
    (1..=31).contains(&day).then_some(day)
}

fn parse_year_token(token: &str) -> Option<i32> {
    if token.len() == 4 && token.chars().all(|c| c.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}

fn parse_count_token(token: &str) -> Option<i64> {
    match token {
        "a" | "an" | "one" => Some(1),
        "two" => Some(2),
        "three" => Some(3),
        "four" => Some(4),
        "five" => Some(5),
        "six" => Some(6),
        "seven" => Some(7),
        "eight" => Some(8),
        "nine" => Some(9),
        "ten" => Some(10),
        _ => token.parse().ok().filter(|n| *n > 0),
    }
}

/// Next occurrence of `weekday` strictly after `today`; a mention of the
/// current weekday means next week, not today.
fn next_weekday(today: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut days_needed = weekday.num_days_from_sunday() as i64
        - today.weekday().num_days_from_sunday() as i64;
    if days_needed <= 0 {
        days_needed += 7;
    }
    today + Duration::days(days_needed)
}

// End of week (Sunday)
fn end_of_week(today: NaiveDate) -> NaiveDate {
    let days_to_sunday = Weekday::Sun.num_days_from_sunday() as i64
        - today.weekday().num_days_from_sunday() as i64;
    if days_to_sunday >= 0 {
        today + Duration::days(days_to_sunday)
    } else {
        today + Duration::days(days_to_sunday + 7)
    }
}

fn end_of_month(today: NaiveDate) -> NaiveDate {
    let next_month = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1).unwrap()
    };
    next_month - Duration::days(1)
}

fn add_months(today: NaiveDate, count: i64) -> NaiveDate {
    let total = today.month() as i64 + count;
    let year = (today.year() as i64 + (total - 1).div_euclid(12)) as i32;
    let month = ((total - 1).rem_euclid(12) + 1) as u32;
    NaiveDate::from_ymd_opt(year, month, today.day()).unwrap_or_else(|| {
        // Day overflow clamps to the last day of the target month
        // (e.g. Jan 31 + 1m -> Feb 28/29).
        if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap() - Duration::days(1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap() - Duration::days(1)
        }
    })
}

/// Month + day resolved to a concrete date. Without a year this is the
/// nearest occurrence that is not in the past.
fn month_day_date(today: NaiveDate, month: u32, day: u32, year: Option<i32>) -> Option<NaiveDate> {
    match year {
        Some(y) => NaiveDate::from_ymd_opt(y, month, day),
        None => match NaiveDate::from_ymd_opt(today.year(), month, day) {
            Some(d) if d >= today => Some(d),
            _ => NaiveDate::from_ymd_opt(today.year() + 1, month, day),
        },
    }
}

fn numeric_date(token: &str, today: NaiveDate) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(token, "%m/%d/%Y") {
        return Some(d);
    }
    // M/D without a year resolves like a month-name date.
    let (m, d) = token.split_once('/')?;
    let month: u32 = m.parse().ok()?;
    let day: u32 = d.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    month_day_date(today, month, day, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-06-05 is a Wednesday; every assertion below is anchored to it.
    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_anchor_words() {
        assert_eq!(scan_date("Finish the report today", anchor()), Some(ymd(2024, 6, 5)));
        assert_eq!(scan_date("Pack bags tonight", anchor()), Some(ymd(2024, 6, 5)));
        assert_eq!(scan_date("Call the bank tomorrow", anchor()), Some(ymd(2024, 6, 6)));
    }

    #[test]
    fn test_weekdays_prefer_future() {
        // Next Monday after Wednesday the 5th is the 10th.
        assert_eq!(
            scan_date("Submit assignment by Monday", anchor()),
            Some(ymd(2024, 6, 10))
        );
        assert_eq!(scan_date("Gym on friday", anchor()), Some(ymd(2024, 6, 7)));
        // Naming the current weekday means next week.
        assert_eq!(scan_date("Review on wednesday", anchor()), Some(ymd(2024, 6, 12)));
        assert_eq!(scan_date("Plan for next monday", anchor()), Some(ymd(2024, 6, 10)));
    }

    #[test]
    fn test_no_date_expression() {
        assert_eq!(scan_date("Call mom later", anchor()), None);
        assert_eq!(scan_date("Do it soon", anchor()), None);
        assert_eq!(scan_date("This is urgent", anchor()), None);
        assert_eq!(scan_date("", anchor()), None);
    }

    #[test]
    fn test_next_week_and_month() {
        assert_eq!(scan_date("Plan the trip next week", anchor()), Some(ymd(2024, 6, 12)));
        assert_eq!(scan_date("Renew the lease next month", anchor()), Some(ymd(2024, 7, 5)));
        // "next" with no calendar word after it is not a date.
        assert_eq!(scan_date("Plan the next sprint", anchor()), None);
    }

    #[test]
    fn test_month_addition_clamps() {
        let jan31 = ymd(2024, 1, 31);
        assert_eq!(scan_date("Pay rent next month", jan31), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn test_end_of_week_and_month() {
        assert_eq!(scan_date("Wrap up by end of week", anchor()), Some(ymd(2024, 6, 9)));
        assert_eq!(scan_date("Invoice by end of month", anchor()), Some(ymd(2024, 6, 30)));
    }

    #[test]
    fn test_relative_offsets() {
        assert_eq!(scan_date("Follow up in 3 days", anchor()), Some(ymd(2024, 6, 8)));
        assert_eq!(scan_date("Check back in two weeks", anchor()), Some(ymd(2024, 6, 19)));
        assert_eq!(scan_date("Review in a month", anchor()), Some(ymd(2024, 7, 5)));
    }

    #[test]
    fn test_month_name_dates() {
        assert_eq!(scan_date("Dentist on June 20", anchor()), Some(ymd(2024, 6, 20)));
        assert_eq!(scan_date("Dentist on June 20th", anchor()), Some(ymd(2024, 6, 20)));
        assert_eq!(scan_date("Party on the 5th of July", anchor()), Some(ymd(2024, 7, 5)));
        assert_eq!(scan_date("Conference June 5 2027", anchor()), Some(ymd(2027, 6, 5)));
    }

    #[test]
    fn test_passed_dates_roll_forward() {
        // March 1 has passed by June; next occurrence is next year.
        assert_eq!(scan_date("Renewal due March 1", anchor()), Some(ymd(2025, 3, 1)));
        // Today itself does not roll.
        assert_eq!(scan_date("Deadline June 5", anchor()), Some(ymd(2024, 6, 5)));
    }

    #[test]
    fn test_numeric_dates() {
        assert_eq!(scan_date("Ship on 2024-12-31", anchor()), Some(ymd(2024, 12, 31)));
        assert_eq!(scan_date("Ship on 12/31/2024", anchor()), Some(ymd(2024, 12, 31)));
        assert_eq!(scan_date("Ship on 12/31", anchor()), Some(ymd(2024, 12, 31)));
        // Passed M/D rolls to next year.
        assert_eq!(scan_date("Taxes by 1/15", anchor()), Some(ymd(2025, 1, 15)));
        assert_eq!(scan_date("Ratio was 24/7", anchor()), None);
    }

    #[test]
    fn test_first_expression_wins() {
        assert_eq!(
            scan_date("Call mom tomorrow about the party on June 20", anchor()),
            Some(ymd(2024, 6, 6))
        );
    }

    #[test]
    fn test_punctuation_does_not_block() {
        assert_eq!(scan_date("Submit it by Monday.", anchor()), Some(ymd(2024, 6, 10)));
        assert_eq!(scan_date("Due 2024-12-31!", anchor()), Some(ymd(2024, 12, 31)));
    }

    #[test]
    fn test_fallback_deadline_offsets() {
        assert_eq!(fallback_deadline(Priority::High, anchor()), ymd(2024, 6, 6));
        assert_eq!(fallback_deadline(Priority::Medium, anchor()), ymd(2024, 6, 8));
        assert_eq!(fallback_deadline(Priority::Low, anchor()), ymd(2024, 6, 12));
    }
}
