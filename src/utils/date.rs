use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Today as `YYYY-MM-DD`, the default date of a manual visit.
pub fn today_str() -> String {
    today().format("%Y-%m-%d").to_string()
}
