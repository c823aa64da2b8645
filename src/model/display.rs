use std::sync::OnceLock;

use time::Date;
use time::format_description::FormatItem;

fn iso_date_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse("[year]-[month]-[day]").expect("valid date format")
    })
}

pub(crate) fn parse_iso_date(raw: &str) -> Option<Date> {
    let day = raw.get(..10).unwrap_or(raw);
    Date::parse(day, iso_date_format()).ok()
}

/// Renders an ISO date the way the dealership staff read it (`M/D/YYYY`).
///
/// Unparseable input is returned unchanged so nothing disappears from the
/// table or from search.
pub fn fmt_date(raw: &str) -> String {
    match parse_iso_date(raw) {
        Some(d) => format!("{}/{}/{}", u8::from(d.month()), d.day(), d.year()),
        None => raw.to_string(),
    }
}

pub fn fmt_amount(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(v) => format!("${:.2}", v),
        Err(_) => raw.to_string(),
    }
}

pub fn fmt_opt<T: ToString>(v: &Option<T>) -> String {
    v.as_ref().map(|x| x.to_string()).unwrap_or_default()
}
