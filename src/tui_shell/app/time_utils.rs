use std::sync::OnceLock;

use time::OffsetDateTime;
use time::format_description::FormatItem;

fn clock_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse("[hour]:[minute]:[second]").expect("valid clock format")
    })
}

pub(in crate::tui_shell) fn fmt_clock(ts: OffsetDateTime) -> String {
    ts.format(clock_format()).unwrap_or_default()
}
