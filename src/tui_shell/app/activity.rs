use std::collections::VecDeque;

use time::OffsetDateTime;

use super::fmt_clock;

const CAPACITY: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum EntryKind {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct ActivityEntry {
    pub(in crate::tui_shell) ts: OffsetDateTime,
    pub(in crate::tui_shell) kind: EntryKind,
    pub(in crate::tui_shell) text: String,
}

/// The most recent things the console did, newest last.
#[derive(Debug, Default)]
pub(in crate::tui_shell) struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
}

impl ActivityLog {
    pub(in crate::tui_shell) fn push(&mut self, kind: EntryKind, text: String) {
        match kind {
            EntryKind::Info => log::info!("{}", text),
            EntryKind::Error => log::warn!("{}", text),
        }
        if self.entries.len() == CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(ActivityEntry {
            ts: OffsetDateTime::now_utc(),
            kind,
            text,
        });
    }

    pub(in crate::tui_shell) fn last(&self) -> Option<&ActivityEntry> {
        self.entries.back()
    }

    pub(in crate::tui_shell) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(in crate::tui_shell) fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| {
                let tag = match e.kind {
                    EntryKind::Info => "",
                    EntryKind::Error => "error: ",
                };
                format!("{} {}{}", fmt_clock(e.ts), tag, e.text)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/tui_shell/activity_tests.rs"]
mod tests;
