use std::collections::HashSet;

use super::*;
use crate::resource::ResourceApi;

/// Marks placed in selection mode. Only marks on visible records count.
#[derive(Clone, Debug, Default)]
pub(super) struct Selection {
    active: bool,
    marked: HashSet<i64>,
}

impl Selection {
    pub(super) fn clear(&mut self) {
        self.marked.clear();
    }
}

/// A single delete waiting on the operator's yes/no.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a delete only happens once the request is confirmed"]
pub struct DeleteRequest {
    pub(super) id: i64,
    pub(super) prompt: String,
}

impl DeleteRequest {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn confirm(self) -> ConfirmedDelete {
        ConfirmedDelete { id: self.id }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmedDelete {
    id: i64,
}

impl ConfirmedDelete {
    pub fn id(&self) -> i64 {
        self.id
    }
}

/// A bulk delete of the current selection waiting on the operator's yes/no.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a delete only happens once the request is confirmed"]
pub struct BulkDeleteRequest {
    ids: Vec<i64>,
    prompt: String,
}

impl BulkDeleteRequest {
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn confirm(self) -> ConfirmedBulkDelete {
        ConfirmedBulkDelete { ids: self.ids }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmedBulkDelete {
    ids: Vec<i64>,
}

impl ConfirmedBulkDelete {
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }
}

/// Outcome of a sequential bulk delete.
///
/// `succeeded` and `failed` are disjoint; `skipped` lists ids never attempted
/// because an earlier failure stopped the run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BulkDeleteReport {
    pub succeeded: Vec<i64>,
    pub failed: Vec<i64>,
    pub skipped: Vec<i64>,
    pub errors: Vec<(i64, ApiError)>,
}

impl BulkDeleteReport {
    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }

    pub fn aborted(&self) -> bool {
        !self.skipped.is_empty()
    }

    pub fn summary(&self) -> String {
        let mut out = format!(
            "deleted {}, failed {}",
            self.succeeded.len(),
            self.failed.len()
        );
        if !self.skipped.is_empty() {
            out.push_str(&format!(", skipped {}", self.skipped.len()));
        }
        out
    }
}

/// Deletes `ids` one at a time, in order.
///
/// A not-found answer is recorded and the run goes on; any other failure
/// stops it and the rest are reported as skipped. Nothing is rolled back.
pub fn run_bulk_delete<R: Resource>(api: &dyn ResourceApi<R>, ids: &[i64]) -> BulkDeleteReport {
    let mut report = BulkDeleteReport::default();
    for (i, id) in ids.iter().copied().enumerate() {
        match api.delete(id) {
            Ok(()) => report.succeeded.push(id),
            Err(err) => {
                let stop = err.kind() != crate::remote::ErrorKind::NotFound;
                log::warn!("{}: bulk delete of {} failed: {}", R::KIND, id, err);
                report.failed.push(id);
                report.errors.push((id, err));
                if stop {
                    report.skipped.extend_from_slice(&ids[i + 1..]);
                    break;
                }
            }
        }
    }
    report
}

impl<R: Resource> ListController<R> {
    pub fn selection_mode(&self) -> bool {
        self.selection.active
    }

    /// Flips selection mode; leaving it always drops every mark.
    pub fn toggle_selection_mode(&mut self) -> bool {
        self.selection.active = !self.selection.active;
        if !self.selection.active {
            self.selection.clear();
        }
        self.selection.active
    }

    /// Flips the mark on a visible record. Returns whether it is now marked.
    pub fn toggle_select(&mut self, id: i64) -> bool {
        if !self.selection.active || !self.filtered.iter().any(|r| r.id() == id) {
            return false;
        }
        if self.selection.marked.remove(&id) {
            false
        } else {
            self.selection.marked.insert(id);
            true
        }
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selection.marked.contains(&id) && self.filtered.iter().any(|r| r.id() == id)
    }

    /// Marked records in the filtered view, in display order.
    pub fn selected_ids(&self) -> Vec<i64> {
        self.filtered
            .iter()
            .map(|r| r.id())
            .filter(|id| self.selection.marked.contains(id))
            .collect()
    }

    pub fn request_bulk_delete(&self) -> Option<BulkDeleteRequest> {
        let ids = self.selected_ids();
        if ids.is_empty() {
            return None;
        }
        let prompt = format!(
            "Delete {} selected {}?",
            ids.len(),
            if ids.len() == 1 {
                R::KIND.singular()
            } else {
                R::KIND.collection()
            }
        );
        Some(BulkDeleteRequest { ids, prompt })
    }

    /// Same contract as `begin_delete`.
    pub fn begin_bulk_delete(&mut self, confirmed: &ConfirmedBulkDelete) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(PendingOp::BulkDelete(confirmed.ids.clone()));
        true
    }

    /// Drops every confirmed-deleted record and, if any went, ends selection.
    pub fn apply_bulk_delete(&mut self, report: &BulkDeleteReport) {
        self.pending = None;
        if !report.succeeded.is_empty() {
            let gone: HashSet<i64> = report.succeeded.iter().copied().collect();
            self.records.retain(|r| !gone.contains(&r.id()));
            self.filtered.retain(|r| !gone.contains(&r.id()));
            self.total_count = self
                .total_count
                .saturating_sub(report.succeeded.len() as u64);
            self.selection.clear();
            self.selection.active = false;
            self.settle_after_local_change();
        }
        if let Some((_, err)) = report.errors.last() {
            let err = err.clone();
            self.note_failure(&err);
        }
        log::info!("{}: bulk delete {}", R::KIND, report.summary());
    }

    pub fn bulk_delete(
        &mut self,
        api: &dyn ResourceApi<R>,
        confirmed: ConfirmedBulkDelete,
    ) -> BulkDeleteReport {
        self.begin_bulk_delete(&confirmed);
        let report = run_bulk_delete(api, &confirmed.ids);
        self.apply_bulk_delete(&report);
        report
    }
}
