//! The paginated list controller shared by every resource screen.
//!
//! A [`ListController`] owns exactly one server page of records plus the
//! filtered view derived from it by the current search term. Every
//! network-backed operation comes in two halves, `begin`/`request` and
//! `apply`, so a presentation layer can run the call elsewhere and hand the
//! result back; the plain methods (`load_page`, `create`, `update`, `delete`,
//! `bulk_delete`) run both halves inline.

use crate::remote::ApiError;
use crate::resource::Resource;

mod fetch;
mod mutations;
mod search;
mod selection;

pub use self::fetch::{FetchOutcome, FetchTicket};
pub use self::search::{SearchFilter, filter_records, predicate};
pub use self::selection::{
    BulkDeleteReport, BulkDeleteRequest, ConfirmedBulkDelete, ConfirmedDelete, DeleteRequest,
    run_bulk_delete,
};
use self::selection::Selection;

#[derive(Clone, Debug, PartialEq)]
pub enum ListState {
    Idle,
    Loading,
    Loaded,
    Empty,
    Failed(FailureKind),
}

#[derive(Clone, Debug, PartialEq)]
pub enum FailureKind {
    /// Token missing or rejected. Nothing more happens until a new session.
    Unauthenticated,
    /// Retry by requesting the page again.
    FetchError(String),
}

/// A create/update/delete that has been sent but not yet answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingOp {
    Create,
    Update(i64),
    Delete(i64),
    BulkDelete(Vec<i64>),
}

#[derive(Debug)]
pub struct ListController<R: Resource> {
    state: ListState,
    records: Vec<R>,
    filtered: Vec<R>,
    search: String,

    page: u32,
    page_size: u32,
    display_page: u32,
    total_count: u64,

    next_seq: u64,
    latest: Option<FetchTicket>,

    selection: Selection,
    pending: Option<PendingOp>,
    last_error: Option<ApiError>,
}

impl<R: Resource> ListController<R> {
    pub fn new(page_size: u32) -> Self {
        Self {
            state: ListState::Idle,
            records: Vec::new(),
            filtered: Vec::new(),
            search: String::new(),
            page: 1,
            page_size: page_size.max(1),
            display_page: 1,
            total_count: 0,
            next_seq: 0,
            latest: None,
            selection: Selection::default(),
            pending: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Authoritative copy of the current page.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// What the table shows: the current page narrowed by the search term.
    pub fn filtered(&self) -> &[R] {
        &self.filtered
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// Page most recently requested from the server (1-based).
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Page index the pagination bar shows; a search resets it to 1.
    pub fn display_page(&self) -> u32 {
        self.display_page
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_pages(&self) -> u32 {
        let size = u64::from(self.page_size.max(1));
        let pages = self.total_count.div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn pending(&self) -> Option<&PendingOp> {
        self.pending.as_ref()
    }

    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state == ListState::Loading
    }

    pub fn is_session_over(&self) -> bool {
        self.state == ListState::Failed(FailureKind::Unauthenticated)
    }

    pub fn get(&self, id: i64) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Forget a terminal auth failure once the operator has logged in again.
    pub fn reset_session(&mut self) {
        if self.is_session_over() {
            self.state = ListState::Idle;
        }
        self.last_error = None;
        self.latest = None;
    }

    /// Records a failed call. Auth failures end the session for this list.
    fn note_failure(&mut self, err: &ApiError) {
        if err.is_unauthenticated() {
            self.state = ListState::Failed(FailureKind::Unauthenticated);
        }
        self.last_error = Some(err.clone());
    }

    /// Loaded/Empty follows the record count after a local insert or removal.
    fn settle_after_local_change(&mut self) {
        match self.state {
            ListState::Loaded if self.records.is_empty() => self.state = ListState::Empty,
            ListState::Empty if !self.records.is_empty() => self.state = ListState::Loaded,
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
