use super::*;
use crate::model::Page;
use crate::resource::ResourceApi;

/// Identifies one list request. Only the newest ticket may commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer request was issued after this one; the response was dropped.
    Stale,
}

impl<R: Resource> ListController<R> {
    /// Starts a fetch of `page` and moves to `Loading`.
    ///
    /// Fails only once the session has ended; any earlier ticket still in
    /// flight becomes stale.
    pub fn request_page(&mut self, page: u32, page_size: u32) -> Result<FetchTicket, ApiError> {
        if self.is_session_over() {
            return Err(ApiError::Unauthenticated(
                "session ended; log in again".to_string(),
            ));
        }
        self.next_seq += 1;
        let ticket = FetchTicket {
            seq: self.next_seq,
            page: page.max(1),
            page_size: page_size.max(1),
        };
        self.page = ticket.page;
        self.page_size = ticket.page_size;
        self.latest = Some(ticket);
        self.state = ListState::Loading;
        log::debug!(
            "{}: requesting page {} (size {})",
            R::KIND,
            ticket.page,
            ticket.page_size
        );
        Ok(ticket)
    }

    /// Commits a list response, unless a newer request has been made since.
    pub fn apply_page(
        &mut self,
        ticket: FetchTicket,
        result: Result<Page<R>, ApiError>,
    ) -> FetchOutcome {
        if self.latest != Some(ticket) {
            log::warn!(
                "{}: dropping stale response for page {} (seq {})",
                R::KIND,
                ticket.page,
                ticket.seq
            );
            return FetchOutcome::Stale;
        }
        self.latest = None;

        match result {
            Ok(page) => {
                self.total_count = page.total_count;
                self.records = page.records;
                self.filtered = self.records.clone();
                self.search.clear();
                self.selection.clear();
                self.display_page = ticket.page;
                self.last_error = None;
                self.state = if self.records.is_empty() {
                    ListState::Empty
                } else {
                    ListState::Loaded
                };
                log::info!(
                    "{}: page {} loaded ({} of {})",
                    R::KIND,
                    ticket.page,
                    self.records.len(),
                    self.total_count
                );
            }
            Err(ApiError::NotFound(msg)) => {
                log::info!("{}: page {} empty ({})", R::KIND, ticket.page, msg);
                self.records.clear();
                self.filtered.clear();
                self.search.clear();
                self.selection.clear();
                self.display_page = ticket.page;
                self.last_error = None;
                self.state = ListState::Empty;
            }
            Err(err) => {
                self.state = if err.is_unauthenticated() {
                    ListState::Failed(FailureKind::Unauthenticated)
                } else {
                    ListState::Failed(FailureKind::FetchError(err.to_string()))
                };
                self.last_error = Some(err);
            }
        }
        FetchOutcome::Applied
    }

    /// Clamps a target page to the known page range.
    pub fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages())
    }

    pub fn next_page_index(&self) -> Option<u32> {
        (self.page < self.total_pages()).then(|| self.page + 1)
    }

    pub fn prev_page_index(&self) -> Option<u32> {
        (self.page > 1).then(|| self.page - 1)
    }

    /// Changing the page size starts over at page 1.
    pub fn request_page_size(&mut self, page_size: u32) -> Result<FetchTicket, ApiError> {
        self.request_page(1, page_size)
    }

    /// Fetches `page` and commits it in one step.
    pub fn load_page(&mut self, api: &dyn ResourceApi<R>, page: u32) -> Result<(), ApiError> {
        self.fetch_now(api, page, self.page_size)
    }

    fn fetch_now(
        &mut self,
        api: &dyn ResourceApi<R>,
        page: u32,
        page_size: u32,
    ) -> Result<(), ApiError> {
        let ticket = self.request_page(page, page_size)?;
        let result = api.list(ticket.page, ticket.page_size);
        let failure = result.as_ref().err().cloned();
        self.apply_page(ticket, result);
        match failure {
            Some(ApiError::NotFound(_)) | None => Ok(()),
            Some(err) => Err(err),
        }
    }

    pub fn refresh(&mut self, api: &dyn ResourceApi<R>) -> Result<(), ApiError> {
        self.load_page(api, self.page)
    }

    pub fn next_page(&mut self, api: &dyn ResourceApi<R>) -> Result<bool, ApiError> {
        match self.next_page_index() {
            Some(p) => self.load_page(api, p).map(|_| true),
            None => Ok(false),
        }
    }

    pub fn prev_page(&mut self, api: &dyn ResourceApi<R>) -> Result<bool, ApiError> {
        match self.prev_page_index() {
            Some(p) => self.load_page(api, p).map(|_| true),
            None => Ok(false),
        }
    }

    /// Jumps to `page`, clamped to the known range once a page has loaded.
    pub fn goto_page(&mut self, api: &dyn ResourceApi<R>, page: u32) -> Result<(), ApiError> {
        let target = if self.state == ListState::Idle {
            page.max(1)
        } else {
            self.clamp_page(page)
        };
        self.load_page(api, target)
    }

    pub fn set_page_size(
        &mut self,
        api: &dyn ResourceApi<R>,
        page_size: u32,
    ) -> Result<(), ApiError> {
        self.fetch_now(api, 1, page_size)
    }
}
