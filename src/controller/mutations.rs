use super::*;
use crate::resource::ResourceApi;

impl<R: Resource> ListController<R> {
    pub fn begin_create(&mut self) {
        self.pending = Some(PendingOp::Create);
    }

    /// Appends the server's copy of a new record to both lists.
    ///
    /// The record shows up even when it does not match the active search.
    pub fn apply_created(&mut self, result: Result<R, ApiError>) -> Result<R, ApiError> {
        self.pending = None;
        match result {
            Ok(record) => {
                log::info!("{}: created #{}", R::KIND, record.id());
                self.records.push(record.clone());
                self.filtered.push(record.clone());
                self.total_count += 1;
                self.settle_after_local_change();
                Ok(record)
            }
            Err(err) => {
                self.note_failure(&err);
                Err(err)
            }
        }
    }

    pub fn create(&mut self, api: &dyn ResourceApi<R>, payload: &R::Payload) -> Result<R, ApiError> {
        self.begin_create();
        let result = api.create(payload);
        self.apply_created(result)
    }

    pub fn begin_update(&mut self, id: i64) {
        self.pending = Some(PendingOp::Update(id));
    }

    /// Swaps in the server's copy of `id`, keeping its position.
    ///
    /// Returns `Ok(false)` when the record is no longer on this page.
    pub fn apply_updated(&mut self, id: i64, result: Result<R, ApiError>) -> Result<bool, ApiError> {
        self.pending = None;
        let record = match result {
            Ok(r) => r,
            Err(err) => {
                self.note_failure(&err);
                return Err(err);
            }
        };
        let mut replaced = false;
        for list in [&mut self.records, &mut self.filtered] {
            if let Some(slot) = list.iter_mut().find(|r| r.id() == id) {
                *slot = record.clone();
                replaced = true;
            }
        }
        if replaced {
            log::info!("{}: updated #{}", R::KIND, id);
        } else {
            log::debug!("{}: updated #{} is not on this page", R::KIND, id);
        }
        Ok(replaced)
    }

    pub fn update(
        &mut self,
        api: &dyn ResourceApi<R>,
        id: i64,
        payload: &R::Payload,
    ) -> Result<bool, ApiError> {
        self.begin_update(id);
        let result = api.update(id, payload);
        self.apply_updated(id, result)
    }

    /// Builds the confirmation for deleting `id`. Nothing is sent yet.
    pub fn request_delete(&self, id: i64) -> DeleteRequest {
        DeleteRequest {
            id,
            prompt: format!(
                "Are you sure you want to delete {} #{}?",
                R::KIND.singular(),
                id
            ),
        }
    }

    /// Marks the delete as in flight. Returns false, changing nothing, while
    /// another change is still pending.
    pub fn begin_delete(&mut self, confirmed: &ConfirmedDelete) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(PendingOp::Delete(confirmed.id()));
        true
    }

    /// Drops `id` from both lists once the server confirms the delete.
    pub fn apply_deleted(&mut self, id: i64, result: Result<(), ApiError>) -> Result<(), ApiError> {
        self.pending = None;
        if let Err(err) = result {
            self.note_failure(&err);
            return Err(err);
        }
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.filtered.retain(|r| r.id() != id);
        if self.records.len() < before {
            self.total_count = self.total_count.saturating_sub(1);
        }
        self.selection.clear();
        self.settle_after_local_change();
        log::info!("{}: deleted #{}", R::KIND, id);
        Ok(())
    }

    pub fn delete(
        &mut self,
        api: &dyn ResourceApi<R>,
        confirmed: ConfirmedDelete,
    ) -> Result<(), ApiError> {
        self.begin_delete(&confirmed);
        let result = api.delete(confirmed.id());
        self.apply_deleted(confirmed.id(), result)
    }

    /// Edits a record in place without a round trip, e.g. after a server-side
    /// side effect like marking a lease returned.
    pub fn patch_local(&mut self, id: i64, mut edit: impl FnMut(&mut R)) -> bool {
        let mut hit = false;
        for list in [&mut self.records, &mut self.filtered] {
            if let Some(r) = list.iter_mut().find(|r| r.id() == id) {
                edit(r);
                hit = true;
            }
        }
        hit
    }
}
