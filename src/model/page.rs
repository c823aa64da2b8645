use serde::{Deserialize, Serialize};

/// One page of records as returned by a list request.
///
/// `total_count` is the server's count over the whole collection, not the
/// length of `records`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<R> {
    pub records: Vec<R>,
    pub total_count: u64,
}

impl<R> Page<R> {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            total_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
