use serde::{Deserialize, Serialize};

use crate::resource::Resource;

/// A reference to another record.
///
/// Read endpoints expand the referenced record inline; update endpoints echo
/// back the bare id. Both shapes deserialize into this type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Related<T> {
    Id(i64),
    Expanded(T),
}

impl<T: Resource> Related<T> {
    pub fn id(&self) -> i64 {
        match self {
            Related::Id(id) => *id,
            Related::Expanded(r) => r.id(),
        }
    }
}

impl<T> Related<T> {
    pub fn expanded(&self) -> Option<&T> {
        match self {
            Related::Id(_) => None,
            Related::Expanded(r) => Some(r),
        }
    }
}
