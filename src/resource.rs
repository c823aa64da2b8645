//! The per-resource parameters that the client and list controller are generic over.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::{FieldSpec, FormError, FormMode, FormValues, Page};
use crate::remote::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Cars,
    Customers,
    Leases,
    Transactions,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Cars,
        ResourceKind::Customers,
        ResourceKind::Leases,
        ResourceKind::Transactions,
    ];

    /// Collection name; also the key of the record array in list responses.
    pub fn collection(self) -> &'static str {
        match self {
            ResourceKind::Cars => "cars",
            ResourceKind::Customers => "customers",
            ResourceKind::Leases => "leases",
            ResourceKind::Transactions => "transactions",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            ResourceKind::Cars => "car",
            ResourceKind::Customers => "customer",
            ResourceKind::Leases => "lease",
            ResourceKind::Transactions => "transaction",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::Cars => "Cars",
            ResourceKind::Customers => "Customers",
            ResourceKind::Leases => "Leases",
            ResourceKind::Transactions => "Transactions",
        }
    }

    pub fn list_path(self) -> String {
        format!("/{}/", self.collection())
    }

    pub fn add_path(self) -> String {
        format!("/add_{}/", self.singular())
    }

    pub fn update_path(self, id: i64) -> String {
        format!("/update_{}/{}/", self.singular(), id)
    }

    pub fn delete_path(self, id: i64) -> String {
        format!("/delete_{}/{}/", self.singular(), id)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// A record type the console can list, search, and edit.
pub trait Resource:
    Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Body sent on create and update.
    type Payload: Serialize + fmt::Debug + Send + Sync + 'static;

    const KIND: ResourceKind;

    fn id(&self) -> i64;

    /// Display strings that search matches against (already rendered, not lowercased).
    fn search_fields(&self) -> Vec<String>;

    fn columns() -> &'static [&'static str];

    fn row(&self) -> Vec<String>;

    fn form_fields() -> &'static [FieldSpec];

    /// Current values, used to pre-fill the edit form.
    fn to_form(&self) -> FormValues;

    fn payload_from_form(form: &FormValues, mode: FormMode) -> Result<Self::Payload, FormError>;
}

/// The four calls a list controller needs from the backend.
pub trait ResourceApi<R: Resource> {
    fn list(&self, page: u32, page_size: u32) -> Result<Page<R>, ApiError>;
    fn create(&self, payload: &R::Payload) -> Result<R, ApiError>;
    fn update(&self, id: i64, payload: &R::Payload) -> Result<R, ApiError>;
    fn delete(&self, id: i64) -> Result<(), ApiError>;
}
