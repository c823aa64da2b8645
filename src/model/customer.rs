use serde::{Deserialize, Serialize};

use super::form::{FieldKind, FieldSpec, FormError, FormMode, FormReader, FormValues, put};
use crate::resource::{Resource, ResourceKind};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: i64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub company: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CustomerPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<i64>,
}

const NAME: FieldSpec = FieldSpec::new("name", "Name", FieldKind::Text).required();
const EMAIL: FieldSpec = FieldSpec::new("email", "Email", FieldKind::Text).required();
const PHONE: FieldSpec = FieldSpec::new("phone_number", "Phone", FieldKind::Integer).required();
const ADDRESS: FieldSpec = FieldSpec::new("address", "Address", FieldKind::Text).required();
const COMPANY: FieldSpec = FieldSpec::new("company", "Company id", FieldKind::Integer);

const FIELDS: [FieldSpec; 5] = [NAME, EMAIL, PHONE, ADDRESS, COMPANY];

impl Resource for Customer {
    type Payload = CustomerPayload;

    const KIND: ResourceKind = ResourceKind::Customers;

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.phone_number.to_string(),
            self.address.clone(),
        ]
    }

    fn columns() -> &'static [&'static str] {
        &["Id", "Name", "Email", "Phone", "Address"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.phone_number.to_string(),
            self.address.clone(),
        ]
    }

    fn form_fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn to_form(&self) -> FormValues {
        let mut f = FormValues::new();
        put(&mut f, NAME.name, &self.name);
        put(&mut f, EMAIL.name, &self.email);
        put(&mut f, PHONE.name, self.phone_number);
        put(&mut f, ADDRESS.name, &self.address);
        if let Some(c) = self.company {
            put(&mut f, COMPANY.name, c);
        }
        f
    }

    fn payload_from_form(
        form: &FormValues,
        mode: FormMode,
    ) -> Result<CustomerPayload, FormError> {
        let r = FormReader::new(form, mode);
        Ok(CustomerPayload {
            name: r.text(&NAME)?,
            email: r.text(&EMAIL)?,
            phone_number: r.integer(&PHONE)?,
            address: r.text(&ADDRESS)?,
            company: r.integer(&COMPANY)?,
        })
    }
}
