use serde::{Deserialize, Serialize};

use super::car::Car;
use super::customer::Customer;
use super::display::{fmt_amount, fmt_date};
use super::form::{FieldKind, FieldSpec, FormError, FormMode, FormReader, FormValues, put};
use super::related::Related;
use super::transaction::{car_label, customer_name, party_search_fields};
use crate::resource::{Resource, ResourceKind};

/// A car lease. The backend prices it per day from the two dates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lease {
    pub id: i64,
    pub customer: Related<Customer>,
    pub car: Related<Car>,
    #[serde(default)]
    pub lease_start_date: String,
    #[serde(default)]
    pub lease_end_date: String,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub mark_as_returned_from_lease: Option<bool>,
    #[serde(default)]
    pub company: Option<i64>,
}

impl Lease {
    pub fn is_returned(&self) -> bool {
        self.mark_as_returned_from_lease.unwrap_or(false)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LeasePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<i64>,
}

const CUSTOMER: FieldSpec = FieldSpec::new("customer", "Customer id", FieldKind::Integer).required();
const CAR: FieldSpec = FieldSpec::new("car", "Car id", FieldKind::Integer).required();
const START: FieldSpec = FieldSpec::new("lease_start_date", "Start", FieldKind::Date).required();
const END: FieldSpec = FieldSpec::new("lease_end_date", "End", FieldKind::Date).required();
const COMPANY: FieldSpec = FieldSpec::new("company", "Company id", FieldKind::Integer);

const FIELDS: [FieldSpec; 5] = [CUSTOMER, CAR, START, END, COMPANY];

impl Resource for Lease {
    type Payload = LeasePayload;

    const KIND: ResourceKind = ResourceKind::Leases;

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields(&self) -> Vec<String> {
        let mut out = party_search_fields(&self.customer, &self.car);
        out.push(self.amount.clone().unwrap_or_default());
        out.push(fmt_date(&self.lease_start_date));
        out.push(fmt_date(&self.lease_end_date));
        out
    }

    fn columns() -> &'static [&'static str] {
        &["Id", "Customer", "Car", "Amount", "Start", "End", "Returned"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            customer_name(&self.customer),
            car_label(&self.car),
            self.amount.as_deref().map(fmt_amount).unwrap_or_default(),
            fmt_date(&self.lease_start_date),
            fmt_date(&self.lease_end_date),
            if self.is_returned() { "yes" } else { "no" }.to_string(),
        ]
    }

    fn form_fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn to_form(&self) -> FormValues {
        let mut f = FormValues::new();
        put(&mut f, CUSTOMER.name, self.customer.id());
        put(&mut f, CAR.name, self.car.id());
        put(&mut f, START.name, &self.lease_start_date);
        put(&mut f, END.name, &self.lease_end_date);
        if let Some(c) = self.company {
            put(&mut f, COMPANY.name, c);
        }
        f
    }

    fn payload_from_form(form: &FormValues, mode: FormMode) -> Result<LeasePayload, FormError> {
        let r = FormReader::new(form, mode);
        Ok(LeasePayload {
            customer: r.integer(&CUSTOMER)?,
            car: r.integer(&CAR)?,
            lease_start_date: r.date(&START)?,
            lease_end_date: r.date(&END)?,
            company: r.integer(&COMPANY)?,
        })
    }
}
