use serde::{Deserialize, Serialize};

use super::car::Car;
use super::customer::Customer;
use super::display::{fmt_amount, fmt_date, fmt_opt};
use super::form::{FieldKind, FieldSpec, FormError, FormMode, FormReader, FormValues, put};
use super::related::Related;
use crate::resource::{Resource, ResourceKind};

/// A car sale. The receipt id is assigned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub customer: Related<Customer>,
    pub car: Related<Car>,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub receipt: String,
    #[serde(default)]
    pub company: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TransactionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<i64>,
}

const CUSTOMER: FieldSpec = FieldSpec::new("customer", "Customer id", FieldKind::Integer).required();
const CAR: FieldSpec = FieldSpec::new("car", "Car id", FieldKind::Integer).required();
const AMOUNT: FieldSpec = FieldSpec::new("amount", "Amount", FieldKind::Decimal).required();
const DATE: FieldSpec = FieldSpec::new("date", "Date", FieldKind::Date).required();
const COMPANY: FieldSpec = FieldSpec::new("company", "Company id", FieldKind::Integer);

const FIELDS: [FieldSpec; 5] = [CUSTOMER, CAR, AMOUNT, DATE, COMPANY];

pub(crate) fn customer_name(c: &Related<Customer>) -> String {
    match c {
        Related::Expanded(c) => c.name.clone(),
        Related::Id(id) => format!("#{}", id),
    }
}

pub(crate) fn car_label(c: &Related<Car>) -> String {
    match c {
        Related::Expanded(c) => c.label(),
        Related::Id(id) => format!("#{}", id),
    }
}

/// Customer name, car model, car brand, car year; shared with leases.
pub(crate) fn party_search_fields(customer: &Related<Customer>, car: &Related<Car>) -> Vec<String> {
    let mut out = Vec::with_capacity(4);
    out.push(
        customer
            .expanded()
            .map(|c| c.name.clone())
            .unwrap_or_default(),
    );
    match car.expanded() {
        Some(car) => {
            out.push(fmt_opt(&car.model));
            out.push(fmt_opt(&car.brand));
            out.push(fmt_opt(&car.year));
        }
        None => out.extend([String::new(), String::new(), String::new()]),
    }
    out
}

impl Resource for Transaction {
    type Payload = TransactionPayload;

    const KIND: ResourceKind = ResourceKind::Transactions;

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields(&self) -> Vec<String> {
        let mut out = party_search_fields(&self.customer, &self.car);
        out.push(self.amount.clone());
        out.push(fmt_date(&self.date));
        out.push(self.receipt.clone());
        out
    }

    fn columns() -> &'static [&'static str] {
        &["Id", "Customer", "Car", "Amount", "Date", "Receipt"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            customer_name(&self.customer),
            car_label(&self.car),
            fmt_amount(&self.amount),
            fmt_date(&self.date),
            self.receipt.clone(),
        ]
    }

    fn form_fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn to_form(&self) -> FormValues {
        let mut f = FormValues::new();
        put(&mut f, CUSTOMER.name, self.customer.id());
        put(&mut f, CAR.name, self.car.id());
        put(&mut f, AMOUNT.name, &self.amount);
        put(&mut f, DATE.name, &self.date);
        if let Some(c) = self.company {
            put(&mut f, COMPANY.name, c);
        }
        f
    }

    fn payload_from_form(
        form: &FormValues,
        mode: FormMode,
    ) -> Result<TransactionPayload, FormError> {
        let r = FormReader::new(form, mode);
        Ok(TransactionPayload {
            customer: r.integer(&CUSTOMER)?,
            car: r.integer(&CAR)?,
            amount: r.decimal(&AMOUNT)?,
            date: r.date(&DATE)?,
            company: r.integer(&COMPANY)?,
        })
    }
}
