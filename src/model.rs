mod account;
mod car;
mod config;
mod customer;
mod display;
mod form;
mod lease;
mod page;
mod related;
mod transaction;

pub use self::account::{Company, LoginResponse, RegisterResponse, UserInfo};
pub use self::car::{Car, CarPayload};
pub use self::config::{ConsoleConfig, ConsoleState, Session};
pub use self::customer::{Customer, CustomerPayload};
pub use self::display::{fmt_amount, fmt_date, fmt_opt};
pub use self::form::{FieldKind, FieldSpec, FormError, FormMode, FormValues, parse_assignments};
pub use self::lease::{Lease, LeasePayload};
pub use self::page::Page;
pub use self::related::Related;
pub use self::transaction::{Transaction, TransactionPayload};

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
