//! Operator console for the dealership CRM backend.
//!
//! The crate is split the same way the console is: a thin authenticated
//! [`remote::RemoteClient`], a generic [`controller::ListController`] that owns
//! one page of records per resource, and the presentation layers (the CLI in
//! `main.rs` and the terminal console in [`tui`]).

pub mod controller;
pub mod model;
pub mod remote;
pub mod resource;
pub mod session;
pub mod store;
pub mod tui;

mod tui_shell;
