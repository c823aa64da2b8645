use super::*;
use crate::controller::ListState;
use crate::model::{Car, Customer, FieldKind, FieldSpec, FormValues, Lease, Transaction};
use crate::resource::ResourceApi;

pub(super) const LOGIN_TITLE: &str = "Log in";

const LOGIN_FIELDS: [FieldSpec; 2] = [
    FieldSpec::new("username", "Username", FieldKind::Text).required(),
    FieldSpec::new("password", "Password", FieldKind::Text).required(),
];

const PASSWORD_FIELDS: [FieldSpec; 3] = [
    FieldSpec::new("old_password", "Current password", FieldKind::Text).required(),
    FieldSpec::new("new_password", "New password", FieldKind::Text).required(),
    FieldSpec::new("confirm_password", "Repeat new password", FieldKind::Text).required(),
];

const COMPANY_FIELDS: [FieldSpec; 2] = [
    FieldSpec::new("name", "Name", FieldKind::Text).required(),
    FieldSpec::new("address", "Address", FieldKind::Text),
];

fn value<'a>(values: &'a FormValues, name: &str) -> &'a str {
    values.get(name).map(|s| s.trim()).unwrap_or("")
}

pub(super) fn open_login(app: &mut App) {
    let form = FormState::new(&LOGIN_FIELDS, &FormValues::new());

    let submit: FormSubmit = Box::new(|app: &mut App, values: FormValues| {
        let username = value(&values, "username").to_string();
        // Passwords are sent as typed.
        let password = values.get("password").cloned().unwrap_or_default();
        if username.is_empty() || password.is_empty() {
            return Err("username and password are required".to_string());
        }

        let client = app.client.clone();
        app.spawn(move || {
            let result = client.login(&username, &password);
            let done: Completion = Box::new(move |app: &mut App| match result {
                Ok(session) => {
                    let who = session.username.clone();
                    if let Err(err) = app.session.set(session) {
                        app.push_error(format!("save session: {:#}", err));
                    }
                    app.finish_form(Ok(()));
                    app.push_info(format!("logged in as {}", who));
                    app.after_login();
                }
                // Bad credentials come back as 401; keep the form open.
                Err(err) => match app.modal.as_mut().map(|m| &mut m.kind) {
                    Some(ModalKind::Form { form, .. }) => {
                        form.busy = false;
                        form.show_error(&err);
                    }
                    _ => app.push_error(format!("login: {}", err)),
                },
            });
            done
        });
        Ok(())
    });
    app.open_form(LOGIN_TITLE, form, submit);
}

pub(in crate::tui_shell) fn confirm_logout(app: &mut App) {
    let who = app.session.username().unwrap_or_default();
    app.open_confirm(
        "Log out",
        format!("Log out {}?", who),
        Box::new(|app: &mut App| {
            if let Err(err) = app.session.clear() {
                app.push_error(format!("clear session: {:#}", err));
            }
            for v in &mut app.views {
                v.session_reset();
            }
            app.push_info("logged out");
            app.open_login();
        }),
    );
}

/// Reloads the record counts shown on the dashboard.
pub(in crate::tui_shell) fn refresh_dashboard(app: &mut App) {
    fetch_total::<Car>(app);
    fetch_total::<Customer>(app);
    fetch_total::<Lease>(app);
    fetch_total::<Transaction>(app);
}

fn fetch_total<R: Resource>(app: &mut App) {
    // A loaded tab already knows its count.
    if let Some(view) = app.records_mut::<R>() {
        if *view.list.state() == ListState::Loaded {
            let total = view.list.total_count();
            app.note_total(R::KIND, total);
            return;
        }
    }

    let client = app.client.clone();
    app.spawn(move || {
        let result = <RemoteClient as ResourceApi<R>>::list(&client, 1, 1);
        let done: Completion = Box::new(move |app: &mut App| match result {
            Ok(page) => app.note_total(R::KIND, page.total_count),
            Err(ApiError::NotFound(_)) => app.note_total(R::KIND, 0),
            Err(err) => app.report_api_error(&format!("count {}", R::KIND), &err),
        });
        done
    });
}

pub(in crate::tui_shell) fn refresh_profile(app: &mut App) {
    let client = app.client.clone();
    app.spawn(move || {
        let info = client.user_info();
        let companies = client.companies();
        let done: Completion = Box::new(move |app: &mut App| {
            let info = match info {
                Ok(info) => info,
                Err(err) => {
                    app.report_api_error("load profile", &err);
                    return;
                }
            };
            let companies = match companies {
                Ok(c) => c,
                Err(ApiError::NotFound(_)) => Vec::new(),
                Err(err) => {
                    app.report_api_error("load companies", &err);
                    Vec::new()
                }
            };
            if let Some(view) = app.view_of_mut::<ProfileView>() {
                view.info = Some(info);
                view.companies = companies;
                view.updated_at = Some(OffsetDateTime::now_utc());
            }
        });
        done
    });
}

pub(in crate::tui_shell) fn open_change_password(app: &mut App) {
    let form = FormState::new(&PASSWORD_FIELDS, &FormValues::new());
    let submit: FormSubmit = Box::new(|app: &mut App, values: FormValues| {
        let old = values.get("old_password").cloned().unwrap_or_default();
        let new = values.get("new_password").cloned().unwrap_or_default();
        let again = values.get("confirm_password").cloned().unwrap_or_default();
        if old.is_empty() || new.is_empty() {
            return Err("all fields are required".to_string());
        }
        if new != again {
            return Err("new passwords do not match".to_string());
        }

        let client = app.client.clone();
        app.spawn(move || {
            let result = client.change_password(&old, &new);
            let done: Completion = Box::new(move |app: &mut App| {
                let ok = result.is_ok();
                app.finish_form(result);
                if ok {
                    app.push_info("password changed");
                }
            });
            done
        });
        Ok(())
    });
    app.open_form("Change password", form, submit);
}

pub(in crate::tui_shell) fn open_create_company(app: &mut App) {
    let form = FormState::new(&COMPANY_FIELDS, &FormValues::new());
    let submit: FormSubmit = Box::new(|app: &mut App, values: FormValues| {
        let name = value(&values, "name").to_string();
        if name.is_empty() {
            return Err("Name: This field is required.".to_string());
        }
        let address = Some(value(&values, "address").to_string()).filter(|a| !a.is_empty());

        let client = app.client.clone();
        app.spawn(move || {
            let result = client.create_company(&name, address.as_deref());
            let done: Completion = Box::new(move |app: &mut App| match result {
                Ok(company) => {
                    app.finish_form(Ok(()));
                    app.push_info(format!("created company {}", company.name));
                    refresh_profile(app);
                }
                Err(err) => app.finish_form(Err(err)),
            });
            done
        });
        Ok(())
    });
    app.open_form("New company", form, submit);
}
