use super::*;
use crate::controller::{BulkDeleteReport, FetchOutcome, ListState, run_bulk_delete};
use crate::model::{FormMode, FormValues, Lease};
use crate::resource::ResourceApi;

const BUSY: &str = "another change to this list is still in progress";

/// Requests `page` for the `R` tab and applies the answer when it arrives.
///
/// A response overtaken by a newer request is dropped on arrival.
pub(in crate::tui_shell) fn fetch_page<R: Resource>(app: &mut App, page: u32, page_size: u32) {
    let Some(view) = app.records_mut::<R>() else {
        return;
    };
    let ticket = match view.list.request_page(page, page_size) {
        Ok(t) => t,
        Err(err) => {
            app.report_api_error(&format!("load {}", R::KIND), &err);
            return;
        }
    };

    let client = app.client.clone();
    app.spawn(move || {
        let result = <RemoteClient as ResourceApi<R>>::list(&client, ticket.page, ticket.page_size);
        let done: Completion = Box::new(move |app: &mut App| {
            let Some(view) = app.records_mut::<R>() else {
                return;
            };
            if view.list.apply_page(ticket, result) == FetchOutcome::Stale {
                return;
            }
            view.after_reload();
            let loaded = *view.list.state() == ListState::Loaded;
            let total = view.list.total_count();
            let err = view.list.last_error().cloned();

            if loaded {
                app.note_total(R::KIND, total);
            }
            if let Some(err) = err {
                app.report_api_error(&format!("load {}", R::KIND), &err);
            }
        });
        done
    });
}

pub(in crate::tui_shell) fn open_create_form<R: Resource>(app: &mut App) {
    let form = FormState::new(R::form_fields(), &FormValues::new());
    let submit: FormSubmit = Box::new(|app: &mut App, values: FormValues| {
        let payload = R::payload_from_form(&values, FormMode::Create).map_err(|e| e.to_string())?;
        let Some(view) = app.records_mut::<R>() else {
            return Err(format!("no {} tab", R::KIND));
        };
        if view.list.pending().is_some() {
            return Err(BUSY.to_string());
        }
        view.list.begin_create();

        let client = app.client.clone();
        app.spawn(move || {
            let result = <RemoteClient as ResourceApi<R>>::create(&client, &payload);
            let done: Completion = Box::new(move |app: &mut App| {
                let result = match app.records_mut::<R>() {
                    Some(view) => {
                        let result = view.list.apply_created(result);
                        view.after_reload();
                        result
                    }
                    None => result,
                };
                match result {
                    Ok(record) => {
                        app.finish_form(Ok(()));
                        app.push_info(format!("created {} #{}", R::KIND.singular(), record.id()));
                    }
                    Err(err) => app.finish_form(Err(err)),
                }
            });
            done
        });
        Ok(())
    });
    app.open_form(format!("New {}", R::KIND.singular()), form, submit);
}

pub(in crate::tui_shell) fn open_edit_form<R: Resource>(app: &mut App, id: i64) {
    let Some(view) = app.records_mut::<R>() else {
        return;
    };
    let Some(record) = view.list.get(id) else {
        app.push_error(format!("{} #{} is not on this page", R::KIND.singular(), id));
        return;
    };
    let form = FormState::new(R::form_fields(), &record.to_form());

    let submit: FormSubmit = Box::new(move |app: &mut App, values: FormValues| {
        let payload = R::payload_from_form(&values, FormMode::Update).map_err(|e| e.to_string())?;
        let Some(view) = app.records_mut::<R>() else {
            return Err(format!("no {} tab", R::KIND));
        };
        if view.list.pending().is_some() {
            return Err(BUSY.to_string());
        }
        view.list.begin_update(id);

        let client = app.client.clone();
        app.spawn(move || {
            let result = <RemoteClient as ResourceApi<R>>::update(&client, id, &payload);
            let done: Completion = Box::new(move |app: &mut App| {
                let result = match app.records_mut::<R>() {
                    Some(view) => view.list.apply_updated(id, result),
                    None => result.map(|_| false),
                };
                match result {
                    Ok(on_page) => {
                        app.finish_form(Ok(()));
                        if on_page {
                            app.push_info(format!("updated {} #{}", R::KIND.singular(), id));
                        } else {
                            app.push_info(format!(
                                "updated {} #{} (no longer on this page)",
                                R::KIND.singular(),
                                id
                            ));
                        }
                    }
                    Err(err) => app.finish_form(Err(err)),
                }
            });
            done
        });
        Ok(())
    });
    app.open_form(format!("Edit {} #{}", R::KIND.singular(), id), form, submit);
}

pub(in crate::tui_shell) fn confirm_delete<R: Resource>(app: &mut App, id: i64) {
    let Some(view) = app.records_mut::<R>() else {
        return;
    };
    if view.list.pending().is_some() {
        app.push_error(BUSY);
        return;
    }
    let request = view.list.request_delete(id);
    let prompt = request.prompt().to_string();

    app.open_confirm(
        "Delete",
        prompt,
        Box::new(move |app: &mut App| {
            let confirmed = request.confirm();
            let Some(view) = app.records_mut::<R>() else {
                return;
            };
            if !view.list.begin_delete(&confirmed) {
                app.push_error(BUSY);
                return;
            }

            let client = app.client.clone();
            app.spawn(move || {
                let id = confirmed.id();
                let result = <RemoteClient as ResourceApi<R>>::delete(&client, id);
                let done: Completion = Box::new(move |app: &mut App| {
                    let result = match app.records_mut::<R>() {
                        Some(view) => {
                            let result = view.list.apply_deleted(id, result);
                            view.after_reload();
                            result
                        }
                        None => result,
                    };
                    match result {
                        Ok(()) => app.push_info(format!("deleted {} #{}", R::KIND.singular(), id)),
                        Err(err) => app.report_api_error(
                            &format!("delete {} #{}", R::KIND.singular(), id),
                            &err,
                        ),
                    }
                });
                done
            });
        }),
    );
}

pub(in crate::tui_shell) fn confirm_bulk_delete<R: Resource>(app: &mut App) {
    let Some(view) = app.records_mut::<R>() else {
        return;
    };
    if view.list.pending().is_some() {
        app.push_error(BUSY);
        return;
    }
    let Some(request) = view.list.request_bulk_delete() else {
        app.push_error(format!("no {} selected", R::KIND));
        return;
    };
    let prompt = request.prompt().to_string();

    app.open_confirm(
        "Delete selected",
        prompt,
        Box::new(move |app: &mut App| {
            let confirmed = request.confirm();
            let Some(view) = app.records_mut::<R>() else {
                return;
            };
            if !view.list.begin_bulk_delete(&confirmed) {
                app.push_error(BUSY);
                return;
            }

            let client = app.client.clone();
            app.spawn(move || {
                let report = run_bulk_delete::<R>(&*client, confirmed.ids());
                let done: Completion = Box::new(move |app: &mut App| {
                    if let Some(view) = app.records_mut::<R>() {
                        view.list.apply_bulk_delete(&report);
                        view.after_reload();
                    }
                    finish_bulk_delete::<R>(app, &report);
                });
                done
            });
        }),
    );
}

fn finish_bulk_delete<R: Resource>(app: &mut App, report: &BulkDeleteReport) {
    if let Some((id, err)) = report.errors.iter().find(|(_, e)| e.is_unauthenticated()) {
        app.session_expired(&format!("delete {} #{}: {}", R::KIND.singular(), id, err));
        return;
    }
    let summary = format!("{}: {}", R::KIND, report.summary());
    if report.is_complete_success() {
        app.push_info(summary);
        return;
    }

    app.push_error(summary.clone());
    let mut lines = vec![summary, String::new()];
    for (id, err) in &report.errors {
        lines.push(format!("#{}: {}", id, err));
    }
    if !report.skipped.is_empty() {
        let skipped: Vec<String> = report.skipped.iter().map(|id| format!("#{}", id)).collect();
        lines.push(format!("not attempted: {}", skipped.join(", ")));
    }
    app.open_viewer("Bulk delete", lines);
}

pub(in crate::tui_shell) fn mark_returned(app: &mut App, id: i64) {
    let Some(view) = app.records_mut::<Lease>() else {
        return;
    };
    let Some(lease) = view.list.get(id) else {
        return;
    };
    if lease.mark_as_returned_from_lease == Some(true) {
        app.push_info(format!("lease #{} is already returned", id));
        return;
    }

    app.open_confirm(
        "Return",
        format!("Mark lease #{} as returned?", id),
        Box::new(move |app: &mut App| {
            let client = app.client.clone();
            app.spawn(move || {
                let result = client.mark_lease_returned(id);
                let done: Completion = Box::new(move |app: &mut App| match result {
                    Ok(()) => {
                        if let Some(view) = app.records_mut::<Lease>() {
                            view.list.patch_local(id, |l| {
                                l.mark_as_returned_from_lease = Some(true)
                            });
                        }
                        app.push_info(format!("lease #{} marked returned", id));
                    }
                    Err(err) => app.report_api_error(&format!("return lease #{}", id), &err),
                });
                done
            });
        }),
    );
}
