use crossterm::event::KeyEvent;

use crate::model::FormValues;

use self::keymap::{ModalAction, map_modal_key};
use super::{App, AppAction};

mod draw;
mod form;
mod keymap;

pub(super) use self::draw::draw_modal;
pub(super) use self::form::FormState;

/// Called with the form's values on Enter. `Err` is shown in the form and
/// keeps it open; `Ok` means a request went out and the form waits for it.
pub(super) type FormSubmit = Box<dyn FnMut(&mut App, FormValues) -> Result<(), String>>;

pub(super) struct Modal {
    pub(super) title: String,
    pub(super) kind: ModalKind,
    pub(super) lines: Vec<String>,
    pub(super) scroll: usize,
}

pub(super) enum ModalKind {
    Viewer,
    Confirm { on_yes: Option<AppAction> },
    Form { form: FormState, on_submit: FormSubmit },
}

impl Modal {
    pub(super) fn new(title: impl Into<String>, kind: ModalKind, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            kind,
            lines,
            scroll: 0,
        }
    }
}

pub(super) fn handle_modal_key(app: &mut App, key: KeyEvent) {
    let action = {
        let Some(m) = app.modal.as_mut() else {
            return;
        };
        map_modal_key(m, key)
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),
        ModalAction::Confirm(on_yes) => {
            app.close_modal();
            on_yes(app);
        }
        ModalAction::SubmitForm(values) => {
            let Some(mut m) = app.modal.take() else {
                return;
            };
            let result = match &mut m.kind {
                ModalKind::Form { on_submit, .. } => on_submit(app, values),
                _ => Ok(()),
            };
            // A submit handler may have replaced the modal (e.g. session expiry).
            if app.modal.is_some() {
                return;
            }
            if let ModalKind::Form { form, .. } = &mut m.kind {
                match result {
                    Ok(()) => form.busy = true,
                    Err(msg) => form.set_errors(vec![msg]),
                }
            }
            app.modal = Some(m);
        }
    }
}
