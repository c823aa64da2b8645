use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::AppAction;
use super::{Modal, ModalKind};
use crate::model::FormValues;

pub(super) enum ModalAction {
    None,
    Close,
    Confirm(AppAction),
    SubmitForm(FormValues),
}

pub(super) fn map_modal_key(modal: &mut Modal, key: KeyEvent) -> ModalAction {
    if matches!(modal.kind, ModalKind::Viewer) {
        return handle_viewer_key(modal, key);
    }
    match &mut modal.kind {
        ModalKind::Viewer => ModalAction::None,
        ModalKind::Confirm { on_yes } => match key.code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => ModalAction::Close,
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => match on_yes.take() {
                Some(action) => ModalAction::Confirm(action),
                None => ModalAction::Close,
            },
            _ => ModalAction::None,
        },

        ModalKind::Form { form, .. } => match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Enter => {
                if form.busy {
                    return ModalAction::None;
                }
                ModalAction::SubmitForm(form.values())
            }
            KeyCode::Tab | KeyCode::Down => {
                form.focus_next();
                ModalAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.focus_prev();
                ModalAction::None
            }
            KeyCode::Backspace => {
                form.input.backspace();
                ModalAction::None
            }
            KeyCode::Delete => {
                form.input.delete();
                ModalAction::None
            }
            KeyCode::Left => {
                form.input.move_left();
                ModalAction::None
            }
            KeyCode::Right => {
                form.input.move_right();
                ModalAction::None
            }
            KeyCode::Home => {
                form.input.home();
                ModalAction::None
            }
            KeyCode::End => {
                form.input.end();
                ModalAction::None
            }
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                form.input.insert_char(c);
                ModalAction::None
            }
            _ => ModalAction::None,
        },
    }
}

fn handle_viewer_key(modal: &mut Modal, key: KeyEvent) -> ModalAction {
    let last = modal.lines.len().saturating_sub(1);
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => ModalAction::Close,
        KeyCode::Up => {
            modal.scroll = modal.scroll.saturating_sub(1);
            ModalAction::None
        }
        KeyCode::Down => {
            modal.scroll = (modal.scroll + 1).min(last);
            ModalAction::None
        }
        KeyCode::PageUp => {
            modal.scroll = modal.scroll.saturating_sub(10);
            ModalAction::None
        }
        KeyCode::PageDown => {
            modal.scroll = (modal.scroll + 10).min(last);
            ModalAction::None
        }
        KeyCode::End => {
            modal.scroll = last;
            ModalAction::None
        }
        _ => ModalAction::None,
    }
}
