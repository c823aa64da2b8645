use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::super::app::{
    confirm_bulk_delete, confirm_delete, fetch_page, mark_returned, open_create_form,
    open_edit_form,
};
use super::super::super::{App, AppAction};
use super::{PAGE_SIZES, RecordsView};
use crate::resource::{Resource, ResourceKind};

pub(super) fn handle_key<R: Resource>(
    view: &mut RecordsView<R>,
    key: KeyEvent,
) -> Option<AppAction> {
    if view.searching {
        search_key(view, key);
        return None;
    }

    match key.code {
        KeyCode::Char('/') => {
            view.searching = true;
            view.search.set(view.list.search_term().to_string());
            None
        }
        KeyCode::Esc => {
            if !view.list.search_term().is_empty() {
                view.search.clear();
                view.list.clear_search();
                view.clamp_cursor();
            } else if view.list.selection_mode() {
                view.list.toggle_selection_mode();
            }
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            view.cursor = view.cursor.saturating_sub(1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            view.cursor += 1;
            view.clamp_cursor();
            None
        }
        KeyCode::Home => {
            view.cursor = 0;
            None
        }
        KeyCode::End => {
            view.cursor = view.list.filtered().len().saturating_sub(1);
            None
        }
        KeyCode::Char('v') => {
            view.list.toggle_selection_mode();
            None
        }
        KeyCode::Char(' ') => {
            if let Some(id) = view.selected_id() {
                view.list.toggle_select(id);
            }
            None
        }
        KeyCode::Char('D') => Some(Box::new(|app: &mut App| confirm_bulk_delete::<R>(app))),
        KeyCode::Char('a') => Some(Box::new(|app: &mut App| open_create_form::<R>(app))),
        KeyCode::Char('e') | KeyCode::Enter => {
            let id = view.selected_id()?;
            Some(Box::new(move |app: &mut App| open_edit_form::<R>(app, id)))
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            let id = view.selected_id()?;
            Some(Box::new(move |app: &mut App| confirm_delete::<R>(app, id)))
        }
        KeyCode::Char('m') if R::KIND == ResourceKind::Leases => {
            let id = view.selected_id()?;
            Some(Box::new(move |app: &mut App| mark_returned(app, id)))
        }
        KeyCode::Char('r') => {
            let (page, size) = (view.list.page(), view.list.page_size());
            Some(reload::<R>(page, size))
        }
        KeyCode::Right | KeyCode::Char('n') => {
            let page = view.list.next_page_index()?;
            Some(reload::<R>(page, view.list.page_size()))
        }
        KeyCode::Left | KeyCode::Char('p') => {
            let page = view.list.prev_page_index()?;
            Some(reload::<R>(page, view.list.page_size()))
        }
        KeyCode::Char('+') => {
            let size = next_page_size(view.list.page_size(), true)?;
            Some(reload::<R>(1, size))
        }
        KeyCode::Char('-') => {
            let size = next_page_size(view.list.page_size(), false)?;
            Some(reload::<R>(1, size))
        }
        _ => None,
    }
}

fn reload<R: Resource>(page: u32, size: u32) -> AppAction {
    Box::new(move |app: &mut App| fetch_page::<R>(app, page, size))
}

/// The neighbouring entry of [`PAGE_SIZES`], or `None` at either end.
pub(super) fn next_page_size(current: u32, up: bool) -> Option<u32> {
    if up {
        PAGE_SIZES.iter().copied().find(|&s| s > current)
    } else {
        PAGE_SIZES.iter().rev().copied().find(|&s| s < current)
    }
}

fn search_key<R: Resource>(view: &mut RecordsView<R>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            view.searching = false;
            view.search.clear();
            view.list.clear_search();
        }
        KeyCode::Enter => view.searching = false,
        KeyCode::Backspace => view.search.backspace(),
        KeyCode::Delete => view.search.delete(),
        KeyCode::Left => view.search.move_left(),
        KeyCode::Right => view.search.move_right(),
        KeyCode::Home => view.search.home(),
        KeyCode::End => view.search.end(),
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            view.search.insert_char(c)
        }
        _ => return,
    }
    if view.list.search_term() != view.search.buf {
        view.list.search(&view.search.buf);
    }
    view.clamp_cursor();
}
