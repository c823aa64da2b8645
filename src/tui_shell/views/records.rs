use std::any::Any;

use crossterm::event::KeyEvent;
use time::OffsetDateTime;

use super::super::input::Input;
use super::super::app::fetch_page;
use super::super::{App, AppAction, RenderCtx, View};
use crate::controller::{ListController, ListState};
use crate::resource::{Resource, ResourceKind};

mod keys;
mod render;

/// Page sizes offered by `+`/`-`.
pub(in crate::tui_shell) const PAGE_SIZES: [u32; 5] = [5, 10, 20, 50, 100];

/// A paged, searchable table over one resource.
pub(in crate::tui_shell) struct RecordsView<R: Resource> {
    pub(in crate::tui_shell) list: ListController<R>,
    /// Row within the filtered records.
    pub(in crate::tui_shell) cursor: usize,
    pub(in crate::tui_shell) search: Input,
    pub(in crate::tui_shell) searching: bool,
    pub(in crate::tui_shell) updated_at: Option<OffsetDateTime>,
}

impl<R: Resource> RecordsView<R> {
    pub(in crate::tui_shell) fn new(page_size: u32) -> Self {
        Self {
            list: ListController::new(page_size),
            cursor: 0,
            search: Input::default(),
            searching: false,
            updated_at: None,
        }
    }

    pub(in crate::tui_shell) fn selected_id(&self) -> Option<i64> {
        self.list.filtered().get(self.cursor).map(|r| r.id())
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self
            .cursor
            .min(self.list.filtered().len().saturating_sub(1));
    }

    /// Re-syncs the view after the list changed underneath it.
    pub(in crate::tui_shell) fn after_reload(&mut self) {
        self.clamp_cursor();
        if self.list.search_term().is_empty() {
            self.search.clear();
            self.searching = false;
        }
        if matches!(self.list.state(), ListState::Loaded | ListState::Empty) {
            self.updated_at = Some(OffsetDateTime::now_utc());
        }
    }
}

impl<R: Resource> View for RecordsView<R> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn title(&self) -> &str {
        R::KIND.title()
    }

    fn hints(&self) -> &'static str {
        if self.searching {
            return "type to filter  Enter: keep  Esc: clear";
        }
        match R::KIND {
            ResourceKind::Leases => {
                "/ search  ←→ page  +- size  a add  e edit  d del  m returned  v select  r reload"
            }
            _ => "/ search  ←→ page  +- size  a add  e edit  d del  v select  r reload",
        }
    }

    fn on_enter(&mut self) -> Option<AppAction> {
        if *self.list.state() != ListState::Idle {
            return None;
        }
        let (page, size) = (self.list.page(), self.list.page_size());
        Some(Box::new(move |app: &mut App| fetch_page::<R>(app, page, size)))
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<AppAction> {
        keys::handle_key(self, key)
    }

    fn captures_input(&self) -> bool {
        self.searching
    }

    fn session_reset(&mut self) {
        *self = Self::new(self.list.page_size());
    }

    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, _ctx: &RenderCtx) {
        render::render(self, frame, area);
    }
}

#[cfg(test)]
#[path = "../../tests/tui_shell/records_view_tests.rs"]
mod tests;
