use std::any::Any;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use time::OffsetDateTime;

use super::AppAction;

#[derive(Clone, Copy, Debug)]
pub(super) struct RenderCtx {
    pub(super) now: OffsetDateTime,
}

/// One tab of the console.
///
/// Views only touch their own state directly. Anything that needs the rest
/// of the app (a network call, a modal) is handed back as an [`AppAction`].
pub(super) trait View: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn title(&self) -> &str;

    /// Key help for the bottom bar.
    fn hints(&self) -> &'static str;

    /// Called when the tab becomes visible.
    fn on_enter(&mut self) -> Option<AppAction> {
        None
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<AppAction> {
        None
    }

    /// While true, global keys (tab switching, quit) go to the view instead.
    fn captures_input(&self) -> bool {
        false
    }

    /// The operator logged out or in again; forget anything user-specific.
    fn session_reset(&mut self) {}

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx);
}

pub(super) fn render_view_chrome(
    frame: &mut ratatui::Frame,
    title: &str,
    updated_at: Option<OffsetDateTime>,
    area: Rect,
) -> Rect {
    let mut spans = vec![Span::styled(
        title.to_string(),
        Style::default().fg(Color::Yellow),
    )];
    if let Some(ts) = updated_at {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("updated {}", super::fmt_clock(ts)),
            Style::default().fg(Color::Gray),
        ));
    }

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(spans));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}
