use std::any::Any;
use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use time::OffsetDateTime;

use super::super::app::refresh_dashboard;
use super::super::{App, AppAction, RenderCtx, View, render_view_chrome};
use crate::resource::ResourceKind;

/// Landing tab: record counts per resource.
#[derive(Debug, Default)]
pub(in crate::tui_shell) struct DashboardView {
    pub(in crate::tui_shell) totals: HashMap<ResourceKind, u64>,
    pub(in crate::tui_shell) updated_at: Option<OffsetDateTime>,
}

impl View for DashboardView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn title(&self) -> &str {
        "Dashboard"
    }

    fn hints(&self) -> &'static str {
        "r: refresh counts"
    }

    fn on_enter(&mut self) -> Option<AppAction> {
        Some(Box::new(|app: &mut App| refresh_dashboard(app)))
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<AppAction> {
        match key.code {
            KeyCode::Char('r') => Some(Box::new(|app: &mut App| refresh_dashboard(app))),
            _ => None,
        }
    }

    fn session_reset(&mut self) {
        self.totals.clear();
        self.updated_at = None;
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, _ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, "Dashboard", self.updated_at, area);

        let mut lines = vec![
            Line::from(Span::styled(
                "Dealership overview",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for kind in ResourceKind::ALL {
            let count = match self.totals.get(&kind) {
                Some(n) => n.to_string(),
                None => "…".to_string(),
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<14}", kind.title()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(count),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Tab or 1-6 switch tabs. In a list: / search, a add, e edit, d delete, v select.",
            Style::default().fg(Color::Gray),
        )));
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
