use std::any::Any;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use time::OffsetDateTime;

use super::super::app::{confirm_logout, open_change_password, open_create_company, refresh_profile};
use super::super::{App, AppAction, RenderCtx, View, render_view_chrome};
use crate::model::{Company, UserInfo};

#[derive(Debug, Default)]
pub(in crate::tui_shell) struct ProfileView {
    pub(in crate::tui_shell) info: Option<UserInfo>,
    pub(in crate::tui_shell) companies: Vec<Company>,
    pub(in crate::tui_shell) updated_at: Option<OffsetDateTime>,
}

fn field(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(Color::Yellow)),
        Span::raw(value.to_string()),
    ])
}

impl View for ProfileView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn title(&self) -> &str {
        "Profile"
    }

    fn hints(&self) -> &'static str {
        "r: refresh  p: change password  c: new company  o: log out"
    }

    fn on_enter(&mut self) -> Option<AppAction> {
        if self.info.is_some() {
            return None;
        }
        Some(Box::new(|app: &mut App| refresh_profile(app)))
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<AppAction> {
        let action: AppAction = match key.code {
            KeyCode::Char('r') => Box::new(|app: &mut App| refresh_profile(app)),
            KeyCode::Char('p') => Box::new(|app: &mut App| open_change_password(app)),
            KeyCode::Char('c') => Box::new(|app: &mut App| open_create_company(app)),
            KeyCode::Char('o') => Box::new(|app: &mut App| confirm_logout(app)),
            _ => return None,
        };
        Some(action)
    }

    fn session_reset(&mut self) {
        *self = Self::default();
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, _ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, "Profile", self.updated_at, area);

        let Some(info) = &self.info else {
            frame.render_widget(
                Paragraph::new(Span::styled("loading...", Style::default().fg(Color::Gray))),
                inner,
            );
            return;
        };

        let mut lines = vec![
            field("Name", &info.display_name()),
            field("Username", &info.username),
            field("Email", &info.email),
            Line::from(""),
            Line::from(Span::styled("Companies", Style::default().fg(Color::Yellow))),
        ];
        if self.companies.is_empty() {
            lines.push(Line::from("  (none; press c to create one)"));
        }
        for c in &self.companies {
            let address = c.address.as_deref().unwrap_or("-");
            lines.push(Line::from(format!("  {}  {}", c.name, address)));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
