use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    // Header: tabs on the left, who is logged in on the right.
    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(40)])
        .split(chunks[0]);
    let titles: Vec<Line> = app
        .views
        .iter()
        .enumerate()
        .map(|(i, v)| Line::from(format!("{} {}", i + 1, v.title())))
        .collect();
    frame.render_widget(
        Tabs::new(titles)
            .select(app.current)
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::BOTTOM)),
        header[0],
    );
    let who = match app.session.username() {
        Some(u) => Span::styled(u, Style::default().fg(Color::Green)),
        None => Span::styled("not logged in", Style::default().fg(Color::Red)),
    };
    let host = app
        .config
        .base_url
        .trim_start_matches("http://")
        .trim_start_matches("https://");
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            who,
            Span::styled(format!(" @ {}", host), Style::default().fg(Color::Gray)),
        ]))
            .alignment(ratatui::layout::Alignment::Right)
            .block(Block::default().borders(Borders::BOTTOM)),
        header[1],
    );

    let ctx = app.render_ctx();
    app.view().render(frame, chunks[1], &ctx);

    // Status: last activity entry plus background work.
    let mut status = Vec::new();
    if app.busy() > 0 {
        status.push(Span::styled(
            format!("[working {}] ", app.busy()),
            Style::default().fg(Color::Cyan),
        ));
    }
    if let Some(e) = app.activity.last() {
        let style = match e.kind {
            EntryKind::Info => Style::default().fg(Color::White),
            EntryKind::Error => Style::default().fg(Color::Red),
        };
        status.push(Span::styled(
            format!("{} ", fmt_clock(e.ts)),
            Style::default().fg(Color::Gray),
        ));
        status.push(Span::styled(e.text.clone(), style));
    }
    frame.render_widget(Paragraph::new(Line::from(status)), chunks[2]);

    let hints = format!(
        "{}   Tab: next tab  L: activity  q: quit",
        app.view().hints()
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::Gray),
        ))),
        chunks[3],
    );

    if let Some(m) = &app.modal {
        modal::draw_modal(frame, m);
    }
}
