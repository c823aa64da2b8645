use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState, Wrap};

use super::RecordsView;
use crate::controller::{FailureKind, ListState, PendingOp};
use crate::resource::Resource;
use crate::tui_shell::render_view_chrome;

pub(super) fn render<R: Resource>(view: &RecordsView<R>, frame: &mut ratatui::Frame, area: Rect) {
    let inner = render_view_chrome(frame, R::KIND.title(), view.updated_at, area);

    let show_search = view.searching || !view.list.search_term().is_empty();
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(u16::from(show_search)),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    if show_search {
        let style = if view.searching {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("search: ", style),
                Span::raw(view.search.buf.clone()),
            ])),
            parts[0],
        );
        if view.searching {
            let x = parts[0].x + "search: ".len() as u16 + view.search.cursor as u16;
            frame.set_cursor_position((x, parts[0].y));
        }
    }

    match state_message(view) {
        Some((msg, color)) => frame.render_widget(
            Paragraph::new(Span::styled(msg, Style::default().fg(color)))
                .wrap(Wrap { trim: false }),
            parts[1],
        ),
        None => render_table(view, frame, parts[1]),
    }

    frame.render_widget(Paragraph::new(footer(view)), parts[2]);
}

fn state_message<R: Resource>(view: &RecordsView<R>) -> Option<(String, Color)> {
    let kind = R::KIND;
    match view.list.state() {
        ListState::Idle => Some((format!("{} not loaded yet (r to load)", kind), Color::Gray)),
        ListState::Loading if view.list.records().is_empty() => {
            Some(("loading...".to_string(), Color::Gray))
        }
        ListState::Empty => Some((format!("No {} found.", kind), Color::Gray)),
        ListState::Failed(FailureKind::Unauthenticated) => Some((
            "Session ended. Log in again to continue.".to_string(),
            Color::Red,
        )),
        ListState::Failed(FailureKind::FetchError(msg)) => Some((
            format!("Could not load {}: {} (r to retry)", kind, msg),
            Color::Red,
        )),
        ListState::Loaded if view.list.filtered().is_empty() => Some((
            format!("No {} match \"{}\" on this page.", kind, view.list.search_term()),
            Color::Gray,
        )),
        ListState::Loading | ListState::Loaded => None,
    }
}

fn render_table<R: Resource>(view: &RecordsView<R>, frame: &mut ratatui::Frame, area: Rect) {
    let marking = view.list.selection_mode();

    let mut header_cells = vec![Cell::from("")];
    header_cells.extend(R::columns().iter().map(|c| Cell::from(*c)));
    let header = Row::new(header_cells).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = view
        .list
        .filtered()
        .iter()
        .map(|r| {
            let mark = match (marking, view.list.is_selected(r.id())) {
                (false, _) => "",
                (true, false) => "[ ]",
                (true, true) => "[x]",
            };
            let mut cells = vec![Cell::from(mark)];
            cells.extend(r.row().into_iter().map(Cell::from));
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(if marking { 3 } else { 0 })];
    widths.extend(R::columns().iter().map(|_| Constraint::Fill(1)));

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = TableState::default();
    if !view.list.filtered().is_empty() {
        state.select(Some(view.cursor));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn footer<R: Resource>(view: &RecordsView<R>) -> Line<'static> {
    let list = &view.list;
    let mut spans = vec![Span::styled(
        format!(
            "page {}/{} · total {} · size {}",
            list.display_page(),
            list.total_pages(),
            list.total_count(),
            list.page_size()
        ),
        Style::default().fg(Color::Gray),
    )];
    if list.selection_mode() {
        spans.push(Span::styled(
            format!("  selecting: {} marked (space, D deletes)", list.selected_ids().len()),
            Style::default().fg(Color::Cyan),
        ));
    }
    if let Some(op) = list.pending() {
        let text = match op {
            PendingOp::Create => "creating...".to_string(),
            PendingOp::Update(id) => format!("saving #{}...", id),
            PendingOp::Delete(id) => format!("deleting #{}...", id),
            PendingOp::BulkDelete(ids) => format!("deleting {}...", ids.len()),
        };
        spans.push(Span::styled(format!("  {}", text), Style::default().fg(Color::Cyan)));
    }
    if list.is_loading() {
        spans.push(Span::styled("  loading...", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}
