use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::{FormState, Modal, ModalKind};

pub(in crate::tui_shell) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 90);
    let h = area.height.saturating_sub(6).clamp(8, 24);
    let box_area = Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    };

    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal_title(modal));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    match &modal.kind {
        ModalKind::Viewer | ModalKind::Confirm { .. } => {
            let lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();
            let scroll = modal.scroll.min(modal.lines.len().saturating_sub(1)) as u16;
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((scroll, 0)),
                inner,
            );
        }
        ModalKind::Form { form, .. } => draw_form(frame, form, inner),
    }
}

fn draw_form(frame: &mut ratatui::Frame, form: &FormState, area: Rect) {
    let err_h = if form.errors.is_empty() {
        0
    } else {
        (form.errors.len() as u16 + 1).min(6)
    };
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(err_h),
            Constraint::Length(1),
        ])
        .split(area);

    let label_w = form
        .fields
        .iter()
        .map(|f| f.label.len() + usize::from(f.required))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(form.fields.len());
    for (i, f) in form.fields.iter().enumerate() {
        let label = format!(
            "{:>width$}{} ",
            f.label,
            if f.required { "*" } else { "" },
            width = label_w - usize::from(f.required)
        );
        let value = if i == form.focus {
            form.input.display(form.is_masked(i))
        } else if form.is_masked(i) {
            "*".repeat(form.values[i].chars().count())
        } else {
            form.values[i].clone()
        };
        let style = if i == form.focus {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(label, Style::default().fg(Color::Yellow)),
            Span::styled(value, style),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), parts[0]);

    if !form.errors.is_empty() {
        let errs: Vec<Line> = form
            .errors
            .iter()
            .map(|e| Line::from(Span::styled(e.as_str(), Style::default().fg(Color::Red))))
            .collect();
        frame.render_widget(
            Paragraph::new(errs)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::TOP)),
            parts[1],
        );
    }

    let footer = if form.busy {
        "saving..."
    } else {
        "Tab/↑↓: field  Enter: save  Esc: cancel   (* required)"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(footer, Style::default().fg(Color::Gray))),
        parts[2],
    );

    if !form.busy && form.focus < form.fields.len() {
        let x = parts[0].x + label_w as u16 + 1 + form.input.cursor as u16;
        let y = parts[0].y + form.focus as u16;
        if y < parts[0].y + parts[0].height {
            frame.set_cursor_position((x, y));
        }
    }
}

fn modal_title(modal: &Modal) -> Line<'static> {
    let mut spans = vec![
        Span::styled(modal.title.clone(), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled("Esc", Style::default().fg(Color::Gray)),
    ];
    if !matches!(modal.kind, ModalKind::Viewer) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Enter", Style::default().fg(Color::Gray)));
    }
    Line::from(spans)
}
