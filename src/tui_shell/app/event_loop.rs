use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    app.enter_current();
    loop {
        for done in app.jobs.drain() {
            done(app);
        }

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

pub(in crate::tui_shell) fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit = true;
        return;
    }

    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    if !app.view().captures_input() {
        let tabs = app.views.len();
        match key.code {
            KeyCode::Char('q') => {
                app.quit = true;
                return;
            }
            KeyCode::Tab => {
                app.switch_tab((app.current + 1) % tabs);
                return;
            }
            KeyCode::BackTab => {
                app.switch_tab((app.current + tabs - 1) % tabs);
                return;
            }
            KeyCode::Char(c @ '1'..='9') => {
                let idx = (c as usize) - ('1' as usize);
                app.switch_tab(idx);
                return;
            }
            KeyCode::Char('L') => {
                app.open_activity_log();
                return;
            }
            _ => {}
        }
    }

    if let Some(action) = app.view_mut().handle_key(key) {
        action(app);
    }
}
