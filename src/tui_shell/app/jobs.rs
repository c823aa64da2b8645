use std::sync::mpsc::{self, Receiver, Sender};

use super::*;

/// What a finished background call does to the app, run on the UI thread.
pub(in crate::tui_shell) type Completion = Box<dyn FnOnce(&mut App) + Send>;

/// Worker threads for blocking HTTP calls.
///
/// Each job runs on its own thread and sends back a [`Completion`]; the
/// event loop drains them between frames.
pub(in crate::tui_shell) struct Jobs {
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    in_flight: usize,
}

impl Jobs {
    pub(in crate::tui_shell) fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub(in crate::tui_shell) fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub(in crate::tui_shell) fn spawn<F>(&mut self, job: F) -> Result<()>
    where
        F: FnOnce() -> Completion + Send + 'static,
    {
        let tx = self.tx.clone();
        std::thread::Builder::new()
            .name("crm-console-job".to_string())
            .spawn(move || {
                let done = job();
                // The receiver only goes away when the console is shutting down.
                let _ = tx.send(done);
            })
            .context("spawn worker thread")?;
        self.in_flight += 1;
        Ok(())
    }

    /// Completions that have arrived since the last call.
    pub(in crate::tui_shell) fn drain(&mut self) -> Vec<Completion> {
        let done: Vec<Completion> = self.rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(done.len());
        done
    }
}
