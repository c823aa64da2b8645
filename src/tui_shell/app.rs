use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::ConsoleConfig;
use crate::remote::{ApiError, Endpoints, RemoteClient};
use crate::resource::{Resource, ResourceKind};
use crate::session::SessionStore;

use time::OffsetDateTime;

use super::modal::{self, FormState, FormSubmit, Modal, ModalKind};
use super::view::{RenderCtx, View};
use super::views::{DashboardView, ProfileView, RecordsView};

mod account_actions;
mod activity;
mod event_loop;
mod jobs;
mod record_actions;
mod render;
mod runtime;
mod time_utils;

pub(super) use self::account_actions::{
    confirm_logout, open_change_password, open_create_company, refresh_dashboard,
    refresh_profile,
};
pub(super) use self::activity::{ActivityLog, EntryKind};
use self::jobs::{Completion, Jobs};
pub(super) use self::record_actions::{
    confirm_bulk_delete, confirm_delete, fetch_page, mark_returned, open_create_form,
    open_edit_form,
};
pub(super) use self::runtime::run;
pub(super) use self::time_utils::fmt_clock;

/// Deferred work a view hands back to the app.
pub(super) type AppAction = Box<dyn FnOnce(&mut App)>;

pub(super) struct App {
    pub(super) config: ConsoleConfig,
    pub(super) session: Arc<SessionStore>,
    pub(super) client: Arc<RemoteClient>,
    pub(super) log_file: Option<PathBuf>,

    pub(super) activity: ActivityLog,
    pub(super) modal: Option<Modal>,

    /// One per tab, in tab order.
    pub(super) views: Vec<Box<dyn View>>,
    pub(super) current: usize,

    jobs: Jobs,
    pub(super) quit: bool,
}

impl App {
    pub(super) fn new(opts: crate::tui::TuiRunOptions) -> Result<Self> {
        let client = RemoteClient::with_timeout(
            Endpoints::from_config(&opts.config),
            opts.session.clone(),
            Duration::from_secs(opts.config.timeout_secs),
        )?;
        let size = opts.config.page_size;
        let views: Vec<Box<dyn View>> = vec![
            Box::new(DashboardView::default()),
            Box::new(RecordsView::<crate::model::Car>::new(size)),
            Box::new(RecordsView::<crate::model::Customer>::new(size)),
            Box::new(RecordsView::<crate::model::Lease>::new(size)),
            Box::new(RecordsView::<crate::model::Transaction>::new(size)),
            Box::new(ProfileView::default()),
        ];
        Ok(Self {
            config: opts.config,
            session: opts.session,
            client: Arc::new(client),
            log_file: opts.log_file,
            activity: ActivityLog::default(),
            modal: None,
            views,
            current: 0,
            jobs: Jobs::new(),
            quit: false,
        })
    }

    pub(super) fn view(&self) -> &dyn View {
        self.views[self.current].as_ref()
    }

    pub(super) fn view_mut(&mut self) -> &mut dyn View {
        self.views[self.current].as_mut()
    }

    /// The tab holding a view of type `T`, visible or not.
    pub(super) fn view_of_mut<T: View>(&mut self) -> Option<&mut T> {
        self.views
            .iter_mut()
            .find_map(|v| v.as_any_mut().downcast_mut::<T>())
    }

    pub(super) fn records_mut<R: Resource>(&mut self) -> Option<&mut RecordsView<R>> {
        self.view_of_mut::<RecordsView<R>>()
    }

    pub(super) fn busy(&self) -> usize {
        self.jobs.in_flight()
    }

    pub(super) fn switch_tab(&mut self, idx: usize) {
        if idx >= self.views.len() || idx == self.current {
            return;
        }
        self.current = idx;
        self.enter_current();
    }

    pub(super) fn enter_current(&mut self) {
        if !self.session.is_logged_in() {
            self.open_login();
            return;
        }
        if let Some(action) = self.view_mut().on_enter() {
            action(self);
        }
    }

    /// Runs `job` on a worker thread; its completion runs back on the UI thread.
    pub(super) fn spawn<F>(&mut self, job: F)
    where
        F: FnOnce() -> Completion + Send + 'static,
    {
        if let Err(err) = self.jobs.spawn(job) {
            self.push_error(format!("start background task: {:#}", err));
        }
    }

    pub(super) fn push_info(&mut self, text: impl Into<String>) {
        self.activity.push(EntryKind::Info, text.into());
    }

    pub(super) fn push_error(&mut self, text: impl Into<String>) {
        self.activity.push(EntryKind::Error, text.into());
    }

    /// Routes a failed call: auth failures end the session, everything else
    /// lands in the activity log.
    pub(super) fn report_api_error(&mut self, what: &str, err: &ApiError) {
        if err.is_unauthenticated() {
            self.session_expired(&format!("{}: {}", what, err));
            return;
        }
        self.push_error(format!("{}: {}", what, err));
    }

    pub(super) fn session_expired(&mut self, why: &str) {
        self.push_error(why.to_string());
        if let Err(err) = self.session.clear() {
            log::warn!("clear session: {:#}", err);
        }
        self.open_login();
    }

    pub(super) fn note_total(&mut self, kind: ResourceKind, total: u64) {
        if let Some(d) = self.view_of_mut::<DashboardView>() {
            d.totals.insert(kind, total);
            d.updated_at = Some(OffsetDateTime::now_utc());
        }
    }

    pub(super) fn close_modal(&mut self) {
        self.modal = None;
    }

    pub(super) fn open_viewer(&mut self, title: impl Into<String>, lines: Vec<String>) {
        self.modal = Some(Modal::new(title, ModalKind::Viewer, lines));
    }

    pub(super) fn open_confirm(
        &mut self,
        title: impl Into<String>,
        prompt: String,
        on_yes: AppAction,
    ) {
        self.modal = Some(Modal::new(
            title,
            ModalKind::Confirm {
                on_yes: Some(on_yes),
            },
            vec![prompt, String::new(), "Enter/y: yes   Esc/n: no".to_string()],
        ));
    }

    pub(super) fn open_form(
        &mut self,
        title: impl Into<String>,
        form: FormState,
        on_submit: FormSubmit,
    ) {
        self.modal = Some(Modal::new(
            title,
            ModalKind::Form { form, on_submit },
            Vec::new(),
        ));
    }

    pub(super) fn open_activity_log(&mut self) {
        let mut lines = self.activity.lines();
        if lines.is_empty() {
            lines.push("(nothing yet)".to_string());
        }
        if let Some(path) = &self.log_file {
            lines.push(String::new());
            lines.push(format!("full log: {}", path.display()));
        }
        self.open_viewer("Activity", lines);
    }

    /// Resolves the open form after its network call returns.
    pub(super) fn finish_form(&mut self, result: Result<(), ApiError>) {
        let err = match result {
            Ok(()) => {
                if matches!(
                    self.modal.as_ref().map(|m| &m.kind),
                    Some(ModalKind::Form { .. })
                ) {
                    self.close_modal();
                }
                return;
            }
            Err(err) => err,
        };
        if err.is_unauthenticated() {
            self.session_expired(&err.to_string());
            return;
        }
        match self.modal.as_mut().map(|m| &mut m.kind) {
            Some(ModalKind::Form { form, .. }) => {
                form.busy = false;
                form.show_error(&err);
            }
            _ => self.push_error(err.to_string()),
        }
    }

    pub(super) fn open_login(&mut self) {
        if self
            .modal
            .as_ref()
            .is_some_and(|m| m.title == account_actions::LOGIN_TITLE)
        {
            return;
        }
        account_actions::open_login(self);
    }

    /// A new session replaces whatever the old one left behind.
    pub(super) fn after_login(&mut self) {
        for v in &mut self.views {
            v.session_reset();
        }
        self.enter_current();
    }

    pub(super) fn render_ctx(&self) -> RenderCtx {
        RenderCtx {
            now: OffsetDateTime::now_utc(),
        }
    }
}
