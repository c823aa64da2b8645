use anyhow::Result;

mod app;
mod input;
mod modal;
mod view;
mod views;

// Core TUI types, reachable from submodules via `super::...`.
use app::{App, AppAction, fmt_clock};
use view::{RenderCtx, View, render_view_chrome};

pub(crate) fn run_with_options(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
