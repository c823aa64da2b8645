pub(super) mod dashboard;
pub(super) mod profile;
pub(super) mod records;

pub(in crate::tui_shell) use dashboard::DashboardView;
pub(in crate::tui_shell) use profile::ProfileView;
pub(in crate::tui_shell) use records::RecordsView;
