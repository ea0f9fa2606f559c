//! Core library for the launch-records dashboard.
/// Launch record types and the dataset loader.
pub mod launches;
/// Per-site aggregate views derived from the launch table.
pub mod summary;
/// Pure selector-to-chart-data resolvers.
pub mod view;
/// Process-lifetime dashboard state and cached summaries.
pub mod dashboard;
/// Dashboard settings stored on disk.
pub mod config;
/// Application directory helpers.
pub mod app_dirs;
/// Logging setup for dashboard tooling.
pub mod logging;
