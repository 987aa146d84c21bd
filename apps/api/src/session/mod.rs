// Per-session workspace: the navigation shell plus the three wizard panels.
// Sessions live in memory only and are dropped explicitly or with the process.

pub mod handlers;
pub mod store;
pub mod workspace;
