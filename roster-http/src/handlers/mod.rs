use roster::{SearchService, SyncService};

pub mod employees;
pub mod health;
pub mod search;

/// Read-only per-process state shared by every request. Built through
/// [`crate::Services::app_state`].
pub struct AppState {
    pub search: SearchService,
    pub sync: SyncService,
}

pub use employees::{delete_employee, insert_employee, update_employee};
pub use health::health;
pub use search::search_employees;
