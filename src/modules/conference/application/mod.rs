pub mod import_service;
pub mod ports;

pub use import_service::{ImportReport, ImportService};
pub use ports::{ConferenceStore, ScheduleSource};
