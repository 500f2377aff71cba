pub mod conference_store;
pub mod schedule_source;

pub use conference_store::ConferenceStore;
pub use schedule_source::ScheduleSource;

#[cfg(test)]
pub use conference_store::MockConferenceStore;
#[cfg(test)]
pub use schedule_source::MockScheduleSource;
