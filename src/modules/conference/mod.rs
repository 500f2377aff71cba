pub mod application;
pub mod descriptors;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{ImportReport, ImportService};
pub use domain::{ConferenceBatch, ConferenceDescriptor, Room, Session, Speaker, Venue};
pub use infrastructure::{FrenchKitClient, JsonFileStore};
