pub mod modules;
pub mod shared;

pub use modules::conference::{
    ConferenceBatch, ConferenceDescriptor, FrenchKitClient, ImportReport, ImportService,
    JsonFileStore,
};
pub use shared::errors::{AppError, AppResult};
