pub mod external;
pub mod persistence;

pub use external::frenchkit::FrenchKitClient;
pub use persistence::JsonFileStore;
