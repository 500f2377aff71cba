pub mod batch;
pub mod config;
pub mod descriptor;
pub mod partner;
pub mod room;
pub mod session;
pub mod speaker;
pub mod venue;

pub use batch::ConferenceBatch;
pub use config::ConferenceConfig;
pub use descriptor::ConferenceDescriptor;
pub use partner::{Partner, PartnerGroup};
pub use room::Room;
pub use session::Session;
pub use speaker::{Link, Speaker};
pub use venue::Venue;
