pub mod entities;
pub mod rooms;

pub use entities::{
    ConferenceBatch, ConferenceConfig, ConferenceDescriptor, Link, Partner, PartnerGroup, Room,
    Session, Speaker, Venue,
};
