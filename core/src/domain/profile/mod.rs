pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Profile, ProfileType};
pub use ports::{ProfileRepository, ProfileService};
