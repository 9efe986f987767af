pub mod ports;
pub mod services;
pub mod value_objects;

pub use ports::KeyValueStore;
pub use value_objects::StorageKey;
