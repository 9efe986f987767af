pub mod entities;
pub mod ports;
pub mod services;

pub use entities::OrderListEntry;
pub use ports::OrderListService;
