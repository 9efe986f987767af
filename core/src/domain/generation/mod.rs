pub mod ports;
pub mod prompts;
pub mod safety;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use ports::{LLMClient, PromptClient};
pub use value_objects::*;
