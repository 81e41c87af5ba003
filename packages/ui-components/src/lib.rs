pub mod components;
pub mod layout;

pub use components::*;
