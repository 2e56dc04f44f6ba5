pub mod session;
pub mod store;

pub use crate::domain::ports::{Input, Prompt, Storage};
pub use crate::utils::error::Result;
