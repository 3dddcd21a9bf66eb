pub mod config;
pub mod error;
pub mod lister;
pub mod model;
pub mod render;
pub mod shutdown;

pub use config::{ModelConfig, ParentRef};
pub use error::{LineageError, Result};
