pub mod api;
pub mod entry;
mod errors;
pub mod logging;
pub mod plan;
mod preview;
pub mod scaffold;

pub use errors::{FileOperation, IoError};
