pub mod error;

pub use error::{BoxResult, TocError, TocResult};
