pub mod renderers;
pub mod report;

pub use crate::domain::model::{ClientCollection, ClientRecord};
pub use crate::domain::ports::{ReportRenderer, Storage};
pub use crate::utils::error::Result;
