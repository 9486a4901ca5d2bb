pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::LocalStorage;
pub use config::clients_file::{sample_clients, ClientsFile};
pub use core::renderers::{HtmlRenderer, ReportFormat, TextRenderer};
pub use core::report::ReportWriter;
pub use domain::model::{ClientCollection, ClientRecord};
pub use domain::ports::{ReportRenderer, Storage};
pub use utils::error::{ReportError, Result};
