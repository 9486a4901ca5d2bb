pub mod clients_file;
pub mod cli;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::config::clients_file::{sample_clients, ClientsFile};
    use crate::core::renderers::ReportFormat;
    use crate::core::ClientCollection;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, validate_relative_file, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "client-report")]
    #[command(about = "Render the client list as a text or HTML report")]
    pub struct CliConfig {
        /// Report file name, relative to --output-dir [default: report.<format>]
        #[arg(long)]
        pub output: Option<String>,

        #[arg(long, default_value = ".")]
        pub output_dir: String,

        #[arg(long, value_enum, default_value_t = ReportFormat::Html)]
        pub format: ReportFormat,

        /// TOML file with [[clients]] entries; the sample clients are used when omitted
        #[arg(long)]
        pub clients: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs on stderr as JSON lines")]
        pub log_json: bool,
    }

    impl CliConfig {
        pub fn output_file(&self) -> String {
            self.output
                .clone()
                .unwrap_or_else(|| self.format.default_file_name())
        }

        pub fn load_clients(&self) -> Result<ClientCollection> {
            match &self.clients {
                Some(path) => {
                    tracing::debug!("Loading clients from {}", path);
                    Ok(ClientsFile::from_file(path)?.into_collection())
                }
                None => Ok(sample_clients()),
            }
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("output_dir", &self.output_dir)?;
            validate_relative_file("output", &self.output_file())?;
            if let Some(clients) = &self.clients {
                validate_path("clients", clients)?;
            }
            Ok(())
        }
    }

}
