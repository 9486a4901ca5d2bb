use clap::Parser;
use client_report::utils::{logger, validation::Validate};
use client_report::{CliConfig, LocalStorage, ReportWriter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting client-report");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let clients = match config.load_clients() {
        Ok(clients) => clients,
        Err(e) => {
            tracing::error!("Loading clients failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    tracing::info!("Loaded {} clients", clients.len());

    let renderer = config.format.renderer();
    let storage = LocalStorage::new(config.output_dir.clone());
    let output_file = config.output_file();
    let writer = ReportWriter::new(storage);

    match writer.save(renderer.as_ref(), &clients, &output_file).await {
        Ok(()) => {
            let full_path = writer.storage().full_path(&output_file);
            println!("📁 Report saved to: {}", full_path.display());
        }
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    }

    Ok(())
}
