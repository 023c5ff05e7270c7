use clap::Parser;
use postal_analyzer::config::toml_config::TomlConfig;
use postal_analyzer::core::ConfigProvider;
use postal_analyzer::utils::{logger, validation::Validate};
use postal_analyzer::{AnalyzerEngine, LocalStorage, PostalPipeline};

#[derive(Parser)]
#[command(name = "toml_report")]
#[command(about = "Postal code report driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "postal-report.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Validate the configuration and check the input file without processing it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based postal report");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        perform_dry_run(&config).await?;
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    println!("Analizador de Códigos Postales - {}", config.analysis.name);
    println!("Procesando archivo: {}", config.input_path());
    println!();

    let input_path = config.input_path().to_string();
    let storage = LocalStorage::new(config.base_dir().to_string());
    let pipeline = PostalPipeline::new(storage, config);
    let engine = AnalyzerEngine::new_with_monitoring(pipeline, monitor_enabled);

    if let Err(e) = engine.run().await {
        tracing::error!("❌ Analysis failed: {} (Category: {:?})", e, e.category());
        println!("{}", e.user_friendly_message());
        println!("Error: No se pudo procesar el archivo {}", input_path);
        println!("Verifique que el archivo existe en el directorio actual.");
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("  Analysis: {}", config.analysis.name);
    if let Some(description) = &config.analysis.description {
        tracing::info!("  Description: {}", description);
    }
    tracing::info!("  Input: {}", config.resolved_input_path().display());
    tracing::info!("  Monitoring: {}", config.monitoring_enabled());
}

async fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    let path = config.resolved_input_path();

    match tokio::fs::metadata(&path).await {
        Ok(metadata) if metadata.is_file() => {
            println!("✅ {} ({} bytes) is ready to be processed", path.display(), metadata.len());
        }
        Ok(_) => {
            println!("❌ {} is not a regular file", path.display());
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            println!("❌ {} does not exist", path.display());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
