use anyhow::Context;
use clap::Parser;
use rulegen::utils::{logger, validation::Validate};
use rulegen::{CliConfig, HttpFetcher, LocalStorage, RuleGenEngine, SourceCatalog};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting rulegen");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let catalog =
        SourceCatalog::load(&config.data_path).context("Failed to load source catalog")?;
    let fetcher = HttpFetcher::new(config.cache_path.as_str())
        .context("Failed to build HTTP client")?;
    let storage = LocalStorage::new(config.output_path.clone());

    let engine = RuleGenEngine::new(fetcher, storage, config, catalog);

    match engine.run().await {
        Ok(artifacts) => {
            tracing::info!("Generation complete, {} artifacts written", artifacts.len());
            println!("✅ Generation complete!");
            for path in artifacts {
                println!("📁 {}", path);
            }
        }
        Err(e) => {
            tracing::error!("Generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
