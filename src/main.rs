use clap::Parser;
use veeva_jobs::utils::{logger, validation::Validate};
use veeva_jobs::{CareersPipeline, CliConfig, SearchEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting veeva-jobs CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 建立管道並執行搜尋
    let pipeline = CareersPipeline::new(config);
    let engine = SearchEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            println!("{}", report);
        }
        Err(e) => {
            tracing::error!("❌ Job search failed: {}", e);
            eprintln!("❌ Job search failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
