use postal_analyzer::core::ConfigProvider;
use postal_analyzer::utils::logger;
use postal_analyzer::{AnalyzerEngine, DefaultConfig, LocalStorage, PostalPipeline, INPUT_FILE};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logger::init_cli_logger(false);

    println!("Analizador de Códigos Postales - Hermosillo");
    println!("Procesando archivo: {}", INPUT_FILE);
    println!();

    let config = DefaultConfig;
    let storage = LocalStorage::new(config.base_dir().to_string());
    let pipeline = PostalPipeline::new(storage, config);
    let engine = AnalyzerEngine::new(pipeline);

    // 報表已在 load 階段輸出；失敗時只印訊息，不設定退出碼
    if let Err(e) = engine.run().await {
        tracing::error!(
            "❌ Analysis failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        println!("{}", e.user_friendly_message());
        println!("Error: No se pudo procesar el archivo {}", INPUT_FILE);
        println!("Verifique que el archivo existe en el directorio actual.");
    }
}
