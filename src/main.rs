use clap::Parser;
use transcript_tracker::utils::{logger, validation::Validate};
use transcript_tracker::{
    CliConfig, LocalStorage, SessionController, TerminalPrompt, TranscriptStore,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger();

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    let prompt = match TerminalPrompt::new() {
        Ok(prompt) => prompt,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let store = TranscriptStore::new(LocalStorage::new());
    let mut session = SessionController::new(store, prompt, std::io::stdout());

    // 啟動時開啟的檔案若損毀，仍進入選單
    if let Some(path) = config.transcript {
        session = session.open_on_start(path);
    }

    if let Err(e) = session.run().await {
        tracing::error!("Session ended abnormally: {}", e);
        return Err(e.into());
    }

    Ok(())
}
