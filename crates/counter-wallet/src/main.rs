//! counter-wallet: increment an on-chain counter through an external wallet

use eframe::egui;
use eyre::WrapErr;

mod app;
mod bridge;
mod state;
mod ui;

fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!(
        git_hash = env!("GIT_HASH"),
        build_time = env!("BUILD_TIME"),
        "Starting counter-wallet"
    );

    let config = counter_wallet_adapters::AdapterConfig::from_env()
        .wrap_err("invalid COUNTER_WALLET_* configuration")?;
    let bridge = bridge::WalletBridge::new(config).wrap_err("failed to start wallet bridge")?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Counter Wallet")
            .with_inner_size([520.0, 560.0])
            .with_min_inner_size([380.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Counter Wallet",
        native_options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc, bridge)))),
    )
    .map_err(|e| eyre::eyre!("eframe exited with error: {e}"))
}
