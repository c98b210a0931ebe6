use stockroom_cli::{DemoConfig, run_demo};
use stockroom_infra::JsonFileStore;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = DemoConfig::from_env();
    tracing::info!(
        path = %config.inventory_path.display(),
        threshold = config.low_stock_threshold,
        "starting inventory demo"
    );

    let repo = JsonFileStore::new(&config.inventory_path);
    let stdout = std::io::stdout();
    run_demo(&repo, config.low_stock_threshold, &mut stdout.lock())?;

    Ok(())
}
