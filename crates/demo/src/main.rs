use stockroom_observability::LogConfig;

fn main() -> anyhow::Result<()> {
    let config = LogConfig::from_env();
    let logger = stockroom_observability::file_logger(&config)?;

    stockroom_demo::run(&logger);
    Ok(())
}
