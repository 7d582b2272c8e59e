use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let config = valrec_demo::DemoConfig::from_env().context("invalid configuration")?;
    valrec_observability::init_with(config.log_format);

    let report = valrec_demo::run(&config)?;
    tracing::info!(steps = report.lines.len(), codec = ?config.codec, "walkthrough finished");

    for line in &report.lines {
        println!("{line}");
    }
    Ok(())
}
