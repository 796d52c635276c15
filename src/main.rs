use anyhow::Result;

fn main() -> Result<()> {
    cgie::run_gui().map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}
