use anyhow::Result;
use textkit::TextkitConfig;

pub fn run(config: &TextkitConfig) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
