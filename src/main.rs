use anyhow::Context;
use readme_examples::{run, ExtractConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env().add_directive("readme_examples=info".parse()?))
    .with_writer(std::io::stderr)
    .init();

  let config = ExtractConfig::default();
  run(&config).with_context(|| {
    format!(
      "Failed to extract examples from {}",
      config.readme_path.display()
    )
  })?;

  Ok(())
}
