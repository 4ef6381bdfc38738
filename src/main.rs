mod config;
mod error;
mod secrets;
mod template;

use anyhow::{Context, Result};
use clap::Parser;
use config::{RenderConfig, SecretSource};
use log::info;
use secrets::SecretStore;
use std::path::PathBuf;
use template::{TemplateRenderer, discover_templates};

#[derive(Parser)]
#[command(name = "secret-render")]
#[command(about = "Renders secret values into configuration templates at startup", long_about = None)]
#[command(version)]
struct Cli {
    /// Substitute a placeholder instead of failing when a template references a missing key
    #[arg(long, env = "SECRET_RENDER_CONTINUE_ON_MISSING_KEY")]
    continue_on_missing_key: bool,

    /// Left delimiter for template expressions
    #[arg(long, env = "SECRET_RENDER_LEFT_DELIMITER", default_value = config::DEFAULT_LEFT_DELIMITER)]
    left_delimiter: String,

    /// Right delimiter for template expressions
    #[arg(long, env = "SECRET_RENDER_RIGHT_DELIMITER", default_value = config::DEFAULT_RIGHT_DELIMITER)]
    right_delimiter: String,

    /// Absolute path to the directory where secret files are mounted
    #[arg(long, env = "SECRET_RENDER_SECRET_PATH", default_value = config::DEFAULT_SECRET_PATH)]
    secret_path: PathBuf,

    /// Collect secrets from environment variables with this prefix instead of mounted files
    #[arg(
        long,
        env = "SECRET_RENDER_SECRET_ENV_PREFIX",
        conflicts_with = "secret_path"
    )]
    secret_env_prefix: Option<String>,

    /// Absolute path to the directory receiving rendered files
    #[arg(long, env = "SECRET_RENDER_TARGET_BASE_DIR", default_value = config::DEFAULT_TARGET_BASE_DIR)]
    target_base_dir: PathBuf,

    /// Absolute path to the directory containing template files
    #[arg(long, env = "SECRET_RENDER_TEMPLATE_BASE_DIR", default_value = config::DEFAULT_TEMPLATE_BASE_DIR)]
    template_base_dir: PathBuf,
}

impl Cli {
    fn into_config(self) -> RenderConfig {
        let source = match self.secret_env_prefix {
            Some(prefix) => SecretSource::EnvPrefix(prefix),
            None => SecretSource::Files(self.secret_path),
        };
        RenderConfig {
            source,
            left_delimiter: self.left_delimiter,
            right_delimiter: self.right_delimiter,
            continue_on_missing_key: self.continue_on_missing_key,
            template_base_dir: self.template_base_dir,
            target_base_dir: self.target_base_dir,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let config = Cli::parse().into_config();

    let store = SecretStore::collect(&config.source).context("failed to collect secrets")?;

    let templates = discover_templates(&config.template_base_dir)
        .context("failed to read paths of template files")?;
    info!("found {} template file(s)", templates.len());

    let renderer = TemplateRenderer::new(&config, &store)?;
    renderer
        .render_all(&templates)
        .context("failed to render templates")?;

    Ok(())
}
