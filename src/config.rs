use std::path::PathBuf;

pub const DEFAULT_LEFT_DELIMITER: &str = "{{";
pub const DEFAULT_RIGHT_DELIMITER: &str = "}}";
pub const DEFAULT_SECRET_PATH: &str = "/var/run/secrets/render/secrets";
pub const DEFAULT_TARGET_BASE_DIR: &str = "/var/run/secrets/render/rendered";
pub const DEFAULT_TEMPLATE_BASE_DIR: &str = "/var/run/secrets/render/templates";

/// Where secret values come from for one invocation.
///
/// The two sources produce different template-context shapes: mounted files
/// yield grouped secrets addressed as `Secrets.<group>.<key>`, environment
/// variables yield a flat namespace addressed by key alone. Exactly one
/// source is active per run.
#[derive(Debug, Clone)]
pub enum SecretSource {
    /// Directory tree of mounted secret files (one file per key, one
    /// directory per group).
    Files(PathBuf),
    /// Environment variables whose names carry this prefix.
    EnvPrefix(String),
}

/// Settings for one rendering run. Built once at startup, read-only afterward.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub source: SecretSource,
    pub left_delimiter: String,
    pub right_delimiter: String,
    pub continue_on_missing_key: bool,
    pub template_base_dir: PathBuf,
    pub target_base_dir: PathBuf,
}
