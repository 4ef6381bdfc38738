//! Template discovery, output-path mapping, and rendering.

mod discovery;
mod paths;
mod renderer;

pub use discovery::discover_templates;
pub use paths::{ensure_dir, map_output_path};
pub use renderer::TemplateRenderer;
