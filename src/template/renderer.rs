use super::paths::{ensure_dir, map_output_path};
use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::secrets::{self, SecretStore};
use log::info;
use minijinja::syntax::SyntaxConfig;
use minijinja::value::{Rest, Value};
use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use std::fs::{self, File};
use std::path::Path;

/// Renders discovered templates against a secret store.
///
/// One renderer serves one invocation: the engine is configured once with the
/// invocation's delimiter pair and missing-key policy, then driven over each
/// template file in discovery order. The loop is fail-fast; the first error
/// aborts the run with no partial-success reporting.
#[derive(Debug)]
pub struct TemplateRenderer<'a> {
    env: Environment<'static>,
    context: Value,
    config: &'a RenderConfig,
}

impl<'a> TemplateRenderer<'a> {
    /// Build a renderer for one invocation.
    ///
    /// With the continue flag unset, a reference to an absent key fails the
    /// run; with it set, the engine substitutes its default placeholder and
    /// keeps going. Flat stores additionally expose a `first_of` template
    /// function that resolves the first present key among alternate names.
    pub fn new(config: &'a RenderConfig, store: &SecretStore) -> Result<Self> {
        let mut env = Environment::new();

        let syntax = SyntaxConfig::builder()
            .variable_delimiters(
                config.left_delimiter.clone(),
                config.right_delimiter.clone(),
            )
            .build()
            .map_err(|source| RenderError::InvalidDelimiters { source })?;
        env.set_syntax(syntax);

        env.set_undefined_behavior(if config.continue_on_missing_key {
            UndefinedBehavior::Lenient
        } else {
            UndefinedBehavior::Strict
        });

        if let SecretStore::Flat(values) = store {
            let values = values.clone();
            env.add_function(
                "first_of",
                move |names: Rest<String>| -> std::result::Result<String, minijinja::Error> {
                    let candidates: Vec<&str> = names.iter().map(String::as_str).collect();
                    secrets::first_matching_key(&values, &candidates)
                        .map(str::to_string)
                        .map_err(|err| {
                            minijinja::Error::new(ErrorKind::InvalidOperation, err.to_string())
                        })
                },
            );
        }

        Ok(Self {
            env,
            context: store.context(),
            config,
        })
    }

    /// Render every template, in discovery order.
    pub fn render_all(&self, templates: &[impl AsRef<Path>]) -> Result<()> {
        for template in templates {
            self.render_file(template.as_ref())?;
        }
        Ok(())
    }

    fn render_file(&self, template_path: &Path) -> Result<()> {
        let source = fs::read_to_string(template_path)
            .map_err(|source| RenderError::filesystem(template_path, source))?;
        let template = self
            .env
            .template_from_str(&source)
            .map_err(|source| RenderError::Syntax {
                path: template_path.to_path_buf(),
                source,
            })?;

        let output_path = map_output_path(
            template_path,
            &self.config.template_base_dir,
            &self.config.target_base_dir,
        )?;
        if let Some(parent) = output_path.parent() {
            ensure_dir(parent)?;
        }

        // Truncates any previous rendering of the same template.
        let file = File::create(&output_path)
            .map_err(|source| RenderError::filesystem(&output_path, source))?;
        template
            .render_to_write(&self.context, file)
            .map(|_| ())
            .map_err(|source| match source.kind() {
                ErrorKind::UndefinedError => RenderError::MissingKey {
                    path: template_path.to_path_buf(),
                    source,
                },
                _ => RenderError::Render {
                    path: template_path.to_path_buf(),
                    source,
                },
            })?;

        info!("rendered {:?} -> {:?}", template_path, output_path);
        Ok(())
    }
}
