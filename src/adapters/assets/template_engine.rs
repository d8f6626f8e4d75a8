//! Embedded minijinja templates for Vagrantfiles and Terraform descriptors.

use include_dir::{Dir, include_dir};
use minijinja::Environment;
use serde::Serialize;

use crate::domain::AppError;

static TEMPLATES_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Quote a value as a single-quoted Ruby string.
fn ruby_str(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Quote a value as an HCL string, disabling interpolation.
fn hcl_str(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"").replace("${", "$${");
    format!("\"{}\"", escaped)
}

/// Template environment with every embedded template registered.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        env.add_filter("ruby_str", |value: &str| -> String { ruby_str(value) });
        env.add_filter("hcl_str", |value: &str| -> String { hcl_str(value) });

        for file in TEMPLATES_DIR.files() {
            let name = file.path().to_str().ok_or_else(|| {
                AppError::config_error(format!("Template path is not UTF-8: {:?}", file.path()))
            })?;
            let source = file.contents_utf8().ok_or_else(|| AppError::Render {
                template: name.to_string(),
                details: "template is not valid UTF-8".to_string(),
            })?;
            env.add_template(name, source).map_err(|e| AppError::Render {
                template: name.to_string(),
                details: e.to_string(),
            })?;
        }

        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, template_name: &str, ctx: S) -> Result<String, AppError> {
        let template = self.env.get_template(template_name).map_err(|e| AppError::Render {
            template: template_name.to_string(),
            details: e.to_string(),
        })?;

        template.render(ctx).map_err(|e| AppError::Render {
            template: template_name.to_string(),
            details: e.to_string(),
        })
    }
}
