use std::path::Path;

use serde::Serialize;

use crate::cli::config::AppConfig;
use crate::definition::definition_model::FormDefinition;
use crate::definition::renderer::render_definition;
use crate::identity::descriptor::{AttributeDescriptor, derive};

// ============================================================================
// render subcommand
// ============================================================================

/// Render every definition found at `form_path`, writing to `output` (or the
/// configured output, or stdout).
pub fn cmd_render(
    form_path: &str,
    output: Option<&str>,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let definitions = load_definitions(form_path)?;

    if definitions.is_empty() {
        tracing::warn!(path = form_path, "no form definitions found");
        return Ok(());
    }

    tracing::info!(count = definitions.len(), "rendering form definitions");

    let mut fragments = Vec::with_capacity(definitions.len());
    for definition in &definitions {
        fragments.push(render_definition(definition, &config.defaults)?);
    }
    let mut rendered = fragments.join("\n");
    rendered.push('\n');

    match output.or(config.render.output.as_deref()) {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            tracing::info!(path, "wrote rendered forms");
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Load definitions from a single YAML file or a directory of YAML files.
pub fn load_definitions(path: &str) -> Result<Vec<FormDefinition>, Box<dyn std::error::Error>> {
    let metadata = std::fs::metadata(path)?;
    if metadata.is_dir() {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let p = entry?.path();
            if p.extension().is_some_and(|e| e == "yaml" || e == "yml") {
                paths.push(p);
            }
        }
        // Sort by file name for deterministic order
        paths.sort();

        let mut definitions = Vec::with_capacity(paths.len());
        for p in &paths {
            definitions.push(load_definition(p)?);
        }
        Ok(definitions)
    } else {
        Ok(vec![load_definition(Path::new(path))?])
    }
}

fn load_definition(path: &Path) -> Result<FormDefinition, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let definition: FormDefinition = serde_yaml::from_str(&content)?;
    tracing::debug!(path = %path.display(), object = %definition.object_name, "loaded definition");
    Ok(definition)
}

// ============================================================================
// ids subcommand
// ============================================================================

/// Every id the builder would derive for one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityReport {
    pub id: String,
    pub name: String,
    pub hint_id: String,
    pub error_id: String,
    pub conditional_id: String,
}

pub fn identity_report(object: &str, attribute: &str, value: Option<&str>) -> IdentityReport {
    let mut descriptor = AttributeDescriptor::new(object, attribute);
    if let Some(value) = value {
        descriptor = descriptor.with_value(value);
    }
    let identity = derive(&descriptor);

    IdentityReport {
        hint_id: identity.hint_id(),
        error_id: identity.error_id(),
        conditional_id: identity.conditional_id(),
        id: identity.id,
        name: identity.name,
    }
}

pub fn cmd_ids(
    object: &str,
    attribute: &str,
    value: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = identity_report(object, attribute, value);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
