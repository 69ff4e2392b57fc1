//! Canonical YAML rendering for enriched module definitions.
//!
//! The layout is fixed: identity lines, then the three map fields. An empty
//! map renders `{}` on the key's line; a non-empty map renders one indented
//! line per entry in insertion order. `logic`/`outputs` values are emitted
//! as compact JSON text (strings quoted); input type tags are emitted bare.
//! Nothing here validates type tags or expression strings.

use crate::core::definition::{InputSpec, LogicValue, OrderedMap};
use crate::core::merge::EnrichedDefinition;

pub const DEFAULT_VERSION: &str = "1.0.0";

/// Render an enriched definition into its canonical text form.
///
/// Pure and deterministic: identical input yields byte-identical output.
/// Lines are joined with `\n` and the result carries no trailing newline.
pub fn render(def: &EnrichedDefinition) -> String {
    let version = def.version.as_deref().unwrap_or(DEFAULT_VERSION);
    let description = def.description.as_deref().unwrap_or("");

    [
        format!("name: {}", def.name),
        format!("version: {}", version),
        format!("description: \"{}\"", description),
        render_inputs(&def.inputs),
        render_values("logic", &def.logic),
        render_values("outputs", &def.outputs),
    ]
    .join("\n")
}

fn render_inputs(inputs: &OrderedMap<InputSpec>) -> String {
    if inputs.is_empty() {
        return "inputs: {}".to_string();
    }
    let mut out = String::from("inputs:");
    for (name, spec) in inputs.iter() {
        out.push_str(&format!("\n  {}:\n    type: {}", name, spec.kind));
    }
    out
}

fn render_values(field: &str, values: &OrderedMap<LogicValue>) -> String {
    if values.is_empty() {
        return format!("{}: {{}}", field);
    }
    let mut out = format!("{}:", field);
    for (name, value) in values.iter() {
        out.push_str(&format!("\n  {}: {}", name, value.to_compact_json()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::HybridCatalog;
    use crate::core::definition::ModuleDefinition;
    use crate::core::merge;

    fn enriched(json: &str) -> EnrichedDefinition {
        let def: ModuleDefinition = serde_json::from_str(json).expect("test definition");
        merge::enrich(&def, HybridCatalog::builtin())
    }

    #[test]
    fn empty_fields_render_as_inline_braces() {
        let text = render(&enriched(r#"{"name":"bare"}"#));
        assert_eq!(
            text,
            "name: bare\nversion: 1.0.0\ndescription: \"\"\ninputs: {}\nlogic: {}\noutputs: {}"
        );
    }

    #[test]
    fn version_and_description_defaults_apply() {
        let text = render(&enriched(r#"{"name":"bare","version":"3.2.1"}"#));
        assert!(text.contains("version: 3.2.1"));
        let text = render(&enriched(r#"{"name":"bare","description":"a thing"}"#));
        assert!(text.contains("description: \"a thing\""));
    }

    #[test]
    fn inputs_render_with_nested_type_lines() {
        let text = render(&enriched(
            r#"{"name":"custom_mod","inputs":{"x":{"type":"number"},"label":{"type":"string"}}}"#,
        ));
        assert!(text.contains("inputs:\n  x:\n    type: number\n  label:\n    type: string"));
        assert!(text.contains("logic: {}"));
        assert!(text.contains("outputs: {}"));
    }

    #[test]
    fn hertz_renders_its_catalog_logic_block() {
        let text = render(&enriched(r#"{"name":"max_hertz"}"#));
        assert!(text.contains(
            "logic:\n  state_map: {\"relax\":432,\"focus\":528,\"deep_state\":963,\"sleep\":396}"
        ));
        assert!(text.contains("  mapped_frequency: \"{{ state_map[target_state] || base_hz }}\""));
        assert!(text.contains("outputs:\n  primary_hz: \"{{ normalized_frequency }}\""));
    }

    #[test]
    fn rendering_is_deterministic() {
        let def = enriched(r#"{"name":"max_chakra"}"#);
        assert_eq!(render(&def), render(&def));
    }

    #[test]
    fn no_trailing_newline() {
        let text = render(&enriched(r#"{"name":"max_seo"}"#));
        assert!(!text.ends_with('\n'));
    }
}
