//! Catalog-precedence enrichment of module definitions.

use crate::core::catalog::HybridCatalog;
use crate::core::definition::{InputSpec, LogicValue, ModuleDefinition, OrderedMap};

/// A definition after catalog-precedence merging, ready for rendering.
///
/// Constructed per render call and discarded afterwards; neither the
/// catalog nor the incoming definition is mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedDefinition {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub inputs: OrderedMap<InputSpec>,
    pub logic: OrderedMap<LogicValue>,
    pub outputs: OrderedMap<LogicValue>,
}

/// Combine a definition with its catalog entry, if any.
///
/// `name`/`version`/`description` always come from the definition. When the
/// catalog has an entry for `name`, that entry's `inputs`/`logic`/`outputs`
/// replace the definition's wholesale; otherwise the definition's own fields
/// pass through untouched. There is no per-key merge within a field.
pub fn enrich(def: &ModuleDefinition, catalog: &HybridCatalog) -> EnrichedDefinition {
    match catalog.get(&def.name) {
        Some(entry) => EnrichedDefinition {
            name: def.name.clone(),
            version: def.version.clone(),
            description: def.description.clone(),
            inputs: entry.inputs.clone(),
            logic: entry.logic.clone(),
            outputs: entry.outputs.clone(),
        },
        None => EnrichedDefinition {
            name: def.name.clone(),
            version: def.version.clone(),
            description: def.description.clone(),
            inputs: def.inputs.clone(),
            logic: def.logic.clone(),
            outputs: def.outputs.clone(),
        },
    }
}
