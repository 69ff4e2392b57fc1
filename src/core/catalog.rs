//! Built-in default module table and hybrid logic catalog.
//!
//! Static reference data, constructed once behind a `LazyLock` and handed to
//! the merger by reference. Nothing mutates it after startup.

use crate::core::definition::{InputSpec, LogicValue, ModuleDefinition, OrderedMap};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

#[derive(Clone, Copy, Debug)]
pub struct DefaultModule {
    pub name: &'static str,
    pub description: &'static str,
}

/// The built-in module set, in generation order.
pub const DEFAULT_MODULES: &[DefaultModule] = &[
    DefaultModule {
        name: "max_resonance",
        description: "Core resonance engine for harmonics, coherence, and field amplification.",
    },
    DefaultModule {
        name: "max_hertz",
        description: "Base frequency selector and normalization engine.",
    },
    DefaultModule {
        name: "max_energy",
        description: "Energy field amplifier and distribution engine.",
    },
    DefaultModule {
        name: "max_theta",
        description: "Theta brainwave tuning and deep-state induction.",
    },
    DefaultModule {
        name: "max_binaural",
        description: "Binaural beat generator for dual-channel entrainment.",
    },
    DefaultModule {
        name: "max_hemisync",
        description: "Hemispheric synchronization and coherence engine.",
    },
    DefaultModule {
        name: "max_solfeggio",
        description: "Solfeggio frequency selector and mapping engine.",
    },
    DefaultModule {
        name: "max_chakra",
        description: "Chakra tuning, mapping, and alignment engine.",
    },
    DefaultModule {
        name: "max_pineal",
        description: "Pineal activation and signal clarity engine.",
    },
    DefaultModule {
        name: "max_lucid",
        description: "Lucid dreaming induction and stabilization engine.",
    },
    DefaultModule {
        name: "max_astral",
        description: "Astral projection readiness and launch window engine.",
    },
    DefaultModule {
        name: "max_gateway",
        description: "Gateway protocol for transitioning between states and layers.",
    },
    DefaultModule {
        name: "max_portal",
        description: "Portal targeting and stabilization engine.",
    },
    DefaultModule {
        name: "max_vortex",
        description: "Vortex spin, pull, and field curvature engine.",
    },
    DefaultModule {
        name: "max_dimension",
        description: "Dimensional address, tuning, and lock-in engine.",
    },
    DefaultModule {
        name: "max_quantum",
        description: "Quantum possibility field and superposition engine.",
    },
    DefaultModule {
        name: "max_timeline",
        description: "Timeline selection, branching, and alignment engine.",
    },
    DefaultModule {
        name: "max_manifest",
        description: "Manifestation projection and materialization engine.",
    },
    DefaultModule {
        name: "max_ux",
        description: "User experience mapping, clarity, and guidance engine.",
    },
    DefaultModule {
        name: "max_feedback",
        description: "Feedback capture, reflection, and adaptation engine.",
    },
    DefaultModule {
        name: "max_logs",
        description: "Event logging and traceability engine.",
    },
    DefaultModule {
        name: "max_secure",
        description: "Security, integrity, and access control engine.",
    },
    DefaultModule {
        name: "max_remote",
        description: "Remote control, signaling, and command routing engine.",
    },
    DefaultModule {
        name: "max_social",
        description: "Social signal, sharing, and resonance propagation engine.",
    },
    DefaultModule {
        name: "max_seo",
        description: "Discovery, keyword, and search alignment engine.",
    },
];

/// Default enrichment for one module name. A present entry replaces all
/// three field maps of the incoming definition wholesale.
#[derive(Debug, Clone, Default)]
pub struct CatalogEntry {
    pub inputs: OrderedMap<InputSpec>,
    pub logic: OrderedMap<LogicValue>,
    pub outputs: OrderedMap<LogicValue>,
}

#[derive(Debug)]
pub struct HybridCatalog {
    entries: FxHashMap<&'static str, CatalogEntry>,
}

impl HybridCatalog {
    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static HybridCatalog {
        &BUILTIN
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Bare definitions for the built-in module set, in generation order.
pub fn default_definitions() -> Vec<ModuleDefinition> {
    DEFAULT_MODULES
        .iter()
        .map(|module| ModuleDefinition {
            name: module.name.to_string(),
            description: Some(module.description.to_string()),
            ..ModuleDefinition::default()
        })
        .collect()
}

static BUILTIN: LazyLock<HybridCatalog> = LazyLock::new(build_catalog);

fn inputs<const N: usize>(pairs: [(&str, &str); N]) -> OrderedMap<InputSpec> {
    pairs
        .into_iter()
        .map(|(name, tag)| (name.to_string(), InputSpec { kind: tag.to_string() }))
        .collect()
}

fn values<const N: usize>(pairs: [(&str, LogicValue); N]) -> OrderedMap<LogicValue> {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

fn expr(text: &str) -> LogicValue {
    LogicValue::from(text)
}

fn int(value: i64) -> LogicValue {
    LogicValue::from(value)
}

fn num(value: f64) -> LogicValue {
    LogicValue::from(value)
}

fn table<const N: usize>(pairs: [(&str, LogicValue); N]) -> LogicValue {
    LogicValue::Map(values(pairs))
}

fn list<const N: usize>(items: [&str; N]) -> LogicValue {
    LogicValue::Seq(items.into_iter().map(expr).collect())
}

fn entry(
    inputs: OrderedMap<InputSpec>,
    logic: OrderedMap<LogicValue>,
    outputs: OrderedMap<LogicValue>,
) -> CatalogEntry {
    CatalogEntry {
        inputs,
        logic,
        outputs,
    }
}

fn build_catalog() -> HybridCatalog {
    let mut entries: FxHashMap<&'static str, CatalogEntry> = FxHashMap::default();

    entries.insert(
        "max_resonance",
        entry(
            inputs([
                ("base_frequency", "number"),
                ("carrier_frequency", "number"),
                ("amplitude", "number"),
                ("intention", "string"),
            ]),
            values([
                ("resonance_ratio", expr("{{ carrier_frequency / base_frequency }}")),
                ("harmonic_index", expr("{{ resonance_ratio * amplitude }}")),
                ("coherence_factor", expr("{{ harmonic_index | abs }}")),
                ("intention_imprint", expr("{{ intention }}")),
            ]),
            values([
                ("resonance_field", expr("{{ coherence_factor }}")),
                ("harmonic_profile", expr("{{ harmonic_index }}")),
                ("imprinted_intention", expr("{{ intention_imprint }}")),
            ]),
        ),
    );

    entries.insert(
        "max_hertz",
        entry(
            inputs([("target_state", "string"), ("base_hz", "number")]),
            values([
                (
                    "state_map",
                    table([
                        ("relax", int(432)),
                        ("focus", int(528)),
                        ("deep_state", int(963)),
                        ("sleep", int(396)),
                    ]),
                ),
                ("mapped_frequency", expr("{{ state_map[target_state] || base_hz }}")),
                ("normalized_frequency", expr("{{ mapped_frequency }}")),
            ]),
            values([
                ("primary_hz", expr("{{ normalized_frequency }}")),
                ("state_tag", expr("{{ target_state }}")),
            ]),
        ),
    );

    entries.insert(
        "max_energy",
        entry(
            inputs([
                ("source_frequency", "number"),
                ("resonance_field", "number"),
                ("intensity", "number"),
                ("intention", "string"),
            ]),
            values([
                ("base_energy", expr("{{ source_frequency * intensity }}")),
                ("amplified_energy", expr("{{ base_energy * (1 + resonance_field) }}")),
                ("stabilized_energy", expr("{{ amplified_energy }}")),
                ("encoded_intention", expr("{{ intention }}")),
            ]),
            values([
                ("energy_field_strength", expr("{{ stabilized_energy }}")),
                ("energy_signature", expr("{{ encoded_intention }}")),
            ]),
        ),
    );

    entries.insert(
        "max_theta",
        entry(
            inputs([
                ("base_hz", "number"),
                ("depth", "number"),
                ("intention", "string"),
            ]),
            values([
                ("theta_center", int(7)),
                ("theta_band_low", int(4)),
                ("theta_band_high", int(8)),
                ("tuned_frequency", expr("{{ theta_center + (depth * 0.5) }}")),
                (
                    "clamped_frequency",
                    expr("{{ [theta_band_low, tuned_frequency, theta_band_high] | sort | slice:1,1 | first }}"),
                ),
                ("intention_channel", expr("{{ intention }}")),
            ]),
            values([
                ("theta_frequency", expr("{{ clamped_frequency }}")),
                ("theta_intention", expr("{{ intention_channel }}")),
            ]),
        ),
    );

    entries.insert(
        "max_binaural",
        entry(
            inputs([
                ("carrier_frequency", "number"),
                ("offset", "number"),
                ("mode", "string"),
            ]),
            values([
                (
                    "mode_map",
                    table([
                        ("theta", int(7)),
                        ("alpha", int(10)),
                        ("delta", int(3)),
                        ("beta", int(18)),
                    ]),
                ),
                ("effective_offset", expr("{{ mode_map[mode] || offset }}")),
                ("left_channel", expr("{{ carrier_frequency - (effective_offset / 2) }}")),
                ("right_channel", expr("{{ carrier_frequency + (effective_offset / 2) }}")),
            ]),
            values([
                ("left_hz", expr("{{ left_channel }}")),
                ("right_hz", expr("{{ right_channel }}")),
                ("binaural_mode", expr("{{ mode }}")),
            ]),
        ),
    );

    entries.insert(
        "max_hemisync",
        entry(
            inputs([
                ("left_hz", "number"),
                ("right_hz", "number"),
                ("resonance_field", "number"),
            ]),
            values([
                ("frequency_delta", expr("{{ (right_hz - left_hz) | abs }}")),
                ("sync_index", expr("{{ 1 / (1 + frequency_delta) }}")),
                ("coherence_score", expr("{{ sync_index * (1 + resonance_field) }}")),
            ]),
            values([
                ("hemispheric_coherence", expr("{{ coherence_score }}")),
                ("sync_delta", expr("{{ frequency_delta }}")),
            ]),
        ),
    );

    entries.insert(
        "max_solfeggio",
        entry(
            inputs([("code", "string"), ("intention", "string")]),
            values([
                (
                    "solfeggio_map",
                    table([
                        ("396", expr("liberation from fear and guilt")),
                        ("417", expr("facilitating change")),
                        ("528", expr("transformation and miracles")),
                        ("639", expr("connection and relationships")),
                        ("741", expr("intuition and problem solving")),
                        ("852", expr("spiritual order")),
                        ("963", expr("oneness and unity")),
                    ]),
                ),
                ("frequency_value", expr("{{ code | to_number }}")),
                ("meaning", expr("{{ solfeggio_map[code] }}")),
                ("encoded_intention", expr("{{ intention }}")),
            ]),
            values([
                ("solfeggio_hz", expr("{{ frequency_value }}")),
                ("solfeggio_meaning", expr("{{ meaning }}")),
                ("solfeggio_intention", expr("{{ encoded_intention }}")),
            ]),
        ),
    );

    entries.insert(
        "max_chakra",
        entry(
            inputs([
                ("chakra", "string"),
                ("intensity", "number"),
                ("intention", "string"),
            ]),
            values([
                (
                    "chakra_map_hz",
                    table([
                        ("root", int(396)),
                        ("sacral", int(417)),
                        ("solar_plexus", int(528)),
                        ("heart", int(639)),
                        ("throat", int(741)),
                        ("third_eye", int(852)),
                        ("crown", int(963)),
                    ]),
                ),
                (
                    "chakra_color_map",
                    table([
                        ("root", expr("red")),
                        ("sacral", expr("orange")),
                        ("solar_plexus", expr("yellow")),
                        ("heart", expr("green")),
                        ("throat", expr("blue")),
                        ("third_eye", expr("indigo")),
                        ("crown", expr("violet")),
                    ]),
                ),
                ("base_frequency", expr("{{ chakra_map_hz[chakra] }}")),
                ("tuned_frequency", expr("{{ base_frequency * (1 + (intensity * 0.1)) }}")),
                ("chakra_color", expr("{{ chakra_color_map[chakra] }}")),
                ("encoded_intention", expr("{{ intention }}")),
            ]),
            values([
                ("chakra_frequency", expr("{{ tuned_frequency }}")),
                ("chakra_color", expr("{{ chakra_color }}")),
                ("chakra_intention", expr("{{ encoded_intention }}")),
            ]),
        ),
    );

    entries.insert(
        "max_pineal",
        entry(
            inputs([
                ("carrier_frequency", "number"),
                ("theta_frequency", "number"),
                ("intention", "string"),
            ]),
            values([
                ("alignment_delta", expr("{{ (carrier_frequency - theta_frequency) | abs }}")),
                ("clarity_index", expr("{{ 1 / (1 + alignment_delta) }}")),
                ("activation_level", expr("{{ clarity_index * 1.618 }}")),
                ("encoded_intention", expr("{{ intention }}")),
            ]),
            values([
                ("pineal_activation", expr("{{ activation_level }}")),
                ("pineal_clarity", expr("{{ clarity_index }}")),
                ("pineal_intention", expr("{{ encoded_intention }}")),
            ]),
        ),
    );

    entries.insert(
        "max_lucid",
        entry(
            inputs([
                ("theta_frequency", "number"),
                ("binaural_delta", "number"),
                ("intention", "string"),
            ]),
            values([
                ("ideal_delta", int(4)),
                ("delta_alignment", expr("{{ 1 / (1 + (binaural_delta - ideal_delta) | abs) }}")),
                ("dream_stability", expr("{{ delta_alignment * 1.5 }}")),
                ("lucidity_index", expr("{{ dream_stability * 1.2 }}")),
                ("encoded_intention", expr("{{ intention }}")),
            ]),
            values([
                ("lucid_potential", expr("{{ lucidity_index }}")),
                ("dream_stability_score", expr("{{ dream_stability }}")),
                ("lucid_intention", expr("{{ encoded_intention }}")),
            ]),
        ),
    );

    entries.insert(
        "max_astral",
        entry(
            inputs([
                ("pineal_activation", "number"),
                ("lucid_potential", "number"),
                ("energy_field_strength", "number"),
                ("intention", "string"),
            ]),
            values([
                (
                    "readiness_index",
                    expr("{{ (pineal_activation + lucid_potential + energy_field_strength) / 3 }}"),
                ),
                ("threshold", int(1)),
                ("launch_window", expr("{{ readiness_index > threshold }}")),
                ("encoded_intention", expr("{{ intention }}")),
            ]),
            values([
                ("astral_readiness", expr("{{ readiness_index }}")),
                ("astral_launch_window", expr("{{ launch_window }}")),
                ("astral_intention", expr("{{ encoded_intention }}")),
            ]),
        ),
    );

    entries.insert(
        "max_gateway",
        entry(
            inputs([
                ("astral_readiness", "number"),
                ("hemispheric_coherence", "number"),
                ("intention", "string"),
            ]),
            values([
                ("gateway_index", expr("{{ (astral_readiness + hemispheric_coherence) / 2 }}")),
                ("open_threshold", num(0.8)),
                ("gateway_open", expr("{{ gateway_index > open_threshold }}")),
                ("encoded_intention", expr("{{ intention }}")),
            ]),
            values([
                ("gateway_state", expr("{{ gateway_open }}")),
                ("gateway_strength", expr("{{ gateway_index }}")),
                ("gateway_intention", expr("{{ encoded_intention }}")),
            ]),
        ),
    );

    entries.insert(
        "max_portal",
        entry(
            inputs([
                ("gateway_state", "boolean"),
                ("target_signature", "string"),
                ("intention", "string"),
            ]),
            values([
                ("portal_active", expr("{{ gateway_state }}")),
                ("target_lock", expr("{{ target_signature }}")),
                ("stability_index", expr("{{ portal_active | ternary: 1.0, 0.0 }}")),
                ("encoded_intention", expr("{{ intention }}")),
            ]),
            values([
                ("portal_open", expr("{{ portal_active }}")),
                ("portal_target", expr("{{ target_lock }}")),
                ("portal_stability", expr("{{ stability_index }}")),
                ("portal_intention", expr("{{ encoded_intention }}")),
            ]),
        ),
    );

    entries.insert(
        "max_vortex",
        entry(
            inputs([
                ("energy_field_strength", "number"),
                ("portal_stability", "number"),
                ("intention", "string"),
            ]),
            values([
                ("spin_rate", expr("{{ energy_field_strength * 0.618 }}")),
                ("pull_intensity", expr("{{ spin_rate * portal_stability }}")),
                ("curvature_index", expr("{{ pull_intensity * 0.5 }}")),
                ("encoded_intention", expr("{{ intention }}")),
            ]),
            values([
                ("vortex_spin", expr("{{ spin_rate }}")),
                ("vortex_pull", expr("{{ pull_intensity }}")),
                ("vortex_curvature", expr("{{ curvature_index }}")),
                ("vortex_intention", expr("{{ encoded_intention }}")),
            ]),
        ),
    );

    entries.insert(
        "max_dimension",
        entry(
            inputs([
                ("portal_target", "string"),
                ("vortex_curvature", "number"),
                ("intention", "string"),
            ]),
            values([
                ("dimension_code", expr("{{ portal_target }}")),
                ("lock_index", expr("{{ 1 / (1 + (1 - vortex_curvature) | abs) }}")),
                ("encoded_intention", expr("{{ intention }}")),
            ]),
            values([
                ("dimension_address", expr("{{ dimension_code }}")),
                ("dimension_lock", expr("{{ lock_index }}")),
                ("dimension_intention", expr("{{ encoded_intention }}")),
            ]),
        ),
    );

    entries.insert(
        "max_quantum",
        entry(
            inputs([
                ("dimension_address", "string"),
                ("intention", "string"),
                ("energy_field_strength", "number"),
            ]),
            values([
                ("possibility_spread", expr("{{ energy_field_strength * 2 }}")),
                ("collapse_bias", expr("{{ intention }}")),
                ("coherence_index", expr("{{ possibility_spread * 0.5 }}")),
            ]),
            values([
                ("quantum_field_strength", expr("{{ possibility_spread }}")),
                ("quantum_coherence", expr("{{ coherence_index }}")),
                ("quantum_bias", expr("{{ collapse_bias }}")),
            ]),
        ),
    );

    entries.insert(
        "max_timeline",
        entry(
            inputs([
                ("quantum_coherence", "number"),
                ("quantum_bias", "string"),
                ("intention", "string"),
            ]),
            values([
                ("alignment_index", expr("{{ quantum_coherence * 0.8 }}")),
                ("branch_label", expr("{{ quantum_bias }}")),
                ("encoded_intention", expr("{{ intention }}")),
            ]),
            values([
                ("timeline_alignment", expr("{{ alignment_index }}")),
                ("timeline_branch", expr("{{ branch_label }}")),
                ("timeline_intention", expr("{{ encoded_intention }}")),
            ]),
        ),
    );

    entries.insert(
        "max_manifest",
        entry(
            inputs([
                ("timeline_alignment", "number"),
                ("energy_field_strength", "number"),
                ("intention", "string"),
            ]),
            values([
                (
                    "manifestation_potential",
                    expr("{{ (timeline_alignment + energy_field_strength) / 2 }}"),
                ),
                ("threshold", int(1)),
                ("manifestation_ready", expr("{{ manifestation_potential > threshold }}")),
                ("encoded_intention", expr("{{ intention }}")),
            ]),
            values([
                ("manifest_potential", expr("{{ manifestation_potential }}")),
                ("manifest_ready", expr("{{ manifestation_ready }}")),
                ("manifest_intention", expr("{{ encoded_intention }}")),
            ]),
        ),
    );

    entries.insert(
        "max_ux",
        entry(
            inputs([
                ("current_state", "string"),
                ("target_state", "string"),
                ("complexity_level", "number"),
            ]),
            values([
                ("guidance_intensity", expr("{{ 1 / (1 + complexity_level) }}")),
                ("clarity_score", expr("{{ guidance_intensity * 1.5 }}")),
                ("journey_label", expr("{{ current_state | append: ' → ' | append: target_state }}")),
            ]),
            values([
                ("ux_clarity", expr("{{ clarity_score }}")),
                ("ux_guidance_intensity", expr("{{ guidance_intensity }}")),
                ("ux_journey", expr("{{ journey_label }}")),
            ]),
        ),
    );

    entries.insert(
        "max_feedback",
        entry(
            inputs([
                ("session_id", "string"),
                ("user_signal", "string"),
                ("intensity", "number"),
            ]),
            values([
                ("normalized_intensity", expr("{{ intensity }}")),
                ("feedback_packet", expr("{{ user_signal }}")),
                ("adaptation_weight", expr("{{ normalized_intensity * 0.8 }}")),
            ]),
            values([
                ("feedback_intensity", expr("{{ normalized_intensity }}")),
                ("feedback_content", expr("{{ feedback_packet }}")),
                ("feedback_weight", expr("{{ adaptation_weight }}")),
            ]),
        ),
    );

    entries.insert(
        "max_logs",
        entry(
            inputs([
                ("session_id", "string"),
                ("event_type", "string"),
                ("payload", "string"),
            ]),
            values([
                (
                    "log_entry",
                    expr("{{ session_id | append: '|' | append: event_type | append: '|' | append: payload }}"),
                ),
                ("log_level", expr("{{ event_type }}")),
            ]),
            values([
                ("log_record", expr("{{ log_entry }}")),
                ("log_category", expr("{{ log_level }}")),
            ]),
        ),
    );

    entries.insert(
        "max_secure",
        entry(
            inputs([
                ("session_id", "string"),
                ("user_role", "string"),
                ("requested_action", "string"),
            ]),
            values([
                (
                    "role_permissions",
                    table([
                        ("admin", list(["read", "write", "execute"])),
                        ("user", list(["read", "execute"])),
                        ("guest", list(["read"])),
                    ]),
                ),
                ("allowed_actions", expr("{{ role_permissions[user_role] }}")),
                ("is_allowed", expr("{{ allowed_actions contains requested_action }}")),
            ]),
            values([
                ("access_granted", expr("{{ is_allowed }}")),
                ("access_role", expr("{{ user_role }}")),
                ("access_action", expr("{{ requested_action }}")),
            ]),
        ),
    );

    entries.insert(
        "max_remote",
        entry(
            inputs([
                ("session_id", "string"),
                ("command", "string"),
                ("target_module", "string"),
            ]),
            values([
                ("routed_command", expr("{{ command }}")),
                ("routed_target", expr("{{ target_module }}")),
                ("control_token", expr("{{ session_id }}")),
            ]),
            values([
                ("remote_command", expr("{{ routed_command }}")),
                ("remote_target", expr("{{ routed_target }}")),
                ("remote_token", expr("{{ control_token }}")),
            ]),
        ),
    );

    entries.insert(
        "max_social",
        entry(
            inputs([
                ("session_id", "string"),
                ("share_intent", "string"),
                ("resonance_field", "number"),
            ]),
            values([
                ("share_strength", expr("{{ resonance_field * 1.2 }}")),
                ("share_payload", expr("{{ share_intent }}")),
            ]),
            values([
                ("social_share_strength", expr("{{ share_strength }}")),
                ("social_share_payload", expr("{{ share_payload }}")),
                ("social_session", expr("{{ session_id }}")),
            ]),
        ),
    );

    entries.insert(
        "max_seo",
        entry(
            inputs([
                ("title", "string"),
                ("description", "string"),
                ("primary_intent", "string"),
            ]),
            values([
                ("keyword_seed", expr("{{ primary_intent }}")),
                ("slug", expr("{{ title | downcase | replace: ' ', '-' }}")),
                ("meta_description", expr("{{ description }}")),
            ]),
            values([
                ("seo_slug", expr("{{ slug }}")),
                ("seo_keyword", expr("{{ keyword_seed }}")),
                ("seo_meta_description", expr("{{ meta_description }}")),
            ]),
        ),
    );

    HybridCatalog { entries }
}
