use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::joint::CanonicalJoint;

/// YAML-described mapping run: which joints to attempt and how to build the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MappingProfile {
    pub name: String,
    /// Restrict the run to these joints. `None` attempts every joint.
    pub joints: Option<Vec<CanonicalJoint>>,
    /// Drop scene/armature scaffold nodes before matching.
    pub skip_structural: bool,
    /// Seed the registry with the built-in alias tables.
    pub builtin_aliases: bool,
    /// Appended after any built-in aliases, per joint.
    pub extra_aliases: BTreeMap<CanonicalJoint, Vec<String>>,
}

impl Default for MappingProfile {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            joints: None,
            skip_structural: true,
            builtin_aliases: true,
            extra_aliases: BTreeMap::new(),
        }
    }
}
