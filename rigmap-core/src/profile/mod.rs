pub mod schema;

use std::path::Path;

use crate::error::{Result, RigmapError};
use crate::joint::CanonicalJoint;
use crate::registry::{PatternRegistry, RegistryBuilder};
use crate::structural::retain_anatomical;

pub use schema::MappingProfile;

pub fn load_from_yaml_str(s: &str) -> Result<MappingProfile> {
    let profile: MappingProfile = serde_yaml::from_str(s)?;
    if profile.joints.as_ref().map_or(false, Vec::is_empty) {
        log::warn!("profile '{}' restricts the run to an empty joint set", profile.name);
    }
    Ok(profile)
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<MappingProfile> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .map_err(|source| RigmapError::Io { path: path.to_path_buf(), source })?;
    let profile = load_from_yaml_str(&data)?;
    log::debug!("loaded profile '{}' from {}", profile.name, path.display());
    Ok(profile)
}

impl MappingProfile {
    pub fn registry(&self) -> PatternRegistry {
        let base = if self.builtin_aliases { RegistryBuilder::builtin() } else { RegistryBuilder::empty() };
        self.extra_aliases
            .iter()
            .fold(base, |b, (joint, aliases)| b.extend(*joint, aliases.iter().cloned()))
            .build()
    }

    pub fn allowed_joints(&self) -> Option<&[CanonicalJoint]> { self.joints.as_deref() }

    /// Applies the structural pre-filter when the profile asks for it.
    pub fn prepare_bones<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        if self.skip_structural {
            retain_anatomical(names)
        } else {
            names.iter().map(|n| n.as_ref().to_string()).collect()
        }
    }
}
