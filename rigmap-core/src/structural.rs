//! Scaffold nodes (scene roots, armature containers) that are not anatomical bones.
//!
//! The engine never consults this list; callers decide whether to pre-filter.

const STRUCTURAL_NAMES: &[&str] = &[
    "scene",
    "root",
    "armature",
    "rig",
    "skeleton",
    "metarig",
    "rootnode",
    "root_node",
    "gltf_scenerootnode",
    "sketchfab_model",
    "rootbone",
    "root_bone",
    "world",
    "origin",
];

pub fn is_structural_bone(name: &str) -> bool {
    let lowered = name.trim().to_lowercase();
    STRUCTURAL_NAMES.contains(&lowered.as_str())
}

/// Input minus structural names, order preserved.
pub fn retain_anatomical<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|n| !is_structural_bone(n))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_case_insensitively() {
        assert!(is_structural_bone("Armature"));
        assert!(is_structural_bone("ROOT"));
        assert!(is_structural_bone(" Scene "));
        assert!(is_structural_bone("GLTF_SceneRootNode"));
        assert!(is_structural_bone("metarig"));
    }

    #[test]
    fn anatomical_names_pass_through() {
        assert!(!is_structural_bone("Hips"));
        assert!(!is_structural_bone("mixamorig:Hips"));
        assert!(!is_structural_bone("RootMotion"));
        assert!(!is_structural_bone(""));
    }

    #[test]
    fn retain_anatomical_keeps_order() {
        let names = ["Scene", "Armature", "Hips", "Spine", "root", "Neck"];
        assert_eq!(retain_anatomical(&names), vec!["Hips", "Spine", "Neck"]);
    }
}
