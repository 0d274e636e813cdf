//! Bone-name auto-mapping for humanoid rigs.
//!
//! Resolves the bone names of an arbitrary skeleton (Mixamo, VRM, UE5, Rigify,
//! Mecanim, BVH, ad-hoc exports) onto a fixed set of [`CanonicalJoint`]s.

pub mod bone_list;
pub mod error;
pub mod joint;
pub mod matching;
pub mod normalize;
pub mod profile;
pub mod registry;
pub mod report;
pub mod structural;

pub use error::{Result, RigmapError};
pub use joint::{CanonicalJoint, Limb, Side};
pub use matching::{auto_map_bones, AutoMapper, AutoMappingResult, MappingResult, PassKind};
pub use normalize::PreprocessedBone;
pub use registry::{PatternRegistry, RegistryBuilder};
pub use report::{confidence_label, to_mapping_record, ConfidenceLabel};
pub use structural::is_structural_bone;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
