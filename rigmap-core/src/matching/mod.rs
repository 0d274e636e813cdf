//! Multi-pass bone-name matching engine.
//!
//! Pipeline:
//! - preprocess every bone name once ([`BoneTable`])
//! - fold the strategies in order; each one sweeps every still-unmapped joint
//!   before the next strategy starts
//! - a claimed bone name leaves the pool for every later joint and pass
//!
//! Joints are visited in registry declaration order, so an earlier joint
//! always wins a bone that several joints' aliases describe.

pub mod strategy;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::joint::CanonicalJoint;
use crate::registry::PatternRegistry;

pub use strategy::{
    default_strategies, BoneTable, CandidatePool, ExactMatch, MatchStrategy, NormalizedMatch,
    PrefixStrippedMatch, WordBoundaryMatch,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassKind { Exact, PrefixStripped, Normalized, WordBoundary }

impl PassKind {
    pub const ALL: [PassKind; 4] =
        [PassKind::Exact, PassKind::PrefixStripped, PassKind::Normalized, PassKind::WordBoundary];

    pub fn confidence(self) -> f64 {
        match self {
            PassKind::Exact => 1.0,
            PassKind::PrefixStripped => 0.9,
            PassKind::Normalized => 0.8,
            PassKind::WordBoundary => 0.6,
        }
    }

    /// 1-based position in the default pass sequence.
    pub fn number(self) -> u8 {
        match self {
            PassKind::Exact => 1,
            PassKind::PrefixStripped => 2,
            PassKind::Normalized => 3,
            PassKind::WordBoundary => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PassKind::Exact => "exact",
            PassKind::PrefixStripped => "prefix-stripped",
            PassKind::Normalized => "normalized",
            PassKind::WordBoundary => "word-boundary",
        }
    }
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingResult {
    #[serde(rename = "jointKey")]
    pub joint: CanonicalJoint,
    pub bone_name: String,
    pub confidence: f64,
    #[serde(rename = "matchPass")]
    pub pass: PassKind,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoMappingResult {
    pub mappings: Vec<MappingResult>,
    pub unmapped_joints: Vec<CanonicalJoint>,
    pub unmapped_bones: Vec<String>,
    pub overall_confidence: f64,
}

impl AutoMappingResult {
    pub fn mapping_for(&self, joint: CanonicalJoint) -> Option<&MappingResult> {
        self.mappings.iter().find(|m| m.joint == joint)
    }

    pub fn bone_for(&self, joint: CanonicalJoint) -> Option<&str> {
        self.mapping_for(joint).map(|m| m.bone_name.as_str())
    }

    /// Number of joints the run attempted (mapped + unmapped).
    pub fn attempted(&self) -> usize { self.mappings.len() + self.unmapped_joints.len() }

    pub fn is_complete(&self) -> bool { self.unmapped_joints.is_empty() }
}

/// Engine bound to one registry and one strategy sequence.
pub struct AutoMapper<'r> {
    registry: &'r PatternRegistry,
    strategies: Vec<Box<dyn MatchStrategy>>,
}

impl<'r> AutoMapper<'r> {
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self { registry, strategies: default_strategies() }
    }

    pub fn with_strategies(
        registry: &'r PatternRegistry,
        strategies: Vec<Box<dyn MatchStrategy>>,
    ) -> Self {
        Self { registry, strategies }
    }

    /// Joints a run will attempt, in processing order.
    ///
    /// With no restriction: every registered joint. With a restriction: the
    /// registered ones in declaration order, then any unregistered ones in the
    /// order given (those can never map). Repeated entries collapse.
    pub fn attempted_joints(&self, allowed: Option<&[CanonicalJoint]>) -> Vec<CanonicalJoint> {
        let Some(allowed) = allowed else { return self.registry.joints().collect() };
        let mut out: Vec<CanonicalJoint> =
            self.registry.joints().filter(|j| allowed.contains(j)).collect();
        for &j in allowed {
            if !out.contains(&j) { out.push(j); }
        }
        out
    }

    pub fn map<S: AsRef<str>>(
        &self,
        bone_names: &[S],
        allowed: Option<&[CanonicalJoint]>,
    ) -> AutoMappingResult {
        let joints = self.attempted_joints(allowed);
        let table = BoneTable::new(bone_names);
        let mut used: HashSet<String> = HashSet::new();
        let mut claims: Vec<Option<(usize, PassKind)>> = vec![None; joints.len()];

        for strategy in &self.strategies {
            let kind = strategy.kind();
            let mut claimed = 0usize;
            for (slot, &joint) in joints.iter().enumerate() {
                if claims[slot].is_some() { continue; }
                let Some(entry) = self.registry.entry(joint) else { continue };
                let found = strategy.resolve(&entry.aliases, &CandidatePool::new(&table, &used));
                if let Some(index) = found {
                    let bone = &table.get(index).original;
                    log::debug!(
                        "{} -> '{}' via {} pass ({:.1})",
                        joint,
                        bone,
                        kind,
                        kind.confidence()
                    );
                    used.insert(bone.clone());
                    claims[slot] = Some((index, kind));
                    claimed += 1;
                }
            }
            let open = claims.iter().filter(|c| c.is_none()).count();
            log::trace!("{} pass claimed {} bone(s); {} joint(s) still open", kind, claimed, open);
        }

        let mut mappings = Vec::new();
        let mut unmapped_joints = Vec::new();
        for (joint, claim) in joints.iter().zip(claims) {
            match claim {
                Some((index, pass)) => mappings.push(MappingResult {
                    joint: *joint,
                    bone_name: table.get(index).original.clone(),
                    confidence: pass.confidence(),
                    pass,
                }),
                None => unmapped_joints.push(*joint),
            }
        }

        let mut reported: HashSet<&str> = HashSet::new();
        let unmapped_bones = table
            .bones()
            .iter()
            .map(|b| b.original.as_str())
            .filter(|name| !used.contains(*name) && reported.insert(*name))
            .map(str::to_string)
            .collect();

        let overall_confidence = if joints.is_empty() || mappings.is_empty() {
            0.0
        } else {
            mappings.iter().map(|m| m.confidence).sum::<f64>() / joints.len() as f64
        };

        AutoMappingResult { mappings, unmapped_joints, unmapped_bones, overall_confidence }
    }
}

/// Map `bone_names` onto canonical joints using the default pass sequence.
pub fn auto_map_bones<S: AsRef<str>>(
    registry: &PatternRegistry,
    bone_names: &[S],
    allowed: Option<&[CanonicalJoint]>,
) -> AutoMappingResult {
    AutoMapper::new(registry).map(bone_names, allowed)
}
