use std::collections::{HashMap, HashSet};

use crate::normalize::PreprocessedBone;

use super::PassKind;

/// Caller's bones, preprocessed once, with lookup indices.
pub struct BoneTable {
    bones: Vec<PreprocessedBone>,
    by_original: HashMap<String, Vec<usize>>,
    by_normalized: HashMap<String, Vec<usize>>,
}

impl BoneTable {
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        let bones: Vec<PreprocessedBone> =
            names.iter().map(|n| PreprocessedBone::new(n.as_ref())).collect();
        let mut by_original: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_normalized: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, b) in bones.iter().enumerate() {
            by_original.entry(b.original.clone()).or_default().push(i);
            by_normalized.entry(b.normalized.clone()).or_default().push(i);
        }
        Self { bones, by_original, by_normalized }
    }

    pub fn bones(&self) -> &[PreprocessedBone] { &self.bones }
    pub fn get(&self, index: usize) -> &PreprocessedBone { &self.bones[index] }
}

/// Read-only view of the bones still available to claim.
pub struct CandidatePool<'a> {
    table: &'a BoneTable,
    used: &'a HashSet<String>,
}

impl<'a> CandidatePool<'a> {
    pub fn new(table: &'a BoneTable, used: &'a HashSet<String>) -> Self { Self { table, used } }

    pub fn is_used(&self, bone: &PreprocessedBone) -> bool { self.used.contains(&bone.original) }

    /// Unused bones in the caller's original order.
    pub fn unused(&self) -> impl Iterator<Item = (usize, &'a PreprocessedBone)> + '_ {
        let table: &'a BoneTable = self.table;
        table.bones.iter().enumerate().filter(move |(_, b)| !self.is_used(b))
    }

    fn first_unused(&self, indices: Option<&Vec<usize>>) -> Option<usize> {
        indices?.iter().copied().find(|&i| !self.is_used(&self.table.bones[i]))
    }

    pub fn first_unused_original(&self, name: &str) -> Option<usize> {
        self.first_unused(self.table.by_original.get(name))
    }

    pub fn first_unused_normalized(&self, key: &str) -> Option<usize> {
        self.first_unused(self.table.by_normalized.get(key))
    }
}

/// One matching pass. Given one joint's aliases (registry order) and the
/// current pool, return the bone index that joint claims in this pass.
pub trait MatchStrategy: Send + Sync {
    fn kind(&self) -> PassKind;
    fn resolve(&self, aliases: &[PreprocessedBone], pool: &CandidatePool<'_>) -> Option<usize>;
}

/// Literal, case-sensitive equality.
pub struct ExactMatch;

impl MatchStrategy for ExactMatch {
    fn kind(&self) -> PassKind { PassKind::Exact }

    fn resolve(&self, aliases: &[PreprocessedBone], pool: &CandidatePool<'_>) -> Option<usize> {
        aliases.iter().find_map(|a| pool.first_unused_original(&a.original))
    }
}

/// Equality after rig-prefix removal. Raw-identical pairs belong to the exact pass.
pub struct PrefixStrippedMatch;

impl MatchStrategy for PrefixStrippedMatch {
    fn kind(&self) -> PassKind { PassKind::PrefixStripped }

    fn resolve(&self, aliases: &[PreprocessedBone], pool: &CandidatePool<'_>) -> Option<usize> {
        aliases.iter().filter(|a| !a.stripped.is_empty()).find_map(|a| {
            pool.unused()
                .find(|(_, b)| b.stripped == a.stripped && b.original != a.original)
                .map(|(i, _)| i)
        })
    }
}

/// Case/separator-insensitive equality. Ties go to the earliest unused bone.
pub struct NormalizedMatch;

impl MatchStrategy for NormalizedMatch {
    fn kind(&self) -> PassKind { PassKind::Normalized }

    fn resolve(&self, aliases: &[PreprocessedBone], pool: &CandidatePool<'_>) -> Option<usize> {
        aliases
            .iter()
            .filter(|a| !a.normalized.is_empty())
            .find_map(|a| pool.first_unused_normalized(&a.normalized))
    }
}

/// Alias tokens appear as a contiguous run of whole tokens in the bone name.
pub struct WordBoundaryMatch;

impl MatchStrategy for WordBoundaryMatch {
    fn kind(&self) -> PassKind { PassKind::WordBoundary }

    fn resolve(&self, aliases: &[PreprocessedBone], pool: &CandidatePool<'_>) -> Option<usize> {
        aliases.iter().filter(|a| !a.tokens.is_empty()).find_map(|a| {
            pool.unused().find(|(_, b)| b.contains_tokens(&a.tokens)).map(|(i, _)| i)
        })
    }
}

/// Exact, prefix-stripped, normalized, word-boundary; in that order.
pub fn default_strategies() -> Vec<Box<dyn MatchStrategy>> {
    vec![
        Box::new(ExactMatch),
        Box::new(PrefixStrippedMatch),
        Box::new(NormalizedMatch),
        Box::new(WordBoundaryMatch),
    ]
}
