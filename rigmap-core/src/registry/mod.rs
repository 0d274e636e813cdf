//! Pattern registry: ordered, deduplicated alias lists per canonical joint.
//!
//! A registry is built once and then only read. Callers own it and pass it by
//! reference to the engine; nothing here is global.

mod aliases;

use std::collections::HashSet;

use crate::joint::CanonicalJoint;
use crate::normalize::PreprocessedBone;

#[derive(Clone, Debug)]
pub struct JointPatterns {
    pub joint: CanonicalJoint,
    pub aliases: Vec<PreprocessedBone>,
}

#[derive(Clone, Debug)]
pub struct PatternRegistry { entries: Vec<JointPatterns> }

impl PatternRegistry {
    /// Registry with every joint and the built-in alias tables.
    pub fn builtin() -> Self { RegistryBuilder::builtin().build() }

    /// Registered joints, in declaration order.
    pub fn joints(&self) -> impl Iterator<Item = CanonicalJoint> + '_ { self.entries.iter().map(|e| e.joint) }

    pub fn entries(&self) -> &[JointPatterns] { &self.entries }

    pub fn entry(&self, joint: CanonicalJoint) -> Option<&JointPatterns> {
        self.entries.iter().find(|e| e.joint == joint)
    }

    pub fn aliases(&self, joint: CanonicalJoint) -> &[PreprocessedBone] {
        self.entry(joint).map(|e| e.aliases.as_slice()).unwrap_or(&[])
    }

    pub fn contains(&self, joint: CanonicalJoint) -> bool { self.entry(joint).is_some() }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl Default for PatternRegistry {
    fn default() -> Self { Self::builtin() }
}

/// Chainable builder for custom registries.
///
/// Joints always end up in declaration order regardless of the order they
/// were added. Alias lists keep insertion order with duplicates dropped
/// (first occurrence wins).
pub struct RegistryBuilder {
    lists: Vec<(CanonicalJoint, Vec<String>)>,
}

impl RegistryBuilder {
    /// No joints at all.
    pub fn empty() -> Self { Self { lists: Vec::new() } }

    /// Every joint, seeded with the built-in aliases.
    pub fn builtin() -> Self {
        let lists = CanonicalJoint::ALL
            .iter()
            .map(|&j| (j, aliases::builtin_aliases(j).iter().map(|s| s.to_string()).collect()))
            .collect();
        Self { lists }
    }

    /// Append aliases for `joint`, registering it if needed.
    pub fn extend<I, S>(mut self, joint: CanonicalJoint, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = match self.lists.iter().position(|(j, _)| *j == joint) {
            Some(i) => &mut self.lists[i].1,
            None => {
                self.lists.push((joint, Vec::new()));
                let last = self.lists.len() - 1;
                &mut self.lists[last].1
            }
        };
        list.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Drop a joint; it will be reported unmapped whenever it is attempted.
    pub fn without(mut self, joint: CanonicalJoint) -> Self {
        self.lists.retain(|(j, _)| *j != joint);
        self
    }

    pub fn build(mut self) -> PatternRegistry {
        self.lists.sort_by_key(|(j, _)| *j);
        let entries = self
            .lists
            .into_iter()
            .map(|(joint, list)| {
                let mut seen: HashSet<String> = HashSet::new();
                let aliases = list
                    .into_iter()
                    .filter(|a| !a.is_empty() && seen.insert(a.clone()))
                    .map(|a| PreprocessedBone::new(&a))
                    .collect();
                JointPatterns { joint, aliases }
            })
            .collect();
        PatternRegistry { entries }
    }
}
