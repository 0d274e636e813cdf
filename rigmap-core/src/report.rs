//! Result aggregation: lookup records and trust labels.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::joint::CanonicalJoint;
use crate::matching::{AutoMappingResult, PassKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag { Green, Lime, Amber, Red }

impl ColorTag {
    pub fn name(self) -> &'static str {
        match self {
            ColorTag::Green => "green",
            ColorTag::Lime => "lime",
            ColorTag::Amber => "amber",
            ColorTag::Red => "red",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ConfidenceLabel {
    pub text: &'static str,
    pub color: ColorTag,
}

/// Step function over confidence; each bucket's lower bound is inclusive.
pub fn confidence_label(confidence: f64) -> ConfidenceLabel {
    if confidence >= 1.0 {
        ConfidenceLabel { text: "Exact", color: ColorTag::Green }
    } else if confidence >= 0.9 {
        ConfidenceLabel { text: "High", color: ColorTag::Lime }
    } else if confidence >= 0.8 {
        ConfidenceLabel { text: "Medium", color: ColorTag::Amber }
    } else {
        ConfidenceLabel { text: "Low", color: ColorTag::Red }
    }
}

/// Joint -> bone lookup. Keys are unique because the engine is injective.
pub fn to_mapping_record(result: &AutoMappingResult) -> BTreeMap<CanonicalJoint, String> {
    result.mappings.iter().map(|m| (m.joint, m.bone_name.clone())).collect()
}

#[derive(Clone, Debug, Serialize)]
pub struct ReportRow {
    pub joint: CanonicalJoint,
    pub bone: Option<String>,
    pub confidence: Option<f64>,
    pub pass: Option<PassKind>,
    pub label: Option<ConfidenceLabel>,
}

/// Presentation-ready summary of one run.
#[derive(Clone, Debug, Serialize)]
pub struct MappingReport {
    pub rows: Vec<ReportRow>,
    pub record: BTreeMap<CanonicalJoint, String>,
    pub unmapped_bones: Vec<String>,
    pub overall_confidence: f64,
    pub overall_label: ConfidenceLabel,
}

impl MappingReport {
    /// Rows follow processing order: mapped and unmapped joints interleaved
    /// as the engine attempted them.
    pub fn new(result: &AutoMappingResult, attempted: &[CanonicalJoint]) -> Self {
        let rows = attempted
            .iter()
            .map(|&joint| match result.mapping_for(joint) {
                Some(m) => ReportRow {
                    joint,
                    bone: Some(m.bone_name.clone()),
                    confidence: Some(m.confidence),
                    pass: Some(m.pass),
                    label: Some(confidence_label(m.confidence)),
                },
                None => ReportRow { joint, bone: None, confidence: None, pass: None, label: None },
            })
            .collect();
        Self {
            rows,
            record: to_mapping_record(result),
            unmapped_bones: result.unmapped_bones.clone(),
            overall_confidence: result.overall_confidence,
            overall_label: confidence_label(result.overall_confidence),
        }
    }

    pub fn mapped_count(&self) -> usize { self.rows.iter().filter(|r| r.bone.is_some()).count() }
}

impl fmt::Display for MappingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.rows.iter().map(|r| r.joint.key().len()).max().unwrap_or(0);
        for r in &self.rows {
            match (&r.bone, r.pass, r.label) {
                (Some(bone), Some(pass), Some(label)) => writeln!(
                    f,
                    "  {:<width$}  {}  [{} {:.1}, pass {} {}]",
                    r.joint.key(),
                    bone,
                    label.text,
                    pass.confidence(),
                    pass.number(),
                    pass.label(),
                    width = width
                )?,
                _ => writeln!(f, "  {:<width$}  (unmapped)", r.joint.key(), width = width)?,
            }
        }
        if !self.unmapped_bones.is_empty() {
            writeln!(f, "unused bones: {}", self.unmapped_bones.join(", "))?;
        }
        writeln!(
            f,
            "mapped {}/{}  overall {:.2} ({})",
            self.mapped_count(),
            self.rows.len(),
            self.overall_confidence,
            self.overall_label.text
        )
    }
}
