//! Canonical joint taxonomy. Closed set, fixed at build time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RigmapError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalJoint {
    Torso,
    NeckYaw,
    NeckPitch,
    LeftShoulderPitch,
    LeftShoulderYaw,
    LeftElbow,
    LeftWrist,
    LeftGrip,
    RightShoulderPitch,
    RightShoulderYaw,
    RightElbow,
    RightWrist,
    RightGrip,
    LeftHipPitch,
    LeftHipYaw,
    LeftKnee,
    LeftAnkle,
    RightHipPitch,
    RightHipYaw,
    RightKnee,
    RightAnkle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side { Left, Right }

/// Coarse body-part grouping, handy for restricting a run to one limb.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Limb { Axial, LeftArm, RightArm, LeftLeg, RightLeg }

impl CanonicalJoint {
    /// All joints in declaration order. This order is the engine's tie-break.
    pub const ALL: [CanonicalJoint; 21] = [
        CanonicalJoint::Torso,
        CanonicalJoint::NeckYaw,
        CanonicalJoint::NeckPitch,
        CanonicalJoint::LeftShoulderPitch,
        CanonicalJoint::LeftShoulderYaw,
        CanonicalJoint::LeftElbow,
        CanonicalJoint::LeftWrist,
        CanonicalJoint::LeftGrip,
        CanonicalJoint::RightShoulderPitch,
        CanonicalJoint::RightShoulderYaw,
        CanonicalJoint::RightElbow,
        CanonicalJoint::RightWrist,
        CanonicalJoint::RightGrip,
        CanonicalJoint::LeftHipPitch,
        CanonicalJoint::LeftHipYaw,
        CanonicalJoint::LeftKnee,
        CanonicalJoint::LeftAnkle,
        CanonicalJoint::RightHipPitch,
        CanonicalJoint::RightHipYaw,
        CanonicalJoint::RightKnee,
        CanonicalJoint::RightAnkle,
    ];

    pub fn key(self) -> &'static str {
        use CanonicalJoint::*;
        match self {
            Torso => "torso",
            NeckYaw => "neckYaw",
            NeckPitch => "neckPitch",
            LeftShoulderPitch => "leftShoulderPitch",
            LeftShoulderYaw => "leftShoulderYaw",
            LeftElbow => "leftElbow",
            LeftWrist => "leftWrist",
            LeftGrip => "leftGrip",
            RightShoulderPitch => "rightShoulderPitch",
            RightShoulderYaw => "rightShoulderYaw",
            RightElbow => "rightElbow",
            RightWrist => "rightWrist",
            RightGrip => "rightGrip",
            LeftHipPitch => "leftHipPitch",
            LeftHipYaw => "leftHipYaw",
            LeftKnee => "leftKnee",
            LeftAnkle => "leftAnkle",
            RightHipPitch => "rightHipPitch",
            RightHipYaw => "rightHipYaw",
            RightKnee => "rightKnee",
            RightAnkle => "rightAnkle",
        }
    }

    pub fn limb(self) -> Limb {
        use CanonicalJoint::*;
        match self {
            Torso | NeckYaw | NeckPitch => Limb::Axial,
            LeftShoulderPitch | LeftShoulderYaw | LeftElbow | LeftWrist | LeftGrip => Limb::LeftArm,
            RightShoulderPitch | RightShoulderYaw | RightElbow | RightWrist | RightGrip => Limb::RightArm,
            LeftHipPitch | LeftHipYaw | LeftKnee | LeftAnkle => Limb::LeftLeg,
            RightHipPitch | RightHipYaw | RightKnee | RightAnkle => Limb::RightLeg,
        }
    }

    pub fn side(self) -> Option<Side> {
        match self.limb() {
            Limb::Axial => None,
            Limb::LeftArm | Limb::LeftLeg => Some(Side::Left),
            Limb::RightArm | Limb::RightLeg => Some(Side::Right),
        }
    }

    /// Left/right counterpart; axial joints map to themselves.
    pub fn mirror(self) -> CanonicalJoint {
        use CanonicalJoint::*;
        match self {
            Torso | NeckYaw | NeckPitch => self,
            LeftShoulderPitch => RightShoulderPitch,
            LeftShoulderYaw => RightShoulderYaw,
            LeftElbow => RightElbow,
            LeftWrist => RightWrist,
            LeftGrip => RightGrip,
            RightShoulderPitch => LeftShoulderPitch,
            RightShoulderYaw => LeftShoulderYaw,
            RightElbow => LeftElbow,
            RightWrist => LeftWrist,
            RightGrip => LeftGrip,
            LeftHipPitch => RightHipPitch,
            LeftHipYaw => RightHipYaw,
            LeftKnee => RightKnee,
            LeftAnkle => RightAnkle,
            RightHipPitch => LeftHipPitch,
            RightHipYaw => LeftHipYaw,
            RightKnee => LeftKnee,
            RightAnkle => LeftAnkle,
        }
    }
}

impl Limb {
    pub const ALL: [Limb; 5] = [Limb::Axial, Limb::LeftArm, Limb::RightArm, Limb::LeftLeg, Limb::RightLeg];

    /// Joints of this limb, in declaration order.
    pub fn joints(self) -> Vec<CanonicalJoint> {
        CanonicalJoint::ALL.iter().copied().filter(|j| j.limb() == self).collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            Limb::Axial => "axial",
            Limb::LeftArm => "left arm",
            Limb::RightArm => "right arm",
            Limb::LeftLeg => "left leg",
            Limb::RightLeg => "right leg",
        }
    }
}

impl fmt::Display for CanonicalJoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.key()) }
}

impl FromStr for CanonicalJoint {
    type Err = RigmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        CanonicalJoint::ALL
            .iter()
            .copied()
            .find(|j| j.key() == s)
            .ok_or_else(|| RigmapError::UnknownJoint(s.to_string()))
    }
}
