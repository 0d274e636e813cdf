//! Built-in alias tables. Order within a list is trust priority.
//!
//! Conventions covered: Mixamo (prefix stripped at match time), VRM humanoid,
//! UE5 (`_l`/`_r`), Rigify (`DEF-` stripped, `.L`/`.R`), Unity Mecanim,
//! BVH capture names, and snake_case exports.

use crate::joint::CanonicalJoint;

pub(crate) fn builtin_aliases(joint: CanonicalJoint) -> &'static [&'static str] {
    use CanonicalJoint::*;
    match joint {
        Torso => &[
            "Hips", "hips", "pelvis", "Pelvis", "Spine", "spine", "spine_01", "Spine1", "Chest", "chest",
            "Torso", "torso", "Waist", "waist", "Root_M",
        ],
        NeckYaw => &[
            "Neck", "neck", "neck_01", "spine.004", "Neck_M", "NeckBase", "neck_base",
        ],
        NeckPitch => &[
            "Head", "head", "neck_02", "Neck1", "spine.006", "Head_M", "HeadTop",
        ],

        LeftShoulderPitch => &[
            "LeftArm", "leftUpperArm", "upperarm_l", "UpperArm_L", "upper_arm.L", "LeftUpperArm",
            "LeftUpArm", "L_UpperArm", "Left_Arm", "left_upper_arm",
        ],
        LeftShoulderYaw => &[
            "LeftShoulder", "leftShoulder", "clavicle_l", "Clavicle_L", "shoulder.L", "LeftCollar",
            "L_Clavicle", "left_shoulder", "LeftArm", "leftUpperArm", "upperarm_l",
        ],
        LeftElbow => &[
            "LeftForeArm", "leftLowerArm", "lowerarm_l", "LowerArm_L", "forearm.L", "LeftLowerArm",
            "LeftLowArm", "LeftElbow", "L_Forearm", "left_forearm", "Elbow_L",
        ],
        LeftWrist => &[
            "LeftHand", "leftHand", "hand_l", "Hand_L", "hand.L", "LeftWrist", "L_Hand", "left_hand",
            "Wrist_L",
        ],
        LeftGrip => &[
            "LeftHandIndex1", "leftIndexProximal", "index_01_l", "f_index.01.L", "LeftHandMiddle1",
            "leftMiddleProximal", "middle_01_l", "f_middle.01.L", "LeftFingerBase", "LeftInHandIndex",
            "L_Index1", "left_index_01",
        ],

        RightShoulderPitch => &[
            "RightArm", "rightUpperArm", "upperarm_r", "UpperArm_R", "upper_arm.R", "RightUpperArm",
            "RightUpArm", "R_UpperArm", "Right_Arm", "right_upper_arm",
        ],
        RightShoulderYaw => &[
            "RightShoulder", "rightShoulder", "clavicle_r", "Clavicle_R", "shoulder.R", "RightCollar",
            "R_Clavicle", "right_shoulder", "RightArm", "rightUpperArm", "upperarm_r",
        ],
        RightElbow => &[
            "RightForeArm", "rightLowerArm", "lowerarm_r", "LowerArm_R", "forearm.R", "RightLowerArm",
            "RightLowArm", "RightElbow", "R_Forearm", "right_forearm", "Elbow_R",
        ],
        RightWrist => &[
            "RightHand", "rightHand", "hand_r", "Hand_R", "hand.R", "RightWrist", "R_Hand", "right_hand",
            "Wrist_R",
        ],
        RightGrip => &[
            "RightHandIndex1", "rightIndexProximal", "index_01_r", "f_index.01.R", "RightHandMiddle1",
            "rightMiddleProximal", "middle_01_r", "f_middle.01.R", "RightFingerBase", "RightInHandIndex",
            "R_Index1", "right_index_01",
        ],

        LeftHipPitch => &[
            "LeftUpLeg", "leftUpperLeg", "thigh_l", "Thigh_L", "thigh.L", "LeftUpperLeg", "LeftThigh",
            "LeftHip", "L_Thigh", "left_thigh", "UpperLeg_L",
        ],
        LeftHipYaw => &[
            "LHipJoint", "LeftHipJoint", "LeftUpLeg", "leftUpperLeg", "thigh_l", "thigh.L", "LeftHip",
        ],
        LeftKnee => &[
            "LeftLeg", "leftLowerLeg", "calf_l", "Calf_L", "shin.L", "LeftLowerLeg", "LeftKnee",
            "LeftShin", "L_Calf", "left_shin", "LowerLeg_L",
        ],
        LeftAnkle => &[
            "LeftFoot", "leftFoot", "foot_l", "Foot_L", "foot.L", "LeftAnkle", "L_Foot", "left_foot",
            "Ankle_L",
        ],

        RightHipPitch => &[
            "RightUpLeg", "rightUpperLeg", "thigh_r", "Thigh_R", "thigh.R", "RightUpperLeg", "RightThigh",
            "RightHip", "R_Thigh", "right_thigh", "UpperLeg_R",
        ],
        RightHipYaw => &[
            "RHipJoint", "RightHipJoint", "RightUpLeg", "rightUpperLeg", "thigh_r", "thigh.R", "RightHip",
        ],
        RightKnee => &[
            "RightLeg", "rightLowerLeg", "calf_r", "Calf_R", "shin.R", "RightLowerLeg", "RightKnee",
            "RightShin", "R_Calf", "right_shin", "LowerLeg_R",
        ],
        RightAnkle => &[
            "RightFoot", "rightFoot", "foot_r", "Foot_R", "foot.R", "RightAnkle", "R_Foot", "right_foot",
            "Ankle_R",
        ],
    }
}
