use std::collections::HashSet;

use rigmap_core::structural::retain_anatomical;
use rigmap_core::{
    auto_map_bones, confidence_label, to_mapping_record, CanonicalJoint, Limb, PassKind,
    PatternRegistry,
};

use CanonicalJoint::*;

#[test]
fn mixamo_upper_body_maps_arms_via_prefix_pass() {
    let reg = PatternRegistry::builtin();
    let bones = ["mixamorig:Hips", "mixamorig:Spine", "mixamorig:LeftArm", "mixamorig:RightArm"];
    let r = auto_map_bones(&reg, &bones, None);

    let torso = r.mapping_for(Torso).expect("torso mapped");
    assert!(torso.bone_name == "mixamorig:Hips" || torso.bone_name == "mixamorig:Spine");
    assert!(matches!(torso.pass, PassKind::Exact | PassKind::PrefixStripped));

    let left = r.mapping_for(LeftShoulderPitch).expect("left shoulder mapped");
    assert_eq!(left.bone_name, "mixamorig:LeftArm");
    assert_eq!(left.pass, PassKind::PrefixStripped);
    assert_eq!(left.confidence, 0.9);

    let right = r.mapping_for(RightShoulderPitch).expect("right shoulder mapped");
    assert_eq!(right.bone_name, "mixamorig:RightArm");
    assert_eq!(right.confidence, 0.9);

    let expected_unmapped = [
        NeckYaw, NeckPitch, LeftWrist, RightWrist, LeftGrip, RightGrip, LeftHipPitch, LeftHipYaw,
        LeftKnee, LeftAnkle, RightHipPitch, RightHipYaw, RightKnee, RightAnkle,
    ];
    for j in expected_unmapped {
        assert!(r.unmapped_joints.contains(&j), "{} should be unmapped", j);
    }
}

#[test]
fn contested_bone_goes_to_first_declared_joint() {
    let reg = PatternRegistry::builtin();
    let allowed = [LeftHipPitch, LeftHipYaw];
    let r = auto_map_bones(&reg, &["Hips", "LeftUpLeg", "RightUpLeg"], Some(&allowed));

    let pitch = r.mapping_for(LeftHipPitch).expect("hip pitch mapped");
    assert_eq!(pitch.bone_name, "LeftUpLeg");
    assert_eq!(pitch.pass, PassKind::Exact);
    assert_eq!(r.unmapped_joints, vec![LeftHipYaw]);
    assert_eq!(r.unmapped_bones, vec!["Hips", "RightUpLeg"]);
    assert!((r.overall_confidence - 0.5).abs() < 1e-12);
}

#[test]
fn empty_input_maps_nothing() {
    let reg = PatternRegistry::builtin();
    let none: [&str; 0] = [];
    let r = auto_map_bones(&reg, &none, None);
    assert!(r.mappings.is_empty());
    assert_eq!(r.unmapped_joints, CanonicalJoint::ALL.to_vec());
    assert!(r.unmapped_bones.is_empty());
    assert_eq!(r.overall_confidence, 0.0);

    let allowed = Limb::RightArm.joints();
    let r = auto_map_bones(&reg, &none, Some(allowed.as_slice()));
    assert_eq!(r.unmapped_joints, allowed);
}

#[test]
fn suffixed_bone_resolves_by_word_boundary() {
    let reg = PatternRegistry::builtin();
    let r = auto_map_bones(&reg, &["UpperArm_L_01"], None);
    let m = r.mapping_for(LeftShoulderPitch).expect("word-boundary match");
    assert_eq!(m.bone_name, "UpperArm_L_01");
    assert_eq!(m.pass, PassKind::WordBoundary);
    assert_eq!(m.confidence, 0.6);
    assert_eq!(r.mappings.len(), 1);
}

#[test]
fn confidence_labels() {
    assert_eq!(confidence_label(1.0).text, "Exact");
    assert_eq!(confidence_label(0.85).text, "Medium");
    assert_eq!(confidence_label(0.3).text, "Low");
}

#[test]
fn full_mixamo_rig_maps_all_but_hip_yaw() {
    let reg = PatternRegistry::builtin();
    let bones: Vec<String> = [
        "Hips", "Spine", "Spine1", "Spine2", "Neck", "Head", "HeadTop_End",
        "LeftShoulder", "LeftArm", "LeftForeArm", "LeftHand", "LeftHandIndex1", "LeftHandIndex2",
        "RightShoulder", "RightArm", "RightForeArm", "RightHand", "RightHandIndex1",
        "RightHandIndex2",
        "LeftUpLeg", "LeftLeg", "LeftFoot", "LeftToeBase",
        "RightUpLeg", "RightLeg", "RightFoot", "RightToeBase",
    ]
    .iter()
    .map(|b| format!("mixamorig:{}", b))
    .collect();
    let r = auto_map_bones(&reg, &bones, None);

    let rec = to_mapping_record(&r);
    assert_eq!(rec[&Torso], "mixamorig:Hips");
    assert_eq!(rec[&NeckYaw], "mixamorig:Neck");
    assert_eq!(rec[&NeckPitch], "mixamorig:Head");
    assert_eq!(rec[&LeftShoulderPitch], "mixamorig:LeftArm");
    assert_eq!(rec[&LeftShoulderYaw], "mixamorig:LeftShoulder");
    assert_eq!(rec[&LeftElbow], "mixamorig:LeftForeArm");
    assert_eq!(rec[&LeftWrist], "mixamorig:LeftHand");
    assert_eq!(rec[&LeftGrip], "mixamorig:LeftHandIndex1");
    assert_eq!(rec[&RightGrip], "mixamorig:RightHandIndex1");
    assert_eq!(rec[&LeftHipPitch], "mixamorig:LeftUpLeg");
    assert_eq!(rec[&LeftKnee], "mixamorig:LeftLeg");
    assert_eq!(rec[&LeftAnkle], "mixamorig:LeftFoot");
    assert_eq!(rec[&RightAnkle], "mixamorig:RightFoot");
    assert_eq!(r.unmapped_joints, vec![LeftHipYaw, RightHipYaw]);
    assert!(r.mappings.iter().all(|m| m.pass == PassKind::PrefixStripped));
}

#[test]
fn ue5_mannequin_maps_by_exact_names() {
    let reg = PatternRegistry::builtin();
    let bones = [
        "root", "pelvis", "spine_01", "spine_02", "neck_01", "head",
        "clavicle_l", "upperarm_l", "lowerarm_l", "hand_l", "index_01_l",
        "clavicle_r", "upperarm_r", "lowerarm_r", "hand_r", "index_01_r",
        "thigh_l", "calf_l", "foot_l", "thigh_r", "calf_r", "foot_r",
    ];
    let filtered = retain_anatomical(&bones);
    let r = auto_map_bones(&reg, &filtered, None);

    assert_eq!(r.bone_for(Torso), Some("pelvis"));
    assert_eq!(r.bone_for(NeckYaw), Some("neck_01"));
    assert_eq!(r.bone_for(NeckPitch), Some("head"));
    assert_eq!(r.bone_for(LeftShoulderPitch), Some("upperarm_l"));
    assert_eq!(r.bone_for(LeftShoulderYaw), Some("clavicle_l"));
    assert_eq!(r.bone_for(RightElbow), Some("lowerarm_r"));
    assert_eq!(r.bone_for(LeftHipPitch), Some("thigh_l"));
    assert_eq!(r.bone_for(RightKnee), Some("calf_r"));
    assert_eq!(r.mapping_for(LeftWrist).map(|m| m.pass), Some(PassKind::Exact));
    assert!(!r.unmapped_bones.contains(&"root".to_string()));

    // Without the caller-side filter the scaffold node reaches the engine and
    // comes back unclaimed.
    let unfiltered = auto_map_bones(&reg, &bones, None);
    assert_eq!(unfiltered.mappings, r.mappings);
    assert_eq!(unfiltered.unmapped_bones.first().map(String::as_str), Some("root"));
}

#[test]
fn rigify_deform_bones_map_through_prefix_stripping() {
    let reg = PatternRegistry::builtin();
    let bones = [
        "DEF-spine",
        "DEF-upper_arm.L",
        "DEF-forearm.L",
        "DEF-hand.L",
        "DEF-thigh.R",
        "DEF-shin.R",
        "DEF-foot.R",
    ];
    let r = auto_map_bones(&reg, &bones, None);

    assert_eq!(r.bone_for(Torso), Some("DEF-spine"));
    assert_eq!(r.bone_for(LeftShoulderPitch), Some("DEF-upper_arm.L"));
    assert_eq!(r.bone_for(LeftElbow), Some("DEF-forearm.L"));
    assert_eq!(r.bone_for(LeftWrist), Some("DEF-hand.L"));
    assert_eq!(r.bone_for(RightHipPitch), Some("DEF-thigh.R"));
    assert_eq!(r.bone_for(RightKnee), Some("DEF-shin.R"));
    assert_eq!(r.bone_for(RightAnkle), Some("DEF-foot.R"));
    assert!(r.mappings.iter().all(|m| m.pass == PassKind::PrefixStripped));
}

#[test]
fn vrm_names_map_exactly() {
    let reg = PatternRegistry::builtin();
    let bones = [
        "hips",
        "spine",
        "chest",
        "neck",
        "head",
        "leftUpperArm",
        "leftLowerArm",
        "leftHand",
        "rightUpperLeg",
        "rightLowerLeg",
        "rightFoot",
    ];
    let r = auto_map_bones(&reg, &bones, None);
    assert_eq!(r.bone_for(Torso), Some("hips"));
    assert_eq!(r.bone_for(LeftElbow), Some("leftLowerArm"));
    assert_eq!(r.bone_for(RightKnee), Some("rightLowerLeg"));
    assert!(r.mappings.iter().all(|m| m.pass == PassKind::Exact));
}

#[test]
fn separator_variants_map_by_normalized_pass() {
    let reg = PatternRegistry::builtin();
    let r = auto_map_bones(&reg, &["Left-Fore-Arm", "LEFT_HAND"], Some(&[LeftElbow, LeftWrist]));
    assert_eq!(r.mapping_for(LeftElbow).map(|m| m.pass), Some(PassKind::Normalized));
    assert_eq!(r.mapping_for(LeftWrist).map(|m| m.confidence), Some(0.8));
}

#[test]
fn injective_over_realistic_rig() {
    let reg = PatternRegistry::builtin();
    let bones =
        ["Hips", "LeftUpLeg", "LeftHip", "LHipJoint", "LeftLeg", "LeftFoot", "Spine", "Chest"];
    let r = auto_map_bones(&reg, &bones, None);
    let names: HashSet<&str> = r.mappings.iter().map(|m| m.bone_name.as_str()).collect();
    assert_eq!(names.len(), r.mappings.len());
    assert_eq!(r.bone_for(LeftHipPitch), Some("LeftUpLeg"));
    assert_eq!(r.bone_for(LeftHipYaw), Some("LHipJoint"));
}
