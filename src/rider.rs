//! Rider body placement: foot model, leg and arm chains, torso.
//!
//! The leg solve is deliberately a standalone function of the crank phase so
//! the metrics pass can re-run it at fixed phases (0, 90, 270 degrees)
//! without touching the rest of the figure.

use glam::Vec2;

use crate::bike::{BikeData, CockpitSetup, RiderSetup};
use crate::body::{BodyRatios, LimbLengths};
use crate::ik::{self, Bend};
use crate::math::{angle_dir, elevation_dir};

/// Ankle offset trailing the cleat along the foot (mm)
const CLEAT_SETBACK: f32 = 60.0;

/// Leg pose at one crank phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegSolve {
    pub pedal: Vec2,
    pub cleat: Vec2,
    pub foot: Vec2,
    pub knee: Vec2,
    /// Interior knee angle, degrees
    pub knee_angle: f32,
    /// Interior ankle angle between shin and foot, degrees
    pub ankle_angle: f32,
}

/// Foot pitch through the pedal stroke, degrees.
///
/// Level over the top of the stroke (crank at 270), fully pitched at the
/// bottom (crank at 90), blending with the crank's sine in between.
pub fn foot_pitch(ratios: &BodyRatios, pedal_angle: f32) -> f32 {
    ratios.foot_angle * (1.0 + pedal_angle.to_radians().sin()) * 0.5
}

/// Place the foot and solve the knee for one crank phase, holding every
/// other input fixed.
#[allow(clippy::too_many_arguments)]
pub fn solve_leg_at(
    pedal_angle: f32,
    cockpit: &CockpitSetup,
    rider: &RiderSetup,
    ratios: &BodyRatios,
    limbs: &LimbLengths,
    hip_joint: Vec2,
    scale: f32,
) -> LegSolve {
    let pedal = angle_dir(pedal_angle) * (cockpit.crank_length * scale);

    // Ball of the foot rides sole-thickness above the pedal axle; the ankle
    // trails the cleat along the pitched foot
    let cleat = pedal - Vec2::new(0.0, rider.shoe_sole * scale);
    let pitch = foot_pitch(ratios, pedal_angle).to_radians();
    let foot = cleat - Vec2::new(pitch.cos(), pitch.sin()) * (CLEAT_SETBACK * scale);

    let knee = ik::solve_two_link(
        hip_joint,
        foot,
        limbs.lower_leg * scale,
        limbs.upper_leg * scale,
        Bend::Forward,
    );

    LegSolve {
        pedal,
        cleat,
        foot,
        knee,
        knee_angle: ik::interior_angle(knee, foot, hip_joint),
        ankle_angle: ik::interior_angle(foot, knee, cleat),
    }
}

/// Full rider skeleton seated at `sit`, reaching for `hand_target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiderPose {
    pub sit: Vec2,
    pub hip_joint: Vec2,
    pub shoulder: Vec2,
    pub neck_top: Vec2,
    pub head_center: Vec2,
    pub elbow: Vec2,
    pub hand: Vec2,
    pub leg: LegSolve,
}

pub fn place_rider(
    bike: &BikeData,
    ratios: &BodyRatios,
    limbs: &LimbLengths,
    sit: Vec2,
    hand_target: Vec2,
    scale: f32,
) -> RiderPose {
    let rider = &bike.rider;
    let torso_dir = elevation_dir(rider.torso_angle);

    // Anatomical hip joint center sits forward/above the saddle contact
    let hip_joint = sit + torso_dir * (ratios.hip_offset * rider.inseam * scale);
    let leg = solve_leg_at(
        bike.cockpit.pedal_angle,
        &bike.cockpit,
        rider,
        ratios,
        limbs,
        hip_joint,
        scale,
    );

    let head_height = rider.height * ratios.head_height;
    let neck_length = rider.height * ratios.neck_length;
    let torso_length = rider.height - rider.inseam - head_height - neck_length;
    let shoulder = sit + torso_dir * (torso_length * scale);

    // Neck carries on more upright than the torso, head centered along it
    let neck_dir = elevation_dir(ratios.neck_angle);
    let neck_top = shoulder + neck_dir * (neck_length * scale);
    let head_center = neck_top + neck_dir * (head_height * 0.5 * scale);

    let elbow = ik::solve_two_link(
        shoulder,
        hand_target,
        limbs.forearm * scale,
        limbs.upper_arm * scale,
        Bend::Back,
    );

    RiderPose {
        sit,
        hip_joint,
        shoulder,
        neck_top,
        head_center,
        elbow,
        hand: hand_target,
        leg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_bike() -> BikeData {
        serde_json::from_str(
            r#"{
                "geometry": {
                    "stack": 560, "reach": 390,
                    "headTubeAngle": 73, "seatTubeAngle": 74,
                    "bbDrop": 70, "seatTubeLength": 520, "headTubeLength": 150
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_foot_pitch_blends_through_the_stroke() {
        let ratios = BodyRatios::default();

        // Bottom of the stroke: fully pitched
        assert!((foot_pitch(&ratios, 90.0) - ratios.foot_angle).abs() < 1e-4);
        // Top of the stroke: level
        assert!(foot_pitch(&ratios, 270.0).abs() < 1e-4);
        // Quarter phases land halfway
        assert!((foot_pitch(&ratios, 0.0) - ratios.foot_angle * 0.5).abs() < 1e-4);
        assert!((foot_pitch(&ratios, 180.0) - ratios.foot_angle * 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_leg_solve_preserves_segment_lengths() {
        let bike = test_bike();
        let ratios = BodyRatios::default();
        let limbs = LimbLengths::for_rider(&ratios, &bike.rider);
        // A hip well within reach of the bottom-of-stroke pedal
        let hip = Vec2::new(-120.0, -520.0);

        let leg = solve_leg_at(90.0, &bike.cockpit, &bike.rider, &ratios, &limbs, hip, 0.8);

        assert!((leg.knee.distance(leg.foot) - limbs.lower_leg * 0.8).abs() < 0.1);
        assert!((leg.knee.distance(hip) - limbs.upper_leg * 0.8).abs() < 0.1);
        assert!(leg.knee_angle > 0.0 && leg.knee_angle <= 180.0);
    }

    #[test]
    fn test_knee_bends_forward() {
        let bike = test_bike();
        let ratios = BodyRatios::default();
        let limbs = LimbLengths::for_rider(&ratios, &bike.rider);
        let hip = Vec2::new(-120.0, -520.0);

        let leg = solve_leg_at(90.0, &bike.cockpit, &bike.rider, &ratios, &limbs, hip, 0.8);

        // Knee ahead of the straight hip-foot chord
        let chord_x_at_knee = {
            let t = (leg.knee.y - leg.foot.y) / (hip.y - leg.foot.y);
            leg.foot.x + t * (hip.x - leg.foot.x)
        };
        assert!(leg.knee.x > chord_x_at_knee);
    }

    #[test]
    fn test_rider_pose_chain_is_connected() {
        let bike = test_bike();
        let ratios = BodyRatios::default();
        let limbs = LimbLengths::for_rider(&ratios, &bike.rider);
        let sit = Vec2::new(-150.0, -480.0);
        let hand = Vec2::new(380.0, -350.0);

        let pose = place_rider(&bike, &ratios, &limbs, sit, hand, 0.8);

        // Shoulder sits up-forward of the saddle along the torso
        assert!(pose.shoulder.x > sit.x);
        assert!(pose.shoulder.y < sit.y);
        // Arm segments keep their lengths when the bar is reachable
        let reach = pose.shoulder.distance(hand);
        if reach < (limbs.upper_arm + limbs.forearm) * 0.8 {
            assert!((pose.elbow.distance(hand) - limbs.forearm * 0.8).abs() < 0.1);
            assert!((pose.elbow.distance(pose.shoulder) - limbs.upper_arm * 0.8).abs() < 0.1);
        }
        assert!(pose.head_center.y < pose.neck_top.y);
    }
}
