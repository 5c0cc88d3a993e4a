//! Derived scalar fit metrics.
//!
//! The knee metrics at fixed crank phases re-run the foot placement and knee
//! solve with everything else held still, so they stay stable while an
//! animation driver spins the live pedal angle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::bike::BikeData;
use crate::body::{BodyRatios, LimbLengths};
use crate::ik::interior_angle;
use crate::rider::{solve_leg_at, RiderPose};

/// Scalar fit outputs for one computed figure.
///
/// Angles are interior joint angles in degrees; lengths are real-world
/// millimeters (the drawing scale is divided back out).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitMetrics {
    /// Knee angle at the bike's current crank phase
    pub knee_angle: f32,
    /// Knee angle with the crank fixed at the bottom of the stroke
    pub knee_angle_at_90: f32,
    /// Knee angle with the crank fixed at the top of the stroke
    pub knee_angle_at_270: f32,
    pub ankle_angle_at_270: f32,
    /// Bar-to-saddle vertical distance, positive when the saddle sits higher
    pub saddle_drop: f32,
    /// Knee-to-pedal-spindle horizontal offset at crank 0, negative when the
    /// knee overshoots the spindle
    pub knee_over_pedal: f32,
    pub shoulder_angle: f32,
    pub elbow_angle: f32,
}

pub(crate) fn compute_metrics(
    bike: &BikeData,
    ratios: &BodyRatios,
    limbs: &LimbLengths,
    pose: &RiderPose,
    saddle_ref: Vec2,
    bar_center: Vec2,
    scale: f32,
) -> FitMetrics {
    let cockpit = &bike.cockpit;
    let rider = &bike.rider;

    let at_90 = solve_leg_at(90.0, cockpit, rider, ratios, limbs, pose.hip_joint, scale);
    let at_270 = solve_leg_at(270.0, cockpit, rider, ratios, limbs, pose.hip_joint, scale);
    let at_0 = solve_leg_at(0.0, cockpit, rider, ratios, limbs, pose.hip_joint, scale);

    let to_mm = if scale.abs() > f32::EPSILON {
        1.0 / scale
    } else {
        0.0
    };

    FitMetrics {
        knee_angle: pose.leg.knee_angle,
        knee_angle_at_90: at_90.knee_angle,
        knee_angle_at_270: at_270.knee_angle,
        ankle_angle_at_270: at_270.ankle_angle,
        saddle_drop: (bar_center.y - saddle_ref.y) * to_mm,
        knee_over_pedal: -(at_0.knee.x - at_0.pedal.x) * to_mm,
        shoulder_angle: interior_angle(pose.shoulder, pose.hip_joint, pose.elbow),
        elbow_angle: interior_angle(pose.elbow, pose.shoulder, pose.hand),
    }
}
