//! Anthropometric ratios and resolved saddle configuration.
//!
//! The ratios are empirical fractions of gross body measurements, kept as a
//! tunable struct rather than scattered literals so a product pass can adjust
//! them without touching placement code. Saddle overrides from the cockpit
//! merge over module defaults in one explicit step before the engine runs.

use crate::bike::{CockpitSetup, RiderSetup};

/// Default horizontal saddle setback behind the seatpost top (mm)
pub const DEFAULT_SADDLE_SETBACK: f32 = 30.0;

/// Default saddle rail-to-nose length (mm)
pub const DEFAULT_SADDLE_LENGTH: f32 = 270.0;

/// Default sit-bone contact offset behind the saddle reference (mm)
pub const DEFAULT_SITBONE_OFFSET: f32 = 20.0;

/// Head ellipse width as a share of head height, used by the renderer
pub const HEAD_WIDTH_RATIO: f32 = 0.7;

/// Body segment ratios.
///
/// Leg segments are fractions of the augmented inseam (inseam plus the hip
/// joint offset); arm segments and head/neck are fractions of full height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyRatios {
    /// Knee-to-ankle share of the augmented inseam
    pub lower_leg: f32,
    /// Hip-to-knee share of the augmented inseam
    pub upper_leg: f32,
    /// Hip joint center offset from the sit point, as a share of inseam
    pub hip_offset: f32,
    /// Head height as a share of rider height
    pub head_height: f32,
    /// Neck length as a share of rider height
    pub neck_length: f32,
    /// Shoulder-to-elbow share of rider height
    pub upper_arm: f32,
    /// Elbow-to-hand share of rider height
    pub forearm: f32,
    /// Neck pitch from horizontal, degrees (more upright than the torso)
    pub neck_angle: f32,
    /// Maximum foot pitch at the bottom of the pedal stroke, degrees
    pub foot_angle: f32,
}

impl Default for BodyRatios {
    fn default() -> Self {
        Self {
            lower_leg: 0.46,
            upper_leg: 0.54,
            hip_offset: 0.095,
            head_height: 0.12,
            neck_length: 0.055,
            upper_arm: 0.186,
            forearm: 0.146,
            neck_angle: 60.0,
            foot_angle: 20.0,
        }
    }
}

/// Limb segment lengths for one rider, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbLengths {
    pub lower_leg: f32,
    pub upper_leg: f32,
    pub upper_arm: f32,
    pub forearm: f32,
}

impl LimbLengths {
    /// Derive segment lengths from the rider's gross measurements
    pub fn for_rider(ratios: &BodyRatios, rider: &RiderSetup) -> Self {
        let seated_inseam = rider.inseam * (1.0 + ratios.hip_offset);
        Self {
            lower_leg: seated_inseam * ratios.lower_leg,
            upper_leg: seated_inseam * ratios.upper_leg,
            upper_arm: rider.height * ratios.upper_arm,
            forearm: rider.height * ratios.forearm,
        }
    }

    /// Full hip-to-foot reach with the leg straight
    pub fn leg_total(&self) -> f32 {
        self.lower_leg + self.upper_leg
    }
}

/// Resolved saddle configuration: user overrides merged over defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaddleFit {
    pub setback: f32,
    pub length: f32,
    pub sitbone_offset: f32,
}

impl Default for SaddleFit {
    fn default() -> Self {
        Self {
            setback: DEFAULT_SADDLE_SETBACK,
            length: DEFAULT_SADDLE_LENGTH,
            sitbone_offset: DEFAULT_SITBONE_OFFSET,
        }
    }
}

impl SaddleFit {
    /// Merge any cockpit overrides over the module defaults
    pub fn resolve(cockpit: &CockpitSetup) -> Self {
        let defaults = Self::default();
        Self {
            setback: cockpit.saddle_setback.unwrap_or(defaults.setback),
            length: cockpit.saddle_length.unwrap_or(defaults.length),
            sitbone_offset: cockpit.sitbone_offset.unwrap_or(defaults.sitbone_offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limb_lengths_scale_with_inseam() {
        let ratios = BodyRatios::default();
        let rider = RiderSetup::default();
        let limbs = LimbLengths::for_rider(&ratios, &rider);

        let seated = rider.inseam * 1.095;
        assert!((limbs.lower_leg - seated * 0.46).abs() < 1e-3);
        assert!((limbs.upper_leg - seated * 0.54).abs() < 1e-3);
        assert!((limbs.leg_total() - seated).abs() < 1e-2);
    }

    #[test]
    fn test_saddle_overrides_win_over_defaults() {
        let mut cockpit = CockpitSetup::default();
        cockpit.saddle_setback = Some(42.0);

        let fit = SaddleFit::resolve(&cockpit);
        assert_eq!(fit.setback, 42.0);
        assert_eq!(fit.length, DEFAULT_SADDLE_LENGTH);
        assert_eq!(fit.sitbone_offset, DEFAULT_SITBONE_OFFSET);
    }
}
