//! Min/max/step bounds for the user-adjustable fields.
//!
//! Pure configuration data applied before values reach the engine: each field
//! snaps to its step grid and clamps into range. Non-finite input is the one
//! thing the engine is allowed to assume never happens, so it is caught and
//! pinned here with a warning.

use crate::bike::{CockpitSetup, RiderSetup};

/// Closed range with a snap step for one adjustable field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLimit {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl FieldLimit {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Snap to the step grid anchored at `min`, then clamp into range
    pub fn apply(&self, value: f32) -> f32 {
        if !value.is_finite() {
            log::warn!("non-finite input pinned to {}", self.min);
            return self.min;
        }
        let snapped = if self.step > 0.0 {
            ((value - self.min) / self.step).round() * self.step + self.min
        } else {
            value
        };
        snapped.clamp(self.min, self.max)
    }
}

pub const SPACER_HEIGHT: FieldLimit = FieldLimit::new(0.0, 80.0, 1.0);
pub const HEADSET_CAP: FieldLimit = FieldLimit::new(0.0, 30.0, 1.0);
pub const STEM_LENGTH: FieldLimit = FieldLimit::new(35.0, 160.0, 5.0);
pub const STEM_ANGLE: FieldLimit = FieldLimit::new(-30.0, 30.0, 1.0);
pub const BAR_REACH: FieldLimit = FieldLimit::new(40.0, 130.0, 5.0);
pub const BAR_DROP: FieldLimit = FieldLimit::new(0.0, 200.0, 5.0);
pub const CRANK_LENGTH: FieldLimit = FieldLimit::new(150.0, 185.0, 2.5);
pub const PEDAL_ANGLE: FieldLimit = FieldLimit::new(0.0, 360.0, 1.0);
pub const SEATPOST_LENGTH: FieldLimit = FieldLimit::new(0.0, 400.0, 1.0);
pub const SADDLE_SETBACK: FieldLimit = FieldLimit::new(-20.0, 80.0, 1.0);
pub const SADDLE_LENGTH: FieldLimit = FieldLimit::new(220.0, 300.0, 5.0);
pub const SITBONE_OFFSET: FieldLimit = FieldLimit::new(0.0, 60.0, 1.0);
pub const RIDER_HEIGHT: FieldLimit = FieldLimit::new(1200.0, 2200.0, 5.0);
pub const RIDER_INSEAM: FieldLimit = FieldLimit::new(500.0, 1100.0, 5.0);
pub const TORSO_ANGLE: FieldLimit = FieldLimit::new(10.0, 80.0, 1.0);
pub const SHOE_SOLE: FieldLimit = FieldLimit::new(0.0, 40.0, 1.0);

/// Clamp every cockpit field onto its grid
pub fn clamp_cockpit(setup: &CockpitSetup) -> CockpitSetup {
    CockpitSetup {
        spacer_height: SPACER_HEIGHT.apply(setup.spacer_height),
        headset_cap: HEADSET_CAP.apply(setup.headset_cap),
        stem_length: STEM_LENGTH.apply(setup.stem_length),
        stem_angle: STEM_ANGLE.apply(setup.stem_angle),
        bar_reach: BAR_REACH.apply(setup.bar_reach),
        bar_drop: BAR_DROP.apply(setup.bar_drop),
        crank_length: CRANK_LENGTH.apply(setup.crank_length),
        pedal_angle: PEDAL_ANGLE.apply(setup.pedal_angle),
        hand_position: setup.hand_position,
        seatpost_length: SEATPOST_LENGTH.apply(setup.seatpost_length),
        saddle_setback: setup.saddle_setback.map(|v| SADDLE_SETBACK.apply(v)),
        saddle_length: setup.saddle_length.map(|v| SADDLE_LENGTH.apply(v)),
        sitbone_offset: setup.sitbone_offset.map(|v| SITBONE_OFFSET.apply(v)),
    }
}

/// Clamp every rider field onto its grid
pub fn clamp_rider(rider: &RiderSetup) -> RiderSetup {
    RiderSetup {
        height: RIDER_HEIGHT.apply(rider.height),
        inseam: RIDER_INSEAM.apply(rider.inseam),
        torso_angle: TORSO_ANGLE.apply(rider.torso_angle),
        shoe_sole: SHOE_SOLE.apply(rider.shoe_sole),
    }
}
