//! Input model: frame geometry, cockpit setup, and rider measurements.
//!
//! All lengths are millimeters, all angles degrees. Fields the catalog data
//! commonly omits fall back to serde defaults (chainstay 410 mm, front-center
//! 600 mm, head tube length 0) so partially specified frames still compute.

use serde::{Deserialize, Serialize};

fn default_chainstay() -> f32 {
    410.0
}

fn default_front_center() -> f32 {
    600.0
}

/// One frame size of one model, as published in a geometry chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BikeGeometry {
    pub stack: f32,
    pub reach: f32,
    /// Steering axis angle from horizontal
    pub head_tube_angle: f32,
    /// Seat tube angle from horizontal
    pub seat_tube_angle: f32,
    #[serde(default)]
    pub fork_length: f32,
    /// Vertical distance the BB sits below the wheel axles
    pub bb_drop: f32,
    #[serde(default)]
    pub head_tube_length: f32,
    pub seat_tube_length: f32,
    /// BB to rear axle, straight line
    #[serde(default = "default_chainstay")]
    pub chainstay_length: f32,
    /// BB to front axle, straight line
    #[serde(default = "default_front_center")]
    pub front_center: f32,
    #[serde(default)]
    pub fork_offset: f32,
    #[serde(default)]
    pub wheelbase: f32,
    #[serde(default)]
    pub standover: f32,
}

impl BikeGeometry {
    /// Field view used by catalog validation
    pub fn named_fields(&self) -> [(&'static str, f32); 13] {
        [
            ("stack", self.stack),
            ("reach", self.reach),
            ("headTubeAngle", self.head_tube_angle),
            ("seatTubeAngle", self.seat_tube_angle),
            ("forkLength", self.fork_length),
            ("bbDrop", self.bb_drop),
            ("headTubeLength", self.head_tube_length),
            ("seatTubeLength", self.seat_tube_length),
            ("chainstayLength", self.chainstay_length),
            ("frontCenter", self.front_center),
            ("forkOffset", self.fork_offset),
            ("wheelbase", self.wheelbase),
            ("standover", self.standover),
        ]
    }
}

/// Where the rider's hands rest on a drop bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HandPosition {
    #[default]
    Hoods,
    Drops,
}

/// User-adjustable contact-point setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CockpitSetup {
    pub spacer_height: f32,
    pub headset_cap: f32,
    pub stem_length: f32,
    /// Negative values rise, positive drop
    pub stem_angle: f32,
    pub bar_reach: f32,
    pub bar_drop: f32,
    pub crank_length: f32,
    /// Phase of the right crank, degrees from the +X axis
    pub pedal_angle: f32,
    #[serde(default)]
    pub hand_position: HandPosition,
    pub seatpost_length: f32,
    #[serde(default)]
    pub saddle_setback: Option<f32>,
    #[serde(default)]
    pub saddle_length: Option<f32>,
    #[serde(default)]
    pub sitbone_offset: Option<f32>,
}

impl Default for CockpitSetup {
    fn default() -> Self {
        Self {
            spacer_height: 25.0,
            headset_cap: 10.0,
            stem_length: 100.0,
            stem_angle: -6.0,
            bar_reach: 80.0,
            bar_drop: 125.0,
            crank_length: 172.5,
            pedal_angle: 0.0,
            hand_position: HandPosition::Hoods,
            seatpost_length: 200.0,
            saddle_setback: None,
            saddle_length: None,
            sitbone_offset: None,
        }
    }
}

/// Rider anthropometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiderSetup {
    pub height: f32,
    pub inseam: f32,
    /// Torso lean from horizontal
    pub torso_angle: f32,
    pub shoe_sole: f32,
}

impl Default for RiderSetup {
    fn default() -> Self {
        Self {
            height: 1780.0,
            inseam: 830.0,
            torso_angle: 40.0,
            shoe_sole: 15.0,
        }
    }
}

/// Complete engine input: one bike with its cockpit and rider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BikeData {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub size: String,
    pub geometry: BikeGeometry,
    #[serde(default)]
    pub cockpit: CockpitSetup,
    #[serde(default)]
    pub rider: RiderSetup,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_defaults_fill_missing_fields() {
        let geo: BikeGeometry = serde_json::from_str(
            r#"{
                "stack": 560, "reach": 390,
                "headTubeAngle": 73, "seatTubeAngle": 74,
                "bbDrop": 70, "seatTubeLength": 520
            }"#,
        )
        .unwrap();

        assert_eq!(geo.chainstay_length, 410.0);
        assert_eq!(geo.front_center, 600.0);
        assert_eq!(geo.head_tube_length, 0.0);
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let result: Result<BikeGeometry, _> =
            serde_json::from_str(r#"{ "stack": 560, "reach": 390 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_hand_position_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&HandPosition::Drops).unwrap(),
            r#""drops""#
        );
    }

    #[test]
    fn test_bike_data_accepts_minimal_input() {
        let bike: BikeData = serde_json::from_str(
            r#"{
                "geometry": {
                    "stack": 560, "reach": 390,
                    "headTubeAngle": 73, "seatTubeAngle": 74,
                    "bbDrop": 70, "seatTubeLength": 520
                }
            }"#,
        )
        .unwrap();

        assert_eq!(bike.cockpit, CockpitSetup::default());
        assert_eq!(bike.rider, RiderSetup::default());
    }
}
