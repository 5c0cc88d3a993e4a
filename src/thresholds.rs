//! Fit-metric warning thresholds.
//!
//! Pure data consumed by the presentation layer: each classifier maps one
//! metric onto ok/warning/critical, preserving the boundary operators of the
//! fitting guidelines exactly (a knee angle of exactly 137 at the bottom of
//! the stroke is ok, exactly 134 is critical).

use serde::Serialize;
use static_assertions::const_assert;

use crate::metrics::FitMetrics;

pub const KNEE_90_CRIT_LOW: f32 = 134.0;
pub const KNEE_90_WARN_LOW: f32 = 137.0;
pub const KNEE_90_WARN_HIGH: f32 = 149.0;
pub const KNEE_90_CRIT_HIGH: f32 = 153.0;

pub const KNEE_270_CRIT_LOW: f32 = 60.0;
pub const KNEE_270_WARN_LOW: f32 = 67.0;

/// Saddle-to-bar drop bounds, mm
pub const DROP_WARN_HIGH: f32 = 90.0;
pub const DROP_CRIT_HIGH: f32 = 130.0;

pub const SHOULDER_CRIT_LOW: f32 = 75.0;
pub const SHOULDER_WARN_LOW: f32 = 85.0;
pub const SHOULDER_WARN_HIGH: f32 = 100.0;
pub const SHOULDER_CRIT_HIGH: f32 = 110.0;

pub const ELBOW_WARN_LOW: f32 = 140.0;
pub const ELBOW_WARN_BAND_LOW: f32 = 160.0;
pub const ELBOW_CRIT_HIGH: f32 = 170.0;

pub const ANKLE_270_CRIT_LOW: f32 = 50.0;

// Boundary ordering is load-bearing for the classifiers below
const_assert!(KNEE_90_CRIT_LOW < KNEE_90_WARN_LOW);
const_assert!(KNEE_90_WARN_LOW < KNEE_90_WARN_HIGH);
const_assert!(KNEE_90_WARN_HIGH < KNEE_90_CRIT_HIGH);
const_assert!(KNEE_270_CRIT_LOW < KNEE_270_WARN_LOW);
const_assert!(DROP_WARN_HIGH < DROP_CRIT_HIGH);
const_assert!(SHOULDER_CRIT_LOW < SHOULDER_WARN_LOW);
const_assert!(SHOULDER_WARN_HIGH < SHOULDER_CRIT_HIGH);
const_assert!(ELBOW_WARN_BAND_LOW < ELBOW_CRIT_HIGH);

/// Classification of one metric against its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

pub fn classify_knee_90(value: f32) -> Severity {
    if value <= KNEE_90_CRIT_LOW || value >= KNEE_90_CRIT_HIGH {
        Severity::Critical
    } else if value < KNEE_90_WARN_LOW || value > KNEE_90_WARN_HIGH {
        Severity::Warning
    } else {
        Severity::Ok
    }
}

pub fn classify_knee_270(value: f32) -> Severity {
    if value <= KNEE_270_CRIT_LOW {
        Severity::Critical
    } else if value < KNEE_270_WARN_LOW {
        Severity::Warning
    } else {
        Severity::Ok
    }
}

pub fn classify_saddle_drop(value: f32) -> Severity {
    if value > DROP_CRIT_HIGH {
        Severity::Critical
    } else if value > DROP_WARN_HIGH {
        Severity::Warning
    } else {
        Severity::Ok
    }
}

/// A knee overshooting the pedal spindle only ever warns
pub fn classify_knee_over_pedal(value: f32) -> Severity {
    if value < 0.0 {
        Severity::Warning
    } else {
        Severity::Ok
    }
}

pub fn classify_shoulder(value: f32) -> Severity {
    if value < SHOULDER_CRIT_LOW || value > SHOULDER_CRIT_HIGH {
        Severity::Critical
    } else if value < SHOULDER_WARN_LOW || value > SHOULDER_WARN_HIGH {
        Severity::Warning
    } else {
        Severity::Ok
    }
}

pub fn classify_elbow(value: f32) -> Severity {
    if value > ELBOW_CRIT_HIGH {
        Severity::Critical
    } else if value < ELBOW_WARN_LOW || value >= ELBOW_WARN_BAND_LOW {
        Severity::Warning
    } else {
        Severity::Ok
    }
}

pub fn classify_ankle_270(value: f32) -> Severity {
    if value < ANKLE_270_CRIT_LOW {
        Severity::Critical
    } else {
        Severity::Ok
    }
}

/// One severity per metric, the shape the UI colors its readouts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitReport {
    pub knee_angle_at_90: Severity,
    pub knee_angle_at_270: Severity,
    pub ankle_angle_at_270: Severity,
    pub saddle_drop: Severity,
    pub knee_over_pedal: Severity,
    pub shoulder_angle: Severity,
    pub elbow_angle: Severity,
}

impl FitReport {
    pub fn evaluate(metrics: &FitMetrics) -> Self {
        Self {
            knee_angle_at_90: classify_knee_90(metrics.knee_angle_at_90),
            knee_angle_at_270: classify_knee_270(metrics.knee_angle_at_270),
            ankle_angle_at_270: classify_ankle_270(metrics.ankle_angle_at_270),
            saddle_drop: classify_saddle_drop(metrics.saddle_drop),
            knee_over_pedal: classify_knee_over_pedal(metrics.knee_over_pedal),
            shoulder_angle: classify_shoulder(metrics.shoulder_angle),
            elbow_angle: classify_elbow(metrics.elbow_angle),
        }
    }

    /// The single worst severity across all metrics
    pub fn worst(&self) -> Severity {
        [
            self.knee_angle_at_90,
            self.knee_angle_at_270,
            self.ankle_angle_at_270,
            self.saddle_drop,
            self.knee_over_pedal,
            self.shoulder_angle,
            self.elbow_angle,
        ]
        .into_iter()
        .max()
        .unwrap_or(Severity::Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knee_90_reference_classifications() {
        assert_eq!(classify_knee_90(145.0), Severity::Ok);
        assert_eq!(classify_knee_90(135.0), Severity::Warning);
        assert_eq!(classify_knee_90(130.0), Severity::Critical);
    }

    #[test]
    fn test_knee_90_boundaries_exact() {
        assert_eq!(classify_knee_90(134.0), Severity::Critical);
        assert_eq!(classify_knee_90(137.0), Severity::Ok);
        assert_eq!(classify_knee_90(149.0), Severity::Ok);
        assert_eq!(classify_knee_90(149.5), Severity::Warning);
        assert_eq!(classify_knee_90(153.0), Severity::Critical);
    }

    #[test]
    fn test_knee_270_boundaries() {
        assert_eq!(classify_knee_270(60.0), Severity::Critical);
        assert_eq!(classify_knee_270(63.0), Severity::Warning);
        assert_eq!(classify_knee_270(67.0), Severity::Ok);
    }

    #[test]
    fn test_saddle_drop_boundaries() {
        assert_eq!(classify_saddle_drop(90.0), Severity::Ok);
        assert_eq!(classify_saddle_drop(91.0), Severity::Warning);
        assert_eq!(classify_saddle_drop(130.0), Severity::Warning);
        assert_eq!(classify_saddle_drop(131.0), Severity::Critical);
        assert_eq!(classify_saddle_drop(-20.0), Severity::Ok);
    }

    #[test]
    fn test_knee_over_pedal_only_warns() {
        assert_eq!(classify_knee_over_pedal(5.0), Severity::Ok);
        assert_eq!(classify_knee_over_pedal(0.0), Severity::Ok);
        assert_eq!(classify_knee_over_pedal(-1.0), Severity::Warning);
    }

    #[test]
    fn test_shoulder_bands() {
        assert_eq!(classify_shoulder(70.0), Severity::Critical);
        assert_eq!(classify_shoulder(80.0), Severity::Warning);
        assert_eq!(classify_shoulder(92.0), Severity::Ok);
        assert_eq!(classify_shoulder(105.0), Severity::Warning);
        assert_eq!(classify_shoulder(115.0), Severity::Critical);
    }

    #[test]
    fn test_elbow_warning_band() {
        assert_eq!(classify_elbow(150.0), Severity::Ok);
        assert_eq!(classify_elbow(139.0), Severity::Warning);
        assert_eq!(classify_elbow(165.0), Severity::Warning);
        assert_eq!(classify_elbow(170.0), Severity::Warning);
        assert_eq!(classify_elbow(171.0), Severity::Critical);
    }

    #[test]
    fn test_ankle_critical_floor() {
        assert_eq!(classify_ankle_270(49.0), Severity::Critical);
        assert_eq!(classify_ankle_270(50.0), Severity::Ok);
    }

    #[test]
    fn test_report_worst_picks_the_highest_severity() {
        let metrics = FitMetrics {
            knee_angle: 140.0,
            knee_angle_at_90: 145.0,
            knee_angle_at_270: 70.0,
            ankle_angle_at_270: 80.0,
            saddle_drop: 60.0,
            knee_over_pedal: 10.0,
            shoulder_angle: 92.0,
            elbow_angle: 155.0,
        };
        let report = FitReport::evaluate(&metrics);
        assert_eq!(report.worst(), Severity::Ok);

        let report = FitReport::evaluate(&FitMetrics {
            knee_angle_at_90: 130.0,
            saddle_drop: 95.0,
            ..metrics
        });
        assert_eq!(report.knee_angle_at_90, Severity::Critical);
        assert_eq!(report.saddle_drop, Severity::Warning);
        assert_eq!(report.worst(), Severity::Critical);
    }
}
