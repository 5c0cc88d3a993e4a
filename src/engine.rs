//! Geometry engine: places every anchor of the bike and rider figure.
//!
//! One pure pass over the input, in dependency order: frame, wheels, cockpit,
//! saddle, drivetrain, then the rider solved against the contact points, then
//! the derived fit metrics. No state survives between calls; comparing two
//! bikes means calling this twice.
//!
//! Coordinates: origin at the bottom bracket, +X toward the front wheel,
//! +Y downward (SVG convention). Every input length is multiplied by one
//! uniform scale before placement, which leaves all angles untouched.

use glam::Vec2;
use serde::Serialize;

use crate::anchor::{AnchorId, PointMap, PointRef, Segment, ARC_POINT_COUNT};
use crate::bike::{BikeData, HandPosition};
use crate::body::{BodyRatios, LimbLengths, SaddleFit};
use crate::math::{angle_dir, from_vertical_dir, horiz_reach};
use crate::metrics::{compute_metrics, FitMetrics};
use crate::rider::place_rider;

/// Uniform millimeters-to-drawing-units scale
pub const DRAW_SCALE: f32 = 0.8;

/// Half the upper headset bearing stack between head tube and spacers (mm)
const HEADSET_BEARING_HALF: f32 = 10.0;

/// Half-length of the drawn pedal body (mm)
const PEDAL_HALF_WIDTH: f32 = 45.0;

/// Bar drop below this is treated as a flat bar: no arc, no drops target (mm)
const MIN_BAR_DROP: f32 = 1.0;

/// Complete engine output for one bike, recomputed from scratch on every
/// input change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryResult {
    pub points: PointMap,
    /// Frame, cockpit and drivetrain lines
    pub segments: Vec<Segment>,
    /// Rider body lines, kept separate so consumers can restyle them
    pub rider_segments: Vec<Segment>,
    pub metrics: FitMetrics,
}

/// Compute the full figure at the default drawing scale
pub fn compute_geometry(bike: &BikeData) -> GeometryResult {
    compute_geometry_scaled(bike, DRAW_SCALE)
}

/// Compute the full figure at an explicit drawing scale
pub fn compute_geometry_scaled(bike: &BikeData, scale: f32) -> GeometryResult {
    compute_geometry_with(bike, &BodyRatios::default(), scale)
}

/// Full pipeline with explicit body ratios
pub fn compute_geometry_with(bike: &BikeData, ratios: &BodyRatios, scale: f32) -> GeometryResult {
    let s = scale;
    let geo = &bike.geometry;
    let cockpit = &bike.cockpit;
    let saddle = SaddleFit::resolve(cockpit);
    let limbs = LimbLengths::for_rider(ratios, &bike.rider);

    // Frame, BB at the origin
    let bb = Vec2::ZERO;
    let head_top = Vec2::new(geo.reach, -geo.stack) * s;
    let steer = angle_dir(geo.head_tube_angle);
    let head_bottom = head_top + steer * (geo.head_tube_length * s);
    let seat_dir = angle_dir(geo.seat_tube_angle);
    let seat_top = bb - seat_dir * (geo.seat_tube_length * s);

    // Both axles share one height above the BB; the horizontal offsets come
    // from the straight-line distances, collapsing instead of going NaN when
    // a declared distance is shorter than the drop
    let axle_y = -geo.bb_drop * s;
    let front_wheel = Vec2::new(horiz_reach(geo.front_center * s, axle_y), axle_y);
    let rear_wheel = Vec2::new(-horiz_reach(geo.chainstay_length * s, axle_y), axle_y);

    // Cockpit stacks up the steering axis, then the stem breaks forward
    let stack_up = (cockpit.spacer_height + cockpit.headset_cap + HEADSET_BEARING_HALF) * s;
    let spacer_top = head_top - steer * stack_up;
    let stem_front = spacer_top
        + from_vertical_dir(geo.head_tube_angle - cockpit.stem_angle) * (cockpit.stem_length * s);
    let bar_center = stem_front + Vec2::new(cockpit.bar_reach * s, 0.0);
    let arc = drop_arc(bar_center, cockpit.bar_drop, s);

    // Seatpost continues the seat tube; the saddle sets back from its top
    let seatpost_top = seat_top - seat_dir * (cockpit.seatpost_length * s);
    let saddle_ref = seatpost_top - Vec2::new(saddle.setback * s, 0.0);
    let half_saddle = Vec2::new(saddle.length * 0.5 * s, 0.0);
    let sit = saddle_ref - Vec2::new(saddle.sitbone_offset * s, 0.0);

    // Drivetrain
    let crank = cockpit.crank_length * s;
    let pedal_right = angle_dir(cockpit.pedal_angle) * crank;
    let pedal_left = angle_dir(cockpit.pedal_angle + 180.0) * crank;
    let pedal_half = Vec2::new(PEDAL_HALF_WIDTH * s, 0.0);

    // Rider reaches the drops when riding them and the bar has any
    let hand_target = match (cockpit.hand_position, arc.last()) {
        (HandPosition::Drops, Some(drops)) => *drops,
        _ => bar_center,
    };
    let pose = place_rider(bike, ratios, &limbs, sit, hand_target, s);

    let mut points = PointMap::new();
    points.set(AnchorId::Bb, bb);
    points.set(AnchorId::HeadTubeTop, head_top);
    points.set(AnchorId::HeadTubeBottom, head_bottom);
    points.set(AnchorId::SeatTubeTop, seat_top);
    points.set(AnchorId::FrontWheel, front_wheel);
    points.set(AnchorId::RearWheel, rear_wheel);
    points.set(AnchorId::SpacerTop, spacer_top);
    points.set(AnchorId::StemFront, stem_front);
    points.set(AnchorId::Handlebar, bar_center);
    points.set(AnchorId::SeatpostTop, seatpost_top);
    points.set(AnchorId::Saddle, saddle_ref);
    points.set(AnchorId::SaddleFront, saddle_ref + half_saddle);
    points.set(AnchorId::SaddleRear, saddle_ref - half_saddle);
    points.set(AnchorId::SitBone, sit);
    points.set(AnchorId::PedalRight, pedal_right);
    points.set(AnchorId::PedalLeft, pedal_left);
    points.set(AnchorId::PedalRightFront, pedal_right + pedal_half);
    points.set(AnchorId::PedalRightRear, pedal_right - pedal_half);
    points.set(AnchorId::PedalLeftFront, pedal_left + pedal_half);
    points.set(AnchorId::PedalLeftRear, pedal_left - pedal_half);
    points.set(AnchorId::Cleat, pose.leg.cleat);
    points.set(AnchorId::Foot, pose.leg.foot);
    points.set(AnchorId::Knee, pose.leg.knee);
    points.set(AnchorId::HipJoint, pose.hip_joint);
    points.set(AnchorId::Shoulder, pose.shoulder);
    points.set(AnchorId::NeckTop, pose.neck_top);
    points.set(AnchorId::HeadCenter, pose.head_center);
    points.set(AnchorId::Elbow, pose.elbow);
    points.set(AnchorId::Hand, pose.hand);
    points.set_arc(arc);

    let segments = bike_segments(points.arc().len());
    let rider_segments = rider_segments();
    let metrics = compute_metrics(bike, ratios, &limbs, &pose, saddle_ref, bar_center, s);

    GeometryResult {
        points,
        segments,
        rider_segments,
        metrics,
    }
}

/// Semicircular drop-bar arc below (or above, by sign) the bar center.
///
/// Sweeps -90..+90 degrees around a center offset half the drop from the
/// bar, so the first point coincides with the bar center and the last lands
/// a full drop below it.
fn drop_arc(bar_center: Vec2, bar_drop: f32, scale: f32) -> Vec<Vec2> {
    if bar_drop.abs() < MIN_BAR_DROP {
        return Vec::new();
    }
    let side = bar_drop.signum();
    let radius = bar_drop.abs() * 0.5 * scale;
    let center = bar_center + Vec2::new(0.0, side * radius);
    (0..ARC_POINT_COUNT)
        .map(|i| {
            let sweep = i as f32 / (ARC_POINT_COUNT - 1) as f32;
            let a = (180.0 * sweep - 90.0).to_radians();
            center + Vec2::new(a.cos(), side * a.sin()) * radius
        })
        .collect()
}

fn bike_segments(arc_len: usize) -> Vec<Segment> {
    use AnchorId::*;
    let mut segments = vec![
        // Frame tubes
        Segment::between(SeatTubeTop, HeadTubeTop),
        Segment::between(Bb, SeatTubeTop),
        Segment::between(Bb, HeadTubeBottom),
        Segment::between(HeadTubeTop, HeadTubeBottom),
        Segment::between(HeadTubeBottom, FrontWheel),
        Segment::between(Bb, RearWheel),
        Segment::between(SeatTubeTop, RearWheel),
        // Saddle
        Segment::between(SeatTubeTop, SeatpostTop),
        Segment::between(SaddleRear, SaddleFront),
        // Cockpit
        Segment::between(HeadTubeTop, SpacerTop),
        Segment::between(SpacerTop, StemFront),
        Segment::between(StemFront, Handlebar),
        // Drivetrain
        Segment::between(Bb, PedalRight),
        Segment::between(Bb, PedalLeft),
        Segment::between(PedalRightRear, PedalRightFront),
        Segment::between(PedalLeftRear, PedalLeftFront),
    ];
    if arc_len > 0 {
        segments.push(Segment(Handlebar.into(), PointRef::Arc(0)));
        for i in 0..arc_len - 1 {
            segments.push(Segment(PointRef::Arc(i), PointRef::Arc(i + 1)));
        }
    }
    segments
}

fn rider_segments() -> Vec<Segment> {
    use AnchorId::*;
    vec![
        Segment::between(Cleat, Foot),
        Segment::between(Foot, Knee),
        Segment::between(Knee, HipJoint),
        Segment::between(HipJoint, SitBone),
        Segment::between(SitBone, Shoulder),
        Segment::between(Shoulder, NeckTop),
        Segment::between(NeckTop, HeadCenter),
        Segment::between(Shoulder, Elbow),
        Segment::between(Elbow, Hand),
    ]
}
