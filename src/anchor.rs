//! Named anchor points and the point/segment model shared with the renderer.
//!
//! The figure is a fixed set of anchors (frame, cockpit, drivetrain, rider
//! joints) stored in a flat array indexed by [`AnchorId`], plus a separate
//! variable-length run of points tracing the handlebar drop arc. Consumers
//! look points up by their stable string name ("bb", "headTubeTop",
//! "handlebarArc0"...), which is also the shape the result serializes to.

use glam::Vec2;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Number of points tracing the handlebar drop arc when the bar has drop.
pub const ARC_POINT_COUNT: usize = 13;

/// Unique identifier for each fixed anchor point of the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AnchorId {
    // Frame
    Bb = 0,
    HeadTubeTop = 1,
    HeadTubeBottom = 2,
    SeatTubeTop = 3,
    FrontWheel = 4,
    RearWheel = 5,

    // Cockpit
    SpacerTop = 6,
    StemFront = 7,
    Handlebar = 8,

    // Saddle
    SeatpostTop = 9,
    Saddle = 10,
    SaddleFront = 11,
    SaddleRear = 12,
    SitBone = 13,

    // Drivetrain
    PedalRight = 14,
    PedalLeft = 15,
    PedalRightFront = 16,
    PedalRightRear = 17,
    PedalLeftFront = 18,
    PedalLeftRear = 19,

    // Rider
    Cleat = 20,
    Foot = 21,
    Knee = 22,
    HipJoint = 23,
    Shoulder = 24,
    NeckTop = 25,
    HeadCenter = 26,
    Elbow = 27,
    Hand = 28,
}

impl AnchorId {
    /// Total number of fixed anchors
    pub const COUNT: usize = 29;

    /// Convert to array index
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// All anchors in placement order (frame before cockpit before rider)
    pub const ALL: [AnchorId; Self::COUNT] = [
        AnchorId::Bb,
        AnchorId::HeadTubeTop,
        AnchorId::HeadTubeBottom,
        AnchorId::SeatTubeTop,
        AnchorId::FrontWheel,
        AnchorId::RearWheel,
        AnchorId::SpacerTop,
        AnchorId::StemFront,
        AnchorId::Handlebar,
        AnchorId::SeatpostTop,
        AnchorId::Saddle,
        AnchorId::SaddleFront,
        AnchorId::SaddleRear,
        AnchorId::SitBone,
        AnchorId::PedalRight,
        AnchorId::PedalLeft,
        AnchorId::PedalRightFront,
        AnchorId::PedalRightRear,
        AnchorId::PedalLeftFront,
        AnchorId::PedalLeftRear,
        AnchorId::Cleat,
        AnchorId::Foot,
        AnchorId::Knee,
        AnchorId::HipJoint,
        AnchorId::Shoulder,
        AnchorId::NeckTop,
        AnchorId::HeadCenter,
        AnchorId::Elbow,
        AnchorId::Hand,
    ];

    /// Stable string name, used for serialization and name-based lookup
    pub const fn name(self) -> &'static str {
        match self {
            AnchorId::Bb => "bb",
            AnchorId::HeadTubeTop => "headTubeTop",
            AnchorId::HeadTubeBottom => "headTubeBottom",
            AnchorId::SeatTubeTop => "seatTubeTop",
            AnchorId::FrontWheel => "frontWheel",
            AnchorId::RearWheel => "rearWheel",
            AnchorId::SpacerTop => "spacerTop",
            AnchorId::StemFront => "stemFront",
            AnchorId::Handlebar => "handlebar",
            AnchorId::SeatpostTop => "seatpostTop",
            AnchorId::Saddle => "saddle",
            AnchorId::SaddleFront => "saddleFront",
            AnchorId::SaddleRear => "saddleRear",
            AnchorId::SitBone => "sitBone",
            AnchorId::PedalRight => "pedalRight",
            AnchorId::PedalLeft => "pedalLeft",
            AnchorId::PedalRightFront => "pedalRightFront",
            AnchorId::PedalRightRear => "pedalRightRear",
            AnchorId::PedalLeftFront => "pedalLeftFront",
            AnchorId::PedalLeftRear => "pedalLeftRear",
            AnchorId::Cleat => "cleat",
            AnchorId::Foot => "foot",
            AnchorId::Knee => "knee",
            AnchorId::HipJoint => "hipJoint",
            AnchorId::Shoulder => "shoulder",
            AnchorId::NeckTop => "neckTop",
            AnchorId::HeadCenter => "headCenter",
            AnchorId::Elbow => "elbow",
            AnchorId::Hand => "hand",
        }
    }

    /// Look an anchor up by its stable name
    pub fn from_name(name: &str) -> Option<AnchorId> {
        Self::ALL.iter().copied().find(|id| id.name() == name)
    }
}

/// Reference to a point: a fixed anchor or one of the drop-arc points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRef {
    Anchor(AnchorId),
    Arc(usize),
}

impl PointRef {
    pub fn name(self) -> String {
        match self {
            PointRef::Anchor(id) => id.name().to_string(),
            PointRef::Arc(i) => format!("handlebarArc{i}"),
        }
    }
}

impl From<AnchorId> for PointRef {
    fn from(id: AnchorId) -> Self {
        PointRef::Anchor(id)
    }
}

impl Serialize for PointRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PointRef::Anchor(id) => serializer.serialize_str(id.name()),
            PointRef::Arc(i) => serializer.serialize_str(&format!("handlebarArc{i}")),
        }
    }
}

/// A drawn line between two points. Serializes as a `[fromName, toName]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment(pub PointRef, pub PointRef);

impl Segment {
    /// Segment between two fixed anchors
    pub const fn between(from: AnchorId, to: AnchorId) -> Segment {
        Segment(PointRef::Anchor(from), PointRef::Anchor(to))
    }
}

/// All computed points of one figure.
///
/// Fixed anchors live in a flat `[Option<Vec2>; COUNT]` array; the drop-arc
/// points live in a separate list that is empty for flat bars. A `None`
/// anchor or an out-of-range arc index is a normal "skip this segment"
/// condition for the renderer, not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointMap {
    anchors: [Option<Vec2>; AnchorId::COUNT],
    arc: Vec<Vec2>,
}

impl PointMap {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn set(&mut self, id: AnchorId, point: Vec2) {
        self.anchors[id.index()] = Some(point);
    }

    #[inline]
    pub fn get(&self, id: AnchorId) -> Option<Vec2> {
        self.anchors[id.index()]
    }

    pub fn set_arc(&mut self, points: Vec<Vec2>) {
        self.arc = points;
    }

    /// The handlebar drop arc, empty when the bar has no meaningful drop
    pub fn arc(&self) -> &[Vec2] {
        &self.arc
    }

    /// Resolve any point reference; `None` means the segment is skipped
    pub fn resolve(&self, point: PointRef) -> Option<Vec2> {
        match point {
            PointRef::Anchor(id) => self.get(id),
            PointRef::Arc(i) => self.arc.get(i).copied(),
        }
    }

    /// Name-based lookup matching the serialized key set
    pub fn by_name(&self, name: &str) -> Option<Vec2> {
        if let Some(id) = AnchorId::from_name(name) {
            return self.get(id);
        }
        let index: usize = name.strip_prefix("handlebarArc")?.parse().ok()?;
        self.arc.get(index).copied()
    }

    /// Number of points present (placed anchors plus arc points)
    pub fn len(&self) -> usize {
        self.anchors.iter().flatten().count() + self.arc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate all present points with their stable names
    pub fn iter_named(&self) -> impl Iterator<Item = (String, Vec2)> + '_ {
        let anchors = AnchorId::ALL
            .iter()
            .filter_map(|id| self.get(*id).map(|p| (id.name().to_string(), p)));
        let arc = self
            .arc
            .iter()
            .enumerate()
            .map(|(i, p)| (format!("handlebarArc{i}"), *p));
        anchors.chain(arc)
    }
}

impl Serialize for PointMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for id in AnchorId::ALL {
            if let Some(point) = self.get(id) {
                map.serialize_entry(id.name(), &point)?;
            }
        }
        for (i, point) in self.arc.iter().enumerate() {
            map.serialize_entry(&format!("handlebarArc{i}"), point)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for id in AnchorId::ALL {
            assert_eq!(AnchorId::from_name(id.name()), Some(id));
        }
        assert_eq!(AnchorId::from_name("nope"), None);
    }

    #[test]
    fn test_missing_anchor_resolves_to_none() {
        let mut points = PointMap::new();
        points.set(AnchorId::Bb, Vec2::ZERO);

        assert_eq!(points.resolve(AnchorId::Bb.into()), Some(Vec2::ZERO));
        assert_eq!(points.resolve(AnchorId::Knee.into()), None);
        assert_eq!(points.resolve(PointRef::Arc(0)), None);
    }

    #[test]
    fn test_arc_lookup_by_name() {
        let mut points = PointMap::new();
        points.set_arc(vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);

        assert_eq!(points.by_name("handlebarArc1"), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(points.by_name("handlebarArc2"), None);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_serializes_to_named_map() {
        let mut points = PointMap::new();
        points.set(AnchorId::Bb, Vec2::ZERO);
        points.set(AnchorId::Knee, Vec2::new(10.0, -20.0));
        points.set_arc(vec![Vec2::ONE]);

        let json = serde_json::to_value(&points).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("bb"));
        assert!(object.contains_key("knee"));
        assert!(object.contains_key("handlebarArc0"));
    }

    #[test]
    fn test_segment_serializes_as_name_pair() {
        let segment = Segment::between(AnchorId::Bb, AnchorId::SeatTubeTop);
        let json = serde_json::to_string(&segment).unwrap();
        assert_eq!(json, r#"["bb","seatTubeTop"]"#);
    }
}
