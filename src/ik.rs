//! Two-link inverse kinematics via circle-circle intersection.

use glam::Vec2;

/// Which side of the target-to-root baseline the free joint bends toward.
///
/// With y pointing down, `Forward` rotates the joint toward +X off the
/// baseline (a knee pointing ahead of the leg), `Back` rotates the other way
/// (an elbow sagging below the shoulder-hand line).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bend {
    Forward,
    Back,
}

/// Solve IK for a two-segment chain between a fixed root and a fixed target
///
/// # Arguments
/// * `root` - Fixed proximal end of the chain (hip, shoulder)
/// * `target` - Fixed distal end of the chain (foot, hand)
/// * `near_len` - Length of the segment attached to `target`
/// * `far_len` - Length of the segment attached to `root`
/// * `bend` - Bend side for the free joint
///
/// # Returns
/// * `Vec2` - Position of the free joint (knee, elbow)
///
/// Never fails: unreachable targets settle on documented fallbacks. A target
/// beyond full extension puts the joint on the straight root-target line at
/// the segment-ratio split; a target inside the annulus (or coincident with
/// the root) puts it at the midpoint.
pub fn solve_two_link(root: Vec2, target: Vec2, near_len: f32, far_len: f32, bend: Bend) -> Vec2 {
    const EPS: f32 = 1e-6;

    let to_root = root - target;
    let dist = to_root.length();
    let total = near_len + far_len;

    // Degenerate chain, coincident endpoints, or target inside the reachable
    // annulus: settle at the midpoint
    if total <= EPS || dist <= EPS || dist < (near_len - far_len).abs() {
        return (root + target) * 0.5;
    }

    // Beyond full extension: joint on the straight line, split by segment ratio
    if dist >= total {
        return target + to_root * (near_len / total);
    }

    if near_len <= EPS {
        return target;
    }

    // Law of cosines at the target joint; the acos argument is clamped so
    // floating-point overshoot at the reachability boundary cannot produce NaN
    let cos_alpha =
        ((dist * dist + near_len * near_len - far_len * far_len) / (2.0 * dist * near_len))
            .clamp(-1.0, 1.0);
    let alpha = cos_alpha.acos();

    let base = to_root.y.atan2(to_root.x);
    let angle = match bend {
        Bend::Forward => base + alpha,
        Bend::Back => base - alpha,
    };
    target + Vec2::new(angle.cos(), angle.sin()) * near_len
}

/// Interior angle at `vertex` between the rays toward `a` and `b`, in degrees
///
/// Computed from the absolute difference of the two ray angles, reflected
/// into [0, 180].
pub fn interior_angle(vertex: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ray_a = a - vertex;
    let ray_b = b - vertex;
    let raw = (ray_a.y.atan2(ray_a.x) - ray_b.y.atan2(ray_b.x))
        .to_degrees()
        .abs();
    if raw > 180.0 {
        360.0 - raw
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_right_triangle_solution() {
        // 3-4-5 triangle: root at distance 5, segments 3 (near) and 4 (far)
        let root = Vec2::new(5.0, 0.0);
        let target = Vec2::ZERO;

        let joint = solve_two_link(root, target, 3.0, 4.0, Bend::Forward);

        assert!((joint.distance(target) - 3.0).abs() < 1e-4);
        assert!((joint.distance(root) - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_overstretched_target_lands_on_line() {
        // Root at distance 10, total reach 7: joint splits the line 3/7
        let root = Vec2::new(0.0, -10.0);
        let target = Vec2::ZERO;

        let joint = solve_two_link(root, target, 3.0, 4.0, Bend::Forward);

        assert!(joint.distance(Vec2::new(0.0, -3.0)) < 1e-4);
        // Fully extended chain reads as a straight 180-degree joint
        let angle = interior_angle(joint, target, root);
        assert!((angle - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_exact_full_extension_is_straight() {
        // Root exactly at near + far
        let root = Vec2::new(0.0, -7.0);
        let target = Vec2::ZERO;

        let joint = solve_two_link(root, target, 3.0, 4.0, Bend::Forward);
        let angle = interior_angle(joint, target, root);

        assert!((angle - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_coincident_endpoints_settle_at_midpoint() {
        let point = Vec2::new(2.0, 3.0);
        let joint = solve_two_link(point, point, 3.0, 3.0, Bend::Forward);

        assert!(joint.is_finite());
        assert!(joint.distance(point) < 1e-4);
    }

    #[test]
    fn test_target_inside_annulus_settles_at_midpoint() {
        // |near - far| = 2, root at distance 1: unreachable, too close
        let root = Vec2::new(1.0, 0.0);
        let target = Vec2::ZERO;

        let joint = solve_two_link(root, target, 5.0, 3.0, Bend::Forward);

        assert!(joint.distance(Vec2::new(0.5, 0.0)) < 1e-4);
    }

    #[test]
    fn test_bend_sides_mirror_across_baseline() {
        let root = Vec2::new(0.0, -6.0);
        let target = Vec2::ZERO;

        let forward = solve_two_link(root, target, 4.0, 4.0, Bend::Forward);
        let back = solve_two_link(root, target, 4.0, 4.0, Bend::Back);

        // Baseline is the y axis: the two solutions mirror in x
        assert!((forward.x + back.x).abs() < 1e-4);
        assert!((forward.y - back.y).abs() < 1e-4);
        assert!(forward.x > 0.0, "Forward bend must point toward +X");
    }

    #[test]
    fn test_interior_angle_range() {
        let vertex = Vec2::ZERO;
        assert!((interior_angle(vertex, Vec2::X, Vec2::Y) - 90.0).abs() < 1e-4);
        assert!((interior_angle(vertex, Vec2::X, Vec2::NEG_X) - 180.0).abs() < 1e-4);
        assert!(interior_angle(vertex, Vec2::X, Vec2::X) < 1e-4);
        // Reflex configurations fold back under 180
        let angle = interior_angle(vertex, Vec2::X, Vec2::new(-1.0, -0.2));
        assert!(angle <= 180.0);
    }
}
