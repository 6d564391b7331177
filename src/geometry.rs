//! Oriented rectangle intersection.
//!
//! Entities collide through the rectangle described by their
//! [`Position`](crate::components::position::Position) and
//! [`Visual`](crate::components::visual::Visual): top-left corner, size and a
//! rotation in degrees about the rectangle's centre. Two such rectangles are
//! tested with the separating axis theorem over the two edge directions of
//! each rectangle.

use nalgebra::{Rotation2, Vector2};

use crate::components::position::Position;
use crate::components::visual::Visual;

/// 2D vector in canvas pixels.
pub type Vec2 = Vector2<f32>;

/// Result of testing two rectangles against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionType {
    None,
    Intersect,
}

/// A rectangle rotated about its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedRect {
    /// Top-left corner before rotation.
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
    /// Degrees, clockwise in screen space.
    pub rotation: f32,
}

/// Corners in the order upper-left, upper-right, lower-right, lower-left.
pub type Corners = [Vec2; 4];

impl RotatedRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32, rotation: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            width,
            height,
            rotation,
        }
    }

    pub fn from_entity(position: &Position, visual: &Visual) -> Self {
        Self::new(
            position.x,
            position.y,
            visual.width,
            visual.height,
            visual.rotation,
        )
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }

    pub fn corners(&self) -> Corners {
        let c = self.center();
        let rotation = Rotation2::new(self.rotation.to_radians());
        let rotate = |p: Vec2| c + rotation * (p - c);
        let (x, y) = (self.origin.x, self.origin.y);
        [
            rotate(Vec2::new(x, y)),
            rotate(Vec2::new(x + self.width, y)),
            rotate(Vec2::new(x + self.width, y + self.height)),
            rotate(Vec2::new(x, y + self.height)),
        ]
    }

    /// The two edge directions of the rectangle, which are the candidate
    /// separating axes it contributes.
    fn axes(corners: &Corners) -> [Vec2; 2] {
        let [ul, ur, lr, _] = *corners;
        [ur - ul, ur - lr]
    }

    pub fn intersects(&self, other: &RotatedRect) -> bool {
        let a = self.corners();
        let b = other.corners();
        Self::axes(&a)
            .into_iter()
            .chain(Self::axes(&b))
            .all(|axis| overlaps_on(axis, &a, &b))
    }
}

fn project(axis: Vec2, corners: &Corners) -> (f32, f32) {
    corners
        .iter()
        .map(|p| p.dot(&axis))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), d| {
            (min.min(d), max.max(d))
        })
}

/// Projections touching at a single point count as overlapping.
fn overlaps_on(axis: Vec2, a: &Corners, b: &Corners) -> bool {
    let (min_a, max_a) = project(axis, a);
    let (min_b, max_b) = project(axis, b);
    min_b <= max_a && max_b >= min_a
}

pub fn collision_type(a: &RotatedRect, b: &RotatedRect) -> CollisionType {
    if a.intersects(b) {
        CollisionType::Intersect
    } else {
        CollisionType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    #[test]
    fn unrotated_corners_are_the_rect_corners() {
        let r = RotatedRect::new(10.0, 20.0, 30.0, 40.0, 0.0);
        let c = r.corners();
        assert!(approx(c[0], Vec2::new(10.0, 20.0)));
        assert!(approx(c[1], Vec2::new(40.0, 20.0)));
        assert!(approx(c[2], Vec2::new(40.0, 60.0)));
        assert!(approx(c[3], Vec2::new(10.0, 60.0)));
    }

    #[test]
    fn quarter_turn_swaps_extents_about_the_centre() {
        let r = RotatedRect::new(0.0, 0.0, 40.0, 20.0, 90.0);
        let c = r.corners();
        // centre (20, 10); the upper-left corner lands on the top right
        assert!(approx(c[0], Vec2::new(30.0, -10.0)));
        assert!(approx(c[2], Vec2::new(10.0, 30.0)));
    }

    #[test]
    fn axes_follow_the_rotated_edges() {
        let r = RotatedRect::new(0.0, 0.0, 40.0, 20.0, 90.0);
        let [top, side] = RotatedRect::axes(&r.corners());
        // the top edge now runs down the screen
        assert!(approx(top, Vec2::new(0.0, 40.0)));
        assert!(approx(side, Vec2::new(20.0, 0.0)));
        assert!(top.dot(&side).abs() < EPSILON);
    }

    #[test]
    fn separated_rects_do_not_intersect() {
        let a = RotatedRect::new(0.0, 0.0, 10.0, 10.0, 0.0);
        let b = RotatedRect::new(20.0, 0.0, 10.0, 10.0, 0.0);
        assert_eq!(collision_type(&a, &b), CollisionType::None);
        assert_eq!(collision_type(&b, &a), CollisionType::None);
    }

    #[test]
    fn overlapping_rects_intersect() {
        let a = RotatedRect::new(0.0, 0.0, 10.0, 10.0, 0.0);
        let b = RotatedRect::new(5.0, 5.0, 10.0, 10.0, 0.0);
        assert_eq!(collision_type(&a, &b), CollisionType::Intersect);
        assert_eq!(collision_type(&b, &a), CollisionType::Intersect);
    }

    #[test]
    fn shared_edge_counts_as_intersecting() {
        let a = RotatedRect::new(0.0, 0.0, 10.0, 10.0, 0.0);
        let b = RotatedRect::new(10.0, 0.0, 10.0, 10.0, 0.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn rotation_can_separate_bounding_boxes_that_overlap() {
        // A diamond whose axis aligned bounds overlap the square's corner,
        // but whose edges do not reach it.
        let square = RotatedRect::new(0.0, 0.0, 10.0, 10.0, 0.0);
        let diamond = RotatedRect::new(12.0, 12.0, 10.0, 10.0, 45.0);
        assert!(!square.intersects(&diamond));
        assert!(!diamond.intersects(&square));

        let closer = RotatedRect::new(8.0, 8.0, 10.0, 10.0, 45.0);
        assert!(square.intersects(&closer));
    }

    #[test]
    fn test_is_symmetric_for_rotated_pairs() {
        let cases = [
            (
                RotatedRect::new(150.0, 420.0, 215.0, 185.0, 30.0),
                RotatedRect::new(300.0, 535.0, 500.0, 90.0, 0.0),
            ),
            (
                RotatedRect::new(0.0, 0.0, 50.0, 5.0, 60.0),
                RotatedRect::new(30.0, 30.0, 5.0, 50.0, -15.0),
            ),
        ];
        for (a, b) in cases {
            assert_eq!(collision_type(&a, &b), collision_type(&b, &a));
        }
    }
}
