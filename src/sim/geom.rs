//! Geometric overlap tests
//!
//! Pure predicates shared by the collision resolver. Different variants render
//! chasers and collectibles as circles or squares, so both shape pairings are
//! supported; dispatch happens in [`hitbox_overlap`].

use glam::Vec2;

use super::state::Hitbox;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Overlap test for two circles: distance vs sum of radii
#[inline]
pub fn circle_circle_overlap(ca: Vec2, ra: f32, cb: Vec2, rb: f32) -> bool {
    (ca - cb).length_squared() <= (ra + rb) * (ra + rb)
}

/// Overlap test for a circle against an axis-aligned square
///
/// Clamps the circle center to the square's bounds to find the nearest point
/// on the square, then compares that distance to the radius.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect_center: Vec2, half_extent: f32) -> bool {
    let nearest = Vec2::new(
        center
            .x
            .clamp(rect_center.x - half_extent, rect_center.x + half_extent),
        center
            .y
            .clamp(rect_center.y - half_extent, rect_center.y + half_extent),
    );
    (center - nearest).length_squared() <= radius * radius
}

/// Overlap test for two axis-aligned squares
#[inline]
pub fn rect_rect_overlap(ca: Vec2, ha: f32, cb: Vec2, hb: f32) -> bool {
    (ca.x - cb.x).abs() <= ha + hb && (ca.y - cb.y).abs() <= ha + hb
}

/// Overlap test dispatching on the shape pairing of two hitboxes
pub fn hitbox_overlap(pos_a: Vec2, a: Hitbox, pos_b: Vec2, b: Hitbox) -> bool {
    match (a, b) {
        (Hitbox::Circle { radius: ra }, Hitbox::Circle { radius: rb }) => {
            circle_circle_overlap(pos_a, ra, pos_b, rb)
        }
        (Hitbox::Circle { radius }, Hitbox::Square { half_extent }) => {
            circle_rect_overlap(pos_a, radius, pos_b, half_extent)
        }
        (Hitbox::Square { half_extent }, Hitbox::Circle { radius }) => {
            circle_rect_overlap(pos_b, radius, pos_a, half_extent)
        }
        (Hitbox::Square { half_extent: ha }, Hitbox::Square { half_extent: hb }) => {
            rect_rect_overlap(pos_a, ha, pos_b, hb)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert!((distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_circle_circle_overlap() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!(circle_circle_overlap(a, 6.0, b, 4.0));
        assert!(!circle_circle_overlap(a, 5.0, b, 4.9));
    }

    #[test]
    fn test_circle_rect_face() {
        // Square centered at origin, half extent 10; circle approaching the right face
        let rect = Vec2::ZERO;
        assert!(circle_rect_overlap(Vec2::new(14.0, 0.0), 5.0, rect, 10.0));
        assert!(!circle_rect_overlap(Vec2::new(16.0, 0.0), 5.0, rect, 10.0));
    }

    #[test]
    fn test_circle_rect_corner_epsilon() {
        // Circle aimed at the (10, 10) corner along the diagonal. The nearest
        // point is the corner itself, so overlap flips exactly at distance r.
        let rect = Vec2::ZERO;
        let half = 10.0;
        let radius = 5.0;
        let eps = 0.01;
        let diag = Vec2::new(1.0, 1.0).normalize();
        let corner = Vec2::new(half, half);

        let just_outside = corner + diag * (radius + eps);
        assert!(!circle_rect_overlap(just_outside, radius, rect, half));

        let just_inside = corner + diag * (radius - eps);
        assert!(circle_rect_overlap(just_inside, radius, rect, half));
    }

    #[test]
    fn test_circle_inside_rect() {
        // Circle center fully inside the square clamps to itself: always a hit
        assert!(circle_rect_overlap(Vec2::new(1.0, -2.0), 0.5, Vec2::ZERO, 10.0));
    }

    #[test]
    fn test_rect_rect_overlap() {
        assert!(rect_rect_overlap(Vec2::ZERO, 5.0, Vec2::new(9.0, 0.0), 5.0));
        assert!(!rect_rect_overlap(Vec2::ZERO, 5.0, Vec2::new(11.0, 0.0), 5.0));
    }

    #[test]
    fn test_hitbox_dispatch_symmetry() {
        let circle = Hitbox::Circle { radius: 5.0 };
        let square = Hitbox::Square { half_extent: 10.0 };
        let c = Vec2::new(14.0, 0.0);
        let s = Vec2::ZERO;
        assert!(hitbox_overlap(c, circle, s, square));
        assert!(hitbox_overlap(s, square, c, circle));
    }
}
