use super::Point2;

/// Computes the signed area of a ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise (y up).
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Signed turn at `b` when walking `a -> b -> c`: the 2D cross product of
/// `(b - a)` and `(c - b)`. Positive for a left (counter-clockwise) turn.
#[must_use]
pub fn turn(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let ab = b - a;
    let bc = c - b;
    ab.x * bc.y - ab.y * bc.x
}

/// Unsigned area of triangle `abc`.
#[must_use]
pub fn triangle_area(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    (ab.x * ac.y - ab.y * ac.x).abs() * 0.5
}

/// Which side of the directed line `b -> c` the point `p` falls on.
fn side(p: &Point2, b: &Point2, c: &Point2) -> f64 {
    (p.x - c.x) * (b.y - c.y) - (b.x - c.x) * (p.y - c.y)
}

/// Returns `true` if `p` lies strictly inside triangle `abc`.
///
/// Points on an edge or a corner are outside. Works for either winding.
#[must_use]
pub fn point_strictly_in_triangle(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> bool {
    let d1 = side(p, a, b);
    let d2 = side(p, b, c);
    let d3 = side(p, c, a);
    (d1 < 0.0 && d2 < 0.0 && d3 < 0.0) || (d1 > 0.0 && d2 > 0.0 && d3 > 0.0)
}

/// Returns `true` if `p` lies inside triangle `abc` or on its boundary.
///
/// Works for either winding. A degenerate triangle contains the points of
/// its supporting segment.
#[must_use]
pub fn point_in_closed_triangle(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> bool {
    let d = [side(p, a, b), side(p, b, c), side(p, c, a)];
    let has_neg = d.iter().any(|&v| v < 0.0);
    let has_pos = d.iter().any(|&v| v > 0.0);
    !(has_neg && has_pos)
}

/// Floors each coordinate of `p` to a multiple of `step`.
#[must_use]
pub fn snap_to_grid(p: &Point2, step: f64) -> Point2 {
    Point2::new((p.x / step).floor() * step, (p.y / step).floor() * step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert!((signed_area_2d(&pts) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert!((signed_area_2d(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[p(0.0, 0.0), p(1.0, 1.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn turn_sign_follows_direction() {
        assert!(turn(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0)) > 0.0);
        assert!(turn(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, -1.0)) < 0.0);
        assert!(turn(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0)).abs() < TOLERANCE);
    }

    #[test]
    fn strict_containment() {
        let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
        assert!(point_strictly_in_triangle(&p(1.0, 1.0), &a, &b, &c));
        // same test with the opposite winding
        assert!(point_strictly_in_triangle(&p(1.0, 1.0), &a, &c, &b));
        assert!(!point_strictly_in_triangle(&p(3.0, 3.0), &a, &b, &c));
    }

    #[test]
    fn boundary_is_outside() {
        let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
        assert!(!point_strictly_in_triangle(&p(2.0, 0.0), &a, &b, &c));
        assert!(!point_strictly_in_triangle(&p(2.0, 2.0), &a, &b, &c));
        assert!(!point_strictly_in_triangle(&a, &a, &b, &c));
    }

    #[test]
    fn closed_containment_includes_edges() {
        let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
        assert!(point_in_closed_triangle(&p(1.0, 1.0), &a, &b, &c));
        assert!(point_in_closed_triangle(&p(2.0, 2.0), &a, &b, &c));
        assert!(point_in_closed_triangle(&b, &a, &b, &c));
        // collinear with an edge but beyond its end
        assert!(!point_in_closed_triangle(&p(6.0, 0.0), &a, &b, &c));
        assert!(!point_in_closed_triangle(&p(3.0, 3.0), &a, &c, &b));
    }

    #[test]
    fn triangle_area_is_unsigned() {
        let area = triangle_area(&p(0.0, 0.0), &p(0.0, 2.0), &p(2.0, 0.0));
        assert!((area - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn snap_floors_to_step() {
        let s = snap_to_grid(&p(1.5, -0.2), 0.5);
        assert!((s.x - 1.5).abs() < TOLERANCE);
        assert!((s.y + 0.5).abs() < TOLERANCE);
    }
}
