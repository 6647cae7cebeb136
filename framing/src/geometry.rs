//! Geometry primitives: points, extents, rectangle corners, and the handful
//! of pure functions the rescale and coverage code is built from.
//!
//! All coordinates are wall pixels with the y axis pointing down, so a
//! positive angle rotates clockwise on screen. Angles are radians.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A point (or vector) in wall space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length when treated as a vector.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self { x: (self.x + other.x) / 2.0, y: (self.y + other.y) / 2.0 }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

/// Width and height of a rectangle in wall pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both extents multiplied by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self { width: self.width * factor, height: self.height * factor }
    }

    /// The vector from the top-left corner to the center.
    #[must_use]
    pub fn half(self) -> Point {
        Point { x: self.width / 2.0, y: self.height / 2.0 }
    }

    /// `width / height`, or `1.0` for a zero height.
    #[must_use]
    pub fn ratio(self) -> f64 {
        if self.height == 0.0 { 1.0 } else { self.width / self.height }
    }
}

/// An infinite line through two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub point1: Point,
    pub point2: Point,
}

/// Corner label, clockwise from top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    A,
    B,
    C,
    D,
}

impl Corner {
    pub const ALL: [Corner; 4] = [Corner::A, Corner::B, Corner::C, Corner::D];
}

/// The four corners of a (possibly rotated) rectangle.
///
/// `a` is top-left, `b` top-right, `c` bottom-right, `d` bottom-left, as
/// seen before rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    pub d: Point,
}

impl Corners {
    #[must_use]
    pub fn to_array(self) -> [Point; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Center of the rectangle (midpoint of the diagonal).
    #[must_use]
    pub fn center(&self) -> Point {
        self.a.midpoint(self.c)
    }

    /// Length of side A→B.
    #[must_use]
    pub fn width(&self) -> f64 {
        distance_between_points(self.a, self.b)
    }

    /// Length of side A→D.
    #[must_use]
    pub fn height(&self) -> f64 {
        distance_between_points(self.a, self.d)
    }
}

impl Index<Corner> for Corners {
    type Output = Point;

    fn index(&self, corner: Corner) -> &Point {
        match corner {
            Corner::A => &self.a,
            Corner::B => &self.b,
            Corner::C => &self.c,
            Corner::D => &self.d,
        }
    }
}

impl IndexMut<Corner> for Corners {
    fn index_mut(&mut self, corner: Corner) -> &mut Point {
        match corner {
            Corner::A => &mut self.a,
            Corner::B => &mut self.b,
            Corner::C => &mut self.c,
            Corner::D => &mut self.d,
        }
    }
}

/// One rectangle side, directed so that the interior lies on its positive side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: Corner,
    pub to: Corner,
    pub x_offset_multiplier: f64,
    pub y_offset_multiplier: f64,
}

impl Edge {
    /// Signed distance from `point` to this side of `corners`.
    #[must_use]
    pub fn distance(&self, corners: &Corners, point: Point) -> f64 {
        distance_from_point_to_line(corners[self.from], corners[self.to], point)
    }

    /// Offset change that moves this side onto a point `distance` outside it.
    #[must_use]
    pub fn offset_shift(&self, distance: f64) -> Point {
        Point { x: distance * self.x_offset_multiplier, y: distance * self.y_offset_multiplier }
    }
}

/// Rotate `point` about `center` by `angle` radians.
#[must_use]
pub fn rotate_point(center: Point, point: Point, angle: f64) -> Point {
    center + rotate_vector(point - center, angle)
}

/// Rotate a free vector by `angle` radians.
#[must_use]
pub fn rotate_vector(vector: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point { x: vector.x * cos - vector.y * sin, y: vector.x * sin + vector.y * cos }
}

/// Signed perpendicular distance from `point` to the line through `p1`, `p2`.
///
/// Positive when `(p2 - p1) × (point - p1) > 0`. For the clockwise corner
/// order used here that is the inside of the rectangle. A zero-length line
/// has no side; the distance is reported as `0.0`.
#[must_use]
pub fn distance_from_point_to_line(p1: Point, p2: Point, point: Point) -> f64 {
    let dir = p2 - p1;
    let len = dir.length();
    if len == 0.0 {
        return 0.0;
    }
    let rel = point - p1;
    (dir.x * rel.y - dir.y * rel.x) / len
}

/// `d` when negative, otherwise `0.0`.
#[must_use]
pub fn negative_or_zero(d: f64) -> f64 {
    if d < 0.0 { d } else { 0.0 }
}

/// Foot of the perpendicular from `point` onto `line`.
#[must_use]
pub fn find_perpendicular_point(line: Line, point: Point) -> Point {
    let Line { point1, point2 } = line;
    let dx = point2.x - point1.x;
    let dy = point2.y - point1.y;

    if dx == 0.0 && dy == 0.0 {
        return point1;
    }
    if dy == 0.0 {
        return Point { x: point.x, y: point1.y };
    }
    if dx == 0.0 {
        return Point { x: point1.x, y: point.y };
    }

    let t = ((point.x - point1.x) * dx + (point.y - point1.y) * dy) / (dx * dx + dy * dy);
    Point { x: point1.x + t * dx, y: point1.y + t * dy }
}

#[must_use]
pub fn distance_between_points(p1: Point, p2: Point) -> f64 {
    (p2 - p1).length()
}

/// Corners of a `dimensions` rectangle whose top-left sits at `position`,
/// rotated by `angle` about `rotation_center` (the rectangle's own center
/// when `None`).
#[must_use]
pub fn calc_corners_coords(dimensions: Dimensions, position: Point, angle: f64, rotation_center: Option<Point>) -> Corners {
    let Dimensions { width, height } = dimensions;
    let center = rotation_center.unwrap_or_else(|| position + dimensions.half());
    let rotate = |p: Point| rotate_point(center, p, angle);

    Corners {
        a: rotate(position),
        b: rotate(Point { x: position.x + width, y: position.y }),
        c: rotate(Point { x: position.x + width, y: position.y + height }),
        d: rotate(Point { x: position.x, y: position.y + height }),
    }
}

/// Angle swept around `center` when the pointer moves from `start` to `current`.
#[must_use]
pub fn find_rotation_angle(center: Point, start: Point, current: Point) -> f64 {
    let from = start - center;
    let to = current - center;
    if from == Point::ORIGIN || to == Point::ORIGIN {
        return 0.0;
    }
    to.y.atan2(to.x) - from.y.atan2(from.x)
}

/// Clamp `value` into `[min, max]`, letting `min` win when the range is inverted.
///
/// Unlike [`f64::clamp`] this never panics; a NaN input yields `min`.
#[must_use]
pub fn clamp(min: f64, max: f64, value: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.min(max).max(min)
}
