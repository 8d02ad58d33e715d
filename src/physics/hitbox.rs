//! Axis-aligned hitboxes
//!
//! A `HitBox` is the rectangle between two corners with `min` strictly
//! above-left of `max` (screen convention, y down). The ordering is checked
//! once at construction; translation moves both corners by the same offset,
//! so it holds for the life of the box.

use crate::core::point::Point;

/// Opaque white, used for the debug fill the host renderer blits
const DEBUG_FILL_RGBA: u32 = 0xFFFF_FFFF;

/// Axis-aligned bounding rectangle
// No Deserialize here: a descriptor could smuggle in unordered corners.
// Scenes carry width/height instead and construction re-validates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitBox {
    min: Point,
    max: Point,
}

impl HitBox {
    /// Build from two corners. `None` unless `a` is strictly above-left
    /// of `b` on both axes.
    pub fn from_points(a: Point, b: Point) -> Option<Self> {
        if a.x < b.x && a.y < b.y {
            Some(Self { min: a, max: b })
        } else {
            None
        }
    }

    /// Corner-coordinate convenience over [`HitBox::from_points`]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Option<Self> {
        Self::from_points(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[inline]
    pub fn min(&self) -> Point {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Point {
        self.max
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Shift both corners by the same offset
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.min.x += dx;
        self.max.x += dx;
        self.min.y += dy;
        self.max.y += dy;
    }

    /// Copy of this box shifted by the given offset
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        let mut out = *self;
        out.translate(dx, dy);
        out
    }

    /// AABB overlap test: the boxes must overlap on both axes at once.
    /// Shared edges count as overlapping.
    #[inline]
    pub fn overlaps(&self, other: &HitBox) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Fill `buffer` with an opaque white pixel block of this box's integer
    /// dimensions and return (width, height). Debug visualization for the
    /// host renderer; the buffer is reused across calls.
    pub fn fill_debug_pixels(&self, buffer: &mut Vec<u32>) -> (u32, u32) {
        let w = self.width() as u32;
        let h = self.height() as u32;
        let len = (w as usize) * (h as usize);

        buffer.clear();
        buffer.resize(len, DEBUG_FILL_RGBA);
        (w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_corners_build_a_box() {
        let bx = HitBox::new(0.0, 0.0, 10.0, 10.0).expect("ordered corners");
        assert_eq!(bx.width(), 10.0);
        assert_eq!(bx.height(), 10.0);
    }

    #[test]
    fn swapped_corners_are_rejected() {
        assert!(HitBox::new(10.0, 0.0, 0.0, 10.0).is_none());
        assert!(HitBox::new(0.0, 10.0, 10.0, 0.0).is_none());
        // Degenerate (zero-area) boxes are rejected too.
        assert!(HitBox::new(5.0, 5.0, 5.0, 5.0).is_none());
    }

    #[test]
    fn translate_shifts_both_corners_and_keeps_ordering() {
        let mut bx = HitBox::new(1.0, 2.0, 4.0, 6.0).unwrap();
        bx.translate(-3.5, 10.0);

        assert_eq!(bx.min(), Point::new(-2.5, 12.0));
        assert_eq!(bx.max(), Point::new(0.5, 16.0));
        assert!(bx.min().x < bx.max().x && bx.min().y < bx.max().y);
    }

    #[test]
    fn overlapping_boxes_collide() {
        let a = HitBox::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = HitBox::new(5.0, 5.0, 15.0, 15.0).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn disjoint_boxes_do_not_collide() {
        let a = HitBox::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = HitBox::new(20.0, 20.0, 30.0, 30.0).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn single_axis_overlap_is_not_a_collision() {
        // Overlapping x ranges, disjoint y ranges.
        let a = HitBox::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = HitBox::new(5.0, 20.0, 15.0, 30.0).unwrap();
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn touching_edges_count_as_overlap() {
        let a = HitBox::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = HitBox::new(10.0, 0.0, 20.0, 10.0).unwrap();
        assert!(a.overlaps(&b));
    }

    #[test]
    fn debug_fill_is_tightly_packed_white() {
        let bx = HitBox::new(0.0, 0.0, 4.0, 3.0).unwrap();
        let mut buf = Vec::new();
        let (w, h) = bx.fill_debug_pixels(&mut buf);

        assert_eq!((w, h), (4, 3));
        assert_eq!(buf.len(), 12);
        assert!(buf.iter().all(|&px| px == 0xFFFF_FFFF));
    }
}
