//! Layout geometry for a step indicator.
//!
//! Steps are 1-based: odd steps are circles, even steps are the lines
//! joining them. Offsets are measured along the layout axis from the
//! top-left origin, and every shape is centered across the axis at one
//! circle radius.

use crate::config::Axis;

/// A point in the indicator's coordinate space (origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Build a point from coordinates along and across `axis`.
    pub fn on_axis(axis: Axis, along: f32, across: f32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(along, across),
            Axis::Vertical => Self::new(across, along),
        }
    }

    /// Coordinate along `axis`.
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// Width and height reported to the host layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Space required by an indicator, relative to its axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    /// Total length of all steps along the axis.
    pub along: f32,
    /// Thickness perpendicular to the axis (one circle diameter).
    pub across: f32,
}

impl Extent {
    /// Convert to a width/height pair for the given axis.
    pub fn size(&self, axis: Axis) -> Size {
        match axis {
            Axis::Horizontal => Size {
                width: self.along,
                height: self.across,
            },
            Axis::Vertical => Size {
                width: self.across,
                height: self.along,
            },
        }
    }
}

/// A drawable shape for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// A filled circle.
    Circle { center: Point, radius: f32 },
    /// A stroked line segment.
    Segment {
        start: Point,
        end: Point,
        thickness: f32,
    },
}

impl Primitive {
    /// Leading and trailing edge coordinates along `axis`.
    pub fn span(&self, axis: Axis) -> (f32, f32) {
        match self {
            Primitive::Circle { center, radius } => {
                let c = center.along(axis);
                (c - radius, c + radius)
            }
            Primitive::Segment { start, end, .. } => (start.along(axis), end.along(axis)),
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, Primitive::Circle { .. })
    }
}

/// Paint state of a step relative to the current progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatus {
    Completed,
    Pending,
}

/// Size parameters that determine geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub circle_radius: f32,
    pub line_length: f32,
    pub line_thickness: f32,
    pub circle_line_spacing: f32,
}

impl Metrics {
    fn diameter(&self) -> f32 {
        self.circle_radius * 2.0
    }
}

/// Number of circles in a sequence of `total_steps`.
pub fn circle_count(total_steps: u32) -> u32 {
    total_steps.div_ceil(2)
}

/// Number of connecting lines in a sequence of `total_steps`.
pub fn segment_count(total_steps: u32) -> u32 {
    total_steps / 2
}

/// Space needed to draw `total_steps` steps.
pub fn extent(total_steps: u32, metrics: &Metrics) -> Extent {
    let circles = circle_count(total_steps) as f32;
    let segments = segment_count(total_steps) as f32;

    Extent {
        along: circles * metrics.diameter()
            + segments * metrics.line_length
            + segments * 2.0 * metrics.circle_line_spacing,
        across: metrics.diameter(),
    }
}

/// Position of `step` along the axis: the center for circles, the start
/// for lines.
pub fn offset(step: u32, metrics: &Metrics) -> f32 {
    if step % 2 == 1 {
        let k = ((step - 1) / 2) as f32;
        k * metrics.diameter()
            + k * metrics.line_length
            + 2.0 * k * metrics.circle_line_spacing
            + metrics.circle_radius
    } else {
        let circles_before = (step / 2) as f32;
        let segments_before = circles_before - 1.0;
        circles_before * metrics.diameter()
            + segments_before * metrics.line_length
            + (2.0 * segments_before + 1.0) * metrics.circle_line_spacing
    }
}

/// Shape for `step` laid out along `axis`. `step` must be at least 1.
pub fn place(step: u32, axis: Axis, metrics: &Metrics) -> Primitive {
    let along = offset(step, metrics);
    let across = metrics.circle_radius;

    if step % 2 == 1 {
        Primitive::Circle {
            center: Point::on_axis(axis, along, across),
            radius: metrics.circle_radius,
        }
    } else {
        Primitive::Segment {
            start: Point::on_axis(axis, along, across),
            end: Point::on_axis(axis, along + metrics.line_length, across),
            thickness: metrics.line_thickness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> Metrics {
        Metrics {
            circle_radius: 5.0,
            line_length: 30.0,
            line_thickness: 1.0,
            circle_line_spacing: 10.0,
        }
    }

    #[test]
    fn test_counts() {
        assert_eq!((circle_count(1), segment_count(1)), (1, 0));
        assert_eq!((circle_count(7), segment_count(7)), (4, 3));
        assert_eq!((circle_count(99), segment_count(99)), (50, 49));
    }

    #[test]
    fn test_extent_single_circle() {
        let extent = extent(1, &metrics());
        assert_eq!(extent.along, 10.0);
        assert_eq!(extent.across, 10.0);
    }

    #[test]
    fn test_extent_seven_steps() {
        let extent = extent(7, &metrics());
        assert_eq!(extent.along, 190.0);
        assert_eq!(extent.across, 10.0);
    }

    #[test]
    fn test_extent_size_per_axis() {
        let extent = Extent {
            along: 190.0,
            across: 10.0,
        };
        assert_eq!(
            extent.size(Axis::Horizontal),
            Size {
                width: 190.0,
                height: 10.0
            }
        );
        assert_eq!(
            extent.size(Axis::Vertical),
            Size {
                width: 10.0,
                height: 190.0
            }
        );
    }

    #[test]
    fn test_offsets() {
        let m = metrics();
        // circle, gap, line, gap, circle ...
        assert_eq!(offset(1, &m), 5.0);
        assert_eq!(offset(2, &m), 20.0);
        assert_eq!(offset(3, &m), 65.0);
        assert_eq!(offset(4, &m), 80.0);
        assert_eq!(offset(7, &m), 185.0);
    }

    #[test]
    fn test_place_vertical_swaps_coordinates() {
        let m = metrics();
        let horizontal = place(4, Axis::Horizontal, &m);
        let vertical = place(4, Axis::Vertical, &m);

        assert_eq!(
            horizontal,
            Primitive::Segment {
                start: Point::new(80.0, 5.0),
                end: Point::new(110.0, 5.0),
                thickness: 1.0,
            }
        );
        assert_eq!(
            vertical,
            Primitive::Segment {
                start: Point::new(5.0, 80.0),
                end: Point::new(5.0, 110.0),
                thickness: 1.0,
            }
        );
    }

    #[test]
    fn test_last_circle_touches_extent() {
        let m = metrics();
        for total in [1u32, 3, 7, 99] {
            let (_, trailing) = place(total, Axis::Horizontal, &m).span(Axis::Horizontal);
            assert_eq!(trailing, extent(total, &m).along);
        }
    }
}
