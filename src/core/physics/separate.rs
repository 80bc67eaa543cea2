//=========================================================================
// Body Separation
//=========================================================================
//
// Pushes two intersecting bodies apart along one axis at a time.
//
// The overlap on an axis is measured in the direction of relative travel
// during this step. Overlaps deeper than the combined travel plus
// OVERLAP_BIAS are ignored on that axis: the bodies were already
// embedded, so the other axis gets a chance instead.
//
// Velocity response:
//   movable vs immovable:  v1 = v2 - v1 * bounce1
//   movable vs movable:    equal-mass exchange around the average
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::body::Body;

//=== Constants ===========================================================

/// Extra tolerance on top of the per-step travel.
pub const OVERLAP_BIAS: f32 = 4.0;

//=== Axis ================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

//=== Public API ==========================================================

/// Separates `b1` and `b2`, vertical axis first.
///
/// Returns `true` if any separation happened on either axis.
pub fn separate(b1: &mut Body, b2: &mut Body) -> bool {
    if !b1.aabb().intersects(&b2.aabb()) {
        return false;
    }

    let moved_y = separate_axis(b1, b2, Axis::Y);
    let moved_x = if b1.aabb().intersects(&b2.aabb()) {
        separate_axis(b1, b2, Axis::X)
    } else {
        false
    };

    moved_x || moved_y
}

//=== Internal Helpers ====================================================

fn component(v: glam::Vec2, axis: Axis) -> f32 {
    match axis {
        Axis::X => v.x,
        Axis::Y => v.y,
    }
}

fn component_mut(v: &mut glam::Vec2, axis: Axis) -> &mut f32 {
    match axis {
        Axis::X => &mut v.x,
        Axis::Y => &mut v.y,
    }
}

/// Signed overlap of `b1` into `b2` along `axis` (positive: b1 moves back
/// towards negative coordinates). Sets the touching flags.
fn overlap(b1: &mut Body, b2: &mut Body, axis: Axis) -> f32 {
    let d1 = component(b1.delta(), axis);
    let d2 = component(b2.delta(), axis);
    let max_overlap = d1.abs() + d2.abs() + OVERLAP_BIAS;

    let (start1, end1) = (component(b1.position, axis), component(b1.position + b1.size, axis));
    let (start2, end2) = (component(b2.position, axis), component(b2.position + b2.size, axis));

    if d1 > d2 {
        // b1 travelling into b2 from the low side
        let overlap = end1 - start2;
        if overlap > max_overlap {
            return 0.0;
        }
        match axis {
            Axis::Y => {
                b1.touching.down = true;
                b2.touching.up = true;
            }
            Axis::X => {
                b1.touching.right = true;
                b2.touching.left = true;
            }
        }
        overlap
    } else if d1 < d2 {
        let overlap = start1 - end2;
        if -overlap > max_overlap {
            return 0.0;
        }
        match axis {
            Axis::Y => {
                b1.touching.up = true;
                b2.touching.down = true;
            }
            Axis::X => {
                b1.touching.left = true;
                b2.touching.right = true;
            }
        }
        overlap
    } else {
        // Neither moved relative to the other: embedded, leave it
        0.0
    }
}

fn separate_axis(b1: &mut Body, b2: &mut Body, axis: Axis) -> bool {
    if b1.immovable && b2.immovable {
        return false;
    }

    let overlap = overlap(b1, b2, axis);
    if overlap == 0.0 {
        return false;
    }

    let v1 = component(b1.velocity, axis);
    let v2 = component(b2.velocity, axis);
    let bounce1 = component(b1.bounce, axis);
    let bounce2 = component(b2.bounce, axis);

    match (b1.immovable, b2.immovable) {
        (false, true) => {
            *component_mut(&mut b1.position, axis) -= overlap;
            *component_mut(&mut b1.velocity, axis) = v2 - v1 * bounce1;
        }
        (true, false) => {
            *component_mut(&mut b2.position, axis) += overlap;
            *component_mut(&mut b2.velocity, axis) = v1 - v2 * bounce2;
        }
        _ => {
            let half = overlap * 0.5;
            *component_mut(&mut b1.position, axis) -= half;
            *component_mut(&mut b2.position, axis) += half;

            // Equal masses: swap, then bounce around the shared average
            let avg = (v1 + v2) * 0.5;
            *component_mut(&mut b1.velocity, axis) = avg + (v2 - avg) * bounce1;
            *component_mut(&mut b2.velocity, axis) = avg + (v1 - avg) * bounce2;
        }
    }

    true
}

//=========================================================================
// Unit Tests
//=========================================================================
