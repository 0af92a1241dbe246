use super::geometry::Position;
use super::heading::Heading;
use crate::matrix::Matrix;

/// Return the position reached by travelling `distance` units from `pos` along
/// `heading`.  The fractional parts of the result are truncated towards zero.
pub(crate) fn move_by(pos: Position, distance: i32, heading: Heading) -> Position {
    let mut coords = Matrix::column(&[f64::from(pos.x), f64::from(pos.y), 1.0]);
    let movement = Matrix::column(&[f64::from(distance), 0.0, 1.0]);
    let rotated = (&rotation(heading) * &movement)
        .expect("3x3 rotation times 3x1 column should be well-formed");
    coords
        .try_add_assign(&rotated)
        .expect("3x1 columns should be addable");
    log::trace!("moved {pos:?} by {distance} at {heading}:\n{coords}");
    Position::new(truncate(coords[(0, 0)]), truncate(coords[(1, 0)]))
}

/// Homogeneous 2D rotation by `heading`.  With the y axis pointing down,
/// increasing the heading rotates clockwise on screen.
fn rotation(heading: Heading) -> Matrix {
    let (sin, cos) = heading.radians().sin_cos();
    let (sin, cos) = (snap_to_zero(sin), snap_to_zero(cos));
    #[rustfmt::skip]
    let values = vec![
        cos, -sin, 0.0,
        sin,  cos, 0.0,
        0.0,  0.0, 1.0,
    ];
    Matrix::from_values(3, 3, values)
}

/// Flush rounding residue such as `cos(270°)` ≈ −1.8e-16 to an exact zero so
/// that axis-aligned moves stay on their axis after truncation
fn snap_to_zero(v: f64) -> f64 {
    if v.abs() < TRIG_EPSILON {
        0.0
    } else {
        v
    }
}

const TRIG_EPSILON: f64 = 1e-9;

#[allow(clippy::cast_possible_truncation)]
fn truncate(v: f64) -> i32 {
    // `as` saturates rather than wrapping, and positions stay far inside i32
    v.trunc() as i32
}
