use crate::models::Coordinates;

/// Every `stride`-th point starting at index 0.
pub fn sample_points(points: &[Coordinates], stride: usize) -> Vec<Coordinates> {
    points.iter().step_by(stride.max(1)).copied().collect()
}
