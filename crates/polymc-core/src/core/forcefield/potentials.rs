use nalgebra::Vector3;

#[inline]
pub fn harmonic_stretch(dist: f64, rest_length: f64, stiffness: f64) -> f64 {
    0.5 * stiffness * (dist - rest_length).powi(2)
}

#[inline]
pub fn tangent_alignment(t1: &Vector3<f64>, t2: &Vector3<f64>, stiffness: f64) -> f64 {
    -stiffness * t1.dot(t2)
}
