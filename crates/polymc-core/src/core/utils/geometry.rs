use crate::core::models::configuration::Configuration;
use nalgebra::{Matrix3, Rotation3, Unit, Vector3};
use rand::Rng;
use std::f64::consts::{PI, TAU};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("Angular scale must be positive, got {0}")]
pub struct InvalidAngularScale(pub f64);

/// Random rotation matrix with its axis uniform on the sphere and its angle
/// bounded by `scale * PI`, built with Arvo's constructive method: a planar
/// rotation composed with a Householder reflection. The intended domain of
/// `scale` is (0, 1].
pub fn random_rotation<R: Rng>(
    scale: f64,
    rng: &mut R,
) -> Result<Rotation3<f64>, InvalidAngularScale> {
    if !(scale > 0.0) {
        return Err(InvalidAngularScale(scale));
    }

    let theta = scale * (rng.r#gen::<f64>() - 0.5) * 2.0 * PI;
    let phi = rng.r#gen::<f64>() * TAU;
    let z = scale * rng.r#gen::<f64>() * 2.0;

    let r = z.sqrt();
    let vx = phi.sin() * r;
    let vy = phi.cos() * r;
    let vz = (2.0 - z).sqrt();

    let (st, ct) = theta.sin_cos();
    let sx = vx * ct - vy * st;
    let sy = vx * st + vy * ct;

    let matrix = Matrix3::new(
        -vx * sx + ct,
        -vx * sy + st,
        vx * vz,
        -vy * sx - st,
        -vy * sy + ct,
        vy * vz,
        -vz * sx,
        -vz * sy,
        1.0 - z,
    );
    Ok(Rotation3::from_matrix_unchecked(matrix))
}

/// Rotation about an arbitrary axis by `angle` radians. The axis is
/// normalized here, callers may pass any non-zero vector.
pub fn rotation_about_axis(axis: &Vector3<f64>, angle: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Unit::new_normalize(*axis), angle)
}

/// Distance between the first and last bead of the chain.
pub fn end_to_end_distance(configuration: &Configuration) -> f64 {
    let beads = configuration.beads();
    match (beads.first(), beads.last()) {
        (Some(first), Some(last)) => (last - first).norm(),
        _ => 0.0,
    }
}

/// Root-mean-square distance of the beads from their centroid.
pub fn radius_of_gyration(configuration: &Configuration) -> f64 {
    let beads = configuration.beads();
    if beads.is_empty() {
        return 0.0;
    }
    let n = beads.len() as f64;
    let centroid = beads.iter().map(|p| p.coords).sum::<Vector3<f64>>() / n;
    let mean_squared: f64 = beads
        .iter()
        .map(|p| (p.coords - centroid).norm_squared())
        .sum::<f64>()
        / n;
    mean_squared.sqrt()
}
