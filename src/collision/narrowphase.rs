use glam::Vec2;

use crate::core::body::Body;

/// Positionally corrects one candidate pair if it actually overlaps.
///
/// This is a single-pass positional response, not an impulse solver: each
/// body is pushed along the contact normal by a share of the penetration
/// weighted by the other body's radius (radius stands in for mass, so the
/// larger body moves less). `response_coef` scales the correction below 1 so
/// that the double visit of a pair within one substep, plus repeated
/// substeps, converge on separation instead of overshooting. Velocity change
/// is emergent: the moved position feeds back through the next Verlet step.
///
/// Returns `true` when a correction was applied.
pub fn resolve_pair(a: &mut Body, b: &mut Body, response_coef: f32) -> bool {
    let delta = a.position - b.position;
    let dist_sq = delta.length_squared();
    let min_dist = a.radius + b.radius;
    if dist_sq >= min_dist * min_dist {
        return false;
    }

    let dist = dist_sq.sqrt();
    // Coincident centers give no direction; separate along a fixed axis.
    let normal = if dist > 0.0 { delta / dist } else { Vec2::X };
    let ratio_a = a.radius / min_dist;
    let ratio_b = b.radius / min_dist;
    // Negative while overlapping, so the moves below push the pair apart.
    let correction = 0.5 * response_coef * (dist - min_dist);
    a.position -= normal * (ratio_b * correction);
    b.position += normal * (ratio_a * correction);
    true
}
