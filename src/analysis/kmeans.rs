//! Deterministic k-means clustering over RGB points.
//!
//! Palette extraction must be numerically reproducible across runs, so
//! center seeding uses a fixed-seed [`StdRng`] and every tie in the
//! assignment step resolves to the lowest center index. Given the same
//! pixels and the same `k`, the output is identical every time.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed for center initialization. Fixed so repeated analyses of the
/// same document produce the same palette.
pub(crate) const CLUSTER_SEED: u64 = 0x5eed;

const MAX_ITERATIONS: usize = 32;

/// Cluster `points` into at most `k` groups.
///
/// Returns `(center, assigned_count)` pairs in center order. Centers
/// that end up with no assigned points are returned with a count of
/// zero; callers decide whether to keep them. Counts always sum to
/// `points.len()`.
pub(crate) fn cluster(
    points: &[[f32; 3]],
    k: usize,
    seed: u64,
) -> Result<Vec<([f32; 3], u64)>, String> {
    if points.is_empty() {
        return Err("no points to cluster".into());
    }
    if k == 0 {
        return Err("cluster count must be at least 1".into());
    }
    let k = k.min(points.len());

    let mut centers = seed_centers(points, k, seed);
    let mut assignment = vec![0usize; points.len()];

    for _ in 0..MAX_ITERATIONS {
        let mut changed = false;
        for (i, point) in points.iter().enumerate() {
            let best = nearest_center(point, &centers);
            if assignment[i] != best {
                assignment[i] = best;
                changed = true;
            }
        }

        // Means accumulate in f64: summing millions of f32 channel
        // values would lose low-order bits otherwise.
        let mut sums = vec![[0f64; 3]; centers.len()];
        let mut counts = vec![0u64; centers.len()];
        for (i, point) in points.iter().enumerate() {
            let c = assignment[i];
            sums[c][0] += point[0] as f64;
            sums[c][1] += point[1] as f64;
            sums[c][2] += point[2] as f64;
            counts[c] += 1;
        }
        for (c, center) in centers.iter_mut().enumerate() {
            if counts[c] > 0 {
                let n = counts[c] as f64;
                *center = [
                    (sums[c][0] / n) as f32,
                    (sums[c][1] / n) as f32,
                    (sums[c][2] / n) as f32,
                ];
            }
        }

        if !changed {
            break;
        }
    }

    let mut counts = vec![0u64; centers.len()];
    for &c in &assignment {
        counts[c] += 1;
    }
    Ok(centers.into_iter().zip(counts).collect())
}

/// k-means++ style seeding: the first center is a uniformly random
/// point, each subsequent one is drawn with probability proportional to
/// its squared distance from the nearest already-chosen center.
fn seed_centers(points: &[[f32; 3]], k: usize, seed: u64) -> Vec<[f32; 3]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut centers = Vec::with_capacity(k);
    centers.push(points[rng.gen_range(0..points.len())]);

    let mut weights = vec![0f64; points.len()];
    while centers.len() < k {
        let mut total = 0f64;
        for (i, point) in points.iter().enumerate() {
            let nearest = centers
                .iter()
                .map(|c| distance_squared(point, c) as f64)
                .fold(f64::MAX, f64::min);
            weights[i] = nearest;
            total += nearest;
        }

        let next = if total > 0.0 {
            let mut target = rng.gen::<f64>() * total;
            let mut pick = points.len() - 1;
            for (i, &w) in weights.iter().enumerate() {
                target -= w;
                if target <= 0.0 {
                    pick = i;
                    break;
                }
            }
            pick
        } else {
            // All remaining points coincide with a center already.
            rng.gen_range(0..points.len())
        };
        centers.push(points[next]);
    }
    centers
}

/// Index of the closest center; ties go to the lowest index.
fn nearest_center(point: &[f32; 3], centers: &[[f32; 3]]) -> usize {
    let mut best_idx = 0;
    let mut best_dist = f32::MAX;
    for (i, center) in centers.iter().enumerate() {
        let dist = distance_squared(point, center);
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
        }
    }
    best_idx
}

#[inline]
fn distance_squared(a: &[f32; 3], b: &[f32; 3]) -> f32 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    dr * dr + dg * dg + db * db
}
