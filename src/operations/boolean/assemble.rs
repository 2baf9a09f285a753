use std::f64::consts::{PI, TAU};

use slotmap::SlotMap;
use tracing::{trace, warn};

use crate::error::{AssemblyError, Result};
use crate::math::polygon_2d::{deduplicate, signed_area};
use crate::math::{approx_eq, Point2};

slotmap::new_key_type! {
    /// Key of a sub-path waiting to be joined during reassembly.
    struct FragmentKey;
}

/// Which continuation a chain takes at a junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Rightmost,
    Leftmost,
}

type FragmentPool = SlotMap<FragmentKey, Vec<Point2>>;

/// Joins kept sub-paths end to end into closed polygons.
///
/// Sub-paths are matched when an endpoint of one coincides with an endpoint
/// of another, in either direction. Each polygon is grown from the
/// remaining sub-path with the smallest x coordinate, once taking the
/// rightmost continuation at every junction and once the leftmost; the
/// assembly enclosing the smaller area wins. A polygon that touches itself
/// at a vertex is split there into separate loops. Polygons with fewer than
/// 3 points or no area are dropped.
///
/// # Errors
///
/// Returns `AssemblyError::OpenChain` if a chain of sub-paths cannot be closed.
pub fn assemble_path_fragments(fragments: Vec<Vec<Point2>>, eps: f64) -> Result<Vec<Vec<Point2>>> {
    let mut pool = FragmentPool::with_key();
    for frag in fragments {
        if frag.len() >= 2 {
            pool.insert(frag);
        }
    }

    let mut polygons = Vec::new();
    while let Some(start) = leftmost_fragment(&pool) {
        let mut right_pool = pool.clone();
        let right = assemble_cycle(&mut right_pool, start, Turn::Rightmost, eps);
        let left = assemble_cycle(&mut pool, start, Turn::Leftmost, eps);

        let cycle = match (left, right) {
            (Ok(left), Ok(right)) => {
                if signed_area(&left).abs() < signed_area(&right).abs() {
                    left
                } else {
                    pool = right_pool;
                    right
                }
            }
            (Ok(left), Err(_)) => left,
            (Err(_), Ok(right)) => {
                pool = right_pool;
                right
            }
            (Err(e), Err(_)) => return Err(e),
        };

        let cycle = deduplicate(&cycle, true, eps);
        for polygon in split_at_repeated_vertices(cycle, eps) {
            let area = signed_area(&polygon).abs();
            if polygon.len() < 3 || area <= eps {
                warn!(points = polygon.len(), area, "discarding degenerate polygon");
                continue;
            }
            trace!(points = polygon.len(), area, remaining = pool.len(), "closed polygon");
            polygons.push(polygon);
        }
    }
    Ok(polygons)
}

/// Splits a closed cycle wherever it passes through the same vertex twice,
/// so that every returned loop is free of pinch points.
fn split_at_repeated_vertices(cycle: Vec<Point2>, eps: f64) -> Vec<Vec<Point2>> {
    let mut loops = Vec::new();
    let mut stack: Vec<Point2> = Vec::with_capacity(cycle.len());
    for pt in cycle {
        if let Some(hit) = stack.iter().rposition(|q| approx_eq(q, &pt, eps)) {
            loops.push(stack.split_off(hit));
        }
        stack.push(pt);
    }
    if !stack.is_empty() {
        loops.push(stack);
    }
    loops
}

/// Key of the fragment whose minimum x coordinate is smallest.
fn leftmost_fragment(pool: &FragmentPool) -> Option<FragmentKey> {
    pool.iter()
        .map(|(key, frag)| (key, frag.iter().map(|p| p.x).fold(f64::INFINITY, f64::min)))
        .fold(None, |best: Option<(FragmentKey, f64)>, (key, x)| match best {
            Some((_, bx)) if bx <= x => best,
            _ => Some((key, x)),
        })
        .map(|(key, _)| key)
}

/// Grows one closed cycle starting from `start`, consuming fragments from
/// `pool`. The returned cycle repeats its first point at the end.
fn assemble_cycle(
    pool: &mut FragmentPool,
    start: FragmentKey,
    turn: Turn,
    eps: f64,
) -> Result<Vec<Point2>> {
    let Some(mut path) = pool.remove(start) else {
        return Ok(Vec::new());
    };
    loop {
        if is_closed(&path, eps) {
            return Ok(path);
        }
        let Some((key, reversed)) = extreme_continuation(&path, pool, turn, eps) else {
            let end = path[path.len() - 1];
            return Err(AssemblyError::OpenChain {
                fragments: pool.len() + 1,
                x: end.x,
                y: end.y,
            }
            .into());
        };
        let Some(mut frag) = pool.remove(key) else {
            continue;
        };
        if reversed {
            frag.reverse();
        }

        if is_closed(&frag, eps) {
            pool.insert(path);
            return Ok(frag);
        }

        // The chain revisits one of its own vertices: split off that loop
        // and return the prefix to the pool.
        let frag_end = frag[frag.len() - 1];
        let body = &path[..path.len() - 1];
        if let Some(hit) = body.iter().rposition(|p| approx_eq(p, &frag_end, eps)) {
            if hit > 0 {
                pool.insert(path[..=hit].to_vec());
            }
            let mut cycle = body[hit..].to_vec();
            cycle.extend(frag);
            return Ok(cycle);
        }

        path.extend(frag.into_iter().skip(1));
    }
}

fn is_closed(path: &[Point2], eps: f64) -> bool {
    path.len() > 2 && approx_eq(&path[0], &path[path.len() - 1], eps)
}

/// Finds the fragment continuing `path` with the sharpest turn in the
/// requested direction. Returns its key and whether it must be reversed.
fn extreme_continuation(
    path: &[Point2],
    pool: &FragmentPool,
    turn: Turn,
    eps: f64,
) -> Option<(FragmentKey, bool)> {
    let n = path.len();
    let end = &path[n - 1];
    let heading = path[n - 1] - path[n - 2];
    let heading = heading.y.atan2(heading.x);

    let mut best: Option<(FragmentKey, bool, f64)> = None;
    for (key, frag) in pool {
        let m = frag.len();
        let (reversed, dir) = if approx_eq(end, &frag[m - 1], eps) {
            (true, frag[m - 2] - frag[m - 1])
        } else if approx_eq(end, &frag[0], eps) {
            (false, frag[1] - frag[0])
        } else {
            continue;
        };
        let angle = relative_angle(dir.y.atan2(dir.x) - heading);
        let better = match (turn, best) {
            (_, None) => true,
            (Turn::Rightmost, Some((_, _, b))) => angle < b,
            (Turn::Leftmost, Some((_, _, b))) => angle > b,
        };
        if better {
            best = Some((key, reversed, angle));
        }
    }
    best.map(|(key, reversed, _)| (key, reversed))
}

/// Normalizes an angle difference into `[-PI, PI)`.
fn relative_angle(a: f64) -> f64 {
    (a + PI).rem_euclid(TAU) - PI
}
