//! Route geometry over `[lng, lat]` coordinates.
//!
//! Distances use the haversine formula on a spherical Earth. Simplification
//! works in raw degree space.

use serde::Serialize;

use crate::types::LngLat;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default Douglas–Peucker tolerance, in degrees.
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 0.0001;

/// Default cap on points in a route preview path.
pub const DEFAULT_SAMPLE_POINTS: usize = 50;

/// Great-circle distance between two points in kilometres.
pub fn distance_km(a: LngLat, b: LngLat) -> f64 {
    let d_lat = (b[1] - a[1]).to_radians();
    let d_lng = (b[0] - a[0]).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a[1].to_radians().cos() * b[1].to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Total length of a polyline in kilometres.
pub fn line_distance_km(points: &[LngLat]) -> f64 {
    points.windows(2).map(|w| distance_km(w[0], w[1])).sum()
}

/// Initial bearing from `a` to `b` in degrees, normalised to `[0, 360)`.
pub fn bearing(a: LngLat, b: LngLat) -> f64 {
    let d_lng = (b[0] - a[0]).to_radians();
    let lat1 = a[1].to_radians();
    let lat2 = b[1].to_radians();
    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Linear interpolation between two points; `ratio` 0 is `a`, 1 is `b`.
pub fn interpolate(a: LngLat, b: LngLat, ratio: f64) -> LngLat {
    [a[0] + (b[0] - a[0]) * ratio, a[1] + (b[1] - a[1]) * ratio]
}

/// Point at `fraction` (0..=1) of the way along a polyline by distance.
///
/// Returns `None` for an empty line.
pub fn point_along_line(points: &[LngLat], fraction: f64) -> Option<LngLat> {
    let (&first, rest) = points.split_first()?;
    if rest.is_empty() {
        return Some(first);
    }

    let target = fraction.clamp(0.0, 1.0) * line_distance_km(points);
    let mut travelled = 0.0;
    for pair in points.windows(2) {
        let segment = distance_km(pair[0], pair[1]);
        if travelled + segment >= target {
            let ratio = if segment > 0.0 {
                (target - travelled) / segment
            } else {
                0.0
            };
            return Some(interpolate(pair[0], pair[1], ratio));
        }
        travelled += segment;
    }
    points.last().copied()
}

/// Evenly pick at most `max_points` coordinates from a line. The first and
/// last points are always kept when `max_points >= 2`.
pub fn sample_line(points: &[LngLat], max_points: usize) -> Vec<LngLat> {
    if points.len() <= max_points {
        return points.to_vec();
    }
    if max_points < 2 {
        return points.iter().take(max_points).copied().collect();
    }
    let last = points.len() - 1;
    (0..max_points)
        .map(|i| points[i * last / (max_points - 1)])
        .collect()
}

/// Douglas–Peucker simplification. Endpoints are always kept.
pub fn simplify(points: &[LngLat], tolerance: f64) -> Vec<LngLat> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;

    let mut stack = vec![(0, points.len() - 1)];
    while let Some((start, end)) = stack.pop() {
        if end - start <= 1 {
            continue;
        }
        let (index, distance) = (start + 1..end)
            .map(|i| (i, perpendicular_distance(points[i], points[start], points[end])))
            .fold((start, 0.0), |best, candidate| {
                if candidate.1 > best.1 {
                    candidate
                } else {
                    best
                }
            });
        if distance > tolerance {
            keep[index] = true;
            stack.push((start, index));
            stack.push((index, end));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(point, kept)| kept.then_some(*point))
        .collect()
}

/// Planar distance from `point` to the infinite line through `start` and `end`.
fn perpendicular_distance(point: LngLat, start: LngLat, end: LngLat) -> f64 {
    let dx = end[0] - start[0];
    let dy = end[1] - start[1];
    let length = dx.hypot(dy);
    if length == 0.0 {
        return (point[0] - start[0]).hypot(point[1] - start[1]);
    }
    (dy * point[0] - dx * point[1] + end[0] * start[1] - end[1] * start[0]).abs() / length
}

/// Centroid of a set of points, or `None` when empty.
pub fn center(points: &[LngLat]) -> Option<LngLat> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (lng, lat) = points
        .iter()
        .fold((0.0, 0.0), |(lng, lat), p| (lng + p[0], lat + p[1]));
    Some([lng / n, lat / n])
}

/// Geometry of a submitted route, shaped for drawing it on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub distance_km: f64,
    /// Bearing from the first to the last point.
    pub bearing: f64,
    pub center: LngLat,
    /// Point halfway along the line by distance.
    pub halfway: LngLat,
    /// Simplified line, capped at `max_points`.
    pub path: Vec<LngLat>,
}

/// Summarize a route line. `None` for an empty line.
pub fn summarize(points: &[LngLat], tolerance: f64, max_points: usize) -> Option<RouteSummary> {
    let (&first, &last) = (points.first()?, points.last()?);
    Some(RouteSummary {
        distance_km: line_distance_km(points),
        bearing: bearing(first, last),
        center: center(points)?,
        halfway: point_along_line(points, 0.5)?,
        path: sample_line(&simplify(points, tolerance), max_points),
    })
}
