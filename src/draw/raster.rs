//! Pixel-grid rasterization of idealized shapes.
//!
//! Every function maps two integer anchors `(r0, c0)`–`(r1, c1)` to the grid cells
//! the shape covers, as `(row, col)` pairs. Output order is unspecified and cells
//! may repeat; painting a cell twice is harmless. Zero-area inputs degrade to a
//! line instead of failing.

use super::shape::ShapeKind;
use std::f64::consts::PI;

/// A `(row, col)` grid coordinate.
pub type Cell = (i32, i32);

/// Ratio of the star's inner vertices to its outer vertices.
const STAR_INNER_RATIO: f64 = 0.4;
const STAR_VERTICES: usize = 10;
const MIN_OVAL_STEPS: i32 = 200;

/// Rasterizes `kind` between the two anchors. `filled` is ignored for lines.
pub fn rasterize(kind: ShapeKind, r0: i32, c0: i32, r1: i32, c1: i32, filled: bool) -> Vec<Cell> {
    match kind {
        ShapeKind::Line => line(r0, c0, r1, c1),
        ShapeKind::Rectangle => rectangle(r0, c0, r1, c1, filled),
        ShapeKind::Square => square(r0, c0, r1, c1, filled),
        ShapeKind::Circle => circle(r0, c0, r1, c1, filled),
        ShapeKind::Oval => oval(r0, c0, r1, c1, filled),
        ShapeKind::Star => star(r0, c0, r1, c1, filled),
    }
}

/// Bresenham line from `(r0, c0)` to `(r1, c1)`, both endpoints included.
pub fn line(r0: i32, c0: i32, r1: i32, c1: i32) -> Vec<Cell> {
    let (mut x, mut y) = (c0, r0);
    let dx = i64::from(c1.abs_diff(c0));
    let dy = -i64::from(r1.abs_diff(r0));
    let sx = if c0 < c1 { 1 } else { -1 };
    let sy = if r0 < r1 { 1 } else { -1 };
    let mut err = dx + dy;

    let steps = c1.abs_diff(c0).max(r1.abs_diff(r0)) as usize;
    let mut cells = Vec::with_capacity(steps + 1);
    loop {
        cells.push((y, x));
        if x == c1 && y == r1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    cells
}

/// Rectangle between two corners, outlined or filled.
pub fn rectangle(r0: i32, c0: i32, r1: i32, c1: i32, filled: bool) -> Vec<Cell> {
    let (min_r, max_r) = (r0.min(r1), r0.max(r1));
    let (min_c, max_c) = (c0.min(c1), c0.max(c1));

    if filled {
        return (min_r..=max_r)
            .flat_map(|r| (min_c..=max_c).map(move |c| (r, c)))
            .collect();
    }

    let mut cells = Vec::new();
    for c in min_c..=max_c {
        cells.push((min_r, c));
        cells.push((max_r, c));
    }
    for r in (min_r + 1)..max_r {
        cells.push((r, min_c));
        cells.push((r, max_c));
    }
    cells
}

/// Rectangle constrained to equal sides, anchored at `(r0, c0)`.
pub fn square(r0: i32, c0: i32, r1: i32, c1: i32, filled: bool) -> Vec<Cell> {
    let (r1, c1) = equal_extent_corner(r0, c0, r1, c1);
    rectangle(r0, c0, r1, c1, filled)
}

/// Ellipse inscribed in the box spanned by the anchors.
///
/// Filled ovals are scanline spans per row; outlines are sampled parametrically
/// densely enough that consecutive samples land on neighbouring cells.
pub fn oval(r0: i32, c0: i32, r1: i32, c1: i32, filled: bool) -> Vec<Cell> {
    let (min_r, max_r) = (r0.min(r1), r0.max(r1));
    let (min_c, max_c) = (c0.min(c1), c0.max(c1));
    let cx = f64::from(min_c + max_c) / 2.0;
    let cy = f64::from(min_r + max_r) / 2.0;
    let a = f64::from(max_c - min_c) / 2.0;
    let b = f64::from(max_r - min_r) / 2.0;

    if a <= 0.0 || b <= 0.0 {
        return line(r0, c0, r1, c1);
    }

    let mut cells = Vec::new();
    if filled {
        for r in min_r..=max_r {
            let dy = f64::from(r) - cy;
            let term = 1.0 - (dy * dy) / (b * b);
            if term < 0.0 {
                continue;
            }
            let span = a * term.sqrt();
            let left = (cx - span).ceil() as i32;
            let right = (cx + span).floor() as i32;
            cells.extend((left..=right).map(|c| (r, c)));
        }
    } else {
        let steps = MIN_OVAL_STEPS.max(((a + b) * 4.0) as i32);
        for i in 0..steps {
            let t = f64::from(i) / f64::from(steps) * 2.0 * PI;
            let px = cx + a * t.cos();
            let py = cy + b * t.sin();
            cells.push((py.round() as i32, px.round() as i32));
        }
    }
    cells
}

/// Oval constrained to equal axes, anchored at `(r0, c0)`.
pub fn circle(r0: i32, c0: i32, r1: i32, c1: i32, filled: bool) -> Vec<Cell> {
    let (r1, c1) = equal_extent_corner(r0, c0, r1, c1);
    oval(r0, c0, r1, c1, filled)
}

/// Five-pointed star inscribed in the anchor box, stretched to its aspect ratio.
pub fn star(r0: i32, c0: i32, r1: i32, c1: i32, filled: bool) -> Vec<Cell> {
    let (min_r, max_r) = (f64::from(r0.min(r1)), f64::from(r0.max(r1)));
    let (min_c, max_c) = (f64::from(c0.min(c1)), f64::from(c0.max(c1)));
    let cx = (min_c + max_c) / 2.0;
    let cy = (min_r + max_r) / 2.0;
    let rx = (max_c - min_c) / 2.0;
    let ry = (max_r - min_r) / 2.0;

    if rx <= 0.0 || ry <= 0.0 {
        return line(r0, c0, r1, c1);
    }

    let vertices: Vec<Cell> = (0..STAR_VERTICES)
        .map(|i| {
            let angle = -PI / 2.0 + i as f64 * PI / 5.0;
            let factor = if i % 2 == 0 { 1.0 } else { STAR_INNER_RATIO };
            let px = cx + rx * factor * angle.cos();
            let py = cy + ry * factor * angle.sin();
            (py.round() as i32, px.round() as i32)
        })
        .collect();

    if filled {
        scanline_fill(&vertices)
    } else {
        closed_polyline(&vertices)
    }
}

/// Far corner adjusted so both extents equal the smaller one, keeping the drag direction.
fn equal_extent_corner(r0: i32, c0: i32, r1: i32, c1: i32) -> Cell {
    let dr = r1 - r0;
    let dc = c1 - c0;
    let side = dr.abs().min(dc.abs());
    let r = r0 + if dr >= 0 { side } else { -side };
    let c = c0 + if dc >= 0 { side } else { -side };
    (r, c)
}

fn closed_polyline(vertices: &[Cell]) -> Vec<Cell> {
    let mut cells = Vec::new();
    for (i, &(ra, ca)) in vertices.iter().enumerate() {
        let (rb, cb) = vertices[(i + 1) % vertices.len()];
        cells.extend(line(ra, ca, rb, cb));
    }
    cells
}

/// Even-odd scanline fill of a closed polygon given by its vertices.
fn scanline_fill(vertices: &[Cell]) -> Vec<Cell> {
    let Some(top) = vertices.iter().map(|v| v.0).min() else {
        return Vec::new();
    };
    let bottom = vertices.iter().map(|v| v.0).max().unwrap_or(top);

    let mut cells = Vec::new();
    let mut crossings: Vec<f64> = Vec::with_capacity(vertices.len());
    for row in top..=bottom {
        let y = f64::from(row);
        crossings.clear();
        for (i, &(ri, ci)) in vertices.iter().enumerate() {
            let (rj, cj) = vertices[(i + 1) % vertices.len()];
            let (yi, yj) = (f64::from(ri), f64::from(rj));
            // Half-open so a vertex shared by two edges is counted once.
            if (yi <= y && y < yj) || (yj <= y && y < yi) {
                let t = (y - yi) / (yj - yi);
                let (xi, xj) = (f64::from(ci), f64::from(cj));
                crossings.push(xi + t * (xj - xi));
            }
        }
        crossings.sort_by(f64::total_cmp);

        for pair in crossings.chunks_exact(2) {
            let left = pair[0].ceil() as i32;
            let right = pair[1].floor() as i32;
            cells.extend((left..=right).map(|c| (row, c)));
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn set(cells: &[Cell]) -> HashSet<Cell> {
        cells.iter().copied().collect()
    }

    fn extent(cells: &[Cell]) -> (i32, i32, i32, i32) {
        let min_r = cells.iter().map(|c| c.0).min().unwrap();
        let max_r = cells.iter().map(|c| c.0).max().unwrap();
        let min_c = cells.iter().map(|c| c.1).min().unwrap();
        let max_c = cells.iter().map(|c| c.1).max().unwrap();
        (min_r, max_r, min_c, max_c)
    }

    #[test]
    fn line_matches_bresenham_reference() {
        assert_eq!(
            line(0, 0, 2, 5),
            vec![(0, 0), (0, 1), (1, 2), (1, 3), (2, 4), (2, 5)]
        );
        assert_eq!(line(3, 3, 3, 3), vec![(3, 3)]);
    }

    #[test]
    fn line_includes_endpoints_and_is_eight_connected() {
        for r1 in -6..=6 {
            for c1 in -6..=6 {
                if (r1, c1) == (0, 0) {
                    continue;
                }
                let cells = line(0, 0, r1, c1);
                assert_eq!(cells.first(), Some(&(0, 0)));
                assert_eq!(cells.last(), Some(&(r1, c1)));
                for pair in cells.windows(2) {
                    let dr = (pair[1].0 - pair[0].0).abs();
                    let dc = (pair[1].1 - pair[0].1).abs();
                    assert_eq!(dr.max(dc), 1, "gap in line to ({r1}, {c1})");
                }
            }
        }
    }

    #[test]
    fn line_reserves_one_slot_per_cell() {
        let cells = line(0, 0, 1000, 1000);
        assert_eq!(cells.len(), 1001);
        assert!(cells.capacity() < 2 * cells.len());
    }

    #[test]
    fn line_handles_coordinates_at_integer_limits() {
        let cells = line(i32::MAX, i32::MIN, i32::MAX - 2, i32::MIN + 4);
        assert_eq!(cells.first(), Some(&(i32::MAX, i32::MIN)));
        assert_eq!(cells.last(), Some(&(i32::MAX - 2, i32::MIN + 4)));
        assert_eq!(cells.len(), 5);

        let cells = line(i32::MIN, 0, i32::MIN, 3);
        assert_eq!(cells, vec![(i32::MIN, 0), (i32::MIN, 1), (i32::MIN, 2), (i32::MIN, 3)]);
    }

    #[test]
    fn rectangle_outline_is_filled_minus_interior() {
        for (r1, c1) in [(4, 7), (-3, 2), (0, 5), (5, 0), (1, 1), (0, 0)] {
            let filled = set(&rectangle(0, 0, r1, c1, true));
            let outline = set(&rectangle(0, 0, r1, c1, false));
            assert!(outline.is_subset(&filled));

            let (min_r, max_r) = (0.min(r1), 0.max(r1));
            let (min_c, max_c) = (0.min(c1), 0.max(c1));
            let expected: HashSet<Cell> = filled
                .iter()
                .copied()
                .filter(|&(r, c)| r == min_r || r == max_r || c == min_c || c == max_c)
                .collect();
            assert_eq!(outline, expected, "corner ({r1}, {c1})");
        }
    }

    #[test]
    fn square_has_equal_sides_and_keeps_anchor() {
        for (r1, c1) in [(3, 9), (-8, 2), (6, -6), (-2, -10)] {
            let cells = square(4, 4, r1, c1, false);
            let (min_r, max_r, min_c, max_c) = extent(&cells);
            assert_eq!(max_r - min_r, max_c - min_c);
            assert!(set(&cells).contains(&(4, 4)));
        }
    }

    #[test]
    fn circle_has_equal_extent_within_rounding() {
        for (r1, c1) in [(10, 24), (-12, 7), (15, -15)] {
            for filled in [false, true] {
                let cells = circle(0, 0, r1, c1, filled);
                let (min_r, max_r, min_c, max_c) = extent(&cells);
                assert!(((max_r - min_r) - (max_c - min_c)).abs() <= 1);

                // The box grows away from the first anchor along the shorter drag axis.
                let side = r1.abs().min(c1.abs());
                let (far_r, far_c) = (r1.signum() * side, c1.signum() * side);
                let near = |actual: i32, expected: i32| (actual - expected).abs() <= 1;
                assert!(near(min_r, 0.min(far_r)) && near(max_r, 0.max(far_r)), "rows for ({r1}, {c1})");
                assert!(near(min_c, 0.min(far_c)) && near(max_c, 0.max(far_c)), "cols for ({r1}, {c1})");
            }
        }
    }

    #[test]
    fn filled_oval_is_symmetric() {
        for (r1, c1) in [(9, 15), (10, 21), (7, 7), (12, 4)] {
            let cells = set(&oval(0, 0, r1, c1, true));
            for &(r, c) in &cells {
                assert!(cells.contains(&(r1 - r, c)), "row mirror of ({r}, {c})");
                assert!(cells.contains(&(r, c1 - c)), "col mirror of ({r}, {c})");
            }
        }
    }

    #[test]
    fn oval_outline_touches_all_four_extremes() {
        let cells = set(&oval(0, 0, 10, 20, false));
        assert!(cells.contains(&(5, 0)));
        assert!(cells.contains(&(5, 20)));
        assert!(cells.contains(&(0, 10)));
        assert!(cells.contains(&(10, 10)));
    }

    #[test]
    fn degenerate_oval_and_star_fall_back_to_line() {
        assert_eq!(oval(2, 0, 2, 6, true), line(2, 0, 2, 6));
        assert_eq!(star(0, 3, 9, 3, false), line(0, 3, 9, 3));
    }

    #[test]
    fn star_outline_hits_outer_tips() {
        let cells = set(&star(0, 0, 20, 20, false));
        // Top tip sits at the middle of the top edge.
        assert!(cells.contains(&(0, 10)));
        let (min_r, _, min_c, max_c) = extent(&cells.iter().copied().collect::<Vec<_>>());
        assert_eq!(min_r, 0);
        assert!(min_c >= 0 && max_c <= 20);
    }

    #[test]
    fn filled_star_contains_center_and_outline_tips() {
        let filled = set(&star(0, 0, 40, 40, true));
        assert!(filled.contains(&(20, 20)));
        // Notch between two upper arms stays empty.
        assert!(!filled.contains(&(2, 2)));
        assert!(filled.len() > set(&star(0, 0, 40, 40, false)).len() / 2);
    }

    #[test]
    fn dispatch_ignores_fill_for_lines() {
        assert_eq!(
            rasterize(ShapeKind::Line, 0, 0, 3, 4, true),
            rasterize(ShapeKind::Line, 0, 0, 3, 4, false)
        );
        assert_eq!(
            rasterize(ShapeKind::Rectangle, 0, 0, 2, 2, true).len(),
            9
        );
    }
}
