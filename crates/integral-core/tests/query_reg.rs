//! Rectangle query regression test
//!
//! Compares O(1) rectangle sums and means with brute-force scanning over
//! interior, edge-crossing and fully outside rectangles, and checks that
//! adjacent sub-rectangles add up to their union.

use integral_core::{Error, Rect};
use integral_test::{Grid, RegParams, brute_force_mean, brute_force_sum};

/// Rectangles of every placement class relative to a `w` x `h` domain
fn probe_rects(w: i32, h: i32) -> Vec<Rect> {
    let mut rects = Vec::new();
    for &x in &[-w - 3, -2, 0, 1, w / 2, w - 1, w, w + 4] {
        for &y in &[-h - 3, -1, 0, 2, h / 2, h - 1, h, h + 2] {
            for &(rw, rh) in &[(1, 1), (2, 3), (w, 1), (1, h), (w + 5, h + 5), (3, 0)] {
                rects.push(Rect::new_unchecked(x, y, rw, rh));
            }
        }
    }
    rects
}

#[test]
fn query_reg() {
    let mut rp = RegParams::new("query");

    let grids = [
        Grid::random(17, 11, 65535, 3).expect("random"),
        Grid::gradient(6, 25, 255),
        Grid::from_fn(1, 1, |_, _| 42),
    ];

    for grid in &grids {
        let table = grid.table().expect("table");
        let (w, h) = (grid.width as i32, grid.height as i32);
        eprintln!("  grid {}x{}", w, h);

        let mut sums_ok = true;
        let mut clamp_ok = true;
        let mut means_ok = true;
        for rect in probe_rects(w, h) {
            let sum = table.sum(&rect);

            // --- Test 1: sum matches brute force ---
            if sum != brute_force_sum(grid, &rect) {
                eprintln!("    sum mismatch for {:?}", rect);
                sums_ok = false;
            }

            // --- Test 2: clamped rectangle gives the same sum ---
            let clamped = rect.clip(w, h);
            let clamped_sum = clamped.map_or(0, |r| table.sum(&r));
            if sum != clamped_sum {
                clamp_ok = false;
            }

            // --- Test 3: mean divides by the clipped area, or errors ---
            match (table.mean(&rect), brute_force_mean(grid, &rect)) {
                (Ok(m), Some(expected)) if (m - expected).abs() < 1e-9 => {}
                (Err(Error::DegenerateQuery(_)), None) => {}
                (got, expected) => {
                    eprintln!("    mean mismatch for {:?}: {:?} vs {:?}", rect, got, expected);
                    means_ok = false;
                }
            }
        }
        rp.check("rectangle sums match brute force", sums_ok);
        rp.check("out-of-domain parts contribute nothing", clamp_ok);
        rp.check("means match brute force", means_ok);
    }

    assert!(rp.cleanup(), "query regression test failed");
}

#[test]
fn query_extreme_coordinates_reg() {
    let mut rp = RegParams::new("query_extreme_coordinates");

    let t = Grid::from_fn(3, 1, |x, _| (10 * (x + 1)) as u16).table().expect("3x1");
    let far = [
        Rect::new(i32::MAX - 1, 0, 10, 1).expect("far right"),
        Rect::new(0, i32::MAX, 3, i32::MAX).expect("far below"),
        Rect::new(i32::MIN, i32::MIN, 5, 5).expect("far above left"),
        Rect::new(i32::MAX, i32::MAX, i32::MAX, i32::MAX).expect("corner"),
    ];
    for rect in &far {
        rp.compare_sums(0, t.sum(rect));
        rp.check(
            &format!("mean of {:?} is degenerate", rect),
            matches!(t.mean(rect), Err(Error::DegenerateQuery(_))),
        );
    }

    // Huge rectangles that do cover the domain still clamp to it
    let huge = Rect::new(-5, -5, i32::MAX, i32::MAX).expect("huge");
    rp.compare_sums(60, t.sum(&huge));
    rp.compare_values(20.0, t.mean(&huge).expect("huge mean"), 0.0);

    assert!(rp.cleanup(), "query_extreme_coordinates regression test failed");
}

#[test]
fn query_decomposition_reg() {
    let mut rp = RegParams::new("query_decomposition");

    let grid = Grid::random(24, 19, 65535, 5).expect("random");
    let table = grid.table().expect("table");

    let rects = [
        table.bounds(),
        Rect::new_unchecked(3, 2, 10, 9),
        Rect::new_unchecked(-4, -4, 12, 30),
        Rect::new_unchecked(20, 15, 10, 10),
    ];
    for rect in &rects {
        let whole = table.sum(rect);
        for at in rect.x..=rect.right() {
            let (left, right) = rect.split_at_x(at);
            rp.compare_sums(whole, table.sum(&left) + table.sum(&right));
        }
        for at in [rect.y, rect.y + 1, rect.y + rect.h / 2, rect.bottom()] {
            let (top, bottom) = rect.split_at_y(at);
            rp.compare_sums(whole, table.sum(&top) + table.sum(&bottom));
        }
    }

    // Known values: 3x1 [10, 20, 30] and 2x2 [[1, 2], [3, 4]]
    let t = Grid::from_fn(3, 1, |x, _| (10 * (x + 1)) as u16).table().expect("3x1");
    rp.compare_sums(60, t.sum(&t.bounds()));
    rp.compare_values(20.0, t.mean(&t.bounds()).expect("mean"), 0.0);
    let t = Grid::from_fn(2, 2, |x, y| (2 * y + x + 1) as u16).table().expect("2x2");
    rp.compare_sums(10, t.sum(&t.bounds()));
    rp.compare_values(2.5, t.mean(&t.bounds()).expect("mean"), 0.0);

    assert!(rp.cleanup(), "query_decomposition regression test failed");
}
