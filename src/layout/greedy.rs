use super::{check_margin, overlaps, LayoutError};
use crate::geometry::{Point2, Rect};

/// Direction a candidate is appended relative to its anchor rectangle.
#[derive(Clone, Copy)]
enum Side {
    Right,
    Bottom,
}

/// Best-of-all-anchors greedy packing.
///
/// The first rectangle is pinned at the origin. Every later rectangle tries an
/// append-right and an append-bottom placement against *each* rectangle placed
/// so far, resolves collisions for each candidate, and commits the candidate
/// with the lowest marginal bounding-box growth (`space_score`), breaking ties
/// by closeness of the new bounding box to a square (`shape_score`).
///
/// Tie-break order is fixed for reproducibility: anchors are tried in placement
/// order, the right candidate before the bottom one, and only a strictly better
/// score displaces the incumbent. Worst case O(n³) once the push loop is
/// counted; this is the most area-efficient strategy and is reserved for
/// modestly sized groups.
pub fn pack_greedy(rects: &mut [Rect], margin: f64) -> Result<(), LayoutError> {
    check_margin(margin)?;
    if rects.is_empty() {
        return Err(LayoutError::invalid(
            "greedy layout requires at least one rectangle",
        ));
    }

    rects[0].top_left = Point2::ZERO;
    let mut placed = vec![rects[0]];
    let mut width = rects[0].width;
    let mut height = rects[0].height;

    for i in 1..rects.len() {
        let mut best = rects[i];
        let mut best_space = f64::INFINITY;
        let mut best_shape = f64::INFINITY;

        for anchor in 0..placed.len() {
            for side in [Side::Right, Side::Bottom] {
                let seed = seed_candidate(&placed[anchor], &rects[i], side, margin);
                let candidate = resolve(seed, &placed, side, margin);

                let space_score = (candidate.right() - width) + (candidate.bottom() - height);
                let shape_score =
                    (candidate.right().max(width) - candidate.bottom().max(height)).abs();

                if space_score < best_space
                    || (space_score == best_space && shape_score < best_shape)
                {
                    best = candidate;
                    best_space = space_score;
                    best_shape = shape_score;
                }
            }
        }

        width = width.max(best.right());
        height = height.max(best.bottom());
        rects[i].top_left = best.top_left;
        placed.push(best);
    }
    Ok(())
}

fn seed_candidate(anchor: &Rect, rect: &Rect, side: Side, margin: f64) -> Rect {
    let mut candidate = *rect;
    candidate.top_left = match side {
        Side::Right => Point2::new(anchor.right() + margin, anchor.top()),
        Side::Bottom => Point2::new(anchor.left(), anchor.bottom() + margin),
    };
    candidate
}

/// Push a candidate until it clears everything already placed.
///
/// Right candidates are pushed down-and-right, bottom candidates right-and-down.
/// Each push strictly increases one coordinate past a placed rectangle's far
/// edge, so the loop terminates against a finite placed set.
fn resolve(mut candidate: Rect, placed: &[Rect], side: Side, margin: f64) -> Rect {
    loop {
        let Some(hit) = placed.iter().find(|&p| overlaps(&candidate, p, 0.0)) else {
            return candidate;
        };
        match side {
            Side::Right => {
                candidate.top_left.y = hit.bottom() + margin;
                candidate.top_left.x = candidate.left().max(hit.right() + margin);
            }
            Side::Bottom => {
                candidate.top_left.x = hit.right() + margin;
                candidate.top_left.y = candidate.top().max(hit.bottom() + margin);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pack_greedy;
    use crate::geometry::{Point2, Rect};
    use crate::layout::overlaps;

    #[test]
    fn small_rect_goes_right_of_large_one() {
        // The motivating example: a 1x1 next to a 10x10 with margin 2 should
        // sit flush to the right, not diagonally below.
        let mut rects = vec![Rect::sized(10.0, 10.0), Rect::sized(1.0, 1.0)];
        pack_greedy(&mut rects, 2.0).unwrap();
        assert_eq!(rects[0].top_left, Point2::new(0.0, 0.0));
        assert_eq!(rects[1].top_left, Point2::new(12.0, 0.0));
    }

    #[test]
    fn empty_input_is_rejected() {
        let mut rects: Vec<Rect> = Vec::new();
        assert!(pack_greedy(&mut rects, 1.0).is_err());
    }

    #[test]
    fn single_rect_is_pinned_at_origin() {
        let mut rects = vec![Rect::new(Point2::new(50.0, 50.0), 4.0, 6.0)];
        pack_greedy(&mut rects, 1.0).unwrap();
        assert_eq!(rects[0].top_left, Point2::ZERO);
    }

    #[test]
    fn placements_do_not_intersect() {
        let mut rects = vec![
            Rect::sized(10.0, 4.0),
            Rect::sized(3.0, 8.0),
            Rect::sized(6.0, 6.0),
            Rect::sized(2.0, 2.0),
            Rect::sized(9.0, 3.0),
        ];
        pack_greedy(&mut rects, 2.0).unwrap();
        for i in 0..rects.len() {
            for j in 0..i {
                assert!(
                    !overlaps(&rects[i], &rects[j], 0.0),
                    "rects {i} and {j} intersect"
                );
            }
        }
    }

    #[test]
    fn sizes_survive_packing() {
        let input = vec![Rect::sized(5.0, 5.0), Rect::sized(2.0, 7.0)];
        let mut rects = input.clone();
        pack_greedy(&mut rects, 1.0).unwrap();
        for (before, after) in input.iter().zip(&rects) {
            assert_eq!((before.width, before.height), (after.width, after.height));
        }
    }

    #[test]
    fn repacking_packed_input_re_satisfies_constraints() {
        // positions depend only on the size sequence, so packing an
        // already-packed slice again must land every rect in the same place
        // and keep the margin separation intact
        let mut rects = vec![
            Rect::sized(10.0, 4.0),
            Rect::sized(3.0, 8.0),
            Rect::sized(6.0, 6.0),
        ];
        pack_greedy(&mut rects, 2.0).unwrap();
        let first_pass: Vec<_> = rects.iter().map(|r| r.top_left).collect();

        pack_greedy(&mut rects, 2.0).unwrap();
        let second_pass: Vec<_> = rects.iter().map(|r| r.top_left).collect();
        assert_eq!(first_pass, second_pass);
        for i in 0..rects.len() {
            for j in 0..i {
                assert!(
                    !overlaps(&rects[i], &rects[j], 2.0),
                    "rects {i} and {j} closer than the margin after repack"
                );
            }
        }
    }

    #[test]
    fn equal_squares_fill_toward_a_square_shape() {
        let mut rects = vec![Rect::sized(10.0, 10.0); 4];
        pack_greedy(&mut rects, 0.0).unwrap();
        // four equal squares should tile a 20x20 block, not a 40-long strip
        let right = rects.iter().map(|r| r.right()).fold(0.0, f64::max);
        let bottom = rects.iter().map(|r| r.bottom()).fold(0.0, f64::max);
        assert_eq!(right, 20.0);
        assert_eq!(bottom, 20.0);
    }
}
