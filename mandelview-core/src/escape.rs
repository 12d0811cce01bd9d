/// Squared bailout radius: a point has escaped once `|z|² > 4` (radius 2).
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// The result of iterating a single point.
///
/// Unlike renderers that only care about escaped points, the count is
/// meaningful in both cases: interior points carry the full iteration bound,
/// which is what the coloring step compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeTime {
    /// Number of iterations performed before exit.
    pub iterations: u32,
    /// Whether the orbit crossed the bailout radius before the bound.
    pub escaped: bool,
}

impl EscapeTime {
    /// `true` when the point did not escape within the bound.
    #[inline]
    pub fn is_interior(&self) -> bool {
        !self.escaped
    }
}

/// Iterate `z ← z² + c` from `z = 0` with `c = x0 + i·y0`.
///
/// Uses the three-variable form: `x1, y1` hold the current point and
/// `x2, y2` its component squares, so each step costs three multiplications
/// instead of five. The bailout test reads the squares computed by the
/// previous step, which means an orbit that first exceeds the radius on the
/// final permitted step still counts as interior — the coloring layer relies
/// on `escaped == (iterations < bound)`.
#[inline]
pub fn evaluate(x0: f64, y0: f64, iteration_bound: u32) -> EscapeTime {
    let mut x1 = 0.0_f64;
    let mut y1 = 0.0_f64;
    let mut x2 = 0.0_f64;
    let mut y2 = 0.0_f64;
    let mut iterations = 0u32;

    while x2 + y2 <= ESCAPE_RADIUS_SQ && iterations < iteration_bound {
        y1 = 2.0 * x1 * y1 + y0;
        x1 = x2 - y2 + x0;
        x2 = x1 * x1;
        y2 = y1 * y1;
        iterations += 1;
    }

    EscapeTime {
        iterations,
        escaped: iterations < iteration_bound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUND: u32 = 256;

    #[test]
    fn origin_is_interior() {
        let r = evaluate(0.0, 0.0, BOUND);
        assert!(r.is_interior());
        assert_eq!(r.iterations, BOUND);
    }

    #[test]
    fn far_point_escapes_on_first_step() {
        // |c| ≫ 2, so the very first squared magnitude exceeds the radius.
        let r = evaluate(10.0, 0.0, BOUND);
        assert!(r.escaped);
        assert_eq!(r.iterations, 1);
    }

    #[test]
    fn minus_one_is_interior() {
        // c = -1 gives the orbit 0 → -1 → 0 → -1 … (period 2)
        assert!(evaluate(-1.0, 0.0, BOUND).is_interior());
    }

    #[test]
    fn cardioid_point_is_interior() {
        // c = 0.24 sits just inside the cusp of the main cardioid.
        assert!(evaluate(0.24, 0.0, BOUND).is_interior());
    }

    #[test]
    fn known_escape_count() {
        // c = 1: z₁ = 1 (|z|² = 1), z₂ = 2 (|z|² = 4, still ≤ 4),
        // z₃ = 5 — the loop runs a third step before the test sees 25 > 4.
        let r = evaluate(1.0, 0.0, BOUND);
        assert!(r.escaped);
        assert_eq!(r.iterations, 3);
    }

    #[test]
    fn positive_real_axis_escapes() {
        let r = evaluate(0.5, 0.0, BOUND);
        assert!(r.escaped, "0.5 + 0i is outside the set");
    }

    #[test]
    fn bound_of_one_classifies_everything_near_origin_interior() {
        // A single permitted step never sees a magnitude above the radius
        // for |c| ≤ 2, so the escape flag must stay false.
        let r = evaluate(0.5, 0.5, 1);
        assert!(r.is_interior());
        assert_eq!(r.iterations, 1);
    }

    #[test]
    fn conjugate_symmetry() {
        // The set is symmetric about the real axis.
        for &(x, y) in &[(-0.75, 0.1), (0.3, 0.5), (-1.25, 0.2), (0.26, 0.002)] {
            assert_eq!(evaluate(x, y, BOUND), evaluate(x, -y, BOUND));
        }
    }

    #[test]
    fn deterministic_results() {
        let points = [
            (0.0, 0.0),
            (-0.75, 0.1),
            (0.3, 0.5),
            (-2.0, 0.0),
            (1.0, 1.0),
        ];
        let run1: Vec<_> = points.iter().map(|&(x, y)| evaluate(x, y, BOUND)).collect();
        let run2: Vec<_> = points.iter().map(|&(x, y)| evaluate(x, y, BOUND)).collect();
        assert_eq!(run1, run2, "iteration results must be deterministic");
    }
}
