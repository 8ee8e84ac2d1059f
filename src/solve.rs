use num_traits::Float;

/// Solves the linear system
///
/// ```text
/// a1 x + b1 y = c1
/// a2 x + b2 y = c2
/// ```
///
/// by Cramer's rule. Returns `None` when the system is singular or the
/// solution is not finite.
///
/// # Examples
///
/// ```rust
/// use bimap::solve;
///
/// // x + y = 3, x - y = 1
/// assert_eq!(solve(1.0, 1.0, 3.0, 1.0, -1.0, 1.0), Some((2.0, 1.0)));
///
/// // Parallel lines have no unique intersection.
/// assert_eq!(solve(1.0, 2.0, 3.0, 2.0, 4.0, 5.0), None);
/// ```
pub fn solve<T: Float>(a1: T, b1: T, c1: T, a2: T, b2: T, c2: T) -> Option<(T, T)> {
    let det = a1 * b2 - b1 * a2;
    if det == T::zero() {
        return None;
    }

    let x = (c1 * b2 - b1 * c2) / det;
    let y = (a1 * c2 - c1 * a2) / det;

    (x.is_finite() && y.is_finite()).then_some((x, y))
}
