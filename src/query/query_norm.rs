use log::debug;

/// Computes the query norm from the sum of the squared weights of
/// the scoring clauses: `1 / sqrt(sum_of_squared_weights)`.
///
/// A zero, negative or non-finite sum has no norm. In that case the
/// scores are left untouched and the returned norm is `1.0`.
pub fn compute_query_norm(sum_of_squared_weights: f64) -> f64 {
    if !sum_of_squared_weights.is_finite() || sum_of_squared_weights <= 0.0 {
        debug!(
            "degenerate sum of squared weights ({sum_of_squared_weights}), falling back to a \
             query norm of 1.0"
        );
        return 1.0;
    }
    1.0 / sum_of_squared_weights.sqrt()
}
