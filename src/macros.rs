/// Asserts that two floats are equal up to an epsilon (`0.0005` by default).
///
/// Scores are sums of floats, so comparing them for strict equality is
/// usually a mistake.
///
/// ```rust
/// # use boolean_searcher::assert_nearly_equals;
/// assert_nearly_equals!(0.1f64 + 0.2f64, 0.3f64);
/// assert_nearly_equals!(1.0f64, 1.01f64, 0.05f64);
/// ```
#[macro_export]
macro_rules! assert_nearly_equals {
    ($left:expr, $right:expr) => {{
        $crate::assert_nearly_equals!($left, $right, 0.0005)
    }};
    ($left:expr, $right:expr, $epsilon:expr) => {{
        match (&$left, &$right, &$epsilon) {
            (left_val, right_val, epsilon_val) => {
                let diff = (left_val - right_val).abs();
                if diff > *epsilon_val {
                    panic!(
                        "assertion failed: `abs(left-right)>epsilon`\n  left: `{:?}`,\n right: \
                         `{:?}`,\n epsilon: `{:?}`\n",
                        &*left_val, &*right_val, &*epsilon_val
                    )
                }
            }
        }
    }};
}

#[cfg(test)]
mod test {
    #[test]
    fn test_nearly_equals() {
        assert_nearly_equals!(1.0f64 / 3.0f64, 0.3333f64);
    }

    #[test]
    #[should_panic]
    fn test_not_nearly_equals() {
        assert_nearly_equals!(1.0f64, 1.1f64);
    }
}
