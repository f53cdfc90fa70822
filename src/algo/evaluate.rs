/// Nested conditional arithmetic on `x`, `y` and `z`.
///
/// With `flag` set, `temp = x + y` and the result is `temp * z` for
/// `temp > 10`, `temp / z` for non-zero `z`, and `temp` otherwise.
///
/// Without `flag`, no result is defined, and `None` is returned. Callers
/// wanting a value for that case too, should use [evaluate_total].
pub fn evaluate(x: f64, y: f64, z: f64, flag: bool) -> Option<f64> {
    if !flag {
        return None;
    }

    let temp = x + y;
    if temp > 10. {
        return Some(temp * z);
    }
    if z != 0. {
        return Some(temp / z);
    }
    Some(temp)
}

/// As [evaluate], but defined for both values of `flag`: Without `flag`,
/// `temp = |x - y|`, and the result is `temp * z` for positive `z`,
/// `temp` otherwise.
pub fn evaluate_total(x: f64, y: f64, z: f64, flag: bool) -> f64 {
    if let Some(result) = evaluate(x, y, z, flag) {
        return result;
    }

    let temp = (x - y).abs();
    if z > 0. {
        return temp * z;
    }
    temp
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn flagged() {
        // temp = 11 > 10: multiply
        assert_eq!(evaluate(5., 6., 2., true), Some(22.));
        // temp = 3, z = 0: temp as is
        assert_eq!(evaluate(1., 2., 0., true), Some(3.));
        // temp = 3, z = 3: divide
        assert_eq!(evaluate(1., 2., 3., true), Some(1.));
        // temp = 10 is not > 10
        assert_float_eq!(evaluate(4., 6., 3., true).unwrap(), 10. / 3., abs <= 1e-15);
        // Negative z is non-zero, so we divide
        assert_eq!(evaluate(1., 1., -2., true), Some(-1.));
    }

    #[test]
    fn unflagged() {
        assert_eq!(evaluate(1., 2., 3., false), None);
        assert_eq!(evaluate(5., 6., 2., false), None);
    }

    #[test]
    fn total() {
        // Same as evaluate when flagged
        assert_eq!(evaluate_total(5., 6., 2., true), 22.);
        assert_eq!(evaluate_total(1., 2., 0., true), 3.);

        // |1 - 4| * 2
        assert_eq!(evaluate_total(1., 4., 2., false), 6.);
        // |4 - 1|, z not positive
        assert_eq!(evaluate_total(4., 1., 0., false), 3.);
        assert_eq!(evaluate_total(4., 1., -5., false), 3.);
    }
}
