use crate::core::data::complex::Complex;

/// Orbits whose squared magnitude exceeds this have escaped (radius 2).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Outcome of iterating one orbit.
///
/// `iterations` equals the iteration limit iff the orbit never escaped. `z`
/// is the orbit value the loop stopped on, i.e. the first escaped value when
/// it escaped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeResult {
    pub iterations: u32,
    pub z: Complex,
}

impl EscapeResult {
    #[must_use]
    pub fn escaped(&self, max_iterations: u32) -> bool {
        self.iterations < max_iterations
    }
}

/// Iterates `z = z² + c` from `z0` for at most `max_iterations` steps.
#[must_use]
pub fn escape_time(z0: Complex, c: Complex, max_iterations: u32) -> EscapeResult {
    let (mut zx, mut zy) = (z0.real, z0.imag);

    for iteration in 0..max_iterations {
        let zx2 = zx * zx;
        let zy2 = zy * zy;

        if zx2 + zy2 > ESCAPE_RADIUS_SQUARED {
            return EscapeResult {
                iterations: iteration,
                z: Complex { real: zx, imag: zy },
            };
        }

        zy = 2.0 * zx * zy + c.imag;
        zx = zx2 - zy2 + c.real;
    }

    EscapeResult {
        iterations: max_iterations,
        z: Complex { real: zx, imag: zy },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        let result = escape_time(Complex::ZERO, Complex::ZERO, 1000);

        assert_eq!(result.iterations, 1000);
        assert!(!result.escaped(1000));
    }

    #[test]
    fn test_point_outside_radius_escapes_immediately() {
        let z0 = Complex::new(3.0, 0.0);
        let result = escape_time(z0, Complex::ZERO, 10);

        assert_eq!(result.iterations, 0);
        assert_eq!(result.z, z0);
    }

    #[test]
    fn test_mandelbrot_orbit_of_one() {
        // 0 -> 1 -> 2 -> 5: |2|² = 4 is not beyond the bound, |5|² is.
        let result = escape_time(Complex::ZERO, Complex::new(1.0, 0.0), 100);

        assert_eq!(result.iterations, 3);
        assert_eq!(result.z, Complex::new(5.0, 0.0));
    }

    #[test]
    fn test_matches_complex_arithmetic() {
        let c = Complex::new(0.3, 0.5);
        let mut z = Complex::ZERO;
        let mut expected = 0;

        while expected < 50 && z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED {
            z = z * z + c;
            expected += 1;
        }

        let result = escape_time(Complex::ZERO, c, 50);

        assert_eq!(result.iterations, expected);
    }

    #[test]
    fn test_single_iteration_limit() {
        let result = escape_time(Complex::ZERO, Complex::new(-1.0, 0.0), 1);

        assert_eq!(result.iterations, 1);
    }
}
