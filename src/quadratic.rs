//! Quadratic evaluator.
//!
//! Samples `y = ax² + bx + c` over a closed domain and derives the vertex of
//! the parabola. Everything here is pure: no IO, no shared state.

use std::fmt;

use crate::error::{PlotError, Result};

/// Number of samples drawn per curve unless configured otherwise.
pub const DEFAULT_SAMPLES: usize = 400;

/// Domain used when the caller gives no bounds.
pub const DEFAULT_DOMAIN: Domain = Domain::new(-10.0, 10.0);

/// Closed x interval `[x_min, x_max]` a curve is sampled over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Lower bound (inclusive).
    pub x_min: f64,
    /// Upper bound (inclusive).
    pub x_max: f64,
}

impl Domain {
    /// Create a domain. Well-formedness is checked by [`Domain::validate`].
    pub const fn new(x_min: f64, x_max: f64) -> Self {
        Self { x_min, x_max }
    }

    /// Fail with `InvalidDomain` unless `x_min < x_max`.
    ///
    /// NaN bounds compare false and are rejected too.
    pub fn validate(&self) -> Result<()> {
        if self.x_min < self.x_max {
            Ok(())
        } else {
            Err(PlotError::invalid_domain(self.x_min, self.x_max))
        }
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.x_max - self.x_min
    }
}

impl Default for Domain {
    fn default() -> Self {
        DEFAULT_DOMAIN
    }
}

/// Coefficients of `y = ax² + bx + c` plus the domain to plot them over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSpec {
    /// Coefficient of x².
    pub a: f64,
    /// Coefficient of x.
    pub b: f64,
    /// Constant term.
    pub c: f64,
    /// Sampling interval.
    pub domain: Domain,
}

impl CurveSpec {
    /// Create a curve over the default domain `[-10, 10]`.
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self {
            a,
            b,
            c,
            domain: DEFAULT_DOMAIN,
        }
    }

    /// Return a copy of this curve with a different domain.
    pub const fn with_domain(self, domain: Domain) -> Self {
        Self { domain, ..self }
    }

    /// Evaluate the polynomial at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }
}

impl Default for CurveSpec {
    /// `y = x²` over `[-10, 10]`.
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

impl fmt::Display for CurveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {}x² + {}x + {}", self.a, self.b, self.c)
    }
}

/// Ordered `(x, y)` samples of a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    points: Vec<(f64, f64)>,
}

impl SampledCurve {
    /// All samples, ordered by x.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a curve produced by [`sample`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First sample (at `x_min`).
    pub fn first(&self) -> Option<(f64, f64)> {
        self.points.first().copied()
    }

    /// Last sample (at `x_max`).
    pub fn last(&self) -> Option<(f64, f64)> {
        self.points.last().copied()
    }

    /// Consume the curve, returning its samples.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}

/// Extremum of a parabola.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// x coordinate, `-b / 2a`.
    pub x: f64,
    /// y coordinate, the curve evaluated at `x`.
    pub y: f64,
}

impl Vertex {
    /// The vertex as an `(x, y)` pair.
    pub fn point(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// `n` evenly spaced values from `min` to `max`, both ends exact.
///
/// Stays finite and non-decreasing even when `max - min` overflows, by
/// stepping over the halved interval and doubling back.
pub fn linspace(min: f64, max: f64, n: usize) -> impl Iterator<Item = f64> {
    let last = n.saturating_sub(1);
    let divisor = last.max(1) as f64;
    let step = (max - min) / divisor;
    let half_step = (max / 2.0 - min / 2.0) / divisor;

    (0..n).map(move |i| {
        if i == last {
            max
        } else if step.is_finite() {
            min + i as f64 * step
        } else {
            2.0 * (min / 2.0 + i as f64 * half_step)
        }
    })
}

/// Sample `spec` at `n` evenly spaced points over its domain, endpoints included.
pub fn sample(spec: &CurveSpec, n: usize) -> Result<SampledCurve> {
    if n < 2 {
        return Err(PlotError::InvalidSampleCount(n));
    }
    spec.domain.validate()?;

    let Domain { x_min, x_max } = spec.domain;
    let points = linspace(x_min, x_max, n)
        .map(|x| (x, spec.eval(x)))
        .collect();

    tracing::debug!(curve = %spec, samples = n, "sampled curve");
    Ok(SampledCurve { points })
}

/// Vertex of `spec`, or `None` when `a == 0` (a line or a constant).
pub fn vertex(spec: &CurveSpec) -> Option<Vertex> {
    if spec.a == 0.0 {
        return None;
    }
    // + 0.0 turns -0.0 into 0.0
    let x = -spec.b / (2.0 * spec.a) + 0.0;
    Some(Vertex { x, y: spec.eval(x) })
}

/// Display label `y = {a}x² + {b}x + {c}`.
pub fn describe(spec: &CurveSpec) -> String {
    spec.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_default_curve_endpoints_and_vertex() {
        let spec = CurveSpec::default();
        let curve = sample(&spec, DEFAULT_SAMPLES).unwrap();

        assert_eq!(curve.len(), 400);
        assert_eq!(curve.first(), Some((-10.0, 100.0)));
        assert_eq!(curve.last(), Some((10.0, 100.0)));
        assert_eq!(vertex(&spec), Some(Vertex { x: 0.0, y: 0.0 }));
    }

    #[test]
    fn test_demo_curve_vertex() {
        let spec = CurveSpec::new(2.0, -4.0, 1.0);
        let v = vertex(&spec).unwrap();
        assert!((v.x - 1.0).abs() < EPS);
        assert!((v.y + 1.0).abs() < EPS);
    }

    #[test]
    fn test_linear_curve_has_no_vertex() {
        let spec = CurveSpec::new(0.0, 3.0, 2.0);
        assert_eq!(vertex(&spec), None);

        let curve = sample(&spec, 50).unwrap();
        for &(x, y) in curve.points() {
            assert!((y - (3.0 * x + 2.0)).abs() < EPS);
        }
    }

    #[test]
    fn test_sample_shape_over_many_inputs() {
        let domains = [
            (-10.0, 10.0),
            (0.0, 1.0),
            (-3.5, -1.25),
            (2.0, 1e6),
            (-1e308, 1e308),
            (-f64::MAX, f64::MAX),
        ];
        let counts = [2, 3, 17, 400, 1001];
        let spec = CurveSpec::new(-0.75, 2.5, -1.0);

        for &(x_min, x_max) in &domains {
            for &n in &counts {
                let spec = spec.with_domain(Domain::new(x_min, x_max));
                let curve = sample(&spec, n).unwrap();
                assert_eq!(curve.len(), n);
                assert_eq!(curve.first().unwrap().0, x_min);
                assert_eq!(curve.last().unwrap().0, x_max);
                assert!(curve.points().windows(2).all(|w| w[0].0 <= w[1].0));
            }
        }
    }

    #[test]
    fn test_sample_huge_domain_stays_finite() {
        let spec = CurveSpec::new(0.0, 1.0, 0.0).with_domain(Domain::new(-1e308, 1e308));
        let curve = sample(&spec, 5).unwrap();
        assert_eq!(curve.first(), Some((-1e308, -1e308)));
        assert_eq!(curve.last(), Some((1e308, 1e308)));
        for &(x, y) in curve.points() {
            assert!(x.is_finite());
            assert_eq!(x, y);
        }
        assert_eq!(curve.points()[2].0, 0.0);
    }

    #[test]
    fn test_linspace_matches_plain_stepping() {
        let values: Vec<f64> = linspace(-10.0, 10.0, 5).collect();
        assert_eq!(values, vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_vertex_lies_on_curve() {
        for &(a, b, c) in &[(1.0, 0.0, 0.0), (-2.0, 3.0, 7.0), (0.1, -8.0, 0.5), (5.0, 5.0, 5.0)] {
            let spec = CurveSpec::new(a, b, c);
            let v = vertex(&spec).unwrap();
            assert!((v.x - (-b / (2.0 * a))).abs() < EPS);
            assert!((v.y - (a * v.x * v.x + b * v.x + c)).abs() < EPS);
        }
    }

    #[test]
    fn test_vertex_x_is_never_negative_zero() {
        let v = vertex(&CurveSpec::new(3.0, 0.0, 1.0)).unwrap();
        assert!(v.x.is_sign_positive());
        assert_eq!(format!("{:.2}", v.x), "0.00");
    }

    #[test]
    fn test_invalid_domain() {
        for (x_min, x_max) in [(1.0, 1.0), (5.0, -5.0), (f64::NAN, 1.0)] {
            let spec = CurveSpec::default().with_domain(Domain::new(x_min, x_max));
            assert!(matches!(
                sample(&spec, 10),
                Err(PlotError::InvalidDomain { .. })
            ));
        }
    }

    #[test]
    fn test_invalid_sample_count() {
        let spec = CurveSpec::default();
        assert!(matches!(sample(&spec, 0), Err(PlotError::InvalidSampleCount(0))));
        assert!(matches!(sample(&spec, 1), Err(PlotError::InvalidSampleCount(1))));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&CurveSpec::default()), "y = 1x² + 0x + 0");
        assert_eq!(describe(&CurveSpec::new(2.0, -4.0, 1.0)), "y = 2x² + -4x + 1");
        assert_eq!(describe(&CurveSpec::new(0.5, 1.25, -3.75)), "y = 0.5x² + 1.25x + -3.75");
    }

    #[test]
    fn test_describe_round_trips_coefficients() {
        let spec = CurveSpec::new(0.1, -1e-7, 12345.678);
        let label = describe(&spec);
        let rest = label.strip_prefix("y = ").unwrap();
        let (a, rest) = rest.split_once("x² + ").unwrap();
        let (b, c) = rest.split_once("x + ").unwrap();
        assert_eq!(a.parse::<f64>().unwrap(), spec.a);
        assert_eq!(b.parse::<f64>().unwrap(), spec.b);
        assert_eq!(c.parse::<f64>().unwrap(), spec.c);
    }
}
