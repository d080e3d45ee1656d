//! Termination criterion shared by all unbounded solvers.

/// A "flat" configuration object describing when a fixed-point iteration has
/// converged.
///
/// The criterion combines a sup-norm difference between two successive sweeps
/// with an absolute or relative precision threshold. It is a pure predicate:
/// the solvers track the maximum per-state [`difference`](Self::difference)
/// of a sweep and stop once it drops to the threshold (Jacobi variants use
/// half the threshold to compensate the one-step lag of their measured
/// difference; see the solver documentation).
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrecisionCriterion {
    /// The requested precision of the delivered solution.
    pub threshold: f64,
    /// Measure per-state differences relative to the previous value instead
    /// of absolutely.
    pub relative: bool,
}

impl PrecisionCriterion {
    /// An absolute criterion: stop once no state changes by more than
    /// `threshold`.
    pub fn absolute(threshold: f64) -> PrecisionCriterion {
        PrecisionCriterion {
            threshold,
            relative: false,
        }
    }

    /// A relative criterion: per-state differences are divided by the
    /// magnitude of the previous value (when nonzero).
    pub fn relative(threshold: f64) -> PrecisionCriterion {
        PrecisionCriterion {
            threshold,
            relative: true,
        }
    }

    /// The difference a single state contributes to the sweep's sup-norm.
    ///
    /// Absolute mode returns `|next - pres|`. Relative mode divides by
    /// `|pres|`, except when `pres` is zero, in which case the absolute
    /// difference is used as-is.
    pub fn difference(&self, pres: f64, next: f64) -> f64 {
        let diff = (next - pres).abs();
        if self.relative && pres != 0.0 {
            diff / pres.abs()
        } else {
            diff
        }
    }
}
