//! Outcome type for estimators that can run out of data.
//!
//! Statistically degenerate input is not an error: it is reported as
//! [`Estimate::InsufficientData`], which keeps "could not fit" apart from a
//! fit that legitimately produced small or zero parameters.

use serde::Serialize;

/// Why an estimator could not produce a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InsufficientData {
    /// Fewer usable samples than the method needs.
    TooFewSamples { required: usize, available: usize },
    /// The regression design is singular (all x values identical).
    DegenerateRegression,
    /// A sample is non-finite or outside the method's domain.
    InvalidSample,
}

/// Result of a fit: either computed or insufficient data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Estimate<T> {
    Computed(T),
    InsufficientData(InsufficientData),
}

impl<T> Estimate<T> {
    /// Shorthand for [`InsufficientData::TooFewSamples`].
    pub(crate) fn too_few(required: usize, available: usize) -> Self {
        tracing::debug!(required, available, "insufficient samples for estimate");
        Estimate::InsufficientData(InsufficientData::TooFewSamples {
            required,
            available,
        })
    }

    /// Returns `true` if a value was computed.
    pub fn is_computed(&self) -> bool {
        matches!(self, Estimate::Computed(_))
    }

    /// Borrows the computed value.
    pub fn as_ref(&self) -> Estimate<&T> {
        match self {
            Estimate::Computed(v) => Estimate::Computed(v),
            Estimate::InsufficientData(r) => Estimate::InsufficientData(*r),
        }
    }

    /// Converts into an `Option`, discarding the reason.
    pub fn computed(self) -> Option<T> {
        match self {
            Estimate::Computed(v) => Some(v),
            Estimate::InsufficientData(_) => None,
        }
    }

    /// The reason no value was computed, if any.
    pub fn reason(&self) -> Option<InsufficientData> {
        match self {
            Estimate::Computed(_) => None,
            Estimate::InsufficientData(r) => Some(*r),
        }
    }

    /// Maps the computed value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Estimate<U> {
        match self {
            Estimate::Computed(v) => Estimate::Computed(f(v)),
            Estimate::InsufficientData(r) => Estimate::InsufficientData(r),
        }
    }
}

impl<T> From<InsufficientData> for Estimate<T> {
    fn from(reason: InsufficientData) -> Self {
        Estimate::InsufficientData(reason)
    }
}
