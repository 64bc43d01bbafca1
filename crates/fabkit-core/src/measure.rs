//! Per-axis measure constraints.
//!
//! A host measures a button in two passes, width first, then height. Each
//! pass offers a [`MeasureSpec`]:
//!
//! - **Exact**: the button takes exactly the offered size.
//! - **AtMost**: the button reports its intrinsic diameter, bounded according
//!   to [`AtMostPolicy`].
//! - **Unconstrained**: the button reports a size chosen by
//!   [`UnconstrainedPolicy`].

use serde::{Deserialize, Serialize};

/// Constraint mode for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasureMode {
    Exact,
    AtMost,
    Unconstrained,
}

/// A `(mode, size)` constraint for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: u32,
}

impl MeasureSpec {
    pub fn new(mode: MeasureMode, size: u32) -> Self {
        Self { mode, size }
    }

    pub fn exact(size: u32) -> Self {
        Self::new(MeasureMode::Exact, size)
    }

    pub fn at_most(size: u32) -> Self {
        Self::new(MeasureMode::AtMost, size)
    }

    pub fn unconstrained() -> Self {
        Self::new(MeasureMode::Unconstrained, 0)
    }
}

/// How an `AtMost` constraint treats the offered bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AtMostPolicy {
    /// Report `min(bound, intrinsic)`.
    #[default]
    Clamp,
    /// Report the intrinsic diameter even when it exceeds the bound.
    IgnoreBound,
}

/// What an `Unconstrained` pass reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnconstrainedPolicy {
    /// Report the intrinsic diameter.
    #[default]
    Intrinsic,
    /// Report zero.
    Zero,
}

/// Policies applied to the non-exact constraint modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeasurePolicy {
    pub at_most: AtMostPolicy,
    pub unconstrained: UnconstrainedPolicy,
}

impl MeasurePolicy {
    /// Legacy behaviour: `AtMost` ignores its bound, `Unconstrained` yields zero.
    pub fn legacy() -> Self {
        Self {
            at_most: AtMostPolicy::IgnoreBound,
            unconstrained: UnconstrainedPolicy::Zero,
        }
    }

    /// Size along one axis for a widget whose natural extent is `intrinsic`.
    pub fn resolve(&self, spec: MeasureSpec, intrinsic: u32) -> u32 {
        match spec.mode {
            MeasureMode::Exact => spec.size,
            MeasureMode::AtMost => match self.at_most {
                AtMostPolicy::Clamp => intrinsic.min(spec.size),
                AtMostPolicy::IgnoreBound => intrinsic,
            },
            MeasureMode::Unconstrained => match self.unconstrained {
                UnconstrainedPolicy::Intrinsic => intrinsic,
                UnconstrainedPolicy::Zero => 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_ignores_intrinsic() {
        for policy in [MeasurePolicy::default(), MeasurePolicy::legacy()] {
            assert_eq!(policy.resolve(MeasureSpec::exact(200), 50), 200);
            assert_eq!(policy.resolve(MeasureSpec::exact(200), 500), 200);
        }
    }

    #[test]
    fn test_at_most_clamp() {
        let policy = MeasurePolicy::default();
        assert_eq!(policy.resolve(MeasureSpec::at_most(300), 200), 200);
        assert_eq!(policy.resolve(MeasureSpec::at_most(150), 200), 150);
    }

    #[test]
    fn test_at_most_ignore_bound() {
        let policy = MeasurePolicy::legacy();
        assert_eq!(policy.resolve(MeasureSpec::at_most(150), 200), 200);
    }

    #[test]
    fn test_unconstrained() {
        assert_eq!(
            MeasurePolicy::default().resolve(MeasureSpec::unconstrained(), 112),
            112
        );
        assert_eq!(
            MeasurePolicy::legacy().resolve(MeasureSpec::unconstrained(), 112),
            0
        );
    }
}
