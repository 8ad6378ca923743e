//! Size/performance status shown above the scatter chart

use super::reducer::SampleBudget;

/// How the last scatter render relates to the sampling budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReductionStatus {
    /// The reducer ran: everything before `protected_from` is intact
    Optimized { protected_from: i32, shown: usize },
    /// Over the threshold with optimisation off; all points are rendered anyway
    Warning { total: usize },
    /// Small enough to render as is
    Plain { total: usize },
}

/// Severity used to pick the banner colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Good,
    Alert,
    Neutral,
}

impl ReductionStatus {
    pub fn assess(
        total: usize,
        shown: usize,
        budget: &SampleBudget,
        optimization_enabled: bool,
    ) -> Self {
        if total > budget.trigger_threshold {
            if optimization_enabled {
                ReductionStatus::Optimized {
                    protected_from: budget.protected_year_boundary,
                    shown,
                }
            } else {
                ReductionStatus::Warning { total }
            }
        } else {
            ReductionStatus::Plain { total }
        }
    }

    pub fn message(&self) -> String {
        match self {
            ReductionStatus::Optimized {
                protected_from,
                shown,
            } => format!(
                "Smart sampling: tracks before {} intact. Showing {} points",
                protected_from, shown
            ),
            ReductionStatus::Warning { total } => {
                format!("Warning: {} points, rendering may be slow", total)
            }
            ReductionStatus::Plain { total } => format!("{} tracks", total),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ReductionStatus::Optimized { .. } => Severity::Good,
            ReductionStatus::Warning { .. } => Severity::Alert,
            ReductionStatus::Plain { .. } => Severity::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assess() {
        let budget = SampleBudget::default();

        let status = ReductionStatus::assess(5000, 2100, &budget, true);
        assert_eq!(
            status,
            ReductionStatus::Optimized {
                protected_from: 2000,
                shown: 2100
            }
        );
        assert_eq!(status.severity(), Severity::Good);

        let status = ReductionStatus::assess(5000, 5000, &budget, false);
        assert_eq!(status, ReductionStatus::Warning { total: 5000 });
        assert_eq!(status.message(), "Warning: 5000 points, rendering may be slow");

        let status = ReductionStatus::assess(2000, 2000, &budget, true);
        assert_eq!(status, ReductionStatus::Plain { total: 2000 });
        assert_eq!(status.message(), "2000 tracks");
    }
}
