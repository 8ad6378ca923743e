//! Rendering performance: scatter sample reduction and instrumentation

mod reducer;
mod status;

pub use reducer::{reduce, SampleBudget};
pub use status::{ReductionStatus, Severity};

/// Timing macro for instrumentation; the scope is a no-op without a profiling feature
#[macro_export]
macro_rules! timed {
    ($name:expr, $block:expr) => {{
        profiling::scope!($name);
        let _t = std::time::Instant::now();
        let r = $block;
        tracing::trace!(elapsed = ?_t.elapsed(), "{}", $name);
        r
    }};
}
