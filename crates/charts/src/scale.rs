//! Y-axis value scaling
//!
//! All "log" scaling in the pipeline is base-10 on raw nanosecond latencies.
//! A scale is applied to finite values only; callers filter out the NaN
//! sentinel before scaling.

/// Transform applied to latency values before plotting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scale {
    /// Plot raw nanoseconds
    #[default]
    Linear,
    /// Plot `log10(ns)`
    Log10,
}

impl Scale {
    /// Apply the transform to one finite value
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Scale::Linear => value,
            Scale::Log10 => value.log10(),
        }
    }

    /// Y-axis description for latency charts under this scale
    pub fn axis_desc(self) -> &'static str {
        match self {
            Scale::Linear => "CPU Cycles (ns)",
            Scale::Log10 => "(log10) CPU Cycles (log(ns))",
        }
    }

    /// Title prefix marking scaled charts
    pub fn title_prefix(self) -> &'static str {
        match self {
            Scale::Linear => "",
            Scale::Log10 => "(log10) ",
        }
    }
}
