/// Configuration rejected by [`crate::StepSliderOptions::validate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The track needs at least two ticks (`maximum_value / increment_value > 1`).
    #[error("2 ticks minimum, got {tick_count} (maximum {maximum_value}, increment {increment_value})")]
    TooFewTicks {
        tick_count: i64,
        maximum_value: i64,
        increment_value: i64,
    },
    #[error("{limit} ticks maximum, got {tick_count}")]
    TooManyTicks { tick_count: i64, limit: i64 },
}
