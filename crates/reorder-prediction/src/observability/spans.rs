//! Span definitions per operation: prediction, forecast, batch.

/// Create a prediction span for one child.
#[macro_export]
macro_rules! prediction_span {
    ($child_id:expr, $horizon:expr) => {
        tracing::info_span!("reorder.prediction", child_id = %$child_id, horizon = $horizon)
    };
}

/// Create a forecast span.
#[macro_export]
macro_rules! forecast_span {
    ($series_days:expr, $horizon:expr) => {
        tracing::debug_span!("reorder.forecast", series_days = $series_days, horizon = $horizon)
    };
}

/// Create a batch span.
#[macro_export]
macro_rules! batch_span {
    ($children:expr, $horizon:expr) => {
        tracing::info_span!("reorder.batch", children = $children, horizon = $horizon)
    };
}
