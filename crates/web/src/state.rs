use std::sync::Arc;

use insights::{InsightAggregator, InsightError};

use crate::error::WebError;

/// Shared application state. The aggregator is `None` when the gateway
/// credential was absent at startup; insight endpoints then fail with the
/// configuration error before any client exists, so no network call can be
/// attempted without a key.
#[derive(Clone)]
pub struct AppState {
    aggregator: Option<Arc<InsightAggregator>>,
}

impl AppState {
    pub fn new(aggregator: Option<Arc<InsightAggregator>>) -> Self {
        Self { aggregator }
    }

    pub fn aggregator(&self) -> Result<&InsightAggregator, WebError> {
        self.aggregator
            .as_deref()
            .ok_or(WebError::Insight(InsightError::MissingCredential))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_aggregator_is_a_configuration_error() {
        let state = AppState::new(None);
        let err = state.aggregator().err().unwrap();
        assert!(matches!(
            err,
            WebError::Insight(InsightError::MissingCredential)
        ));
    }
}
