//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! Everything in here is built once at startup and read-only afterwards,
//! so cloning the state per request is a handful of `Arc` increments.

use crate::config::AppConfig;
use crate::services::BmiService;
use bmi_shared::{BmiCalculator, StandardBmiCalculator};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// BMI service wired to the configured calculator
    pub bmi: BmiService,
    /// Prometheus recorder handle, absent when no recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create state with the standard calculator for the configured bands
    pub fn new(config: AppConfig) -> Self {
        let calculator = Arc::new(StandardBmiCalculator::new(config.bmi.category_bands));
        Self::with_calculator(config, calculator)
    }

    /// Create state around a caller-supplied calculator
    pub fn with_calculator(config: AppConfig, calculator: Arc<dyn BmiCalculator>) -> Self {
        Self {
            config: Arc::new(config),
            bmi: BmiService::new(calculator),
            metrics: None,
        }
    }

    /// Attach the Prometheus handle rendered by `/metrics`
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the BMI service
    #[inline]
    pub fn bmi(&self) -> &BmiService {
        &self.bmi
    }
}
