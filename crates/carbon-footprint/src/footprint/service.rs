use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::calculator::FootprintCalculator;
use super::dashboard::{Dashboard, DashboardView};
use super::domain::{FootprintResult, HabitInputs, InputError};
use super::factors::EmissionFactors;
use super::form::FormSubmission;
use super::storage::{ResultStore, StorageError, StoredRecord, RESULTS_KEY};

/// Service composing the calculator with the single-slot result store.
pub struct FootprintService<S> {
    store: Arc<S>,
    calculator: FootprintCalculator,
}

/// Response to a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionView {
    pub key: &'static str,
    pub record: StoredRecord,
    pub result: FootprintResult,
    pub computed_at: DateTime<Utc>,
}

impl<S> FootprintService<S>
where
    S: ResultStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self::with_factors(store, EmissionFactors::standard())
    }

    pub fn with_factors(store: Arc<S>, factors: EmissionFactors) -> Self {
        Self {
            store,
            calculator: FootprintCalculator::new(factors),
        }
    }

    /// Handle a form submission: validate, compute, and overwrite the slot.
    pub fn submit(
        &self,
        submission: &FormSubmission,
    ) -> Result<SubmissionView, FootprintServiceError> {
        let inputs = submission.to_inputs()?;
        self.calculate(&inputs)
    }

    /// Compute the footprint for already-typed inputs and store it.
    ///
    /// Results that overflow to infinity are rejected before anything is
    /// saved, so the slot always holds a record the dashboard can read.
    pub fn calculate(&self, inputs: &HabitInputs) -> Result<SubmissionView, FootprintServiceError> {
        let result = self.calculator.compute(inputs);
        if !result.is_finite() {
            warn!(
                car_km = inputs.car_km,
                moto_km = inputs.moto_km,
                public_km = inputs.public_km,
                "footprint overflowed; submission rejected"
            );
            return Err(InputError::FootprintOutOfRange.into());
        }

        let record = StoredRecord::from(&result);

        if let Err(err) = self.store.save(record.clone()) {
            warn!(error = %err, "failed to store footprint result");
            return Err(err.into());
        }

        info!(
            meat = inputs.meat_frequency.label(),
            food = result.food,
            transport = result.transport,
            home = result.home,
            total = result.total,
            "footprint computed"
        );

        Ok(SubmissionView {
            key: RESULTS_KEY,
            record,
            result,
            computed_at: Utc::now(),
        })
    }

    /// Load the stored result and derive the dashboard view.
    ///
    /// An empty slot is [`Dashboard::NotAvailable`], not an error.
    pub fn dashboard(&self) -> Result<Dashboard, FootprintServiceError> {
        let record = match self.store.load() {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!("no stored footprint result");
                return Ok(Dashboard::NotAvailable);
            }
            Err(err) => {
                warn!(error = %err, "failed to load footprint result");
                return Err(err.into());
            }
        };

        let result = match record.parse() {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err, "stored footprint result is unreadable");
                return Err(err.into());
            }
        };
        Ok(Dashboard::Available(DashboardView::build(&record, result)))
    }
}

/// Error raised by the footprint service.
#[derive(Debug, thiserror::Error)]
pub enum FootprintServiceError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
