//! Household carbon footprint estimation and reduction advice.
//!
//! A form submission is turned into [`HabitInputs`], priced with fixed emission
//! factors by the [`FootprintCalculator`], and saved into a single-slot
//! [`ResultStore`]. The dashboard path loads that slot back and derives chart
//! series plus [`Recommendation`]s from it.

mod calculator;
pub mod dashboard;
pub mod domain;
pub mod factors;
pub mod form;
mod interpreter;
pub mod router;
pub mod service;
pub mod storage;

#[cfg(test)]
mod tests;

pub use calculator::{compute, round2, FootprintCalculator};
pub use dashboard::{ChartPoint, Dashboard, DashboardView, RecommendationView, NOT_AVAILABLE};
pub use domain::{FootprintResult, HabitInputs, InputError, MeatFrequency};
pub use factors::EmissionFactors;
pub use form::FormSubmission;
pub use interpreter::{recommend, Recommendation, RecommendationCategory};
pub use router::footprint_router;
pub use service::{FootprintService, FootprintServiceError, SubmissionView};
pub use storage::{
    InMemoryResultStore, JsonFileResultStore, ResultStore, StorageError, StoredRecord, RESULTS_KEY,
};
