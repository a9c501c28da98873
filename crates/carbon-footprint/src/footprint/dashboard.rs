use serde::Serialize;
use serde_json::{json, Value};

use super::domain::FootprintResult;
use super::interpreter::{recommend, Recommendation};
use super::storage::StoredRecord;

/// Sentinel shown in place of the total when no result has been stored.
pub const NOT_AVAILABLE: &str = "N/A";

/// Reference national averages, tons CO2e per person per year.
pub const JAPAN_AVERAGE: f64 = 3.7;
pub const CHILE_AVERAGE: f64 = 4.6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationView {
    pub id: &'static str,
    pub category: &'static str,
    pub message: &'static str,
}

impl From<Recommendation> for RecommendationView {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            id: recommendation.id(),
            category: recommendation.category().label(),
            message: recommendation.message(),
        }
    }
}

/// Everything the dashboard page renders for a stored result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Stored total, exactly as persisted.
    pub total: String,
    pub result: FootprintResult,
    /// Bar chart: the household against the reference averages.
    pub comparison: Vec<ChartPoint>,
    /// Doughnut chart: food, transport and home shares.
    pub breakdown: Vec<ChartPoint>,
    pub recommendations: Vec<RecommendationView>,
}

impl DashboardView {
    pub fn build(record: &StoredRecord, result: FootprintResult) -> Self {
        let comparison = vec![
            ChartPoint {
                label: "Your footprint",
                value: result.total,
            },
            ChartPoint {
                label: "Japan average",
                value: JAPAN_AVERAGE,
            },
            ChartPoint {
                label: "Chile average",
                value: CHILE_AVERAGE,
            },
        ];

        let breakdown = vec![
            ChartPoint {
                label: "Food",
                value: result.food,
            },
            ChartPoint {
                label: "Transport",
                value: result.transport,
            },
            ChartPoint {
                label: "Home",
                value: result.home,
            },
        ];

        let recommendations = recommend(&result)
            .into_iter()
            .map(RecommendationView::from)
            .collect();

        Self {
            total: record.total.clone(),
            result,
            comparison,
            breakdown,
            recommendations,
        }
    }
}

/// Dashboard state after loading the result slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Dashboard {
    Available(DashboardView),
    /// No result stored yet; charts and advice are skipped.
    NotAvailable,
}

impl Dashboard {
    pub fn total_label(&self) -> &str {
        match self {
            Dashboard::Available(view) => &view.total,
            Dashboard::NotAvailable => NOT_AVAILABLE,
        }
    }

    /// JSON body shared by the HTTP endpoint and `dashboard --json`.
    pub fn to_payload(&self) -> Value {
        match self {
            Dashboard::Available(view) => json!({
                "status": "available",
                "total": view.total,
                "result": view.result,
                "comparison": view.comparison,
                "breakdown": view.breakdown,
                "recommendations": view.recommendations,
            }),
            Dashboard::NotAvailable => json!({
                "status": "not_available",
                "total": NOT_AVAILABLE,
            }),
        }
    }
}
