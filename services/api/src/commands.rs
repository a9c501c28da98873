use crate::infra::store_path;
use carbon_footprint::config::AppConfig;
use carbon_footprint::error::AppError;
use carbon_footprint::footprint::{
    Dashboard, DashboardView, FootprintService, FormSubmission, JsonFileResultStore,
    SubmissionView,
};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct CalculateArgs {
    /// Meat consumption bracket: 0 rarely, 1 weekly, 2 most days, 3 daily
    #[arg(long)]
    pub(crate) meat_consumption: String,
    /// Kilometres driven by car per week
    #[arg(long, default_value = "")]
    pub(crate) km_car: String,
    /// Kilometres ridden by motorcycle per week
    #[arg(long, default_value = "")]
    pub(crate) km_moto: String,
    /// Kilometres on public transport per week
    #[arg(long, default_value = "")]
    pub(crate) km_public: String,
    /// "1" when the household lights with LEDs
    #[arg(long, default_value = "0")]
    pub(crate) led_usage: String,
    /// Result store file (defaults to APP_STORE_PATH)
    #[arg(long)]
    pub(crate) store: Option<PathBuf>,
}

impl CalculateArgs {
    pub(crate) fn submission(&self) -> FormSubmission {
        FormSubmission {
            meat_consumption: self.meat_consumption.clone(),
            km_car: self.km_car.clone(),
            km_moto: self.km_moto.clone(),
            km_public: self.km_public.clone(),
            led_usage: self.led_usage.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct DashboardArgs {
    /// Result store file (defaults to APP_STORE_PATH)
    #[arg(long)]
    pub(crate) store: Option<PathBuf>,
    /// Print the dashboard as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_calculate(args: CalculateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let path = store_path(args.store.clone(), &config);
    let service = FootprintService::new(Arc::new(JsonFileResultStore::new(&path)));

    let view = service.submit(&args.submission())?;
    println!("{}", render_submission(&view, &path));
    Ok(())
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let path = store_path(args.store, &config);
    let service = FootprintService::new(Arc::new(JsonFileResultStore::new(&path)));

    let dashboard = service.dashboard()?;
    if args.json {
        println!("{}", render_dashboard_json(&dashboard)?);
    } else {
        println!("{}", render_dashboard(&dashboard));
    }

    Ok(())
}

pub(crate) fn render_dashboard_json(dashboard: &Dashboard) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&dashboard.to_payload())
}

pub(crate) fn render_submission(view: &SubmissionView, path: &std::path::Path) -> String {
    let record = &view.record;
    let mut lines = vec![
        "Carbon footprint calculated".to_string(),
        format!("- Food: {} t CO2e/year", record.food),
        format!("- Transport: {} t CO2e/year", record.transport),
        format!("- Home: {} t CO2e/year", record.home),
        format!("Total: {} t CO2e/year", record.total),
    ];
    lines.push(format!(
        "Saved under '{}' in {} at {}",
        view.key,
        path.display(),
        view.computed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines.join("\n")
}

pub(crate) fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut lines = vec!["Carbon footprint dashboard".to_string()];

    let view = match dashboard {
        Dashboard::Available(view) => view,
        Dashboard::NotAvailable => {
            lines.push(format!("Total: {}", dashboard.total_label()));
            lines.push("No footprint stored yet; run `calculate` first.".to_string());
            return lines.join("\n");
        }
    };

    lines.push(format!("Total: {} t CO2e/year", view.total));
    render_charts(view, &mut lines);

    lines.push("\nRecommendations".to_string());
    for item in &view.recommendations {
        lines.push(format!("- [{}] {}", item.category, item.message));
    }

    lines.join("\n")
}

fn render_charts(view: &DashboardView, lines: &mut Vec<String>) {
    lines.push("\nComparison (t CO2e/year)".to_string());
    for point in &view.comparison {
        lines.push(format!("- {}: {:.2}", point.label, point.value));
    }

    lines.push("\nBreakdown".to_string());
    let total = view.result.total;
    for point in &view.breakdown {
        if total > 0.0 {
            lines.push(format!(
                "- {}: {:.2} ({:.0}%)",
                point.label,
                point.value,
                point.value / total * 100.0
            ));
        } else {
            lines.push(format!("- {}: {:.2}", point.label, point.value));
        }
    }
}
