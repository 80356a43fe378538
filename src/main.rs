use anyhow::Context;
use log::info;
use municipal_health::utils::logging::{console, create_spinner, finish_and_clear};
use municipal_health::{Dashboard, DatasetConfig, FilterParams};

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DatasetConfig::default();
    let mut dashboard = Dashboard::new(config);

    let spinner = create_spinner(Some("Loading data for analysis..."));
    let dataset = dashboard.dataset().context("Failed to generate dataset")?;
    finish_and_clear(&spinner);

    if let Some(bounds) = dataset.bounds() {
        info!(
            "% elderly spans [{:.2}, {:.2}], GDP per capita spans [{:.0}, {:.0}]",
            bounds.pct_elderly.0,
            bounds.pct_elderly.1,
            bounds.gdp_per_capita.0,
            bounds.gdp_per_capita.1
        );
    }

    let params = FilterParams::dashboard_default();
    let view = dashboard
        .interact(&params)
        .context("Failed to compute dashboard view")?;

    println!("{}", view.report());

    let batch = view
        .record_batch()
        .context("Failed to build filtered table")?;
    console::print_batch_summary(&batch);
    console::print_schema_info(&batch);

    console::print_metrics(&view.metric_map());

    let charts = view.charts().context("Failed to build chart data")?;
    info!("Prepared data for {} charts", charts.len());

    Ok(())
}
