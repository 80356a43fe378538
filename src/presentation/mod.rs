//! Presentation data contract
//!
//! Everything a rendering layer needs from one dashboard view: chart
//! series, the filtered rows in tabular form, the metric dictionary and a
//! text report. No rendering happens here.

pub mod charts;
pub mod table;
pub mod text;

pub use charts::{ChartData, ChartKind, ChartSpec, DashboardSection, chart_spec};
pub use table::{municipality_schema, to_json_rows, to_record_batch};
pub use text::{Insights, WealthAccess, render_report};
