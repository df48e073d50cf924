//! CSV and JSON writers for projection output

use serde::Serialize;
use std::io::Write;

use crate::dashboard::DashboardView;
use crate::error::Result;
use crate::projection::ProjectionResult;
use crate::scenario::ScenarioSummary;

/// Write `year,revenue,growth,compliance,mobility` rows
pub fn write_records_csv<W: Write>(writer: W, result: &ProjectionResult) -> Result<()> {
    write_csv(writer, &result.records)
}

/// Write one summary row per scenario
pub fn write_summaries_csv<W: Write>(writer: W, summaries: &[ScenarioSummary]) -> Result<()> {
    write_csv(writer, summaries)
}

fn write_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Pretty JSON with the projection and its dashboard view
pub fn write_json<W: Write>(writer: W, result: &ProjectionResult) -> Result<()> {
    #[derive(Serialize)]
    struct JsonOutput<'a> {
        projection: &'a ProjectionResult,
        summary: crate::projection::ProjectionSummary,
        dashboard: DashboardView,
    }

    let output = JsonOutput {
        projection: result,
        summary: result.summary(),
        dashboard: DashboardView::from_projection(result),
    };
    serde_json::to_writer_pretty(writer, &output)?;
    Ok(())
}
