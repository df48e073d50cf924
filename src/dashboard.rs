//! Dashboard view models built from a projection
//!
//! Cards summarise the first projection year; chart series carry the full
//! ten-year trajectory. Rendering to text lives here too so the CLI and
//! tests share one layout.

use serde::Serialize;

use crate::format::{
    format_card_value, format_currency, format_index, format_percentage, format_trend,
    NumberLocale,
};
use crate::projection::{Indicator, ProjectionResult};
use crate::rates::{RateBar, RateKind, TaxRates};

/// Summary card for one indicator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub trend: f64,
}

impl MetricCard {
    pub fn formatted_value(&self, locale: &NumberLocale) -> String {
        format_card_value(self.value, self.unit, locale)
    }
}

/// Which y-axis a chart series is plotted against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Left,
    Right,
}

/// One line of the projection chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub indicator: Indicator,
    pub name: &'static str,
    pub axis: Axis,
    pub points: Vec<(i32, f64)>,
}

pub fn card_title(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::Revenue => "Government Revenue",
        Indicator::Growth => "Economic Growth",
        Indicator::Compliance => "Tax Compliance",
        Indicator::Mobility => "Economic Mobility Index",
    }
}

pub fn card_unit(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::Revenue => "$",
        Indicator::Growth | Indicator::Compliance => "%",
        Indicator::Mobility => "",
    }
}

pub fn series_name(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::Revenue => "Government Revenue (Trillion USD)",
        Indicator::Growth => "Economic Growth (%)",
        Indicator::Compliance => "Tax Compliance (%)",
        Indicator::Mobility => "Economic Mobility Index",
    }
}

/// Format a chart tooltip value the way the cards do
pub fn format_tooltip(indicator: Indicator, value: f64, locale: &NumberLocale) -> String {
    match indicator {
        Indicator::Revenue => format_currency(value, locale),
        Indicator::Growth | Indicator::Compliance => format_percentage(value / 100.0, locale),
        Indicator::Mobility => format_index(value),
    }
}

/// Cards for the first projection year; an empty projection shows zeros
pub fn metric_cards(result: &ProjectionResult) -> Vec<MetricCard> {
    let current = result.current();
    Indicator::ALL
        .iter()
        .map(|&indicator| MetricCard {
            title: card_title(indicator),
            value: current.map(|r| r.get(indicator)).unwrap_or(0.0),
            unit: card_unit(indicator),
            trend: result.trend(indicator),
        })
        .collect()
}

/// Line chart series, revenue on the left axis and the rest on the right
pub fn chart_series(result: &ProjectionResult) -> Vec<ChartSeries> {
    Indicator::ALL
        .iter()
        .map(|&indicator| ChartSeries {
            indicator,
            name: series_name(indicator),
            axis: if indicator == Indicator::Revenue {
                Axis::Left
            } else {
                Axis::Right
            },
            points: result.series(indicator),
        })
        .collect()
}

/// Everything the dashboard shows for one set of rates
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub rates: TaxRates,
    pub cards: Vec<MetricCard>,
    pub series: Vec<ChartSeries>,
    pub rate_bars: Vec<RateBar>,
}

impl DashboardView {
    pub fn from_projection(result: &ProjectionResult) -> Self {
        Self {
            rates: result.rates,
            cards: metric_cards(result),
            series: chart_series(result),
            rate_bars: result.rates.comparison_bars(),
        }
    }
}

/// Plain-text rendering: rate headers, cards, projection table, rate bars
pub fn render_text(result: &ProjectionResult, locale: &NumberLocale) -> String {
    let mut out = String::new();

    out.push_str("US Tax Policy and Economic Impact Simulator\n");
    out.push_str(&format!("{}\n", "=".repeat(44)));
    for kind in RateKind::ALL {
        out.push_str(&format!(
            "{}: {:.1}%\n",
            kind.label(),
            result.rates.get(kind) * 100.0
        ));
    }
    out.push_str(&format!("Combined impact: {:.4}\n\n", result.combined_impact));

    for card in metric_cards(result) {
        out.push_str(&format!(
            "{:<26} {:>14}  {}\n",
            card.title,
            card.formatted_value(locale),
            format_trend(card.trend)
        ));
    }

    out.push_str("\n10-Year Economic Projections\n");
    out.push_str(&format!(
        "{:>6} {:>14} {:>10} {:>12} {:>10}\n",
        "Year", "Revenue", "Growth", "Compliance", "Mobility"
    ));
    out.push_str(&format!("{}\n", "-".repeat(56)));
    for record in &result.records {
        out.push_str(&format!(
            "{:>6} {:>14} {:>10} {:>12} {:>10}\n",
            record.year,
            format_tooltip(Indicator::Revenue, record.revenue, locale),
            format_tooltip(Indicator::Growth, record.growth, locale),
            format_tooltip(Indicator::Compliance, record.compliance, locale),
            format_tooltip(Indicator::Mobility, record.mobility, locale),
        ));
    }

    out.push_str("\nTax Rate Comparison\n");
    for bar in result.rates.comparison_bars() {
        let width = (bar.rate * 100.0).round().clamp(0.0, 100.0) as usize;
        out.push_str(&format!(
            "{:<15} {:>6} {}\n",
            bar.name,
            format!("{:.1}%", bar.rate * 100.0),
            "#".repeat(width)
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{ProjectionEngine, YearlyRecord};
    use approx::assert_relative_eq;

    #[test]
    fn test_cards_use_first_year() {
        let result = ProjectionEngine::default().expected(&TaxRates::reference());
        let cards = metric_cards(&result);

        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].title, "Government Revenue");
        assert_eq!(cards[0].unit, "$");
        assert_relative_eq!(cards[0].value, 3.5);
        assert_relative_eq!(cards[2].value, 83.0);
        // first year below second year for a compounding baseline
        assert!(cards[0].trend < 0.0);
        // growth decays, so its first year is above the second
        assert!(cards[1].trend > 0.0);
    }

    #[test]
    fn test_cards_for_empty_projection() {
        let result = ProjectionResult::new(TaxRates::reference(), 1.0);
        let cards = metric_cards(&result);
        assert!(cards.iter().all(|c| c.value == 0.0 && c.trend == 0.0));
    }

    #[test]
    fn test_card_formatting() {
        let us = NumberLocale::en_us();
        let mut result = ProjectionResult::new(TaxRates::reference(), 1.0);
        result.add_record(YearlyRecord {
            year: 2023,
            revenue: 3.5,
            growth: 2.5,
            compliance: 83.0,
            mobility: 50.0,
        });
        let values: Vec<String> = metric_cards(&result)
            .iter()
            .map(|c| c.formatted_value(&us))
            .collect();
        assert_eq!(values, vec!["$3.50", "2.5%", "83.0%", "50.00"]);
    }

    #[test]
    fn test_chart_series_axes() {
        let result = ProjectionEngine::default().project_seeded(&TaxRates::reference(), 3);
        let series = chart_series(&result);
        assert_eq!(series[0].axis, Axis::Left);
        assert!(series[1..].iter().all(|s| s.axis == Axis::Right));
        assert!(series.iter().all(|s| s.points.len() == 11));
        assert_eq!(series[3].name, "Economic Mobility Index");
    }

    #[test]
    fn test_render_text() {
        let result = ProjectionEngine::default().expected(&TaxRates::reference());
        let text = render_text(&result, &NumberLocale::en_us());
        assert!(text.contains("Federal Income Tax Rate: 25.0%"));
        assert!(text.contains("Government Revenue"));
        assert!(text.contains("2033"));
        assert!(text.contains("$3.50"));
        assert!(text.contains("Tax Rate Comparison"));
        // header, separator, three rates, impact, blank, four cards, blank,
        // title, column header, rule, eleven years, blank, title, three bars
        assert_eq!(text.lines().count(), 31);
    }
}
