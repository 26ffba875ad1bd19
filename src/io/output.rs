use crate::core::{
    find_benchmark, FinancialInputs, HeadlineBenefits, ReferenceData, RoiResult, TimeUnit,
    DOWNTIME_CATEGORY, ENERGY_CATEGORY, SCRAP_CATEGORY,
};
use crate::engine::RankedPillar;
use chrono::{DateTime, Utc};
use colored::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// Everything a writer may render. Only `result` is part of the JSON
/// contract; the rest feeds the human-readable reports.
pub struct PlanReport<'a> {
    pub result: &'a RoiResult,
    pub reference: &'a ReferenceData,
    pub ranking: &'a [RankedPillar],
    pub financials: Option<&'a FinancialInputs>,
    pub generated: DateTime<Utc>,
}

impl PlanReport<'_> {
    fn time_unit(&self) -> TimeUnit {
        self.financials.map(|f| f.time_unit).unwrap_or_default()
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &PlanReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &PlanReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report.result)?;
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &PlanReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_priority_pillars(report)?;
        self.write_roadmap(report)?;
        self.write_benefits(report)?;
        self.write_payback(report)?;
        self.write_technology_details(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &PlanReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Technology Roadmap")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_priority_pillars(&mut self, report: &PlanReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Priority Pillars")?;
        writeln!(self.writer)?;
        if report.ranking.is_empty() {
            writeln!(self.writer, "_No pillars were rated._")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "| Rank | Pillar | Gap | Priority Weight | Score |")?;
        writeln!(self.writer, "|------|--------|-----|-----------------|-------|")?;
        for (index, ranked) in report.ranking.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.2} | {:.2} |",
                index + 1,
                ranked.pillar.title(),
                ranked.gap,
                ranked.priority_weight,
                ranked.score
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_roadmap(&mut self, report: &PlanReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Roadmap")?;
        writeln!(self.writer)?;
        for phase in report.result.roadmap.phases() {
            writeln!(self.writer, "### {}", phase.timeframe)?;
            writeln!(self.writer)?;
            if phase.technologies.is_empty() {
                writeln!(self.writer, "_No technologies scheduled._")?;
            }
            for name in &phase.technologies {
                writeln!(self.writer, "- {name}")?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_benefits(&mut self, report: &PlanReport) -> anyhow::Result<()> {
        let benefits = &report.result.headline_benefits;
        let pct = benefits.percentages();
        let money = benefits.monetary();

        writeln!(self.writer, "## Headline Benefits")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Category | Improvement | Benchmark Range | Annual Savings |"
        )?;
        writeln!(
            self.writer,
            "|----------|-------------|-----------------|----------------|"
        )?;

        let rows = [
            (
                "Downtime reduction",
                DOWNTIME_CATEGORY,
                pct.downtime_reduction,
                money.and_then(|m| m.downtime_savings_annual),
            ),
            (
                "Scrap reduction",
                SCRAP_CATEGORY,
                pct.scrap_reduction,
                money.and_then(|m| m.scrap_savings_annual),
            ),
            (
                "Energy savings",
                ENERGY_CATEGORY,
                pct.energy_savings,
                money.and_then(|m| m.energy_savings_annual),
            ),
        ];
        for (label, category, percent, savings) in rows {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                label,
                format_percent(percent),
                benchmark_range(report.reference, category),
                savings.map(format_currency).unwrap_or_else(|| "-".to_string())
            )?;
        }
        writeln!(self.writer)?;

        if let Some(basis) = downtime_basis(report.financials, report.time_unit()) {
            writeln!(self.writer, "Downtime basis: {basis}")?;
            writeln!(self.writer)?;
        }
        if let Some(total) = benefits.total_annual_savings() {
            writeln!(
                self.writer,
                "**Total annual savings:** {}",
                format_currency(total)
            )?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_payback(&mut self, report: &PlanReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Payback")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Estimated payback:** {}",
            format_months(report.result.payback_months)
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "> {}", report.result.assumptions)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_technology_details(&mut self, report: &PlanReport) -> anyhow::Result<()> {
        let details: Vec<_> = report
            .result
            .roadmap
            .technology_names()
            .filter_map(|name| report.reference.technology_named(name))
            .filter(|tech| tech.description.is_some() || !tech.vendor_examples.is_empty())
            .collect();
        if details.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Technology Details")?;
        writeln!(self.writer)?;
        for tech in details {
            writeln!(self.writer, "### {}", tech.name)?;
            writeln!(self.writer)?;
            if let Some(description) = &tech.description {
                writeln!(self.writer, "{description}")?;
                writeln!(self.writer)?;
            }
            if !tech.vendor_examples.is_empty() {
                writeln!(
                    self.writer,
                    "Vendor examples: {}",
                    tech.vendor_examples.join(", ")
                )?;
                writeln!(self.writer)?;
            }
        }
        Ok(())
    }
}

/// Colored plain-text report for interactive use.
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &PlanReport) -> anyhow::Result<()> {
        let out = &mut self.writer;

        writeln!(out, "{}", "Technology Roadmap".bold().blue())?;
        writeln!(out, "{}", "==================".blue())?;
        writeln!(out)?;

        if let Some(top) = report.ranking.first() {
            writeln!(
                out,
                "Largest weighted gap: {} (gap {}, score {:.2})",
                top.pillar.title().bold(),
                top.gap,
                top.score
            )?;
            writeln!(out)?;
        }

        for phase in report.result.roadmap.phases() {
            writeln!(out, "{}", phase.timeframe.bold())?;
            if phase.technologies.is_empty() {
                writeln!(out, "  {}", "(nothing scheduled)".dimmed())?;
            }
            for name in &phase.technologies {
                writeln!(out, "  - {name}")?;
            }
        }
        writeln!(out)?;

        write_terminal_benefits(&mut *out, report)?;

        let months = report.result.payback_months;
        let payback = format_months(months);
        let payback = match months {
            0..=24 => payback.green(),
            25..=48 => payback.yellow(),
            _ => payback.red(),
        };
        writeln!(out, "Estimated payback: {payback}")?;
        writeln!(out, "{}", report.result.assumptions.dimmed())?;
        out.flush()?;
        Ok(())
    }
}

fn write_terminal_benefits<W: Write>(out: &mut W, report: &PlanReport) -> anyhow::Result<()> {
    writeln!(out, "{}", "Headline benefits".bold())?;
    match &report.result.headline_benefits {
        HeadlineBenefits::Percentages(pct) => {
            writeln!(out, "  Downtime reduction: {}", format_percent(pct.downtime_reduction))?;
            writeln!(out, "  Scrap reduction:    {}", format_percent(pct.scrap_reduction))?;
            writeln!(out, "  Energy savings:     {}", format_percent(pct.energy_savings))?;
        }
        HeadlineBenefits::Monetary(m) => {
            let rows = [
                ("Downtime reduction", m.downtime_reduction_pct, m.downtime_savings_annual),
                ("Scrap reduction   ", m.scrap_reduction_pct, m.scrap_savings_annual),
                ("Energy savings    ", m.energy_savings_pct, m.energy_savings_annual),
            ];
            for (label, percent, savings) in rows {
                match savings {
                    Some(amount) => writeln!(
                        out,
                        "  {label}: {} ({} / yr)",
                        format_percent(percent),
                        format_currency(amount).green()
                    )?,
                    None => writeln!(out, "  {label}: {}", format_percent(percent))?,
                }
            }
            if let Some(basis) = downtime_basis(report.financials, report.time_unit()) {
                writeln!(out, "  {}", format!("Downtime basis: {basis}").dimmed())?;
            }
            writeln!(
                out,
                "  Total annual savings: {}",
                format_currency(m.total_annual_savings).bold()
            )?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Describe the downtime figures the savings were computed from.
fn downtime_basis(financials: Option<&FinancialInputs>, unit: TimeUnit) -> Option<String> {
    let financials = financials?;
    let hours = financials.downtime_hours.filter(|v| *v > 0.0)?;
    let cost = financials.downtime_cost_per_hour.filter(|v| *v > 0.0)?;
    Some(format!(
        "{hours} {} at {} per {}",
        unit.label(),
        format_currency(cost),
        unit.singular()
    ))
}

/// Benchmark range for `category`, or a note that the default was used.
fn benchmark_range(reference: &ReferenceData, category: &str) -> String {
    match find_benchmark(&reference.benchmarks, category) {
        Some(bench) if bench.usable_med().is_some() => match (bench.low, bench.high) {
            (Some(low), Some(high)) => format!("{low}-{high}%"),
            _ => "median only".to_string(),
        },
        _ => "default".to_string(),
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

pub fn format_months(months: u32) -> String {
    match months {
        1 => "1 month".to_string(),
        n => format!("{n} months"),
    }
}

/// Whole dollars with US thousands separators, e.g. `$7,500`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub fn create_writer(format: OutputFormat, sink: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        Benchmark, ImprovementPercentages, MonetaryBenefits, Phase, Pillar, Roadmap, Technology,
    };
    use chrono::TimeZone;

    fn result(benefits: HeadlineBenefits, payback_months: u32) -> RoiResult {
        RoiResult {
            roadmap: Roadmap::new(vec![
                Phase {
                    timeframe: "0-12 months".into(),
                    technologies: vec!["MES".into()],
                },
                Phase {
                    timeframe: "12-24 months".into(),
                    technologies: vec![],
                },
                Phase {
                    timeframe: "24-36 months".into(),
                    technologies: vec![],
                },
            ]),
            headline_benefits: benefits,
            payback_months,
            assumptions: "Based on industry averages for similar manufacturing operations."
                .into(),
        }
    }

    fn percentages() -> HeadlineBenefits {
        HeadlineBenefits::Percentages(ImprovementPercentages {
            downtime_reduction: 20.0,
            scrap_reduction: 8.0,
            energy_savings: 6.0,
        })
    }

    fn reference() -> ReferenceData {
        let mut mes = Technology::new(3_i64, "MES", Pillar::Process);
        mes.description = Some("Tracks work orders on the shop floor.".into());
        mes.vendor_examples = vec!["Siemens Opcenter".into(), "Plex".into()];
        ReferenceData {
            benchmarks: vec![Benchmark::new("Downtime", 10.0, 20.0, 30.0)],
            technologies: vec![mes],
        }
    }

    fn ranking() -> Vec<RankedPillar> {
        vec![RankedPillar {
            pillar: Pillar::Process,
            gap: 3,
            priority_weight: 0.9,
            score: 2.7,
        }]
    }

    fn render(
        writer: fn(&mut Vec<u8>, &PlanReport) -> anyhow::Result<()>,
        report: &PlanReport,
    ) -> String {
        let mut buffer = Vec::new();
        writer(&mut buffer, report).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn generated() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(7500.0), "$7,500");
        assert_eq!(format_currency(600.0), "$600");
        assert_eq!(format_currency(1_234_567.49), "$1,234,567");
        assert_eq!(format_currency(999.5), "$1,000");
        assert_eq!(format_currency(-2500.0), "-$2,500");
        assert_eq!(format_currency(f64::NAN), "n/a");
    }

    #[test]
    fn test_format_percent_and_months() {
        assert_eq!(format_percent(15.0), "15%");
        assert_eq!(format_percent(12.5), "12.5%");
        assert_eq!(format_months(1), "1 month");
        assert_eq!(format_months(18), "18 months");
    }

    #[test]
    fn test_json_writer_emits_result_contract_only() {
        let result = result(percentages(), 18);
        let reference = reference();
        let ranking = ranking();
        let report = PlanReport {
            result: &result,
            reference: &reference,
            ranking: &ranking,
            financials: None,
            generated: generated(),
        };
        let text = render(|buf, r| JsonWriter::new(buf).write_report(r), &report);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec!["roadmap", "headlineBenefits", "paybackMonths", "assumptions"]
        );
    }

    #[test]
    fn test_markdown_includes_ranges_and_details() {
        let result = result(percentages(), 18);
        let reference = reference();
        let ranking = ranking();
        let report = PlanReport {
            result: &result,
            reference: &reference,
            ranking: &ranking,
            financials: None,
            generated: generated(),
        };
        let text = render(|buf, r| MarkdownWriter::new(buf).write_report(r), &report);
        assert!(text.starts_with("# Technology Roadmap"));
        assert!(text.contains("Generated: 2026-03-01 12:00:00 UTC"));
        assert!(text.contains("| 1 | Process Excellence & Standardization | 3 | 0.90 | 2.70 |"));
        assert!(text.contains("| Downtime reduction | 20% | 10-30% | - |"));
        assert!(text.contains("| Scrap reduction | 8% | default | - |"));
        assert!(text.contains("_No technologies scheduled._"));
        assert!(text.contains("**Estimated payback:** 18 months"));
        assert!(text.contains("Vendor examples: Siemens Opcenter, Plex"));
        assert!(!text.contains("Total annual savings"));
    }

    #[test]
    fn test_markdown_monetary_uses_time_unit() {
        let benefits = HeadlineBenefits::Monetary(MonetaryBenefits {
            downtime_reduction_pct: 15.0,
            scrap_reduction_pct: 8.0,
            energy_savings_pct: 6.0,
            downtime_savings_annual: Some(7500.0),
            scrap_savings_annual: Some(1600.0),
            energy_savings_annual: None,
            total_annual_savings: 9100.0,
        });
        let result = result(benefits, 132);
        let reference = ReferenceData::default();
        let financials = FinancialInputs {
            downtime_hours: Some(100.0),
            downtime_cost_per_hour: Some(500.0),
            scrap_cost: Some(20_000.0),
            time_unit: TimeUnit::Shifts,
            ..Default::default()
        };
        let report = PlanReport {
            result: &result,
            reference: &reference,
            ranking: &[],
            financials: Some(&financials),
            generated: generated(),
        };
        let text = render(|buf, r| MarkdownWriter::new(buf).write_report(r), &report);
        assert!(text.contains("| Downtime reduction | 15% | default | $7,500 |"));
        assert!(text.contains("| Energy savings | 6% | default | - |"));
        assert!(text.contains("Downtime basis: 100 shifts at $500 per Shift"));
        assert!(text.contains("**Total annual savings:** $9,100"));
        assert!(text.contains("_No pillars were rated._"));
        assert!(!text.contains("## Technology Details"));
    }

    #[test]
    fn test_terminal_writer_plain_output() {
        colored::control::set_override(false);
        let result = result(percentages(), 18);
        let reference = reference();
        let ranking = ranking();
        let report = PlanReport {
            result: &result,
            reference: &reference,
            ranking: &ranking,
            financials: None,
            generated: generated(),
        };
        let text = render(|buf, r| TerminalWriter::new(buf).write_report(r), &report);
        assert!(text.contains("Largest weighted gap: Process Excellence & Standardization"));
        assert!(text.contains("  - MES"));
        assert!(text.contains("(nothing scheduled)"));
        assert!(text.contains("  Downtime reduction: 20%"));
        assert!(text.contains("Estimated payback: 18 months"));
    }

    #[test]
    fn test_output_format_deserializes_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"markdown\"").unwrap();
        assert_eq!(format, OutputFormat::Markdown);
    }
}
