use crate::core::types::{AnalysisReport, HealthScore};
use crate::formatting::{format_currency, format_months, format_pct};
use colored::*;
use std::io::Write;

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
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
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
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
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_summary(report)?;
        self.write_health(report)?;
        self.write_costs(report)?;
        self.write_scenarios(report)?;
        self.write_recommendations(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "# Tcomap TCO Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Executive Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Total Managed Nodes | {:.0} |",
            report.summary.total_nodes
        )?;
        writeln!(
            self.writer,
            "| Active Cookbooks | {:.0} |",
            report.summary.active_cookbooks
        )?;
        writeln!(
            self.writer,
            "| Annual TCO | {} |",
            format_currency(report.summary.annual_tco)
        )?;
        writeln!(
            self.writer,
            "| Cost per Node | {} |",
            format_currency(report.summary.per_node_cost)
        )?;
        writeln!(
            self.writer,
            "| Cost per Cookbook | {} |",
            format_currency(report.summary.per_cookbook_cost)
        )?;
        writeln!(
            self.writer,
            "| Health Score | {} |",
            report.summary.health_score.display_name()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_health(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Health Metrics")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Cookbook ratio: {:.1} per 1,000 nodes",
            report.health.cookbook_ratio
        )?;
        writeln!(
            self.writer,
            "- Cookbooks per FTE: {:.0}",
            report.health.cookbooks_per_fte
        )?;
        writeln!(
            self.writer,
            "- Debt multiplier: {:.2}x",
            report.health.debt_multiplier
        )?;
        if !report.health.issues.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "Issues:")?;
            for issue in &report.health.issues {
                writeln!(self.writer, "- {issue}")?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_costs(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Annual Cost Breakdown")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Line Item | Annual Cost |")?;
        writeln!(self.writer, "|-----------|-------------|")?;
        let costs = &report.costs;
        let rows = [
            ("Licensing", costs.licensing_cost),
            ("Infrastructure", costs.infrastructure_cost),
            ("Platform Labor", costs.platform_labor_cost),
            ("Distributed Labor", costs.distributed_labor_cost),
            ("Incident Response", costs.incident_cost),
            ("Technical Debt Tax", costs.technical_debt_tax),
            ("Training", costs.training_cost),
            ("Contractors", costs.contractor_cost),
            ("Opportunity Cost", costs.opportunity_cost),
            ("**Total**", costs.total_annual_tco),
        ];
        for (label, value) in rows {
            writeln!(self.writer, "| {label} | {} |", format_currency(value))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scenarios(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Migration Scenarios (3-Year)")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Platform | Migration | 3-Yr Total | Breakeven | NPV | Savings | Risk |"
        )?;
        writeln!(
            self.writer,
            "|----------|-----------|------------|-----------|-----|---------|------|"
        )?;
        for scenario in &report.scenarios {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} |",
                scenario.platform.display_name(),
                format_currency(scenario.migration_cost),
                format_currency(scenario.three_year_total),
                format_months(scenario.breakeven_months),
                format_currency(scenario.npv_3year),
                format_pct(scenario.savings_pct),
                scenario.risk.display_name()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.recommendations.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Recommendations")?;
        writeln!(self.writer)?;
        for (i, rec) in report.recommendations.iter().enumerate() {
            writeln!(self.writer, "{}. {rec}", i + 1)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        print_header();
        print_summary(report);
        print_health(report);
        print_costs(report);
        print_scenarios(report);
        print_recommendations(report);
        Ok(())
    }
}

fn print_header() {
    println!("{}", "Tcomap TCO Analysis Report".bold().blue());
    println!("{}", "==========================".blue());
    println!();
}

fn print_summary(report: &AnalysisReport) {
    println!("{}", "Summary:".bold());
    println!("  Total managed nodes: {:.0}", report.summary.total_nodes);
    println!("  Active cookbooks: {:.0}", report.summary.active_cookbooks);
    println!(
        "  Annual TCO: {}",
        format_currency(report.summary.annual_tco).bold()
    );
    println!(
        "  Cost per node: {}",
        format_currency(report.summary.per_node_cost)
    );
    println!(
        "  Cost per cookbook: {}",
        format_currency(report.summary.per_cookbook_cost)
    );

    let score = report.summary.health_score;
    let score_display = match score {
        HealthScore::Healthy => score.display_name().green(),
        HealthScore::Warning => score.display_name().yellow(),
        HealthScore::Critical => score.display_name().red(),
    };
    println!("  Health score: {score_display}");
    println!();
}

fn print_health(report: &AnalysisReport) {
    println!("{}", "Health Metrics:".bold());
    println!(
        "  Cookbook ratio: {:.1} per 1,000 nodes",
        report.health.cookbook_ratio
    );
    println!("  Cookbooks per FTE: {:.0}", report.health.cookbooks_per_fte);
    println!("  Debt multiplier: {:.2}x", report.health.debt_multiplier);
    if !report.health.issues.is_empty() {
        println!("  Issues:");
        for issue in &report.health.issues {
            println!("    - {}", issue.yellow());
        }
    }
    println!();
}

fn print_costs(report: &AnalysisReport) {
    let costs = &report.costs;
    println!("{}", "Annual Cost Breakdown:".bold());
    println!("  Licensing:          {:>12}", format_currency(costs.licensing_cost));
    println!("  Infrastructure:     {:>12}", format_currency(costs.infrastructure_cost));
    println!("  Platform labor:     {:>12}", format_currency(costs.platform_labor_cost));
    println!("  Distributed labor:  {:>12}", format_currency(costs.distributed_labor_cost));
    println!("  Incident response:  {:>12}", format_currency(costs.incident_cost));
    println!("  Technical debt tax: {:>12}", format_currency(costs.technical_debt_tax));
    println!("  Training:           {:>12}", format_currency(costs.training_cost));
    println!("  Contractors:        {:>12}", format_currency(costs.contractor_cost));
    println!("  Opportunity cost:   {:>12}", format_currency(costs.opportunity_cost));
    println!(
        "  {} {:>12}",
        "Total:".bold(),
        format_currency(costs.total_annual_tco).bold()
    );
    println!();
}

fn print_scenarios(report: &AnalysisReport) {
    println!("{}", "Migration Scenarios (3-year, best NPV first):".bold());
    println!(
        "  {:<12} {:>10} {:>12} {:>10} {:>12} {:>9} {:>7}",
        "Platform", "Migration", "3-Yr Total", "Breakeven", "NPV", "Savings", "Risk"
    );
    for scenario in &report.scenarios {
        let npv = format_currency(scenario.npv_3year);
        let npv_display = if scenario.npv_3year > 0.0 {
            npv.green()
        } else {
            npv.red()
        };
        println!(
            "  {:<12} {:>10} {:>12} {:>10} {:>12} {:>9} {:>7}",
            scenario.platform.display_name(),
            format_currency(scenario.migration_cost),
            format_currency(scenario.three_year_total),
            format_months(scenario.breakeven_months),
            npv_display,
            format_pct(scenario.savings_pct),
            scenario.risk.display_name()
        );
    }
    println!();
}

fn print_recommendations(report: &AnalysisReport) {
    if report.recommendations.is_empty() {
        return;
    }
    println!("{}", "Recommendations:".bold());
    for (i, rec) in report.recommendations.iter().enumerate() {
        println!("  {}. {rec}", i + 1);
    }
    println!();
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}
