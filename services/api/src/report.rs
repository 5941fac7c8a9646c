use chrono::{DateTime, Utc};
use clap::Args;
use passport_audit::error::AppError;
use passport_audit::passport::{
    AuditReport, CompanionDocument, PassportImporter, ScoreDetails, ScoringEngine,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Passport CSV export (Attribut, Statut de Validation, Donnée Site)
    #[arg(long)]
    pub(crate) passport: PathBuf,
    /// Optional JSON-LD companion document for the structural gate
    #[arg(long)]
    pub(crate) jsonld: Option<PathBuf>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct ScoreOutput<'a> {
    evaluated_at: DateTime<Utc>,
    passport: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<String>,
    #[serde(flatten)]
    report: &'a AuditReport,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        passport,
        jsonld,
        json,
    } = args;

    let dataset = PassportImporter::from_path(&passport)?;
    let document = jsonld
        .as_ref()
        .map(CompanionDocument::from_path)
        .transpose()?;

    let report = ScoringEngine::default().audit(&dataset, document.as_ref());
    let output = ScoreOutput {
        evaluated_at: Utc::now(),
        passport: passport.display().to_string(),
        document: jsonld.map(|path| path.display().to_string()),
        report: &report,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_text(&output));
    }

    Ok(())
}

fn render_text(output: &ScoreOutput<'_>) -> String {
    let report = output.report;
    let mut lines = vec![
        "Passport syntax audit".to_string(),
        format!(
            "Passport: {} (evaluated {})",
            output.passport,
            output.evaluated_at.format("%Y-%m-%d %H:%M UTC")
        ),
    ];

    match &output.document {
        Some(path) => lines.push(format!("Companion document: {path}")),
        None => lines.push("Companion document: none (structure not verified)".to_string()),
    }

    lines.push(String::new());
    lines.push(format!("Score: {}/100", report.result.score));

    match &report.result.details {
        ScoreDetails::GateFailed { warnings, .. } => {
            lines.push("Hard gate: FAILED (business rules skipped)".to_string());
            lines.push(format!("Warnings: {warnings}"));
        }
        ScoreDetails::Scored {
            warnings_count,
            errors_count,
            required_fields_ok,
            has_identifiers,
            ..
        } => {
            lines.push("Hard gate: passed".to_string());
            lines.push(format!("Warnings: {warnings_count}"));
            lines.push(format!("Errors: {errors_count}"));
            lines.push(format!("Required fields: {}", yes_no(*required_fields_ok)));
            lines.push(format!("Identifiers: {}", yes_no(*has_identifiers)));
        }
    }

    if report.findings.is_empty() {
        lines.push("\nFindings: none".to_string());
    } else {
        lines.push("\nFindings".to_string());
        for finding in &report.findings {
            let attribute = finding
                .attribute
                .as_deref()
                .map(|name| format!(" [{name}]"))
                .unwrap_or_default();
            lines.push(format!(
                "- {}{}: {} (+{} warning(s))",
                finding.kind.label(),
                attribute,
                finding.note,
                finding.warnings
            ));
        }
    }

    let insights = &report.insights;
    lines.push("\nProfile".to_string());
    lines.push(format!(
        "- {} fact(s) across {} attribute(s), {:.0}% certified",
        insights.fact_count,
        insights.distinct_attributes,
        insights.certified_ratio * 100.0
    ));
    lines.push(format!(
        "- Sources: Wikidata {}, INSEE {}",
        yes_no(insights.has_wikidata_source),
        yes_no(insights.has_insee_source)
    ));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
