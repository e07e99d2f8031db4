use crate::infra::load_answers;
use clap::{Args, ValueEnum};
use interview_ready::assessment::{calculate_results, AssessmentResult, MAX_SCORE};
use interview_ready::error::AppError;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// JSON answers document; omitted fields use the questionnaire defaults
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Output format for the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Include the per-category action list in the text report
    #[arg(long)]
    pub(crate) details: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let answers = load_answers(args.answers.as_deref())?;
    let result = calculate_results(&answers);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &result)?;
            writeln!(out)?;
        }
        OutputFormat::Text => render_report(&mut out, &result, args.details)?,
    }
    Ok(())
}

pub(crate) fn render_report<W: Write>(
    out: &mut W,
    result: &AssessmentResult,
    details: bool,
) -> io::Result<()> {
    writeln!(out, "Your Interview Readiness Report")?;
    writeln!(
        out,
        "Overall score: {}/{MAX_SCORE} ({})",
        result.overall_score,
        result.readiness_level.label()
    )?;
    writeln!(
        out,
        "Estimated time to interview-ready: {}",
        result.time_to_ready
    )?;

    writeln!(out, "\nCategory scores")?;
    for (category, score) in result.categories() {
        writeln!(
            out,
            "- {}: {}% ({})",
            category.label(),
            score.percentage,
            score.level.label()
        )?;
    }

    render_list(out, "Top strengths", &result.top_strengths)?;
    render_list(out, "Critical gaps", &result.critical_gaps)?;

    writeln!(out, "\nYour 4-week action plan")?;
    for week in &result.weekly_plan {
        writeln!(out, "Week {} - {}", week.week, week.focus)?;
        for task in &week.tasks {
            writeln!(out, "  • {task}")?;
        }
    }

    if details {
        writeln!(out, "\nDetailed action plan")?;
        for (category, actions) in result.category_actions() {
            writeln!(out, "{}", category.label())?;
            for action in actions {
                writeln!(
                    out,
                    "- [{}] {} ({})",
                    action.priority.label(),
                    action.task,
                    action.time_estimate
                )?;
                if let Some(resource) = &action.resource {
                    writeln!(out, "    resource: {resource}")?;
                }
            }
        }
    }

    writeln!(out, "\nShare your score")?;
    writeln!(out, "{}", result.share_summary())
}

fn render_list<W: Write>(out: &mut W, heading: &str, items: &[String]) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "\n{heading}: none");
    }
    writeln!(out, "\n{heading}")?;
    for item in items {
        writeln!(out, "- {item}")?;
    }
    Ok(())
}
