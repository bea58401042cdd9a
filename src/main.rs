mod cli;

use clap::Parser;
use tracing::info;
use visa_score::archive::{self, ArchivedAssessment};
use visa_score::batch::{self, BatchOutcome};
use visa_score::engine::documents::document_gaps;
use visa_score::error::VisaScoreError;
use visa_score::report::{self, OutputFormat};
use visa_score::engine::Evaluation;
use visa_score::{config, intake, telemetry, Assessment, ScoringEngine};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(format: cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Text => OutputFormat::Text,
        cli::ReportFormat::Json => OutputFormat::Json,
    }
}

/// Incomplete submissions block; low-probability results warn.
fn evaluation_code(evaluation: &Evaluation, threshold: f64) -> i32 {
    match &evaluation.assessment {
        Assessment::Incomplete { .. } => exit_code::BLOCKING,
        Assessment::Complete {
            recommendations, ..
        } => {
            if !recommendations.is_empty() || evaluation.falls_below(threshold) {
                exit_code::WARNINGS
            } else {
                exit_code::SUCCESS
            }
        }
    }
}

fn emit(quiet: bool, rendered: &str) {
    if !quiet {
        println!("{rendered}");
    }
}

fn run() -> Result<i32, VisaScoreError> {
    let cli = cli::Cli::parse();
    if let Err(err) = telemetry::init(telemetry::level_for(cli.verbose, cli.quiet)) {
        eprintln!("warning: {err}");
    }
    let quiet = cli.quiet;

    let root = std::env::current_dir()?;
    let loaded_config = config::load_config(&root, cli.config.as_deref())?;
    let engine = ScoringEngine::new(loaded_config.engine_settings());
    let threshold = engine.settings().recommendation_threshold;

    match cli.command {
        cli::Commands::Assess(cmd) => {
            let application = intake::read_application(&cmd.file)?;
            let evaluation = engine.evaluate(&application.record);
            info!(
                file = %cmd.file.display(),
                status = evaluation.assessment.status(),
                probability = evaluation.assessment.probability(),
                "assessed application"
            );

            let rendered =
                report::render_evaluation(&evaluation, output_format(cmd.format), cmd.explain)?;
            emit(quiet, &rendered);

            if cmd.save {
                let archived = ArchivedAssessment::new(
                    &application.path,
                    &application.bytes,
                    evaluation.assessment.clone(),
                );
                let path = archive::write_assessment(&root, &archived)?;
                eprintln!("saved assessment: {}", path.display());
            }

            Ok(evaluation_code(&evaluation, threshold))
        }
        cli::Commands::Batch(cmd) => {
            if !cmd.dir.is_dir() {
                return Err(VisaScoreError::PathNotFound(cmd.dir.display().to_string()));
            }

            let entries = batch::score_directory(&engine, &cmd.dir);
            let rendered = report::render_batch(&entries, output_format(cmd.format))?;
            emit(quiet, &rendered);

            let code = entries
                .iter()
                .map(|entry| match &entry.outcome {
                    BatchOutcome::Scored(evaluation) => evaluation_code(evaluation, threshold),
                    BatchOutcome::Failed(_) => exit_code::RUNTIME_FAILURE,
                })
                .max()
                .unwrap_or(exit_code::SUCCESS);
            Ok(code)
        }
        cli::Commands::Documents(cmd) => {
            let application = intake::read_application(&cmd.file)?;
            let gaps = document_gaps(
                &engine.settings().required_documents,
                &application.record.documents,
            );
            let rendered = report::render_gaps(&gaps, output_format(cmd.format))?;
            emit(quiet, &rendered);

            if gaps.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::BLOCKING)
            }
        }
        cli::Commands::Requirements(cmd) => {
            let rendered = report::render_requirements(
                &engine.settings().required_documents,
                output_format(cmd.format),
            )?;
            emit(quiet, &rendered);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
