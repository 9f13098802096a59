//! Application entry point and dispatch.

use anyhow::Result;
use tracing::info;

use numseq_calibration::calibration::{CalibrationEngine, CalibrationMode};
use numseq_calibration::evaluation::{evaluate, EvaluationConfig};
use numseq_calibration::runner::time_once;
use numseq_cli::completion::generate_completion;
use numseq_cli::progress::EvaluationProgress;
use numseq_cli::CliPresenter;
use numseq_core::perfect::{find_perfect_in_range, is_perfect};
use numseq_core::Algorithm;

use crate::config::{fib_settings, AppConfig, Command};
use crate::errors::AppError;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let presenter = CliPresenter::new(config.verbose, config.quiet);

    match &config.command {
        Command::Fib {
            n,
            algo,
            threshold,
        } => run_fib(&presenter, *n, algo, *threshold),
        Command::Perfect { begin, end } => run_perfect(&presenter, *begin, *end),
        Command::IsPerfect { number } => {
            presenter.present_is_perfect(*number, is_perfect(*number));
            Ok(())
        }
        Command::Evaluate {
            max_n,
            repetitions,
            recursive,
            json,
        } => {
            let eval_config = EvaluationConfig {
                max_n: *max_n,
                repetitions: *repetitions,
                include_recursive: *recursive,
            };
            run_evaluate(config, &presenter, &eval_config, *json)
        }
        Command::Calibrate { quick, json } => run_calibration(config, &presenter, *quick, *json),
        Command::Completion { shell } => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            generate_completion(&mut cmd, *shell, &mut std::io::stdout());
            Ok(())
        }
    }
}

fn run_fib(presenter: &CliPresenter, n: i64, algo: &str, threshold: u64) -> Result<()> {
    let (algorithm, opts) = fib_settings(algo, threshold)?;
    let (value, duration) = time_once(|| algorithm.compute(n, &opts));
    let value = value?;
    let index = n.unsigned_abs();
    let label = match algorithm {
        Algorithm::Auto => format!("Auto ({})", algorithm.resolve(index, &opts)),
        fixed => fixed.name().to_string(),
    };
    presenter.present_fibonacci(&label, index, &value, duration);
    Ok(())
}

fn run_perfect(presenter: &CliPresenter, begin: i32, end: i32) -> Result<()> {
    let (found, duration) = time_once(|| find_perfect_in_range(begin, end));
    let found = found?;
    presenter.present_perfect(begin, end, &found, duration);
    Ok(())
}

fn run_evaluate(
    config: &AppConfig,
    presenter: &CliPresenter,
    eval_config: &EvaluationConfig,
    json: bool,
) -> Result<()> {
    let progress = EvaluationProgress::new(eval_config.max_n, config.quiet || json);
    let report = evaluate(eval_config, |n, max| progress.update(n, max));
    progress.finish();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        presenter.present_evaluation(&report);
    }

    if !report.is_consistent() {
        return Err(AppError::Mismatch(report.mismatches.len()).into());
    }
    Ok(())
}

fn run_calibration(
    config: &AppConfig,
    presenter: &CliPresenter,
    quick: bool,
    json: bool,
) -> Result<()> {
    let mode = if quick {
        CalibrationMode::Quick
    } else {
        CalibrationMode::Full
    };

    let verbose = config.verbose;
    let engine = CalibrationEngine::new(mode).with_progress(Box::new(move |p| {
        info!(step = %p.step, current = p.current, total = p.total, "calibration step");
        if verbose {
            eprintln!("[{}/{}] {}", p.current, p.total, p.step);
        }
    }));
    let profile = engine.calibrate();

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        presenter.present_calibration(&profile);
    }

    if !profile.is_valid() {
        return Err(AppError::Mismatch(profile.mismatches).into());
    }
    Ok(())
}
