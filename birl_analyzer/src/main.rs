use birl_analyzer::config::build_info;
use birl_analyzer::logging::codes;
use birl_analyzer::report::AnalysisReport;
use birl_analyzer::{log_success, logging, pipeline};
use chrono::Utc;
use std::env;
use std::process;
use std::time::Instant;

#[derive(Debug, Default)]
struct CliOptions {
    file: Option<String>,
    inline_source: Option<String>,
    wire_only: bool,
    compact: bool,
    quiet: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_global_logging()?;

    if let Err(message) = pipeline::validate_pipeline() {
        logging::safe_log_critical(
            codes::system::INITIALIZATION_FAILURE,
            &format!("Pipeline validation failed: {}", message),
        );
        return Err(message.into());
    }

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input.birl> [options]", args[0]);
        eprintln!("       {} --code '<source>' [options]", args[0]);
        eprintln!("       {} --help", args[0]);
        process::exit(2);
    }

    let options = parse_options(&args[1..]);

    if options.show_help {
        print_help(&args[0]);
        return Ok(());
    }

    if options.show_version {
        println!("birl_analyzer v{} ({})", build_info::version(), build_info::profile());
        return Ok(());
    }

    let exit_code = if let Some(source) = &options.inline_source {
        run_inline(source, &options)
    } else if let Some(path) = &options.file {
        run_file(path, &options)
    } else {
        eprintln!("Error: Input must be a .birl file or --code '<source>'");
        2
    };

    log_success!(
        codes::success::OPERATION_COMPLETED_SUCCESSFULLY,
        "Analysis run finished",
        "exit_code" => exit_code
    );

    if exit_code != 0 {
        process::exit(exit_code);
    }

    Ok(())
}

fn parse_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--wire" => {
                options.wire_only = true;
            }
            "--compact" => {
                options.compact = true;
            }
            "--quiet" => {
                options.quiet = true;
            }
            "--help" => {
                options.show_help = true;
            }
            "--version" => {
                options.show_version = true;
            }
            "--code" => {
                if i + 1 < args.len() {
                    options.inline_source = Some(args[i + 1].clone());
                    i += 1; // Skip the source argument
                } else {
                    eprintln!("Warning: --code requires a source string");
                }
            }
            other => {
                if other.starts_with("--") {
                    eprintln!("Warning: Unknown option '{}'", other);
                } else if options.file.is_none() {
                    options.file = Some(other.to_string());
                } else {
                    eprintln!("Warning: Extra input '{}' ignored", other);
                }
            }
        }
        i += 1;
    }

    options
}

fn run_file(file_path: &str, options: &CliOptions) -> i32 {
    match pipeline::process_file(file_path) {
        Ok(result) => emit_report(&result.report, options),
        Err(error) => {
            eprintln!("FAILED: {}", error);
            print_detailed_error(&error);
            2
        }
    }
}

fn run_inline(source: &str, options: &CliOptions) -> i32 {
    let started_at = Utc::now();
    let start_time = Instant::now();

    let outcome = pipeline::analyze_source(source);
    let report = outcome.report().with_timing(started_at, start_time.elapsed());

    emit_report(&report, options)
}

/// Print the report to stdout and map the result onto the exit code
/// (0 = clean, 1 = diagnostics reported, 2 = failure)
fn emit_report(report: &AnalysisReport, options: &CliOptions) -> i32 {
    let rendered = if options.wire_only {
        report.wire_json()
    } else if options.compact {
        report.to_json_compact()
    } else {
        report.render_json()
    };

    match rendered {
        Ok(payload) => {
            println!("{}", payload);
            if !options.quiet {
                eprintln!(
                    "Analysis finished: {} ({} tokens, {} diagnostics)",
                    report.status,
                    report.token_count,
                    report.counts.total()
                );
            }
            if report.is_clean() {
                0
            } else {
                1
            }
        }
        Err(error) => {
            eprintln!("FAILED: {}", error);
            2
        }
    }
}

fn print_help(program_name: &str) {
    println!("BIRL Analyzer v{}", env!("CARGO_PKG_VERSION"));
    println!("Lexical and syntax diagnostics for BIRL programs");
    println!();
    println!("USAGE:");
    println!(
        "    {} <input.birl> [options]         # Analyze a source file",
        program_name
    );
    println!(
        "    {} --code '<source>' [options]    # Analyze an inline snippet",
        program_name
    );
    println!();
    println!("ARGUMENTS:");
    println!("    <input.birl>   Path to the BIRL source file to analyze");
    println!();
    println!("OPTIONS:");
    println!("    --help         Show this help message");
    println!("    --version      Show version information");
    println!("    --code SRC     Analyze SRC instead of reading a file");
    println!("    --wire         Print only the legacy wire array");
    println!("    --compact      Print the envelope as single-line JSON");
    println!("    --quiet        Suppress the stderr summary line");
    println!();
    println!("OUTPUT:");
    println!("    stdout carries the JSON report; diagnostics are in Portuguese");
    println!("    Scan findings gate the parser off; the token list is always included");
    println!();
    println!("EXIT CODES:");
    println!("    0    Analysis finished with no findings");
    println!("    1    Analysis finished with diagnostics");
    println!("    2    Usage or I/O failure");
    println!();
    println!("EXAMPLES:");
    println!(
        "    {} treino.birl                     # Full report, pretty JSON",
        program_name
    );
    println!(
        "    {} treino.birl --wire              # Legacy array only",
        program_name
    );
    println!(
        "    {} --code 'BORA BIRL!' --quiet     # Inline snippet",
        program_name
    );
    println!();

    let pipeline_info = pipeline::get_pipeline_info();
    println!("PIPELINE CAPABILITIES:");
    for line in pipeline_info.report().lines() {
        println!("    {}", line);
    }
}

fn print_detailed_error(error: &pipeline::PipelineError) {
    match error {
        pipeline::PipelineError::FileProcessing(ref file_err) => {
            eprintln!("File processing stage failed:");
            eprintln!("  {}", file_err);
        }
        pipeline::PipelineError::Report(ref report_err) => {
            eprintln!("Report assembly stage failed:");
            eprintln!("  {}", report_err);
        }
        pipeline::PipelineError::Pipeline { message } => {
            eprintln!("Pipeline error: {}", message);
        }
    }
}
