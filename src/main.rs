use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use crossterm::{
    queue,
    style::{self, Stylize},
};

use mazegen::{
    cli::{Cli, Summary, run_cli},
    logging,
};

/// Prints the outcome of a run as styled status lines.
fn print_summary(summary: &Summary) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    let mut lines = vec![
        ("Maze", summary.description.clone()),
        ("Algorithm", summary.generator.to_string()),
        ("Cells", summary.vertex_count.to_string()),
        ("Solution", format!("{} cells", summary.route_length)),
        ("Wrote", summary.output.display().to_string()),
    ];
    if let Some(image) = &summary.image {
        lines.push(("Image", image.display().to_string()));
    }

    for (label, value) in lines {
        queue!(
            stdout,
            style::PrintStyledContent(format!("{label:>10} ").green().bold()),
            style::Print(value),
            style::Print("\n")
        )?;
    }
    stdout.flush()
}

fn print_error(message: &str) -> io::Result<()> {
    let mut stderr = io::stderr().lock();
    queue!(
        stderr,
        style::PrintStyledContent("error: ".red().bold()),
        style::Print(message),
        style::Print("\n")
    )?;
    stderr.flush()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Held until exit so buffered log lines reach the file
    let _guard = match logging::init_logging(cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            let _ = print_error(&format!("failed to initialise logging: {err}"));
            return ExitCode::FAILURE;
        }
    };

    match run_cli(&cli) {
        Ok(summary) => {
            if let Err(err) = print_summary(&summary) {
                tracing::warn!(error = %err, "failed to print summary");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "maze generation failed");
            let _ = print_error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
