use langcss::{Generator, RunSummary};

use crate::config::Settings;

/// Run the generate command: one stylesheet per translation table.
///
/// Missing translations and write failures are reported on stderr and do not
/// fail the run. Only an unlistable source directory does.
pub fn run_generate_command(settings: &Settings) -> Result<RunSummary, String> {
    let generator = Generator::new(
        &settings.source,
        &settings.destination,
        settings.config.clone(),
    );
    let summary = generator.run().map_err(|e| e.to_string())?;
    print_summary(&summary, settings);
    Ok(summary)
}

fn print_summary(summary: &RunSummary, settings: &Settings) {
    for report in summary.incomplete() {
        eprint!("{}", report);
    }

    for outcome in summary.failed() {
        if let Some(e) = &outcome.error {
            eprintln!("❌ {}: {}", outcome.language, e);
        }
    }

    if summary.is_empty() {
        println!(
            "No translation tables found in {}",
            settings.source.display()
        );
        return;
    }

    println!(
        "✅ Generated {} stylesheet(s) in {}",
        summary.written().count(),
        settings.destination.display()
    );
}
