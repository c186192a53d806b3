use std::process::ExitCode;

use anyhow::Context;
use email_fixtures::{
    configuration::{self, Configuration, OutputFormat},
    cross_check, report,
    telemetry::{get_subscriber, init_subscriber},
};
use rand::{SeedableRng, rngs::StdRng};

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to generate email fixtures: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), anyhow::Error> {
    let config = configuration::get_config().context("Failed to read configuration")?;

    // Logs go to stderr so stdout carries only the fixtures.
    let subscriber = get_subscriber(
        "email-fixtures".into(),
        config.log_level.clone(),
        std::io::stderr,
    );
    init_subscriber(subscriber).context("Failed to install the tracing subscriber")?;

    let output = render(&config)?;
    print!("{output}");
    Ok(())
}

fn render(config: &Configuration) -> Result<String, anyhow::Error> {
    let generator = config.generator.generator();
    let include_unicode = config.generator.include_unicode;
    let cases = match config.generator.seed {
        Some(seed) => {
            tracing::info!(seed, "using a fixed seed");
            generator.generate_with_rng(&mut StdRng::seed_from_u64(seed), include_unicode)
        }
        None => generator.generate(include_unicode),
    }
    .context("Failed to generate fixtures")?;

    let mut output = match config.output.format {
        OutputFormat::Text => report::render_text(&cases),
        OutputFormat::Json => {
            let mut json = report::render_json(&cases).context("Failed to serialize fixtures")?;
            json.push('\n');
            json
        }
    };

    if config.output.cross_check {
        let verdicts = cross_check::cross_check(&cases);
        let summary = cross_check::summarize(&verdicts);
        tracing::info!(%summary, "cross-checked fixtures");
        if config.output.format == OutputFormat::Text {
            output.push_str(&summary);
            output.push('\n');
        }
    }

    Ok(output)
}
