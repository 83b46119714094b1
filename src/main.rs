use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use calver::args::Args;

fn main() -> Result<ExitCode, anyhow::Error> {
    let args = Args::parse_normalized();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .without_time()
        .with_level(false)
        .with_target(false)
        .init();

    tracing::debug!("{:?}", args);

    let (output, code) = match calver::generate(
        &args.format,
        &args.major,
        &args.minor,
        &args.micro,
        &args.modifier,
    ) {
        Ok(version) => (version, ExitCode::SUCCESS),
        Err(e) => {
            tracing::debug!("generate failed: {:?}", e);
            (format!("{e}\n"), ExitCode::FAILURE)
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("could not write to stdout")?;

    Ok(code)
}
