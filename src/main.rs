use clap::Parser;
use classpectanator::cli::{self, Cli};
use classpectanator::registry::RegistryError;
use std::io;
use std::process::ExitCode;

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    init_logging();

    match cli::run(Cli::parse(), &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Invalid-classpect reports are already on stdout; anything else
            // is an unexpected failure worth a stderr line.
            if err.downcast_ref::<RegistryError>().is_none() {
                eprintln!("Error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
