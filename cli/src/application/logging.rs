use tracing_subscriber::EnvFilter;

use crate::args::LogArgs;

/// Installs the global subscriber. Logs go to stderr so stdout only carries
/// the rendered result.
pub fn init_tracing(args: &LogArgs) -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&args.filter))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if args.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}
