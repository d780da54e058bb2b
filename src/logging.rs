use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging based on verbosity level
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("retest=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("retest=info,warn,error"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::debug!("Verbose logging enabled");
    }

    Ok(())
}

/// Log one tool execution with its exit code
pub fn log_tool_run(tool: &str, exit_code: i32) {
    if exit_code == 0 {
        tracing::debug!(tool = tool, exit_code = exit_code, "Tool run completed");
    } else {
        tracing::warn!(tool = tool, exit_code = exit_code, "Tool run failed");
    }
}

/// Log the outcome of a baseline comparison
pub fn log_comparison(test: &str, matched: bool) {
    if matched {
        tracing::debug!(test = test, "Output matches the baseline");
    } else {
        tracing::warn!(test = test, "Output differs from the baseline");
    }
}
