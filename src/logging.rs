use env_logger::Env;
use log::LevelFilter;

/// Warnings by default, debug with `--verbose`; `RUST_LOG` still applies when set
pub fn init(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }

    // A logger may already be installed when running under a test harness
    let _ = builder.try_init();
}
