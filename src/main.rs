use miette::Result;

/// Main entry point for the johnson-cycles CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    johnson_cycles::run()
}
