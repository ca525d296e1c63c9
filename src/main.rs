use std::io;

use anyhow::Context;

use closure_shim::compiler::ClosureCompiler;
use closure_shim::config::Config;
use closure_shim::logging::init_tracing;
use closure_shim::shim;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // argv[0] is the program name.
    let raw_args: Vec<String> = std::env::args().skip(1).collect();

    let config = Config::load().context("failed to load closure-shim config")?;
    let compiler = ClosureCompiler::from_config(&config.compiler);

    shim::run(
        &raw_args,
        &config,
        &compiler,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    Ok(())
}
