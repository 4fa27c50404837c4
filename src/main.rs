use anyhow::Result;
use clap::Parser;
use rustflavor::cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    if let Err(err) = run(&cli) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let packages = rustflavor::load_packages(&cli.root, &cli.pattern)?;
    let document = rustflavor::assemble(&packages);
    rustflavor::io::write_document_file(&document, &cli.output)?;

    log::info!(
        "wrote {} module(s) and {} dependency edge(s) to {}",
        document.modules.modules.len(),
        document.dependencies.dependencies.len(),
        cli.output.display()
    );
    Ok(())
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
