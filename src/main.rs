use clap::Parser;
use howpositive::cli::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = Config::parse();
    env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .parse_default_env()
        .init();
    howpositive::cli::run(config).await
}
