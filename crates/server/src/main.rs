use meridian_server::{Server, ServerConfig};

const USAGE: &str = "\
Usage: meridian [--config <PATH>]

  -c, --config <PATH>   JSON file with listener settings and the clock list
  -h, --help            Show this message

HOST and PORT override the listener address; RUST_LOG sets the log filter.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("meridian_server=info,meridian_registry=info"),
    )
    .init();

    let mut config_path: Option<String> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            "--config" | "-c" => match args.next() {
                Some(path) => config_path = Some(path),
                None => {
                    eprintln!("--config needs a path\n\n{USAGE}");
                    std::process::exit(2);
                }
            },
            other => {
                eprintln!("unexpected argument '{other}'\n\n{USAGE}");
                std::process::exit(2);
            }
        }
    }

    let config = match config_path {
        Some(path) => {
            log::info!("Loading clocks from {}", path);
            ServerConfig::from_file(&path)?
        }
        None => ServerConfig::default(),
    }
    .with_env_overrides();

    let server = Server::from_config(config)?;

    log::info!("Starting {}", server.config.name);
    for seed in &server.config.clocks {
        log::info!("  {} ({})", seed.city, seed.timezone);
    }

    server.run().await
}
