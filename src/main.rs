use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = escape_time::Args::parse().into_config(&mut rand::thread_rng())?;

    escape_time::run(&config)
}
