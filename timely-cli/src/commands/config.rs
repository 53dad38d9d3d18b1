use anyhow::Result;
use owo_colors::OwoColorize;
use timely_core::config::TimelyConfig;

pub fn run() -> Result<()> {
    let config_path = TimelyConfig::config_path()?;
    let config = TimelyConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:   {}", config_path.display());

    println!();
    println!("{}", "Backend".bold());
    match config.backend.base_url() {
        Ok(url) => println!("  URL:      {url}"),
        Err(_) => println!("  URL:      {}", "(not set)".dimmed()),
    }
    let key_state = if config.backend.anon_key.is_some() { "set" } else { "(not set)" };
    println!("  API key:  {}", key_state);
    println!("  Timeout:  {}", config.backend.timeout);

    println!();
    println!("{}", "Server".bold());
    println!("  Port:     {}", config.server.port);

    Ok(())
}
