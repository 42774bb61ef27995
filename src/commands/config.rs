use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::Defaults;

pub fn run(defaults: &Defaults) -> Result<()> {
    let config_path = Defaults::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Output:  {}", defaults.output_dir().display());

    println!();
    println!("{}", "Defaults".bold());
    let rendered = defaults.to_toml()?;
    if rendered.trim().is_empty() {
        println!("  {}", "(none set)".dimmed());
    } else {
        for line in rendered.lines() {
            println!("  {}", line);
        }
    }

    Ok(())
}
