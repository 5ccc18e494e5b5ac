use crate::app::App;
use anyhow::Result;
use colored::Colorize;

pub fn init(app: &App, force: bool) -> Result<()> {
    let (path, written) = app.config_service.init(force)?;
    if written {
        println!("{} {}", "Wrote".green(), path.display());
    } else {
        println!(
            "{} already exists; use --force to overwrite",
            path.display()
        );
    }
    Ok(())
}

pub fn show(app: &App) -> Result<()> {
    let config = app.config()?;
    println!("# {}", app.config_service.config_path().display());
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
