use crate::app::App;
use crate::render::{Cell, Table};
use anyhow::{Result, bail};
use colored::{Color, Colorize};
use learnx_core::navigation::{NAV_ITEMS, NavItem, active_item, nav_item};

/// Resolves `--current` given either a route or an entry key.
fn resolve_current(current: &str) -> Option<&'static NavItem> {
    active_item(current).or_else(|| nav_item(current))
}

pub fn show(app: &App, current: Option<&str>) -> Result<()> {
    let active = match current {
        Some(current) => match resolve_current(current) {
            Some(item) => Some(item),
            None => bail!("'{}' is not a dashboard route or entry", current),
        },
        None => None,
    };

    let site = app.config()?.site;
    println!("{}", site.name.bold());
    if !site.description.is_empty() {
        println!("{}", site.description);
    }
    println!("Theme {}  Logo {}", site.theme_color, site.logo);

    let mut table = Table::new(vec!["", "Key", "Title", "Route", "Icon"]);
    for item in NAV_ITEMS.iter() {
        let is_active = active.is_some_and(|a| a.key == item.key);
        let marker = if is_active {
            Cell::colored(">", Color::Cyan)
        } else {
            "".into()
        };
        table.push(vec![
            marker,
            item.key.into(),
            item.title.into(),
            item.href.into(),
            item.icon.into(),
        ]);
    }
    print!("{}", table);
    Ok(())
}
