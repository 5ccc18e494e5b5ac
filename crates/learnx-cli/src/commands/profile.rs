use crate::app::App;
use anyhow::{Result, bail};
use colored::Colorize;
use learnx_core::user::{UserProfile, role_label};

pub async fn show(app: &App) -> Result<()> {
    let user = app.guard().require_user().await?;
    print_profile(&user);
    Ok(())
}

pub async fn update(app: &App, full_name: Option<String>, email: Option<String>) -> Result<()> {
    app.guard().require_user().await?;
    if full_name.is_none() && email.is_none() {
        bail!("Nothing to update: pass --full-name and/or --email");
    }

    let profile = app.profile();
    let mut form = profile.form().await?;
    if let Some(full_name) = full_name {
        form.full_name = full_name;
    }
    if let Some(email) = email {
        form.email = email;
    }
    let saved = profile.save(&form).await?;

    println!("{}", "Profile details saved".green());
    print_profile(&saved);
    Ok(())
}

fn print_profile(user: &UserProfile) {
    println!("{}", user.display_name().bold());
    println!("  Email:  {}", user.email.as_deref().unwrap_or_default());
    println!(
        "  Role:   {}",
        role_label(user.role.as_deref().unwrap_or_default())
    );
    if let Some(avatar) = user.avatar_url.as_deref().filter(|a| !a.is_empty()) {
        println!("  Avatar: {}", avatar);
    }
}
