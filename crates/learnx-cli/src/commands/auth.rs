use crate::app::App;
use anyhow::Result;
use colored::Colorize;
use learnx_core::auth::{AuthStrategy, SignInWithPasswordParams};
use learnx_core::user::role_label;

pub async fn sign_in(app: &App, email: String, password: String) -> Result<()> {
    let user = app
        .auth()?
        .sign_in_with_password(SignInWithPasswordParams::new(email, password))
        .await?;
    println!(
        "{}",
        format!(
            "Signed in as {} <{}>",
            user.display_name(),
            user.email.as_deref().unwrap_or_default()
        )
        .green()
    );
    Ok(())
}

pub async fn sign_out(app: &App) -> Result<()> {
    app.auth()?.sign_out().await?;
    println!("{}", "Signed out".green());
    Ok(())
}

pub async fn whoami(app: &App) -> Result<()> {
    let user = app.guard().require_user().await?;
    println!("{}", user.display_name().bold());
    println!("  Email: {}", user.email.as_deref().unwrap_or_default());
    println!(
        "  Role:  {}",
        role_label(user.role.as_deref().unwrap_or_default())
    );
    Ok(())
}
