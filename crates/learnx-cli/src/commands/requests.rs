use crate::app::App;
use crate::render::{Table, avatar_label, page_footer, request_status_cell};
use anyhow::Result;
use colored::Colorize;
use learnx_core::role_request::RoleDecision;
use learnx_core::user::role_label;

pub async fn list(app: &App, page: usize, rows: Option<usize>) -> Result<()> {
    app.guard().require_user().await?;

    let mut permissions = app.permissions()?;
    permissions.load().await?;
    if let Some(rows) = rows {
        permissions.set_rows_per_page(rows);
    }
    permissions.set_page(page.saturating_sub(1));

    let mut table = Table::new(vec![
        "ID", "User", "Email", "Old role", "New role", "Status", "Created at",
    ]);
    for request in permissions.visible() {
        table.push(vec![
            request.id.to_string().into(),
            avatar_label(&request.user.initial(), &request.user.full_name).into(),
            request.user.email.as_str().into(),
            role_label(&request.old_role).into(),
            role_label(&request.new_role).into(),
            request_status_cell(request.status),
            request.created_at.display().into(),
        ]);
    }

    if table.is_empty() {
        println!("No role requests found.");
    } else {
        print!("{}", table);
    }
    println!(
        "{}",
        page_footer(
            permissions.pager().page,
            permissions.page_count(),
            permissions.requests().len(),
            "requests"
        )
    );
    Ok(())
}

pub async fn decide(app: &App, id: i64, decision: RoleDecision) -> Result<()> {
    app.guard().require_user().await?;

    let mut permissions = app.permissions()?;
    permissions.load().await?;
    let updated = match decision {
        RoleDecision::Approve => permissions.accept(id).await?,
        RoleDecision::Reject => permissions.reject(id).await?,
    };

    println!(
        "{}",
        format!(
            "Request {} for {} is now {} ({} -> {})",
            updated.id,
            updated.user.full_name,
            updated.status,
            role_label(&updated.old_role),
            role_label(&updated.new_role)
        )
        .green()
    );
    Ok(())
}
