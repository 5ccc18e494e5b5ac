use crate::app::App;
use crate::render::{Table, account_status_cell, page_footer};
use anyhow::Result;
use learnx_core::listing::AccountFilter;

pub struct AccountsArgs {
    pub filter: AccountFilter,
    /// One-based page number.
    pub page: usize,
    pub rows: Option<usize>,
}

pub async fn list(app: &App, args: AccountsArgs) -> Result<()> {
    app.guard().require_user().await?;

    let mut accounts = app.accounts()?;
    accounts.load().await?;
    accounts.apply_filter(args.filter);
    if let Some(rows) = args.rows {
        accounts.set_rows_per_page(rows);
    }
    accounts.set_page(args.page.saturating_sub(1));

    let mut table = Table::new(vec!["ID", "Name", "Email", "Role", "Status"]);
    for account in accounts.visible() {
        table.push(vec![
            account.id.as_str().into(),
            account.full_name.as_str().into(),
            account.email.as_str().into(),
            account.role.as_str().into(),
            account_status_cell(account.status),
        ]);
    }

    if table.is_empty() {
        println!("No accounts found.");
    } else {
        print!("{}", table);
    }
    println!(
        "{}",
        page_footer(
            accounts.pager().page,
            accounts.page_count(),
            accounts.filtered().len(),
            "accounts"
        )
    );
    Ok(())
}
