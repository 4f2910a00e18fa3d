use anyhow::Context;

use ideaboard_app::{App, AppConfig};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    ideaboard_observability::init_with_default(&config.log_filter);

    let app = App::bootstrap(&config);
    match app.current_user() {
        Some(user) => tracing::info!(identity_id = %user.id, email = %user.email, "resumed session"),
        None => tracing::info!("no saved session"),
    }

    let dashboard = serde_json::to_string_pretty(&app.dashboard())
        .context("failed to encode dashboard")?;
    println!("{dashboard}");

    Ok(())
}
