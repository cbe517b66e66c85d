use school_panel::api::{ApiClient, DEFAULT_BASE_URL};
use school_panel::page::{PagePolicy, StudentsPage};
use std::env;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let base_url = env::var("PANEL_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let api = ApiClient::new(&base_url)?;
    let mut page = StudentsPage::new(api, PagePolicy::list_page());

    if let Some(nav) = page.init().await {
        eprintln!("not authenticated, redirecting to {}", nav.location());
        std::process::exit(1);
    }
    if let Some(name) = page.user_display_name() {
        info!("signed in as {name}");
    }

    page.begin_loading();
    println!("{}", page.render());
    page.load_students().await;
    println!("{}", page.render());
    info!("{}", page.student_count_label());

    Ok(())
}
