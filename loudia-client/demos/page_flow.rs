//! Demo: the website's page-load and submit flow against a live Table
//! API.
//!
//! ```bash
//! LOUDIA_API_URL=http://localhost:8080 cargo run --example page_flow
//! ```

use loudia_client::{
    form, ClientConfig, NewsLoader, NewsPanel, Notifier, ReservationClient, ReservationForm,
    TracingSink,
};
use std::sync::Arc;

/// Panel that prints entries the way the news grid lays them out.
struct StdoutPanel;

impl NewsPanel for StdoutPanel {
    fn clear(&mut self) {}

    fn push(&mut self, display_date: &str, title: &str, content: &str) {
        println!("{display_date}  {title}");
        println!("    {content}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base_url =
        std::env::var("LOUDIA_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let config = ClientConfig::new(base_url);
    let http = Arc::new(config.build_http_client()?);

    // Page load: fetch the front-page news.
    let mut panel = StdoutPanel;
    let loader = NewsLoader::new(Arc::clone(&http), config.news_limit);
    let rendered = loader.load(&mut panel).await;
    println!("news entries rendered: {rendered}");

    // Submit a reservation for the earliest selectable date.
    let date = form::min_reservation_date(chrono::Utc::now().date_naive());
    let mut reservation = ReservationForm {
        name: "山田太郎".to_string(),
        phone: "090-1234-5678".to_string(),
        email: "taro@example.com".to_string(),
        guests: "2".to_string(),
        date: date.to_string(),
        time: "18:00".to_string(),
        message: "窓際の席を希望します".to_string(),
    };

    let client = ReservationClient::new(http, Notifier::new(TracingSink));
    let outcome = client.handle_submit(&mut reservation).await;
    println!("submit outcome: {outcome:?}");

    Ok(())
}
