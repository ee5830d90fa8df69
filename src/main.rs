use actix_web::{post, web, App, HttpResponse, HttpServer, Responder};
use log::{error, info, warn};
use serde::Deserialize;
use url::Url;
use yt_channel_scraper::config::Config;
use yt_channel_scraper::pipeline::ChannelScraper;

#[derive(Debug, Deserialize)]
struct ScrapeRequest {
    /// Comma-separated list of channel URLs.
    ylink: String,
}

/// A submitted URL must be a well-formed absolute http(s) URL.
fn valid_channel_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(u) => matches!(u.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Scrape a batch of channel URLs, strictly sequentially, each against its
/// own browser session. One failing URL is logged and skipped; sibling
/// successes are still returned. The response body is the ordered record
/// array, offered as a downloadable `data.json`.
#[post("/scrape")]
async fn scrape(form: web::Form<ScrapeRequest>, cfg: web::Data<Config>) -> impl Responder {
    let urls: Vec<String> = form
        .ylink
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if urls.is_empty() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({"error": "no channel URLs submitted"}));
    }
    if let Some(bad) = urls.iter().find(|u| !valid_channel_url(u)) {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({"error": format!("invalid URL: {}", bad)}));
    }

    let mut records = Vec::new();
    let mut failed: Vec<String> = Vec::new();

    for url in urls {
        info!("scraping channel {}", url);
        let scraper = ChannelScraper::new(cfg.browser_config(), cfg.field_policy());
        let target = url.clone();
        match web::block(move || scraper.scrape(&target)).await {
            Ok(Ok(record)) => records.push(record),
            Ok(Err(e)) => {
                error!("scrape of {} failed: {}", url, e);
                failed.push(url);
            }
            Err(e) => {
                error!("scrape task for {} did not complete: {}", url, e);
                failed.push(url);
            }
        }
    }

    if records.is_empty() {
        return HttpResponse::InternalServerError()
            .json(serde_json::json!({"error": "all submitted URLs failed", "failed": failed}));
    }
    if !failed.is_empty() {
        warn!("{} URL(s) failed and were skipped: {:?}", failed.len(), failed);
    }

    match serde_json::to_string_pretty(&records) {
        Ok(body) => HttpResponse::Ok()
            .content_type("application/json")
            .insert_header(("Content-Disposition", "attachment; filename=data.json"))
            .body(body),
        Err(e) => {
            error!("failed to serialize records: {}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({"error": "serialization failure"}))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    log4rs::init_file("log4rs.yml", Default::default()).unwrap();

    let cfg = Config::load();
    let port = cfg.port;
    let data = web::Data::new(cfg);

    info!("starting channel scraper service on 127.0.0.1:{}", port);
    HttpServer::new(move || App::new().app_data(data.clone()).service(scrape))
        .bind(("127.0.0.1", port))?
        .run()
        .await
}
