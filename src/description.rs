//! Best-effort job description scraping.
//!
//! Pages are fetched directly or through a URL-prefix proxy, and the text of
//! the first selector that matches anything is returned.

use crate::errors::AppError;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

const DESCRIPTION_SELECTORS: &[&str] = &[
    "[data-testid=\"job-description\"]",
    ".job-description",
    "#job-description",
    ".description",
    "article",
    ".posting-requirements",
    "[role=\"main\"]",
    ".job-details",
    ".details-info",
    "[jsname]",
    "[jsname=\"jobDescriptionText\"]",
    "[jsname=\"description\"]",
    ".NgUYpe",
    // Google Jobs
    ".vDEn6d",
    ".HBvzbc",
    ".WbZuDe",
];

pub async fn scrape_job_description(
    client: &Client,
    proxy: Option<&str>,
    raw_url: &str,
) -> Result<String, AppError> {
    let url = parse_job_url(raw_url)
        .ok_or_else(|| AppError::bad_request(failure("Invalid URL provided")))?;

    let final_url = if is_google_redirect(&url) {
        match client.get(url.clone()).send().await {
            Ok(response) => response.url().clone(),
            Err(err) => {
                warn!("failed to follow redirect for {url}: {err}");
                url
            }
        }
    } else {
        url
    };

    let fetch_url = match proxy {
        Some(prefix) => format!("{prefix}{}", encode_component(final_url.as_str())),
        None => final_url.to_string(),
    };

    let response = client
        .get(fetch_url.as_str())
        .send()
        .await
        .map_err(|err| AppError::bad_gateway(failure(err)))?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::bad_gateway(failure(format!(
            "HTTP error! status: {}",
            status.as_u16()
        ))));
    }
    let html = response
        .text()
        .await
        .map_err(|err| AppError::bad_gateway(failure(err)))?;

    extract_description(&html)
        .ok_or_else(|| AppError::bad_gateway(failure("Could not find job description content")))
}

pub fn extract_description(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for raw in DESCRIPTION_SELECTORS {
        let Ok(selector) = Selector::parse(raw) else {
            continue;
        };
        let texts: Vec<String> = document
            .select(&selector)
            .map(|element| element.text().collect::<String>())
            .collect();
        if texts.is_empty() {
            continue;
        }

        let content = collapse_whitespace(&texts.join("\n\n"));
        return (!content.is_empty()).then_some(content);
    }

    None
}

fn parse_job_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

fn is_google_redirect(url: &Url) -> bool {
    let host = url.host_str().unwrap_or_default();
    host == "g.co" || host.ends_with(".g.co") || url.as_str().contains("google.com/search")
}

fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn failure(reason: impl std::fmt::Display) -> String {
    format!("Failed to load job description: {reason}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, extract::Query, response::Html as HtmlResponse, routing::get};
    use std::collections::HashMap;

    const POSTING: &str = r#"<html><body>
        <nav>Jobs | Companies</nav>
        <div class="job-description">
            <h2>About   the role</h2>
            <p>Build  reliable
               services.</p>
        </div>
    </body></html>"#;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn extracts_first_matching_selector_and_collapses_whitespace() {
        let text = extract_description(POSTING).unwrap();
        assert_eq!(text, "About the role Build reliable services.");
    }

    #[test]
    fn earlier_selectors_win_over_later_ones() {
        let html = r#"<article>Article body</article>
            <div data-testid="job-description">Primary</div>"#;
        assert_eq!(extract_description(html).unwrap(), "Primary");
    }

    #[test]
    fn pages_without_known_containers_yield_nothing() {
        assert_eq!(extract_description("<html><body><p>Hello</p></body></html>"), None);
        assert_eq!(extract_description("<div class=\"description\">   </div>"), None);
    }

    #[test]
    fn google_short_links_are_detected() {
        assert!(is_google_redirect(&Url::parse("https://g.co/kgs/abc").unwrap()));
        assert!(is_google_redirect(
            &Url::parse("https://www.google.com/search?q=rust+jobs").unwrap()
        ));
        assert!(!is_google_redirect(&Url::parse("https://jobs.example/1").unwrap()));
    }

    #[tokio::test]
    async fn invalid_urls_are_rejected_before_fetching() {
        let client = Client::new();
        let err = scrape_job_description(&client, None, "ftp://example.com/job")
            .await
            .unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Failed to load job description: Invalid URL provided");
    }

    #[tokio::test]
    async fn fetches_directly_and_through_proxy() {
        let router = Router::new()
            .route("/job", get(|| async { HtmlResponse(POSTING) }))
            .route(
                "/proxy",
                get(|Query(params): Query<HashMap<String, String>>| async move {
                    match params.get("url") {
                        Some(target) if target.ends_with("/job") => HtmlResponse(POSTING),
                        _ => HtmlResponse("<p>nothing</p>"),
                    }
                }),
            );
        let base = serve(router).await;
        let client = Client::new();

        let direct = scrape_job_description(&client, None, &format!("{base}/job"))
            .await
            .unwrap();
        assert_eq!(direct, "About the role Build reliable services.");

        let proxy = format!("{base}/proxy?url=");
        let proxied = scrape_job_description(&client, Some(&proxy), "https://jobs.example/job")
            .await
            .unwrap();
        assert_eq!(proxied, direct);
    }

    #[tokio::test]
    async fn missing_content_is_a_gateway_error() {
        let router = Router::new().route("/empty", get(|| async { HtmlResponse("<p>hi</p>") }));
        let base = serve(router).await;

        let err = scrape_job_description(&Client::new(), None, &format!("{base}/empty"))
            .await
            .unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_GATEWAY);
        assert!(err.message.contains("Could not find job description content"));
    }
}
