use std::time::Duration;

use fake_user_agent::get_rua;
use rand::Rng;
use reqwest::header::USER_AGENT;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MIN_DELAY_SECS: f64 = 1.0;
const MAX_DELAY_SECS: f64 = 5.0;

pub enum FetchOutcome {
    Success { body: String, status_code: u16 },
    HttpError { status_code: u16 },
    NetworkError { message: String },
}

/// One best-effort GET of the given url. Sleeps a random 1-5 seconds first so
/// consecutive calls don't form a burst pattern, and sends a randomized
/// browser User-Agent. No retries.
pub async fn fetch_page(url: &str) -> FetchOutcome {
    let user_agent = get_rua();

    let delay = rand::thread_rng().gen_range(MIN_DELAY_SECS..=MAX_DELAY_SECS);
    tokio::time::sleep(Duration::from_secs_f64(delay)).await;

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap();

    match client.get(url).header(USER_AGENT, user_agent).send().await {
        Ok(res) => {
            let status_code = res.status().as_u16();
            if !res.status().is_success() {
                log::error!("Fetch of {} returned status code {}", url, status_code);
                return FetchOutcome::HttpError { status_code };
            }

            match res.text().await {
                Ok(body) => FetchOutcome::Success { body, status_code },
                Err(e) => {
                    log::error!("Failed to read response body from {}: {:?}", url, e);
                    FetchOutcome::NetworkError {
                        message: e.to_string(),
                    }
                }
            }
        }
        Err(e) => {
            log::error!("Error fetching data: {:?}", e);
            FetchOutcome::NetworkError {
                message: e.to_string(),
            }
        }
    }
}
