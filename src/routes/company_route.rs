use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::services::scrape_company_record;

#[derive(Deserialize)]
pub struct ScrapeCompanyBody {
    url: Option<String>,
}

#[post("/scrape_linkedin_company")]
async fn scrape_linkedin_company(body: web::Json<ScrapeCompanyBody>) -> HttpResponse {
    let url = match body.url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => return HttpResponse::BadRequest().json(json!({ "error": "URL is required" })),
    };

    // Fetch failures come back as an error-shaped body, still 200; callers
    // branch on the presence of the error key
    let outcome = scrape_company_record(url).await;
    HttpResponse::Ok().json(outcome)
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use super::scrape_linkedin_company;

    #[actix_web::test]
    async fn missing_url_is_a_bad_request() {
        let app = test::init_service(App::new().service(scrape_linkedin_company)).await;

        let req = test::TestRequest::post()
            .uri("/scrape_linkedin_company")
            .set_json(json!({}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "error": "URL is required" }));
    }

    #[actix_web::test]
    async fn empty_url_is_a_bad_request() {
        let app = test::init_service(App::new().service(scrape_linkedin_company)).await;

        let req = test::TestRequest::post()
            .uri("/scrape_linkedin_company")
            .set_json(json!({ "url": "" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "error": "URL is required" }));
    }
}
