//! REST Gateway
//!
//! Talks to a PostgREST endpoint (the Supabase REST API). The anon key goes
//! in both `apikey` and `Authorization: Bearer` headers.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response, StatusCode};

use super::Gateway;
use crate::config::GatewayConfig;
use crate::domain::{GatewayError, GatewayResult, NewTodo, Todo, TodoId, TodoPatch};

#[derive(Debug, Clone)]
pub struct RestGateway {
    client: Client,
    config: GatewayConfig,
}

impl RestGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self { client: Client::new(), config }
    }

    fn headers(&self) -> GatewayResult<HeaderMap> {
        let key = HeaderValue::from_str(&self.config.anon_key)
            .map_err(|e| GatewayError::Network(format!("invalid anon key header: {}", e)))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.config.anon_key))
            .map_err(|e| GatewayError::Network(format!("invalid anon key header: {}", e)))?;
        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        Ok(headers)
    }

    fn request(&self, method: reqwest::Method) -> GatewayResult<RequestBuilder> {
        Ok(self
            .client
            .request(method, self.config.table_url())
            .headers(self.headers()?))
    }

    async fn send(&self, request: RequestBuilder) -> GatewayResult<Response> {
        let response = request.send().await?;
        check_status(response).await
    }
}

async fn check_status(response: Response) -> GatewayResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, &body))
}

fn status_error(status: StatusCode, body: &str) -> GatewayError {
    GatewayError::Status {
        status: status.as_u16(),
        message: error_message(body, status.canonical_reason().unwrap_or("request failed")),
    }
}

/// `return=representation` answers an insert with the stored rows
fn inserted_row(rows: Vec<Todo>) -> GatewayResult<Todo> {
    rows.into_iter().next().ok_or(GatewayError::EmptyInsert)
}

/// PostgREST error bodies are JSON with a `message` field; fall back to the raw body
fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| {
            let body = body.trim();
            if body.is_empty() { fallback.to_string() } else { body.to_string() }
        })
}

/// `id=eq.{id}` filter value
fn eq_filter(id: &TodoId) -> String {
    format!("eq.{}", id)
}

/// `id=in.(a,b,c)` filter value; ids are quoted when they contain reserved characters
fn in_filter(ids: &[TodoId]) -> String {
    let list: Vec<String> = ids
        .iter()
        .map(|id| {
            let raw = id.as_str();
            if raw.contains([',', '(', ')', '"', ' ']) {
                format!("\"{}\"", raw.replace('\\', "\\\\").replace('"', "\\\""))
            } else {
                raw.to_string()
            }
        })
        .collect();
    format!("in.({})", list.join(","))
}

#[async_trait(?Send)]
impl Gateway for RestGateway {
    async fn insert(&self, record: &NewTodo) -> GatewayResult<Todo> {
        let request = self
            .request(reqwest::Method::POST)?
            .header("Prefer", "return=representation")
            .json(&[record]);
        inserted_row(self.send(request).await?.json().await?)
    }

    async fn select_all_newest_first(&self) -> GatewayResult<Vec<Todo>> {
        let request = self
            .request(reqwest::Method::GET)?
            .query(&[("select", "*"), ("order", "created_at.desc")]);
        Ok(self.send(request).await?.json().await?)
    }

    async fn update_by_id(&self, id: &TodoId, patch: &TodoPatch) -> GatewayResult<()> {
        let request = self
            .request(reqwest::Method::PATCH)?
            .query(&[("id", eq_filter(id))])
            .json(patch);
        self.send(request).await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: &TodoId) -> GatewayResult<()> {
        let request = self.request(reqwest::Method::DELETE)?.query(&[("id", eq_filter(id))]);
        self.send(request).await?;
        Ok(())
    }

    async fn delete_by_ids(&self, ids: &[TodoId]) -> GatewayResult<()> {
        if ids.is_empty() {
            return Ok(());
        }
        let request = self.request(reqwest::Method::DELETE)?.query(&[("id", in_filter(ids))]);
        self.send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> RestGateway {
        RestGateway::new(GatewayConfig::new("https://abc.supabase.co/", "anon-key"))
    }

    #[test]
    fn test_filters() {
        assert_eq!(eq_filter(&TodoId::new("42")), "eq.42");
        let ids = vec![TodoId::new("a1"), TodoId::new("b2")];
        assert_eq!(in_filter(&ids), "in.(a1,b2)");
        assert_eq!(in_filter(&[TodoId::new("x,y")]), "in.(\"x,y\")");
    }

    #[test]
    fn test_error_message_prefers_json_message() {
        let body = r#"{"code":"42501","message":"permission denied for table todos"}"#;
        assert_eq!(error_message(body, "Forbidden"), "permission denied for table todos");
        assert_eq!(error_message("", "Forbidden"), "Forbidden");
        assert_eq!(error_message("upstream timeout", "Bad Gateway"), "upstream timeout");
    }

    #[test]
    fn test_non_success_status_becomes_status_error() {
        let err = status_error(StatusCode::UNAUTHORIZED, r#"{"message":"Invalid API key"}"#);
        match err {
            GatewayError::Status { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("expected status error, got {:?}", other),
        }

        let err = status_error(StatusCode::SERVICE_UNAVAILABLE, "");
        assert!(matches!(
            err,
            GatewayError::Status { status: 503, ref message } if message == "Service Unavailable"
        ));
    }

    #[test]
    fn test_insert_takes_first_returned_row() {
        let rows: Vec<Todo> = serde_json::from_str(
            r#"[{"id":"7","title":"Write report","completed":false,"created_at":"2025-07-06T09:00:00Z","priority":"high","category":"업무"}]"#,
        )
        .expect("Failed to decode rows");
        let todo = inserted_row(rows).expect("Row should be returned");
        assert_eq!(todo.id, TodoId::new("7"));
        assert_eq!(todo.title, "Write report");

        assert!(matches!(inserted_row(Vec::new()), Err(GatewayError::EmptyInsert)));
    }

    #[test]
    fn test_requests_carry_auth_headers() {
        let request = gateway()
            .request(reqwest::Method::GET)
            .unwrap()
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .build()
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://abc.supabase.co/rest/v1/todos?select=*&order=created_at.desc"
        );
        assert_eq!(request.headers()["apikey"], "anon-key");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer anon-key");
    }

    #[test]
    fn test_delete_many_query_is_encoded() {
        let ids = vec![TodoId::new("a1"), TodoId::new("b2")];
        let request = gateway()
            .request(reqwest::Method::DELETE)
            .unwrap()
            .query(&[("id", in_filter(&ids))])
            .build()
            .unwrap();

        assert_eq!(request.url().query(), Some("id=in.%28a1%2Cb2%29"));
    }

    #[tokio::test]
    async fn test_delete_many_with_no_ids_skips_request() {
        // Unroutable host: any real request would fail
        let gateway = RestGateway::new(GatewayConfig::new("http://127.0.0.1:9", "anon-key"));
        assert!(gateway.delete_by_ids(&[]).await.is_ok());
    }
}
