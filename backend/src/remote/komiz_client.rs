use serde::Serialize;
use serde::de::DeserializeOwned;

const DEFAULT_API_URL: &str = "https://api.komiz.dev/v1";

pub fn api_base_url() -> String {
    std::env::var("KOMIZ_API_URL").unwrap_or(DEFAULT_API_URL.to_string())
}

/// GET `path` with `params` as the query string, deserializing the JSON body.
/// Non-2xx statuses become errors carrying the response body.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    params: &[(&str, String)],
) -> anyhow::Result<T> {
    let url = format!("{}{}", api_base_url(), path);
    let t0 = std::time::Instant::now();
    let client = reqwest::Client::new();
    let response = client.get(&url).query(params).send().await?;
    let status = response.status();
    let body = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        tracing::error!(%url, %status, "remote fetch failed");
        anyhow::bail!("remote api error: {} {}: {}", status, path, body);
    }
    tracing::info!(
        %path,
        %status,
        bytes = body.len(),
        ms = t0.elapsed().as_millis() as u64,
        "remote fetch"
    );
    Ok(serde_json::from_str(&body)?)
}

/// GET with a bearer token. Returns `Ok(None)` when the remote rejects the
/// token (4xx) so callers can tell a stale session from a transport failure.
pub async fn get_json_with_token<T: DeserializeOwned>(
    path: &str,
    token: &str,
) -> anyhow::Result<Option<T>> {
    let url = format!("{}{}", api_base_url(), path);
    let client = reqwest::Client::new();
    let response = client.get(&url).bearer_auth(token).send().await?;
    let status = response.status();
    let body = response.text().await?;
    if status.is_client_error() {
        tracing::info!(%path, %status, "remote rejected token");
        return Ok(None);
    }
    if status.is_server_error() {
        anyhow::bail!("remote api error: {} {}: {}", status, path, body);
    }
    Ok(Some(serde_json::from_str(&body)?))
}

/// POST a form body, deserializing the JSON response.
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    form: &[(&str, String)],
) -> anyhow::Result<T> {
    let url = format!("{}{}", api_base_url(), path);
    let client = reqwest::Client::new();
    let response = client.post(&url).form(form).send().await?;
    let status = response.status();
    let body = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        tracing::error!(%url, %status, "remote post failed");
        anyhow::bail!("remote api error: {} {}: {}", status, path, body);
    }
    Ok(serde_json::from_str(&body)?)
}

/// POST a JSON body, deserializing the JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    payload: &B,
) -> anyhow::Result<T> {
    let url = format!("{}{}", api_base_url(), path);
    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .header("content-type", "application/json")
        .body(serde_json::to_string(payload)?)
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        tracing::error!(%url, %status, "remote post failed");
        anyhow::bail!("remote api error: {} {}: {}", status, path, body);
    }
    Ok(serde_json::from_str(&body)?)
}
