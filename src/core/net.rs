/// Read the response body as text, logging its size for the given endpoint.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    endpoint: &str,
    symbol: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;
    tracing::debug!(endpoint, symbol, bytes = text.len(), "response body read");
    Ok(text)
}
