//! Most-recent single data point from the TWSE JSON endpoint.

mod wire;

use crate::core::{RealtimeSnapshot, TwClient, TwError};
use reqwest::header::USER_AGENT;
use wire::{TwseEnvelope, cell_text};

/// A builder for the realtime snapshot request.
pub struct RealtimeRequest {
    client: TwClient,
    symbol: String,
}

impl RealtimeRequest {
    pub fn new(client: &TwClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
        }
    }

    /// Executes the request.
    ///
    /// Returns `Ok(None)` when the payload has no `data` rows.
    pub async fn fetch(self) -> Result<Option<RealtimeSnapshot>, TwError> {
        let mut url = self.client.base_realtime().clone();
        url.query_pairs_mut()
            .append_pair("response", "json")
            .append_pair("stockNo", &self.symbol);
        tracing::debug!(%url, "requesting realtime snapshot");

        let resp = self
            .client
            .http()
            .get(url.clone())
            .header(USER_AGENT, self.client.user_agent())
            .timeout(self.client.realtime_timeout())
            .send()
            .await?;
        if resp.status() != reqwest::StatusCode::OK {
            return Err(TwError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = crate::core::net::get_text(resp, "realtime", &self.symbol).await?;
        let snap = parse_snapshot(&body)?;

        if let Some(s) = snap.as_ref()
            && s.symbol != self.symbol
        {
            tracing::warn!(
                requested = %self.symbol,
                reported = %s.symbol,
                "realtime row is for a different symbol"
            );
        }
        Ok(snap)
    }
}

/// Takes the first row of the payload's `data` array as the snapshot.
pub fn parse_snapshot(body: &str) -> Result<Option<RealtimeSnapshot>, TwError> {
    let env: TwseEnvelope = serde_json::from_str(body)
        .map_err(|e| TwError::Data(format!("json parse error: {e}")))?;

    let Some(first) = env.data.and_then(|rows| rows.into_iter().next()) else {
        tracing::debug!(stat = ?env.stat, "realtime payload has no data rows");
        return Ok(None);
    };
    if first.is_empty() {
        return Ok(None);
    }

    let raw_fields: Vec<String> = first.iter().map(cell_text).collect();
    let [symbol, as_of, ..] = raw_fields.as_slice() else {
        return Err(TwError::Data(format!(
            "realtime row has {} field(s), expected at least 2",
            raw_fields.len()
        )));
    };

    Ok(Some(RealtimeSnapshot {
        symbol: symbol.clone(),
        as_of: as_of.clone(),
        field_names: env.fields.unwrap_or_default(),
        raw_fields,
    }))
}
