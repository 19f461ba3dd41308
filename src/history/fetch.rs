use chrono::{Days, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Asia::Taipei;
use url::Url;

use crate::core::{DateRange, TwClient, TwError};

/// Builds the chart URL for an inclusive date range.
///
/// `period2` is midnight after `range.end` in Taipei so the last day is included.
pub(crate) fn chart_url(
    client: &TwClient,
    qualified_symbol: &str,
    range: DateRange,
) -> Result<Url, TwError> {
    if range.is_inverted() {
        return Err(TwError::InvalidDates {
            start: range.start,
            end: range.end,
        });
    }
    let p1 = taipei_midnight(range.start)?;
    let day_after = range
        .end
        .checked_add_days(Days::new(1))
        .ok_or_else(|| TwError::Data(format!("end date out of range: {}", range.end)))?;
    let p2 = taipei_midnight(day_after)?;

    let mut url = client.base_chart().join(qualified_symbol)?;
    url.query_pairs_mut()
        .append_pair("period1", &p1.to_string())
        .append_pair("period2", &p2.to_string())
        .append_pair("interval", "1d")
        .append_pair("events", "div|split")
        .append_pair("includePrePost", "false");
    Ok(url)
}

pub(crate) async fn fetch_chart(
    client: &TwClient,
    qualified_symbol: &str,
    range: DateRange,
) -> Result<String, TwError> {
    let url = chart_url(client, qualified_symbol, range)?;
    tracing::debug!(%url, "requesting daily history");

    let resp = client.http().get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(TwError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    Ok(crate::core::net::get_text(resp, "history_chart", qualified_symbol).await?)
}

fn taipei_midnight(date: NaiveDate) -> Result<i64, TwError> {
    Taipei
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .single()
        .map(|dt| dt.timestamp())
        .ok_or_else(|| TwError::Data(format!("ambiguous local midnight for {date}")))
}
