use crate::shared::api_utils::api_url;
use contracts::dashboards::d404_labour_summary::{
    decode_level_items, AggregateItem, FetchError, LevelQuery,
};
use gloo_net::http::Request;
use web_sys::AbortSignal;

const API_BASE: &str = "/api/labour";

/// Full URL of a level query
pub fn level_url(query: &LevelQuery) -> String {
    api_url(&format!("{}{}", API_BASE, query.relative_url()))
}

/// Получить список агрегатов уровня
pub async fn fetch_level(
    query: &LevelQuery,
    signal: Option<&AbortSignal>,
) -> Result<Vec<AggregateItem>, FetchError> {
    let url = level_url(query);

    let response = Request::get(&url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Http {
            status: response.status(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    Ok(decode_level_items(query.level(), &body)?)
}
