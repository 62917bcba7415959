//! Level fetcher: one HTTP request per call, abortable through [`FetchHandle`]

use super::api;
use super::navigator::{FetchRequest, FetchTicket};
use contracts::dashboards::d404_labour_summary::{AggregateItem, FetchError};
use leptos::task::spawn_local;
use web_sys::AbortController;

/// Cancellation handle of an in-flight level request
pub struct FetchHandle {
    controller: Option<AbortController>,
}

impl FetchHandle {
    /// Abort the request; its completion then reports [`FetchError::Cancelled`]
    pub fn cancel(&self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

/// Issue `request` and call `on_done` with its ticket once it settles
pub fn spawn_fetch<F>(request: FetchRequest, on_done: F) -> FetchHandle
where
    F: FnOnce(FetchTicket, Result<Vec<AggregateItem>, FetchError>) + 'static,
{
    let controller = match AbortController::new() {
        Ok(controller) => Some(controller),
        Err(err) => {
            log::warn!("d404: AbortController unavailable: {:?}", err);
            None
        }
    };
    let signal = controller.as_ref().map(|c| c.signal());
    let FetchRequest { ticket, query } = request;

    log::debug!(
        "d404: fetching {} #{} {}",
        ticket.level.plural(),
        ticket.seq,
        api::level_url(&query)
    );

    spawn_local(async move {
        let result = api::fetch_level(&query, signal.as_ref()).await;
        let aborted = signal.as_ref().is_some_and(|s| s.aborted());
        let result = if aborted {
            Err(FetchError::Cancelled)
        } else {
            result
        };
        on_done(ticket, result);
    });

    FetchHandle { controller }
}
