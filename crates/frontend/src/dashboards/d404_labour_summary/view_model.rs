//! ViewModel for the Labour Summary dashboard
//!
//! Owns the navigator as a signal, executes its transitions (abort superseded
//! requests, spawn new ones) and turns failed fetches into a timed notification.

use super::fetcher::{self, FetchHandle};
use super::navigator::{
    Breadcrumb, DrilldownNavigator, FetchTicket, Outcome, Placeholder, Transition,
};
use contracts::dashboards::d404_labour_summary::{
    AggregateItem, DateFilter, FetchError, Level, NavigationError,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;

/// How long a fetch failure stays on screen
const NOTIFICATION_MS: u32 = 3000;

#[derive(Clone, Copy)]
pub struct LabourSummaryVm {
    pub navigator: RwSignal<DrilldownNavigator>,
    pub notification: RwSignal<Option<String>>,
    handles: StoredValue<HashMap<FetchTicket, FetchHandle>, LocalStorage>,
}

impl LabourSummaryVm {
    pub fn new(filter: DateFilter) -> Self {
        Self {
            navigator: RwSignal::new(DrilldownNavigator::new(filter)),
            notification: RwSignal::new(None),
            handles: StoredValue::new_local(HashMap::new()),
        }
    }

    // === Derived signals ===

    pub fn filter(&self) -> Signal<DateFilter> {
        let navigator = self.navigator;
        Signal::derive(move || navigator.with(|n| n.filter().clone()))
    }

    pub fn current_level(&self) -> Signal<Level> {
        let navigator = self.navigator;
        Signal::derive(move || navigator.with(|n| n.current_level()))
    }

    pub fn current_items(&self) -> Signal<Vec<AggregateItem>> {
        let navigator = self.navigator;
        Signal::derive(move || navigator.with(|n| n.current_items().to_vec()))
    }

    pub fn breadcrumbs(&self) -> Signal<Vec<Breadcrumb>> {
        let navigator = self.navigator;
        Signal::derive(move || navigator.with(|n| n.breadcrumbs()))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let navigator = self.navigator;
        Signal::derive(move || navigator.with(|n| n.is_loading()))
    }

    pub fn placeholder(&self) -> Signal<Option<Placeholder>> {
        let navigator = self.navigator;
        Signal::derive(move || navigator.with(|n| n.placeholder()))
    }

    /// Id of the skill pinned at the terminal level, for highlighting
    pub fn selected_skill(&self) -> Signal<Option<String>> {
        let navigator = self.navigator;
        Signal::derive(move || {
            navigator.with(|n| n.selected_at(Level::Skill).map(|s| s.id.clone()))
        })
    }

    pub fn is_path_complete(&self) -> Signal<bool> {
        let navigator = self.navigator;
        Signal::derive(move || navigator.with(|n| n.is_path_complete()))
    }

    // === Commands ===

    /// Fetch the root level (call once on mount)
    pub fn mount(&self) {
        self.run("mount", |n| n.mount());
    }

    pub fn select(&self, item: AggregateItem) {
        self.run("select", move |n| n.select(item));
    }

    pub fn breadcrumb_click(&self, depth: usize) {
        self.run("breadcrumb", move |n| n.breadcrumb_click(depth));
    }

    pub fn set_filter(&self, filter: DateFilter) {
        self.run("filter", move |n| n.filter_change(filter));
    }

    pub fn retry(&self) {
        self.run("retry", |n| n.retry());
    }

    /// Abort everything in flight; later responses are discarded
    pub fn teardown(&self) {
        if let Some(tickets) = self.navigator.try_update(|n| n.teardown()) {
            for ticket in tickets {
                self.cancel(ticket);
            }
        }
        self.handles.try_update_value(|handles| {
            for (_, handle) in handles.drain() {
                handle.cancel();
            }
        });
    }

    pub fn dismiss_notification(&self) {
        self.notification.set(None);
    }

    // === Internals ===

    fn run(
        &self,
        action: &str,
        op: impl FnOnce(&mut DrilldownNavigator) -> Result<Transition, NavigationError>,
    ) {
        match self.navigator.try_update(op) {
            Some(Ok(transition)) => self.apply(transition),
            Some(Err(err)) => log::warn!("d404: {} rejected: {}", action, err),
            None => {}
        }
    }

    fn apply(&self, transition: Transition) {
        for ticket in transition.cancel {
            self.cancel(ticket);
        }
        if let Some(request) = transition.fetch {
            let ticket = request.ticket;
            let vm = *self;
            let handle = fetcher::spawn_fetch(request, move |ticket, result| {
                vm.on_fetched(ticket, result)
            });
            self.handles.update_value(|handles| {
                handles.insert(ticket, handle);
            });
        }
    }

    fn cancel(&self, ticket: FetchTicket) {
        let handle = self
            .handles
            .try_update_value(|handles| handles.remove(&ticket))
            .flatten();
        if let Some(handle) = handle {
            log::debug!("d404: cancelling {} #{}", ticket.level.plural(), ticket.seq);
            handle.cancel();
        }
    }

    fn on_fetched(&self, ticket: FetchTicket, result: Result<Vec<AggregateItem>, FetchError>) {
        self.handles.try_update_value(|handles| {
            handles.remove(&ticket);
        });

        match self.navigator.try_update(|n| n.complete(ticket, result)) {
            Some(Outcome::Applied { level, count }) => {
                log::debug!("d404: loaded {} {} #{}", count, level.plural(), ticket.seq);
            }
            Some(Outcome::Failed {
                level,
                notification,
            }) => {
                log::error!("d404: {} fetch #{} failed: {}", level.plural(), ticket.seq, notification);
                self.notify(notification);
            }
            Some(Outcome::Discarded) | None => {
                log::debug!("d404: discarded {} #{}", ticket.level.plural(), ticket.seq);
            }
        }
    }

    fn notify(&self, message: String) {
        let notification = self.notification;
        notification.set(Some(message.clone()));
        // Clear notification after 3 seconds unless a newer one replaced it
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTIFICATION_MS).await;
            if notification.try_get_untracked().flatten().as_deref() == Some(message.as_str()) {
                let _ = notification.try_set(None);
            }
        });
    }
}
