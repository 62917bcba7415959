//! Drill-down navigator for the labour summary
//!
//! Pure state machine, no Leptos or browser types. Every transition returns a
//! [`Transition`] telling the driver which requests to abort and which one to issue;
//! responses come back through [`DrilldownNavigator::complete`], which commits only
//! the latest ticket of a level slot.

use contracts::dashboards::d404_labour_summary::{
    AggregateItem, DateFilter, FetchError, Level, LevelQuery, NavigationError, Selection,
};

/// Identifies one issued fetch; `seq` grows monotonically per navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub level: Level,
    pub seq: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub query: LevelQuery,
}

/// Side effects the driver has to perform after a transition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transition {
    pub cancel: Vec<FetchTicket>,
    pub fetch: Option<FetchRequest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Result of committing a response
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied { level: Level, count: usize },
    /// Superseded, cancelled or torn down; never shown to the user
    Discarded,
    Failed { level: Level, notification: String },
}

/// Why the displayed list is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    NoFilter,
    Empty(Level),
    Failed(Level),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumb {
    pub label: String,
    /// Path length after clicking this crumb
    pub depth: usize,
    /// Level of the pinned selection, None for the root crumb
    pub level: Option<Level>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
struct LevelSlot {
    items: Vec<AggregateItem>,
    status: SlotStatus,
    pending: Option<FetchTicket>,
}

impl LevelSlot {
    fn clear(&mut self) -> Option<FetchTicket> {
        self.items.clear();
        self.status = SlotStatus::Idle;
        self.pending.take()
    }

    fn is_filled_or_pending(&self) -> bool {
        matches!(self.status, SlotStatus::Loaded | SlotStatus::Loading)
    }
}

#[derive(Debug, Clone)]
pub struct DrilldownNavigator {
    path: Vec<Selection>,
    slots: [LevelSlot; Level::COUNT],
    filter: DateFilter,
    next_seq: u64,
}

impl DrilldownNavigator {
    /// Empty navigator; nothing is fetched until [`Self::mount`]
    pub fn new(filter: DateFilter) -> Self {
        Self {
            path: Vec::new(),
            slots: Default::default(),
            filter,
            next_seq: 0,
        }
    }

    // === Queries ===

    pub fn path(&self) -> &[Selection] {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn filter(&self) -> &DateFilter {
        &self.filter
    }

    /// Level whose list is displayed; stays at Skill once a skill is selected
    pub fn current_level(&self) -> Level {
        Level::from_index(self.depth()).unwrap_or(Level::Skill)
    }

    pub fn current_items(&self) -> &[AggregateItem] {
        self.items(self.current_level())
    }

    pub fn items(&self, level: Level) -> &[AggregateItem] {
        &self.slots[level.index()].items
    }

    pub fn status(&self, level: Level) -> SlotStatus {
        self.slots[level.index()].status
    }

    pub fn is_loading(&self) -> bool {
        self.status(self.current_level()) == SlotStatus::Loading
    }

    /// The only state without a next level to drill into
    pub fn is_path_complete(&self) -> bool {
        self.path.last().is_some_and(|s| s.level.is_terminal())
    }

    pub fn selected_at(&self, level: Level) -> Option<&Selection> {
        self.path.get(level.index())
    }

    /// Root crumb plus one per selection; only the deepest is active
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let depth = self.depth();
        let mut crumbs = Vec::with_capacity(depth + 1);
        crumbs.push(Breadcrumb {
            label: Level::Project.title().to_string(),
            depth: 0,
            level: None,
            is_active: depth == 0,
        });
        for (i, selection) in self.path.iter().enumerate() {
            crumbs.push(Breadcrumb {
                label: selection.name.clone(),
                depth: i + 1,
                level: Some(selection.level),
                is_active: i + 1 == depth,
            });
        }
        crumbs
    }

    /// None while there is something to show or a request is in flight
    pub fn placeholder(&self) -> Option<Placeholder> {
        let level = self.current_level();
        if !self.current_items().is_empty() || self.is_loading() {
            return None;
        }
        if !self.filter.is_complete() {
            return Some(Placeholder::NoFilter);
        }
        match self.status(level) {
            SlotStatus::Failed => Some(Placeholder::Failed(level)),
            _ => Some(Placeholder::Empty(level)),
        }
    }

    // === Transitions ===

    /// Initial fetch of the root level under the current filter
    pub fn mount(&mut self) -> Result<Transition, NavigationError> {
        let filter = self.filter.clone();
        self.filter_change(filter)
    }

    /// Pin `item` at the current level and fetch its children
    pub fn select(&mut self, item: AggregateItem) -> Result<Transition, NavigationError> {
        if self.is_path_complete() {
            return Err(NavigationError::PathComplete);
        }
        let current = self.current_level();
        if item.level != current {
            return Err(NavigationError::LevelMismatch {
                current,
                selected: item.level,
            });
        }
        if !self.current_items().iter().any(|i| i.id == item.id) {
            return Err(NavigationError::UnknownItem {
                level: current,
                id: item.id,
            });
        }

        self.path.push(item);
        let mut transition = Transition {
            cancel: self.clear_deeper_than(current),
            fetch: None,
        };
        if let Some(child) = current.child() {
            self.issue_fetch(child, &mut transition)?;
        }
        Ok(transition)
    }

    /// Walk back to `target_depth`; cached data of that level is reused
    pub fn breadcrumb_click(&mut self, target_depth: usize) -> Result<Transition, NavigationError> {
        let depth = self.depth();
        if target_depth >= depth {
            return Err(NavigationError::ActiveCrumb {
                target: target_depth,
                depth,
            });
        }

        self.path.truncate(target_depth);
        let level = self.current_level();
        let mut transition = Transition {
            cancel: self.clear_deeper_than(level),
            fetch: None,
        };
        if !self.slots[level.index()].is_filled_or_pending() {
            self.issue_fetch(level, &mut transition)?;
        }
        Ok(transition)
    }

    /// New filter: drop the whole path and start again from the root
    pub fn filter_change(&mut self, filter: DateFilter) -> Result<Transition, NavigationError> {
        let mut transition = Transition {
            cancel: self.clear_all(),
            fetch: None,
        };
        self.filter = filter;
        self.issue_fetch(Level::Project, &mut transition)?;
        Ok(transition)
    }

    /// Re-issue the fetch of the displayed level after a failure
    pub fn retry(&mut self) -> Result<Transition, NavigationError> {
        let level = self.current_level();
        let mut transition = Transition::default();
        if self.status(level) == SlotStatus::Failed {
            self.issue_fetch(level, &mut transition)?;
        }
        Ok(transition)
    }

    /// Commit a response; only the pending ticket of its slot is accepted
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<AggregateItem>, FetchError>,
    ) -> Outcome {
        let slot = &mut self.slots[ticket.level.index()];
        if slot.pending != Some(ticket) {
            return Outcome::Discarded;
        }
        slot.pending = None;

        match result {
            Ok(items) => {
                let count = items.len();
                slot.items = items;
                slot.status = SlotStatus::Loaded;
                Outcome::Applied {
                    level: ticket.level,
                    count,
                }
            }
            Err(err) if err.is_cancelled() => {
                slot.clear();
                Outcome::Discarded
            }
            Err(err) => {
                slot.items.clear();
                slot.status = SlotStatus::Failed;
                Outcome::Failed {
                    level: ticket.level,
                    notification: format!("Failed to load {}: {}", ticket.level.plural(), err),
                }
            }
        }
    }

    /// Forget everything; returned tickets must be aborted by the driver
    pub fn teardown(&mut self) -> Vec<FetchTicket> {
        self.clear_all()
    }

    // === Internals ===

    fn clear_deeper_than(&mut self, level: Level) -> Vec<FetchTicket> {
        self.slots[level.index() + 1..]
            .iter_mut()
            .filter_map(LevelSlot::clear)
            .collect()
    }

    fn clear_all(&mut self) -> Vec<FetchTicket> {
        self.path.clear();
        self.slots.iter_mut().filter_map(LevelSlot::clear).collect()
    }

    fn issue_fetch(
        &mut self,
        level: Level,
        transition: &mut Transition,
    ) -> Result<(), NavigationError> {
        if !self.filter.is_complete() {
            return Ok(());
        }
        let query = LevelQuery::new(
            level,
            self.path[..level.index()].to_vec(),
            self.filter.clone(),
        )?;

        self.next_seq += 1;
        let ticket = FetchTicket {
            level,
            seq: self.next_seq,
        };
        let slot = &mut self.slots[level.index()];
        if let Some(previous) = slot.pending.replace(ticket) {
            transition.cancel.push(previous);
        }
        slot.items.clear();
        slot.status = SlotStatus::Loading;
        transition.fetch = Some(FetchRequest { ticket, query });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::dashboards::d404_labour_summary::Granularity;

    fn item(level: Level, id: &str, name: &str, total: f64) -> AggregateItem {
        AggregateItem::new(level, id, name, total)
    }

    fn rows(level: Level, n: usize) -> Vec<AggregateItem> {
        (1..=n)
            .map(|i| item(level, &i.to_string(), &format!("{} {}", level.title(), i), i as f64))
            .collect()
    }

    fn mounted(filter: DateFilter) -> (DrilldownNavigator, FetchRequest) {
        let mut nav = DrilldownNavigator::new(filter);
        let fetch = nav.mount().unwrap().fetch.expect("root fetch");
        (nav, fetch)
    }

    /// Completes the pending request with `items`
    fn answer(nav: &mut DrilldownNavigator, request: &FetchRequest, items: Vec<AggregateItem>) {
        let outcome = nav.complete(request.ticket, Ok(items));
        assert!(matches!(outcome, Outcome::Applied { .. }), "{:?}", outcome);
    }

    /// Selects the first displayed item and answers the child fetch with three rows
    fn drill(nav: &mut DrilldownNavigator) -> Transition {
        let first = nav.current_items()[0].clone();
        let transition = nav.select(first).unwrap();
        if let Some(request) = &transition.fetch {
            answer(nav, request, rows(request.ticket.level, 3));
        }
        transition
    }

    fn assert_contiguous(nav: &DrilldownNavigator) {
        assert!(nav.depth() <= Level::COUNT);
        for (i, selection) in nav.path().iter().enumerate() {
            assert_eq!(selection.level.index(), i);
        }
        for level in Level::ALL {
            if level.index() > nav.depth() {
                assert!(nav.items(level).is_empty(), "{level:?} should be cleared");
            }
        }
    }

    #[test]
    fn test_mount_fetches_projects() {
        let (nav, fetch) = mounted(DateFilter::yearly(2024));
        assert_eq!(fetch.ticket.level, Level::Project);
        assert_eq!(fetch.query.relative_url(), "/summary?type=yearly&year=2024");
        assert!(nav.is_loading());
        assert_eq!(nav.placeholder(), None);
    }

    #[test]
    fn test_select_project_issues_category_fetch() {
        let (mut nav, fetch) = mounted(DateFilter::yearly(2024));
        answer(&mut nav, &fetch, vec![item(Level::Project, "5", "Tower A", 120.0)]);

        let transition = nav
            .select(item(Level::Project, "5", "Tower A", 120.0))
            .unwrap();
        let request = transition.fetch.unwrap();
        assert_eq!(request.ticket.level, Level::Category);
        assert_eq!(request.query.path(), "/summary/h1");
        assert_eq!(request.query.query_string(), "project_id=5&type=yearly&year=2024");

        let crumbs = nav.breadcrumbs();
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[0].label, "Projects");
        assert!(!crumbs[0].is_active);
        assert_eq!(crumbs[1].label, "Tower A");
        assert!(crumbs[1].is_active);
    }

    #[test]
    fn test_path_stays_contiguous_down_to_skill() {
        let (mut nav, fetch) = mounted(DateFilter::yearly(2024));
        answer(&mut nav, &fetch, rows(Level::Project, 3));

        for expected_depth in 1..=Level::COUNT {
            drill(&mut nav);
            assert_eq!(nav.depth(), expected_depth);
            assert_contiguous(&nav);
        }

        assert!(nav.is_path_complete());
        assert_eq!(nav.current_level(), Level::Skill);
        assert_eq!(nav.current_items().len(), 3);
        let skill = nav.current_items()[1].clone();
        assert_eq!(nav.select(skill), Err(NavigationError::PathComplete));
        assert_eq!(nav.depth(), Level::COUNT);
    }

    #[test]
    fn test_selecting_skill_does_not_fetch() {
        let (mut nav, fetch) = mounted(DateFilter::yearly(2024));
        answer(&mut nav, &fetch, rows(Level::Project, 2));
        for _ in 0..5 {
            drill(&mut nav);
        }
        assert_eq!(nav.current_level(), Level::Skill);

        let transition = drill(&mut nav);
        assert_eq!(transition, Transition::default());
        assert_eq!(nav.selected_at(Level::Skill).unwrap().id, "1");
        assert!(nav.breadcrumbs().last().unwrap().is_active);
        assert_eq!(nav.breadcrumbs().len(), Level::COUNT + 1);
    }

    #[test]
    fn test_rejects_out_of_order_selection() {
        let (mut nav, fetch) = mounted(DateFilter::yearly(2024));
        answer(&mut nav, &fetch, rows(Level::Project, 2));

        let err = nav.select(item(Level::Department, "1", "d", 1.0)).unwrap_err();
        assert_eq!(
            err,
            NavigationError::LevelMismatch {
                current: Level::Project,
                selected: Level::Department
            }
        );
        let err = nav.select(item(Level::Project, "99", "ghost", 1.0)).unwrap_err();
        assert!(matches!(err, NavigationError::UnknownItem { .. }));
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_breadcrumb_back_reuses_cached_list() {
        let (mut nav, fetch) = mounted(DateFilter::yearly(2024));
        answer(&mut nav, &fetch, rows(Level::Project, 3));
        drill(&mut nav); // project -> categories
        drill(&mut nav); // category -> departments
        drill(&mut nav); // department -> people
        assert_eq!(nav.depth(), 3);
        let categories = nav.items(Level::Category).to_vec();

        let transition = nav.breadcrumb_click(1).unwrap();
        assert_eq!(transition.fetch, None);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current_level(), Level::Category);
        assert_eq!(nav.current_items(), categories.as_slice());
        assert!(nav.items(Level::Department).is_empty());
        assert!(nav.items(Level::Person).is_empty());
        assert_eq!(nav.breadcrumbs().len(), 2);
        assert!(nav.breadcrumbs()[1].is_active);
    }

    #[test]
    fn test_only_idle_or_failed_slots_refetch_on_back() {
        let mut slot = LevelSlot::default();
        assert!(!slot.is_filled_or_pending());
        for (status, reused) in [
            (SlotStatus::Loading, true),
            (SlotStatus::Loaded, true),
            (SlotStatus::Failed, false),
            (SlotStatus::Idle, false),
        ] {
            slot.status = status;
            assert_eq!(slot.is_filled_or_pending(), reused, "{status:?}");
        }
    }

    #[test]
    fn test_truncation_then_reselect_is_idempotent() {
        let (mut nav, fetch) = mounted(DateFilter::yearly(2024));
        answer(&mut nav, &fetch, rows(Level::Project, 3));
        drill(&mut nav);
        drill(&mut nav);
        let departments = nav.current_items().to_vec();
        drill(&mut nav);
        drill(&mut nav);

        nav.breadcrumb_click(1).unwrap();
        let category = nav.current_items()[0].clone();
        let request = nav.select(category).unwrap().fetch.unwrap();
        assert_eq!(request.ticket.level, Level::Department);
        answer(&mut nav, &request, rows(Level::Department, 3));

        assert_eq!(nav.current_items(), departments.as_slice());
        assert_eq!(nav.depth(), 2);
        assert_contiguous(&nav);
    }

    #[test]
    fn test_active_crumb_is_noop() {
        let (mut nav, fetch) = mounted(DateFilter::yearly(2024));
        answer(&mut nav, &fetch, rows(Level::Project, 2));
        drill(&mut nav);

        assert_eq!(
            nav.breadcrumb_click(1),
            Err(NavigationError::ActiveCrumb {
                target: 1,
                depth: 1
            })
        );
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_filter_change_resets_depth() {
        let (mut nav, fetch) = mounted(DateFilter::yearly(2024));
        answer(&mut nav, &fetch, rows(Level::Project, 2));
        drill(&mut nav);
        drill(&mut nav);
        drill(&mut nav);

        let transition = nav.filter_change(DateFilter::monthly(2024, 3)).unwrap();
        assert_eq!(nav.depth(), 0);
        assert!(transition.cancel.is_empty());
        let request = transition.fetch.unwrap();
        assert_eq!(request.ticket.level, Level::Project);
        assert_eq!(request.query.query_string(), "type=monthly&year=2024&month=3");
        for level in Level::ALL {
            assert!(nav.items(level).is_empty());
        }
        assert_eq!(nav.breadcrumbs().len(), 1);
    }

    #[test]
    fn test_filter_change_cancels_in_flight() {
        let (mut nav, fetch) = mounted(DateFilter::yearly(2024));
        answer(&mut nav, &fetch, rows(Level::Project, 2));
        let category_fetch = nav
            .select(nav.current_items()[0].clone())
            .unwrap()
            .fetch
            .unwrap();

        let transition = nav.filter_change(DateFilter::yearly(2023)).unwrap();
        assert_eq!(transition.cancel, vec![category_fetch.ticket]);

        let late = nav.complete(category_fetch.ticket, Ok(rows(Level::Category, 5)));
        assert_eq!(late, Outcome::Discarded);
        assert!(nav.items(Level::Category).is_empty());
    }

    #[test]
    fn test_incomplete_filter_shows_no_filter_placeholder() {
        let weekly_without_date = DateFilter::yearly(2024).with_granularity(Granularity::Weekly);
        let mut nav = DrilldownNavigator::new(DateFilter::yearly(2024));
        let transition = nav.filter_change(weekly_without_date).unwrap();
        assert_eq!(transition.fetch, None);
        assert_eq!(nav.placeholder(), Some(Placeholder::NoFilter));

        let date = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
        let request = nav.filter_change(DateFilter::weekly(date)).unwrap().fetch.unwrap();
        answer(&mut nav, &request, vec![]);
        assert_eq!(nav.placeholder(), Some(Placeholder::Empty(Level::Project)));
    }

    #[test]
    fn test_last_request_wins() {
        let (mut nav, fetch) = mounted(DateFilter::yearly(2024));
        answer(&mut nav, &fetch, rows(Level::Project, 2));

        let first = nav.select(nav.current_items()[0].clone()).unwrap().fetch.unwrap();
        nav.breadcrumb_click(0).unwrap();
        let transition = nav.select(nav.current_items()[1].clone()).unwrap();
        assert!(transition.cancel.is_empty());
        let second = transition.fetch.unwrap();
        assert!(second.ticket.seq > first.ticket.seq);

        answer(&mut nav, &second, vec![item(Level::Category, "20", "Fresh", 2.0)]);
        let stale = nav.complete(first.ticket, Ok(vec![item(Level::Category, "10", "Stale", 1.0)]));
        assert_eq!(stale, Outcome::Discarded);
        assert_eq!(nav.current_items()[0].name, "Fresh");
    }

    #[test]
    fn test_reissued_fetch_cancels_previous_ticket() {
        let mut nav = DrilldownNavigator::new(DateFilter::yearly(2024));
        let first = nav.mount().unwrap().fetch.unwrap();
        let transition = nav.filter_change(DateFilter::yearly(2023)).unwrap();
        assert_eq!(transition.cancel, vec![first.ticket]);
        assert_eq!(nav.complete(first.ticket, Ok(rows(Level::Project, 1))), Outcome::Discarded);
        assert!(nav.is_loading());

        let current = transition.fetch.unwrap();
        answer(&mut nav, &current, rows(Level::Project, 2));
        assert_eq!(nav.current_items().len(), 2);
    }

    #[test]
    fn test_department_failure_notifies_and_allows_retry() {
        let (mut nav, fetch) = mounted(DateFilter::yearly(2024));
        answer(&mut nav, &fetch, rows(Level::Project, 2));
        drill(&mut nav);
        let category = nav.current_items()[0].clone();
        let request = nav.select(category.clone()).unwrap().fetch.unwrap();
        assert_eq!(request.ticket.level, Level::Department);

        let outcome = nav.complete(request.ticket, Err(FetchError::Http { status: 500 }));
        match outcome {
            Outcome::Failed { level, notification } => {
                assert_eq!(level, Level::Department);
                assert!(notification.contains("departments"), "{notification}");
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(nav.depth(), 2);
        assert!(nav.items(Level::Department).is_empty());
        assert_eq!(nav.placeholder(), Some(Placeholder::Failed(Level::Department)));

        // re-click the category through its breadcrumb
        let back = nav.breadcrumb_click(1).unwrap();
        assert_eq!(back.fetch, None);
        let retry = nav.select(category).unwrap().fetch.unwrap();
        assert_eq!(retry.ticket.level, Level::Department);
        answer(&mut nav, &retry, rows(Level::Department, 2));
        assert_eq!(nav.current_items().len(), 2);
    }

    #[test]
    fn test_retry_reissues_failed_level() {
        let (mut nav, fetch) = mounted(DateFilter::yearly(2024));
        nav.complete(fetch.ticket, Err(FetchError::Transport("offline".into())));
        assert_eq!(nav.status(Level::Project), SlotStatus::Failed);

        let request = nav.retry().unwrap().fetch.unwrap();
        assert_eq!(request.ticket.level, Level::Project);
        answer(&mut nav, &request, rows(Level::Project, 1));
        assert_eq!(nav.retry().unwrap(), Transition::default());
    }

    #[test]
    fn test_cancelled_result_is_silent() {
        let (mut nav, fetch) = mounted(DateFilter::yearly(2024));
        let outcome = nav.complete(fetch.ticket, Err(FetchError::Cancelled));
        assert_eq!(outcome, Outcome::Discarded);
        assert_eq!(nav.status(Level::Project), SlotStatus::Idle);
    }

    #[test]
    fn test_back_click_while_loading_cancels_child_fetch() {
        let (mut nav, fetch) = mounted(DateFilter::yearly(2024));
        answer(&mut nav, &fetch, rows(Level::Project, 2));
        let category_fetch = nav
            .select(nav.current_items()[0].clone())
            .unwrap()
            .fetch
            .unwrap();
        assert!(nav.is_loading());

        let transition = nav.breadcrumb_click(0).unwrap();
        assert_eq!(transition.cancel, vec![category_fetch.ticket]);
        assert_eq!(transition.fetch, None);
        assert_eq!(nav.current_items().len(), 2);
        assert_eq!(nav.status(Level::Category), SlotStatus::Idle);
    }

    #[test]
    fn test_teardown_discards_late_responses() {
        let (mut nav, fetch) = mounted(DateFilter::yearly(2024));
        let cancelled = nav.teardown();
        assert_eq!(cancelled, vec![fetch.ticket]);
        assert_eq!(
            nav.complete(fetch.ticket, Ok(rows(Level::Project, 2))),
            Outcome::Discarded
        );
        assert!(nav.current_items().is_empty());
        assert_eq!(nav.status(Level::Project), SlotStatus::Idle);
    }

    #[test]
    fn test_mixed_action_sequences_keep_invariants() {
        let (mut nav, fetch) = mounted(DateFilter::yearly(2024));
        answer(&mut nav, &fetch, rows(Level::Project, 3));

        // deterministic walk over select / crumb / filter actions
        for step in 0..200usize {
            match step % 7 {
                0 | 1 | 2 | 4 => {
                    if !nav.is_path_complete() && !nav.current_items().is_empty() {
                        let pick = step % nav.current_items().len();
                        let chosen = nav.current_items()[pick].clone();
                        let transition = nav.select(chosen).unwrap();
                        if let Some(request) = transition.fetch {
                            answer(&mut nav, &request, rows(request.ticket.level, 1 + step % 3));
                        }
                    }
                }
                3 | 5 => {
                    if nav.depth() > 0 {
                        let target = step % nav.depth();
                        let transition = nav.breadcrumb_click(target).unwrap();
                        if let Some(request) = transition.fetch {
                            answer(&mut nav, &request, rows(request.ticket.level, 2));
                        }
                    }
                }
                _ => {
                    let year = 2020 + (step % 5) as i32;
                    let request = nav.filter_change(DateFilter::yearly(year)).unwrap().fetch.unwrap();
                    assert_eq!(nav.depth(), 0);
                    answer(&mut nav, &request, rows(Level::Project, 3));
                }
            }
            assert_contiguous(&nav);
            let crumbs = nav.breadcrumbs();
            assert_eq!(crumbs.len(), nav.depth() + 1);
            assert_eq!(crumbs.iter().filter(|c| c.is_active).count(), 1);
            assert!(crumbs.last().unwrap().is_active);
        }
    }
}
