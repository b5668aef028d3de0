//! Projection of fetch state onto what the result area shows

use crate::controller::FetchState;
use crate::core::SearchResult;

/// The one thing the result area displays
///
/// Idle and pending both show the loading indicator. An empty result list is still
/// `Results`; front ends render it as an explicit "no data" message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    Loading,
    Error(&'a str),
    Results(&'a [SearchResult]),
}

impl<'a> View<'a> {
    #[must_use]
    pub fn project(state: &'a FetchState) -> Self {
        match state {
            FetchState::Idle | FetchState::Pending(_) => Self::Loading,
            FetchState::Fulfilled(_, results) => Self::Results(results),
            FetchState::Failed(_, message) => Self::Error(message),
        }
    }

    /// A finished lookup that matched nothing
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::Results(results) if results.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{QueryDescriptor, QueryMode};

    fn d() -> QueryDescriptor {
        QueryDescriptor::build("cat", QueryMode::Normal)
    }

    #[test]
    fn idle_and_pending_show_loading() {
        assert_eq!(View::project(&FetchState::Idle), View::Loading);
        assert_eq!(View::project(&FetchState::Pending(d())), View::Loading);
    }

    #[test]
    fn fulfilled_shows_results_in_order() {
        let results = vec![
            SearchResult::new("cat", "a feline"),
            SearchResult::new("act", "a deed"),
        ];
        let state = FetchState::Fulfilled(d(), results.clone());
        assert_eq!(View::project(&state), View::Results(&results));
    }

    #[test]
    fn empty_results_are_no_data_not_loading() {
        let state = FetchState::Fulfilled(d(), Vec::new());
        let view = View::project(&state);
        assert!(view.is_no_data());
        assert_ne!(view, View::Loading);
    }

    #[test]
    fn failed_shows_message() {
        let state = FetchState::Failed(d(), "network error".into());
        assert_eq!(View::project(&state), View::Error("network error"));
        assert!(!View::project(&state).is_no_data());
    }

    #[test]
    fn every_state_projects_to_exactly_one_view() {
        let states = [
            FetchState::Idle,
            FetchState::Pending(d()),
            FetchState::Fulfilled(d(), vec![SearchResult::new("cat", "")]),
            FetchState::Fulfilled(d(), Vec::new()),
            FetchState::Failed(d(), "boom".into()),
        ];
        for state in &states {
            let view = View::project(state);
            let shown = [
                view == View::Loading,
                matches!(view, View::Error(_)),
                matches!(view, View::Results(_)),
            ];
            assert_eq!(shown.iter().filter(|&&s| s).count(), 1, "{state:?}");
        }
    }
}
