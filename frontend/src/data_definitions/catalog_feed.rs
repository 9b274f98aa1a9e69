//! Fetch coordination for catalog result lists.
//!
//! Every `refresh` takes a ticket from a `RequestSequence` before spawning
//! the fetch; a response is applied only while its ticket is still current,
//! so overlapping fetches resolve in issue order and stale arrivals are
//! dropped silently. Failures are never fatal: the prior list is kept (or
//! cleared, per policy) and an error message is surfaced for a retry strip.

use dioxus::logger::tracing;
use dioxus::prelude::*;

use common::catalog::{CatalogItem, CatalogPage};
use common::catalog_query::CatalogQuery;
use common::request_sequence::RequestSequence;

use crate::api::catalog_api::search_comics;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    KeepPrevious,
    Clear,
}

#[derive(Clone, Copy)]
pub struct CatalogFeed {
    pub items: Signal<Vec<CatalogItem>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    sequence: Signal<RequestSequence>,
    policy: FailurePolicy,
}

pub fn use_catalog_feed(policy: FailurePolicy) -> CatalogFeed {
    CatalogFeed {
        items: use_signal(Vec::new),
        loading: use_signal(|| false),
        error: use_signal(|| None),
        sequence: use_signal(RequestSequence::new),
        policy,
    }
}

impl CatalogFeed {
    /// Issue exactly one fetch for this query state and apply the response
    /// if it is still wanted when it arrives.
    pub fn refresh(mut self, query: CatalogQuery, page: u64, size: u64) {
        let ticket = self.sequence.write().issue();
        self.loading.set(true);
        spawn(async move {
            let response = search_comics(query, page, size).await;
            let is_current = self.sequence.peek().is_current(ticket);
            if !is_current {
                // a newer request owns the signals now; do not even
                // take the write guards
                return;
            }
            apply_completion(
                is_current,
                response,
                self.policy,
                &mut self.items.write(),
                &mut self.error.write(),
                &mut self.loading.write(),
            );
        });
    }

    /// Drop interest in anything in flight and empty the list.
    pub fn clear(mut self) {
        self.sequence.write().invalidate();
        self.items.write().clear();
        self.error.set(None);
        self.loading.set(false);
    }
}

/// The apply/discard step for one finished fetch. A stale completion
/// changes nothing, `loading` included: the newer request set it and is
/// the one that clears it. Returns whether the response was applied.
fn apply_completion(
    is_current: bool,
    response: Result<CatalogPage<CatalogItem>, ServerFnError>,
    policy: FailurePolicy,
    items: &mut Vec<CatalogItem>,
    error: &mut Option<String>,
    loading: &mut bool,
) -> bool {
    if !is_current {
        return false;
    }
    match response {
        Ok(result_page) => {
            *items = result_page.items;
            *error = None;
        }
        Err(e) => {
            tracing::error!("catalog fetch failed: {e}");
            if policy == FailurePolicy::Clear {
                items.clear();
            }
            *error = Some(e.to_string());
        }
    }
    *loading = false;
    true
}


#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> CatalogItem {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": id,
            "slug": id,
            "status": "ongoing",
            "type": "manhwa",
        }))
        .unwrap()
    }

    fn page_of(ids: &[&str]) -> CatalogPage<CatalogItem> {
        CatalogPage {
            total: ids.len() as u64,
            page: 1,
            size: ids.len() as u64,
            items: ids.iter().map(|id| item(id)).collect(),
        }
    }

    fn fetch_error() -> ServerFnError {
        ServerFnError::ServerError {
            message: "remote api error".to_string(),
            code: 500,
            details: None,
        }
    }

    #[test]
    fn out_of_order_completions_resolve_in_issue_order() {
        let mut sequence = RequestSequence::new();
        let mut items = Vec::new();
        let mut error: Option<String> = None;

        // two overlapping fetches; the second supersedes the first
        let ticket_a = sequence.issue();
        let ticket_b = sequence.issue();
        let mut loading = true;

        // the newer fetch lands first and is applied
        let applied = apply_completion(
            sequence.is_current(ticket_b),
            Ok(page_of(&["newer"])),
            FailurePolicy::KeepPrevious,
            &mut items,
            &mut error,
            &mut loading,
        );
        assert!(applied);
        assert!(!loading);
        assert_eq!(items[0].id, "newer");

        // the older fetch arrives late and changes nothing
        let applied = apply_completion(
            sequence.is_current(ticket_a),
            Ok(page_of(&["older"])),
            FailurePolicy::KeepPrevious,
            &mut items,
            &mut error,
            &mut loading,
        );
        assert!(!applied);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "newer");
        assert!(error.is_none());
    }

    #[test]
    fn stale_completion_leaves_loading_to_the_newer_fetch() {
        let mut sequence = RequestSequence::new();
        let mut items = vec![item("shown")];
        let mut error: Option<String> = None;

        let ticket_a = sequence.issue();
        let _ticket_b = sequence.issue();
        let mut loading = true;

        // A resolves while B is still in flight: discarded, loading stays up
        let applied = apply_completion(
            sequence.is_current(ticket_a),
            Ok(page_of(&["stale"])),
            FailurePolicy::KeepPrevious,
            &mut items,
            &mut error,
            &mut loading,
        );
        assert!(!applied);
        assert!(loading);
        assert_eq!(items[0].id, "shown");
    }

    #[test]
    fn failure_keeps_the_prior_list_and_surfaces_the_error() {
        let mut sequence = RequestSequence::new();
        let mut items = vec![item("kept")];
        let mut error: Option<String> = None;
        let mut loading = true;

        let ticket = sequence.issue();
        let applied = apply_completion(
            sequence.is_current(ticket),
            Err(fetch_error()),
            FailurePolicy::KeepPrevious,
            &mut items,
            &mut error,
            &mut loading,
        );
        assert!(applied);
        assert!(!loading);
        assert_eq!(items[0].id, "kept");
        assert!(error.is_some());
    }

    #[test]
    fn failure_empties_the_list_under_the_clear_policy() {
        let mut sequence = RequestSequence::new();
        let mut items = vec![item("suggestion")];
        let mut error: Option<String> = None;
        let mut loading = true;

        let ticket = sequence.issue();
        apply_completion(
            sequence.is_current(ticket),
            Err(fetch_error()),
            FailurePolicy::Clear,
            &mut items,
            &mut error,
            &mut loading,
        );
        assert!(items.is_empty());
        assert!(error.is_some());
    }
}
