//! Monotonic request tickets for discarding stale fetch responses.

use serde::{Deserialize, Serialize};


/// Issue-order ticket counter shared by one fetch target.
///
/// Every fetch takes a ticket from `issue()` before starting; when the
/// response arrives it is applied only while `is_current` still holds.
/// Responses therefore land in issue order, not arrival order, and a
/// superseded fetch is silently discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next ticket, invalidating every earlier one.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }

    /// Drop interest in everything currently in flight.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_ticket_is_current() {
        let mut sequence = RequestSequence::new();
        let first = sequence.issue();
        assert!(sequence.is_current(first));
        let second = sequence.issue();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }

    #[test]
    fn late_arrival_of_a_stale_response_is_discarded() {
        // fetch A issued for Q1, then Q2 issues fetch B; A resolves after B
        let mut sequence = RequestSequence::new();
        let mut displayed: Option<&str> = None;

        let ticket_a = sequence.issue();
        let ticket_b = sequence.issue();

        // B resolves first and is applied
        if sequence.is_current(ticket_b) {
            displayed = Some("results for Q2");
        }
        // A resolves afterwards and must not overwrite
        if sequence.is_current(ticket_a) {
            displayed = Some("results for Q1");
        }
        assert_eq!(displayed, Some("results for Q2"));
    }

    #[test]
    fn invalidate_drops_in_flight_interest() {
        let mut sequence = RequestSequence::new();
        let ticket = sequence.issue();
        sequence.invalidate();
        assert!(!sequence.is_current(ticket));
    }
}
