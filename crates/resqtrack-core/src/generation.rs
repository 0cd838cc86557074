// ── Request generations ──
//
// Each container counts the fetches issued for it. A response may only
// paint if no newer fetch for the same container was issued after it.

use dashmap::DashMap;

/// Per-container fetch counters.
#[derive(Debug, Default)]
pub struct RenderGenerations {
    latest: DashMap<String, u64>,
}

/// Proof that a fetch was issued for `container` as generation `generation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTicket {
    container: String,
    generation: u64,
}

impl RenderTicket {
    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl RenderGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch for `container`, superseding any in flight.
    pub fn begin(&self, container: &str) -> RenderTicket {
        let mut entry = self.latest.entry(container.to_owned()).or_insert(0);
        *entry += 1;
        RenderTicket {
            container: container.to_owned(),
            generation: *entry,
        }
    }

    /// Whether `ticket` is still the newest fetch for its container.
    pub fn is_current(&self, ticket: &RenderTicket) -> bool {
        self.latest
            .get(&ticket.container)
            .is_some_and(|latest| *latest == ticket.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older() {
        let generations = RenderGenerations::new();
        let first = generations.begin("casesTable");
        assert!(generations.is_current(&first));

        let second = generations.begin("casesTable");
        assert!(!generations.is_current(&first));
        assert!(generations.is_current(&second));
        assert_eq!(second.generation(), 2);
    }

    #[test]
    fn containers_are_independent() {
        let generations = RenderGenerations::new();
        let cases = generations.begin("casesTable");
        let _hospitals = generations.begin("hospitalsTable");
        let _hospitals = generations.begin("hospitalsTable");
        assert!(generations.is_current(&cases));
        assert_eq!(cases.container(), "casesTable");
    }
}
