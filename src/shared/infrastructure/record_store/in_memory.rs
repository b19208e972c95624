// In memory implementation of the RecordStore port.
//
// Purpose
// - Support handler tests and local development without touching the disk.

use crate::modules::rsvp::core::event::RsvpEvent;
use crate::modules::rsvp::core::tally::Tally;
use crate::shared::infrastructure::record_store::{RecordStore, StoreError};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRecordStore {
    inner: RwLock<Vec<RsvpEvent>>,
    offline: bool,
    fail_writes: bool,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail with `Unavailable`, as if the medium were gone.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Make appends fail with `WriteFailed` while reads keep working.
    pub fn toggle_fail_writes(&mut self) {
        self.fail_writes = !self.fail_writes;
    }

    pub async fn events(&self) -> Vec<RsvpEvent> {
        self.inner.read().await.clone()
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn append(&self, event: &RsvpEvent) -> Result<Tally, StoreError> {
        if self.offline {
            return Err(StoreError::Unavailable("record store offline".into()));
        }
        if self.fail_writes {
            return Err(StoreError::WriteFailed("record store rejects writes".into()));
        }
        let mut guard = self.inner.write().await;
        guard.push(event.clone());
        Ok(Tally::from_events(guard.iter()))
    }

    async fn tally(&self) -> Result<Tally, StoreError> {
        if self.offline {
            return Err(StoreError::Unavailable("record store offline".into()));
        }
        Ok(Tally::from_events(self.inner.read().await.iter()))
    }
}

#[cfg(test)]
mod rsvp_in_memory_record_store_tests {
    use super::*;
    use crate::modules::rsvp::core::event::RsvpResponse;
    use crate::tests::fixtures::events::rsvp_event::make_rsvp_event;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_append_an_event_and_return_the_updated_tally() {
        let store = InMemoryRecordStore::new();
        let event = make_rsvp_event("Ada", RsvpResponse::Accepted);
        let tally = store.append(&event).await.expect("append failed");
        assert_eq!(tally, Tally { accepted: 1, declined: 0 });
        assert_eq!(store.events().await, vec![event]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_the_tally_equal_to_the_event_counts() {
        let store = InMemoryRecordStore::new();
        let submissions = [
            ("Ada", RsvpResponse::Accepted),
            ("Grace", RsvpResponse::Declined),
            ("Edsger", RsvpResponse::Accepted),
        ];
        let mut last = Tally::default();
        for (name, response) in submissions {
            last = store
                .append(&make_rsvp_event(name, response))
                .await
                .expect("append failed");
        }
        assert_eq!(last, Tally { accepted: 2, declined: 1 });
        assert_eq!(store.tally().await.unwrap(), last);
        assert_eq!(last.total(), store.events().await.len() as u64);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_every_call_when_offline() {
        let mut store = InMemoryRecordStore::new();
        store.toggle_offline();
        let event = make_rsvp_event("Ada", RsvpResponse::Accepted);
        assert!(matches!(
            store.append(&event).await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(matches!(store.tally().await, Err(StoreError::Unavailable(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_appends_but_not_reads_when_writes_fail() {
        let mut store = InMemoryRecordStore::new();
        store.toggle_fail_writes();
        let event = make_rsvp_event("Ada", RsvpResponse::Accepted);
        assert!(matches!(
            store.append(&event).await,
            Err(StoreError::WriteFailed(_))
        ));
        assert_eq!(store.tally().await.unwrap(), Tally::default());
        assert!(store.events().await.is_empty());
    }
}
