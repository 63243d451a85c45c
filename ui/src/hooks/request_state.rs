//! Lifecycle of a list fetched from the backend, independent of any
//! component.
//!
//! Fetches are numbered in the order they are issued. A fetch that settles
//! after a newer one has already been applied is discarded, so the stored
//! result always comes from the latest issued fetch that has finished.

use std::rc::Rc;

use payloads::{DocumentId, Identified};
use yew::Reducible;

/// What triggered a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Run on mount or when the hook's dependencies change.
    Initial,
    /// Requested by the user, e.g. a refresh button.
    Refetch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing requested yet.
    Idle,
    InitialLoading,
    /// A result is stored and nothing is in flight.
    Ready,
    Refetching,
}

pub enum RequestAction<T> {
    Started {
        kind: FetchKind,
    },
    Settled {
        kind: FetchKind,
        generation: u64,
        result: Result<Vec<T>, String>,
    },
    /// Drop an item from a successful result without asking the backend.
    RemoveItem(DocumentId),
}

/// A fetch that was issued and has not settled yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub kind: FetchKind,
    pub generation: u64,
}

impl Ticket {
    pub fn started<T>(&self) -> RequestAction<T> {
        RequestAction::Started { kind: self.kind }
    }
}

/// Numbers fetches in the order they are issued, and stops delivering
/// results once the component that issued them is gone.
#[derive(Debug, Default)]
pub struct FetchTracker {
    issued: u64,
    closed: bool,
}

impl FetchTracker {
    pub fn issue(&mut self, kind: FetchKind) -> Ticket {
        self.issued += 1;
        Ticket {
            kind,
            generation: self.issued,
        }
    }

    pub fn open(&mut self) {
        self.closed = false;
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    /// The action delivering `result`, or `None` after [`Self::close`].
    pub fn settle<T>(
        &self,
        ticket: Ticket,
        result: Result<Vec<T>, String>,
    ) -> Option<RequestAction<T>> {
        if self.closed {
            tracing::debug!(
                "Dropping fetch {} after unmount",
                ticket.generation
            );
            return None;
        }
        Some(RequestAction::Settled {
            kind: ticket.kind,
            generation: ticket.generation,
            result,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    response: Option<Result<Vec<T>, String>>,
    initial_in_flight: usize,
    refetches_in_flight: usize,
    /// Generation of the stored response, 0 before the first one.
    applied_generation: u64,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            response: None,
            initial_in_flight: 0,
            refetches_in_flight: 0,
            applied_generation: 0,
        }
    }
}

impl<T: Identified> RequestState<T> {
    pub fn apply(&mut self, action: RequestAction<T>) {
        match action {
            RequestAction::Started { kind } => match kind {
                FetchKind::Initial => self.initial_in_flight += 1,
                FetchKind::Refetch => self.refetches_in_flight += 1,
            },
            RequestAction::Settled {
                kind,
                generation,
                result,
            } => {
                match kind {
                    FetchKind::Initial => {
                        self.initial_in_flight =
                            self.initial_in_flight.saturating_sub(1)
                    }
                    FetchKind::Refetch => {
                        self.refetches_in_flight =
                            self.refetches_in_flight.saturating_sub(1)
                    }
                }

                if generation > self.applied_generation {
                    self.applied_generation = generation;
                    self.response = Some(result);
                } else {
                    tracing::debug!(
                        "Discarding fetch {generation}, already applied {}",
                        self.applied_generation
                    );
                }
            }
            RequestAction::RemoveItem(id) => {
                if let Some(Ok(items)) = &mut self.response {
                    items.retain(|item| item.id() != &id);
                }
            }
        }
    }
}

impl<T> RequestState<T> {
    pub fn response(&self) -> Option<&Result<Vec<T>, String>> {
        self.response.as_ref()
    }

    pub fn items(&self) -> Option<&[T]> {
        match &self.response {
            Some(Ok(items)) => Some(items),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.response {
            Some(Err(message)) => Some(message),
            _ => None,
        }
    }

    /// True while a mount-triggered fetch is in flight.
    pub fn loading(&self) -> bool {
        self.initial_in_flight > 0
    }

    /// True while at least one user-triggered fetch is in flight.
    pub fn refetching(&self) -> bool {
        self.refetches_in_flight > 0
    }

    pub fn phase(&self) -> Phase {
        if self.loading() {
            Phase::InitialLoading
        } else if self.refetching() {
            Phase::Refetching
        } else if self.response.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }
}

impl<T: Identified + Clone> Reducible for RequestState<T> {
    type Action = RequestAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(DocumentId);

    impl Identified for Item {
        fn id(&self) -> &DocumentId {
            &self.0
        }
    }

    fn items(ids: &[&str]) -> Vec<Item> {
        ids.iter().map(|id| Item(DocumentId(id.to_string()))).collect()
    }

    fn settled(
        kind: FetchKind,
        generation: u64,
        result: Result<Vec<Item>, String>,
    ) -> RequestAction<Item> {
        RequestAction::Settled {
            kind,
            generation,
            result,
        }
    }

    #[test]
    fn test_initial_fetch() {
        let mut state = RequestState::<Item>::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.loading());

        state.apply(RequestAction::Started {
            kind: FetchKind::Initial,
        });
        assert!(state.loading());
        assert!(!state.refetching());
        assert_eq!(state.response(), None);
        assert_eq!(state.phase(), Phase::InitialLoading);

        state.apply(settled(FetchKind::Initial, 1, Ok(items(&["a", "b"]))));
        assert!(!state.loading());
        assert_eq!(state.items(), Some(&items(&["a", "b"])[..]));
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn test_refetch_never_sets_loading() {
        let mut state = RequestState::<Item>::default();
        state.apply(RequestAction::Started {
            kind: FetchKind::Initial,
        });
        state.apply(settled(FetchKind::Initial, 1, Ok(items(&["a"]))));

        state.apply(RequestAction::Started {
            kind: FetchKind::Refetch,
        });
        assert!(state.refetching());
        assert!(!state.loading());
        assert_eq!(state.phase(), Phase::Refetching);
        // previous items stay visible while refreshing
        assert_eq!(state.items(), Some(&items(&["a"])[..]));

        state.apply(settled(FetchKind::Refetch, 2, Ok(items(&["b"]))));
        assert!(!state.refetching());
        assert_eq!(state.items(), Some(&items(&["b"])[..]));
    }

    #[test]
    fn test_overlapping_refetches() {
        let mut state = RequestState::<Item>::default();
        for _ in 0..2 {
            state.apply(RequestAction::Started {
                kind: FetchKind::Refetch,
            });
        }

        state.apply(settled(FetchKind::Refetch, 1, Ok(items(&["a"]))));
        assert!(state.refetching());

        state.apply(settled(FetchKind::Refetch, 2, Ok(items(&["b"]))));
        assert!(!state.refetching());
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut state = RequestState::<Item>::default();
        state.apply(RequestAction::Started {
            kind: FetchKind::Initial,
        });
        state.apply(RequestAction::Started {
            kind: FetchKind::Refetch,
        });

        // the refetch was issued second but finishes first
        state.apply(settled(FetchKind::Refetch, 2, Ok(items(&["new"]))));
        state.apply(settled(FetchKind::Initial, 1, Ok(items(&["old"]))));

        assert_eq!(state.items(), Some(&items(&["new"])[..]));
        assert!(!state.loading());
        assert!(!state.refetching());
    }

    #[test]
    fn test_error_replaces_items() {
        let mut state = RequestState::<Item>::default();
        state.apply(settled(FetchKind::Initial, 1, Ok(items(&["a"]))));
        state.apply(settled(
            FetchKind::Refetch,
            2,
            Err("An error occurred while retrieving posts".into()),
        ));

        assert_eq!(state.items(), None);
        assert_eq!(
            state.error(),
            Some("An error occurred while retrieving posts")
        );
    }

    #[test]
    fn test_remove_item() {
        let mut state = RequestState::<Item>::default();
        state.apply(settled(FetchKind::Initial, 1, Ok(items(&["X", "Y"]))));

        state.apply(RequestAction::RemoveItem(DocumentId("X".into())));
        assert_eq!(state.items(), Some(&items(&["Y"])[..]));

        state.apply(RequestAction::RemoveItem(DocumentId("unknown".into())));
        assert_eq!(state.items(), Some(&items(&["Y"])[..]));

        // the next fetch overwrites the local edit
        state.apply(settled(FetchKind::Refetch, 2, Ok(items(&["X", "Y"]))));
        assert_eq!(state.items(), Some(&items(&["X", "Y"])[..]));
    }

    #[test]
    fn test_remove_item_without_items() {
        let mut state = RequestState::<Item>::default();
        state.apply(RequestAction::RemoveItem(DocumentId("X".into())));
        assert_eq!(state.response(), None);

        state.apply(settled(FetchKind::Initial, 1, Err("failed".into())));
        state.apply(RequestAction::RemoveItem(DocumentId("X".into())));
        assert_eq!(state.error(), Some("failed"));
    }

    #[test]
    fn test_tracker_numbers_fetches() {
        let mut tracker = FetchTracker::default();
        let first = tracker.issue(FetchKind::Initial);
        let second = tracker.issue(FetchKind::Refetch);

        assert_eq!(first.generation, 1);
        assert_eq!(second.generation, 2);
        assert_eq!(second.kind, FetchKind::Refetch);
    }

    #[test]
    fn test_tracker_drives_state() {
        let mut tracker = FetchTracker::default();
        let mut state = RequestState::<Item>::default();

        // mount, then a refresh before the mount fetch returns
        let mount = tracker.issue(FetchKind::Initial);
        state.apply(mount.started());
        let refresh = tracker.issue(FetchKind::Refetch);
        state.apply(refresh.started());
        assert!(state.loading());
        assert!(state.refetching());

        let action = tracker.settle(refresh, Ok(items(&["new"]))).unwrap();
        state.apply(action);
        let action = tracker.settle(mount, Ok(items(&["old"]))).unwrap();
        state.apply(action);

        assert_eq!(state.items(), Some(&items(&["new"])[..]));
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn test_tracker_drops_results_after_close() {
        let mut tracker = FetchTracker::default();
        let ticket = tracker.issue(FetchKind::Initial);

        tracker.close();
        assert!(tracker.settle::<Item>(ticket, Ok(items(&["a"]))).is_none());

        tracker.open();
        assert!(tracker.settle::<Item>(ticket, Ok(items(&["a"]))).is_some());
    }
}
