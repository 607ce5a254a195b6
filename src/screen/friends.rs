//! # FriendsScreen: lifecycle, rows, and collaborator hand-offs.
//!
//! The screen owns the loader, the current row set, the event bus, and the
//! subscriber fan-out. It is deliberately thin: all retry logic lives in
//! [`RetryLoader`], all display mechanics live behind the presenter traits.
//!
//! ## Wiring
//! ```text
//! FriendsScreen::new(cfg, api, detail, errors, subscribers)
//!   ├─► Bus::new(cfg.bus_capacity)
//!   ├─► SubscriberSet::new(subscribers, bus)     (one worker per subscriber)
//!   ├─► fan-out listener: Bus ──► SubscriberSet::emit(&Event)
//!   └─► RetryLoader::new(api, cfg.retry, bus)
//!
//! became_visible()                     (the only load trigger)
//!   └─► loader.load(&token)
//!         ├─ Ok(friends)      → rows replaced wholesale
//!         ├─ Err(Canceled)    → dropped (observer gone)
//!         └─ Err(failure)     → errors.show_error(final description)
//! ```
//!
//! ## Rules
//! - Reading rows never performs I/O; re-renders cannot re-trigger the
//!   network.
//! - Rows always reflect the most recently **completed** load; there are no
//!   partial writes.
//! - One sequence at a time: `became_visible` holds `&mut self` until the
//!   sequence terminates.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::{
    api::ApiRef,
    config::Config,
    error::LoadError,
    events::{Bus, Event, EventKind},
    loader::RetryLoader,
    model::Friend,
    policies::RetryPolicy,
    screen::{DetailPresenter, ErrorPresenter},
    subscribers::{Subscribe, SubscriberSet},
};

/// A list of friends driven by a retrying loader.
pub struct FriendsScreen {
    loader: RetryLoader,
    friends: Vec<Friend>,
    detail: Arc<dyn DetailPresenter>,
    errors: Arc<dyn ErrorPresenter>,
    bus: Bus,
    token: CancellationToken,
}

impl FriendsScreen {
    /// Creates a screen over the given API and collaborators.
    ///
    /// Must be called inside a tokio runtime: construction spawns the
    /// subscriber workers and the bus fan-out listener. Construction issues
    /// no API call — loading starts only on [`FriendsScreen::became_visible`].
    pub fn new(
        cfg: Config,
        api: ApiRef,
        detail: Arc<dyn DetailPresenter>,
        errors: Arc<dyn ErrorPresenter>,
        subscribers: Vec<Arc<dyn Subscribe>>,
    ) -> Self {
        let bus = Bus::new(cfg.bus_capacity);
        Self::spawn_fanout_listener(&bus, SubscriberSet::new(subscribers));

        Self {
            loader: RetryLoader::new(api, cfg.retry, bus.clone()),
            friends: Vec::new(),
            detail,
            errors,
            bus,
            token: CancellationToken::new(),
        }
    }

    /// Subscribes to the bus and forwards events to the subscriber set
    /// (fire-and-forget). The listener owns the set; it winds down once the
    /// screen (and with it every bus sender) is gone.
    fn spawn_fanout_listener(bus: &Bus, set: SubscriberSet) {
        let mut rx = bus.subscribe();
        tokio::spawn(async move {
            while let Ok(ev) = rx.recv().await {
                set.emit(&ev);
            }
        });
    }

    /// The visibility transition — the **only** trigger for a load sequence.
    ///
    /// Runs one full loader sequence to its terminal outcome, then either
    /// replaces the rows (success) or hands the final failure's description
    /// to the error collaborator. Each call starts a fresh sequence with the
    /// attempt counter back at 0.
    ///
    /// A screen dismissed before or during the sequence delivers nothing:
    /// rows keep their previous value and no error is displayed.
    pub async fn became_visible(&mut self) {
        match self.loader.load(&self.token).await {
            Ok(friends) => {
                self.friends = friends;
            }
            Err(LoadError::Canceled) => {}
            Err(err) => {
                self.errors.show_error(&err.as_message());
            }
        }
    }

    /// Number of rendered rows.
    pub fn row_count(&self) -> usize {
        self.friends.len()
    }

    /// The friend rendered at `index`, if any.
    pub fn row(&self, index: usize) -> Option<&Friend> {
        self.friends.get(index)
    }

    /// All rendered rows, in delivery order.
    pub fn rows(&self) -> &[Friend] {
        &self.friends
    }

    /// Hands the friend rendered at `index` to the detail collaborator.
    ///
    /// Out-of-range selections are ignored. No network round trip occurs.
    pub fn select_row(&self, index: usize) {
        if let Some(friend) = self.friends.get(index) {
            self.bus
                .publish(Event::new(EventKind::RowSelected).with_rows(index));
            self.detail.show(friend);
        }
    }

    /// Tears the screen down.
    ///
    /// Any in-flight sequence's terminal outcome becomes a no-op, and later
    /// visibility transitions load nothing. Rows keep their last value.
    pub fn dismiss(&self) {
        self.bus.publish(Event::new(EventKind::ScreenDismissed));
        self.token.cancel();
    }

    /// The retry policy the loader runs under.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.loader.policy()
    }

    /// The screen's event bus, for ad-hoc observers (tests, demos).
    pub fn bus(&self) -> &Bus {
        &self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{make_friend, QueueApi, RecordingDetail, RecordingErrors};

    struct Screen {
        screen: FriendsScreen,
        api: Arc<QueueApi>,
        detail: Arc<RecordingDetail>,
        errors: Arc<RecordingErrors>,
    }

    fn make_screen(api: QueueApi) -> Screen {
        let api = Arc::new(api);
        let detail = Arc::new(RecordingDetail::default());
        let errors = Arc::new(RecordingErrors::default());
        let screen = FriendsScreen::new(
            Config::default(),
            api.clone(),
            detail.clone(),
            errors.clone(),
            Vec::new(),
        );
        Screen {
            screen,
            api,
            detail,
            errors,
        }
    }

    #[tokio::test]
    async fn test_construction_does_not_call_api() {
        let t = make_screen(QueueApi::succeeding(vec![make_friend("Friend1", "phone1")]));

        assert_eq!(t.screen.row_count(), 0);
        assert!(t.screen.rows().is_empty());
        assert_eq!(t.api.calls(), 0);
    }

    #[tokio::test]
    async fn test_becoming_visible_loads_once() {
        let mut t = make_screen(QueueApi::succeeding(vec![make_friend("Friend1", "phone1")]));

        t.screen.became_visible().await;

        assert_eq!(t.api.calls(), 1);
    }

    #[tokio::test]
    async fn test_reading_rows_does_not_reload() {
        let mut t = make_screen(QueueApi::succeeding(vec![make_friend("Friend1", "phone1")]));

        t.screen.became_visible().await;
        for _ in 0..10 {
            let _ = t.screen.rows();
            let _ = t.screen.row_count();
            let _ = t.screen.row(0);
        }

        assert_eq!(t.api.calls(), 1, "re-renders must not re-trigger I/O");
    }

    #[tokio::test]
    async fn test_success_renders_friends_in_order() {
        let friends = vec![
            make_friend("Friend1", "phone1"),
            make_friend("Friend2", "phone2"),
        ];
        let mut t = make_screen(QueueApi::succeeding(friends.clone()));

        t.screen.became_visible().await;

        assert_eq!(t.screen.row_count(), 2);
        assert_eq!(t.screen.rows(), friends.as_slice());
        assert_eq!(t.screen.row(0).unwrap().name, "Friend1");
        assert_eq!(t.screen.row(0).unwrap().phone, "phone1");
        assert_eq!(t.screen.row(1).unwrap().name, "Friend2");
        assert_eq!(t.screen.row(1).unwrap().phone, "phone2");
        assert!(t.errors.messages().is_empty());
    }

    #[tokio::test]
    async fn test_three_failures_present_the_third_error() {
        let mut t = make_screen(QueueApi::seeded(vec![
            Err(LoadError::failed("1st error")),
            Err(LoadError::failed("2nd error")),
            Err(LoadError::failed("3rd error")),
        ]));

        t.screen.became_visible().await;

        assert_eq!(t.api.calls(), 3);
        assert_eq!(t.screen.row_count(), 0);
        assert_eq!(t.errors.messages(), vec!["3rd error".to_string()]);
    }

    #[tokio::test]
    async fn test_success_after_one_failure_renders_friends() {
        let friends = vec![make_friend("Friend1", "phone1")];
        let mut t = make_screen(QueueApi::seeded(vec![
            Err(LoadError::failed("1st error")),
            Ok(friends.clone()),
        ]));

        t.screen.became_visible().await;

        assert_eq!(t.api.calls(), 2);
        assert_eq!(t.screen.rows(), friends.as_slice());
        assert!(t.errors.messages().is_empty());
    }

    #[tokio::test]
    async fn test_success_after_two_failures_renders_friends() {
        let friends = vec![make_friend("Friend1", "phone1")];
        let mut t = make_screen(QueueApi::seeded(vec![
            Err(LoadError::failed("1st error")),
            Err(LoadError::failed("2nd error")),
            Ok(friends.clone()),
        ]));

        t.screen.became_visible().await;

        assert_eq!(t.api.calls(), 3);
        assert_eq!(t.screen.rows(), friends.as_slice());
        assert!(t.errors.messages().is_empty());
    }

    #[tokio::test]
    async fn test_intermediate_failures_are_never_surfaced() {
        let mut t = make_screen(QueueApi::seeded(vec![
            Err(LoadError::failed("1st error")),
            Err(LoadError::failed("2nd error")),
            Ok(vec![make_friend("Friend1", "phone1")]),
        ]));

        t.screen.became_visible().await;

        assert!(t.errors.messages().is_empty());
    }

    #[tokio::test]
    async fn test_selecting_a_row_hands_off_that_exact_friend() {
        let friends = vec![
            make_friend("Friend1", "phone1"),
            make_friend("Friend2", "phone2"),
        ];
        let mut t = make_screen(QueueApi::succeeding(friends.clone()));

        t.screen.became_visible().await;
        t.screen.select_row(1);

        assert_eq!(t.detail.shown(), vec![friends[1].clone()]);
        assert_eq!(t.api.calls(), 1, "selection never round-trips");
    }

    #[tokio::test]
    async fn test_out_of_range_selection_is_ignored() {
        let mut t = make_screen(QueueApi::succeeding(vec![make_friend("Friend1", "phone1")]));

        t.screen.became_visible().await;
        t.screen.select_row(5);

        assert!(t.detail.shown().is_empty());
    }

    #[tokio::test]
    async fn test_dismissed_screen_loads_and_presents_nothing() {
        let mut t = make_screen(QueueApi::succeeding(vec![make_friend("Friend1", "phone1")]));

        t.screen.dismiss();
        t.screen.became_visible().await;

        assert_eq!(t.api.calls(), 0);
        assert_eq!(t.screen.row_count(), 0);
        assert!(t.errors.messages().is_empty());
    }

    #[tokio::test]
    async fn test_each_visibility_transition_starts_a_fresh_sequence() {
        let friends = vec![make_friend("Friend1", "phone1")];
        let mut t = make_screen(QueueApi::seeded(vec![
            Err(LoadError::failed("1st error")),
            Err(LoadError::failed("2nd error")),
            Err(LoadError::failed("3rd error")),
            Ok(friends.clone()),
        ]));
        let mut rx = t.screen.bus().subscribe();

        t.screen.became_visible().await;
        assert_eq!(t.errors.messages(), vec!["3rd error".to_string()]);

        t.screen.became_visible().await;
        assert_eq!(t.api.calls(), 4);
        assert_eq!(t.screen.rows(), friends.as_slice());

        let mut starting_attempts = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            if ev.kind == EventKind::LoadStarting {
                starting_attempts.push(ev.attempt.unwrap());
            }
        }
        assert_eq!(
            starting_attempts,
            vec![0, 1, 2, 0],
            "a fresh trigger resets the attempt counter"
        );
    }

    #[tokio::test]
    async fn test_rows_keep_last_completed_load_after_terminal_failure() {
        let friends = vec![make_friend("Friend1", "phone1")];
        let mut t = make_screen(QueueApi::seeded(vec![
            Ok(friends.clone()),
            Err(LoadError::failed("1st error")),
            Err(LoadError::failed("2nd error")),
            Err(LoadError::failed("3rd error")),
        ]));

        t.screen.became_visible().await;
        assert_eq!(t.screen.rows(), friends.as_slice());

        t.screen.became_visible().await;
        assert_eq!(
            t.screen.rows(),
            friends.as_slice(),
            "a failed reload must not clobber rendered rows"
        );
        assert_eq!(t.errors.messages(), vec!["3rd error".to_string()]);
    }
}
