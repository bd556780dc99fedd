//! Unit tests for the player container, store, resolver and ticker.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::Mutex;

use super::*;

fn track(id: &str, duration_secs: u32) -> Track {
    Track {
        id: TrackId::new(id),
        title: format!("Track {id}"),
        artist: "Artist".to_string(),
        artwork: "https://via.placeholder.com/300".to_string(),
        url: format!("https://example.com/{id}.mp3"),
        duration_secs,
        album: None,
    }
}

fn ids(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.id.as_str()).collect()
}

fn seeded() -> PlayerState {
    PlayerState::from_tracks(vec![
        track("1", 203),
        track("2", 210),
        track("3", 174),
    ])
}

fn with_status(status: PlaybackStatus) -> PlayerState {
    PlayerState {
        status,
        ..seeded()
    }
}

mod transitions {
    use super::*;

    #[test]
    fn from_tracks_loads_first_and_queues_rest() {
        let state = seeded();

        assert_eq!(state.current_track.as_ref().unwrap().id.as_str(), "1");
        assert_eq!(state.duration_secs, 203);
        assert_eq!(ids(&state.queue), vec!["2", "3"]);
        assert_eq!(state.status, PlaybackStatus::Paused);
        assert!(!state.shuffled);
        assert_eq!(state.repeat_mode, RepeatMode::Off);
        assert!(state.is_minimized);
    }

    #[test]
    fn empty_state_has_zero_duration() {
        let state = PlayerState::from_tracks(Vec::new());

        assert!(state.current_track.is_none());
        assert_eq!(state.duration_secs, 0);
        assert_eq!(state.progress_secs, 0);
    }

    #[test]
    fn set_current_track_rewinds_and_mirrors_duration() {
        for duration in [0, 1, 174, 3600] {
            let mut state = seeded();
            state.update_progress(120);
            state.play();

            state.set_current_track(track("x", duration));

            assert_eq!(state.progress_secs, 0);
            assert_eq!(state.duration_secs, duration);
            assert_eq!(state.status, PlaybackStatus::Playing);
        }
    }

    #[test]
    fn stop_always_rewinds() {
        for progress in [0, 1, 50, 203, 9999] {
            let state = seeded()
                .reduce(PlayerAction::UpdateProgress(progress))
                .reduce(PlayerAction::Stop);

            assert_eq!(state.progress_secs, 0);
            assert_eq!(state.status, PlaybackStatus::Stopped);
        }
    }

    #[test]
    fn play_is_unconditional() {
        let state = PlayerState::default().reduce(PlayerAction::Play);

        assert!(state.current_track.is_none());
        assert_eq!(state.status, PlaybackStatus::Playing);
    }

    #[test]
    fn toggle_from_playing_and_paused() {
        assert_eq!(
            with_status(PlaybackStatus::Playing)
                .reduce(PlayerAction::TogglePlayPause)
                .status,
            PlaybackStatus::Paused
        );
        assert_eq!(
            with_status(PlaybackStatus::Paused)
                .reduce(PlayerAction::TogglePlayPause)
                .status,
            PlaybackStatus::Playing
        );
    }

    #[test]
    fn toggle_twice_from_stopped_lands_on_paused() {
        let once = with_status(PlaybackStatus::Stopped).reduce(PlayerAction::TogglePlayPause);
        assert_eq!(once.status, PlaybackStatus::Playing);

        let twice = once.reduce(PlayerAction::TogglePlayPause);
        assert_eq!(twice.status, PlaybackStatus::Paused);
    }

    #[test]
    fn toggle_twice_from_playing_round_trips() {
        let state = with_status(PlaybackStatus::Playing)
            .reduce(PlayerAction::TogglePlayPause)
            .reduce(PlayerAction::TogglePlayPause);

        assert_eq!(state.status, PlaybackStatus::Playing);
    }

    #[test]
    fn toggle_ignores_buffering_and_loading() {
        for status in [PlaybackStatus::Buffering, PlaybackStatus::Loading] {
            let before = with_status(status);
            let after = before.clone().reduce(PlayerAction::TogglePlayPause);
            assert_eq!(before, after);
        }
    }

    #[test]
    fn enqueue_appends_in_order() {
        let state = PlayerState {
            queue: vec![track("a", 1), track("b", 1)],
            ..PlayerState::default()
        }
        .reduce(PlayerAction::Enqueue(track("t", 1)));

        assert_eq!(ids(&state.queue), vec!["a", "b", "t"]);
    }

    #[test]
    fn set_queue_empty_then_enqueue() {
        let state = seeded()
            .reduce(PlayerAction::SetQueue(Vec::new()))
            .reduce(PlayerAction::Enqueue(track("x", 100)));

        assert_eq!(ids(&state.queue), vec!["x"]);
    }

    #[test]
    fn shuffle_toggle_is_an_involution() {
        let before = seeded();
        let state = before
            .clone()
            .reduce(PlayerAction::ToggleShuffle)
            .reduce(PlayerAction::ToggleShuffle);

        assert_eq!(state.shuffled, before.shuffled);
    }

    #[test]
    fn minimize_toggle_has_no_playback_effect() {
        let before = with_status(PlaybackStatus::Playing);
        let after = before.clone().reduce(PlayerAction::ToggleMinimized);

        assert_eq!(after.is_minimized, !before.is_minimized);
        assert_eq!(after.status, before.status);
        assert_eq!(after.progress_secs, before.progress_secs);
    }

    #[test]
    fn skip_requests_only_change_status() {
        for action in [PlayerAction::RequestNext, PlayerAction::RequestPrevious] {
            let before = seeded().reduce(PlayerAction::UpdateProgress(42));
            let after = before.clone().reduce(action);

            assert_eq!(after.status, PlaybackStatus::Loading);
            assert_eq!(after.current_track, before.current_track);
            assert_eq!(after.queue, before.queue);
            assert_eq!(after.progress_secs, before.progress_secs);
        }
    }

    #[test]
    fn numeric_inputs_are_not_clamped() {
        let state = seeded()
            .reduce(PlayerAction::UpdateProgress(500))
            .reduce(PlayerAction::SetVolume(1.5));

        assert_eq!(state.progress_secs, 500);
        assert!(state.progress_secs > state.duration_secs);
        assert!((state.volume - 1.5).abs() < f64::EPSILON);

        let state = state.reduce(PlayerAction::SetVolume(-0.25));
        assert!((state.volume + 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn repeat_mode_is_replaced() {
        let state = seeded().reduce(PlayerAction::SetRepeatMode(RepeatMode::Queue));
        assert_eq!(state.repeat_mode, RepeatMode::Queue);
    }

    #[test]
    fn documented_session_scenario() {
        let state = seeded();
        assert_eq!(state.status, PlaybackStatus::Paused);
        assert_eq!(state.duration_secs, 203);

        let state = state.reduce(PlayerAction::Play);
        assert_eq!(state.status, PlaybackStatus::Playing);

        let state = state.reduce(PlayerAction::UpdateProgress(50));
        assert_eq!(state.progress_secs, 50);

        let state = state.reduce(PlayerAction::TogglePlayPause);
        assert_eq!(state.status, PlaybackStatus::Paused);

        let state = state.reduce(PlayerAction::Stop);
        assert_eq!(state.status, PlaybackStatus::Stopped);
        assert_eq!(state.progress_secs, 0);
    }

    #[test]
    fn progress_fraction_handles_zero_duration() {
        assert!(PlayerState::default().progress_fraction().abs() < f64::EPSILON);

        let state = PlayerState::from_tracks(vec![track("1", 200)])
            .reduce(PlayerAction::UpdateProgress(50));
        assert!((state.progress_fraction() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn enums_render_lowercase() {
        assert_eq!(PlaybackStatus::Buffering.to_string(), "buffering");
        assert_eq!(RepeatMode::Queue.to_string(), "queue");
        assert_eq!("TRACK".parse::<RepeatMode>().unwrap(), RepeatMode::Track);
        assert!("sometimes".parse::<RepeatMode>().is_err());

        let json = serde_json::to_value(seeded()).unwrap();
        assert_eq!(json["status"], "paused");
        assert_eq!(json["repeat_mode"], "off");
        assert_eq!(json["current_track"]["duration"], 203);
    }
}

mod store {
    use super::*;

    #[test]
    fn dispatch_reports_whether_state_changed() {
        let store = PlayerStore::new(seeded());

        assert!(store.dispatch(PlayerAction::Play));
        assert!(!store.dispatch(PlayerAction::Play));
        assert_eq!(store.get().status, PlaybackStatus::Playing);
    }

    #[test]
    fn update_applies_steps_together() {
        let store = PlayerStore::new(seeded());

        assert!(store.update(|state| {
            state.play();
            state.update_progress(12);
        }));
        assert!(!store.update(|state| state.update_progress(12)));

        let state = store.get();
        assert_eq!(state.status, PlaybackStatus::Playing);
        assert_eq!(state.progress_secs, 12);
    }

    #[tokio::test]
    async fn watch_yields_current_then_changes() {
        let store = PlayerStore::new(seeded());
        let mut states = Box::pin(store.watch());

        let first = states.next().await.unwrap();
        assert_eq!(first.status, PlaybackStatus::Paused);

        store.dispatch(PlayerAction::Play);
        let second = states.next().await.unwrap();
        assert_eq!(second.status, PlaybackStatus::Playing);
    }
}

mod resolver {
    use super::*;

    fn playing_store(state: PlayerState) -> PlayerStore {
        PlayerStore::new(state.reduce(PlayerAction::Play))
    }

    #[test]
    fn next_takes_queue_front_and_keeps_playing() {
        let store = playing_store(seeded());
        let mut resolver = QueueAdvancer::with_seed(3, 7);

        let outcome = skip(&store, &mut resolver, SkipDirection::Next);

        let state = store.get();
        assert!(matches!(outcome, SkipOutcome::Loaded(ref t) if t.id.as_str() == "2"));
        assert_eq!(state.current_track.as_ref().unwrap().id.as_str(), "2");
        assert_eq!(state.duration_secs, 210);
        assert_eq!(ids(&state.queue), vec!["3"]);
        assert_eq!(state.status, PlaybackStatus::Playing);
        assert_eq!(ids(resolver.history()), vec!["1"]);
    }

    #[test]
    fn skip_from_paused_restores_paused() {
        let store = PlayerStore::new(seeded());
        let mut resolver = QueueAdvancer::with_seed(3, 7);

        skip(&store, &mut resolver, SkipDirection::Next);

        assert_eq!(store.get().status, PlaybackStatus::Paused);
    }

    #[test]
    fn next_at_end_of_queue_stops() {
        let store = playing_store(PlayerState::from_tracks(vec![track("only", 10)]));
        let mut resolver = QueueAdvancer::with_seed(3, 7);

        let outcome = skip(&store, &mut resolver, SkipDirection::Next);

        let state = store.get();
        assert_eq!(outcome, SkipOutcome::Ended);
        assert_eq!(state.status, PlaybackStatus::Stopped);
        assert_eq!(state.progress_secs, 0);
        assert_eq!(state.current_track.unwrap().id.as_str(), "only");
    }

    #[test]
    fn repeat_track_replays_current() {
        let store = playing_store(
            seeded()
                .reduce(PlayerAction::SetRepeatMode(RepeatMode::Track))
                .reduce(PlayerAction::UpdateProgress(100)),
        );
        let mut resolver = QueueAdvancer::with_seed(3, 7);

        skip(&store, &mut resolver, SkipDirection::Next);

        let state = store.get();
        assert_eq!(state.current_track.unwrap().id.as_str(), "1");
        assert_eq!(state.progress_secs, 0);
        assert_eq!(ids(&state.queue), vec!["2", "3"]);
        assert!(resolver.history().is_empty());
    }

    #[test]
    fn repeat_queue_wraps_to_first_played() {
        let store = playing_store(seeded().reduce(PlayerAction::SetRepeatMode(RepeatMode::Queue)));
        let mut resolver = QueueAdvancer::with_seed(3, 7);

        skip(&store, &mut resolver, SkipDirection::Next);
        skip(&store, &mut resolver, SkipDirection::Next);
        assert!(store.get().queue.is_empty());

        skip(&store, &mut resolver, SkipDirection::Next);

        let state = store.get();
        assert_eq!(state.current_track.unwrap().id.as_str(), "1");
        assert_eq!(ids(&state.queue), vec!["2", "3"]);
        assert_eq!(state.status, PlaybackStatus::Playing);
    }

    #[test]
    fn shuffled_next_picks_from_queue() {
        let tracks: Vec<Track> = (1..=10).map(|i| track(&i.to_string(), 60)).collect();
        let store = playing_store(
            PlayerState::from_tracks(tracks).reduce(PlayerAction::ToggleShuffle),
        );
        let mut resolver = QueueAdvancer::with_seed(3, 42);
        let before = store.get().queue;

        let SkipOutcome::Loaded(picked) = skip(&store, &mut resolver, SkipDirection::Next) else {
            panic!("expected a track");
        };

        let after = store.get().queue;
        assert!(before.contains(&picked));
        assert!(!after.contains(&picked));
        assert_eq!(after.len(), before.len() - 1);
    }

    #[test]
    fn previous_returns_to_history() {
        let store = playing_store(seeded());
        let mut resolver = QueueAdvancer::with_seed(3, 7);
        skip(&store, &mut resolver, SkipDirection::Next);

        skip(&store, &mut resolver, SkipDirection::Previous);

        let state = store.get();
        assert_eq!(state.current_track.unwrap().id.as_str(), "1");
        assert_eq!(ids(&state.queue), vec!["2", "3"]);
        assert!(resolver.history().is_empty());
    }

    #[test]
    fn previous_past_threshold_restarts_current() {
        let store = playing_store(seeded());
        let mut resolver = QueueAdvancer::with_seed(3, 7);
        skip(&store, &mut resolver, SkipDirection::Next);
        store.dispatch(PlayerAction::UpdateProgress(30));

        skip(&store, &mut resolver, SkipDirection::Previous);

        let state = store.get();
        assert_eq!(state.current_track.unwrap().id.as_str(), "2");
        assert_eq!(state.progress_secs, 0);
        assert_eq!(ids(resolver.history()), vec!["1"]);
    }

    #[test]
    fn previous_without_history_restarts_current() {
        let store = playing_store(seeded());
        let mut resolver = QueueAdvancer::with_seed(3, 7);

        skip(&store, &mut resolver, SkipDirection::Previous);

        let state = store.get();
        assert_eq!(state.current_track.unwrap().id.as_str(), "1");
        assert_eq!(state.status, PlaybackStatus::Playing);
    }

    #[test]
    fn external_load_drops_history() {
        let store = playing_store(seeded());
        let mut resolver = QueueAdvancer::with_seed(3, 7);
        skip(&store, &mut resolver, SkipDirection::Next);
        assert_eq!(ids(resolver.history()), vec!["1"]);

        store.dispatch(PlayerAction::SetCurrentTrack(track("4", 90)));
        skip(&store, &mut resolver, SkipDirection::Previous);

        let state = store.get();
        assert_eq!(state.current_track.unwrap().id.as_str(), "4");
        assert_eq!(state.progress_secs, 0);
        assert!(resolver.history().is_empty());
    }

    #[test]
    fn queue_replacement_keeps_history() {
        let store = playing_store(seeded());
        let mut resolver = QueueAdvancer::with_seed(3, 7);
        skip(&store, &mut resolver, SkipDirection::Next);

        store.dispatch(PlayerAction::SetQueue(vec![track("9", 60)]));
        skip(&store, &mut resolver, SkipDirection::Previous);

        let state = store.get();
        assert_eq!(state.current_track.unwrap().id.as_str(), "1");
        assert_eq!(ids(&state.queue), vec!["2", "9"]);
    }

    #[test]
    fn status_set_while_loading_is_kept() {
        struct Interrupting<'a>(&'a PlayerStore);

        impl QueueResolver for Interrupting<'_> {
            fn resolve(&mut self, _: SkipDirection, state: &PlayerState) -> Option<Resolution> {
                self.0.dispatch(PlayerAction::Pause);
                Some(Resolution {
                    track: track("2", 210),
                    queue: state.queue.clone(),
                })
            }
        }

        let store = playing_store(seeded());
        let mut resolver = Interrupting(&store);

        skip(&store, &mut resolver, SkipDirection::Next);

        let state = store.get();
        assert_eq!(state.current_track.unwrap().id.as_str(), "2");
        assert_eq!(state.status, PlaybackStatus::Paused);
    }

    #[test]
    fn stop_while_loading_is_not_resumed() {
        struct Stopping<'a>(&'a PlayerStore);

        impl QueueResolver for Stopping<'_> {
            fn resolve(&mut self, _: SkipDirection, _: &PlayerState) -> Option<Resolution> {
                self.0.dispatch(PlayerAction::Stop);
                None
            }
        }

        let store = playing_store(seeded().reduce(PlayerAction::UpdateProgress(40)));
        let mut resolver = Stopping(&store);

        assert_eq!(skip(&store, &mut resolver, SkipDirection::Next), SkipOutcome::Ended);
        let state = store.get();
        assert_eq!(state.status, PlaybackStatus::Stopped);
        assert_eq!(state.progress_secs, 0);
    }

    #[test]
    fn resolver_sees_loading_state() {
        struct Recording(Vec<PlaybackStatus>);

        impl QueueResolver for Recording {
            fn resolve(&mut self, _: SkipDirection, state: &PlayerState) -> Option<Resolution> {
                self.0.push(state.status);
                None
            }
        }

        let store = playing_store(seeded());
        let mut resolver = Recording(Vec::new());

        skip(&store, &mut resolver, SkipDirection::Next);

        assert_eq!(resolver.0, vec![PlaybackStatus::Loading]);
    }
}

mod ticker {
    use super::*;

    fn ticker_for(state: PlayerState) -> (Arc<PlayerStore>, ProgressTicker) {
        let store = Arc::new(PlayerStore::new(state));
        let resolver: SharedResolver = Arc::new(Mutex::new(QueueAdvancer::with_seed(3, 7)));
        let ticker = ProgressTicker::new(store.clone(), resolver);
        (store, ticker)
    }

    #[tokio::test]
    async fn idle_while_paused() {
        let (store, ticker) = ticker_for(seeded());

        assert_eq!(ticker.tick().await, TickOutcome::Idle);
        assert_eq!(store.get().progress_secs, 0);
    }

    #[tokio::test]
    async fn advances_one_second_while_playing() {
        let (store, ticker) = ticker_for(seeded().reduce(PlayerAction::Play));

        assert_eq!(ticker.tick().await, TickOutcome::Advanced(1));
        assert_eq!(ticker.tick().await, TickOutcome::Advanced(2));
        assert_eq!(store.get().progress_secs, 2);
    }

    #[tokio::test]
    async fn track_end_advances_queue() {
        let state = PlayerState::from_tracks(vec![track("a", 2), track("b", 5)])
            .reduce(PlayerAction::Play)
            .reduce(PlayerAction::UpdateProgress(1));
        let (store, ticker) = ticker_for(state);

        let outcome = ticker.tick().await;

        assert!(matches!(
            outcome,
            TickOutcome::TrackEnded(SkipOutcome::Loaded(ref t)) if t.id.as_str() == "b"
        ));
        let state = store.get();
        assert_eq!(state.progress_secs, 0);
        assert_eq!(state.duration_secs, 5);
        assert_eq!(state.status, PlaybackStatus::Playing);
    }

    #[tokio::test]
    async fn last_track_end_stops() {
        let state = PlayerState::from_tracks(vec![track("a", 1)]).reduce(PlayerAction::Play);
        let (store, ticker) = ticker_for(state);

        assert_eq!(ticker.tick().await, TickOutcome::TrackEnded(SkipOutcome::Ended));
        assert_eq!(store.get().status, PlaybackStatus::Stopped);
    }
}

mod races {
    //! Commands landing on other threads while the ticker or a skip runs.

    use std::{sync::Barrier, thread};

    use futures::executor::block_on;

    use super::*;

    const ROUNDS: usize = 2_000;

    fn shared(state: PlayerState) -> (Arc<PlayerStore>, SharedResolver) {
        let resolver: SharedResolver = Arc::new(Mutex::new(QueueAdvancer::with_seed(3, 7)));
        (Arc::new(PlayerStore::new(state)), resolver)
    }

    /// Runs one tick and one dispatch released together on two threads.
    fn tick_against(state: PlayerState, action: PlayerAction) -> PlayerState {
        let (store, resolver) = shared(state);
        let ticker = ProgressTicker::new(store.clone(), resolver);
        let barrier = Arc::new(Barrier::new(2));

        let ticking = {
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                block_on(ticker.tick())
            })
        };

        barrier.wait();
        store.dispatch(action);
        ticking.join().unwrap();

        store.get()
    }

    fn at(progress: u32) -> PlayerState {
        seeded()
            .reduce(PlayerAction::Play)
            .reduce(PlayerAction::UpdateProgress(progress))
    }

    #[test]
    fn stop_during_tick_stays_rewound() {
        for _ in 0..ROUNDS {
            let state = tick_against(at(100), PlayerAction::Stop);

            assert_eq!(state.status, PlaybackStatus::Stopped);
            assert_eq!(state.progress_secs, 0);
        }
    }

    #[test]
    fn stop_at_track_end_stays_stopped() {
        for _ in 0..ROUNDS {
            let state = tick_against(at(202), PlayerAction::Stop);

            assert_eq!(state.status, PlaybackStatus::Stopped);
            assert_eq!(state.progress_secs, 0);
        }
    }

    #[test]
    fn load_during_tick_never_overruns() {
        for _ in 0..ROUNDS {
            let state = tick_against(at(200), PlayerAction::SetCurrentTrack(track("4", 174)));

            assert_eq!(state.current_track.as_ref().unwrap().id.as_str(), "4");
            assert!(state.progress_secs <= state.duration_secs);
            assert!(state.progress_secs <= 1);
        }
    }

    #[test]
    fn pause_during_skip_is_kept() {
        for _ in 0..ROUNDS {
            let (store, resolver) = shared(at(10));
            let barrier = Arc::new(Barrier::new(2));

            let skipping = {
                let store = store.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    let mut resolver = block_on(resolver.lock());
                    barrier.wait();
                    skip(&store, &mut *resolver, SkipDirection::Next)
                })
            };

            barrier.wait();
            store.dispatch(PlayerAction::Pause);
            skipping.join().unwrap();

            let state = store.get();
            assert_eq!(state.status, PlaybackStatus::Paused);
            assert_eq!(state.current_track.unwrap().id.as_str(), "2");
        }
    }
}
