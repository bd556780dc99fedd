use std::{fmt, str::FromStr};

use serde::Serialize;

use super::NavigationError;
use crate::services::player::TrackId;

/// Screens of the signed-out stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthRoute {
    /// Sign-in form
    Login,
    /// Account creation form
    Signup,
    /// Password reset request
    ForgotPassword,
}

/// Bottom tabs of the signed-in tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TabRoute {
    /// Home feed
    #[default]
    Home,
    /// Search and browse
    Search,
    /// The user's library
    Library,
}

/// Detail screens pushed over the tabs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PlayerRoute {
    /// Full-screen player, optionally for a specific track
    Player {
        /// Track to show; the current track when absent
        track_id: Option<TrackId>,
    },
    /// Playlist page
    Playlist {
        /// Playlist to show
        playlist_id: String,
    },
    /// Artist page
    Artist {
        /// Artist to show
        artist_id: String,
    },
    /// Album page
    Album {
        /// Album to show
        album_id: String,
    },
}

/// Every navigable destination, with its required parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Route {
    /// Signed-out stack
    Auth(AuthRoute),
    /// Signed-in tabs
    Main(TabRoute),
    /// Signed-in detail screens
    Player(PlayerRoute),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Auth(AuthRoute::Login) => f.write_str("login"),
            Route::Auth(AuthRoute::Signup) => f.write_str("signup"),
            Route::Auth(AuthRoute::ForgotPassword) => f.write_str("forgot-password"),
            Route::Main(TabRoute::Home) => f.write_str("home"),
            Route::Main(TabRoute::Search) => f.write_str("search"),
            Route::Main(TabRoute::Library) => f.write_str("library"),
            Route::Player(PlayerRoute::Player { track_id: None }) => f.write_str("player"),
            Route::Player(PlayerRoute::Player { track_id: Some(id) }) => write!(f, "player:{id}"),
            Route::Player(PlayerRoute::Playlist { playlist_id }) => {
                write!(f, "playlist:{playlist_id}")
            }
            Route::Player(PlayerRoute::Artist { artist_id }) => write!(f, "artist:{artist_id}"),
            Route::Player(PlayerRoute::Album { album_id }) => write!(f, "album:{album_id}"),
        }
    }
}

impl FromStr for Route {
    type Err = NavigationError;

    /// Parses `name` or `name:param`, e.g. `home`, `player:3`, `playlist:4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, param) = match s.split_once(':') {
            Some((name, param)) => (name, Some(param).filter(|p| !p.is_empty())),
            None => (s, None),
        };

        let required = |param: Option<&str>, key: &str| {
            param
                .map(str::to_string)
                .ok_or_else(|| NavigationError::MissingParameter {
                    route: name.to_string(),
                    param: key.to_string(),
                })
        };

        let route = match name.to_ascii_lowercase().as_str() {
            "login" => Route::Auth(AuthRoute::Login),
            "signup" => Route::Auth(AuthRoute::Signup),
            "forgot-password" => Route::Auth(AuthRoute::ForgotPassword),
            "home" => Route::Main(TabRoute::Home),
            "search" => Route::Main(TabRoute::Search),
            "library" => Route::Main(TabRoute::Library),
            "player" => Route::Player(PlayerRoute::Player {
                track_id: param.map(TrackId::new),
            }),
            "playlist" => Route::Player(PlayerRoute::Playlist {
                playlist_id: required(param, "playlist_id")?,
            }),
            "artist" => Route::Player(PlayerRoute::Artist {
                artist_id: required(param, "artist_id")?,
            }),
            "album" => Route::Player(PlayerRoute::Album {
                album_id: required(param, "album_id")?,
            }),
            _ => return Err(NavigationError::UnknownRoute(s.to_string())),
        };

        Ok(route)
    }
}
