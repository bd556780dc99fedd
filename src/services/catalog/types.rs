use std::{fmt, str::FromStr};

use serde::Serialize;

/// A playlist tile on the home screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistCard {
    /// Playlist identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// One-line description
    pub description: String,
    /// Cover image
    pub image: String,
}

/// A recently played shortcut
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentItem {
    /// Playlist identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Cover image
    pub image: String,
}

/// Rows of the home screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeFeed {
    /// "Recently played" row
    pub recently_played: Vec<RecentItem>,
    /// "Featured playlists" row
    pub featured: Vec<PlaylistCard>,
    /// "Made for you" row
    pub made_for_you: Vec<PlaylistCard>,
}

/// A browse tile on the search screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchCategory {
    /// Category identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Tile color as a hex string
    pub color: String,
    /// Tile image
    pub image: String,
}

/// Kind of entity a search result points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// A single track
    Song,
    /// An artist page
    Artist,
    /// An album page
    Album,
    /// A playlist page
    Playlist,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Song => f.write_str("song"),
            Self::Artist => f.write_str("artist"),
            Self::Album => f.write_str("album"),
            Self::Playlist => f.write_str("playlist"),
        }
    }
}

/// A row in the search results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Entity identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Artist name or entity label
    pub subtitle: String,
    /// What the result points at
    pub kind: ResultKind,
    /// Thumbnail
    pub image: String,
}

/// What the search screen shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SearchView {
    /// Empty query: category tiles
    Browse(Vec<SearchCategory>),
    /// Non-empty query: result rows
    Results(Vec<SearchResult>),
}

/// Kind of a saved library entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryItemKind {
    /// A playlist
    Playlist,
    /// A followed artist
    Artist,
    /// A saved album
    Album,
}

impl fmt::Display for LibraryItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playlist => f.write_str("Playlist"),
            Self::Artist => f.write_str("Artist"),
            Self::Album => f.write_str("Album"),
        }
    }
}

/// A saved entry in the user's library
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryItem {
    /// Entry identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// What kind of entry this is
    pub kind: LibraryItemKind,
    /// Count label ("147 songs", "Artist")
    pub count: String,
    /// Thumbnail
    pub image: String,
    /// Pinned to the top of the library
    pub pinned: bool,
}

/// Library filter chips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryFilter {
    /// Playlists only
    Playlists,
    /// Artists only
    Artists,
    /// Albums only
    Albums,
    /// Downloaded items; pinned entries stand in for downloads
    Downloaded,
}

impl LibraryFilter {
    /// Whether `item` passes this filter.
    pub fn matches(self, item: &LibraryItem) -> bool {
        match self {
            Self::Playlists => item.kind == LibraryItemKind::Playlist,
            Self::Artists => item.kind == LibraryItemKind::Artist,
            Self::Albums => item.kind == LibraryItemKind::Album,
            Self::Downloaded => item.pinned,
        }
    }
}

impl FromStr for LibraryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "playlists" => Ok(Self::Playlists),
            "artists" => Ok(Self::Artists),
            "albums" => Ok(Self::Albums),
            "downloaded" => Ok(Self::Downloaded),
            other => Err(format!(
                "unknown filter '{other}' (expected playlists, artists, albums or downloaded)"
            )),
        }
    }
}

/// Library ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LibrarySort {
    /// Catalog order
    #[default]
    RecentlyAdded,
    /// By title, case-insensitive
    Alphabetical,
}

impl fmt::Display for LibrarySort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecentlyAdded => f.write_str("Recently Added"),
            Self::Alphabetical => f.write_str("Alphabetical"),
        }
    }
}

impl FromStr for LibrarySort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recent" | "recently-added" => Ok(Self::RecentlyAdded),
            "alpha" | "alphabetical" => Ok(Self::Alphabetical),
            other => Err(format!(
                "unknown sort '{other}' (expected recently-added or alphabetical)"
            )),
        }
    }
}
