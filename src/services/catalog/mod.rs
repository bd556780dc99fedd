//! Static catalog backing the home, search and library screens.
//!
//! Everything here is sample data. Search returns the same fixed results
//! for any non-empty query; there is no ranking.

mod data;
mod types;


pub use types::{
    HomeFeed, LibraryFilter, LibraryItem, LibraryItemKind, LibrarySort, PlaylistCard, RecentItem,
    ResultKind, SearchCategory, SearchResult, SearchView,
};

use thiserror::Error;

use crate::services::player::{Track, TrackId};

/// Number of featured playlists repeated in the "made for you" row.
const MADE_FOR_YOU_COUNT: usize = 2;

/// Errors from catalog lookups
#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    /// No track with the given identifier
    #[error("track '{0}' not found in catalog")]
    TrackNotFound(TrackId),
}

/// In-memory catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<Track>,
    featured: Vec<PlaylistCard>,
    recently_played: Vec<RecentItem>,
    categories: Vec<SearchCategory>,
    results: Vec<SearchResult>,
    library: Vec<LibraryItem>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::mock()
    }
}

impl Catalog {
    /// The prototype's sample catalog.
    pub fn mock() -> Self {
        Self {
            tracks: data::tracks(),
            featured: data::featured_playlists(),
            recently_played: data::recently_played(),
            categories: data::search_categories(),
            results: data::search_results(),
            library: data::library_items(),
        }
    }

    /// All playable tracks, in catalog order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Looks up a track by identifier.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::TrackNotFound` for unknown identifiers.
    pub fn track(&self, id: &TrackId) -> Result<&Track, CatalogError> {
        self.tracks
            .iter()
            .find(|track| &track.id == id)
            .ok_or_else(|| CatalogError::TrackNotFound(id.clone()))
    }

    /// Rows of the home screen.
    pub fn home_feed(&self) -> HomeFeed {
        HomeFeed {
            recently_played: self.recently_played.clone(),
            featured: self.featured.clone(),
            made_for_you: self.featured.iter().take(MADE_FOR_YOU_COUNT).cloned().collect(),
        }
    }

    /// Search screen content for `query`.
    ///
    /// An empty query browses categories; anything else shows the fixed
    /// result list.
    pub fn search(&self, query: &str) -> SearchView {
        if query.is_empty() {
            SearchView::Browse(self.categories.clone())
        } else {
            SearchView::Results(self.results.clone())
        }
    }

    /// Library items, optionally filtered, in the requested order.
    pub fn library(&self, filter: Option<LibraryFilter>, sort: LibrarySort) -> Vec<&LibraryItem> {
        let mut items: Vec<&LibraryItem> = self
            .library
            .iter()
            .filter(|item| filter.is_none_or(|filter| filter.matches(item)))
            .collect();

        if sort == LibrarySort::Alphabetical {
            items.sort_by_key(|item| item.title.to_lowercase());
        }

        items
    }
}
