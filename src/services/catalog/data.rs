//! Sample data shown by the prototype screens.

use super::{
    LibraryItem, LibraryItemKind, PlaylistCard, RecentItem, ResultKind, SearchCategory,
    SearchResult,
};
use crate::services::player::{Track, TrackId};

const TRACK_ARTWORK: &str = "https://via.placeholder.com/300";

fn track(id: &str, title: &str, artist: &str, duration_secs: u32, album: &str) -> Track {
    Track {
        id: TrackId::new(id),
        title: title.to_string(),
        artist: artist.to_string(),
        artwork: TRACK_ARTWORK.to_string(),
        url: format!("https://example.com/track{id}.mp3"),
        duration_secs,
        album: Some(album.to_string()),
    }
}

pub(super) fn tracks() -> Vec<Track> {
    vec![
        track("1", "Blinding Lights", "The Weeknd", 203, "After Hours"),
        track("2", "Dance Monkey", "Tones and I", 210, "The Kids Are Coming"),
        track("3", "Watermelon Sugar", "Harry Styles", 174, "Fine Line"),
        track("4", "Don't Start Now", "Dua Lipa", 183, "Future Nostalgia"),
        track("5", "Circles", "Post Malone", 215, "Hollywood's Bleeding"),
    ]
}

pub(super) fn featured_playlists() -> Vec<PlaylistCard> {
    [
        ("1", "Today's Top Hits", "The most played tracks right now"),
        ("2", "Discover Weekly", "Your weekly mixtape of fresh music"),
        ("3", "Chill Vibes", "Laid back beats for relaxation"),
        ("4", "Workout Energy", "Motivation for your exercise routine"),
    ]
    .into_iter()
    .map(|(id, title, description)| PlaylistCard {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: "https://via.placeholder.com/150".to_string(),
    })
    .collect()
}

pub(super) fn recently_played() -> Vec<RecentItem> {
    [
        ("1", "Liked Songs"),
        ("2", "Your Top 2025"),
        ("3", "Summer Hits"),
        ("4", "Throwback Classics"),
        ("5", "Road Trip Mix"),
        ("6", "Acoustic Covers"),
    ]
    .into_iter()
    .map(|(id, title)| RecentItem {
        id: id.to_string(),
        title: title.to_string(),
        image: "https://via.placeholder.com/80".to_string(),
    })
    .collect()
}

pub(super) fn search_categories() -> Vec<SearchCategory> {
    [
        ("1", "Podcasts", "#E13300"),
        ("2", "New Releases", "#7358FF"),
        ("3", "Charts", "#1E3264"),
        ("4", "Pop", "#148A08"),
        ("5", "Hip-Hop", "#BC5900"),
        ("6", "Rock", "#E91429"),
        ("7", "Latin", "#E1118C"),
        ("8", "Mood", "#B02897"),
        ("9", "Indie", "#8C67AA"),
        ("10", "Discover", "#1E3264"),
    ]
    .into_iter()
    .map(|(id, title, color)| SearchCategory {
        id: id.to_string(),
        title: title.to_string(),
        color: color.to_string(),
        image: "https://via.placeholder.com/150".to_string(),
    })
    .collect()
}

pub(super) fn search_results() -> Vec<SearchResult> {
    [
        ("1", "Blinding Lights", "The Weeknd", ResultKind::Song),
        ("2", "Adele", "Artist", ResultKind::Artist),
        ("3", "Fine Line", "Harry Styles", ResultKind::Album),
        ("4", "Drake Radio", "Playlist", ResultKind::Playlist),
        ("5", "Watermelon Sugar", "Harry Styles", ResultKind::Song),
    ]
    .into_iter()
    .map(|(id, title, subtitle, kind)| SearchResult {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        kind,
        image: "https://via.placeholder.com/60".to_string(),
    })
    .collect()
}

pub(super) fn library_items() -> Vec<LibraryItem> {
    use LibraryItemKind::{Artist, Playlist};

    [
        ("1", "Liked Songs", Playlist, "147 songs", true),
        ("2", "Recently Played", Playlist, "25 songs", true),
        ("3", "Heavy Metal Classics", Playlist, "75 songs", false),
        ("4", "Discover Weekly", Playlist, "30 songs", false),
        ("5", "Chill Hits", Playlist, "100 songs", false),
        ("6", "Taylor Swift", Artist, "Artist", false),
        ("7", "Daily Mix 1", Playlist, "50 songs", false),
        ("8", "Summer Hits 2025", Playlist, "80 songs", false),
    ]
    .into_iter()
    .map(|(id, title, kind, count, pinned)| LibraryItem {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        count: count.to_string(),
        image: "https://via.placeholder.com/60".to_string(),
        pinned,
    })
    .collect()
}
