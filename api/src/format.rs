//! Rendering of last.fm results into single chat lines.
//!
//! Colors use gowon's markup: `{name}` opens a color and `{clear}` resets it.
//! The chat frontend interprets the markup, so it is opaque here.

use crate::models::{Period, RecentTracks, TopArtists};

pub const CLEAR: &str = "{clear}";

pub const PALETTE: [&str; 7] = [
    "{red}", "{orange}", "{yellow}", "{green}", "{cyan}", "{blue}", "{magenta}",
];

/// Most artists ever shown in one reply.
pub const MAX_TOP_ARTISTS: usize = 10;

pub fn colorize(color: &str, text: &str) -> String {
    format!("{}{}{}", color, text, CLEAR)
}

/// Colors each entry by its position, cycling through [`PALETTE`].
pub fn rainbow<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| colorize(PALETTE[i % PALETTE.len()], item.as_ref()))
        .collect()
}

pub fn recent_tracks(recent: &RecentTracks) -> String {
    match recent {
        RecentTracks::NoTracks => "No tracks found for user".to_string(),
        RecentTracks::Latest { user, track } => {
            let action = if track.now_playing {
                "is listening to"
            } else {
                "last listened to"
            };
            format!(
                "{} {}: {} - {} ({})",
                user, action, track.artist, track.name, track.album
            )
        }
    }
}

pub fn period_suffix(period: Period) -> &'static str {
    match period {
        Period::Overall => "",
        Period::Week => " (last week)",
        Period::Month => " (last month)",
        Period::ThreeMonths => " (last 3 months)",
        Period::SixMonths => " (last 6 months)",
        Period::Year => " (last year)",
    }
}

pub fn top_artists(top: &TopArtists) -> String {
    let entries = top
        .artists
        .iter()
        .take(MAX_TOP_ARTISTS)
        .map(|a| format!("{} ({})", a.name, a.play_count));

    format!(
        "{}'s top artists{}: {}",
        top.user,
        period_suffix(top.period),
        rainbow(entries).join(", ")
    )
}
