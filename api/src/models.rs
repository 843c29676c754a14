use serde::{Deserialize, Deserializer};

/// Aggregation window for `user.gettopartists`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Overall,
    Week,
    Month,
    ThreeMonths,
    SixMonths,
    Year,
}

impl Period {
    pub fn api_code(self) -> &'static str {
        match self {
            Period::Overall => "overall",
            Period::Week => "7day",
            Period::Month => "1month",
            Period::ThreeMonths => "3month",
            Period::SixMonths => "6month",
            Period::Year => "12month",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub artist: String,
    pub name: String,
    pub album: String,
    pub now_playing: bool,
}

/// The lead entry of a user's recent tracks. Anything after the first track
/// is dropped during conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecentTracks {
    NoTracks,
    Latest { user: String, track: Track },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistPlays {
    pub name: String,
    pub play_count: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopArtists {
    pub user: String,
    pub period: Period,
    pub artists: Vec<ArtistPlays>,
}

// last.fm wire shapes

#[derive(Debug, Deserialize)]
pub(crate) struct RecentTracksResponse {
    recenttracks: RecentTracksPayload,
}

#[derive(Debug, Deserialize)]
struct RecentTracksPayload {
    #[serde(rename = "@attr", default)]
    attr: RecentTracksAttr,
    #[serde(default, deserialize_with = "one_or_many")]
    track: Vec<TrackPayload>,
}

#[derive(Debug, Default, Deserialize)]
struct RecentTracksAttr {
    #[serde(default)]
    user: String,
}

#[derive(Debug, Deserialize)]
struct TrackPayload {
    #[serde(default)]
    artist: TextField,
    #[serde(default)]
    album: TextField,
    #[serde(default)]
    name: String,
    // only present on the track currently scrobbling
    #[serde(rename = "@attr", default)]
    attr: Option<serde::de::IgnoredAny>,
}

#[derive(Debug, Default, Deserialize)]
struct TextField {
    #[serde(rename = "#text", default)]
    text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopArtistsResponse {
    topartists: TopArtistsPayload,
}

#[derive(Debug, Deserialize)]
struct TopArtistsPayload {
    #[serde(default, deserialize_with = "one_or_many")]
    artist: Vec<ArtistPayload>,
}

#[derive(Debug, Deserialize)]
struct ArtistPayload {
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    playcount: String,
}

/// Body last.fm sends alongside a failing status.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorPayload {
    pub error: i64,
    pub message: String,
}

impl From<RecentTracksResponse> for RecentTracks {
    fn from(response: RecentTracksResponse) -> Self {
        let payload = response.recenttracks;
        match payload.track.into_iter().next() {
            None => RecentTracks::NoTracks,
            Some(track) => RecentTracks::Latest {
                user: payload.attr.user,
                track: Track {
                    artist: track.artist.text,
                    name: track.name,
                    album: track.album.text,
                    now_playing: track.attr.is_some(),
                },
            },
        }
    }
}

impl TopArtistsResponse {
    pub(crate) fn into_top_artists(self, user: &str, period: Period) -> TopArtists {
        TopArtists {
            user: user.to_string(),
            period,
            artists: self
                .topartists
                .artist
                .into_iter()
                .map(|a| ArtistPlays {
                    name: a.name,
                    play_count: a.playcount,
                })
                .collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// last.fm collapses single-element lists into a bare object.
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(items) => items,
        OneOrMany::One(item) => vec![item],
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(u64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}
