#![allow(dead_code)]

use axum::{
    extract::Query,
    http::{header, StatusCode},
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub type Requests = Arc<Mutex<Vec<HashMap<String, String>>>>;

pub const NOW_PLAYING: &str = r##"{"recenttracks":{
    "track":[
        {"artist":{"mbid":"","#text":"X"},"streamable":"0","mbid":"",
         "album":{"mbid":"","#text":"Z"},"name":"Y","@attr":{"nowplaying":"true"},
         "url":"https://www.last.fm/music/X/_/Y"},
        {"artist":{"mbid":"","#text":"Older"},"mbid":"","album":{"mbid":"","#text":"Record"},
         "name":"Song","date":{"uts":"1700000000","#text":"14 Nov 2023, 22:13"}}
    ],
    "@attr":{"user":"carol_fm","totalPages":"1042","page":"1","perPage":"1","total":"1042"}}}"##;

pub const TOP_ARTISTS: &str = r#"{"topartists":{
    "artist":[
        {"name":"Boards of Canada","playcount":"512","mbid":"","@attr":{"rank":"1"}},
        {"name":"Aphex Twin","playcount":"300","mbid":"","@attr":{"rank":"2"}}
    ],
    "@attr":{"user":"carol_fm","totalPages":"50","page":"1","perPage":"10","total":"500"}}}"#;

pub const USER_NOT_FOUND: &str = r#"{"error":6,"message":"User not found","links":[]}"#;

/// Serves `body` with `status` on `/2.0/` and records every query string.
pub async fn spawn_lastfm(status: StatusCode, body: &'static str) -> (String, Requests) {
    let requests: Requests = Arc::default();
    let seen = requests.clone();

    let app = Router::new().route(
        "/2.0/",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let seen = seen.clone();
            async move {
                seen.lock().unwrap().push(params);
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    (format!("http://{}/2.0/", addr), requests)
}
