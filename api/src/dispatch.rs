use std::sync::Arc;

use crate::command::{usage, Command, Invocation};
use crate::db::IdentityStore;
use crate::error::Result;
use crate::format;
use crate::lastfm::Scrobbles;
use crate::models::Period;

pub const USERNAME_NEEDED: &str = "Error: username needed";

/// Turns a raw argument string from chat into a reply line.
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<dyn IdentityStore>,
    lastfm: Arc<dyn Scrobbles>,
}

impl Dispatcher {
    pub fn new(store: Arc<dyn IdentityStore>, lastfm: Arc<dyn Scrobbles>) -> Self {
        Self { store, lastfm }
    }

    /// A missing username is answered with [`USERNAME_NEEDED`], never an error.
    /// Store and last.fm failures are returned as-is.
    pub async fn dispatch(&self, args: &str, nick: &str) -> Result<String> {
        let invocation = Invocation::parse(args);

        let command = match invocation.command() {
            Some(command) => command,
            None => {
                tracing::debug!("unrecognized command {:?} from {}", invocation.token, nick);
                return Ok(usage());
            }
        };

        match command {
            Command::Set => self.set_user(nick, invocation.explicit_user).await,
            Command::Scrobbles => match self.resolve_user(nick, invocation.explicit_user).await? {
                Some(user) => self.recent_tracks(&user).await,
                None => Ok(USERNAME_NEEDED.to_string()),
            },
            Command::TopArtists(period) => {
                match self.resolve_user(nick, invocation.explicit_user).await? {
                    Some(user) => self.top_artists(&user, period).await,
                    None => Ok(USERNAME_NEEDED.to_string()),
                }
            }
        }
    }

    async fn set_user(&self, nick: &str, user: Option<&str>) -> Result<String> {
        let user = match user {
            Some(user) => user,
            None => return Ok(USERNAME_NEEDED.to_string()),
        };

        self.store.set_user(nick, user).await?;
        tracing::info!("set {}'s last.fm user to {}", nick, user);

        Ok(format!("set {}'s user to {}", nick, user))
    }

    /// The explicit argument wins; otherwise whatever `nick` stored with `set`.
    async fn resolve_user(&self, nick: &str, explicit: Option<&str>) -> Result<Option<String>> {
        if let Some(user) = explicit {
            return Ok(Some(user.to_string()));
        }

        let stored = self.store.get_user(nick).await?;
        if stored.is_none() {
            tracing::debug!("no stored last.fm user for {}", nick);
        }

        Ok(stored.filter(|user| !user.is_empty()))
    }

    async fn recent_tracks(&self, user: &str) -> Result<String> {
        let recent = self.lastfm.recent_tracks(user).await?;
        Ok(format::recent_tracks(&recent))
    }

    async fn top_artists(&self, user: &str, period: Period) -> Result<String> {
        let top = self.lastfm.top_artists(user, period).await?;
        Ok(format::top_artists(&top))
    }
}
