use crate::format::rainbow;
use crate::models::Period;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Set,
    Scrobbles,
    TopArtists(Period),
}

/// Long and short alias for every command, in the order the usage line lists them.
pub const COMMANDS: [(&str, &str, Command); 8] = [
    ("set", "s", Command::Set),
    ("scrobbles", "l", Command::Scrobbles),
    ("topartists", "ta", Command::TopArtists(Period::Overall)),
    ("topartistsweekly", "taw", Command::TopArtists(Period::Week)),
    ("topartistsmonthly", "tam", Command::TopArtists(Period::Month)),
    ("topartists3monthly", "ta3m", Command::TopArtists(Period::ThreeMonths)),
    ("topartists6monthly", "ta6m", Command::TopArtists(Period::SixMonths)),
    ("topartistsyearly", "tay", Command::TopArtists(Period::Year)),
];

// Older callers still send this spelling. Accepted, never advertised.
const MISSPELLED_MONTHLY: &str = "topartistsmonhtly";

impl Command {
    pub fn from_token(token: &str) -> Option<Command> {
        if token == MISSPELLED_MONTHLY {
            return Some(Command::TopArtists(Period::Month));
        }

        COMMANDS
            .iter()
            .find(|(long, short, _)| *long == token || *short == token)
            .map(|(_, _, command)| *command)
    }
}

/// A tokenized argument string: the command token and an optional target user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub token: Option<&'a str>,
    pub explicit_user: Option<&'a str>,
}

impl<'a> Invocation<'a> {
    /// Anything after the second field is ignored.
    pub fn parse(args: &'a str) -> Self {
        let mut fields = args.split_whitespace();
        Self {
            token: fields.next(),
            explicit_user: fields.next(),
        }
    }

    pub fn command(&self) -> Option<Command> {
        self.token.and_then(Command::from_token)
    }
}

pub fn usage() -> String {
    rainbow(
        COMMANDS
            .iter()
            .map(|(long, short, _)| format!("{} ({})", long, short)),
    )
    .join(", ")
}
