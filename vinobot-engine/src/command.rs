//! Command dispatch table: classifies a message with no pending state.
//!
//! An explicit ordered rule list replaces chained prefix checks: rules are
//! evaluated top-down against the trimmed input, matching case-insensitively
//! on the keyword prefix. Text that starts with the command marker but hits
//! no rule is Unknown; anything else falls through to the one documented
//! default, an implicit pairing query with the text as typed.

use vinobot_catalog::WineType;

/// Marker character that distinguishes explicit commands from free text.
pub const COMMAND_MARKER: char = '/';

/// A recognized logical command with its payload. Evaluated by the engine's
/// single dispatcher; no handler state is captured here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    FilterByType(WineType),
    /// `/pair <wine>`; the argument may be empty, which asks for a wine name.
    Pair(String),
    ListWines,
    ListDishes,
    Rate,
    Favorites,
    Help,
    Cancel,
    /// Implicit pairing query: free text treated as a wine name, as typed.
    Query(String),
    Unknown,
}

struct Rule {
    keyword: &'static str,
    build: fn(&str) -> Command,
}

/// Matching priority order. Reordering entries changes dispatch behavior.
const RULES: &[Rule] = &[
    Rule {
        keyword: "/start",
        build: |_| Command::Start,
    },
    Rule {
        keyword: "/red",
        build: |_| Command::FilterByType(WineType::Red),
    },
    Rule {
        keyword: "/white",
        build: |_| Command::FilterByType(WineType::White),
    },
    Rule {
        keyword: "/rose",
        build: |_| Command::FilterByType(WineType::Rose),
    },
    Rule {
        keyword: "/dessert",
        build: |_| Command::FilterByType(WineType::Dessert),
    },
    Rule {
        keyword: "/pair",
        build: |arg| Command::Pair(arg.to_string()),
    },
    Rule {
        keyword: "/wines",
        build: |_| Command::ListWines,
    },
    Rule {
        keyword: "/dishes",
        build: |_| Command::ListDishes,
    },
    Rule {
        keyword: "/rate",
        build: |_| Command::Rate,
    },
    Rule {
        keyword: "/favorites",
        build: |_| Command::Favorites,
    },
    Rule {
        keyword: "/help",
        build: |_| Command::Help,
    },
    Rule {
        keyword: "/cancel",
        build: |_| Command::Cancel,
    },
];

fn starts_with_keyword(text: &str, keyword: &str) -> bool {
    text.len() >= keyword.len()
        && text.is_char_boundary(keyword.len())
        && text[..keyword.len()].eq_ignore_ascii_case(keyword)
}

/// Resolves raw message text to a [`Command`]. Only consulted when the user
/// has no pending state; state-specific input never goes through here.
pub fn resolve_command(raw: &str) -> Command {
    let text = raw.trim();

    for rule in RULES {
        if starts_with_keyword(text, rule.keyword) {
            let arg = text[rule.keyword.len()..].trim();
            return (rule.build)(arg);
        }
    }

    if text.starts_with(COMMAND_MARKER) {
        return Command::Unknown;
    }

    // Default: free text is an implicit wine-name query, as typed.
    Command::Query(text.to_string())
}
