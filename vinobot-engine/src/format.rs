//! User-facing response texts.
//!
//! All strings the engine sends live here so flows in engine.rs stay readable.

use vinobot_catalog::{Dish, Wine, WineType};
use vinobot_ledger::FavoriteEntry;

pub fn welcome_menu() -> String {
    "🍷 Welcome to the wine pairing bot! 🍽\n\n\
     I will help you find great wine and food pairings.\n\n\
     Commands:\n\
     /red - red wines\n\
     /white - white wines\n\
     /rose - rose wines\n\
     /dessert - dessert wines\n\
     [wine name] - find dishes for a wine\n\
     /wines - list all wines\n\
     /dishes - list all dishes\n\
     /rate - rate the current pairing\n\
     /favorites - favorite pairings\n\
     /help - help\n\n\
     Just type a command or tap a button!"
        .to_string()
}

pub fn help_text() -> String {
    "Available commands:\n\
     /red - red wines\n\
     /white - white wines\n\
     /rose - rose wines\n\
     /dessert - dessert wines\n\
     [wine name] - find dishes for a wine\n\
     /pair <wine> - same as typing the wine name\n\
     /wines - list all wines\n\
     /dishes - list all dishes\n\
     /rate - rate the current pairing\n\
     /favorites - favorite pairings\n\
     /cancel - cancel the current question\n\
     /help - this help"
        .to_string()
}

pub fn birth_date_prompt() -> String {
    "Please enter your date of birth (DD.MM.YYYY) to continue.".to_string()
}

pub fn birth_date_reprompt() -> String {
    "That does not look like a date. Please use DD.MM.YYYY, e.g. 01.01.2000.".to_string()
}

pub fn underage_rejection() -> String {
    "Sorry, this bot is for users aged 18 and over.".to_string()
}

pub fn age_gate_reminder() -> String {
    "Please verify your age first: send /start and enter your date of birth.".to_string()
}

pub fn wine_name_prompt() -> String {
    "Which wine should I pair? Send a wine name, or /cancel.".to_string()
}

pub fn search_cancelled() -> String {
    "Okay, search cancelled.".to_string()
}

pub fn nothing_to_cancel() -> String {
    "Nothing to cancel.".to_string()
}

pub fn unknown_command() -> String {
    "Unknown command. Use /help for the list of commands.".to_string()
}

pub fn empty_wine_query() -> String {
    "Please provide a wine name to search for.".to_string()
}

pub fn no_pairings_found(wine_name: &str) -> String {
    format!("No matching dishes found for wine: {}", wine_name)
}

pub fn pairing_results(wine_name: &str, dishes: &[Dish]) -> String {
    let mut text = format!("🍷 Pairings for {}:\n\n", wine_name);
    for dish in dishes {
        text.push_str(&format!("🍽 {}\n\n", dish));
    }
    text.push_str("Use /rate to rate this pairing.");
    text
}

pub fn rate_prompt(wine_name: &str, dish_name: &str) -> String {
    format!(
        "Save {} with {} to your favorites? (yes/no)",
        wine_name, dish_name
    )
}

pub fn nothing_to_rate() -> String {
    "There is no active pairing to rate. Search for a wine first, e.g. /pair Merlot.".to_string()
}

pub fn context_lost() -> String {
    "Error: the pairing context was lost. Please search again.".to_string()
}

pub fn favorite_added() -> String {
    "Pairing added to your favorites!".to_string()
}

pub fn favorite_duplicate() -> String {
    "This pairing is already in your favorites.".to_string()
}

pub fn favorite_not_saved() -> String {
    "Okay, the pairing was not saved.".to_string()
}

pub fn wine_list(header: &str, wines: &[Wine]) -> String {
    let mut text = format!("{}\n\n", header);
    for wine in wines {
        text.push_str(&format!("{}\n------------\n", wine));
    }
    text
}

pub fn no_wines_of_type(wine_type: WineType) -> String {
    format!("No wines found of type: {}", wine_type)
}

pub fn dish_list(dishes: &[Dish]) -> String {
    let mut text = "All dishes:\n\n".to_string();
    for dish in dishes {
        text.push_str(&format!("{}\n------------\n", dish));
    }
    text
}

pub fn empty_list() -> String {
    "The list is empty.".to_string()
}

pub fn favorites_list(entries: &[FavoriteEntry]) -> String {
    if entries.is_empty() {
        return "You have no favorite pairings yet.".to_string();
    }
    let mut text = "Favorite pairings:\n\n".to_string();
    for entry in entries {
        text.push_str(&format!(
            "🍷 {}\n🍽 {}\n\n",
            entry.wine_name, entry.dish_descriptor
        ));
    }
    text
}

pub fn operation_failed(reason: &str) -> String {
    format!("Operation failed: {}. Please try again.", reason)
}
