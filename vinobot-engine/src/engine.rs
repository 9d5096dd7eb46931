//! The conversation state machine and command dispatcher.
//!
//! One entry point: [`Engine::handle_message`]. The user's session mutex is
//! held for the whole call, so messages from the same user serialize; lookups
//! against the catalog and ledger are the only await points that do I/O.
//! Backing-store failures become user-facing error text and leave the
//! session state untouched so the same input can be retried.

use tracing::{info, instrument, warn};
use vinobot_catalog::{CatalogRepository, WineType};
use vinobot_core::{KeyboardHint, OutboundMessage, UserId};
use vinobot_ledger::{AppendOutcome, FavoritesLedger};

use crate::age::{age_on, parse_birth_date};
use crate::command::{resolve_command, Command};
use crate::format;
use crate::resolver::PairingResolver;
use crate::sessions::SessionStore;
use crate::state::{ConversationState, PairingContext, UserSession};

const MINIMUM_AGE: i32 = 18;

/// Conversation engine shared by all message tasks.
pub struct Engine {
    sessions: SessionStore,
    catalog: CatalogRepository,
    ledger: FavoritesLedger,
    resolver: PairingResolver,
}

impl Engine {
    pub fn new(catalog: CatalogRepository, ledger: FavoritesLedger) -> Self {
        let resolver = PairingResolver::new(catalog.clone());
        Self {
            sessions: SessionStore::new(),
            catalog,
            ledger,
            resolver,
        }
    }

    /// The session store, for inspection (e.g. tests poking a user's state).
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Maps one inbound message to a response, mutating the user's session as
    /// the flows demand. Never fails: errors surface as response text.
    #[instrument(skip(self, raw))]
    pub async fn handle_message(&self, user: UserId, raw: &str) -> OutboundMessage {
        let entry = self.sessions.session(user).await;
        let mut session = entry.lock().await;
        let text = raw.trim();

        info!(
            user_id = %user,
            state = ?session.state,
            "step: engine handling message"
        );

        match session.state {
            ConversationState::AwaitingAge => self.handle_age_input(&mut session, text),
            ConversationState::AwaitingWineName => {
                self.handle_wine_name_input(&mut session, text).await
            }
            ConversationState::AwaitingRatingConfirm => {
                self.handle_rating_confirm(&mut session, text).await
            }
            ConversationState::Idle => self.handle_idle(&mut session, text).await,
        }
    }

    /// Idle: /start opens the age gate (or re-shows the menu once verified);
    /// everything else is gated on age verification and then dispatched.
    async fn handle_idle(&self, session: &mut UserSession, text: &str) -> OutboundMessage {
        let command = resolve_command(text);

        if command == Command::Start {
            if session.age_verified {
                return OutboundMessage::with_keyboard(
                    format::welcome_menu(),
                    KeyboardHint::MainMenu,
                );
            }
            session.state = ConversationState::AwaitingAge;
            return OutboundMessage::text(format::birth_date_prompt());
        }

        // The age gate takes precedence over every command.
        if !session.age_verified {
            return OutboundMessage::text(format::age_gate_reminder());
        }

        match command {
            Command::Start => {
                OutboundMessage::with_keyboard(format::welcome_menu(), KeyboardHint::MainMenu)
            }
            Command::FilterByType(wine_type) => self.list_wines_of_type(wine_type).await,
            Command::Pair(arg) if arg.is_empty() => {
                session.state = ConversationState::AwaitingWineName;
                OutboundMessage::text(format::wine_name_prompt())
            }
            Command::Pair(arg) => self.try_resolve_pairing(session, &arg).await,
            Command::ListWines => self.list_all_wines().await,
            Command::ListDishes => self.list_all_dishes().await,
            Command::Rate => self.start_rating(session),
            Command::Favorites => self.list_favorites().await,
            Command::Help => OutboundMessage::text(format::help_text()),
            Command::Cancel => OutboundMessage::text(format::nothing_to_cancel()),
            Command::Query(query) if query.is_empty() => {
                OutboundMessage::text(format::empty_wine_query())
            }
            Command::Query(query) => self.try_resolve_pairing(session, &query).await,
            Command::Unknown => {
                OutboundMessage::with_keyboard(format::unknown_command(), KeyboardHint::MainMenu)
            }
        }
    }

    /// AwaitingAge: a strict DD.MM.YYYY date decides the gate; anything else
    /// re-prompts without changing state.
    fn handle_age_input(&self, session: &mut UserSession, text: &str) -> OutboundMessage {
        let Some(birth) = parse_birth_date(text) else {
            return OutboundMessage::text(format::birth_date_reprompt());
        };

        let age = age_on(birth, chrono::Utc::now().date_naive());
        session.state = ConversationState::Idle;

        if age >= MINIMUM_AGE {
            session.age_verified = true;
            info!(age = age, "Age verification passed");
            OutboundMessage::with_keyboard(format::welcome_menu(), KeyboardHint::MainMenu)
        } else {
            info!(age = age, "Age verification failed");
            OutboundMessage::text(format::underage_rejection())
        }
    }

    /// AwaitingWineName: /cancel aborts; any other non-empty text is a wine
    /// query. The state returns to Idle once the resolver has answered.
    async fn handle_wine_name_input(
        &self,
        session: &mut UserSession,
        text: &str,
    ) -> OutboundMessage {
        if text.eq_ignore_ascii_case("/cancel") {
            session.state = ConversationState::Idle;
            return OutboundMessage::text(format::search_cancelled());
        }
        if text.is_empty() {
            return OutboundMessage::text(format::wine_name_prompt());
        }

        // A resolver I/O failure keeps the state so the same input can be
        // retried; an answer (found or empty) ends the pending question.
        match self.resolve_pairing(session, text).await {
            Ok(response) => {
                session.state = ConversationState::Idle;
                response
            }
            Err(e) => OutboundMessage::text(format::operation_failed(&e.to_string())),
        }
    }

    /// AwaitingRatingConfirm: literal yes saves the context to the ledger;
    /// anything else discards it. A ledger failure keeps both the state and
    /// the context so the confirmation can be retried.
    async fn handle_rating_confirm(
        &self,
        session: &mut UserSession,
        text: &str,
    ) -> OutboundMessage {
        if !text.eq_ignore_ascii_case("yes") {
            session.pairing = None;
            session.state = ConversationState::Idle;
            return OutboundMessage::text(format::favorite_not_saved());
        }

        let Some(context) = session.pairing.as_ref() else {
            warn!("Rating confirmed but pairing context is gone");
            session.state = ConversationState::Idle;
            return OutboundMessage::text(format::context_lost());
        };

        match self
            .ledger
            .append(&context.wine_name, &context.dish.name)
            .await
        {
            Ok(AppendOutcome::Added) => {
                session.pairing = None;
                session.state = ConversationState::Idle;
                OutboundMessage::text(format::favorite_added())
            }
            Ok(AppendOutcome::Duplicate) => {
                session.pairing = None;
                session.state = ConversationState::Idle;
                OutboundMessage::text(format::favorite_duplicate())
            }
            Err(e) => OutboundMessage::text(format::operation_failed(&e.to_string())),
        }
    }

    /// Like [`Self::resolve_pairing`], but renders a backing-store failure as
    /// error text. Used from Idle, where there is no pending state to keep.
    async fn try_resolve_pairing(&self, session: &mut UserSession, query: &str) -> OutboundMessage {
        self.resolve_pairing(session, query)
            .await
            .unwrap_or_else(|e| OutboundMessage::text(format::operation_failed(&e.to_string())))
    }

    /// Runs the pairing resolver and, on a non-empty result, overwrites the
    /// user's pairing context with the highest-scoring dish, keyed by the
    /// query as typed. An empty result leaves any existing context untouched.
    /// Returns Err only for backing-store failures.
    async fn resolve_pairing(
        &self,
        session: &mut UserSession,
        query: &str,
    ) -> Result<OutboundMessage, vinobot_catalog::CatalogError> {
        if query.is_empty() {
            return Ok(OutboundMessage::text(format::empty_wine_query()));
        }

        let dishes = self.resolver.resolve(query).await?;

        if dishes.is_empty() {
            return Ok(OutboundMessage::text(format::no_pairings_found(query)));
        }

        session.pairing = Some(PairingContext {
            wine_name: query.to_string(),
            dish: dishes[0].clone(),
        });

        info!(
            wine_query = %query,
            best_dish = %dishes[0].name,
            candidates = dishes.len(),
            "Pairing context established"
        );
        Ok(OutboundMessage::with_keyboard(
            format::pairing_results(query, &dishes),
            KeyboardHint::MainMenu,
        ))
    }

    /// /rate: asks for confirmation when a context exists, otherwise gives
    /// guidance without changing state.
    fn start_rating(&self, session: &mut UserSession) -> OutboundMessage {
        match session.pairing.as_ref() {
            Some(context) => {
                session.state = ConversationState::AwaitingRatingConfirm;
                OutboundMessage::with_keyboard(
                    format::rate_prompt(&context.wine_name, &context.dish.name),
                    KeyboardHint::YesNo,
                )
            }
            None => OutboundMessage::text(format::nothing_to_rate()),
        }
    }

    async fn list_wines_of_type(&self, wine_type: WineType) -> OutboundMessage {
        match self.catalog.find_wines_by_type(wine_type).await {
            Ok(wines) if wines.is_empty() => {
                OutboundMessage::text(format::no_wines_of_type(wine_type))
            }
            Ok(wines) => OutboundMessage::text(format::wine_list(
                &format!("{} wines:", wine_type),
                &wines,
            )),
            Err(e) => OutboundMessage::text(format::operation_failed(&e.to_string())),
        }
    }

    async fn list_all_wines(&self) -> OutboundMessage {
        match self.catalog.list_wines().await {
            Ok(wines) if wines.is_empty() => OutboundMessage::text(format::empty_list()),
            Ok(wines) => OutboundMessage::text(format::wine_list("All wines:", &wines)),
            Err(e) => OutboundMessage::text(format::operation_failed(&e.to_string())),
        }
    }

    async fn list_all_dishes(&self) -> OutboundMessage {
        match self.catalog.list_dishes().await {
            Ok(dishes) if dishes.is_empty() => OutboundMessage::text(format::empty_list()),
            Ok(dishes) => OutboundMessage::text(format::dish_list(&dishes)),
            Err(e) => OutboundMessage::text(format::operation_failed(&e.to_string())),
        }
    }

    async fn list_favorites(&self) -> OutboundMessage {
        match self.ledger.list_all().await {
            Ok(entries) => OutboundMessage::text(format::favorites_list(&entries)),
            Err(e) => OutboundMessage::text(format::operation_failed(&e.to_string())),
        }
    }
}
