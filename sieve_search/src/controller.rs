//! Interactive search bar state machine
//!
//! The controller owns the equations being composed, the input buffer and
//! the focused token. Host UI events (key presses, clicks, picked
//! suggestions) are forwarded to it; it keeps the equations validated,
//! fetches suggestions for the current context and applies the resulting
//! filters through a [`FilterSink`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::NaiveDateTime;
use log::debug;
use tokio::task::JoinHandle;

use sieve_core::{
    ConversionError, EquationAndTokenIndex, EquationStatus, Filter, Label, Nature, Operator,
    Suggestions, Token, TokenEquation, TokenMeta, Validator, ValueType, all_valid,
    equations_to_filters, resolve_token_meta, snapshot, split_parts,
};

use crate::config::SearchConfig;
use crate::debounce::DebounceTimer;
use crate::provider::{SuggestionParams, SuggestionProvider, fetch_or_empty};
use crate::rehydrate::filters_to_equations;

/// Receives the filters produced by the search bar.
pub trait FilterSink: Send + Sync + 'static {
    fn set_filters(&self, filters: Vec<Filter>);
}

impl<F> FilterSink for F
where
    F: Fn(Vec<Filter>) + Send + Sync + 'static,
{
    fn set_filters(&self, filters: Vec<Filter>) {
        self(filters)
    }
}

/// Keys with a meaning for the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    ArrowLeft,
    ArrowRight,
    Backspace,
    Tab,
    Escape,
}

/// Suggestions for the current context, shared with loading tasks.
#[derive(Debug, Default)]
struct SuggestionSlot {
    suggestions: Suggestions,
    loading: bool,
    /// Bumped by every load; a task only commits if it is still the latest.
    generation: u64,
}

/// What was last handed to the sink.
#[derive(Debug, Default)]
struct AppliedState {
    snapshot: Option<String>,
    /// Filters we applied ourselves, so their echo is not rehydrated.
    echo: Option<Vec<Filter>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Search bar controller.
///
/// All methods must be called from within a tokio runtime: suggestion loads
/// and the auto-apply timer run as spawned tasks.
pub struct InteractionController<P: SuggestionProvider> {
    provider: Arc<P>,
    sink: Arc<dyn FilterSink>,
    config: SearchConfig,
    validator: Validator,
    input: String,
    caret: usize,
    equations: Vec<TokenEquation>,
    focus: Option<EquationAndTokenIndex>,
    clicked: Option<EquationAndTokenIndex>,
    slot: Arc<Mutex<SuggestionSlot>>,
    applied: Arc<Mutex<AppliedState>>,
    timer: DebounceTimer,
}

impl<P: SuggestionProvider> InteractionController<P> {
    pub fn new(provider: P, sink: impl FilterSink, config: SearchConfig) -> Self {
        let applied = AppliedState {
            snapshot: Some(snapshot(&[])),
            echo: None,
        };
        Self {
            provider: Arc::new(provider),
            sink: Arc::new(sink),
            validator: Validator::new(config.max_relative_years),
            config,
            input: String::new(),
            caret: 0,
            equations: Vec::new(),
            focus: None,
            clicked: None,
            slot: Arc::new(Mutex::new(SuggestionSlot::default())),
            applied: Arc::new(Mutex::new(applied)),
            timer: DebounceTimer::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn equations(&self) -> &[TokenEquation] {
        &self.equations
    }

    /// Token being edited in the input field, if any.
    pub fn focus(&self) -> Option<EquationAndTokenIndex> {
        self.focus
    }

    /// Token whose suggestion popup is open, if any.
    pub fn clicked(&self) -> Option<EquationAndTokenIndex> {
        self.clicked
    }

    pub fn suggestions(&self) -> Suggestions {
        lock(&self.slot).suggestions.clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.slot).loading
    }

    /// Whether an auto-apply is scheduled.
    pub fn is_apply_pending(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn filters(&self) -> Vec<Filter> {
        equations_to_filters(&self.equations)
    }

    fn token(&self, index: EquationAndTokenIndex) -> Option<&Token> {
        self.equations
            .get(index.equation_index)?
            .items
            .get(index.token_index)
    }

    fn token_mut(&mut self, index: EquationAndTokenIndex) -> Option<&mut Token> {
        self.equations
            .get_mut(index.equation_index)?
            .items
            .get_mut(index.token_index)
    }

    // ===== Input buffer =====

    /// Replace the input text, placing the caret at its end.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.caret = self.input.len();
        if self.provider.uses_free_text_context() {
            self.load_suggestions();
        }
    }

    /// Move the caret, as a byte offset into the input.
    pub fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.input.len());
    }

    fn reset_input(&mut self) {
        self.input.clear();
        self.caret = 0;
    }

    // ===== Suggestion context =====

    /// Token before the insertion point, the equation it belongs to, and its index.
    fn context(&self) -> (Option<&Token>, Option<&TokenEquation>, usize) {
        match self.focus {
            Some(index) => {
                let equation = self.equations.get(index.equation_index);
                let previous = index
                    .token_index
                    .checked_sub(1)
                    .and_then(|t| equation.and_then(|eq| eq.items.get(t)));
                (previous, equation, index.equation_index)
            }
            None => match self.equations.last() {
                Some(last) if last.status == EquationStatus::Waiting => {
                    (last.last_token(), Some(last), self.equations.len() - 1)
                }
                _ => (None, None, self.equations.len()),
            },
        }
    }

    fn suggestion_params(&self) -> SuggestionParams {
        let (previous, equation, index) = self.context();
        SuggestionParams {
            previous_token: previous.cloned(),
            previous_equation: equation.cloned(),
            current_input: self
                .provider
                .uses_free_text_context()
                .then(|| self.input.clone()),
            equation_index: Some(index),
        }
    }

    fn previous_is_set_operator(&self) -> bool {
        let (previous, _, _) = self.context();
        previous
            .filter(|token| token.nature == Nature::Operator)
            .and_then(|token| token.label.as_single())
            .and_then(Operator::from_label)
            .is_some_and(|op| op.is_set())
    }

    /// Fetch suggestions for the current context.
    ///
    /// Supersedes any load still in flight: only the latest load commits its
    /// result. A failed fetch commits an empty list.
    pub fn load_suggestions(&self) -> JoinHandle<()> {
        let params = self.suggestion_params();
        let generation = {
            let mut slot = lock(&self.slot);
            slot.generation += 1;
            slot.loading = true;
            slot.generation
        };

        let provider = Arc::clone(&self.provider);
        let shared = Arc::clone(&self.slot);
        tokio::spawn(async move {
            let suggestions = fetch_or_empty(provider.as_ref(), params).await;
            let mut slot = lock(&shared);
            if slot.generation != generation {
                debug!("Discarding suggestions from superseded load {}", generation);
                return;
            }
            slot.suggestions = suggestions;
            slot.loading = false;
        })
    }

    // ===== Token creation =====

    /// Create a token from `label`.
    ///
    /// Nature and type are resolved from the current suggestions unless
    /// `meta` is given. Returns whether a token was created; keyword tokens
    /// are refused when keyword search is disabled.
    pub fn create_token(&mut self, label: impl Into<Label>, meta: Option<TokenMeta>) -> bool {
        let label = label.into();
        let meta = meta.unwrap_or_else(|| {
            let (previous, _, _) = self.context();
            resolve_token_meta(&label.as_text(), &lock(&self.slot).suggestions, previous)
        });
        self.insert_token(Token::new(label, meta.nature, meta.value_type))
    }

    fn insert_token(&mut self, token: Token) -> bool {
        if token.nature == Nature::Custom && !self.config.allow_key_word_search {
            debug!("Keyword search disabled, ignoring '{}'", token.label);
            return false;
        }

        debug!("Creating {} token '{}'", token.nature, token.label);
        if let Some(index) = self.focus {
            if let Some(slot) = self.token_mut(index) {
                *slot = token;
            }
            self.revalidate();
        } else if self
            .equations
            .last()
            .is_some_and(|last| last.status == EquationStatus::Waiting)
        {
            if let Some(last) = self.equations.last_mut() {
                last.items.push(token);
            }
            self.revalidate();
        } else {
            self.equations.push(TokenEquation::starting_with(token));
        }

        self.focus = None;
        self.reset_input();
        self.after_change();
        true
    }

    /// Commit the input buffer as a token (the Enter key).
    ///
    /// After "in" / "not in" the buffer is read as a list of values.
    pub fn submit_input(&mut self) -> bool {
        let text = self.input.trim();
        if text.is_empty() {
            return false;
        }

        let label = if self.previous_is_set_operator() {
            Label::Multi(
                split_parts(text)
                    .into_iter()
                    .filter(|part| !part.is_empty())
                    .map(str::to_string)
                    .collect(),
            )
        } else {
            Label::Single(text.to_string())
        };
        self.create_token(label, None)
    }

    /// Pick the suggestion at `index` from the current list.
    ///
    /// Values picked after a set operator are collected in the input buffer,
    /// separated by `" | "`, and only become a token on Enter. Returns
    /// whether a token was created.
    pub fn select_suggestion(&mut self, index: usize) -> bool {
        let Some(token) = lock(&self.slot).suggestions.get(index).map(|s| s.to_token()) else {
            return false;
        };

        if token.nature == Nature::Value && self.previous_is_set_operator() {
            let item = token.label.as_text();
            let current = self.input.trim();
            if current.is_empty() {
                self.input = item;
            } else if !split_parts(current).contains(&item.as_str()) {
                self.input = format!("{} | {}", current, item);
            }
            self.caret = self.input.len();
            return false;
        }

        self.insert_token(token)
    }

    /// Commit a value chosen in a date picker.
    pub fn accept_date(&mut self, value: NaiveDateTime) -> bool {
        let label = value.format("%Y-%m-%dT%H:%M:%S").to_string();
        self.create_token(label, Some(TokenMeta::new(Nature::Value, ValueType::Date)))
    }

    // ===== Keyboard =====

    /// Handle a key pressed in the input field.
    ///
    /// Returns `false` when the key should keep its default text-editing
    /// behaviour.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Enter => self.submit_input(),
            Key::ArrowLeft => self.move_left(),
            Key::ArrowRight => self.move_right(),
            Key::Backspace => self.erode(),
            Key::Tab => self.autocomplete(),
            Key::Escape => {
                self.focus = None;
                self.clicked = None;
                self.reset_input();
                self.load_suggestions();
                true
            }
        }
    }

    fn move_left(&mut self) -> bool {
        if self.caret != 0 {
            return false;
        }

        let target = match self.focus {
            None => self.equations.last().and_then(|eq| {
                eq.len()
                    .checked_sub(1)
                    .map(|t| EquationAndTokenIndex::new(self.equations.len() - 1, t))
            }),
            Some(index) if index.token_index > 0 => Some(EquationAndTokenIndex::new(
                index.equation_index,
                index.token_index - 1,
            )),
            Some(index) if index.equation_index > 0 => {
                let e = index.equation_index - 1;
                self.equations
                    .get(e)
                    .and_then(|eq| eq.len().checked_sub(1))
                    .map(|t| EquationAndTokenIndex::new(e, t))
            }
            Some(_) => None,
        };

        if let Some(target) = target {
            self.edit_token(target, false);
        }
        true
    }

    fn move_right(&mut self) -> bool {
        if self.caret != self.input.len() {
            return false;
        }
        let Some(index) = self.focus else {
            return false;
        };

        let equation_len = self.equations.get(index.equation_index).map_or(0, TokenEquation::len);
        if index.token_index + 1 < equation_len {
            self.edit_token(
                EquationAndTokenIndex::new(index.equation_index, index.token_index + 1),
                true,
            );
        } else if index.equation_index + 1 < self.equations.len() {
            self.edit_token(EquationAndTokenIndex::new(index.equation_index + 1, 0), true);
        } else {
            self.focus = None;
            self.reset_input();
            self.load_suggestions();
        }
        true
    }

    /// Remove the last token of the trailing equation, on an empty buffer.
    fn erode(&mut self) -> bool {
        if !self.input.is_empty() {
            return false;
        }
        let Some(last) = self.equations.last_mut() else {
            return false;
        };

        if last.len() <= 1 {
            self.equations.pop();
        } else {
            last.items.pop();
        }
        self.focus = None;
        self.revalidate();
        self.after_change();
        true
    }

    fn autocomplete(&mut self) -> bool {
        let completion = lock(&self.slot)
            .suggestions
            .first_prefix_match(&self.input)
            .map(|s| s.item.to_string());

        match completion {
            Some(item) => {
                self.input = item;
                self.caret = self.input.len();
                true
            }
            None => false,
        }
    }

    // ===== Pointer =====

    /// Start editing the token at `index` in the input field.
    pub fn set_focus(&mut self, index: Option<EquationAndTokenIndex>) -> bool {
        match index {
            Some(index) if self.token(index).is_some() => {
                self.edit_token(index, false);
                true
            }
            Some(_) => false,
            None => {
                self.focus = None;
                self.reset_input();
                self.load_suggestions();
                true
            }
        }
    }

    fn edit_token(&mut self, index: EquationAndTokenIndex, caret_at_start: bool) {
        let Some(text) = self.token(index).map(|token| token.label.as_text()) else {
            return;
        };
        self.focus = Some(index);
        self.input = text;
        self.caret = if caret_at_start { 0 } else { self.input.len() };
        self.load_suggestions();
    }

    /// Open the suggestion popup of a token, fetching its suggestions once.
    pub async fn click_token(&mut self, index: EquationAndTokenIndex) -> bool {
        let Some(token) = self.token(index) else {
            return false;
        };

        if token.suggestions.is_none() {
            let Some(equation) = self.equations.get(index.equation_index) else {
                return false;
            };
            let params = SuggestionParams {
                previous_token: index
                    .token_index
                    .checked_sub(1)
                    .and_then(|t| equation.items.get(t))
                    .cloned(),
                previous_equation: Some(equation.clone()),
                current_input: None,
                equation_index: Some(index.equation_index),
            };
            let suggestions = fetch_or_empty(self.provider.as_ref(), params).await;
            if let Some(token) = self.token_mut(index) {
                token.suggestions = Some(suggestions);
            }
        }

        self.clicked = Some(index);
        true
    }

    /// Replace the clicked token with entry `index` of its suggestions.
    pub fn choose_clicked_suggestion(&mut self, index: usize) -> bool {
        let Some(target) = self.clicked else {
            return false;
        };
        let Some(old) = self.token(target) else {
            return false;
        };
        let Some(mut token) = old
            .suggestions
            .as_ref()
            .and_then(|s| s.get(index))
            .map(|s| s.to_token())
        else {
            return false;
        };
        token.suggestions = old.suggestions.clone();

        if let Some(slot) = self.token_mut(target) {
            *slot = token;
        }
        self.clicked = None;
        self.revalidate();
        self.after_change();
        true
    }

    pub fn close_clicked(&mut self) {
        self.clicked = None;
    }

    /// Drop a whole equation (right click).
    pub fn remove_equation(&mut self, equation_index: usize) -> bool {
        if equation_index >= self.equations.len() {
            return false;
        }
        self.equations.remove(equation_index);
        self.focus = None;
        self.clicked = None;
        self.reset_input();
        self.revalidate();
        self.after_change();
        true
    }

    // ===== Applying filters =====

    /// Remove every equation and apply the empty filter list immediately.
    pub fn clear(&mut self) {
        self.equations.clear();
        self.focus = None;
        self.clicked = None;
        self.reset_input();
        self.apply_now();
        self.load_suggestions();
    }

    /// Apply the current filters immediately, valid or not.
    pub fn refresh(&mut self) {
        self.apply_now();
    }

    fn apply_now(&mut self) {
        self.timer.cancel();
        let filters = equations_to_filters(&self.equations);
        {
            let mut applied = lock(&self.applied);
            applied.snapshot = Some(snapshot(&self.equations));
            applied.echo = Some(filters.clone());
        }
        debug!("Applying {} filters", filters.len());
        self.sink.set_filters(filters);
    }

    fn revalidate(&mut self) {
        self.equations = self.validator.verify(&self.equations);
    }

    fn after_change(&mut self) {
        self.schedule_auto_apply();
        self.load_suggestions();
    }

    /// Schedule applying the filters once every equation is valid and the
    /// search differs from what was last applied.
    fn schedule_auto_apply(&mut self) {
        if !all_valid(&self.equations) {
            self.timer.cancel();
            return;
        }

        let current = snapshot(&self.equations);
        if lock(&self.applied).snapshot.as_deref() == Some(current.as_str()) {
            self.timer.cancel();
            return;
        }

        let filters = equations_to_filters(&self.equations);
        let sink = Arc::clone(&self.sink);
        let applied = Arc::clone(&self.applied);
        self.timer.start(self.config.auto_apply_delay(), async move {
            {
                let mut applied = lock(&applied);
                applied.snapshot = Some(current);
                applied.echo = Some(filters.clone());
            }
            debug!("Auto-applying {} filters", filters.len());
            sink.set_filters(filters);
        });
    }

    /// Take over filters set by the host.
    ///
    /// The echo of filters this controller applied itself is ignored;
    /// anything else replaces the equations, including in-progress edits.
    /// On error the current equations are kept.
    pub async fn sync_filters(&mut self, filters: Vec<Filter>) -> Result<(), ConversionError> {
        {
            let mut applied = lock(&self.applied);
            if applied.echo.as_ref() == Some(&filters) {
                applied.echo = None;
                debug!("Ignoring echo of applied filters");
                return Ok(());
            }
        }

        let equations = filters_to_equations(&filters, self.provider.as_ref()).await?;
        self.timer.cancel();
        self.equations = equations;
        self.focus = None;
        self.clicked = None;
        self.reset_input();
        {
            let mut applied = lock(&self.applied);
            applied.snapshot = Some(snapshot(&self.equations));
            applied.echo = None;
        }
        self.load_suggestions();
        Ok(())
    }

    /// Cancel the pending auto-apply and ignore loads still in flight.
    pub fn shutdown(&mut self) {
        self.timer.cancel();
        let mut slot = lock(&self.slot);
        slot.generation += 1;
        slot.loading = false;
    }
}

impl<P: SuggestionProvider> Drop for InteractionController<P> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
