//! Round state for CityScope.
//! A round picks a target city, evaluates free-text guesses against it and
//! decides win/loss. The presentation layer drives it through [`RoundAction`].

use std::rc::Rc;
use yew::Reducible;

use crate::state::{CameraView, City, CityDirectory, RandomHandle, distance_miles};

pub const NOT_FOUND_MESSAGE: &str = "City not found in list. Please try again.";
pub const CORRECT_MESSAGE: &str = "🎉 Correct! You guessed the city!";

/// Tunables for a round. Defaults are the classic three-guess game.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundRules {
    /// Camera zoom at round start.
    pub default_zoom: f64,
    /// Wider zoom revealed as a hint.
    pub hint_zoom: f64,
    /// Number of misses after which the hint zoom applies.
    pub hint_after_misses: u32,
    pub max_guesses: u32,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            default_zoom: 12.0,
            hint_zoom: 10.0,
            hint_after_misses: 2,
            max_guesses: 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

/// What a single guess did to the round.
#[derive(Clone, Debug, PartialEq)]
pub enum GuessOutcome {
    /// Round already finished; nothing changed.
    Ignored,
    /// Not a directory name. Does not cost a guess.
    NotFound,
    Correct,
    Miss { miles: f64 },
    /// Last allowed miss; the round is lost.
    OutOfGuesses { miles: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Round {
    pub directory: Rc<CityDirectory>,
    pub rules: RoundRules,
    pub rng: RandomHandle,
    /// Bumped on every restart so views can rebuild per round.
    pub round_id: u64,
    pub target: City,
    pub guess_count: u32,
    pub hint_zoom: f64,
    pub feedback: String,
    pub status: RoundStatus,
}

impl Round {
    pub fn start(directory: Rc<CityDirectory>, rules: RoundRules, rng: RandomHandle) -> Self {
        let target = directory.choose(&rng).clone();
        tracing::info!(round_id = 0, "round started");
        Self {
            directory,
            rules,
            rng,
            round_id: 0,
            target,
            guess_count: 0,
            hint_zoom: rules.default_zoom,
            feedback: String::new(),
            status: RoundStatus::InProgress,
        }
    }

    /// Replaces the whole round with a fresh one on the same directory.
    pub fn restart(&mut self) {
        self.target = self.directory.choose(&self.rng).clone();
        self.round_id = self.round_id.wrapping_add(1);
        self.guess_count = 0;
        self.hint_zoom = self.rules.default_zoom;
        self.feedback.clear();
        self.status = RoundStatus::InProgress;
        tracing::info!(round_id = self.round_id, "round started");
    }

    pub fn guesses_left(&self) -> u32 {
        self.rules.max_guesses.saturating_sub(self.guess_count)
    }

    pub fn camera(&self) -> CameraView {
        CameraView::new(self.target.coords, self.hint_zoom)
    }

    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        if self.status.is_over() {
            return GuessOutcome::Ignored;
        }
        let guess = raw.trim();
        let Some(guessed) = self.directory.find(guess) else {
            tracing::debug!(guess, "guess not in directory");
            self.feedback = NOT_FOUND_MESSAGE.to_string();
            return GuessOutcome::NotFound;
        };

        if guessed.name.to_lowercase() == self.target.name.to_lowercase() {
            self.status = RoundStatus::Won;
            self.feedback = CORRECT_MESSAGE.to_string();
            tracing::info!(round_id = self.round_id, guesses = self.guess_count, "round won");
            return GuessOutcome::Correct;
        }

        let miles = distance_miles(guessed.coords, self.target.coords);
        self.guess_count += 1;

        if self.guess_count >= self.rules.max_guesses {
            self.status = RoundStatus::Lost;
            self.feedback = format!(
                "❌ Incorrect. You're {miles:.1} miles away. You've used all {} guesses. You lost! The correct answer was {}.",
                self.rules.max_guesses, self.target.name
            );
            tracing::info!(round_id = self.round_id, target = %self.target.name, "round lost");
            return GuessOutcome::OutOfGuesses { miles };
        }

        self.feedback = format!("❌ Incorrect. You're {miles:.1} miles away.");
        if self.guess_count == self.rules.hint_after_misses {
            self.hint_zoom = self.rules.hint_zoom;
            tracing::debug!(zoom = self.hint_zoom, "hint zoom revealed");
        }
        tracing::debug!(guess_count = self.guess_count, miles, "miss");
        GuessOutcome::Miss { miles }
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum RoundAction {
    Guess(String),
    NextRound,
}

impl Reducible for Round {
    type Action = RoundAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            RoundAction::Guess(text) => {
                if new.submit_guess(&text) == GuessOutcome::Ignored {
                    return self;
                }
            }
            RoundAction::NextRound => new.restart(),
        }
        Rc::new(new)
    }
}
