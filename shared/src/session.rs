use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::prize::Prize;
use crate::validation::UserData;

/// Screens the player moves through.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum AppStep {
    Form,
    Game,
    Result,
}

#[derive(Debug)]
pub enum SessionError {
    Validation(ValidationErrors),
    InvalidTransition { from: AppStep, action: &'static str },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "Registration is invalid: {}", e),
            Self::InvalidTransition { from, action } => {
                write!(f, "Cannot {} while on the {:?} step", action, from)
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for SessionError {
    fn from(err: ValidationErrors) -> Self {
        Self::Validation(err)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerSession {
    pub step: AppStep,
    pub user: Option<UserData>,
    pub winning_prize: Option<Prize>,
}

impl Default for PlayerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerSession {
    pub fn new() -> Self {
        Self {
            step: AppStep::Form,
            user: None,
            winning_prize: None,
        }
    }

    pub fn submit_registration(&mut self, user: UserData) -> Result<(), SessionError> {
        if self.step != AppStep::Form {
            return Err(SessionError::InvalidTransition { from: self.step, action: "register" });
        }
        user.validate()?;
        self.user = Some(user);
        self.step = AppStep::Game;
        Ok(())
    }

    pub fn finish_spin(&mut self, prize: Prize) -> Result<(), SessionError> {
        if self.step != AppStep::Game {
            return Err(SessionError::InvalidTransition { from: self.step, action: "finish a spin" });
        }
        self.winning_prize = Some(prize);
        self.step = AppStep::Result;
        Ok(())
    }

    /// Back to the wheel for another go; the registration is kept.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.step != AppStep::Result {
            return Err(SessionError::InvalidTransition { from: self.step, action: "reset" });
        }
        self.winning_prize = None;
        self.step = AppStep::Game;
        Ok(())
    }

    /// The wheel only accepts a spin on the game step; a shown result has to
    /// be dismissed first.
    pub fn can_spin(&self) -> bool {
        self.step == AppStep::Game
    }

    pub fn store_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.store_name.as_str())
    }
}
