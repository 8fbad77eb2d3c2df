//! Tagged owner/operator references.
//!
//! The database stores these as a pair of nullable foreign keys (user id, airline ICAO). The
//! domain replaces the pair with enums so "both set" cannot be represented after conversion.

use crate::server::error::domain::DomainError;

/// Display name of aircraft that belong to neither a user nor an airline.
pub const SYSTEM_OWNER_NAME: &str = "System";

/// Operator of a flight or job: exactly one user or one airline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    User(i32),
    Airline(String),
}

impl Operator {
    /// Builds an operator from its nullable column pair.
    ///
    /// # Returns
    /// - `Ok(Operator)` - Exactly one column was set
    /// - `Err(DomainError::NoOperatorAssigned)` - Neither column was set
    /// - `Err(DomainError::DualOperatorAssigned)` - Both columns were set
    pub fn from_columns(
        operator_id: Option<i32>,
        operator_airline_icao: Option<String>,
    ) -> Result<Self, DomainError> {
        match (operator_id, operator_airline_icao) {
            (Some(user_id), None) => Ok(Self::User(user_id)),
            (None, Some(icao)) => Ok(Self::Airline(icao)),
            (None, None) => Err(DomainError::NoOperatorAssigned),
            (Some(_), Some(_)) => Err(DomainError::DualOperatorAssigned),
        }
    }

    /// Splits the operator back into `(operator_id, operator_airline_icao)` columns.
    pub fn to_columns(&self) -> (Option<i32>, Option<String>) {
        match self {
            Self::User(user_id) => (Some(*user_id), None),
            Self::Airline(icao) => (None, Some(icao.clone())),
        }
    }

    pub fn airline_icao(&self) -> Option<&str> {
        match self {
            Self::Airline(icao) => Some(icao),
            Self::User(_) => None,
        }
    }
}

/// Owner of an aircraft: a user, an airline, or the game itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Owner {
    User(i32),
    Airline(String),
    System,
}

impl Owner {
    /// Builds an owner from the aircraft's nullable owner columns.
    ///
    /// # Returns
    /// - `Ok(Owner::System)` - Neither column was set
    /// - `Err(DomainError::DualOwnerAssigned)` - Both columns were set
    pub fn from_columns(
        registry: &str,
        owner_id: Option<i32>,
        airline_owner_icao: Option<String>,
    ) -> Result<Self, DomainError> {
        match (owner_id, airline_owner_icao) {
            (Some(user_id), None) => Ok(Self::User(user_id)),
            (None, Some(icao)) => Ok(Self::Airline(icao)),
            (None, None) => Ok(Self::System),
            (Some(_), Some(_)) => Err(DomainError::DualOwnerAssigned(registry.to_string())),
        }
    }

    pub fn to_columns(&self) -> (Option<i32>, Option<String>) {
        match self {
            Self::User(user_id) => (Some(*user_id), None),
            Self::Airline(icao) => (None, Some(icao.clone())),
            Self::System => (None, None),
        }
    }
}
