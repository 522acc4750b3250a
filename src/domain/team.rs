//! Team identity, membership, and money ledger.

use lazy_regex::regex_is_match;
use uuid::Uuid;

use crate::error::EngineError;

pub type TeamId = Uuid;

/// A participating team. Round money is at risk (zeroed on bankrupt or round
/// loss); total money is banked permanently when the team wins a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    name: String,
    members: Vec<String>,
    current_round_money: u32,
    total_money: u32,
    has_free_spin: bool,
}

impl Team {
    pub fn new(name: &str, members: Vec<String>) -> Result<Self, EngineError> {
        let name = name.trim();
        validate_team_name(name)?;
        if members.is_empty() {
            return Err(EngineError::invalid_input(
                "team must have at least one member",
            ));
        }
        let members = members
            .iter()
            .map(|m| {
                validate_member_name(m.trim())?;
                Ok(m.trim().to_string())
            })
            .collect::<Result<Vec<_>, EngineError>>()?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            members,
            current_round_money: 0,
            total_money: 0,
            has_free_spin: false,
        })
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn current_round_money(&self) -> u32 {
        self.current_round_money
    }

    pub fn total_money(&self) -> u32 {
        self.total_money
    }

    pub fn has_free_spin(&self) -> bool {
        self.has_free_spin
    }

    pub fn add_member(&mut self, member: &str) -> Result<(), EngineError> {
        let member = member.trim();
        validate_member_name(member)?;
        if self.members.iter().any(|m| m == member) {
            return Err(EngineError::invalid_input(format!(
                "'{member}' is already on the team"
            )));
        }
        self.members.push(member.to_string());
        Ok(())
    }

    pub fn remove_member(&mut self, member: &str) -> Result<(), EngineError> {
        let pos = self
            .members
            .iter()
            .position(|m| m == member)
            .ok_or_else(|| {
                EngineError::invalid_input(format!("'{member}' is not on the team"))
            })?;
        if self.members.len() <= 1 {
            return Err(EngineError::illegal_state(
                "team must keep at least one member",
            ));
        }
        self.members.remove(pos);
        Ok(())
    }

    /// Credit winnings to the current round. Negative amounts are rejected.
    pub fn add_money(&mut self, amount: i64) -> Result<(), EngineError> {
        let amount = u32::try_from(amount).map_err(|_| EngineError::InvalidAmount(amount))?;
        self.current_round_money += amount;
        Ok(())
    }

    /// Bankrupt penalty: all round money is forfeited.
    pub fn lose_round_money(&mut self) {
        self.current_round_money = 0;
    }

    /// Bank the round money. Called exactly once per round, for the winner,
    /// via [`crate::domain::round::Round::complete`].
    pub fn win_round(&mut self) {
        self.total_money += self.current_round_money;
        self.current_round_money = 0;
    }

    pub fn can_buy_vowel(&self, cost: u32) -> bool {
        self.current_round_money >= cost
    }

    pub fn buy_vowel(&mut self, cost: u32) -> Result<(), EngineError> {
        if !self.can_buy_vowel(cost) {
            return Err(EngineError::InsufficientFunds {
                needed: cost,
                available: self.current_round_money,
            });
        }
        self.current_round_money -= cost;
        Ok(())
    }

    pub fn give_free_spin(&mut self) {
        self.has_free_spin = true;
    }

    pub fn use_free_spin(&mut self) -> Result<(), EngineError> {
        if !self.has_free_spin {
            return Err(EngineError::illegal_state("team has no free spin to use"));
        }
        self.has_free_spin = false;
        Ok(())
    }
}

fn validate_team_name(name: &str) -> Result<(), EngineError> {
    if name.is_empty() {
        return Err(EngineError::invalid_input("team name cannot be empty"));
    }
    if name.len() > 50 || !regex_is_match!(r"^[a-zA-Z0-9\s\-_'.]+$", name) {
        return Err(EngineError::invalid_input(format!(
            "'{name}' is not a valid team name"
        )));
    }
    Ok(())
}

fn validate_member_name(name: &str) -> Result<(), EngineError> {
    if name.is_empty() {
        return Err(EngineError::invalid_input("member name cannot be empty"));
    }
    if name.len() > 30 || !regex_is_match!(r"^[a-zA-Z\s\-'.]+$", name) {
        return Err(EngineError::invalid_input(format!(
            "'{name}' is not a valid member name"
        )));
    }
    Ok(())
}
