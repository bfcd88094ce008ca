use super::Human;
use super::Policy;
use super::Remote;
use crate::dice::Roll;
use crate::wire::Connection;

/// How a player decides. An explicit tagged set of variants, so the engine
/// can tell local from remote players without runtime capability probing:
/// broadcast only cares about Remote, decisions go through ::choose on all.
#[derive(Debug)]
pub enum Strategy {
    Policy(Policy),
    Human(Human),
    Remote(Remote),
    #[cfg(test)]
    Script(std::collections::VecDeque<Option<Roll>>),
}

/// Identity plus a move strategy. Names are unique within a game.
#[derive(Debug)]
pub struct Player {
    name: String,
    strategy: Strategy,
}

impl Player {
    pub fn policy(name: &str, policy: Policy) -> Self {
        Self {
            name: name.to_string(),
            strategy: Strategy::Policy(policy),
        }
    }
    pub fn human(name: &str) -> Self {
        Self {
            name: name.to_string(),
            strategy: Strategy::Human(Human::new(name)),
        }
    }
    pub fn remote(name: &str, host: &str, port: u16) -> anyhow::Result<Self> {
        Ok(Self {
            name: name.to_string(),
            strategy: Strategy::Remote(Remote::connect(name, host, port)?),
        })
    }
    #[cfg(test)]
    pub fn scripted(name: &str, moves: Vec<Option<Roll>>) -> Self {
        Self {
            name: name.to_string(),
            strategy: Strategy::Script(moves.into_iter().collect()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// None signals "stop rerolling, bank all scoring dice now". A returned
    /// keep is a claim, not a fact: the turn engine validates it.
    pub fn choose(&mut self, roll: &Roll) -> Option<Roll> {
        match &mut self.strategy {
            Strategy::Policy(policy) => policy.choose(roll),
            Strategy::Human(human) => human.choose(roll),
            Strategy::Remote(remote) => remote.choose(roll),
            #[cfg(test)]
            Strategy::Script(moves) => moves.pop_front().flatten(),
        }
    }

    /// the narration sink for this player, if it has one.
    pub fn outbox(&mut self) -> Option<&mut Connection> {
        match &mut self.strategy {
            Strategy::Remote(remote) => Some(remote.conn()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
