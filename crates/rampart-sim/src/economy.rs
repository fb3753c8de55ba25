//! Player economy and running score — stored on the engine, not as ECS entities.

use rampart_core::error::CommandError;

/// Player health and gold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Economy {
    /// Can go to or below zero; the engine latches game over when it does.
    pub health: i32,
    pub gold: u32,
}

impl Economy {
    pub fn new(health: i32, gold: u32) -> Self {
        Self { health, gold }
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.gold >= cost
    }

    /// Deduct `cost`, or refuse without touching the balance.
    pub fn spend(&mut self, cost: u32) -> Result<(), CommandError> {
        if !self.can_afford(cost) {
            return Err(CommandError::InsufficientGold {
                cost,
                gold: self.gold,
            });
        }
        self.gold -= cost;
        Ok(())
    }

    pub fn earn(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    pub fn lose_health(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn is_depleted(&self) -> bool {
        self.health <= 0
    }
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub enemies_killed: u32,
    pub enemies_leaked: u32,
    pub projectiles_fired: u32,
    pub towers_built: u32,
}
