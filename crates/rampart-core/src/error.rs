//! Domain rule rejections.
//!
//! None of these are faults: every one is reported back to the caller and the
//! simulation keeps running.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::TowerId;

/// Why a player intent was refused.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CommandError {
    #[error("not enough gold: costs {cost}, have {gold}")]
    InsufficientGold { cost: u32, gold: u32 },
    #[error("cannot place a tower here: {reason}")]
    InvalidPlacement { reason: PlacementRejection },
    #[error("no tower kind selected for placement")]
    NoPendingSelection,
}

/// The first rule a candidate tower location broke.
#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlacementRejection {
    #[error("location is not a finite point")]
    OutOfBounds,
    #[error("too close to path waypoint {waypoint}")]
    NearPath { waypoint: usize },
    #[error("overlaps tower {}", tower.0)]
    NearTower { tower: TowerId },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("a path needs at least 2 waypoints, got {count}")]
    TooFewWaypoints { count: usize },
}
