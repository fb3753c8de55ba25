#[cfg(test)]
mod tests {
    use crate::catalog::{enemy_spec, tower_spec};
    use crate::commands::PlayerCommand;
    use crate::components::{Enemy, Tower};
    use crate::enums::*;
    use crate::error::{CommandError, PathError, PlacementRejection};
    use crate::events::SimEvent;
    use crate::types::{EnemyId, Path, Position, SimTime, TowerId};

    #[test]
    fn test_two_hits_kill_normal_enemy() {
        let mut enemy = Enemy::new(EnemyId(0), EnemyKind::Normal);
        assert_eq!(enemy.health, 50);

        assert!(!enemy.take_damage(30), "First hit should not kill");
        assert_eq!(enemy.health, 20);

        assert!(enemy.take_damage(30), "Second hit should kill");
        assert_eq!(enemy.health, 0, "Health saturates at zero");
    }

    #[test]
    fn test_boss_stats() {
        let boss = Enemy::new(EnemyId(7), EnemyKind::Boss);
        assert_eq!(boss.max_health, 200);
        assert_eq!(boss.health, 200);
        assert_eq!(boss.reward, 50);
        assert!((boss.speed - 0.5).abs() < 1e-12);
        assert!((boss.radius - 25.0).abs() < 1e-12);
        assert_eq!(boss.leak_damage(), 20);
        assert_eq!(Enemy::new(EnemyId(8), EnemyKind::Normal).leak_damage(), 5);
    }

    #[test]
    fn test_health_fraction() {
        let mut boss = Enemy::new(EnemyId(0), EnemyKind::Boss);
        boss.take_damage(50);
        assert!((boss.health_fraction() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_tower_cooldown_is_strict() {
        let mut tower = Tower::new(TowerId(0), TowerKind::GuanYu);
        assert!(tower.ready_to_fire(0.0), "Never-fired tower is ready");

        tower.last_fire_ms = Some(0.0);
        assert!(!tower.ready_to_fire(1000.0), "Exactly one interval is not enough");
        assert!(tower.ready_to_fire(1000.5));
    }

    #[test]
    fn test_catalog_matches_shop() {
        let costs: Vec<u32> = TowerKind::ALL.iter().map(|&k| tower_spec(k).cost).collect();
        assert_eq!(costs, vec![100, 80, 120, 150]);

        let zhuge = tower_spec(TowerKind::ZhugeLiang);
        assert_eq!(zhuge.damage, 35);
        assert!((zhuge.range - 200.0).abs() < 1e-12);
        assert!((zhuge.fire_interval_ms - 1500.0).abs() < 1e-12);

        assert_eq!(enemy_spec(EnemyKind::Normal).max_health, 50);
    }

    #[test]
    fn test_path_requires_two_waypoints() {
        let err = Path::new(vec![Position::new(0.0, 0.0)]).unwrap_err();
        assert_eq!(err, PathError::TooFewWaypoints { count: 1 });
        assert!(Path::new(Vec::new()).is_err());

        let path = Path::new(vec![Position::ZERO, Position::new(10.0, 0.0)]).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.last_index(), 1);
    }

    #[test]
    fn test_default_route() {
        let path = Path::default();
        assert_eq!(path.len(), 10);
        assert_eq!(path.start(), Position::new(0.0, 300.0));
        assert_eq!(path.get(9), Some(Position::new(1000.0, 400.0)));
        assert_eq!(path.get(10), None);
    }

    #[test]
    fn test_path_deserialization_validates() {
        let path: Path = serde_json::from_str("[[0, 0], [100, 0], [100, 50]]").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.get(2), Some(Position::new(100.0, 50.0)));

        let short: Result<Path, _> = serde_json::from_str("[[0, 0]]");
        assert!(short.is_err(), "Single-waypoint path must be rejected");
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(16.0);
        time.advance(-5.0);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_ms - 16.0).abs() < 1e-12, "Negative deltas count as zero");

        time.advance(f64::INFINITY);
        time.advance(f64::NAN);
        assert_eq!(time.tick, 4);
        assert!((time.elapsed_ms - 16.0).abs() < 1e-12, "Non-finite deltas count as zero");
    }

    #[test]
    fn test_command_wire_format() {
        let json = r#"{"type":"RequestPlacement","kind":"ZhaoYun"}"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            PlayerCommand::RequestPlacement {
                kind: TowerKind::ZhaoYun
            }
        );

        let json = serde_json::to_string(&PlayerCommand::StartWave).unwrap();
        assert_eq!(json, r#"{"type":"StartWave"}"#);
    }

    #[test]
    fn test_rejection_messages() {
        let err = CommandError::InsufficientGold { cost: 100, gold: 0 };
        assert_eq!(err.to_string(), "not enough gold: costs 100, have 0");

        let err = CommandError::InvalidPlacement {
            reason: PlacementRejection::NearTower { tower: TowerId(3) },
        };
        assert_eq!(err.to_string(), "cannot place a tower here: overlaps tower 3");
        assert_eq!(
            PlacementRejection::OutOfBounds.to_string(),
            "location is not a finite point"
        );
    }

    #[test]
    fn test_rejected_event_serializes_nested_error() {
        let event = SimEvent::CommandRejected {
            error: CommandError::NoPendingSelection,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "CommandRejected");
        assert_eq!(value["error"]["type"], "NoPendingSelection");
    }
}
