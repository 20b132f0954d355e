#[cfg(test)]
mod tests {
    use crate::components::{Battery, Missile, Ship};
    use crate::config::EpisodeConfig;
    use crate::enums::*;
    use crate::error::SalvoError;
    use crate::events::EpisodeEvent;
    use crate::policy::{action_len, observation_len, Action, ObservationView, Policy};
    use crate::types::{range, Position, SimTime};

    // ---- Config ----

    #[test]
    fn test_default_config_is_reference_raid() {
        let config = EpisodeConfig::default();
        assert_eq!(config.missile_count(), 3);
        assert_eq!(config.missiles[1], Position::new(-40.0, 30.0));
        assert_eq!(config.ship_position, Position::new(100.0, 60.0));
        assert_eq!(config.initial_ammo, 7);
        assert_eq!(config.cooldown_ticks, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = EpisodeConfig {
            trace: true,
            seed: 7,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back = EpisodeConfig::from_json_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let json = r#"{
            "missiles": [[0.0, 0.0]],
            "initial_ammo": 2,
            "scoring": { "clean_sweep_bonus": 5.0 }
        }"#;
        let config = EpisodeConfig::from_json_str(json).unwrap();
        assert_eq!(config.missile_count(), 1);
        assert_eq!(config.initial_ammo, 2);
        assert_eq!(config.missile_speed, 5.0);
        assert_eq!(config.scoring.clean_sweep_bonus, 5.0);
        assert_eq!(config.scoring.ship_destroyed_penalty, -300.0);
    }

    #[test]
    fn test_config_accepts_empty_raid() {
        let config = EpisodeConfig::from_json_str(r#"{ "missiles": [] }"#).unwrap();
        assert_eq!(config.missile_count(), 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_parameters() {
        let cases = [
            EpisodeConfig {
                min_intercept_dist: 60.0,
                max_intercept_dist: 60.0,
                ..Default::default()
            },
            EpisodeConfig {
                hit_probability: 1.5,
                ..Default::default()
            },
            EpisodeConfig {
                missile_speed: 0.0,
                ..Default::default()
            },
            EpisodeConfig {
                ship_hit_radius: -1.0,
                ..Default::default()
            },
            EpisodeConfig {
                missiles: vec![Position::new(f64::NAN, 0.0)],
                ..Default::default()
            },
            EpisodeConfig {
                max_ticks: 0,
                ..Default::default()
            },
        ];
        for config in cases {
            assert!(config.validate().is_err(), "accepted {config:?}");
        }
    }

    #[test]
    fn test_config_rejects_malformed_json() {
        let err = EpisodeConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, SalvoError::Json(_)));
    }

    #[test]
    fn test_overshoot_detection() {
        let mut config = EpisodeConfig::default();
        assert!(!config.allows_overshoot());
        config.missile_speed = 11.0;
        assert!(config.allows_overshoot());
    }

    // ---- State model ----

    #[test]
    fn test_battery_readiness() {
        let mut battery = Battery::new(1);
        assert!(battery.is_ready());
        battery.cooldown = 1;
        assert!(!battery.is_ready());
        battery = Battery::new(0);
        assert!(!battery.is_ready());
    }

    #[test]
    fn test_new_entities_start_alive() {
        assert!(Missile::new(Position::ZERO).alive);
        let ship = Ship::new(Position::new(1.0, 2.0), 5.0);
        assert!(ship.alive);
        assert_eq!(ship.hit_radius, 5.0);
    }

    #[test]
    fn test_range_and_time() {
        assert_eq!(range(Position::ZERO, Position::new(3.0, 4.0)), 5.0);
        let mut time = SimTime::default();
        time.advance();
        time.advance();
        assert_eq!(time.tick, 2);
    }

    // ---- Policy layout ----

    #[test]
    fn test_vector_lengths() {
        assert_eq!(observation_len(3), 8);
        assert_eq!(action_len(3), 4);
    }

    #[test]
    fn test_observation_view() {
        let raw = [12.5, 1.0, 0.0, 0.0, 7.0, 0.0];
        let view = ObservationView::parse(&raw).unwrap();
        assert_eq!(view.missile_count(), 2);
        assert!(view.is_alive(0));
        assert!(!view.is_alive(1));
        assert_eq!(view.ammo(), 7.0);
        assert_eq!(view.cooldown(), 0.0);
        let alive: Vec<_> = view.alive_missiles().collect();
        assert_eq!(alive, vec![(0, 12.5)]);

        assert!(ObservationView::parse(&[1.0, 2.0]).is_none());
        assert!(ObservationView::parse(&[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn test_action_from_raw_splits_fire_and_preferences() {
        let action = Action::from_raw(vec![0.9, 0.1, 0.2], 2, 0).unwrap();
        assert_eq!(action.fire_intent, 0.9);
        assert_eq!(action.preferences, vec![0.1, 0.2]);
    }

    #[test]
    fn test_action_wrong_length_is_rejected() {
        let err = Action::from_raw(vec![0.9, 0.1], 2, 4).unwrap_err();
        assert!(matches!(
            err,
            SalvoError::ActionLength {
                tick: 4,
                expected: 3,
                actual: 2
            }
        ));
        assert!(Action::from_raw(vec![0.9, 0.1, 0.2, 0.3], 2, 0).is_err());
    }

    #[test]
    fn test_action_non_finite_is_rejected() {
        let err = Action::from_raw(vec![0.9, f64::NAN, 0.2], 2, 1).unwrap_err();
        match err {
            SalvoError::NonFiniteAction { tick, index, .. } => {
                assert_eq!(tick, 1);
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(Action::from_raw(vec![f64::INFINITY, 0.0, 0.0], 2, 0).is_err());
    }

    #[test]
    fn test_closure_is_a_policy() {
        let mut calls = 0;
        let mut policy = |obs: &[f64]| {
            calls += 1;
            vec![obs.len() as f64]
        };
        assert_eq!(policy.decide(&[1.0, 2.0]), vec![2.0]);
        assert_eq!(policy.name(), "anonymous");
        drop(policy);
        assert_eq!(calls, 1);
    }

    // ---- Events ----

    #[test]
    fn test_event_display() {
        let hit = EpisodeEvent::Intercepted {
            tick: 3,
            missile: 1,
            distance: 42.127,
        };
        assert_eq!(hit.to_string(), "[tick 3] intercepted missile 1 at distance 42.13");
        let done = EpisodeEvent::Finished {
            tick: 9,
            outcome: EpisodeOutcome::ShipDestroyed,
        };
        assert_eq!(done.to_string(), "[tick 9] the ship was destroyed");
    }

    #[test]
    fn test_event_serde() {
        let event = EpisodeEvent::Missed {
            tick: 2,
            missile: 0,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"Missed\""));
        let back: EpisodeEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_launch_outcome_serde() {
        let outcome = LaunchOutcome::Fired {
            target: 2,
            distance: 30.0,
            result: InterceptResult::Hit,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: LaunchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}
