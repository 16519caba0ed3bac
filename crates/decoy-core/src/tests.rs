#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::components::{ProjectileDecoys, Skills};
    use crate::enums::*;
    use crate::events::{Message, SimEvent};
    use crate::settings::EffectSettings;
    use crate::state::SessionSummary;
    use crate::types::{SimTime, Transform};

    fn approx(a: Vec3, b: Vec3) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn test_transform_facing_axes() {
        let level = Transform::facing(Vec3::ZERO, 0.0, 0.0);
        assert!(approx(level.forward(), Vec3::Y));
        assert!(approx(level.right(), Vec3::X));

        let right = Transform::facing(Vec3::ZERO, 90.0, 0.0);
        assert!(approx(right.forward(), Vec3::X), "positive yaw turns right");

        let down = Transform::facing(Vec3::ZERO, 0.0, 30.0);
        assert!(down.forward().z < 0.0, "positive pitch looks down");
        assert!((down.pitch_down_degrees() - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::with_tick_rate(30);
        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(time.tick, 30);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_projectile_decoys_add_is_idempotent() {
        let mut world = hecs::World::new();
        let a = world.spawn(());
        let b = world.spawn(());

        let mut tracker = ProjectileDecoys::default();
        tracker.add_decoy(a);
        tracker.add_decoy(a);
        tracker.add_decoy(b);
        tracker.add_decoy(a);

        assert_eq!(tracker.decoys(), &[a, b]);
    }

    #[test]
    fn test_projectile_decoys_purge_and_hits() {
        let mut world = hecs::World::new();
        let near = world.spawn(());
        let far = world.spawn(());
        let gone = world.spawn(());

        let mut tracker = ProjectileDecoys::default();
        tracker.add_decoy(near);
        tracker.add_decoy(far);
        tracker.add_decoy(gone);
        world.despawn(gone).unwrap();

        tracker.purge(|e| world.contains(e));
        assert_eq!(tracker.decoys().len(), 2);

        let hits = tracker.hits(Vec3::ZERO, |e| {
            if e == near {
                Some(Vec3::new(0.39, 0.0, 0.0))
            } else {
                Some(Vec3::new(0.41, 0.0, 0.0))
            }
        });
        assert_eq!(hits, vec![near]);
    }

    #[test]
    fn test_skills_default_zero() {
        let skills = Skills::default().with(Skill::Orcish, 40);
        assert_eq!(skills.get(Skill::Orcish), 40);
        assert_eq!(skills.get(Skill::Daedric), 0);
    }

    #[test]
    fn test_message_names_skill_and_lingers_longer_when_longer() {
        let msg = Message::LackSkillToMaintain {
            skill: Skill::Orcish,
        };
        assert!(msg.text().contains("Orcish"));

        let short = Message::LostConcentration;
        assert!(msg.linger_secs() > short.linger_secs());
        let expected = 0.8 + short.text().len() as f32 * 0.03;
        assert!((short.linger_secs() - expected).abs() < 1e-5);
    }

    #[test]
    fn test_session_phase_serde() {
        let variants = vec![
            SessionPhase::Inactive,
            SessionPhase::Spawning,
            SessionPhase::Active(ActivePhase::Traveling),
            SessionPhase::Active(ActivePhase::Sustaining),
            SessionPhase::Ending,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: SessionPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_event_and_summary_serialize() {
        let event = SimEvent::Hud {
            message: Message::LostConcentration,
            linger_secs: 1.0,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("Hud"));
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);

        let summary = SessionSummary {
            id: 3,
            phase: SessionPhase::Active(ActivePhase::Traveling),
            magnitude: 40,
            rounds_remaining: 5,
            at_destination: false,
            decoy: Some(7),
            waypoint: Some(8),
        };
        let json = serde_json::to_string(&summary).unwrap();
        let back: SessionSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, back);
    }

    #[test]
    fn test_effect_settings_from_json() {
        let json = r#"{
            "duration_base": 4, "duration_plus": 2, "duration_per_level": 1,
            "magnitude_base_min": 5, "magnitude_base_max": 5,
            "magnitude_plus_min": 1, "magnitude_plus_max": 1, "magnitude_per_level": 2
        }"#;
        let settings: EffectSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.duration_base, 4);
        assert_eq!(settings.magnitude_per_level, 2);
    }
}
