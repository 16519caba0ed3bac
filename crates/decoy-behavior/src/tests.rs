#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use glam::Vec3;

    use decoy_core::components::*;
    use decoy_core::enums::{EntityKind, Skill, Species, Tolerance};
    use decoy_core::settings::EffectSettings;

    use crate::dice::{success_roll, Dice};
    use crate::formulas::*;
    use crate::fsm::{MovementAction, MovementPhase, MovementTask, Observation};
    use crate::overrides::{pinned, reassert, OverrideSet, OverrideTarget};
    use crate::profiles::get_profile;

    /// Dice that replay scripted percentile rolls, then fall back to a constant.
    struct ScriptedDice {
        rolls: VecDeque<i32>,
        fallback: i32,
    }

    impl ScriptedDice {
        fn new(rolls: &[i32], fallback: i32) -> Self {
            Self {
                rolls: rolls.iter().copied().collect(),
                fallback,
            }
        }
    }

    impl Dice for ScriptedDice {
        fn d100(&mut self) -> i32 {
            self.rolls.pop_front().unwrap_or(self.fallback)
        }
        fn unit(&mut self) -> f32 {
            0.5
        }
        fn between(&mut self, lo: i32, _hi: i32) -> i32 {
            lo
        }
    }

    const DT: f32 = 1.0 / 30.0;

    fn obs(decoy: Vec3, waypoint: Vec3) -> Option<Observation> {
        Some(Observation {
            decoy,
            waypoint: Some(waypoint),
        })
    }

    // ---- Formulas ----

    #[test]
    fn test_proximity_threshold_formula_and_monotonic() {
        let mut previous = f32::INFINITY;
        for m in 1..=100 {
            let t = proximity_threshold(m);
            assert!((t - (0.8 - m as f32 / 250.0)).abs() < 1e-6);
            assert!(t <= previous, "threshold must not grow with magnitude");
            previous = t;
        }
        assert!((proximity_threshold(100) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_maintain_chance() {
        assert_eq!(maintain_chance(40, 30, 30), 60);
        assert_eq!(maintain_chance(0, 2, 2), 0);
    }

    #[test]
    fn test_agitation_values() {
        assert_eq!(agitate_chance(60), 30);
        assert!((agitate_radius(70) - 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_decoy_dodging_clamps_and_monster_bonus() {
        assert_eq!(decoy_dodging(50, EntityKind::EnemyClass), 200);
        assert_eq!(decoy_dodging(50, EntityKind::EnemyMonster), 360);
        assert_eq!(decoy_dodging(0, EntityKind::EnemyClass), 1);
        assert_eq!(decoy_dodging(400, EntityKind::EnemyClass), 1000);
    }

    #[test]
    fn test_dodge_axis_is_lateral() {
        let axis = dodge_axis(Vec3::new(0.0, -10.0, 0.0), Vec3::ZERO);
        assert!((axis.length() - 1.0).abs() < 1e-5);
        assert!(axis.dot(Vec3::Y).abs() < 1e-5);
        assert!(axis.z.abs() < 1e-5);
        assert!((dodge_distance(50) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_magnitude_and_duration_scaling() {
        let settings = EffectSettings::default();
        let level = caster_level(40);
        assert_eq!(level, 8);

        let mut dice = ScriptedDice::new(&[], 0);
        assert_eq!(roll_magnitude(&settings, level, &mut dice), 26);
        assert_eq!(duration_rounds(&settings, level), 7);

        let huge = EffectSettings {
            magnitude_base_min: 500,
            magnitude_base_max: 500,
            ..settings
        };
        assert_eq!(roll_magnitude(&huge, level, &mut dice), 100);
        assert_eq!(caster_level(0), 1);
    }

    #[test]
    fn test_spell_point_cost() {
        let settings = EffectSettings::default();
        // duration 90 + 15*3 + 75*0 = 135, magnitude 6*15 + 30*3 = 180
        assert_eq!(spell_point_cost(&settings, 40), 315 * 70 / 400);
        assert!(spell_point_cost(&settings, 100) >= 5);
    }

    #[test]
    fn test_success_roll_is_strictly_below() {
        let mut dice = ScriptedDice::new(&[59, 60, 61], 0);
        assert!(success_roll(&mut dice, 60));
        assert!(!success_roll(&mut dice, 60));
        assert!(!success_roll(&mut dice, 60));
    }

    // ---- Movement task ----

    #[test]
    fn test_flicker_toggles_then_forces_visible() {
        let mut task = MovementTask::new();
        let here = Vec3::ZERO;
        let far = Vec3::new(0.0, 30.0, 0.0);

        let mut visibility = Vec::new();
        let mut ticks = 0;
        while matches!(task.phase(), MovementPhase::Flicker { .. }) {
            for action in task.tick(0.005, obs(here, far)) {
                if let MovementAction::SetVisible(v) = action {
                    visibility.push(v);
                }
            }
            ticks += 1;
            assert!(ticks < 1000, "flicker never finished");
        }

        assert_eq!(visibility.len(), 10, "nine toggles then a forced show");
        assert_eq!(&visibility[..4], &[true, false, true, false]);
        assert_eq!(visibility.last(), Some(&true));
        assert!(matches!(task.phase(), MovementPhase::Traveling { .. }));
    }

    #[test]
    fn test_travel_arrives_near_waypoint() {
        let mut task = MovementTask::new();
        let waypoint = Vec3::new(0.0, 10.0, 0.0);
        let mut pos = Vec3::ZERO;
        let mut arrived_at = None;

        for i in 0..600 {
            let actions = task.tick(DT, obs(pos, waypoint));
            if actions.contains(&MovementAction::Arrived) {
                arrived_at = Some(pos);
                break;
            }
            if matches!(task.phase(), MovementPhase::Traveling { .. }) {
                pos.y += 3.0 * DT;
            }
            assert!(i < 599);
        }

        let arrived_at = arrived_at.expect("should arrive");
        assert!(arrived_at.distance(waypoint) < 1.5 + 3.0 * 0.2);
        assert_eq!(task.phase(), MovementPhase::Arrived);
        assert!(task.is_finished());
    }

    #[test]
    fn test_travel_detects_stall() {
        let mut task = MovementTask::new();
        let waypoint = Vec3::new(0.0, 40.0, 0.0);
        let stuck = Vec3::new(0.0, 2.0, 0.0);

        let mut arrived = false;
        for _ in 0..120 {
            if task.tick(DT, obs(stuck, waypoint)).contains(&MovementAction::Arrived) {
                arrived = true;
                break;
            }
        }
        assert!(arrived, "a decoy that stops moving counts as arrived");
    }

    #[test]
    fn test_long_tick_takes_a_single_travel_sample() {
        let mut task = MovementTask::new();
        let here = Vec3::ZERO;
        let far = Vec3::new(0.0, 30.0, 0.0);

        let actions = task.tick(1.0, obs(here, far));
        assert_eq!(actions.last(), Some(&MovementAction::SetVisible(true)));
        assert!(!actions.contains(&MovementAction::Arrived));
        assert!(matches!(
            task.phase(),
            MovementPhase::Traveling {
                last_position: Some(_),
                ..
            }
        ));

        // The next sample waits a full interval, then sees no progress.
        assert!(task.tick(0.05, obs(here, far)).is_empty());
        assert_eq!(task.tick(0.06, obs(here, far)), vec![MovementAction::Arrived]);
    }

    #[test]
    fn test_arrival_is_sticky() {
        let mut task = MovementTask::new();
        let waypoint = Vec3::new(0.0, 1.0, 0.0);
        for _ in 0..60 {
            task.tick(DT, obs(Vec3::ZERO, waypoint));
        }
        assert_eq!(task.phase(), MovementPhase::Arrived);

        for _ in 0..60 {
            let actions = task.tick(DT, obs(Vec3::new(0.0, -50.0, 0.0), waypoint));
            assert!(actions.is_empty());
            assert_eq!(task.phase(), MovementPhase::Arrived);
        }
    }

    #[test]
    fn test_missing_decoy_cancels_task() {
        let mut task = MovementTask::new();
        task.tick(0.0, obs(Vec3::ZERO, Vec3::Y * 20.0));
        let actions = task.tick(DT, None);
        assert!(actions.is_empty());
        assert_eq!(task.phase(), MovementPhase::Cancelled);

        let actions = task.tick(DT, obs(Vec3::ZERO, Vec3::ZERO));
        assert!(actions.is_empty(), "a cancelled task never resumes");
    }

    // ---- Overrides ----

    #[test]
    fn test_override_set_strips_combat_attributes() {
        let mut combat = CombatProfile::default();
        let mut stats = Stats::default();
        let mut skills = Skills::default().with(Skill::Stealth, 80);
        let mut vitals = Vitals {
            health: 40,
            max_health: 40,
            magicka: 30,
            max_magicka: 30,
        };
        let mut resistances = Resistances {
            fire: 50,
            absorbs_spells: true,
            ..Default::default()
        };
        let mut inventory = Inventory {
            items: vec![1, 2],
            equipped: vec![1],
        };

        OverrideSet::for_decoy(30, EntityKind::EnemyMonster).apply(OverrideTarget {
            combat: &mut combat,
            stats: &mut stats,
            skills: &mut skills,
            vitals: &mut vitals,
            resistances: &mut resistances,
            inventory: &mut inventory,
        });

        assert!(pinned(&combat, &vitals));
        assert_eq!(vitals.health, 1);
        assert!(!combat.casts_magic && !combat.has_ranged_attack_1);
        assert_eq!(combat.armor, [60; ARMOR_SLOTS]);
        assert_eq!(skills.get(Skill::Dodging), 120 + 160);
        assert_eq!(skills.get(Skill::Stealth), 0);
        assert_eq!(skills.get(Skill::Streetwise), 500);
        assert_eq!(stats.agility, 100);
        assert_eq!(resistances.fire, 0);
        assert!(!resistances.absorbs_spells);
        assert_eq!(resistances.tolerances.poison, Tolerance::CriticalWeakness);
        assert!(inventory.items.is_empty() && inventory.equipped.is_empty());
    }

    #[test]
    fn test_reassert_is_idempotent() {
        let mut conditions = Conditions {
            paralyzed: true,
            ..Default::default()
        };
        reassert(&mut conditions);
        let once = conditions;
        reassert(&mut conditions);
        assert_eq!(once, conditions);
        assert!(conditions.immune_to_paralysis && !conditions.paralyzed);
        assert_eq!(conditions.to_hit_modifier, -200);
    }

    #[test]
    fn test_profiles() {
        let orc = get_profile(Species::Orc);
        assert_eq!(orc.kind, EntityKind::EnemyMonster);
        assert_eq!(orc.language, Skill::Orcish);
        assert!(get_profile(Species::Harpy).flying);
        assert_eq!(get_profile(Species::Mage).kind, EntityKind::EnemyClass);
    }
}
