//! Species-specific profiles.
//!
//! Consolidates per-species parameters used when a decoy takes a shape.

use decoy_core::enums::{EntityKind, Skill, Species, Team};

/// Profile for a species.
pub struct SpeciesProfile {
    pub display_name: &'static str,
    pub kind: EntityKind,
    /// Native team of the species when it spawns wild.
    pub native_team: Team,
    /// Language a caster needs to keep an illusion of this species convincing.
    pub language: Skill,
    pub flying: bool,
    /// Walking speed (units per second).
    pub speed: f32,
    pub max_health: i32,
}

/// Get the profile for a given species.
pub fn get_profile(species: Species) -> SpeciesProfile {
    use EntityKind::{EnemyClass, EnemyMonster};

    let (display_name, kind, native_team, language, flying, speed, max_health) = match species {
        Species::GiantBat => ("Giant Bat", EnemyMonster, Team::Vermin, Skill::Streetwise, true, 5.0, 12),
        Species::Imp => ("Imp", EnemyMonster, Team::Daedra, Skill::Impish, true, 4.0, 20),
        Species::Spriggan => ("Spriggan", EnemyMonster, Team::Spriggans, Skill::Spriggan, false, 2.5, 35),
        Species::Orc => ("Orc", EnemyMonster, Team::Orcs, Skill::Orcish, false, 3.0, 40),
        Species::OrcSergeant => ("Orc Sergeant", EnemyMonster, Team::Orcs, Skill::Orcish, false, 3.0, 55),
        Species::Harpy => ("Harpy", EnemyMonster, Team::Harpies, Skill::Harpy, true, 4.0, 45),
        Species::Giant => ("Giant", EnemyMonster, Team::Giants, Skill::Giantish, false, 2.5, 90),
        Species::Centaur => ("Centaur", EnemyMonster, Team::Centaurs, Skill::Centaurian, false, 4.5, 60),
        Species::Nymph => ("Nymph", EnemyMonster, Team::Nymphs, Skill::Nymph, false, 3.0, 40),
        Species::Dragonling => ("Dragonling", EnemyMonster, Team::Daedra, Skill::Dragonish, true, 4.0, 70),
        Species::Daedroth => ("Daedroth", EnemyMonster, Team::Daedra, Skill::Daedric, false, 3.0, 95),
        Species::Mage => ("Mage", EnemyClass, Team::PlayerEnemy, Skill::Etiquette, false, 3.0, 30),
        Species::Knight => ("Knight", EnemyClass, Team::PlayerEnemy, Skill::Etiquette, false, 3.0, 50),
        Species::Bard => ("Bard", EnemyClass, Team::PlayerEnemy, Skill::Etiquette, false, 3.0, 35),
        Species::Nightblade => ("Nightblade", EnemyClass, Team::Criminals, Skill::Streetwise, false, 3.5, 40),
        Species::Archer => ("Archer", EnemyClass, Team::Criminals, Skill::Streetwise, false, 3.0, 35),
    };

    SpeciesProfile {
        display_name,
        kind,
        native_team,
        language,
        flying,
        speed,
        max_health,
    }
}
