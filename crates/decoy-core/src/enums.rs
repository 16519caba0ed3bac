//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Team affiliation. Entities on the same team never fight each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    #[default]
    None,
    Player,
    PlayerAlly,
    PlayerEnemy,
    Vermin,
    Orcs,
    Giants,
    Harpies,
    Spriggans,
    Centaurs,
    Nymphs,
    Daedra,
    Undead,
    Criminals,
    Guards,
}

/// What kind of body an entity is, which drives several combat formulas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    /// Humanoid with a class career (mage, knight, ...).
    #[default]
    EnemyClass,
    /// Creature with a monster career (orc, harpy, ...).
    EnemyMonster,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn opposite(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

/// Skills referenced by the simulation. Languages double as the skill used
/// to keep an illusion of that species convincing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    Illusion,
    Dodging,
    Stealth,
    HandToHand,
    Streetwise,
    Etiquette,
    Orcish,
    Giantish,
    Harpy,
    Impish,
    Spriggan,
    Centaurian,
    Nymph,
    Dragonish,
    Daedric,
}

impl Skill {
    pub fn display_name(self) -> &'static str {
        match self {
            Skill::Illusion => "Illusion",
            Skill::Dodging => "Dodging",
            Skill::Stealth => "Stealth",
            Skill::HandToHand => "Hand-to-Hand",
            Skill::Streetwise => "Streetwise",
            Skill::Etiquette => "Etiquette",
            Skill::Orcish => "Orcish",
            Skill::Giantish => "Giantish",
            Skill::Harpy => "Harpy",
            Skill::Impish => "Impish",
            Skill::Spriggan => "Spriggan",
            Skill::Centaurian => "Centaurian",
            Skill::Nymph => "Nymph",
            Skill::Dragonish => "Dragonish",
            Skill::Daedric => "Daedric",
        }
    }
}

/// Species a decoy (or any mobile) can take the shape of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    GiantBat,
    Imp,
    Spriggan,
    Orc,
    OrcSergeant,
    Harpy,
    Giant,
    Centaur,
    Nymph,
    Dragonling,
    Daedroth,
    Mage,
    Knight,
    Nightblade,
    Bard,
    Archer,
}

/// How an entity tolerates an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tolerance {
    #[default]
    Normal,
    Immune,
    Resistant,
    LowTolerance,
    CriticalWeakness,
}

/// Physics layer an entity's collision volume lives on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionLayer {
    #[default]
    Default,
    Player,
    Enemies,
    Projectiles,
}

/// Voice cue a decoy can emit to draw attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    /// Gruff "oi!" from a male humanoid.
    Oi,
    /// Taunting laugh from a female humanoid.
    Laugh,
    /// Species bark for monsters.
    Bark,
}

/// Incumbent effects the host may report on an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncumbentEffect {
    Concealment,
    Decoy,
}

/// Active sub-phase of a decoy session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivePhase {
    /// Walking toward the waypoint; aggression locked onto it.
    Traveling,
    /// Arrived (or stalled); luring hostiles in place.
    Sustaining,
}

/// Lifecycle of a decoy session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Inactive,
    Spawning,
    Active(ActivePhase),
    Ending,
}
