// Fixed fighter roster and per-archetype ability data.

use std::fmt;

/// The three selectable fighter identities. Each carries its own special and
/// ultimate behavior; everything else (movement, melee, block) is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Archetype {
    Ronin,
    Tempest,
    Warden,
}

pub const ROSTER: [Archetype; 3] = [Archetype::Ronin, Archetype::Tempest, Archetype::Warden];

/// Selection-time failure: the id is not one of the three roster entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownArchetype(pub String);

impl fmt::Display for UnknownArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown archetype id: {:?}", self.0)
    }
}

impl std::error::Error for UnknownArchetype {}

/// Cosmetic identity consumed by render sinks.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeSpec {
    pub name: &'static str,
    pub color: &'static str,
    pub secondary_color: &'static str,
    pub special_name: &'static str,
    pub ultimate_name: &'static str,
}

/// Parameters of a thrown special projectile.
#[derive(Debug, Clone, Copy)]
pub struct BoltSpec {
    pub speed: f32,
    pub size: f32,
    pub color: &'static str,
    pub damage: i32,
}

/// What a special ability does when it fires.
#[derive(Debug, Clone, Copy)]
pub enum SpecialKind {
    /// Launch a projectile in the facing direction.
    Bolt(BoltSpec),
    /// Immediate close-range strike with heavy knockback and a launch.
    Burst {
        range: f32,
        damage: i32,
        knockback: f32,
        launch: f32,
    },
}

/// What an ultimate ability does when it fires.
#[derive(Debug, Clone, Copy)]
pub enum UltimateKind {
    /// Scatter cosmetic decoys around the caster.
    Decoys { count: usize, spread: f32, life: u32 },
    /// Unavoidable strike; the struck fighter receives the mercy window.
    Smite { damage: i32, ward: u32 },
    /// Immediate heal plus a lingering regeneration aura.
    Mend { heal: i32, aura: u32 },
}

impl Archetype {
    /// Resolves a selection id to a roster entry.
    pub fn lookup(id: &str) -> Result<Archetype, UnknownArchetype> {
        match id {
            "ronin" => Ok(Archetype::Ronin),
            "tempest" => Ok(Archetype::Tempest),
            "warden" => Ok(Archetype::Warden),
            other => Err(UnknownArchetype(other.to_string())),
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Archetype::Ronin => "ronin",
            Archetype::Tempest => "tempest",
            Archetype::Warden => "warden",
        }
    }

    pub fn spec(self) -> ArchetypeSpec {
        match self {
            Archetype::Ronin => ArchetypeSpec {
                name: "Ronin",
                color: "#ff6600",
                secondary_color: "#ffaa00",
                special_name: "Ki Orb",
                ultimate_name: "Afterimages",
            },
            Archetype::Tempest => ArchetypeSpec {
                name: "Tempest",
                color: "#0033cc",
                secondary_color: "#6666ff",
                special_name: "Arc Lance",
                ultimate_name: "Skyfall",
            },
            Archetype::Warden => ArchetypeSpec {
                name: "Warden",
                color: "#ff66cc",
                secondary_color: "#ffccff",
                special_name: "Breaker Palm",
                ultimate_name: "Second Wind",
            },
        }
    }

    pub fn special(self) -> SpecialKind {
        match self {
            // Slow, wide orb.
            Archetype::Ronin => SpecialKind::Bolt(BoltSpec {
                speed: 8.0,
                size: 20.0,
                color: "#00aaff",
                damage: 15,
            }),
            // Fast, narrow lance that hits harder.
            Archetype::Tempest => SpecialKind::Bolt(BoltSpec {
                speed: 12.0,
                size: 15.0,
                color: "#ffffff",
                damage: 20,
            }),
            Archetype::Warden => SpecialKind::Burst {
                range: 100.0,
                damage: 25,
                knockback: 15.0,
                launch: -10.0,
            },
        }
    }

    pub fn ultimate(self) -> UltimateKind {
        match self {
            Archetype::Ronin => UltimateKind::Decoys {
                count: 3,
                spread: 80.0,
                life: 60,
            },
            Archetype::Tempest => UltimateKind::Smite {
                damage: 30,
                ward: 60,
            },
            Archetype::Warden => UltimateKind::Mend {
                heal: 30,
                aura: 100,
            },
        }
    }
}
