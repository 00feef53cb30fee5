/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatConfig {
    /// Melee contact distance used by the fallback per-tick behavior.
    pub melee_reach: f32,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of ability slots scanned by spell selection. An actor may know
    /// fewer; empty slots simply never match.
    pub const MAX_KNOWN_ABILITIES: usize = 4;
    /// Effect slots carried by one ability definition.
    pub const MAX_ABILITY_EFFECTS: usize = 3;

    // ===== runtime-tunable defaults =====
    /// Interval between out-of-combat-area checks, in milliseconds.
    pub const EVADE_CHECK_INTERVAL_MS: u32 = 2500;
    pub const DEFAULT_MELEE_REACH: f32 = 5.0;

    pub fn new() -> Self {
        Self {
            melee_reach: Self::DEFAULT_MELEE_REACH,
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
