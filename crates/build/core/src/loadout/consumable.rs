//! Consumable catalog and per-item stat contributions.

/// A stat-affecting consumable. At most one of each can be active.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Consumable {
    CandyApple,
    CandyCorn,
    GoldenEgg,
    LunarFortune,
    GreenRockCandy,
    BlueRockCandy,
    RedRockCandy,
    PumpkinPie,
    ArmorOfSalvation,
    EssenceOfCelerity,
    GrailOfMight,
    BirthdayCupcake,
}

/// Stat contribution of a single consumable.
///
/// Percentage fields are fractions: `-0.20` on `activation` means casting
/// 20% faster. Contributions sum across active consumables before the
/// aggregator applies the global caps.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumableStats {
    pub health: i32,
    pub energy: i32,
    pub all_attributes: i32,
    pub armor: i32,
    pub health_regen: i32,
    pub incoming_damage: i32,
    pub attack_speed: f64,
    pub activation: f64,
    pub move_speed: f64,
    pub recharge: f64,
    pub crit_immunity: f64,
}

impl Consumable {
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CandyApple => "Candy Apple",
            Self::CandyCorn => "Candy Corn",
            Self::GoldenEgg => "Golden Egg",
            Self::LunarFortune => "Lunar Fortune",
            Self::GreenRockCandy => "Green Rock Candy",
            Self::BlueRockCandy => "Blue Rock Candy",
            Self::RedRockCandy => "Red Rock Candy",
            Self::PumpkinPie => "Pumpkin Pie",
            Self::ArmorOfSalvation => "Armor of Salvation",
            Self::EssenceOfCelerity => "Essence of Celerity",
            Self::GrailOfMight => "Grail of Might",
            Self::BirthdayCupcake => "Birthday Cupcake",
        }
    }

    /// Stat contribution while active.
    pub fn stats(self) -> ConsumableStats {
        let mut stats = ConsumableStats::default();
        match self {
            Self::CandyApple => {
                stats.health = 100;
                stats.energy = 10;
            }
            Self::CandyCorn | Self::GoldenEgg | Self::LunarFortune => {
                stats.all_attributes = 1;
            }
            Self::GreenRockCandy => {
                stats.attack_speed = 0.15;
                stats.activation = -0.15;
            }
            Self::BlueRockCandy => {
                stats.attack_speed = 0.25;
                stats.activation = -0.20;
            }
            Self::RedRockCandy => {
                stats.attack_speed = 0.33;
                stats.activation = -0.25;
            }
            Self::PumpkinPie => {
                stats.attack_speed = 0.25;
                stats.activation = -0.15;
            }
            Self::ArmorOfSalvation => {
                stats.crit_immunity = 0.50;
                stats.armor = 10;
                stats.health_regen = 1;
                stats.incoming_damage = -5;
            }
            Self::EssenceOfCelerity => {
                stats.move_speed = 0.20;
                stats.attack_speed = 0.20;
                stats.activation = -0.20;
                stats.recharge = -0.20;
            }
            Self::GrailOfMight => {
                stats.health = 100;
                stats.energy = 10;
                stats.all_attributes = 1;
            }
            Self::BirthdayCupcake => {
                stats.health = 100;
                stats.energy = 10;
                stats.move_speed = 0.25;
            }
        }
        stats
    }
}
