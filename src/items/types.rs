use serde::{Deserialize, Serialize};

/// Loot table tier a caught item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LootCategory {
    Fish,
    Treasure,
    Junk,
}

/// Everything the fishing loot table can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    // Fish
    Cod,
    Salmon,
    TropicalFish,
    Pufferfish,
    // Treasure
    Bow,
    Book,
    FishingRod,
    NameTag,
    NautilusShell,
    Saddle,
    LilyPad,
    // Junk
    Bowl,
    Leather,
    LeatherBoots,
    RottenFlesh,
    Stick,
    String,
    WaterBottle,
    Bone,
    InkSac,
    TripwireHook,
}

impl ItemKind {
    /// Returns the display name for this item kind.
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Cod => "Cod",
            ItemKind::Salmon => "Salmon",
            ItemKind::TropicalFish => "Tropical Fish",
            ItemKind::Pufferfish => "Pufferfish",
            ItemKind::Bow => "Bow",
            ItemKind::Book => "Book",
            ItemKind::FishingRod => "Fishing Rod",
            ItemKind::NameTag => "Name Tag",
            ItemKind::NautilusShell => "Nautilus Shell",
            ItemKind::Saddle => "Saddle",
            ItemKind::LilyPad => "Lily Pad",
            ItemKind::Bowl => "Bowl",
            ItemKind::Leather => "Leather",
            ItemKind::LeatherBoots => "Leather Boots",
            ItemKind::RottenFlesh => "Rotten Flesh",
            ItemKind::Stick => "Stick",
            ItemKind::String => "String",
            ItemKind::WaterBottle => "Water Bottle",
            ItemKind::Bone => "Bone",
            ItemKind::InkSac => "Ink Sac",
            ItemKind::TripwireHook => "Tripwire Hook",
        }
    }

    /// Returns which loot table tier this kind rolls from.
    pub fn category(&self) -> LootCategory {
        match self {
            ItemKind::Cod | ItemKind::Salmon | ItemKind::TropicalFish | ItemKind::Pufferfish => {
                LootCategory::Fish
            }
            ItemKind::Bow
            | ItemKind::Book
            | ItemKind::FishingRod
            | ItemKind::NameTag
            | ItemKind::NautilusShell
            | ItemKind::Saddle
            | ItemKind::LilyPad => LootCategory::Treasure,
            ItemKind::Bowl
            | ItemKind::Leather
            | ItemKind::LeatherBoots
            | ItemKind::RottenFlesh
            | ItemKind::Stick
            | ItemKind::String
            | ItemKind::WaterBottle
            | ItemKind::Bone
            | ItemKind::InkSac
            | ItemKind::TripwireHook => LootCategory::Junk,
        }
    }
}

/// Enchantments that can appear on fishing loot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Enchantment {
    Mending,
    Unbreaking,
    LuckOfTheSea,
    Lure,
    Power,
    Punch,
    Flame,
    Infinity,
    CurseOfVanishing,
    CurseOfBinding,
}

impl Enchantment {
    /// Returns the display name for this enchantment.
    pub fn name(&self) -> &'static str {
        match self {
            Enchantment::Mending => "Mending",
            Enchantment::Unbreaking => "Unbreaking",
            Enchantment::LuckOfTheSea => "Luck of the Sea",
            Enchantment::Lure => "Lure",
            Enchantment::Power => "Power",
            Enchantment::Punch => "Punch",
            Enchantment::Flame => "Flame",
            Enchantment::Infinity => "Infinity",
            Enchantment::CurseOfVanishing => "Curse of Vanishing",
            Enchantment::CurseOfBinding => "Curse of Binding",
        }
    }

    /// Highest level this enchantment rolls at.
    pub fn max_level(&self) -> u8 {
        match self {
            Enchantment::Unbreaking | Enchantment::LuckOfTheSea | Enchantment::Lure => 3,
            Enchantment::Power => 5,
            Enchantment::Punch => 2,
            Enchantment::Mending
            | Enchantment::Flame
            | Enchantment::Infinity
            | Enchantment::CurseOfVanishing
            | Enchantment::CurseOfBinding => 1,
        }
    }
}

/// Formats an enchantment level the way the game displays it (I, II, ... X).
pub fn level_numeral(level: u8) -> &'static str {
    match level {
        1 => "I",
        2 => "II",
        3 => "III",
        4 => "IV",
        5 => "V",
        6 => "VI",
        7 => "VII",
        8 => "VIII",
        9 => "IX",
        10 => "X",
        _ => "?",
    }
}

/// An item pulled out of the water, as reported to the detection loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaughtItem {
    pub kind: ItemKind,
    /// Enchantment levels on the item. Empty for unenchanted catches.
    pub enchantments: Vec<(Enchantment, u8)>,
}

impl CaughtItem {
    /// An unenchanted catch.
    pub fn plain(kind: ItemKind) -> Self {
        Self {
            kind,
            enchantments: Vec::new(),
        }
    }

    /// A catch carrying the given enchantment levels.
    pub fn enchanted(kind: ItemKind, enchantments: Vec<(Enchantment, u8)>) -> Self {
        Self { kind, enchantments }
    }

    /// Returns the level of `enchantment` on this item, if present.
    pub fn level_of(&self, enchantment: Enchantment) -> Option<u8> {
        self.enchantments
            .iter()
            .find(|(e, _)| *e == enchantment)
            .map(|(_, level)| *level)
    }
}
