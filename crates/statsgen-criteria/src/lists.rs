//! Fixed inclusion lists for the stat categories.
//!
//! Keys match the registry's text ids. These lists are policy, not data:
//! they change by hand when the scoring system adds or retires a stat.

/// Entries no category should ever track.
pub const BASE_BLACKLIST: &[&str] = &[
    "air",
    "cave_air",
    "void_air",
    "barrier",
    "bedrock",
    "command_block",
    "chain_command_block",
    "repeating_command_block",
    "command_block_minecart",
    "structure_block",
    "structure_void",
    "jigsaw",
    "light",
    "debug_stick",
    "knowledge_book",
    "spawner",
];

/// Blocks present in the registry that cannot be mined for score.
pub const MINED_BLACKLIST: &[&str] = &[
    "water",
    "lava",
    "fire",
    "soul_fire",
    "nether_portal",
    "end_portal",
    "end_gateway",
    "piston_head",
    "moving_piston",
    "bubble_column",
    "frosted_ice",
];

/// Items with durability. `broken` counts these and nothing else, and
/// `dropped` refuses them (a breaking tool registers a drop tick).
pub const BREAKABLE_ITEMS: &[&str] = &[
    "wooden_sword",
    "wooden_pickaxe",
    "wooden_axe",
    "wooden_shovel",
    "wooden_hoe",
    "stone_sword",
    "stone_pickaxe",
    "stone_axe",
    "stone_shovel",
    "stone_hoe",
    "iron_sword",
    "iron_pickaxe",
    "iron_axe",
    "iron_shovel",
    "iron_hoe",
    "golden_sword",
    "golden_pickaxe",
    "golden_axe",
    "golden_shovel",
    "golden_hoe",
    "diamond_sword",
    "diamond_pickaxe",
    "diamond_axe",
    "diamond_shovel",
    "diamond_hoe",
    "netherite_sword",
    "netherite_pickaxe",
    "netherite_axe",
    "netherite_shovel",
    "netherite_hoe",
    "leather_helmet",
    "leather_chestplate",
    "leather_leggings",
    "leather_boots",
    "chainmail_helmet",
    "chainmail_chestplate",
    "chainmail_leggings",
    "chainmail_boots",
    "iron_helmet",
    "iron_chestplate",
    "iron_leggings",
    "iron_boots",
    "golden_helmet",
    "golden_chestplate",
    "golden_leggings",
    "golden_boots",
    "diamond_helmet",
    "diamond_chestplate",
    "diamond_leggings",
    "diamond_boots",
    "netherite_helmet",
    "netherite_chestplate",
    "netherite_leggings",
    "netherite_boots",
    "turtle_helmet",
    "bow",
    "crossbow",
    "trident",
    "shield",
    "elytra",
    "shears",
    "flint_and_steel",
    "fishing_rod",
    "carrot_on_a_stick",
    "warped_fungus_on_a_stick",
    "brush",
];

/// Items whose drops are noise rather than play.
pub const DROPPED_BLACKLIST: &[&str] = &[
    "written_book",
    "filled_map",
    "firework_star",
];

/// Items picked up automatically by machinery, not by players.
pub const PICKED_UP_BLACKLIST: &[&str] = &[
    "written_book",
    "filled_map",
];

/// Entities worth a kill score.
pub const KILLED_WHITELIST: &[&str] = &[
    "zombie",
    "husk",
    "drowned",
    "skeleton",
    "stray",
    "wither_skeleton",
    "creeper",
    "spider",
    "cave_spider",
    "enderman",
    "endermite",
    "silverfish",
    "slime",
    "magma_cube",
    "blaze",
    "ghast",
    "witch",
    "phantom",
    "pillager",
    "vindicator",
    "evoker",
    "vex",
    "ravager",
    "guardian",
    "elder_guardian",
    "shulker",
    "piglin",
    "piglin_brute",
    "zombified_piglin",
    "hoglin",
    "zoglin",
    "warden",
    "wither",
    "ender_dragon",
];

/// Entities worth a death-by score. Same shape as the kill list minus the
/// ones that cannot land a killing blow.
pub const KILLED_BY_WHITELIST: &[&str] = &[
    "zombie",
    "husk",
    "drowned",
    "skeleton",
    "stray",
    "wither_skeleton",
    "creeper",
    "spider",
    "cave_spider",
    "enderman",
    "blaze",
    "ghast",
    "witch",
    "phantom",
    "pillager",
    "vindicator",
    "evoker",
    "vex",
    "ravager",
    "guardian",
    "elder_guardian",
    "shulker",
    "piglin",
    "piglin_brute",
    "zombified_piglin",
    "hoglin",
    "zoglin",
    "warden",
    "wither",
    "ender_dragon",
];

/// Custom stats that tick on their own and would drown the board.
pub const CUSTOM_BLACKLIST: &[&str] = &[
    "play_time",
    "total_world_time",
    "time_since_death",
    "time_since_rest",
    "sneak_time",
    "leave_game",
];
