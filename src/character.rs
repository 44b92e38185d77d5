// Import necessary modules from external crates.
use crate::descriptions;
use serde::{Deserialize, Serialize};
use std::fmt;

// The four Coriolis attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Agility,
    Wits,
    Empathy,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Strength,
        Attribute::Agility,
        Attribute::Wits,
        Attribute::Empathy,
    ];

    // Parse a table or user-supplied attribute name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "strength" => Some(Attribute::Strength),
            "agility" => Some(Attribute::Agility),
            "wits" => Some(Attribute::Wits),
            "empathy" => Some(Attribute::Empathy),
            _ => None,
        }
    }

    // The rulebook blurb the wizard shows next to this attribute.
    pub fn description(&self) -> &'static str {
        match self {
            Attribute::Strength => descriptions::STRENGTH,
            Attribute::Agility => descriptions::AGILITY,
            Attribute::Wits => descriptions::WITS,
            Attribute::Empathy => descriptions::EMPATHY,
        }
    }
}

// Implement the Display trait for the Attribute enum to allow for easier printing.
impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Strength => write!(f, "Strength"),
            Attribute::Agility => write!(f, "Agility"),
            Attribute::Wits => write!(f, "Wits"),
            Attribute::Empathy => write!(f, "Empathy"),
        }
    }
}

// The sixteen Coriolis skills: eight general, eight advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    // General skills, always usable.
    Dexterity,
    Force,
    Infiltration,
    Manipulation,
    MeleeCombat,
    Observation,
    RangedCombat,
    Survival,
    // Advanced skills, usable only when the selected concept allows them.
    Command,
    Culture,
    DataDjinn,
    Medicurgy,
    MysticPowers,
    Pilot,
    Science,
    Technology,
}

impl Skill {
    pub const ALL: [Skill; 16] = [
        Skill::Dexterity,
        Skill::Force,
        Skill::Infiltration,
        Skill::Manipulation,
        Skill::MeleeCombat,
        Skill::Observation,
        Skill::RangedCombat,
        Skill::Survival,
        Skill::Command,
        Skill::Culture,
        Skill::DataDjinn,
        Skill::Medicurgy,
        Skill::MysticPowers,
        Skill::Pilot,
        Skill::Science,
        Skill::Technology,
    ];

    pub const GENERAL: [Skill; 8] = [
        Skill::Dexterity,
        Skill::Force,
        Skill::Infiltration,
        Skill::Manipulation,
        Skill::MeleeCombat,
        Skill::Observation,
        Skill::RangedCombat,
        Skill::Survival,
    ];

    pub fn is_general(&self) -> bool {
        Skill::GENERAL.contains(self)
    }

    // Parse a skill name as it appears in the rule tables (e.g. "Data Djinn").
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dexterity" => Some(Skill::Dexterity),
            "force" => Some(Skill::Force),
            "infiltration" => Some(Skill::Infiltration),
            "manipulation" => Some(Skill::Manipulation),
            "melee combat" => Some(Skill::MeleeCombat),
            "observation" => Some(Skill::Observation),
            "ranged combat" => Some(Skill::RangedCombat),
            "survival" => Some(Skill::Survival),
            "command" => Some(Skill::Command),
            "culture" => Some(Skill::Culture),
            "data djinn" => Some(Skill::DataDjinn),
            "medicurgy" => Some(Skill::Medicurgy),
            "mystic powers" => Some(Skill::MysticPowers),
            "pilot" => Some(Skill::Pilot),
            "science" => Some(Skill::Science),
            "technology" => Some(Skill::Technology),
            _ => None,
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skill::Dexterity => write!(f, "Dexterity"),
            Skill::Force => write!(f, "Force"),
            Skill::Infiltration => write!(f, "Infiltration"),
            Skill::Manipulation => write!(f, "Manipulation"),
            Skill::MeleeCombat => write!(f, "Melee Combat"),
            Skill::Observation => write!(f, "Observation"),
            Skill::RangedCombat => write!(f, "Ranged Combat"),
            Skill::Survival => write!(f, "Survival"),
            Skill::Command => write!(f, "Command"),
            Skill::Culture => write!(f, "Culture"),
            Skill::DataDjinn => write!(f, "Data Djinn"),
            Skill::Medicurgy => write!(f, "Medicurgy"),
            Skill::MysticPowers => write!(f, "Mystic Powers"),
            Skill::Pilot => write!(f, "Pilot"),
            Skill::Science => write!(f, "Science"),
            Skill::Technology => write!(f, "Technology"),
        }
    }
}

// One in-progress character. Every field maps straight onto the character
// sheet; the functions in the engine and allocator modules are the only
// intended writers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterBuild {
    // Personal information
    pub name: String,
    pub appearance: String,

    // Group selections, shared by the whole party
    pub group_concept: String,
    pub group_talent: String,

    // Background selections (foreign keys into the rule tables by exact name)
    pub origin: String,
    pub home_world: String,
    pub upbringing: String,
    pub humanity: String,
    pub concept: String,

    // Attributes (floor 1)
    pub strength: u8,
    pub agility: u8,
    pub wits: u8,
    pub empathy: u8,

    // General skills (floor 0)
    pub dexterity: u8,
    pub force: u8,
    pub infiltration: u8,
    pub manipulation: u8,
    pub melee_combat: u8,
    pub observation: u8,
    pub ranged_combat: u8,
    pub survival: u8,

    // Advanced skills (floor 0, locked unless the concept allows them)
    pub command: u8,
    pub culture: u8,
    pub data_djinn: u8,
    pub medicurgy: u8,
    pub mystic_powers: u8,
    pub pilot: u8,
    pub science: u8,
    pub technology: u8,

    // Talent, Icon and personal problem
    pub talent: String,
    pub icon: String,
    pub icon_talent: String,
    pub icon_talent_description: String,
    pub personal_problem: String,

    // Derived stats, written only by the engine
    pub reputation: i32,
    pub starting_birr: u32,
}

impl Default for CharacterBuild {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterBuild {
    // A fresh build: attributes at their floor of 1, everything else empty.
    pub fn new() -> Self {
        CharacterBuild {
            name: String::new(),
            appearance: String::new(),
            group_concept: String::new(),
            group_talent: String::new(),
            origin: String::new(),
            home_world: String::new(),
            upbringing: String::new(),
            humanity: String::new(),
            concept: String::new(),
            strength: 1,
            agility: 1,
            wits: 1,
            empathy: 1,
            dexterity: 0,
            force: 0,
            infiltration: 0,
            manipulation: 0,
            melee_combat: 0,
            observation: 0,
            ranged_combat: 0,
            survival: 0,
            command: 0,
            culture: 0,
            data_djinn: 0,
            medicurgy: 0,
            mystic_powers: 0,
            pilot: 0,
            science: 0,
            technology: 0,
            talent: String::new(),
            icon: String::new(),
            icon_talent: String::new(),
            icon_talent_description: String::new(),
            personal_problem: String::new(),
            reputation: 0,
            starting_birr: 0,
        }
    }

    pub fn attribute(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Agility => self.agility,
            Attribute::Wits => self.wits,
            Attribute::Empathy => self.empathy,
        }
    }

    pub(crate) fn set_attribute_value(&mut self, attribute: Attribute, value: u8) {
        match attribute {
            Attribute::Strength => self.strength = value,
            Attribute::Agility => self.agility = value,
            Attribute::Wits => self.wits = value,
            Attribute::Empathy => self.empathy = value,
        }
    }

    pub fn skill(&self, skill: Skill) -> u8 {
        match skill {
            Skill::Dexterity => self.dexterity,
            Skill::Force => self.force,
            Skill::Infiltration => self.infiltration,
            Skill::Manipulation => self.manipulation,
            Skill::MeleeCombat => self.melee_combat,
            Skill::Observation => self.observation,
            Skill::RangedCombat => self.ranged_combat,
            Skill::Survival => self.survival,
            Skill::Command => self.command,
            Skill::Culture => self.culture,
            Skill::DataDjinn => self.data_djinn,
            Skill::Medicurgy => self.medicurgy,
            Skill::MysticPowers => self.mystic_powers,
            Skill::Pilot => self.pilot,
            Skill::Science => self.science,
            Skill::Technology => self.technology,
        }
    }

    pub(crate) fn set_skill_value(&mut self, skill: Skill, value: u8) {
        match skill {
            Skill::Dexterity => self.dexterity = value,
            Skill::Force => self.force = value,
            Skill::Infiltration => self.infiltration = value,
            Skill::Manipulation => self.manipulation = value,
            Skill::MeleeCombat => self.melee_combat = value,
            Skill::Observation => self.observation = value,
            Skill::RangedCombat => self.ranged_combat = value,
            Skill::Survival => self.survival = value,
            Skill::Command => self.command = value,
            Skill::Culture => self.culture = value,
            Skill::DataDjinn => self.data_djinn = value,
            Skill::Medicurgy => self.medicurgy = value,
            Skill::MysticPowers => self.mystic_powers = value,
            Skill::Pilot => self.pilot = value,
            Skill::Science => self.science = value,
            Skill::Technology => self.technology = value,
        }
    }

    // Total attribute points currently allocated, floors included.
    pub fn attribute_sum(&self) -> u8 {
        Attribute::ALL.iter().map(|a| self.attribute(*a)).sum()
    }

    // Total skill points currently allocated across all sixteen skills.
    pub fn skill_sum(&self) -> u8 {
        Skill::ALL.iter().map(|s| self.skill(*s)).sum()
    }
}
