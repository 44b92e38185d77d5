// Static rule tables for Coriolis character creation. Loaded once, never
// mutated; every selection a build makes is a foreign key into one of these
// by exact name.
use crate::character::{Attribute, Skill};
use crate::descriptions;
use crate::error::{BuildError, NotFound};

// Socioeconomic background. Sets both point budgets, the reputation base and
// the starting money.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Upbringing {
    pub name: &'static str,
    pub rep_base: i32,
    pub skill_points: u8,
    pub attribute_points: u8,
    pub starting_birr: u32,
}

// A talent granted automatically by a mutated humanity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InnateTalent {
    pub name: &'static str,
    pub description: &'static str,
}

// Baseline or mutated lineage. Divides reputation and may force a talent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Humanity {
    pub name: &'static str,
    pub rep_divisor: i32,
    pub description: &'static str,
    pub innate_talent: Option<InnateTalent>,
}

impl Humanity {
    pub fn is_innate(&self) -> bool {
        self.innate_talent.is_some()
    }
}

// Profession and role. Sets the reputation bonus, the key attribute and which
// advanced skills the character may learn. The skill list mirrors the printed
// concept cards, so some entries name general skills; only the advanced ones
// among them unlock anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Concept {
    pub name: &'static str,
    pub rep_bonus: i32,
    pub key_attribute: Attribute,
    pub advanced_skills: [Skill; 4],
}

// A purchasable talent, restricted to a set of concept families.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Talent {
    pub name: &'static str,
    pub concepts: &'static [&'static str],
    pub description: &'static str,
}

// One of the nine Icons, each granting an informational icon talent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icon {
    pub name: &'static str,
    pub description: &'static str,
    pub talent: &'static str,
    pub talent_description: &'static str,
}

// A planetary origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub name: &'static str,
    pub description: &'static str,
}

// A group concept and the player concepts it suggests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupConcept {
    pub name: &'static str,
    pub concepts: &'static [&'static str],
}

// A group talent list, keyed by group concept name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupTalent {
    pub name: &'static str,
    pub talents: &'static [&'static str],
}

pub static UPBRINGINGS: [Upbringing; 3] = [
    Upbringing {
        name: "Plebian",
        rep_base: 2,
        skill_points: 8,
        attribute_points: 15,
        starting_birr: 500,
    },
    Upbringing {
        name: "Stationary",
        rep_base: 4,
        skill_points: 10,
        attribute_points: 14,
        starting_birr: 1000,
    },
    Upbringing {
        name: "Privileged",
        rep_base: 6,
        skill_points: 12,
        attribute_points: 13,
        starting_birr: 2000,
    },
];

pub static HUMANITIES: [Humanity; 4] = [
    Humanity {
        name: "Pure-blood",
        rep_divisor: 1,
        description: descriptions::PURE_BLOOD,
        innate_talent: None,
    },
    Humanity {
        name: "Sirb",
        rep_divisor: 2,
        description: descriptions::SIRB,
        innate_talent: Some(InnateTalent {
            name: "Pheromones",
            description: "Your scent glands let you sway the moods of those around you.",
        }),
    },
    Humanity {
        name: "Xinghur",
        rep_divisor: 2,
        description: descriptions::XINGHUR,
        innate_talent: Some(InnateTalent {
            name: "Resistant",
            description: "Radiation, toxins and thin air barely slow you down.",
        }),
    },
    Humanity {
        name: "Nerid",
        rep_divisor: 2,
        description: descriptions::NERID,
        innate_talent: Some(InnateTalent {
            name: "Water Breather",
            description: "You breathe water as easily as air and swim like you were born to it.",
        }),
    },
];

pub static CONCEPTS: [Concept; 33] = [
    Concept {
        name: "Artist (Courtesan)",
        rep_bonus: 1,
        key_attribute: Attribute::Empathy,
        advanced_skills: [
            Skill::Manipulation,
            Skill::Culture,
            Skill::Dexterity,
            Skill::Observation,
        ],
    },
    Concept {
        name: "Artist (Musician)",
        rep_bonus: 1,
        key_attribute: Attribute::Empathy,
        advanced_skills: [
            Skill::Manipulation,
            Skill::Culture,
            Skill::Infiltration,
            Skill::Observation,
        ],
    },
    Concept {
        name: "Artist (Poet)",
        rep_bonus: 1,
        key_attribute: Attribute::Empathy,
        advanced_skills: [
            Skill::Manipulation,
            Skill::Culture,
            Skill::Dexterity,
            Skill::Infiltration,
        ],
    },
    Concept {
        name: "Data Spider (Analyst)",
        rep_bonus: 0,
        key_attribute: Attribute::Wits,
        advanced_skills: [
            Skill::DataDjinn,
            Skill::Culture,
            Skill::Manipulation,
            Skill::Science,
        ],
    },
    Concept {
        name: "Data Spider (Correspondent)",
        rep_bonus: 0,
        key_attribute: Attribute::Wits,
        advanced_skills: [
            Skill::Culture,
            Skill::Manipulation,
            Skill::Infiltration,
            Skill::Observation,
        ],
    },
    Concept {
        name: "Data Spider (Data Djinn)",
        rep_bonus: 0,
        key_attribute: Attribute::Wits,
        advanced_skills: [
            Skill::DataDjinn,
            Skill::Manipulation,
            Skill::Observation,
            Skill::Science,
        ],
    },
    Concept {
        name: "Fugitive (Criminal)",
        rep_bonus: -2,
        key_attribute: Attribute::Empathy,
        advanced_skills: [
            Skill::Force,
            Skill::MeleeCombat,
            Skill::Dexterity,
            Skill::Infiltration,
        ],
    },
    Concept {
        name: "Fugitive (Mystic)",
        rep_bonus: -2,
        key_attribute: Attribute::Empathy,
        advanced_skills: [
            Skill::Manipulation,
            Skill::MysticPowers,
            Skill::Dexterity,
            Skill::Infiltration,
        ],
    },
    Concept {
        name: "Fugitive (Revolutionary)",
        rep_bonus: -2,
        key_attribute: Attribute::Empathy,
        advanced_skills: [
            Skill::RangedCombat,
            Skill::Dexterity,
            Skill::Observation,
            Skill::Survival,
        ],
    },
    Concept {
        name: "Negotiator (Agitator)",
        rep_bonus: 1,
        key_attribute: Attribute::Empathy,
        advanced_skills: [
            Skill::DataDjinn,
            Skill::Force,
            Skill::Manipulation,
            Skill::Culture,
        ],
    },
    Concept {
        name: "Negotiator (Diplomat)",
        rep_bonus: 1,
        key_attribute: Attribute::Empathy,
        advanced_skills: [
            Skill::Command,
            Skill::Culture,
            Skill::Manipulation,
            Skill::MeleeCombat,
        ],
    },
    Concept {
        name: "Negotiator (Peddler)",
        rep_bonus: 1,
        key_attribute: Attribute::Empathy,
        advanced_skills: [
            Skill::Culture,
            Skill::Manipulation,
            Skill::Observation,
            Skill::Pilot,
        ],
    },
    Concept {
        name: "Operative (Spy)",
        rep_bonus: 0,
        key_attribute: Attribute::Agility,
        advanced_skills: [
            Skill::DataDjinn,
            Skill::Manipulation,
            Skill::Infiltration,
            Skill::RangedCombat,
        ],
    },
    Concept {
        name: "Operative (Guard)",
        rep_bonus: 0,
        key_attribute: Attribute::Agility,
        advanced_skills: [
            Skill::Force,
            Skill::MeleeCombat,
            Skill::RangedCombat,
            Skill::Observation,
        ],
    },
    Concept {
        name: "Operative (Assassin)",
        rep_bonus: 0,
        key_attribute: Attribute::Agility,
        advanced_skills: [
            Skill::DataDjinn,
            Skill::Manipulation,
            Skill::Infiltration,
            Skill::RangedCombat,
        ],
    },
    Concept {
        name: "Pilot (Driver)",
        rep_bonus: 0,
        key_attribute: Attribute::Agility,
        advanced_skills: [
            Skill::Force,
            Skill::Pilot,
            Skill::RangedCombat,
            Skill::Survival,
        ],
    },
    Concept {
        name: "Pilot (Fighter Pilot)",
        rep_bonus: 0,
        key_attribute: Attribute::Agility,
        advanced_skills: [
            Skill::DataDjinn,
            Skill::Pilot,
            Skill::RangedCombat,
            Skill::Technology,
        ],
    },
    Concept {
        name: "Pilot (Freighter Pilot)",
        rep_bonus: 0,
        key_attribute: Attribute::Agility,
        advanced_skills: [
            Skill::DataDjinn,
            Skill::Force,
            Skill::Pilot,
            Skill::Technology,
        ],
    },
    Concept {
        name: "Preacher (Ascetic)",
        rep_bonus: 1,
        key_attribute: Attribute::Empathy,
        advanced_skills: [
            Skill::Force,
            Skill::Culture,
            Skill::Dexterity,
            Skill::Science,
        ],
    },
    Concept {
        name: "Preacher (Missionary)",
        rep_bonus: 1,
        key_attribute: Attribute::Empathy,
        advanced_skills: [
            Skill::Culture,
            Skill::Manipulation,
            Skill::Dexterity,
            Skill::Survival,
        ],
    },
    Concept {
        name: "Preacher (Prophet)",
        rep_bonus: 1,
        key_attribute: Attribute::Empathy,
        advanced_skills: [
            Skill::Force,
            Skill::Culture,
            Skill::Manipulation,
            Skill::Observation,
        ],
    },
    Concept {
        name: "Scientist (Archaeologist)",
        rep_bonus: 1,
        key_attribute: Attribute::Wits,
        advanced_skills: [
            Skill::Culture,
            Skill::Observation,
            Skill::Science,
            Skill::Survival,
        ],
    },
    Concept {
        name: "Scientist (Medicurg)",
        rep_bonus: 1,
        key_attribute: Attribute::Wits,
        advanced_skills: [
            Skill::Medicurgy,
            Skill::Manipulation,
            Skill::Observation,
            Skill::Science,
        ],
    },
    Concept {
        name: "Scientist (Technician)",
        rep_bonus: 1,
        key_attribute: Attribute::Wits,
        advanced_skills: [
            Skill::Force,
            Skill::Technology,
            Skill::Observation,
            Skill::Science,
        ],
    },
    Concept {
        name: "Ship Worker (Deckhand)",
        rep_bonus: -1,
        key_attribute: Attribute::Strength,
        advanced_skills: [
            Skill::Force,
            Skill::Manipulation,
            Skill::Dexterity,
            Skill::Culture,
        ],
    },
    Concept {
        name: "Ship Worker (Dock Worker)",
        rep_bonus: -1,
        key_attribute: Attribute::Strength,
        advanced_skills: [
            Skill::Force,
            Skill::MeleeCombat,
            Skill::Dexterity,
            Skill::Technology,
        ],
    },
    Concept {
        name: "Ship Worker (Engineer)",
        rep_bonus: -1,
        key_attribute: Attribute::Strength,
        advanced_skills: [
            Skill::DataDjinn,
            Skill::Force,
            Skill::Observation,
            Skill::Technology,
        ],
    },
    Concept {
        name: "Soldier (Legionnaire)",
        rep_bonus: -1,
        key_attribute: Attribute::Agility,
        advanced_skills: [
            Skill::Force,
            Skill::MeleeCombat,
            Skill::RangedCombat,
            Skill::Survival,
        ],
    },
    Concept {
        name: "Soldier (Mercenary)",
        rep_bonus: -1,
        key_attribute: Attribute::Agility,
        advanced_skills: [
            Skill::MeleeCombat,
            Skill::Dexterity,
            Skill::Observation,
            Skill::RangedCombat,
        ],
    },
    Concept {
        name: "Soldier (Officer)",
        rep_bonus: -1,
        key_attribute: Attribute::Agility,
        advanced_skills: [
            Skill::Command,
            Skill::Culture,
            Skill::MeleeCombat,
            Skill::RangedCombat,
        ],
    },
    Concept {
        name: "Trailblazer (Colonist)",
        rep_bonus: 0,
        key_attribute: Attribute::Wits,
        advanced_skills: [
            Skill::Force,
            Skill::Dexterity,
            Skill::RangedCombat,
            Skill::Survival,
        ],
    },
    Concept {
        name: "Trailblazer (Prospector)",
        rep_bonus: 0,
        key_attribute: Attribute::Wits,
        advanced_skills: [
            Skill::Pilot,
            Skill::Technology,
            Skill::Science,
            Skill::Survival,
        ],
    },
    Concept {
        name: "Trailblazer (Scout)",
        rep_bonus: 0,
        key_attribute: Attribute::Wits,
        advanced_skills: [
            Skill::Infiltration,
            Skill::RangedCombat,
            Skill::Observation,
            Skill::Survival,
        ],
    },
];

pub static TALENTS: [Talent; 26] = [
    Talent {
        name: "Blessing",
        concepts: &["Preacher"],
        description: "You can bless people and items, providing spiritual comfort.",
    },
    Talent {
        name: "Combat Veteran",
        concepts: &["Soldier", "Trailblazer", "Operative"],
        description: "Your extensive combat experience gives you an edge in battle.",
    },
    Talent {
        name: "Defensive",
        concepts: &["Operative", "Fugitive", "Soldier", "Pilot"],
        description: "You excel at defensive maneuvers in combat.",
    },
    Talent {
        name: "Executioner",
        concepts: &["Soldier", "Operative"],
        description: "You are skilled at delivering lethal blows.",
    },
    Talent {
        name: "Exo Specialist",
        concepts: &["Ship Worker", "Soldier"],
        description: "You are an expert in exoskeleton operation.",
    },
    Talent {
        name: "Faction Standing",
        concepts: &["Negotiator", "Preacher", "Fugitive", "Artist"],
        description: "You have good standing with a particular faction.",
    },
    Talent {
        name: "Field Medicurg",
        concepts: &["Scientist", "Operative"],
        description: "You can provide emergency medical treatment in the field.",
    },
    Talent {
        name: "Gear Head",
        concepts: &["Ship Worker", "Data Spider"],
        description: "You have an intuitive understanding of machinery.",
    },
    Talent {
        name: "Intimidating",
        concepts: &["Soldier", "Negotiator", "Data Spider"],
        description: "Your presence is intimidating to others.",
    },
    Talent {
        name: "Judge of Character",
        concepts: &["Negotiator", "Fugitive", "Preacher"],
        description: "You can quickly assess someone's character.",
    },
    Talent {
        name: "Licensed",
        concepts: &["Scientist", "Soldier", "Negotiator", "Data Spider", "Ship Worker"],
        description: "You hold official licenses for restricted activities.",
    },
    Talent {
        name: "Machinegunner",
        concepts: &["Soldier", "Trailblazer"],
        description: "You are skilled with automatic weapons.",
    },
    Talent {
        name: "Malicious",
        concepts: &["Preacher"],
        description: "You can instill fear and doubt in others.",
    },
    Talent {
        name: "Nine Lives",
        concepts: &["Trailblazer"],
        description: "You have an uncanny ability to survive dangerous situations.",
    },
    Talent {
        name: "Point Blank",
        concepts: &["Operative", "Soldier", "Trailblazer", "Negotiator"],
        description: "You excel at close-range combat.",
    },
    Talent {
        name: "Rapid Reload",
        concepts: &["Soldier", "Operative", "Trailblazer"],
        description: "You can reload weapons with exceptional speed.",
    },
    Talent {
        name: "Rugged",
        concepts: &["Trailblazer", "Soldier"],
        description: "You are accustomed to harsh environments.",
    },
    Talent {
        name: "Seductive",
        concepts: &["Artist", "Ship Worker"],
        description: "You can charm and seduce others.",
    },
    Talent {
        name: "Sprinter",
        concepts: &["Operative", "Ship Worker"],
        description: "You can run faster than most people.",
    },
    Talent {
        name: "Soothing",
        concepts: &["Preacher", "Negotiator", "Fugitive"],
        description: "You can calm others in tense situations.",
    },
    Talent {
        name: "Talisman Maker",
        concepts: &["Preacher", "Negotiator"],
        description: "You can create talismans with spiritual significance.",
    },
    Talent {
        name: "The Hassassin's Thrust",
        concepts: &["Operative", "Soldier"],
        description: "You are skilled at delivering precise, deadly strikes.",
    },
    Talent {
        name: "Third Eye",
        concepts: &["Trailblazer", "Fugitive", "Soldier"],
        description: "You have heightened awareness of your surroundings.",
    },
    Talent {
        name: "Tough",
        concepts: &["Trailblazer", "Ship Worker"],
        description: "You can endure more physical punishment than most.",
    },
    Talent {
        name: "Wealthy Family",
        concepts: &["Data Spider"],
        description: "You come from a wealthy family with connections.",
    },
    Talent {
        name: "Zero-G Training",
        concepts: &["Operative", "Soldier", "Pilot", "Ship Worker"],
        description: "You are trained to operate in zero-gravity environments.",
    },
];

pub static ICONS: [Icon; 9] = [
    Icon {
        name: "The Lady of Tears",
        description: "Patron of mercy, martyrs and the grieving.",
        talent: "The Lady's Grief",
        talent_description: "Once per session, you may pray to the Lady to save a dying friend.",
    },
    Icon {
        name: "The Dancer",
        description: "Patron of motion, music and luck in love.",
        talent: "Dancer's Grace",
        talent_description: "Once per session, you may pray to the Dancer to move without being seen or heard.",
    },
    Icon {
        name: "The Deckhand",
        description: "Patron of honest labor and those who keep ships alive.",
        talent: "Deckhand's Instinct",
        talent_description: "Once per session, you may pray to the Deckhand to find the fault in a machine.",
    },
    Icon {
        name: "The Gambler",
        description: "Patron of risk-takers, fortune and second chances.",
        talent: "Gambler's Luck",
        talent_description: "Once per session, you may pray to the Gambler to reroll a failed gamble.",
    },
    Icon {
        name: "The Merchant",
        description: "Patron of trade, contracts and the spoken deal.",
        talent: "Merchant's Tongue",
        talent_description: "Once per session, you may pray to the Merchant to sweeten a bargain.",
    },
    Icon {
        name: "The Traveler",
        description: "Patron of wanderers and everyone far from home.",
        talent: "Traveler's Road",
        talent_description: "Once per session, you may pray to the Traveler to find a way through or out.",
    },
    Icon {
        name: "The Messenger",
        description: "Patron of news, couriers and sudden truths.",
        talent: "Messenger's Insight",
        talent_description: "Once per session, you may pray to the Messenger to learn one true thing.",
    },
    Icon {
        name: "The Judge",
        description: "Patron of law, vengeance and the settling of debts.",
        talent: "Judge's Verdict",
        talent_description: "Once per session, you may pray to the Judge to strike true against a wrongdoer.",
    },
    Icon {
        name: "The Faceless",
        description: "Patron of the nameless, the hidden and the forgotten.",
        talent: "Faceless Anonymity",
        talent_description: "Once per session, you may pray to the Faceless to pass unrecognized.",
    },
];

pub static ORIGINS: [Origin; 5] = [
    Origin {
        name: "Algol",
        description: descriptions::ALGOL,
    },
    Origin {
        name: "Mira",
        description: descriptions::MIRA,
    },
    Origin {
        name: "Kua",
        description: descriptions::KUA,
    },
    Origin {
        name: "Dabaran",
        description: descriptions::DABARAN,
    },
    Origin {
        name: "Zalos",
        description: descriptions::ZALOS,
    },
];

pub const HOME_WORLDS: [&str; 2] = ["Zenitian", "Firstcome"];

pub static GROUP_CONCEPTS: [GroupConcept; 5] = [
    GroupConcept {
        name: "Free Traders",
        concepts: &[
            "Negotiator (Peddler)",
            "Pilot (Freighter Pilot)",
            "Scientist (Technician)",
            "Ship Worker (Deckhand)",
            "Ship Worker (Dock Worker)",
            "Soldier (Legionnaire)",
        ],
    },
    GroupConcept {
        name: "Mercenaries",
        concepts: &[
            "Soldier (Officer)",
            "Soldier (Legionnaire)",
            "Trailblazer (Scout)",
            "Pilot (Fighter Pilot)",
            "Scientist (Technician)",
            "Operative (Spy)",
        ],
    },
    GroupConcept {
        name: "Explorers",
        concepts: &[
            "Scientist (Archaeologist)",
            "Trailblazer (Prospector)",
            "Scientist (Technician)",
            "Pilot (Freighter Pilot)",
            "Trailblazer (Scout)",
            "Data Spider (Correspondent)",
        ],
    },
    GroupConcept {
        name: "Agents",
        concepts: &[
            "Operative (Spy)",
            "Trailblazer (Scout)",
            "Soldier (Officer)",
            "Artist (Courtesan)",
            "Data Spider (Correspondent)",
        ],
    },
    GroupConcept {
        name: "Pilgrims",
        concepts: &[
            "Preacher (Missionary)",
            "Negotiator (Diplomat)",
            "Ship Worker (Deckhand)",
            "Artist (Courtesan)",
            "Negotiator (Peddler)",
        ],
    },
];

pub static GROUP_TALENTS: [GroupTalent; 5] = [
    GroupTalent {
        name: "Free Traders",
        talents: &["A Nose for Birr", "Everything is for Sale", "Quickest Route"],
    },
    GroupTalent {
        name: "Mercenaries",
        talents: &["Assault", "Charge", "Situational Awareness"],
    },
    GroupTalent {
        name: "Agents",
        talents: &["A Friend in Every Port", "Assassin's Guild", "Dancers of Ahlam"],
    },
    GroupTalent {
        name: "Explorers",
        talents: &["Seasoned Travelers", "Survivors", "Truth Seekers"],
    },
    GroupTalent {
        name: "Pilgrims",
        talents: &["Last Laugh", "Mercy of the Icons", "One Last Birr"],
    },
];

pub const PERSONAL_PROBLEMS: [&str; 8] = [
    "Addiction",
    "Debt",
    "Nemesis",
    "Wanted",
    "Illness",
    "Poverty",
    "Stigma",
    "Trauma",
];

// Typed lookups by exact name. A miss means "selection incomplete" for the
// caller, never a silent default.

pub fn find_upbringing(name: &str) -> Result<&'static Upbringing, NotFound> {
    UPBRINGINGS
        .iter()
        .find(|u| u.name == name)
        .ok_or_else(|| NotFound::new("upbringing", name))
}

pub fn find_humanity(name: &str) -> Result<&'static Humanity, NotFound> {
    HUMANITIES
        .iter()
        .find(|h| h.name == name)
        .ok_or_else(|| NotFound::new("humanity", name))
}

pub fn find_concept(name: &str) -> Result<&'static Concept, NotFound> {
    CONCEPTS
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| NotFound::new("concept", name))
}

pub fn find_talent(name: &str) -> Result<&'static Talent, NotFound> {
    TALENTS
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| NotFound::new("talent", name))
}

pub fn find_icon(name: &str) -> Result<&'static Icon, NotFound> {
    ICONS
        .iter()
        .find(|i| i.name == name)
        .ok_or_else(|| NotFound::new("icon", name))
}

pub fn find_origin(name: &str) -> Result<&'static Origin, NotFound> {
    ORIGINS
        .iter()
        .find(|o| o.name == name)
        .ok_or_else(|| NotFound::new("origin", name))
}

pub fn find_group_concept(name: &str) -> Result<&'static GroupConcept, NotFound> {
    GROUP_CONCEPTS
        .iter()
        .find(|g| g.name == name)
        .ok_or_else(|| NotFound::new("group concept", name))
}

pub fn find_group_talent(name: &str) -> Result<&'static GroupTalent, NotFound> {
    GROUP_TALENTS
        .iter()
        .find(|g| g.name == name)
        .ok_or_else(|| NotFound::new("group talent", name))
}

// The concept family is the part of the concept name before the first space,
// e.g. "Soldier (Officer)" belongs to the "Soldier" family. Two-word families
// like "Data Spider" and "Ship Worker" are matched on their first word too,
// which is unambiguous in the current tables.
pub fn concept_family(concept_name: &str) -> &str {
    concept_name.split(' ').next().unwrap_or("")
}

// All talents a concept may pick from, in table order.
pub fn talents_for_concept(concept_name: &str) -> Vec<&'static Talent> {
    let family = concept_family(concept_name);
    TALENTS
        .iter()
        .filter(|t| t.concepts.iter().any(|c| concept_family(c) == family))
        .collect()
}

// Proves the randomizer termination invariant for every upbringing/concept
// combination: the total headroom above the floors must cover the point
// budget, or the random walks in the allocator could never spend it all.
pub fn verify_tables() -> Result<(), BuildError> {
    for upbringing in &UPBRINGINGS {
        for concept in &CONCEPTS {
            // One key attribute may reach 5, the other three stop at 4.
            let attribute_headroom: u8 = 4 * 3 + 5;
            if attribute_headroom < upbringing.attribute_points {
                return Err(BuildError::TablesInconsistent(format!(
                    "{} / {}: attribute budget {} exceeds headroom {}",
                    upbringing.name, concept.name, upbringing.attribute_points, attribute_headroom
                )));
            }

            let eligible = eligible_skill_count(concept);
            let skill_headroom = eligible * 3;
            if skill_headroom < upbringing.skill_points as usize {
                return Err(BuildError::TablesInconsistent(format!(
                    "{} / {}: skill budget {} exceeds headroom {} ({} eligible skills)",
                    upbringing.name, concept.name, upbringing.skill_points, skill_headroom, eligible
                )));
            }
        }
    }
    Ok(())
}

fn eligible_skill_count(concept: &Concept) -> usize {
    let unlocked_advanced = concept
        .advanced_skills
        .iter()
        .filter(|s| !s.is_general())
        .count();
    Skill::GENERAL.len() + unlocked_advanced
}
