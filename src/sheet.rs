// Hand-off boundary to the external sheet renderer and portrait service. The
// renderer gets a flat field set guaranteed internally consistent (budgets
// spent exactly, caps respected); nothing here knows about template layout.
use crate::character::CharacterBuild;
use crate::engine;
use crate::error::BuildError;
use serde::{Deserialize, Serialize};

// The complete field set the character-sheet template consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetData {
    pub name: String,
    pub concept: String,
    pub origin: String,
    pub home_world: String,
    pub upbringing: String,
    pub humanity: String,
    pub group_concept: String,
    pub group_talent: String,

    pub strength: u8,
    pub agility: u8,
    pub wits: u8,
    pub empathy: u8,

    pub dexterity: u8,
    pub force: u8,
    pub infiltration: u8,
    pub manipulation: u8,
    pub melee_combat: u8,
    pub observation: u8,
    pub ranged_combat: u8,
    pub survival: u8,
    pub command: u8,
    pub culture: u8,
    pub data_djinn: u8,
    pub medicurgy: u8,
    pub mystic_powers: u8,
    pub pilot: u8,
    pub science: u8,
    pub technology: u8,

    pub reputation: i32,
    pub starting_birr: u32,
    // The sheet computes these two at fill time.
    pub hit_points: u8,
    pub mind_points: u8,

    pub talent: String,
    pub icon: String,
    pub icon_talent: String,
    pub icon_talent_description: String,
    pub personal_problem: String,
    pub appearance: String,
}

impl SheetData {
    // Only final builds may be handed to the renderer.
    pub fn from_build(build: &CharacterBuild) -> Result<Self, BuildError> {
        if !engine::is_final(build) {
            return Err(BuildError::Incomplete(format!(
                "'{}' is not ready for a character sheet",
                build.name
            )));
        }
        Ok(SheetData {
            name: build.name.clone(),
            concept: build.concept.clone(),
            origin: build.origin.clone(),
            home_world: build.home_world.clone(),
            upbringing: build.upbringing.clone(),
            humanity: build.humanity.clone(),
            group_concept: build.group_concept.clone(),
            group_talent: build.group_talent.clone(),
            strength: build.strength,
            agility: build.agility,
            wits: build.wits,
            empathy: build.empathy,
            dexterity: build.dexterity,
            force: build.force,
            infiltration: build.infiltration,
            manipulation: build.manipulation,
            melee_combat: build.melee_combat,
            observation: build.observation,
            ranged_combat: build.ranged_combat,
            survival: build.survival,
            command: build.command,
            culture: build.culture,
            data_djinn: build.data_djinn,
            medicurgy: build.medicurgy,
            mystic_powers: build.mystic_powers,
            pilot: build.pilot,
            science: build.science,
            technology: build.technology,
            reputation: build.reputation,
            starting_birr: build.starting_birr,
            hit_points: build.strength + build.agility,
            mind_points: build.wits + build.empathy,
            talent: build.talent.clone(),
            icon: build.icon.clone(),
            icon_talent: build.icon_talent.clone(),
            icon_talent_description: build.icon_talent_description.clone(),
            personal_problem: build.personal_problem.clone(),
            appearance: build.appearance.clone(),
        })
    }
}

// The descriptive prompt the external portrait service consumes. Built from
// the concept and appearance text only; the network call lives elsewhere.
pub fn portrait_prompt(build: &CharacterBuild) -> String {
    format!(
        "Detailed pen and ink contour portrait drawing of a {} character from the sci-fi RPG Coriolis. \
        The portrait must be composed to fit a portrait-oriented rectangle box (taller than wide, approximately 3:4 ratio). \
        Focus only on the head, face, and upper shoulders of the character. \
        The style should be clean black line art on white background with detailed facial features. \
        No text, logos, watermarks, signatures, frames, or backgrounds. \
        No color, just black and white line art. \
        Character description: {}",
        build.concept, build.appearance
    )
}
