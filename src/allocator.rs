// Point allocation for attributes and skills. Every function here is pure:
// it borrows the current build, validates the requested change against the
// rule tables and returns a new build, or a rejection that leaves the caller's
// build untouched. Nothing is ever partially applied.
use crate::character::{Attribute, CharacterBuild, Skill};
use crate::error::{BuildError, NotFound, Rejection};
use crate::tables::{self, Concept};
use rand::Rng;

pub const ATTRIBUTE_FLOOR: u8 = 1;
pub const KEY_ATTRIBUTE_CAP: u8 = 5;
pub const ATTRIBUTE_CAP: u8 = 4;
pub const SKILL_CAP: u8 = 3;

// The cap for one attribute: 5 for the concept's key attribute, 4 otherwise.
pub fn attribute_cap(concept: &Concept, attribute: Attribute) -> u8 {
    if concept.key_attribute == attribute {
        KEY_ATTRIBUTE_CAP
    } else {
        ATTRIBUTE_CAP
    }
}

// The cap for one skill: general skills are always 3, advanced skills are 3
// only when the concept whitelists them and 0 otherwise.
pub fn skill_cap(concept: &Concept, skill: Skill) -> u8 {
    if skill.is_general() || concept.advanced_skills.contains(&skill) {
        SKILL_CAP
    } else {
        0
    }
}

// Set one attribute to an absolute value, enforcing floor, cap and budget.
pub fn set_attribute(
    build: &CharacterBuild,
    attribute: Attribute,
    new_value: u8,
) -> Result<CharacterBuild, BuildError> {
    let concept = tables::find_concept(&build.concept)?;
    let upbringing = tables::find_upbringing(&build.upbringing)?;

    if new_value < ATTRIBUTE_FLOOR {
        return Err(Rejection::BelowFloor(ATTRIBUTE_FLOOR).into());
    }
    let cap = attribute_cap(concept, attribute);
    if new_value > cap {
        return Err(Rejection::AboveCap(cap).into());
    }

    // The delta may not push the running total past the budget.
    let current = build.attribute(attribute);
    let new_total = build.attribute_sum() - current + new_value;
    if new_total > upbringing.attribute_points {
        return Err(Rejection::BudgetExceeded(upbringing.attribute_points).into());
    }

    let mut updated = build.clone();
    updated.set_attribute_value(attribute, new_value);
    Ok(updated)
}

// Attribute points still unspent, as shown in the wizard's counter.
pub fn attribute_points_remaining(build: &CharacterBuild) -> Result<u8, NotFound> {
    let upbringing = tables::find_upbringing(&build.upbringing)?;
    Ok(upbringing
        .attribute_points
        .saturating_sub(build.attribute_sum()))
}

// The proceed gate: every attribute point spent, none over.
pub fn attributes_complete(build: &CharacterBuild) -> bool {
    match tables::find_upbringing(&build.upbringing) {
        Ok(upbringing) => build.attribute_sum() == upbringing.attribute_points,
        Err(_) => false,
    }
}

// Reset all four attributes to 1, then spend the whole budget one point at a
// time on uniformly drawn attributes that still have room. The headroom check
// up front makes the loop provably finite.
pub fn randomize_attributes(
    build: &CharacterBuild,
    rng: &mut impl Rng,
) -> Result<CharacterBuild, BuildError> {
    let concept = tables::find_concept(&build.concept)?;
    let upbringing = tables::find_upbringing(&build.upbringing)?;

    let mut updated = build.clone();
    for attribute in Attribute::ALL {
        updated.set_attribute_value(attribute, ATTRIBUTE_FLOOR);
    }

    let mut points = upbringing
        .attribute_points
        .saturating_sub(4 * ATTRIBUTE_FLOOR);
    let headroom: u8 = Attribute::ALL
        .iter()
        .map(|a| attribute_cap(concept, *a) - ATTRIBUTE_FLOOR)
        .sum();
    if headroom < points {
        return Err(Rejection::InsufficientHeadroom.into());
    }

    while points > 0 {
        let attribute = Attribute::ALL[rng.random_range(0..Attribute::ALL.len())];
        let value = updated.attribute(attribute);
        if value < attribute_cap(concept, attribute) {
            updated.set_attribute_value(attribute, value + 1);
            points -= 1;
        }
    }
    Ok(updated)
}

// Set one skill to an absolute value, enforcing floor, cap (including the
// advanced-skill lock) and budget.
pub fn set_skill(
    build: &CharacterBuild,
    skill: Skill,
    new_value: u8,
) -> Result<CharacterBuild, BuildError> {
    let concept = tables::find_concept(&build.concept)?;
    let upbringing = tables::find_upbringing(&build.upbringing)?;

    let cap = skill_cap(concept, skill);
    if cap == 0 && new_value > 0 {
        return Err(Rejection::SkillLocked.into());
    }
    if new_value > cap {
        return Err(Rejection::AboveCap(cap).into());
    }

    let current = build.skill(skill);
    let new_total = build.skill_sum() - current + new_value;
    if new_total > upbringing.skill_points {
        return Err(Rejection::BudgetExceeded(upbringing.skill_points).into());
    }

    let mut updated = build.clone();
    updated.set_skill_value(skill, new_value);
    Ok(updated)
}

pub fn skill_points_remaining(build: &CharacterBuild) -> Result<u8, NotFound> {
    let upbringing = tables::find_upbringing(&build.upbringing)?;
    Ok(upbringing.skill_points.saturating_sub(build.skill_sum()))
}

pub fn skills_complete(build: &CharacterBuild) -> bool {
    match tables::find_upbringing(&build.upbringing) {
        Ok(upbringing) => build.skill_sum() == upbringing.skill_points,
        Err(_) => false,
    }
}

// The skills a concept may actually put points into: the eight general skills
// plus whichever advanced skills its whitelist unlocks.
pub fn eligible_skills(concept: &Concept) -> Vec<Skill> {
    Skill::ALL
        .iter()
        .copied()
        .filter(|s| skill_cap(concept, *s) > 0)
        .collect()
}

// Reset all sixteen skills to 0, then spend the whole skill budget one point
// at a time on uniformly drawn eligible skills below the cap. Bounded for the
// same reason as randomize_attributes.
pub fn randomize_skills(
    build: &CharacterBuild,
    rng: &mut impl Rng,
) -> Result<CharacterBuild, BuildError> {
    let concept = tables::find_concept(&build.concept)?;
    let upbringing = tables::find_upbringing(&build.upbringing)?;

    let mut updated = build.clone();
    for skill in Skill::ALL {
        updated.set_skill_value(skill, 0);
    }

    let eligible = eligible_skills(concept);
    let mut points = upbringing.skill_points;
    if (eligible.len() * SKILL_CAP as usize) < points as usize {
        return Err(Rejection::InsufficientHeadroom.into());
    }

    while points > 0 {
        let skill = eligible[rng.random_range(0..eligible.len())];
        let value = updated.skill(skill);
        if value < SKILL_CAP {
            updated.set_skill_value(skill, value + 1);
            points -= 1;
        }
    }
    Ok(updated)
}
