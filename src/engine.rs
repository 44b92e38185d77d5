// The selection operations the wizard flow calls after every edit. Each one
// validates against the rule tables, returns a new build or a rejection, and
// keeps the derived fields honest: reputation is recomputed on every
// upbringing, humanity or concept change, and the talent lock is re-evaluated
// on every humanity change.
use crate::character::CharacterBuild;
use crate::error::{BuildError, NotFound};
use crate::reputation::calculate_reputation;
use crate::tables;
use crate::talent;
use log::debug;
use rand::Rng;

// Reputation needs all three of upbringing, concept and humanity. While any
// of them is unselected or unknown the value stays at 0 and the background
// step simply reads as incomplete.
fn recompute_reputation(build: &mut CharacterBuild) {
    build.reputation = match (
        tables::find_upbringing(&build.upbringing),
        tables::find_concept(&build.concept),
        tables::find_humanity(&build.humanity),
    ) {
        (Ok(upbringing), Ok(concept), Ok(humanity)) => {
            calculate_reputation(upbringing, concept, humanity)
        }
        _ => 0,
    };
}

pub fn select_origin(build: &CharacterBuild, name: &str) -> Result<CharacterBuild, BuildError> {
    let origin = tables::find_origin(name)?;
    let mut updated = build.clone();
    updated.origin = origin.name.to_string();
    Ok(updated)
}

// Draw one of the five origins uniformly, for players picking "Random".
pub fn random_origin(build: &CharacterBuild, rng: &mut impl Rng) -> CharacterBuild {
    let origin = &tables::ORIGINS[rng.random_range(0..tables::ORIGINS.len())];
    let mut updated = build.clone();
    updated.origin = origin.name.to_string();
    updated
}

pub fn select_home_world(build: &CharacterBuild, name: &str) -> Result<CharacterBuild, BuildError> {
    if !tables::HOME_WORLDS.contains(&name) {
        return Err(NotFound::new("home world", name).into());
    }
    let mut updated = build.clone();
    updated.home_world = name.to_string();
    Ok(updated)
}

pub fn select_upbringing(build: &CharacterBuild, name: &str) -> Result<CharacterBuild, BuildError> {
    let upbringing = tables::find_upbringing(name)?;
    let mut updated = build.clone();
    updated.upbringing = upbringing.name.to_string();
    updated.starting_birr = upbringing.starting_birr;
    recompute_reputation(&mut updated);
    debug!(
        "upbringing set to {} (rep {})",
        updated.upbringing, updated.reputation
    );
    Ok(updated)
}

pub fn select_humanity(build: &CharacterBuild, name: &str) -> Result<CharacterBuild, BuildError> {
    let humanity = tables::find_humanity(name)?;
    let was_innate = talent::is_innate_humanity(&build.humanity);

    let mut updated = build.clone();
    updated.humanity = humanity.name.to_string();
    match humanity.innate_talent {
        // Entering the innate state forces the granted talent immediately.
        Some(innate) => updated.talent = innate.name.to_string(),
        // Leaving it clears the forced talent and reopens free choice.
        None => {
            if was_innate {
                updated.talent.clear();
            }
        }
    }
    recompute_reputation(&mut updated);
    debug!(
        "humanity set to {} (talent '{}')",
        updated.humanity, updated.talent
    );
    Ok(updated)
}

pub fn select_concept(build: &CharacterBuild, name: &str) -> Result<CharacterBuild, BuildError> {
    let concept = tables::find_concept(name)?;
    let mut updated = build.clone();
    updated.concept = concept.name.to_string();
    recompute_reputation(&mut updated);
    debug!(
        "concept set to {} (key attribute {}, rep {})",
        updated.concept, concept.key_attribute, updated.reputation
    );
    Ok(updated)
}

pub fn select_group_concept(
    build: &CharacterBuild,
    name: &str,
) -> Result<CharacterBuild, BuildError> {
    let group = tables::find_group_concept(name)?;
    let mut updated = build.clone();
    updated.group_concept = group.name.to_string();
    Ok(updated)
}

pub fn select_group_talent(
    build: &CharacterBuild,
    name: &str,
) -> Result<CharacterBuild, BuildError> {
    let group = tables::find_group_talent(name)?;
    let mut updated = build.clone();
    updated.group_talent = group.name.to_string();
    Ok(updated)
}

pub fn set_name(build: &CharacterBuild, name: &str) -> CharacterBuild {
    let mut updated = build.clone();
    updated.name = name.to_string();
    updated
}

pub fn set_appearance(build: &CharacterBuild, appearance: &str) -> CharacterBuild {
    let mut updated = build.clone();
    updated.appearance = appearance.to_string();
    updated
}

// Step gates the wizard reads to enable forward navigation.

pub fn background_complete(build: &CharacterBuild) -> bool {
    tables::find_origin(&build.origin).is_ok()
        && tables::find_upbringing(&build.upbringing).is_ok()
        && tables::find_humanity(&build.humanity).is_ok()
}

pub fn concept_complete(build: &CharacterBuild) -> bool {
    tables::find_concept(&build.concept).is_ok()
}

pub fn talent_step_complete(build: &CharacterBuild) -> bool {
    !build.talent.is_empty() && !build.icon.is_empty() && !build.personal_problem.is_empty()
}

// A build is final exactly when both point budgets are spent to zero and the
// name and appearance are filled in. This is the whole hand-off condition;
// there is no hidden constraint beyond it.
pub fn is_final(build: &CharacterBuild) -> bool {
    crate::allocator::attributes_complete(build)
        && crate::allocator::skills_complete(build)
        && !build.name.trim().is_empty()
        && !build.appearance.trim().is_empty()
}
