// Talent selection and the Icon / personal problem draws. Talent choice is a
// two-state machine driven entirely by the humanity selection: mutated
// humanities lock the talent to their innate one, baseline humans choose
// freely from their concept family's list.
use crate::character::CharacterBuild;
use crate::error::{BuildError, Rejection};
use crate::tables::{self, InnateTalent};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalentMode {
    // The humanity grants a fixed innate talent; no other may be chosen.
    Innate,
    // The talent is picked freely from the concept family's list.
    FreeChoice,
}

// True for the fixed set of mutated humanities.
pub fn is_innate_humanity(humanity_name: &str) -> bool {
    innate_talent_for(humanity_name).is_some()
}

// The talent a mutated humanity grants, if any. Unknown names and the
// baseline humanity both yield None.
pub fn innate_talent_for(humanity_name: &str) -> Option<&'static InnateTalent> {
    tables::find_humanity(humanity_name)
        .ok()
        .and_then(|h| h.innate_talent.as_ref())
}

// The current talent-selection state of a build. Re-evaluated on every
// humanity mutation, not just once.
pub fn talent_mode(build: &CharacterBuild) -> TalentMode {
    if is_innate_humanity(&build.humanity) {
        TalentMode::Innate
    } else {
        TalentMode::FreeChoice
    }
}

// Choose a talent. Rejected while the humanity locks the talent, and rejected
// for any talent outside the concept family's list.
pub fn select_talent(
    build: &CharacterBuild,
    talent_name: &str,
) -> Result<CharacterBuild, BuildError> {
    if talent_mode(build) == TalentMode::Innate {
        return Err(Rejection::TalentLocked.into());
    }
    let available = tables::talents_for_concept(&build.concept);
    if !available.iter().any(|t| t.name == talent_name) {
        return Err(Rejection::TalentNotAvailable.into());
    }

    let mut updated = build.clone();
    updated.talent = talent_name.to_string();
    Ok(updated)
}

// Draw an Icon and a personal problem, independently and uniformly. Each call
// redraws both; repeats across characters in the same group are intended. The
// icon talent rides along as read-only information and never replaces the
// primary talent.
pub fn randomize_icon_and_problem(build: &CharacterBuild, rng: &mut impl Rng) -> CharacterBuild {
    let icon = &tables::ICONS[rng.random_range(0..tables::ICONS.len())];
    let problem = tables::PERSONAL_PROBLEMS[rng.random_range(0..tables::PERSONAL_PROBLEMS.len())];

    let mut updated = build.clone();
    updated.icon = icon.name.to_string();
    updated.icon_talent = icon.talent.to_string();
    updated.icon_talent_description = icon.talent_description.to_string();
    updated.personal_problem = problem.to_string();
    updated
}
