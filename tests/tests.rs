// ../tests/tests.rs
use coriolis_creator::*;
use coriolis_creator::{allocator, engine, tables, talent};
use rand::SeedableRng;
use rand::rngs::StdRng;

// A build far enough along for attribute and skill allocation: Stationary
// upbringing (14 attribute points, 10 skill points) and an Officer concept
// (key attribute Agility; Command, Culture, Melee Combat and Ranged Combat
// unlocked).
fn officer_build() -> CharacterBuild {
    let build = CharacterBuild::new();
    let build = engine::select_origin(&build, "Kua").expect("origin");
    let build = engine::select_home_world(&build, "Zenitian").expect("home world");
    let build = engine::select_upbringing(&build, "Stationary").expect("upbringing");
    let build = engine::select_humanity(&build, "Pure-blood").expect("humanity");
    engine::select_concept(&build, "Soldier (Officer)").expect("concept")
}

#[test]
fn test_new_build_starts_at_floors() {
    let build = CharacterBuild::new();
    assert_eq!(build.attribute_sum(), 4);
    assert_eq!(build.skill_sum(), 0);
    assert_eq!(build.reputation, 0);
    assert!(build.name.is_empty());
    assert!(!engine::background_complete(&build));
}

#[test]
fn test_rule_tables_satisfy_randomizer_headroom() {
    tables::verify_tables().expect("every upbringing/concept pair must leave headroom");
}

#[test]
fn test_lookup_miss_is_not_found() {
    assert!(tables::find_upbringing("Nobility").is_err());
    assert!(tables::find_concept("Soldier (Officer)").is_ok());
    assert!(engine::select_home_world(&CharacterBuild::new(), "Mars").is_err());
    // An unresolvable selection reads as incomplete, never as a crash.
    let mut build = CharacterBuild::new();
    build.upbringing = "Nobility".to_string();
    assert!(!allocator::attributes_complete(&build));
}

#[test]
fn test_random_origin_draws_from_the_table() {
    let mut rng = StdRng::seed_from_u64(5);
    let build = engine::random_origin(&CharacterBuild::new(), &mut rng);
    assert!(tables::find_origin(&build.origin).is_ok());
    assert!(Attribute::Wits.description().contains("Perception"));
}

#[test]
fn test_attribute_budget_is_enforced() {
    let build = officer_build();

    // Spend all 14 points: 5 + 4 + 3 + 2.
    let build = allocator::set_attribute(&build, Attribute::Agility, 5).expect("key attribute 5");
    let build = allocator::set_attribute(&build, Attribute::Strength, 4).expect("strength 4");
    let build = allocator::set_attribute(&build, Attribute::Wits, 3).expect("wits 3");
    let build = allocator::set_attribute(&build, Attribute::Empathy, 2).expect("empathy 2");

    assert_eq!(build.attribute_sum(), 14);
    assert_eq!(allocator::attribute_points_remaining(&build).unwrap(), 0);
    assert!(allocator::attributes_complete(&build));

    // One more point anywhere would exceed the budget.
    let result = allocator::set_attribute(&build, Attribute::Wits, 4);
    assert!(matches!(
        result,
        Err(BuildError::Rejected(Rejection::BudgetExceeded(14)))
    ));
    // The rejected build is unchanged.
    assert_eq!(build.wits, 3);
    assert_eq!(build.attribute_sum(), 14);
}

#[test]
fn test_key_attribute_cap_is_five_others_four() {
    // Scientist (Technician) has Wits as its key attribute.
    let build = CharacterBuild::new();
    let build = engine::select_upbringing(&build, "Privileged").expect("upbringing");
    let build = engine::select_concept(&build, "Scientist (Technician)").expect("concept");

    let build = allocator::set_attribute(&build, Attribute::Wits, 5).expect("key goes to 5");
    assert!(matches!(
        allocator::set_attribute(&build, Attribute::Wits, 6),
        Err(BuildError::Rejected(Rejection::AboveCap(5)))
    ));
    assert!(matches!(
        allocator::set_attribute(&build, Attribute::Strength, 5),
        Err(BuildError::Rejected(Rejection::AboveCap(4)))
    ));
    assert!(matches!(
        allocator::set_attribute(&build, Attribute::Strength, 0),
        Err(BuildError::Rejected(Rejection::BelowFloor(1)))
    ));
}

#[test]
fn test_randomize_attributes_spends_budget_exactly() {
    let mut rng = StdRng::seed_from_u64(7);

    // Every upbringing/concept combination must terminate with the budget
    // spent to zero and every attribute within its bounds.
    for upbringing in &tables::UPBRINGINGS {
        for concept in &tables::CONCEPTS {
            let build = CharacterBuild::new();
            let build = engine::select_upbringing(&build, upbringing.name).expect("upbringing");
            let build = engine::select_concept(&build, concept.name).expect("concept");

            let build = allocator::randomize_attributes(&build, &mut rng).expect("randomize");
            assert_eq!(
                allocator::attribute_points_remaining(&build).unwrap(),
                0,
                "{} / {}",
                upbringing.name,
                concept.name
            );
            for attribute in Attribute::ALL {
                let value = build.attribute(attribute);
                assert!(value >= 1);
                assert!(value <= allocator::attribute_cap(concept, attribute));
            }
        }
    }
}

#[test]
fn test_reputation_uses_floor_division() {
    let upbringing = tables::Upbringing {
        name: "Test",
        rep_base: 2,
        skill_points: 8,
        attribute_points: 15,
        starting_birr: 500,
    };
    let concept = tables::Concept {
        name: "Fugitive (Test)",
        rep_bonus: -2,
        key_attribute: Attribute::Empathy,
        advanced_skills: [
            Skill::Force,
            Skill::MeleeCombat,
            Skill::Dexterity,
            Skill::Infiltration,
        ],
    };
    let humanity = tables::Humanity {
        name: "Test",
        rep_divisor: 2,
        description: "",
        innate_talent: None,
    };

    // floor(0 / 2) = 0
    assert_eq!(calculate_reputation(&upbringing, &concept, &humanity), 0);

    // floor(7 / 1) = 7
    let privileged = tables::Upbringing {
        rep_base: 6,
        ..upbringing
    };
    let bonus_one = tables::Concept {
        rep_bonus: 1,
        ..concept
    };
    let pure = tables::Humanity {
        rep_divisor: 1,
        ..humanity
    };
    assert_eq!(calculate_reputation(&privileged, &bonus_one, &pure), 7);

    // Negative numerator: floor(-2 / 2) = -1, not 0.
    let destitute = tables::Upbringing {
        rep_base: 0,
        ..upbringing
    };
    assert_eq!(calculate_reputation(&destitute, &concept, &humanity), -1);
}

#[test]
fn test_reputation_recomputed_on_every_background_change() {
    let build = CharacterBuild::new();
    let build = engine::select_upbringing(&build, "Plebian").expect("upbringing");
    let build = engine::select_humanity(&build, "Sirb").expect("humanity");
    let build = engine::select_concept(&build, "Fugitive (Criminal)").expect("concept");
    // floor((2 - 2) / 2) = 0
    assert_eq!(build.reputation, 0);

    let build = engine::select_upbringing(&build, "Privileged").expect("upbringing");
    // floor((6 - 2) / 2) = 2
    assert_eq!(build.reputation, 2);

    let build = engine::select_humanity(&build, "Pure-blood").expect("humanity");
    // floor((6 - 2) / 1) = 4
    assert_eq!(build.reputation, 4);
}

#[test]
fn test_innate_humanity_forces_talent() {
    let build = officer_build();
    assert_eq!(talent::talent_mode(&build), TalentMode::FreeChoice);

    let build = engine::select_humanity(&build, "Sirb").expect("humanity");
    assert_eq!(build.talent, "Pheromones");
    assert_eq!(talent::talent_mode(&build), TalentMode::Innate);
    assert!(matches!(
        talent::select_talent(&build, "Combat Veteran"),
        Err(BuildError::Rejected(Rejection::TalentLocked))
    ));

    // Switching back to the baseline clears the forced talent and reopens
    // free choice.
    let build = engine::select_humanity(&build, "Pure-blood").expect("humanity");
    assert!(build.talent.is_empty());
    assert_eq!(talent::talent_mode(&build), TalentMode::FreeChoice);
    let build = talent::select_talent(&build, "Combat Veteran").expect("free choice");
    assert_eq!(build.talent, "Combat Veteran");
}

#[test]
fn test_talents_filtered_by_concept_family_in_table_order() {
    let names: Vec<&str> = tables::talents_for_concept("Soldier (Officer)")
        .iter()
        .map(|t| t.name)
        .collect();

    assert!(names.contains(&"Combat Veteran"));
    assert!(names.contains(&"Executioner"));
    assert!(!names.contains(&"Blessing"));
    // Table order is preserved.
    let veteran = names.iter().position(|n| *n == "Combat Veteran").unwrap();
    let zero_g = names.iter().position(|n| *n == "Zero-G Training").unwrap();
    assert!(veteran < zero_g);

    // Two-word families resolve too.
    let spider: Vec<&str> = tables::talents_for_concept("Data Spider (Analyst)")
        .iter()
        .map(|t| t.name)
        .collect();
    assert!(spider.contains(&"Wealthy Family"));
    assert!(spider.contains(&"Gear Head"));
    assert!(!spider.contains(&"Blessing"));

    // A talent outside the family is rejected even though it exists.
    let build = officer_build();
    assert!(matches!(
        talent::select_talent(&build, "Blessing"),
        Err(BuildError::Rejected(Rejection::TalentNotAvailable))
    ));
}

#[test]
fn test_locked_advanced_skills_stay_at_zero() {
    // Officer whitelist: Command, Culture, Melee Combat, Ranged Combat.
    let build = officer_build();

    // Science is not in the list, so any value above 0 is rejected no matter
    // how much budget remains.
    assert!(matches!(
        allocator::set_skill(&build, Skill::Science, 1),
        Err(BuildError::Rejected(Rejection::SkillLocked))
    ));
    assert_eq!(build.science, 0);

    // Whitelisted advanced skills go to 3 if the budget allows.
    let build = allocator::set_skill(&build, Skill::Command, 3).expect("command 3");
    assert_eq!(build.command, 3);
    assert!(matches!(
        allocator::set_skill(&build, Skill::Command, 4),
        Err(BuildError::Rejected(Rejection::AboveCap(3)))
    ));

    // General skills are always capped at 3.
    let build = allocator::set_skill(&build, Skill::Observation, 3).expect("observation 3");
    assert!(matches!(
        allocator::set_skill(&build, Skill::Observation, 4),
        Err(BuildError::Rejected(Rejection::AboveCap(3)))
    ));
}

#[test]
fn test_skill_budget_is_enforced() {
    let build = officer_build();

    // Stationary grants 10 skill points: 3 + 3 + 3 + 1 spends them all.
    let build = allocator::set_skill(&build, Skill::Command, 3).expect("command");
    let build = allocator::set_skill(&build, Skill::RangedCombat, 3).expect("ranged combat");
    let build = allocator::set_skill(&build, Skill::Observation, 3).expect("observation");
    let build = allocator::set_skill(&build, Skill::Culture, 1).expect("culture");

    assert_eq!(allocator::skill_points_remaining(&build).unwrap(), 0);
    assert!(allocator::skills_complete(&build));

    let result = allocator::set_skill(&build, Skill::Dexterity, 1);
    assert!(matches!(
        result,
        Err(BuildError::Rejected(Rejection::BudgetExceeded(10)))
    ));
    assert_eq!(build.dexterity, 0);
}

#[test]
fn test_randomize_skills_spends_budget_and_respects_locks() {
    let mut rng = StdRng::seed_from_u64(42);

    for upbringing in &tables::UPBRINGINGS {
        for concept in &tables::CONCEPTS {
            let build = CharacterBuild::new();
            let build = engine::select_upbringing(&build, upbringing.name).expect("upbringing");
            let build = engine::select_concept(&build, concept.name).expect("concept");

            let build = allocator::randomize_skills(&build, &mut rng).expect("randomize");
            assert_eq!(allocator::skill_points_remaining(&build).unwrap(), 0);
            for skill in Skill::ALL {
                assert!(build.skill(skill) <= allocator::skill_cap(concept, skill));
            }
        }
    }
}

#[test]
fn test_icon_and_problem_randomize_independently() {
    let mut rng = StdRng::seed_from_u64(3);
    let build = officer_build();
    let build = talent::select_talent(&build, "Combat Veteran").expect("talent");

    let drawn = talent::randomize_icon_and_problem(&build, &mut rng);
    let icon = tables::find_icon(&drawn.icon).expect("a real icon");
    assert_eq!(drawn.icon_talent, icon.talent);
    assert_eq!(drawn.icon_talent_description, icon.talent_description);
    assert!(tables::PERSONAL_PROBLEMS.contains(&drawn.personal_problem.as_str()));
    // The primary talent is untouched by the draw.
    assert_eq!(drawn.talent, "Combat Veteran");

    // Each call redraws; a later draw is free to repeat earlier results.
    let redrawn = talent::randomize_icon_and_problem(&drawn, &mut rng);
    assert!(!redrawn.icon.is_empty());
    assert!(!redrawn.personal_problem.is_empty());
}

#[test]
fn test_complete_build_is_final_and_renders() {
    let mut rng = StdRng::seed_from_u64(11);

    let build = CharacterBuild::new();
    let build = engine::select_group_concept(&build, "Mercenaries").expect("group concept");
    let build = engine::select_group_talent(&build, "Mercenaries").expect("group talent");
    let build = engine::select_origin(&build, "Kua").expect("origin");
    let build = engine::select_home_world(&build, "Zenitian").expect("home world");
    let build = engine::select_upbringing(&build, "Stationary").expect("upbringing");
    let build = engine::select_humanity(&build, "Pure-blood").expect("humanity");
    let build = engine::select_concept(&build, "Soldier (Officer)").expect("concept");

    let build = allocator::set_attribute(&build, Attribute::Agility, 5).expect("agility");
    let build = allocator::set_attribute(&build, Attribute::Strength, 4).expect("strength");
    let build = allocator::set_attribute(&build, Attribute::Wits, 3).expect("wits");
    let build = allocator::set_attribute(&build, Attribute::Empathy, 2).expect("empathy");

    let build = allocator::set_skill(&build, Skill::Command, 3).expect("command");
    let build = allocator::set_skill(&build, Skill::RangedCombat, 3).expect("ranged combat");
    let build = allocator::set_skill(&build, Skill::Observation, 2).expect("observation");
    let build = allocator::set_skill(&build, Skill::Culture, 2).expect("culture");

    let build = talent::select_talent(&build, "Combat Veteran").expect("talent");
    let build = talent::randomize_icon_and_problem(&build, &mut rng);

    // Not final until the name and appearance are in.
    assert!(!engine::is_final(&build));
    assert!(SheetData::from_build(&build).is_err());

    let build = engine::set_name(&build, "Asha Nejem");
    let build = engine::set_appearance(&build, "Wiry, scarred, a dress uniform long out of date.");

    assert!(engine::is_final(&build));
    assert!(engine::talent_step_complete(&build));

    let sheet = SheetData::from_build(&build).expect("final build renders");
    assert_eq!(sheet.name, "Asha Nejem");
    assert_eq!(sheet.hit_points, 4 + 5);
    assert_eq!(sheet.mind_points, 3 + 2);
    assert_eq!(sheet.starting_birr, 1000);

    let prompt = portrait_prompt(&build);
    assert!(prompt.contains("Soldier (Officer)"));
    assert!(prompt.contains("dress uniform"));
}

#[test]
fn test_party_save_and_load_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut manager = SaveManager::with_dir(dir.path());
    assert!(manager.available_saves.is_empty());

    let mut party = Party::new("the_last_voyage");
    party.group_concept = "Explorers".to_string();
    party.characters.push(officer_build());

    manager.current_save = Some(party);
    let manager = manager.save().expect("save party");
    assert_eq!(manager.available_saves, vec!["the_last_voyage".to_string()]);

    let reloaded = SaveManager::with_dir(dir.path())
        .load_from_file("the_last_voyage")
        .expect("load party");
    let loaded = reloaded.current_save.expect("party present");
    assert_eq!(loaded.group_concept, "Explorers");
    assert_eq!(loaded.characters.len(), 1);
    assert_eq!(loaded.characters[0].concept, "Soldier (Officer)");
    assert!(loaded.saved_at.is_some());

    let manager = manager.delete_save("the_last_voyage").expect("delete");
    assert!(manager.available_saves.is_empty());
}

#[test]
fn test_saved_party_fixture_loads() {
    // Step 1: Load the dummy save through the manager.
    let manager = SaveManager::with_dir("tests")
        .load_from_file("dummy_saved_party")
        .expect("Failed to read dummy saved party JSON file");

    // Step 2: Verify the loaded party.
    let party = manager.current_save.expect("party present");
    assert_eq!(party.save_name, "dummy_saved_party");
    assert_eq!(party.group_concept, "Mercenaries");
    assert_eq!(party.characters.len(), 1);

    // Step 3: A character saved as final is still final after the round trip.
    let character = &party.characters[0];
    assert_eq!(character.name, "Asha Nejem");
    assert_eq!(character.reputation, 3);
    assert!(engine::is_final(character));
}
