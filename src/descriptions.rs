// region:  --- Attributes

pub const STRENGTH: &str = r#"
Raw muscle and physique. Governs Force and Melee Combat, how much you can carry through a docking bay, and how long you last in a brawl or an exo rig. Ship workers and legionnaires live off this one.
"#;

pub const AGILITY: &str = r#"
Body control, reflexes and speed. Drives Dexterity, Ranged Combat, Infiltration and Pilot. The attribute of choice for pilots, operatives and soldiers who would rather not be hit at all.
"#;

pub const WITS: &str = r#"
Perception, logic and learning. Covers Observation, Science, Technology and Data Djinn. Scientists, data spiders and trailblazers reading the sensor sweep all lean on Wits.
"#;

pub const EMPATHY: &str = r#"
Presence and the reading of people. Powers Manipulation, Command, Culture and Mystic Powers. Negotiators, preachers and artists get by on Empathy where others reach for a weapon.
"#;

// endregion:  --- Attributes

// region:  --- Origins

pub const ALGOL: &str = r#"
A harsh red-sun system of mining stations and indentured labor. Algolans have a reputation for grit and for settling scores quietly.
"#;

pub const MIRA: &str = r#"
Once the jewel of the Firstcome, now a system of faded glory, monasteries and pilgrim fleets. Mirans are seen as pious and proud.
"#;

pub const KUA: &str = r#"
The heart of the Third Horizon, home of the Coriolis station itself. Kuans grow up among a dozen cultures and twice as many currencies.
"#;

pub const DABARAN: &str = r#"
Desert world of courtly intrigue, water barons and caravan cities. Dabarans are famed traders and infamous flatterers.
"#;

pub const ZALOS: &str = r#"
A cold, militant system locked in crusade. Zalosians are disciplined, devout and rarely welcome anywhere without an invitation.
"#;

// endregion:  --- Origins

// region:  --- Humanities

pub const PURE_BLOOD: &str = r#"
Baseline humanity, unchanged by the long dark between the stars. Pure-bloods carry no stigma and choose their talents freely.
"#;

pub const SIRB: &str = r#"
Gene-tailored for closed station ecologies, the Sirb communicate as much by scent as by speech. Their pheromones are an innate talent, and a mark that halves their standing among pure-bloods.
"#;

pub const XINGHUR: &str = r#"
Hardened for high-radiation colony worlds, the Xinghur shrug off toxins and thin air that would kill a baseline human. Few of them ever shake the colonist stigma.
"#;

pub const NERID: &str = r#"
Adapted for the deep oceans of lost terraforming projects, the Nerid breathe water as easily as air. Dry-worlders find them unsettling, and their reputation suffers for it.
"#;

// endregion:  --- Humanities
