pub mod allocator;
pub mod character;
pub mod descriptions;
pub mod engine;
pub mod error;
pub mod logging;
pub mod reputation;
pub mod save;
pub mod sheet;
pub mod tables;
pub mod talent;

// Re-export commonly used items for easier access
pub use character::{Attribute, CharacterBuild, Skill};
pub use error::{BuildError, NotFound, Rejection};
pub use reputation::calculate_reputation;
pub use save::{Party, SaveManager};
pub use sheet::{SheetData, portrait_prompt};
pub use talent::TalentMode;
