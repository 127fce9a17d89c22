use crate::domain::model::Character;
use std::fmt;

/// Text rendering of a single character: name, class and level.
pub struct CharacterCard<'a> {
    character: &'a Character,
}

impl<'a> CharacterCard<'a> {
    pub fn new(character: &'a Character) -> Self {
        Self { character }
    }
}

impl fmt::Display for CharacterCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.character.name)?;
        writeln!(f, "Class: {}", self.character.class_type)?;
        write!(f, "Level: {}", self.character.level)
    }
}
