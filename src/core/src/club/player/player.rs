use std::fmt::{Display, Formatter, Result};

/// Players older than this are flagged as veterans in the report.
pub const VETERAN_AGE: u8 = 33;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub position: String,

    // club name, matched against Club::name
    pub club: String,
}

impl Player {
    pub fn new(id: u32, name: String, age: u8, position: String, club: String) -> Self {
        Player {
            id,
            name,
            age,
            position,
            club,
        }
    }

    pub fn introduce(&self) -> String {
        format!(
            "My name is {}, I am {} years old, and I play as a {} for {}.",
            self.name, self.age, self.position, self.club
        )
    }

    pub fn is_veteran(&self) -> bool {
        self.age > VETERAN_AGE
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}
