use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manager {
    pub id: u32,
    pub name: String,
    pub specialty: String,
}

impl Manager {
    pub fn new(id: u32, name: String, specialty: String) -> Self {
        Manager {
            id,
            name,
            specialty,
        }
    }

    pub fn coach(&self) -> String {
        format!(
            "I am {} and my coaching philosophy is based on {}.",
            self.name, self.specialty
        )
    }
}

impl Display for Manager {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coach_uses_fixed_template() {
        let manager = Manager::new(9, "Tata".to_string(), "pressing".to_string());

        assert_eq!(
            manager.coach(),
            "I am Tata and my coaching philosophy is based on pressing."
        );
    }

    #[test]
    fn coach_keeps_fields_verbatim() {
        let manager = Manager::new(
            3,
            "Pep Guardiola".to_string(),
            "positional play & possession".to_string(),
        );

        let line = manager.coach();

        assert!(line.contains("Pep Guardiola"));
        assert!(line.contains("positional play & possession"));
    }
}
