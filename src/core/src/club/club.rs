#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    pub name: String,
    pub country: String,
    pub description: String,

    pub manager_id: u32,
}

impl Club {
    pub fn new(name: String, country: String, description: String, manager_id: u32) -> Self {
        Club {
            name,
            country,
            description,
            manager_id,
        }
    }
}
