use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Language {
    pub id: i32,
    pub code: String,
}

impl Language {
    pub fn new(id: i32, code: String) -> Self {
        Self { id, code }
    }

    /// Case-insensitive code comparison, the convention on every read path.
    pub fn code_matches(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
