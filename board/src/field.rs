use crate::stack::Stack;

/// A named board position, possibly holding a stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub stack: Option<Stack>,
}

impl Field {
    pub fn new(name: &str, stack: Option<Stack>) -> Self {
        Self {
            name: name.to_string(),
            stack,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.stack.is_some()
    }
}
