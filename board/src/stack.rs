#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    White,
    Black,
    Dvonn,
}

impl Control {
    pub fn nice_str(&self) -> &'static str {
        match *self {
            Self::White => "white",
            Self::Black => "black",
            Self::Dvonn => "dvonn",
        }
    }
}

/// A stack of pieces on one board position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stack {
    pub height: u32,
    pub control: Control,
    pub order: u32,
}

impl Stack {
    pub fn new(height: u32, control: Control, order: u32) -> Self {
        Self {
            height,
            control,
            order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_read_back_what_was_set() {
        let mut stack = Stack::new(1, Control::White, 0);
        assert_eq!((stack.height, stack.control, stack.order), (1, Control::White, 0));

        stack.height = 3;
        stack.control = Control::Black;
        stack.order = 7;
        assert_eq!(stack, Stack::new(3, Control::Black, 7));
    }

    #[test]
    fn copies_are_independent() {
        let original = Stack::new(2, Control::Dvonn, 1);
        let mut copy = original;
        copy.height += 1;
        assert_eq!(original.height, 2);
        assert_eq!(copy.height, 3);
    }

    #[test]
    fn control_names() {
        assert_eq!(Control::Dvonn.nice_str(), "dvonn");
    }
}
