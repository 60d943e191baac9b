#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline(always)]
    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_is_two_packed_floats() {
        assert_eq!(std::mem::size_of::<Vec2>(), 2 * std::mem::size_of::<f32>());
        assert_eq!(Vec2::new(1.0, 2.0), Vec2 { x: 1.0, y: 2.0 });
    }
}
