//! Placeholder scene: a single triangle spanning the lower-left, lower-right
//! and upper-right corners of the window.

use super::error::BackendError;
use super::glutils::*;
use super::math::Vec2;
use super::shaders::Shaders;
use gl::*;

// Positions are in window pixels, origin bottom-left, mapped to clip space
// with the current viewport size.
const VERTEX_SHADER_SRC: &str = r#"#version 330 core
layout (location = 0) in vec2 position;
uniform vec2 viewport;
void main()
{
    gl_Position = vec4(position / viewport * 2.0 - 1.0, 0.0, 1.0);
}
"#;

const FRAGMENT_SHADER_SRC: &str = r#"#version 330 core
uniform vec4 color;
out vec4 frag_color;
void main()
{
    frag_color = color;
}
"#;

/// Triangle corners for a window of the given size.
pub fn triangle_vertices(width: u32, height: u32) -> [Vec2; 3] {
    let (w, h) = (width as f32, height as f32);
    [Vec2::new(0.0, 0.0), Vec2::new(w, 0.0), Vec2::new(w, h)]
}

pub struct TriangleRenderer {
    shaders: Shaders,
    vao: u32,
    vbo: u32,
}

impl TriangleRenderer {
    /// Needs a current GL context with loaded function pointers.
    pub fn new() -> Result<Self, BackendError> {
        let shaders = Shaders::from_str(VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC)?;

        let (mut vao, mut vbo) = (0, 0);
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::BindVertexArray(vao);
            gl::BindBuffer(ARRAY_BUFFER, vbo);
        }
        gl_buffer_data_arr_dyn(&triangle_vertices(0, 0));
        gl_vertex_attrib_ptr_enab(0, 2, 2, 0);
        unsafe { gl::BindVertexArray(0) };
        check_gl_err()?;

        Ok(TriangleRenderer { shaders, vao, vbo })
    }

    pub fn draw(&self, width: u32, height: u32) -> Result<(), BackendError> {
        let vertices = triangle_vertices(width, height);
        unsafe {
            gl::ClearColor(0.0, 0.0, 0.0, 1.0);
            gl::Clear(COLOR_BUFFER_BIT);
        }
        // a zero-sized viewport would divide by zero in the vertex shader
        if width == 0 || height == 0 {
            return check_gl_err();
        }

        self.shaders.use_program()?;
        self.shaders
            .set_vec2("viewport", Vec2::new(width as f32, height as f32))?;
        self.shaders.set_vec4("color", 1.0, 1.0, 1.0, 1.0)?;
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::BindBuffer(ARRAY_BUFFER, self.vbo);
        }
        gl_buffer_sub_data_arr(&vertices);
        unsafe {
            gl::DrawArrays(TRIANGLES, 0, vertices.len() as i32);
            gl::BindVertexArray(0);
        }
        check_gl_err()
    }
}

impl Drop for TriangleRenderer {
    fn drop(&mut self) {
        self.shaders.delete();
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_spans_three_corners() {
        assert_eq!(
            triangle_vertices(640, 480),
            [
                Vec2::new(0.0, 0.0),
                Vec2::new(640.0, 0.0),
                Vec2::new(640.0, 480.0)
            ]
        );
    }

    #[test]
    fn same_size_gives_same_geometry() {
        let first = triangle_vertices(800, 600);
        let second = triangle_vertices(800, 600);
        assert_eq!(first, second);
        assert_ne!(first, triangle_vertices(801, 600));
    }
}
