use super::error::BackendError;
use super::glutils::*;
use super::math::*;
use gl::types::GLchar;
use gl::*;
use std::ffi::CString;

#[derive(Default, Debug, Clone, Copy)]
pub struct Shaders {
    program_id: u32,
}

impl Shaders {
    pub fn from_str(vertex_code: &str, fragment_code: &str) -> Result<Shaders, BackendError> {
        // create vertex shader
        let vertex_shader = unsafe { gl::CreateShader(VERTEX_SHADER) };
        if vertex_shader == 0 {
            return Err(BackendError::ShaderError(
                "gl::createShader(VERTEX_SHADER) failed".to_string(),
            ));
        }

        if let Err(e) = Self::compile(vertex_shader, vertex_code) {
            unsafe { gl::DeleteShader(vertex_shader) };
            return Err(BackendError::ShaderError(format!(
                "vertex shader compilation error: {}",
                e
            )));
        }

        // create fragment shader
        let fragment_shader = unsafe { gl::CreateShader(FRAGMENT_SHADER) };
        if fragment_shader == 0 {
            unsafe { gl::DeleteShader(vertex_shader) };
            return Err(BackendError::ShaderError(
                "gl::createShader(FRAGMENT_SHADER) failed".to_string(),
            ));
        }

        if let Err(e) = Self::compile(fragment_shader, fragment_code) {
            unsafe { gl::DeleteShader(vertex_shader) };
            unsafe { gl::DeleteShader(fragment_shader) };
            return Err(BackendError::ShaderError(format!(
                "fragment shader compilation error: {}",
                e
            )));
        }

        // create program and link shaders
        let shader_program = unsafe { gl::CreateProgram() };
        unsafe { gl::AttachShader(shader_program, vertex_shader) };
        unsafe { gl::AttachShader(shader_program, fragment_shader) };
        unsafe { gl::LinkProgram(shader_program) };

        // not needed anymore
        unsafe { gl::DeleteShader(vertex_shader) };
        unsafe { gl::DeleteShader(fragment_shader) };

        let mut success = 0;
        unsafe {
            gl::GetProgramiv(shader_program, LINK_STATUS, &mut success);
        }
        if success == 0 {
            let log = Self::info_log(|cap, len, buf| unsafe {
                gl::GetProgramInfoLog(shader_program, cap, len, buf)
            });
            unsafe { gl::DeleteProgram(shader_program) };
            return Err(BackendError::ShaderError(format!(
                "program link error: {}",
                log
            )));
        }

        Ok(Shaders {
            program_id: shader_program,
        })
    }

    fn compile(shader_id: u32, shader_code: &str) -> Result<(), String> {
        let code_len = shader_code.len() as i32;
        unsafe {
            gl::ShaderSource(
                shader_id,
                1,
                &(shader_code.as_bytes().as_ptr().cast()),
                &code_len,
            );
        }

        unsafe { gl::CompileShader(shader_id) };

        // check if there are compilation errors
        let mut success = 0;
        unsafe {
            gl::GetShaderiv(shader_id, COMPILE_STATUS, &mut success);
        }

        if success == 0 {
            return Err(Self::info_log(|cap, len, buf| unsafe {
                gl::GetShaderInfoLog(shader_id, cap, len, buf)
            }));
        }
        Ok(())
    }

    fn info_log<F>(fetch: F) -> String
    where
        F: FnOnce(i32, &mut i32, *mut GLchar),
    {
        let mut v: Vec<u8> = vec![0; 1024];
        let mut log_len = 0_i32;
        fetch(v.len() as i32, &mut log_len, v.as_mut_ptr().cast());
        v.truncate(log_len.max(0) as usize);
        String::from_utf8_lossy(&v).to_string()
    }

    fn get_uniform_location(&self, name: &str) -> Result<i32, BackendError> {
        let c_name = CString::new(name).map_err(|_| {
            BackendError::ShaderError(format!("uniform name '{}' contains a nul byte", name))
        })?;
        let location = unsafe { gl::GetUniformLocation(self.program_id, c_name.as_ptr().cast()) };
        check_gl_err()?;
        if location == -1 {
            return Err(BackendError::ShaderError(format!(
                "program({}): location '{}' does not correspond to an active uniform variable in program",
                self.program_id, name
            )));
        }
        Ok(location)
    }

    pub fn use_program(&self) -> Result<(), BackendError> {
        unsafe { gl::UseProgram(self.program_id) };
        check_gl_err()
    }

    pub fn set_vec2(&self, name: &str, v: Vec2) -> Result<(), BackendError> {
        let location = self.get_uniform_location(name)?;
        unsafe { gl::Uniform2f(location, v.x, v.y) };
        Ok(())
    }

    pub fn set_vec4(&self, name: &str, v0: f32, v1: f32, v2: f32, v3: f32) -> Result<(), BackendError> {
        let location = self.get_uniform_location(name)?;
        unsafe { gl::Uniform4f(location, v0, v1, v2, v3) };
        Ok(())
    }

    pub fn delete(&mut self) {
        if self.program_id != 0 {
            unsafe { gl::DeleteProgram(self.program_id) };
            self.program_id = 0;
        }
    }
}
