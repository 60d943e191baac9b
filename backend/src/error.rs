use crate::config::GlConfigTemplate;
use std::fmt;

/// Errors raised while bringing up the window and GL context.
#[non_exhaustive]
#[derive(Debug)]
pub enum BackendError {
    /// SDL itself could not be initialized.
    InitError(String),
    /// The video subsystem is unavailable.
    VideoInitError(String),
    /// No GL configuration satisfies the requested template.
    NoSuchConfig(GlConfigTemplate),
    /// Window creation failed.
    WindowCreationFailed(sdl2::video::WindowBuildError),
    /// Failed to create or activate an OpenGL context.
    GlContextInitFailed(String),
    /// The event pump was already taken or could not be created.
    EventPumpError(String),
    /// Shader compilation or program linking failed.
    ShaderError(String),
    /// `glGetError` reported something other than `GL_NO_ERROR`.
    GlError(u32),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match *self {
            BackendError::InitError(ref e) => write!(f, "initialization error: {}", e),
            BackendError::VideoInitError(ref e) => {
                write!(f, "failed to initialize video system: {}", e)
            }
            BackendError::NoSuchConfig(ref t) => write!(
                f,
                "no GL config found matching all specifications ({})",
                t
            ),
            BackendError::WindowCreationFailed(ref e) => write!(f, "failed to create window: {}", e),
            BackendError::GlContextInitFailed(ref e) => {
                write!(f, "failed to create OpenGL context: {}", e)
            }
            BackendError::EventPumpError(ref e) => write!(f, "event pump unavailable: {}", e),
            BackendError::ShaderError(ref e) => write!(f, "shader error: {}", e),
            BackendError::GlError(code) => write!(f, "GL error: 0x{:04x}", code),
        }
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BackendError::WindowCreationFailed(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_such_config_names_the_template() {
        let template = GlConfigTemplate {
            samples: 64,
            ..GlConfigTemplate::default()
        };
        let msg = BackendError::NoSuchConfig(template).to_string();
        assert!(msg.starts_with("no GL config found"));
        assert!(msg.contains("samples=64"));
    }

    #[test]
    fn gl_error_is_hex() {
        assert_eq!(BackendError::GlError(0x0502).to_string(), "GL error: 0x0502");
    }
}
