use crate::config::{GlConfig, GlConfigTemplate, Screen};
use crate::error::BackendError;
use log::debug;
use sdl2::video::gl_attr::GLAttr;
use sdl2::video::GLProfile;
use sdl2::VideoSubsystem;

pub const GL_CONTEXT_VERSION: (u8, u8) = (3, 3);

/// The default screen of the SDL video subsystem.
///
/// SDL has no way to list framebuffer configurations, so this screen
/// probes: the template goes in as GL attributes, a hidden window and
/// context are created, and the attributes the driver actually granted
/// are read back as the single candidate.
pub struct Sdl2Screen<'a> {
    video: &'a VideoSubsystem,
}

impl<'a> Sdl2Screen<'a> {
    pub fn new(video: &'a VideoSubsystem) -> Self {
        Sdl2Screen { video }
    }
}

impl Screen for Sdl2Screen<'_> {
    fn matching_configs(&self, template: &GlConfigTemplate) -> Result<Vec<GlConfig>, BackendError> {
        let gl_attr = self.video.gl_attr();
        apply_template(&gl_attr, template);

        let probe = match self
            .video
            .window("config probe", 1, 1)
            .opengl()
            .hidden()
            .build()
        {
            Ok(w) => w,
            Err(e) => {
                debug!("probe window rejected template ({}): {}", template, e);
                return Ok(Vec::new());
            }
        };
        let _probe_ctx = match probe.gl_create_context() {
            Ok(ctx) => ctx,
            Err(e) => {
                debug!("probe context rejected template ({}): {}", template, e);
                return Ok(Vec::new());
            }
        };

        let granted = read_back(&gl_attr);
        debug!("probe granted: {}", granted);
        // SDL has no aux buffer attribute to request
        if template.aux_buffers > 0 || !granted.satisfies(template) {
            return Ok(Vec::new());
        }
        Ok(vec![granted])
    }
}

fn apply_context(gl_attr: &GLAttr) {
    gl_attr.set_context_profile(GLProfile::Core);
    gl_attr.set_context_flags().forward_compatible().set();
    gl_attr.set_context_version(GL_CONTEXT_VERSION.0, GL_CONTEXT_VERSION.1);
}

pub fn apply_template(gl_attr: &GLAttr, t: &GlConfigTemplate) {
    apply_context(gl_attr);
    gl_attr.set_alpha_size(t.alpha_size);
    gl_attr.set_double_buffer(t.double_buffer);
    gl_attr.set_multisample_buffers(t.sample_buffers);
    gl_attr.set_multisample_samples(t.samples);
    gl_attr.set_depth_size(t.depth_size);
    gl_attr.set_stencil_size(t.stencil_size);
    gl_attr.set_accum_red_size(t.accum_channel_size);
    gl_attr.set_accum_green_size(t.accum_channel_size);
    gl_attr.set_accum_blue_size(t.accum_channel_size);
    gl_attr.set_accum_alpha_size(t.accum_alpha_size());
}

/// Requests exactly `config` for the next window.
pub fn apply_config(gl_attr: &GLAttr, c: &GlConfig) {
    apply_context(gl_attr);
    gl_attr.set_red_size(c.red_size);
    gl_attr.set_green_size(c.green_size);
    gl_attr.set_blue_size(c.blue_size);
    gl_attr.set_alpha_size(c.alpha_size);
    gl_attr.set_stereo(c.stereo);
    gl_attr.set_double_buffer(c.double_buffer);
    gl_attr.set_multisample_buffers(c.sample_buffers);
    gl_attr.set_multisample_samples(c.samples);
    gl_attr.set_depth_size(c.depth_size);
    gl_attr.set_stencil_size(c.stencil_size);
    gl_attr.set_accum_red_size(c.accum_red_size);
    gl_attr.set_accum_green_size(c.accum_green_size);
    gl_attr.set_accum_blue_size(c.accum_blue_size);
    gl_attr.set_accum_alpha_size(c.accum_alpha_size);
}

/// Reads the attributes of the current context.
fn read_back(gl_attr: &GLAttr) -> GlConfig {
    let (major_version, minor_version) = gl_attr.context_version();
    GlConfig {
        buffer_size: gl_attr.buffer_size(),
        red_size: gl_attr.red_size(),
        green_size: gl_attr.green_size(),
        blue_size: gl_attr.blue_size(),
        alpha_size: gl_attr.alpha_size(),
        stereo: gl_attr.stereo(),
        double_buffer: gl_attr.double_buffer(),
        sample_buffers: gl_attr.multisample_buffers(),
        samples: gl_attr.multisample_samples(),
        depth_size: gl_attr.depth_size(),
        stencil_size: gl_attr.stencil_size(),
        accum_red_size: gl_attr.accum_red_size(),
        accum_green_size: gl_attr.accum_green_size(),
        accum_blue_size: gl_attr.accum_blue_size(),
        accum_alpha_size: gl_attr.accum_alpha_size(),
        aux_buffers: 0,
        major_version,
        minor_version,
        forward_compatible: gl_attr.context_flags().has_forward_compatible(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolve_config;

    // Needs a display and a GL driver.
    #[test]
    #[ignore]
    fn impossible_sample_count_has_no_config() {
        let sdl = sdl2::init().unwrap();
        let video = sdl.video().unwrap();
        let screen = Sdl2Screen::new(&video);
        let template = GlConfigTemplate {
            double_buffer: true,
            sample_buffers: 1,
            samples: 255,
            ..GlConfigTemplate::default()
        };
        assert!(matches!(
            resolve_config(&screen, &template),
            Err(BackendError::NoSuchConfig(_))
        ));
    }

    #[test]
    #[ignore]
    fn plain_template_resolves() {
        let sdl = sdl2::init().unwrap();
        let video = sdl.video().unwrap();
        let screen = Sdl2Screen::new(&video);
        let template = GlConfigTemplate {
            double_buffer: true,
            ..GlConfigTemplate::default()
        };
        let config = resolve_config(&screen, &template).unwrap();
        assert!(config.satisfies(&template));
        assert_eq!(
            (config.major_version, config.minor_version),
            GL_CONTEXT_VERSION
        );
    }
}
