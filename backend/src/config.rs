//! GL framebuffer configuration negotiation.
//!
//! A [`GlConfigTemplate`] lists the capabilities we ask for, a [`Screen`]
//! enumerates what the driver can give us, and [`resolve_config`] picks the
//! single configuration the window is created with.

use crate::error::BackendError;
use log::info;
use std::fmt;

/// Requested framebuffer capabilities.
///
/// Sizes and counts are minimums: a configuration with more bits still
/// matches. `double_buffer` has to match exactly.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct GlConfigTemplate {
    pub alpha_size: u8,
    pub double_buffer: bool,
    pub sample_buffers: u8,
    pub samples: u8,
    pub depth_size: u8,
    pub stencil_size: u8,
    /// Applied to the red, green and blue accumulation channels, and to
    /// the alpha one when `alpha_size` is nonzero.
    pub accum_channel_size: u8,
    pub aux_buffers: u8,
}

impl GlConfigTemplate {
    pub fn accum_alpha_size(&self) -> u8 {
        if self.alpha_size > 0 {
            self.accum_channel_size
        } else {
            0
        }
    }
}

impl fmt::Display for GlConfigTemplate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "alpha={} double_buffer={} sample_buffers={} samples={} depth={} stencil={} accum={} aux={}",
            self.alpha_size,
            self.double_buffer,
            self.sample_buffers,
            self.samples,
            self.depth_size,
            self.stencil_size,
            self.accum_channel_size,
            self.aux_buffers
        )
    }
}

/// A framebuffer configuration the platform actually offers.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct GlConfig {
    pub buffer_size: u8,
    pub red_size: u8,
    pub green_size: u8,
    pub blue_size: u8,
    pub alpha_size: u8,
    pub stereo: bool,
    pub double_buffer: bool,
    pub sample_buffers: u8,
    pub samples: u8,
    pub depth_size: u8,
    pub stencil_size: u8,
    pub accum_red_size: u8,
    pub accum_green_size: u8,
    pub accum_blue_size: u8,
    pub accum_alpha_size: u8,
    pub aux_buffers: u8,
    pub major_version: u8,
    pub minor_version: u8,
    pub forward_compatible: bool,
}

impl GlConfig {
    pub fn satisfies(&self, t: &GlConfigTemplate) -> bool {
        self.double_buffer == t.double_buffer
            && self.alpha_size >= t.alpha_size
            && self.sample_buffers >= t.sample_buffers
            && self.samples >= t.samples
            && self.depth_size >= t.depth_size
            && self.stencil_size >= t.stencil_size
            && self.accum_red_size >= t.accum_channel_size
            && self.accum_green_size >= t.accum_channel_size
            && self.accum_blue_size >= t.accum_channel_size
            && self.accum_alpha_size >= t.accum_alpha_size()
            && self.aux_buffers >= t.aux_buffers
    }

    /// Total number of bits (and buffers) granted beyond what `t` asked for.
    /// Only meaningful when `self.satisfies(t)`.
    pub fn surplus(&self, t: &GlConfigTemplate) -> u32 {
        let over = |have: u8, want: u8| have.saturating_sub(want) as u32;
        over(self.alpha_size, t.alpha_size)
            + over(self.sample_buffers, t.sample_buffers)
            + over(self.samples, t.samples)
            + over(self.depth_size, t.depth_size)
            + over(self.stencil_size, t.stencil_size)
            + over(self.accum_red_size, t.accum_channel_size)
            + over(self.accum_green_size, t.accum_channel_size)
            + over(self.accum_blue_size, t.accum_channel_size)
            + over(self.accum_alpha_size, t.accum_alpha_size())
            + over(self.aux_buffers, t.aux_buffers)
    }

    pub fn log_capabilities(&self) {
        info!("Window GL context values available, given user-specified options:");
        info!(
            "-> buffer_size: {} ({}, {}, {}, {})",
            self.buffer_size, self.red_size, self.green_size, self.blue_size, self.alpha_size
        );
        info!("-> stereo: {}", self.stereo);
        info!("-> double_buffer: {}", self.double_buffer);
        info!("-> sample_buffers: {}", self.sample_buffers);
        info!("-> samples: {}", self.samples);
        info!("-> depth_size: {}", self.depth_size);
        info!("-> stencil_size: {}", self.stencil_size);
        info!(
            "-> accum_size: ({}, {}, {}, {})",
            self.accum_red_size, self.accum_green_size, self.accum_blue_size, self.accum_alpha_size
        );
        info!("-> aux_buffers: {}", self.aux_buffers);
        info!("-> major_version: {}", self.major_version);
        info!("-> minor_version: {}", self.minor_version);
        info!("-> forward_compatible: {}", self.forward_compatible);
    }
}

impl fmt::Display for GlConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "rgba=({}, {}, {}, {}) double_buffer={} stereo={} samples={}x{} depth={} stencil={} accum=({}, {}, {}, {}) aux={} gl={}.{}",
            self.red_size,
            self.green_size,
            self.blue_size,
            self.alpha_size,
            self.double_buffer,
            self.stereo,
            self.sample_buffers,
            self.samples,
            self.depth_size,
            self.stencil_size,
            self.accum_red_size,
            self.accum_green_size,
            self.accum_blue_size,
            self.accum_alpha_size,
            self.aux_buffers,
            self.major_version,
            self.minor_version
        )
    }
}

/// The display's default screen, as far as configuration matching goes.
pub trait Screen {
    /// Every configuration satisfying `template`, in the platform's order.
    fn matching_configs(&self, template: &GlConfigTemplate) -> Result<Vec<GlConfig>, BackendError>;

    /// Picks one of `candidates`. The default ranking prefers the fewest
    /// surplus bits over the template and keeps enumeration order on ties.
    fn best_config(&self, template: &GlConfigTemplate, candidates: Vec<GlConfig>) -> Option<GlConfig> {
        candidates
            .into_iter()
            .min_by_key(|c| c.surplus(template))
    }
}

/// Resolves `template` against `screen`, failing with
/// [`BackendError::NoSuchConfig`] when nothing matches.
pub fn resolve_config<S: Screen + ?Sized>(
    screen: &S,
    template: &GlConfigTemplate,
) -> Result<GlConfig, BackendError> {
    let matching: Vec<GlConfig> = screen
        .matching_configs(template)?
        .into_iter()
        .filter(|c| c.satisfies(template))
        .collect();
    if matching.is_empty() {
        return Err(BackendError::NoSuchConfig(*template));
    }

    for config in &matching {
        info!("GL config matched all specifications: {}", config);
    }
    info!("Choosing the best out of {} config option(s)", matching.len());

    screen
        .best_config(template, matching)
        .ok_or(BackendError::NoSuchConfig(*template))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeScreen {
        configs: Vec<GlConfig>,
    }

    impl Screen for FakeScreen {
        fn matching_configs(&self, template: &GlConfigTemplate) -> Result<Vec<GlConfig>, BackendError> {
            Ok(self
                .configs
                .iter()
                .filter(|c| c.satisfies(template))
                .copied()
                .collect())
        }
    }

    fn rgba8(samples: u8, depth: u8) -> GlConfig {
        GlConfig {
            buffer_size: 32,
            red_size: 8,
            green_size: 8,
            blue_size: 8,
            alpha_size: 8,
            double_buffer: true,
            sample_buffers: if samples > 0 { 1 } else { 0 },
            samples,
            depth_size: depth,
            major_version: 3,
            minor_version: 3,
            ..GlConfig::default()
        }
    }

    fn dvonn_template() -> GlConfigTemplate {
        GlConfigTemplate {
            alpha_size: 8,
            double_buffer: true,
            sample_buffers: 1,
            samples: 4,
            ..GlConfigTemplate::default()
        }
    }

    #[test]
    fn unsatisfiable_template_is_an_error() {
        let screen = FakeScreen {
            configs: vec![rgba8(0, 24), rgba8(4, 24), rgba8(8, 0)],
        };
        let template = GlConfigTemplate {
            samples: 255,
            ..dvonn_template()
        };
        match resolve_config(&screen, &template) {
            Err(BackendError::NoSuchConfig(t)) => assert_eq!(t, template),
            other => panic!("expected NoSuchConfig, got {:?}", other),
        }
    }

    #[test]
    fn empty_screen_is_an_error() {
        let screen = FakeScreen { configs: vec![] };
        assert!(matches!(
            resolve_config(&screen, &dvonn_template()),
            Err(BackendError::NoSuchConfig(_))
        ));
    }

    #[test]
    fn picks_the_tightest_match() {
        let screen = FakeScreen {
            configs: vec![rgba8(0, 24), rgba8(8, 24), rgba8(4, 24), rgba8(4, 0)],
        };
        let config = resolve_config(&screen, &dvonn_template()).unwrap();
        assert_eq!(config, rgba8(4, 0));
    }

    #[test]
    fn ties_keep_enumeration_order() {
        let mut first = rgba8(4, 0);
        first.stencil_size = 8;
        let second = rgba8(4, 8);
        let screen = FakeScreen {
            configs: vec![first, second],
        };
        assert_eq!(resolve_config(&screen, &dvonn_template()).unwrap(), first);
    }

    #[test]
    fn double_buffer_must_be_equal() {
        let mut single = rgba8(4, 0);
        single.double_buffer = false;
        assert!(!single.satisfies(&dvonn_template()));
        assert!(single.satisfies(&GlConfigTemplate {
            double_buffer: false,
            ..dvonn_template()
        }));
    }

    #[test]
    fn accum_alpha_only_requested_with_alpha() {
        let with_alpha = GlConfigTemplate {
            accum_channel_size: 16,
            ..dvonn_template()
        };
        let without_alpha = GlConfigTemplate {
            alpha_size: 0,
            ..with_alpha
        };
        assert_eq!(with_alpha.accum_alpha_size(), 16);
        assert_eq!(without_alpha.accum_alpha_size(), 0);

        let mut config = rgba8(4, 0);
        config.accum_red_size = 16;
        config.accum_green_size = 16;
        config.accum_blue_size = 16;
        assert!(!config.satisfies(&with_alpha));
        assert!(config.satisfies(&without_alpha));
    }

    #[test]
    fn screen_returning_non_matching_configs_is_filtered() {
        struct LyingScreen;
        impl Screen for LyingScreen {
            fn matching_configs(&self, _: &GlConfigTemplate) -> Result<Vec<GlConfig>, BackendError> {
                Ok(vec![GlConfig::default()])
            }
        }
        assert!(matches!(
            resolve_config(&LyingScreen, &dvonn_template()),
            Err(BackendError::NoSuchConfig(_))
        ));
    }
}
