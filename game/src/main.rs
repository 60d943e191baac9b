use backend::glutils;
use backend::logging;
use backend::system::System;
use backend::{BackendError, GlConfigTemplate, WindowSettings};
use log::{error, info};
use structopt::StructOpt;

// Transparency channel size: 0 for RGB, 8 for RGBA.
const ALPHA_SIZE: u8 = 8;
// Multisampling: 1 buffer with 2 or 4 samples, or 0 buffers for none.
const SAMPLE_BUFFERS: u8 = 1;
const SAMPLES: u8 = 4;
const DOUBLE_BUFFER: bool = true;
const DEPTH_SIZE: u8 = 0;
const STENCIL_SIZE: u8 = 0;
const ACCUM_CHANNEL_SIZE: u8 = 0;
const AUX_BUFFERS: u8 = 0;

const WINDOW_WIDTH: u32 = 640;
const WINDOW_HEIGHT: u32 = 480;
const WINDOW_RESIZABLE: bool = true;
const WINDOW_CAPTION: &str = "DVONN";

#[derive(Debug, StructOpt)]
#[structopt(name = "dvonn", about = "DVONN program structure testbed")]
struct CliOpts {}

fn dvonn_config_template() -> GlConfigTemplate {
    GlConfigTemplate {
        alpha_size: ALPHA_SIZE,
        double_buffer: DOUBLE_BUFFER,
        sample_buffers: SAMPLE_BUFFERS,
        samples: SAMPLES,
        depth_size: DEPTH_SIZE,
        stencil_size: STENCIL_SIZE,
        accum_channel_size: ACCUM_CHANNEL_SIZE,
        aux_buffers: AUX_BUFFERS,
    }
}

fn dvonn_window_settings() -> WindowSettings {
    WindowSettings {
        width: WINDOW_WIDTH,
        height: WINDOW_HEIGHT,
        resizable: WINDOW_RESIZABLE,
        caption: WINDOW_CAPTION.to_string(),
    }
}

fn start_game() -> Result<(), BackendError> {
    let mut system = System::new()?;

    let config = system.resolve_config(&dvonn_config_template())?;
    config.log_capabilities();

    let mut window = system.create_window(&dvonn_window_settings(), &config)?;
    glutils::log_opengl_info();
    window.log_properties();

    system.run(&mut window)
}

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("failed to install logger: {e}");
    }
    let _opts = CliOpts::from_args();

    match start_game() {
        Ok(()) => info!("window closed, exiting"),
        Err(e) => {
            error!("game initialization failure: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_requests_rgba_multisampled_double_buffer() {
        let t = dvonn_config_template();
        assert_eq!(t.alpha_size, 8);
        assert!(t.double_buffer);
        assert_eq!((t.sample_buffers, t.samples), (1, 4));
        assert_eq!(t.accum_alpha_size(), 0);
    }

    #[test]
    fn window_settings() {
        let s = dvonn_window_settings();
        assert_eq!((s.width, s.height), (640, 480));
        assert!(s.resizable);
        assert_eq!(s.caption, "DVONN");
    }

    #[test]
    fn no_flags_are_accepted() {
        assert!(CliOpts::from_iter_safe(["dvonn"]).is_ok());
        assert!(CliOpts::from_iter_safe(["dvonn", "--samples", "8"]).is_err());
    }
}
