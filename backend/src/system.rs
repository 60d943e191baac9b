use crate::config::{self, GlConfig, GlConfigTemplate};
use crate::error::BackendError;
use crate::screen::{self, Sdl2Screen};
use crate::window::{DvonnWindow, WindowSettings};
use log::debug;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

const FRAME_TIME: std::time::Duration = std::time::Duration::new(0, 1_000_000_000u32 / 60);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IoEvents {
    Quit,
    // width, height
    Resized(u32, u32),
}

pub struct System {
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    event_pump: sdl2::EventPump,
    events: Vec<IoEvents>,
}

impl System {
    pub fn new() -> Result<System, BackendError> {
        let sdl_context = sdl2::init().map_err(BackendError::InitError)?;
        let video_subsystem = sdl_context
            .video()
            .map_err(BackendError::VideoInitError)?;
        let event_pump = sdl_context
            .event_pump()
            .map_err(BackendError::EventPumpError)?;

        Ok(System {
            sdl_context,
            video_subsystem,
            event_pump,
            events: Vec::new(),
        })
    }

    pub fn screen(&self) -> Sdl2Screen<'_> {
        Sdl2Screen::new(&self.video_subsystem)
    }

    pub fn resolve_config(&self, template: &GlConfigTemplate) -> Result<GlConfig, BackendError> {
        config::resolve_config(&self.screen(), template)
    }

    pub fn create_window(
        &self,
        settings: &WindowSettings,
        config: &GlConfig,
    ) -> Result<DvonnWindow, BackendError> {
        let gl_attr = self.video_subsystem.gl_attr();
        screen::apply_config(&gl_attr, config);

        let mut builder =
            self.video_subsystem
                .window(&settings.caption, settings.width, settings.height);
        builder.opengl();
        if settings.resizable {
            builder.resizable();
        }
        let window = builder.build().map_err(BackendError::WindowCreationFailed)?;

        let gl_ctx = window
            .gl_create_context()
            .map_err(BackendError::GlContextInitFailed)?;
        gl::load_with(|name| self.video_subsystem.gl_get_proc_address(name) as *const _);

        DvonnWindow::new(window, gl_ctx, settings)
    }

    pub fn process_io_events(&mut self) -> &[IoEvents] {
        self.events.clear();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => self.events.push(IoEvents::Quit),
                Event::Window {
                    win_event: WindowEvent::SizeChanged(w, h),
                    ..
                } => self
                    .events
                    .push(IoEvents::Resized(w.max(0) as u32, h.max(0) as u32)),
                _ => {}
            }
        }
        &self.events
    }

    /// Hands control to the event loop until the window is closed.
    ///
    /// Every iteration dispatches pending resizes, redraws and swaps, then
    /// sleeps for the rest of a 60 Hz frame.
    pub fn run(&mut self, window: &mut DvonnWindow) -> Result<(), BackendError> {
        loop {
            let events = self.process_io_events().to_vec();
            for event in events {
                match event {
                    IoEvents::Quit => {
                        debug!("quit requested");
                        return Ok(());
                    }
                    IoEvents::Resized(w, h) => window.on_resize(w, h),
                }
            }
            window.on_draw()?;
            window.swap();
            ::std::thread::sleep(FRAME_TIME);
        }
    }
}
