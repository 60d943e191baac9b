use crate::error::BackendError;
use crate::render::TriangleRenderer;
use log::{debug, info};
use sdl2::video::{GLContext, Window};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub caption: String,
}

/// What the window reports about itself. Starts out equal to the
/// settings it was built with; only resizes change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowState {
    width: u32,
    height: u32,
    resizable: bool,
    caption: String,
}

impl WindowState {
    pub fn new(settings: &WindowSettings) -> Self {
        WindowState {
            width: settings.width,
            height: settings.height,
            resizable: settings.resizable,
            caption: settings.caption.clone(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn resizable(&self) -> bool {
        self.resizable
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

/// The game window: an SDL window, its GL context and the placeholder scene.
pub struct DvonnWindow {
    state: WindowState,
    // declared before the context so GL objects are released while it is alive
    renderer: TriangleRenderer,
    _gl_ctx: GLContext,
    window: Window,
}

impl DvonnWindow {
    pub(crate) fn new(
        window: Window,
        gl_ctx: GLContext,
        settings: &WindowSettings,
    ) -> Result<Self, BackendError> {
        let renderer = TriangleRenderer::new()?;
        let dw = DvonnWindow {
            state: WindowState::new(settings),
            renderer,
            _gl_ctx: gl_ctx,
            window,
        };
        dw.apply_viewport();
        Ok(dw)
    }

    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub fn width(&self) -> u32 {
        self.state.width()
    }

    pub fn height(&self) -> u32 {
        self.state.height()
    }

    pub fn caption(&self) -> &str {
        self.state.caption()
    }

    pub fn resizable(&self) -> bool {
        self.state.resizable()
    }

    pub fn log_properties(&self) {
        info!("Created DvonnWindow with following initial values:");
        info!("-> (width, height): ({}, {})", self.width(), self.height());
        info!("-> caption: {}", self.caption());
        info!("-> resizable: {}", self.resizable());
        info!("-> flags: 0x{:08x}", self.window.window_flags());
        debug!("{:?}", self);
    }

    pub fn on_draw(&mut self) -> Result<(), BackendError> {
        debug!("on_draw call");
        self.renderer.draw(self.state.width(), self.state.height())
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        debug!("on_resize call: ({}, {})", width, height);
        self.state.resize(width, height);
        self.apply_viewport();
    }

    pub fn swap(&self) {
        self.window.gl_swap_window();
    }

    fn apply_viewport(&self) {
        let (w, h) = self.window.drawable_size();
        unsafe { gl::Viewport(0, 0, w as i32, h as i32) };
    }
}

impl fmt::Debug for DvonnWindow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DvonnWindow")
            .field("id", &self.window.id())
            .field("state", &self.state)
            .field("size", &self.window.size())
            .field("drawable_size", &self.window.drawable_size())
            .field("position", &self.window.position())
            .field("title", &self.window.title())
            .field("flags", &self.window.window_flags())
            .finish()
    }
}
