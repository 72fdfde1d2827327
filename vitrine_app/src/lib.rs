use vitrine_graphics::GraphicsBackend;
use vitrine_render_bridge::{RenderCommand, RenderEvent};
use vitrine_runtime::{Runtime, Signal};

pub struct App<B: GraphicsBackend> {
    pub runtime: Runtime,
    pub graphics: B,
    command_buffer: Vec<RenderCommand>,
    event_buffer: Vec<RenderEvent>,
}

impl<B: GraphicsBackend> App<B> {
    pub fn new(runtime: Runtime, graphics: B) -> Self {
        Self {
            runtime,
            graphics,
            command_buffer: Vec::new(),
            event_buffer: Vec::new(),
        }
    }

    pub fn with_empty_runtime(graphics: B) -> Self {
        Self::new(Runtime::new(), graphics)
    }

    #[inline]
    pub fn update_runtime(&mut self, delta_time: f32) {
        self.runtime.update(delta_time);
    }

    #[inline]
    pub fn present(&mut self) {
        self.runtime.extract_render_commands();
        self.runtime.drain_render_commands(&mut self.command_buffer);
        self.graphics.submit_many(self.command_buffer.drain(..));

        self.graphics.draw_frame();

        self.graphics.drain_events(&mut self.event_buffer);
        self.runtime.apply_render_events(self.event_buffer.drain(..));
    }

    pub fn frame(&mut self, delta_time: f32) {
        self.update_runtime(delta_time);
        self.present();
    }

    #[inline]
    pub fn drain_signals(&mut self, out: &mut Vec<Signal>) {
        self.runtime.drain_signals(out);
    }
}

pub mod entry;
pub mod headless_runner;
