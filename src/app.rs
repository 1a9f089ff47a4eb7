use crate::command::Command;
use crate::engine::SquaresEngine;
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;

/// The eframe shell: one engine instance with its input adapter and
/// renderer, wired per window so independent canvases never share state.
pub struct SquaresApp {
    engine: SquaresEngine,
    input: InputHandler,
    renderer: Renderer,
}

impl SquaresApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut engine = SquaresEngine::new();
        let renderer = Renderer::attach(&mut engine);
        Self {
            engine,
            input: InputHandler::new(),
            renderer,
        }
    }

    pub fn engine(&self) -> &SquaresEngine {
        &self.engine
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn set_canvas_rect(&mut self, rect: egui::Rect) {
        self.input.set_canvas_rect(rect);
    }

    /// Submit a single command, logging rather than propagating intake
    /// violations: a rejected command is a bug in the event mapping, not a
    /// state the UI can recover from.
    pub fn submit(&mut self, command: Command) {
        if let Err(err) = self.engine.submit(command) {
            log::error!("rejected command: {err}");
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        for command in self.input.process_input(ctx) {
            self.submit(command);
        }
    }
}

impl eframe::App for SquaresApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
