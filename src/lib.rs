#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod store;

pub use app::SquaresApp;
pub use command::{Command, ShapeLedger};
pub use engine::SquaresEngine;
pub use error::CommandError;
pub use geometry::{DragDirection, resolve};
pub use input::InputHandler;
pub use renderer::Renderer;
pub use state::{DragStateMachine, InteractionPhase, SquaresState};
pub use store::{ObserverId, StateStore};
