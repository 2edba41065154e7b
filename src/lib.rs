#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod document;
pub mod error;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod scale;
pub mod settings;
pub mod shape;
pub mod state;
pub mod tools;

pub use app::PaintApp;
pub use document::ShapeCollection;
pub use error::ScaleError;
pub use id_generator::ShapeId;
pub use input::{InputEvent, InputHandler};
pub use renderer::{Renderer, Surface};
pub use scale::CoordinateScaler;
pub use settings::Settings;
pub use shape::Ellipse;
pub use state::{EditorState, Host};
pub use tools::{Mode, ModeCommand};
