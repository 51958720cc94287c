pub mod controller;
pub mod headless;
pub mod interactive;
pub mod menu;
pub mod session;
pub mod speed;

pub use controller::{Controller, Editor, Mode, Overlay, PathPrompt, Scene, Simulation, Transition};
pub use headless::{HeadlessReport, HeadlessRun};
pub use interactive::InteractiveMode;
pub use menu::{MenuItem, MenuState};
pub use session::run_session;
pub use speed::SpeedLevel;
