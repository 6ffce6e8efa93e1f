// Domain layer - Grid, transition rule, patterns
pub mod domain;

// Application layer - Simulation, layout, scheduling, commands
pub mod application;

// Ambient configuration
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridBuffers, Pattern, PatternLibrary, presets};
pub use application::{Command, GameState, Layout, Scheduler, Simulation};
pub use config::{ConfigError, SimConfig};
