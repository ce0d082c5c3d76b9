pub mod export;
pub mod playback;
pub mod telemetry;
pub mod trajectory;
