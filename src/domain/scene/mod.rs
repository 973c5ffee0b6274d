//! Scene domain module

mod aspect_ratio;
mod camera_angle;
pub mod lookup;
mod mood;
mod scene_config;
mod time_of_day;

pub use aspect_ratio::{AspectRatio, ResolvedAspectRatio, ALL_ASPECT_RATIOS};
pub use camera_angle::{CameraAngle, ALL_CAMERA_ANGLES};
pub use mood::{Mood, ALL_MOODS};
pub use scene_config::SceneConfig;
pub use time_of_day::{TimeOfDay, ALL_TIMES_OF_DAY};
