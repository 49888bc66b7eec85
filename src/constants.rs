pub const WINDOW_WIDTH: i32 = 1280;          // Default window width
pub const WINDOW_HEIGHT: i32 = 720;          // Default window height
pub const FPS: u32 = 60;                     // Target frames per second

pub const FADE_DURATION: f32 = 0.3;          // Whole cross-fade, fade-out + fade-in (seconds)

pub const BASE_FOLDER: &str = "Assets/CT_Slices";
pub const SLICE_EXTENSION: &str = "png";
pub const STRICT_PREFIX: &str = "image";     // Stem prefix required by the strict naming policy

pub const PLANE_SIZE: f32 = 1.0;             // Edge length of the displayed slice plane
