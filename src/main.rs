use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec3;
use raylib::prelude::*;

use slice_viewer::constants::*;
use slice_viewer::{
    Axis, BadNamePolicy, FolderStyle, NamingPolicy, PlaneOffset, SliceStore, SliceViewer, StoreLayout, ViewerOptions,
};

mod texture_loader;

use crate::texture_loader::TextureDecoder;

// Slider bar geometry, relative to the bottom of the window
const SLIDER_MARGIN: i32 = 40;
const SLIDER_HEIGHT: i32 = 16;

#[derive(Parser, Debug)]
#[command(version, about = "Browse per-axis slice images with a cross-fade")]
struct Args {
    /// Folder holding one subfolder of PNG slices per axis
    #[arg(default_value = BASE_FOLDER)]
    base_folder: PathBuf,

    #[arg(long, value_enum, default_value_t = FolderStyle::Letter)]
    folder_style: FolderStyle,

    /// Only accept `image_<N>.png`
    #[arg(long)]
    strict: bool,

    /// Fail instead of skipping slices without a numeric index
    #[arg(long)]
    abort_on_bad_name: bool,

    #[arg(long, value_enum, default_value_t = Axis::Z)]
    axis: Axis,

    /// Move the plane along the active axis by this much per slice (e.g. 0.002)
    #[arg(long)]
    step_size: Option<f32>,

    /// Cross-fade duration in seconds
    #[arg(long, default_value_t = FADE_DURATION)]
    fade: f32,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    log::info!("Input path: {:?}", args.base_folder);

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Slice Viewer")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slices ---
    let layout = StoreLayout {
        folder_style: args.folder_style,
        naming: if args.strict { NamingPolicy::Strict } else { NamingPolicy::Loose },
        bad_names: if args.abort_on_bad_name { BadNamePolicy::Abort } else { BadNamePolicy::Skip },
    };
    let store = {
        let mut decoder = TextureDecoder { rl: &mut rl, thread: &thread };
        SliceStore::load(&args.base_folder, &layout, &mut decoder)
            .with_context(|| format!("loading slices from {:?}", args.base_folder))?
    };
    if Axis::ALL.iter().all(|&axis| store.is_empty(axis)) {
        log::warn!("No slices were loaded from {:?}", args.base_folder);
    }

    let options = ViewerOptions {
        initial_axis: args.axis,
        fade_duration: args.fade,
        plane_offset: args.step_size.map(|step| PlaneOffset::new(Vec3::ZERO, step)),
    };
    let mut viewer = SliceViewer::new(store, options);

    let camera = Camera3D::perspective(
        Vector3::new(1.6, 1.2, 1.6),
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        45.0,
    );

    // A drag started on the slider keeps tracking past its ends
    let mut dragging = false;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // --- Input ---
        for (key, axis) in [
            (KeyboardKey::KEY_X, Axis::X),
            (KeyboardKey::KEY_Y, Axis::Y),
            (KeyboardKey::KEY_Z, Axis::Z),
        ] {
            if rl.is_key_pressed(key) {
                viewer.set_axis(axis);
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            viewer.step(1);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            viewer.step(-1);
        }
        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            viewer.step(wheel.signum() as i64);
        }

        let screen_width = rl.get_screen_width();
        let screen_height = rl.get_screen_height();
        let slider_rect = Rectangle::new(
            SLIDER_MARGIN as f32,
            (screen_height - SLIDER_MARGIN - SLIDER_HEIGHT) as f32,
            (screen_width - 2 * SLIDER_MARGIN).max(1) as f32,
            SLIDER_HEIGHT as f32,
        );
        let mouse = rl.get_mouse_position();
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            dragging = slider_rect.check_collision_point_rec(mouse);
        }
        if !rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            dragging = false;
        }
        if dragging && viewer.slider().is_some() {
            viewer.drag_slider((mouse.x - slider_rect.x) / slider_rect.width);
        }

        // --- Update Logic ---
        viewer.tick(dt);

        // --- Render ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        {
            let mut d3 = d.begin_mode3D(camera);
            d3.draw_grid(10, 0.25);
            d3.draw_cube_wires(Vector3::new(0.0, 0.0, 0.0), PLANE_SIZE, PLANE_SIZE, PLANE_SIZE, Color::DARKGRAY);
            if let Some(texture) = viewer.displayed() {
                let p = viewer.plane_position();
                let alpha = (viewer.opacity().clamp(0.0, 1.0) * 255.0) as u8;
                d3.draw_billboard(
                    camera,
                    texture,
                    Vector3::new(p.x, p.y, p.z),
                    PLANE_SIZE,
                    Color::new(255, 255, 255, alpha),
                );
            }
        }

        d.draw_text(&viewer.axis_label(), 20, 20, 20, Color::RAYWHITE);
        match viewer.slider() {
            Some(slider) => {
                let filled = if slider.max > 0 {
                    slider.value as f32 / slider.max as f32
                } else {
                    1.0
                };
                d.draw_rectangle_rec(slider_rect, Color::DARKGRAY);
                d.draw_rectangle_rec(
                    Rectangle::new(slider_rect.x, slider_rect.y, slider_rect.width * filled, slider_rect.height),
                    Color::SKYBLUE,
                );
                let counter = format!("{}/{}", slider.value, slider.max);
                d.draw_text(&counter, 20, 48, 20, Color::LIGHTGRAY);
            }
            None => d.draw_text("No slices for this axis", 20, 48, 20, Color::RED),
        }
    }
    Ok(())
}
