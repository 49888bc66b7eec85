use std::fs;
use std::path::Path;

use raylib::prelude::*;
use slice_viewer::orientation::{Orientation, read_orientation};
use slice_viewer::{SliceDecoder, SliceError};

/// Decodes slice files straight into GPU textures.
pub struct TextureDecoder<'a> {
    pub rl: &'a mut RaylibHandle,
    pub thread: &'a RaylibThread,
}

impl SliceDecoder for TextureDecoder<'_> {
    type Slice = Texture2D;

    // --- Load Image, Apply EXIF Rotation, Create Texture ---
    fn decode(&mut self, image_path: &Path) -> Result<Texture2D, SliceError> {
        let file_bytes = fs::read(image_path).map_err(|source| SliceError::Io {
            path: image_path.to_path_buf(),
            source,
        })?;

        let decode_error = |reason: String| SliceError::Decode {
            path: image_path.to_path_buf(),
            reason,
        };

        // Extension hint for loading from memory
        let extension = image_path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();
        let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
            .map_err(|e| decode_error(e.to_string()))?;

        match read_orientation(&file_bytes) {
            Orientation::Rotate180 => {
                image.rotate_cw();
                image.rotate_cw();
            }
            Orientation::Rotate90Cw => image.rotate_cw(),
            Orientation::Rotate90Ccw => image.rotate_ccw(),
            Orientation::Normal => {}
        }

        // CPU copy is freed when `image` drops
        self.rl
            .load_texture_from_image(self.thread, &image)
            .map_err(|e| decode_error(e.to_string()))
    }
}
