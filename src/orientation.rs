use std::io::Cursor;

use exif::{In, Reader, Tag, Value};

/// Rotation baked into a slice by its EXIF orientation tag.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Orientation {
    #[default]
    Normal,
    Rotate180,
    Rotate90Cw,
    Rotate90Ccw,
}

impl Orientation {
    // 1 = Top-left (Normal)
    // 3 = Bottom-right (180 deg)
    // 6 = Top-right (90 deg clockwise)
    // 8 = Bottom-left (90 deg counter-clockwise)
    // Others involve flips, ignored here.
    pub fn from_exif_value(value: u16) -> Self {
        match value {
            3 => Orientation::Rotate180,
            6 => Orientation::Rotate90Cw,
            8 => Orientation::Rotate90Ccw,
            _ => Orientation::Normal,
        }
    }
}

/// Orientation of an encoded image, `Normal` when it carries no readable EXIF.
pub fn read_orientation(file_bytes: &[u8]) -> Orientation {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            log::trace!("No EXIF orientation: {}", e);
            return Orientation::Normal;
        }
    };
    match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
        Some(Value::Short(values)) if !values.is_empty() => Orientation::from_exif_value(values[0]),
        _ => Orientation::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_rotation_tags() {
        assert_eq!(Orientation::from_exif_value(1), Orientation::Normal);
        assert_eq!(Orientation::from_exif_value(3), Orientation::Rotate180);
        assert_eq!(Orientation::from_exif_value(6), Orientation::Rotate90Cw);
        assert_eq!(Orientation::from_exif_value(8), Orientation::Rotate90Ccw);
        // mirrored variants
        assert_eq!(Orientation::from_exif_value(2), Orientation::Normal);
    }

    #[test]
    fn garbage_has_no_orientation() {
        assert_eq!(read_orientation(b"definitely not a png"), Orientation::Normal);
        assert_eq!(read_orientation(&[]), Orientation::Normal);
    }
}
