//! Display colors carried by the state model.
//!
//! The core never touches a terminal or a bitmap; it only records which
//! color a value should be drawn in. Hosts map [`Rgb`] onto whatever color
//! type their renderer uses.

/// RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl std::fmt::Display for Rgb {
    /// Formats as `#RRGGBB`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_hex() {
        assert_eq!(Rgb::new(0xFF, 0x07, 0x3A).to_string(), "#FF073A");
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn test_to_array() {
        assert_eq!(Rgb::new(1, 2, 3).to_array(), [1, 2, 3]);
    }
}
