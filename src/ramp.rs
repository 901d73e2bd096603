// ASCII characters from darkest to lightest
pub const RAMP: [char; 11] = ['@', '#', 'S', '%', '?', '*', '+', ';', ':', ',', '.'];

/// Perceptual brightness of an RGB pixel, in [0, 1]
///
/// Uses the standard luma weights - eyes are most sensitive to green,
/// least to blue.
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    (r as f32 * 0.299 + g as f32 * 0.587 + b as f32 * 0.114) / 255.0
}

/// Map a brightness value to a ramp index (0 = darkest glyph)
pub fn index_for(lum: f32) -> usize {
    let index = (lum * (RAMP.len() - 1) as f32) as usize;
    index.min(RAMP.len() - 1)
}

/// Pick the ramp glyph for a brightness value
pub fn glyph_for(lum: f32) -> char {
    RAMP[index_for(lum)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(luminance(0, 0, 0), 0.0);
        // 0.299 + 0.587 + 0.114 = 1.0 exactly
        assert!((luminance(255, 255, 255) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_luminance_channel_weights() {
        // Green contributes more than red, red more than blue
        let red = luminance(255, 0, 0);
        let green = luminance(0, 255, 0);
        let blue = luminance(0, 0, 255);

        assert!(green > red);
        assert!(red > blue);

        assert!((red - 0.299).abs() < 1e-6);
        assert!((green - 0.587).abs() < 1e-6);
        assert!((blue - 0.114).abs() < 1e-6);
    }

    #[test]
    fn test_index_boundaries() {
        // Black maps to the densest glyph, white to the sparsest
        assert_eq!(index_for(0.0), 0);
        assert_eq!(index_for(1.0), RAMP.len() - 1);
        assert_eq!(glyph_for(0.0), '@');
        assert_eq!(glyph_for(1.0), '.');
    }

    #[test]
    fn test_index_monotonic() {
        // Brighter pixels never get a denser glyph
        let mut last = 0;
        for step in 0..=1000 {
            let lum = step as f32 / 1000.0;
            let index = index_for(lum);
            assert!(index >= last, "index decreased at lum {lum}");
            assert!(index < RAMP.len());
            last = index;
        }
    }

    #[test]
    fn test_all_indices_reachable() {
        let mut seen = [false; 11];
        for step in 0..=1000 {
            seen[index_for(step as f32 / 1000.0)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_index_clamps_out_of_range() {
        // Values outside [0, 1] still land on a valid glyph
        assert_eq!(index_for(-0.5), 0);
        assert_eq!(index_for(1.5), RAMP.len() - 1);
    }
}
