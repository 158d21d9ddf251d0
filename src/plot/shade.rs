use image::Rgba;

use crate::activation::is_positive;

pub const POSITIVE_RGB: [u8; 3] = [107, 158, 125];
pub const NEGATIVE_RGB: [u8; 3] = [212, 120, 156];
pub const BACKGROUND: Rgba<u8> = Rgba([254, 249, 250, 255]);
pub const BOUNDARY: Rgba<u8> = Rgba([92, 65, 73, 255]);
pub const BORDER: Rgba<u8> = Rgba([228, 192, 202, 255]);
pub const MARKER_POSITIVE: Rgba<u8> = Rgba([74, 125, 92, 255]);
pub const MARKER_NEGATIVE: Rgba<u8> = Rgba([176, 85, 120, 255]);

/// Region tint for one sampled output: green-ish on the positive side,
/// pink on the negative side, alpha from 50 on the threshold up to 200 at
/// either extreme.
pub fn region_color(output: f64) -> Rgba<u8> {
    let intensity = ((output - 0.5).abs() * 2.0).clamp(0.0, 1.0);
    let alpha = (50.0 + 150.0 * intensity).floor() as u8;
    let [r, g, b] = if is_positive(output) { POSITIVE_RGB } else { NEGATIVE_RGB };
    Rgba([r, g, b, alpha])
}

/// `top` composited over an opaque `bottom`.
pub fn over(top: Rgba<u8>, bottom: Rgba<u8>) -> Rgba<u8> {
    let a = top[3] as f64 / 255.0;
    let mix = |t: u8, b: u8| (t as f64 * a + b as f64 * (1.0 - a)).round() as u8;
    Rgba([mix(top[0], bottom[0]), mix(top[1], bottom[1]), mix(top[2], bottom[2]), 255])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_grows_with_distance_from_threshold() {
        assert_eq!(region_color(0.5), Rgba([107, 158, 125, 50]));
        assert_eq!(region_color(1.0), Rgba([107, 158, 125, 200]));
        assert_eq!(region_color(0.0), Rgba([212, 120, 156, 200]));
        assert_eq!(region_color(0.25)[3], 125);
    }

    #[test]
    fn opaque_top_wins() {
        assert_eq!(over(Rgba([1, 2, 3, 255]), BACKGROUND), Rgba([1, 2, 3, 255]));
        assert_eq!(over(Rgba([1, 2, 3, 0]), BACKGROUND), BACKGROUND);
    }
}
