//! Soft shadows
//!
//! A shadow is the shape drawn in the shadow color into a scratch layer,
//! blurred, then composited under the shape itself. Three box blurs stand in
//! for a gaussian of standard deviation `blur / 2`.

use prizewheel_core::ShadowStyle;

/// Box width that makes three passes approximate a gaussian of `sigma`
fn box_width(sigma: f32) -> u32 {
    (sigma * 3.0 * (2.0 * std::f32::consts::PI).sqrt() / 4.0 + 0.5).floor() as u32
}

/// Box radius for a shadow's blur amount
pub(crate) fn blur_radius(shadow: &ShadowStyle) -> u32 {
    box_width(shadow.blur / 2.0) / 2
}

/// Blur premultiplied RGBA8 pixels in place with three box passes
pub(crate) fn blur_rgba(pixels: &mut [u8], width: u32, height: u32, radius: u32) {
    if radius == 0 || width == 0 || height == 0 {
        return;
    }
    let mut scratch = vec![0u8; pixels.len()];
    for _ in 0..3 {
        box_pass(pixels, &mut scratch, width as usize, height as usize, radius as i32, true);
        box_pass(&scratch, pixels, width as usize, height as usize, radius as i32, false);
    }
}

/// One separable sliding-window pass; pixels outside the image count as transparent
fn box_pass(src: &[u8], dst: &mut [u8], w: usize, h: usize, r: i32, horizontal: bool) {
    let (lines, len) = if horizontal { (h, w) } else { (w, h) };
    let index = |line: usize, pos: usize| -> usize {
        if horizontal {
            (line * w + pos) * 4
        } else {
            (pos * w + line) * 4
        }
    };
    let div = (2 * r + 1) as u32;

    for line in 0..lines {
        let mut sum = [0u32; 4];
        for pos in 0..=r.min(len as i32 - 1) {
            let i = index(line, pos as usize);
            for c in 0..4 {
                sum[c] += src[i + c] as u32;
            }
        }

        for pos in 0..len {
            let o = index(line, pos);
            for c in 0..4 {
                dst[o + c] = (sum[c] / div) as u8;
            }

            let enter = pos as i32 + r + 1;
            if enter < len as i32 {
                let i = index(line, enter as usize);
                for c in 0..4 {
                    sum[c] += src[i + c] as u32;
                }
            }
            let leave = pos as i32 - r;
            if leave >= 0 {
                let i = index(line, leave as usize);
                for c in 0..4 {
                    sum[c] -= src[i + c] as u32;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prizewheel_core::Color;

    #[test]
    fn test_blur_radius_from_canvas_blur() {
        let shadow = ShadowStyle {
            color: Color::BLACK,
            blur: 4.0,
        };
        assert_eq!(blur_radius(&shadow), 2);
        let none = ShadowStyle {
            color: Color::BLACK,
            blur: 0.0,
        };
        assert_eq!(blur_radius(&none), 0);
    }

    #[test]
    fn test_blur_spreads_a_single_pixel() {
        let (w, h) = (9u32, 9u32);
        let mut pixels = vec![0u8; (w * h * 4) as usize];
        let center = ((4 * w + 4) * 4) as usize;
        pixels[center..center + 4].copy_from_slice(&[0, 0, 0, 255]);

        blur_rgba(&mut pixels, w, h, 1);

        let alpha = |x: u32, y: u32| pixels[((y * w + x) * 4 + 3) as usize];
        assert!(alpha(4, 4) < 255);
        assert!(alpha(4, 4) > 0);
        assert!(alpha(5, 4) > 0);
        assert!(alpha(4, 4) >= alpha(6, 4));
        // Symmetric spread
        assert_eq!(alpha(3, 4), alpha(5, 4));
        assert_eq!(alpha(4, 3), alpha(4, 5));
    }

    #[test]
    fn test_zero_radius_is_noop() {
        let mut pixels = vec![7u8; 16];
        blur_rgba(&mut pixels, 2, 2, 0);
        assert!(pixels.iter().all(|&p| p == 7));
    }
}
