use image::{GrayImage, Luma};
use tracing::debug;

/// Signed distance from point `(px, py)` to a box of half-extents
/// `(bx, by)` centered at the origin, with corners rounded by `r`.
/// Negative inside, positive outside.
fn rounded_box_distance(px: f32, py: f32, bx: f32, by: f32, r: f32) -> f32 {
    let qx = px.abs() - bx + r;
    let qy = py.abs() - by + r;
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    let inside = qx.max(qy).min(0.0);
    outside + inside - r
}

/// Rasterize an 8-bit coverage mask for a `width` x `height` rounded
/// rectangle. 0 means fully transparent, 255 fully opaque; edge pixels take
/// intermediate values so the corner arcs come out antialiased. `radius` is
/// clamped so opposing corners never overlap.
pub fn rounded_rect_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    let bx = width as f32 / 2.0;
    let by = height as f32 / 2.0;
    let r = (radius as f32).min(bx).min(by);

    debug!(width, height, radius = r, "Rasterizing rounded-rectangle mask");

    GrayImage::from_fn(width, height, |x, y| {
        // Sample at the pixel center, relative to the rectangle center.
        let px = x as f32 + 0.5 - bx;
        let py = y as f32 + 0.5 - by;
        let d = rounded_box_distance(px, py, bx, by, r);
        let coverage = (0.5 - d).clamp(0.0, 1.0);
        Luma([(coverage * 255.0).round() as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_transparent_and_center_opaque() {
        let mask = rounded_rect_mask(250, 250, 50);
        assert_eq!(mask.get_pixel(0, 0).0[0], 0);
        assert_eq!(mask.get_pixel(249, 0).0[0], 0);
        assert_eq!(mask.get_pixel(0, 249).0[0], 0);
        assert_eq!(mask.get_pixel(249, 249).0[0], 0);
        assert_eq!(mask.get_pixel(125, 125).0[0], 255);
    }

    #[test]
    fn straight_edges_stay_opaque() {
        let mask = rounded_rect_mask(250, 250, 50);
        // Edge midpoints sit on the flat sides, outside the corner arcs.
        assert_eq!(mask.get_pixel(125, 0).0[0], 255);
        assert_eq!(mask.get_pixel(125, 249).0[0], 255);
        assert_eq!(mask.get_pixel(0, 125).0[0], 255);
        assert_eq!(mask.get_pixel(249, 125).0[0], 255);
    }

    #[test]
    fn zero_radius_yields_a_full_mask() {
        let mask = rounded_rect_mask(64, 64, 0);
        assert!(mask.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn corner_arcs_are_antialiased() {
        let mask = rounded_rect_mask(64, 64, 16);
        let partial = mask.pixels().filter(|p| p.0[0] > 0 && p.0[0] < 255).count();
        assert!(partial > 0, "expected intermediate coverage along the arcs");
    }

    #[test]
    fn oversized_radius_is_clamped() {
        // Radius far beyond the half-extents must not panic or invert the mask.
        let mask = rounded_rect_mask(20, 10, 1000);
        assert_eq!(mask.dimensions(), (20, 10));
        assert_eq!(mask.get_pixel(10, 5).0[0], 255);
        assert_eq!(mask.get_pixel(0, 0).0[0], 0);
    }

    #[test]
    fn single_pixel_mask_is_opaque() {
        let mask = rounded_rect_mask(1, 1, 50);
        assert_eq!(mask.get_pixel(0, 0).0[0], 255);
    }

    #[test]
    fn mask_matches_requested_dimensions() {
        let mask = rounded_rect_mask(123, 45, 10);
        assert_eq!(mask.dimensions(), (123, 45));
    }

    #[test]
    fn mask_is_symmetric() {
        let mask = rounded_rect_mask(100, 60, 20);
        for y in 0..60 {
            for x in 0..100 {
                let v = mask.get_pixel(x, y).0[0];
                assert_eq!(v, mask.get_pixel(99 - x, y).0[0]);
                assert_eq!(v, mask.get_pixel(x, 59 - y).0[0]);
            }
        }
    }
}
