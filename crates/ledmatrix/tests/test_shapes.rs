//! Geometry tests for the drawing primitives.
//!
//! Covers clipping, value independence of pixels, and the exact pixel sets
//! produced by the rectangle, triangle and bitmap primitives.

use ledmatrix::{normalize, Canvas, Corners, Halves, Pixel, Rgba};
use pretty_assertions::assert_eq;

// =============================================================================
// Helper Functions
// =============================================================================

const RED: Rgba = Rgba::rgb(255, 0, 0);

fn lit(canvas: &Canvas) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in 0..canvas.height() as i32 {
        for x in 0..canvas.width() as i32 {
            if canvas.matrix().get(x, y).is_some_and(|p| p.is_on()) {
                out.push((x, y));
            }
        }
    }
    out
}

/// Run every primitive with arguments that reach far outside a small grid.
fn draw_everything(canvas: &mut Canvas, offset: i32) {
    let o = offset;
    canvas.draw_pixel(o, -o, RED);
    canvas.draw_line(-o, -o, o, o, RED);
    canvas.draw_fast_vline(o, -o, 3 * o, RED);
    canvas.draw_fast_hline(-o, o, 3 * o, RED);
    canvas.draw_rect(-o, -o, 2 * o, 2 * o, RED);
    canvas.fill_rect(o - 2, o - 2, 5, 5, RED);
    canvas.draw_circle(o, o, o, RED);
    canvas.fill_circle(-o, o, o, RED);
    canvas.draw_circle_helper(o, -o, o, Corners::ALL, RED);
    canvas.fill_circle_helper(o, o, o, Halves::BOTH, o, RED);
    canvas.draw_round_rect(-o, -o, 3 * o, 3 * o, o / 2, RED);
    canvas.fill_round_rect(o, o, 2 * o, 2 * o, o / 2, RED);
    canvas.draw_triangle(-o, 0, o, -o, 2 * o, 2 * o, RED);
    canvas.fill_triangle(-o, 0, o, -o, 2 * o, 2 * o, RED);
    canvas.draw_bitmap(-o, -o, &[0xFF; 64], 3 * o, 3 * o, RED);
}

// =============================================================================
// Bounds
// =============================================================================

#[test]
fn test_out_of_range_writes_never_grow_or_panic() {
    for (w, h) in [(1, 1), (3, 7), (8, 8), (17, 5)] {
        for offset in [1, 4, 20, 300] {
            let mut canvas = Canvas::new(w, h).unwrap();
            draw_everything(&mut canvas, offset);
            assert_eq!(canvas.matrix().len(), (w * h) as usize);
            assert_eq!(canvas.matrix().rows().count(), h as usize);
        }
    }
}

#[test]
fn test_fully_offscreen_draws_are_noops() {
    let mut canvas = Canvas::new(8, 8).unwrap();
    canvas.draw_line(-10, -10, -3, -1, RED);
    canvas.fill_rect(20, 20, 4, 4, RED);
    canvas.fill_circle(-50, 4, 5, RED);
    canvas.fill_triangle(100, 0, 110, 5, 105, 9, RED);
    assert_eq!(canvas.matrix().lit_count(), 0);
}

#[test]
fn test_small_shapes_near_i32_limits_are_clipped() {
    const MAX: i32 = i32::MAX;
    const MIN: i32 = i32::MIN;
    let mut canvas = Canvas::new(4, 4).unwrap();

    canvas.draw_fast_hline(MAX, 0, 2, RED);
    canvas.draw_fast_vline(0, MAX, 2, RED);
    canvas.draw_fast_hline(MIN, 1, -2, RED);
    canvas.draw_fast_vline(1, MIN, 0, RED);
    canvas.draw_line(MIN, 0, MIN + 3, 1, RED);
    canvas.draw_line(MAX, MAX, MAX - 2, MAX - 1, RED);
    canvas.draw_rect(MAX - 1, MIN, 4, 4, RED);
    canvas.fill_rect(MAX, MAX, 3, 3, RED);
    canvas.draw_circle(MAX, MIN, 2, RED);
    canvas.fill_circle(MIN, MAX, 2, RED);
    canvas.draw_circle_helper(MAX, MAX, 2, Corners::ALL, RED);
    canvas.fill_circle_helper(MIN, MIN, 2, Halves::BOTH, MAX, RED);
    canvas.draw_round_rect(MAX - 2, MAX - 2, 6, 6, 2, RED);
    canvas.fill_round_rect(MIN, MIN, 6, 6, 2, RED);
    canvas.draw_triangle(MAX, 0, MAX - 2, 2, MAX, 3, RED);
    canvas.fill_triangle(MAX, 0, MAX - 2, 2, MAX, 3, RED);
    canvas.draw_bitmap(MAX, MAX, &[0xFF; 4], 8, 4, RED);

    assert_eq!(canvas.matrix().lit_count(), 0);
}

#[test]
fn test_long_spans_are_clipped_to_the_grid() {
    let mut canvas = Canvas::new(4, 4).unwrap();
    // Negative lengths reach back from the far end of the range
    canvas.draw_fast_hline(i32::MAX, 0, i32::MIN, RED);
    canvas.draw_fast_vline(3, i32::MAX, i32::MIN, RED);
    canvas.fill_rect(-1, 2, i32::MAX, 1, RED);
    assert_eq!(
        lit(&canvas),
        vec![(0, 0), (1, 0), (2, 0), (3, 0), (3, 1), (0, 2), (1, 2), (2, 2), (3, 2), (3, 3)]
    );
}

// =============================================================================
// Pixel Independence
// =============================================================================

#[test]
fn test_fill_screen_cells_are_independent() {
    let blue = normalize(0x0000ffu32).unwrap();
    let mut canvas = Canvas::new(5, 5).unwrap();
    canvas.fill_screen(Some(blue));
    canvas.draw_pixel(2, 2, RED);

    assert_eq!(canvas.matrix().get(2, 2), Some(Pixel::On(RED)));
    let others = canvas
        .matrix()
        .pixels()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 12);
    for (_, pixel) in others {
        assert_eq!(*pixel, Pixel::On(blue));
    }
}

#[test]
fn test_caller_color_is_copied() {
    let mut color = Rgba::rgb(1, 2, 3);
    let mut canvas = Canvas::new(2, 1).unwrap();
    canvas.draw_pixel(0, 0, color);
    color.r = 200;
    canvas.draw_pixel(1, 0, color);

    assert_eq!(canvas.matrix().get(0, 0), Some(Pixel::On(Rgba::rgb(1, 2, 3))));
    assert_eq!(canvas.matrix().get(1, 0), Some(Pixel::On(Rgba::rgb(200, 2, 3))));
}

#[test]
fn test_clear_after_fill() {
    let mut canvas = Canvas::new(3, 3).unwrap();
    canvas.fill_screen(Some(RED));
    canvas.clear();
    assert!(canvas.matrix().pixels().iter().all(|p| *p == Pixel::Off));
}

// =============================================================================
// Lines and Rectangles
// =============================================================================

#[test]
fn test_line_endpoint_order_is_irrelevant() {
    let cases = [(0, 0, 9, 4), (1, 8, 7, 0), (3, 3, 3, 9), (0, 5, 9, 5), (2, 1, 8, 7)];
    for (x1, y1, x2, y2) in cases {
        let mut forward = Canvas::new(10, 10).unwrap();
        forward.draw_line(x1, y1, x2, y2, RED);

        let mut backward = Canvas::new(10, 10).unwrap();
        backward.draw_line(x2, y2, x1, y1, RED);

        assert_eq!(lit(&forward), lit(&backward), "line {:?}", (x1, y1, x2, y2));
    }
}

#[test]
fn test_rect_outline() {
    let mut canvas = Canvas::new(5, 3).unwrap();
    canvas.draw_rect(0, 0, 5, 3, RED);

    assert_eq!(canvas.matrix().lit_count(), 12);
    assert_eq!(canvas.to_ascii(), "XXXXX\nX   X\nXXXXX");
    for x in 1..4 {
        assert!(!canvas.matrix().get(x, 1).unwrap().is_on());
    }
}

#[test]
fn test_fill_rect_matches_area() {
    let mut canvas = Canvas::new(8, 8).unwrap();
    canvas.fill_rect(2, 3, 4, 2, RED);
    assert_eq!(canvas.matrix().lit_count(), 8);
    assert_eq!(
        canvas.to_ascii(),
        [
            "        ", "        ", "        ", "  XXXX  ", "  XXXX  ", "        ", "        ",
            "        ",
        ]
        .join("\n")
    );
}

// =============================================================================
// Triangles
// =============================================================================

#[test]
fn test_fill_triangle_right_angle() {
    let mut canvas = Canvas::new(6, 6).unwrap();
    canvas.fill_triangle(0, 0, 4, 0, 0, 4, RED);

    for y in 0..6 {
        for x in 0..6 {
            let inside = x + y <= 4;
            assert_eq!(
                canvas.matrix().get(x, y).unwrap().is_on(),
                inside,
                "({}, {})",
                x,
                y
            );
        }
    }
}

#[test]
fn test_fill_triangle_vertex_order_is_irrelevant() {
    let mut reference = Canvas::new(6, 6).unwrap();
    reference.fill_triangle(0, 0, 4, 0, 0, 4, RED);

    let orders = [
        (4, 0, 0, 4, 0, 0),
        (0, 4, 0, 0, 4, 0),
        (0, 4, 4, 0, 0, 0),
    ];
    for (x0, y0, x1, y1, x2, y2) in orders {
        let mut canvas = Canvas::new(6, 6).unwrap();
        canvas.fill_triangle(x0, y0, x1, y1, x2, y2, RED);
        assert_eq!(lit(&canvas), lit(&reference));
    }
}

#[test]
fn test_fill_triangle_degenerate_span() {
    let mut canvas = Canvas::new(6, 3).unwrap();
    canvas.fill_triangle(0, 0, 4, 0, 2, 0, RED);
    assert_eq!(canvas.to_ascii(), "XXXXX \n      \n      ");
}

#[test]
fn test_fill_triangle_flat_top() {
    let mut canvas = Canvas::new(7, 4).unwrap();
    canvas.fill_triangle(0, 0, 6, 0, 3, 3, RED);
    assert_eq!(canvas.to_ascii(), "XXXXXXX\n XXXXX \n  XXX  \n   X   ");
}

#[test]
fn test_fill_triangle_contains_vertices() {
    let vertices = [(1, 2), (10, 5), (4, 11)];
    let mut canvas = Canvas::new(12, 12).unwrap();
    canvas.fill_triangle(1, 2, 10, 5, 4, 11, RED);

    let filled = lit(&canvas);
    for vertex in vertices {
        assert!(filled.contains(&vertex), "vertex {:?} not filled", vertex);
    }
    // One span per scanline from the top vertex to the bottom one
    let rows: Vec<i32> = filled.iter().map(|(_, y)| *y).collect();
    assert_eq!(rows.first(), Some(&2));
    assert_eq!(rows.last(), Some(&11));
}

// =============================================================================
// Bitmaps
// =============================================================================

#[test]
fn test_bitmap_sprite() {
    // 8x4 arrow, one byte per row
    let sprite = [0b0001_1000, 0b0011_1100, 0b0111_1110, 0b0001_1000];
    let mut canvas = Canvas::new(8, 4).unwrap();
    canvas.draw_bitmap(0, 0, &sprite, 8, 4, RED);
    assert_eq!(
        canvas.to_ascii(),
        "   XX   \n  XXXX  \n XXXXXX \n   XX   "
    );
}

#[test]
fn test_bitmap_leaves_clear_bits_untouched() {
    let blue = Rgba::rgb(0, 0, 255);
    let mut canvas = Canvas::new(8, 1).unwrap();
    canvas.fill_screen(Some(blue));
    canvas.draw_bitmap(0, 0, &[0b1000_0001], 8, 1, RED);

    assert_eq!(canvas.matrix().get(0, 0), Some(Pixel::On(RED)));
    assert_eq!(canvas.matrix().get(3, 0), Some(Pixel::On(blue)));
    assert_eq!(canvas.matrix().get(7, 0), Some(Pixel::On(RED)));
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_matrix_serializes_row_major() {
    let mut canvas = Canvas::new(2, 2).unwrap();
    canvas.draw_pixel(1, 0, RED);

    let json = serde_json::to_value(canvas.matrix()).unwrap();
    assert_eq!(json["width"], 2);
    assert_eq!(json["height"], 2);
    assert_eq!(json["pixels"][0], serde_json::json!({ "on": false }));
    assert_eq!(json["pixels"][1]["on"], true);
    assert_eq!(json["pixels"][1]["color"]["r"], 255);
}
