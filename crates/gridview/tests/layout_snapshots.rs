//! Snapshot tests for arranged grids.
//!
//! One character per length unit; each cell is filled with its item label.

use gridview::testing::{TestCanvas, index_label};
use gridview::{GridView, LayoutContext};

fn ctx() -> LayoutContext {
    LayoutContext::portrait(40.0, 80.0)
}

/// A 26-unit wide grid: three 8-unit columns with 1-unit gaps.
fn compact(n: u32) -> GridView<u32, u32, impl Fn(&u32) -> u32> {
    GridView::new(0..n, 3, |n: &u32| *n)
        .with_width(26.0)
        .with_vertical_spacing(1.0)
        .with_horizontal_spacing(1.0)
        .with_vertical_padding(0.0)
        .with_horizontal_padding(0.0)
        .with_scrollable(false)
}

/// Items 0, 1, 2 are 1, 3 and 2 units tall.
fn staggered(n: &u32, _width: f32) -> f32 {
    [1.0, 3.0, 2.0][*n as usize % 3]
}

#[test]
fn trailing_row_stays_left_aligned() {
    let arrangement = compact(4).arrange(&ctx(), &|_: &u32, _: f32| 2.0_f32);
    let mut canvas = TestCanvas::fit(&arrangement);
    canvas.paint_arrangement(&arrangement, |p| index_label(p.index));

    insta::assert_snapshot!(canvas.to_text_trimmed(), @r"
    00000000 11111111 22222222
    00000000 11111111 22222222

    33333333
    33333333
    ");
}

#[test]
fn stretched_cells_fill_row_height() {
    let arrangement = compact(3).arrange(&ctx(), &staggered);
    let mut canvas = TestCanvas::fit(&arrangement);
    canvas.paint_arrangement(&arrangement, |p| index_label(p.index));

    insta::assert_snapshot!(canvas.to_text_trimmed(), @r"
    00000000 11111111 22222222
    00000000 11111111 22222222
    00000000 11111111 22222222
    ");
}

#[test]
fn auto_expanded_cells_keep_natural_height() {
    let arrangement = compact(3).with_auto_expand(true).arrange(&ctx(), &staggered);
    let mut canvas = TestCanvas::fit(&arrangement);
    canvas.paint_arrangement(&arrangement, |p| index_label(p.index));

    insta::assert_snapshot!(canvas.to_text_trimmed(), @r"
    00000000 11111111 22222222
             11111111 22222222
             11111111
    ");
}
