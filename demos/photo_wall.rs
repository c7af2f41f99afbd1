//! Prints a photo wall in portrait and landscape.
//!
//! Run with `cargo run --example photo_wall`. Set `GRIDVIEW_LOG` to a file
//! path to capture layout logs.

use gridview::testing::{TestCanvas, index_label};
use gridview::{GridView, Identifiable, LayoutContext, log};

#[derive(Identifiable)]
struct Photo {
    id: u32,
    lines: u32,
}

const STYLE: &str = r#"
    columns: 3;
    columns-landscape: 5;
    width-margin: 0;
    spacing: 1 2;
    padding: 1 2;
    scroll-indicators: true;
"#;

fn main() -> gridview::Result<()> {
    if let Ok(path) = std::env::var("GRIDVIEW_LOG") {
        gridview::init_logger(path)?;
    }

    let photos = (0..11).map(|id| Photo {
        id,
        lines: 2 + id % 3,
    });
    let grid = GridView::new(photos, 3, |photo: &Photo| photo.lines).with_style(STYLE)?;
    let measure = |lines: &u32, _width: f32| *lines as f32;

    for (label, ctx) in [
        ("portrait", LayoutContext::portrait(40.0, 16.0)),
        ("landscape", LayoutContext::landscape(70.0, 12.0)),
    ] {
        let mut arrangement = grid.arrange(&ctx, &measure);
        log::info!("{label}: {} rows", arrangement.row_count());

        let (width, height) = (ctx.viewport.width as usize, ctx.viewport.height as usize);
        let mut canvas = TestCanvas::new(width, height);
        canvas.paint_visible(&arrangement, |p| index_label(p.index));
        println!("== {label} (top)\n{}\n", canvas.to_text_trimmed());

        let last = grid.items().last().and_then(|photo| grid.index_of(&photo.id()));
        if let Some(index) = last {
            if arrangement.scroll_to_item(index) {
                let mut canvas = TestCanvas::new(width, height);
                canvas.paint_visible(&arrangement, |p| index_label(p.index));
                println!("== {label} (scrolled to #{index})\n{}\n", canvas.to_text_trimmed());
            }
        }
    }

    Ok(())
}
