//! Server-rendered canvas view.
//!
//! Builds the home page as a string: an SVG drawing of the path
//! segments, a form for contributing the next step, the
//! recent-submissions list, and the remaining-capacity counter. Kept
//! free of handler and storage concerns so it can be exercised directly
//! in tests.

use std::fmt::Write;

use gridpath_core::canvas::{PathLayout, Segment, Stroke, GRID_UNIT};
use gridpath_core::steps::{MAX_HORIZONTAL_STEPS, MAX_VERTICAL_STEPS};

/// Pixel dimensions of the drawing surface.
const CANVAS_WIDTH: i32 = 44 * GRID_UNIT;
const CANVAS_HEIGHT: i32 = 30 * GRID_UNIT;

/// Fill colors for the cyclic color indexes 1..=4.
const PALETTE: [&str; 4] = ["#e63946", "#457b9d", "#2a9d8f", "#f4a261"];

/// Render the full home page for a laid-out path.
pub fn canvas_page<S: Stroke>(layout: &PathLayout<S>) -> String {
    let mut page = String::with_capacity(4096);

    page.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>gridpath</title>\n</head>\n<body>\n<h1>gridpath</h1>\n",
    );
    let _ = writeln!(
        page,
        "<p>{} submissions remaining before the canvas resets.</p>",
        layout.remaining
    );

    page.push_str(&render_svg(&layout.segments));
    page.push_str(&render_form());

    let _ = writeln!(page, "<h2>Recent submissions ({})</h2>", layout.recent.len());
    page.push_str("<ul>\n");
    for stroke in &layout.recent {
        let _ = writeln!(
            page,
            "<li>#{}: left {}, up {}, right {}, down {}</li>",
            stroke.source_id(),
            stroke.left(),
            stroke.up(),
            stroke.right(),
            stroke.down(),
        );
    }
    page.push_str("</ul>\n<p><a href=\"/reset\">Clear the canvas</a></p>\n</body>\n</html>\n");
    page
}

/// Draw each segment as an SVG rectangle at its absolute pixel
/// coordinates.
fn render_svg(segments: &[Segment]) -> String {
    let mut svg = String::with_capacity(128 + segments.len() * 96);
    let _ = writeln!(
        svg,
        "<svg width=\"{CANVAS_WIDTH}\" height=\"{CANVAS_HEIGHT}\" \
         viewBox=\"0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}\">"
    );
    for segment in segments {
        let _ = writeln!(
            svg,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" \
             data-source=\"{}\"/>",
            segment.left,
            segment.top,
            segment.width,
            segment.height,
            fill_for(segment.color),
            segment.source_id,
        );
    }
    svg.push_str("</svg>\n");
    svg
}

/// Step-entry form submitting to `/create`.
fn render_form() -> String {
    let mut form = String::new();
    form.push_str("<form action=\"/create\" method=\"get\">\n");
    for (name, max) in [
        ("left", MAX_HORIZONTAL_STEPS),
        ("up", MAX_VERTICAL_STEPS),
        ("right", MAX_HORIZONTAL_STEPS),
        ("down", MAX_VERTICAL_STEPS),
    ] {
        let _ = writeln!(
            form,
            "<label>{name} <input type=\"number\" name=\"{name}\" \
             min=\"0\" max=\"{max}\" value=\"0\"></label>"
        );
    }
    form.push_str("<button type=\"submit\">Draw it</button>\n</form>\n");
    form
}

fn fill_for(color: u8) -> &'static str {
    PALETTE[(color.saturating_sub(1) as usize) % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::canvas;
    use gridpath_core::types::DbId;

    #[derive(Debug, Clone)]
    struct TestStroke {
        id: DbId,
        right: i32,
    }

    impl Stroke for TestStroke {
        fn source_id(&self) -> DbId {
            self.id
        }
        fn left(&self) -> i32 {
            0
        }
        fn up(&self) -> i32 {
            0
        }
        fn right(&self) -> i32 {
            self.right
        }
        fn down(&self) -> i32 {
            0
        }
    }

    #[test]
    fn empty_layout_renders_no_rects() {
        let layout = canvas::layout::<TestStroke>(&[]);
        let page = canvas_page(&layout);
        assert!(!page.contains("<rect"));
        assert!(page.contains("200 submissions remaining"));
    }

    #[test]
    fn segment_coordinates_appear_in_svg() {
        let layout = canvas::layout(&[TestStroke { id: 1, right: 3 }]);
        let page = canvas_page(&layout);
        // Start cursor (22, 15) in grid units, 22 px per unit.
        assert!(page.contains("x=\"484\" y=\"330\" width=\"66\" height=\"2\""));
        assert!(page.contains("data-source=\"1\""));
    }

    #[test]
    fn recent_list_shows_newest_first() {
        let layout = canvas::layout(&[
            TestStroke { id: 1, right: 1 },
            TestStroke { id: 2, right: 1 },
        ]);
        let page = canvas_page(&layout);
        let first = page.find("<li>#2").unwrap();
        let second = page.find("<li>#1").unwrap();
        assert!(first < second);
    }

    #[test]
    fn color_indexes_map_into_palette() {
        assert_eq!(fill_for(1), PALETTE[0]);
        assert_eq!(fill_for(4), PALETTE[3]);
    }
}
