//! Path layout engine.
//!
//! Converts the ordered sequence of stored submissions into absolute
//! pixel-coordinate line segments for the canvas view, plus the derived
//! display values (recent list, remaining capacity). Pure computation:
//! inputs are pre-validated and nothing in here can fail.

use serde::Serialize;

use crate::types::DbId;

/// Size of a grid unit in pixels, both axes.
pub const GRID_UNIT: i32 = 22;

/// Starting cursor x position, in grid units.
pub const START_X: i32 = 22;

/// Starting cursor y position, in grid units.
pub const START_Y: i32 = 15;

/// Number of colors the path cycles through.
pub const COLOR_COUNT: u8 = 4;

/// Stored submissions allowed before the canvas auto-resets.
pub const CAPACITY: i64 = 200;

/// Maximum number of entries in the recent-submissions list.
pub const RECENT_LIMIT: usize = 121;

/// Pixel thickness of a stroke.
const STROKE_THICKNESS: i32 = 2;

/// Read access to one submission's identity and directional step counts.
///
/// Implemented by the persisted submission row; keeps the engine free of
/// any storage dependency.
pub trait Stroke {
    fn source_id(&self) -> DbId;
    fn left(&self) -> i32;
    fn up(&self) -> i32;
    fn right(&self) -> i32;
    fn down(&self) -> i32;
}

/// One rectangle of the rendered path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    pub color: u8,
    pub source_id: DbId,
}

/// Everything the canvas view needs: drawable segments plus derived
/// display values.
#[derive(Debug, Clone)]
pub struct PathLayout<S> {
    /// Segments in drawing order.
    pub segments: Vec<Segment>,
    /// Input sequence reversed (newest first), at most [`RECENT_LIMIT`]
    /// entries.
    pub recent: Vec<S>,
    /// `CAPACITY - input length`; goes negative once the store
    /// overshoots and is passed through unclamped.
    pub remaining: i64,
}

/// Running state threaded through the fold: cursor position in grid
/// units and the current color index.
struct Cursor {
    x: i32,
    y: i32,
    color: u8,
}

/// Lay out the whole path.
///
/// The cursor runs across the entire sequence: each submission's
/// segments continue from where the previous submission left off. The
/// color advances once per submission, however many segments it drew.
pub fn layout<S: Stroke + Clone>(submissions: &[S]) -> PathLayout<S> {
    let mut segments = Vec::new();
    let mut cursor = Cursor {
        x: START_X,
        y: START_Y,
        color: 1,
    };

    for submission in submissions {
        emit_segments(submission, &mut cursor, &mut segments);
        cursor.color = if cursor.color >= COLOR_COUNT {
            1
        } else {
            cursor.color + 1
        };
    }

    let recent = submissions
        .iter()
        .rev()
        .take(RECENT_LIMIT)
        .cloned()
        .collect();

    PathLayout {
        segments,
        recent,
        remaining: CAPACITY - submissions.len() as i64,
    }
}

/// Emit up to four segments for one submission, in the fixed
/// left, up, right, down order.
///
/// Left and up move the cursor before drawing; right and down draw at
/// the current position and move afterwards. The asymmetry keeps each
/// stroke's trailing edge touching the next stroke's origin.
fn emit_segments<S: Stroke>(submission: &S, cursor: &mut Cursor, segments: &mut Vec<Segment>) {
    let id = submission.source_id();

    if submission.left() > 0 {
        cursor.x -= submission.left();
        segments.push(Segment {
            left: cursor.x * GRID_UNIT,
            top: cursor.y * GRID_UNIT,
            width: submission.left() * GRID_UNIT,
            height: STROKE_THICKNESS,
            color: cursor.color,
            source_id: id,
        });
    }
    if submission.up() > 0 {
        cursor.y -= submission.up();
        segments.push(Segment {
            left: cursor.x * GRID_UNIT,
            top: cursor.y * GRID_UNIT,
            width: STROKE_THICKNESS,
            height: submission.up() * GRID_UNIT,
            color: cursor.color,
            source_id: id,
        });
    }
    if submission.right() > 0 {
        segments.push(Segment {
            left: cursor.x * GRID_UNIT,
            top: cursor.y * GRID_UNIT,
            width: submission.right() * GRID_UNIT,
            height: STROKE_THICKNESS,
            color: cursor.color,
            source_id: id,
        });
        cursor.x += submission.right();
    }
    if submission.down() > 0 {
        segments.push(Segment {
            left: cursor.x * GRID_UNIT,
            top: cursor.y * GRID_UNIT,
            width: STROKE_THICKNESS,
            height: submission.down() * GRID_UNIT,
            color: cursor.color,
            source_id: id,
        });
        cursor.y += submission.down();
    }
}
