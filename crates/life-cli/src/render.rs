//! ASCII frame rendering.

use life_core::RenderConfig;
use life_world::{Outcome, Snapshot};

/// Render one generation as a framed block of text, one line per grid row.
pub fn render_frame(snapshot: &Snapshot, config: &RenderConfig) -> String {
    let width = snapshot.columns() as usize;
    let border = format!("{}+{}+\n", config.indent, "-".repeat(width));

    let line_len = config.indent.len() + width + 3;
    let mut frame = String::with_capacity(line_len * (snapshot.rows() as usize + 2));
    frame.push_str(&border);

    for row in snapshot.row_slices() {
        frame.push_str(&config.indent);
        frame.push('|');
        frame.extend(row.iter().map(|&alive| {
            if alive {
                config.alive_glyph
            } else {
                config.dead_glyph
            }
        }));
        frame.push_str("|\n");
    }

    frame.push_str(&border);
    frame
}

/// Closing message for a finished run
pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Extinct { generation } => {
            format!("All life died after {} generations", generation)
        }
        Outcome::Survived { generations } => {
            format!("Life is still going after {} generations", generations)
        }
    }
}
