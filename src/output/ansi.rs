use crate::frame::Frame;

// Terminal color constants
pub const COLOR_RESET: &str = "\x1B[0m";

/// Render a frame as lines of 24-bit colored glyphs for the terminal
pub fn frame_to_ansi(frame: &Frame) -> String {
    frame_to_ansi_lines(frame).join("\n")
}

/// One string per frame row, reset at the end of each line
pub fn frame_to_ansi_lines(frame: &Frame) -> Vec<String> {
    let mut lines = Vec::with_capacity(frame.rows.len());

    for row in &frame.rows {
        let mut line = String::new();
        for cell in row {
            let (r, g, b) = cell.rgb;
            // ANSI escape code for 24-bit foreground color
            line.push_str(&format!("\x1B[38;2;{r};{g};{b}m{}", cell.ch));
        }
        line.push_str(COLOR_RESET);
        lines.push(line);
    }

    lines
}
