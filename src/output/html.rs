use crate::frame::Frame;

/// Render a frame as an HTML fragment, one colored span per cell
///
/// Ramp glyphs never include `<`, `>` or `&`, so no escaping is needed.
pub fn frame_to_html(frame: &Frame) -> String {
    let mut lines = Vec::with_capacity(frame.rows.len());

    for row in &frame.rows {
        let mut line = String::new();
        for cell in row {
            let (r, g, b) = cell.rgb;
            line.push_str(&format!(
                "<span style=\"color:rgb({r},{g},{b})\">{}</span>",
                cell.ch
            ));
        }
        lines.push(line);
    }

    lines.join("<br>")
}

/// Wrap the HTML fragment in a styled `<pre>` block for standalone viewing
pub fn frame_to_document(frame: &Frame) -> String {
    format!(
        "<pre style=\"font-family: monospace; font-size: 7px; line-height: 1; \
         background: #000; padding: 10px; overflow: auto;\">{}</pre>",
        frame_to_html(frame)
    )
}
