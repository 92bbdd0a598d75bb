use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    let popup_x = frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = frame_area.y + (frame_area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Place a popup directly under `anchor`, clipped to `bounds`
///
/// Returns None when there is no room below the anchor.
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Option<Rect> {
    let popup_y = anchor.y + anchor.height;
    let available = (bounds.y + bounds.height).saturating_sub(popup_y);
    if available == 0 {
        return None;
    }

    Some(Rect {
        x: anchor.x,
        y: popup_y,
        width: width.min(anchor.width),
        height: height.min(available),
    })
}

/// Top-right corner placement for toasts
pub fn top_right(frame_area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let width = width.min(frame_area.width.saturating_sub(margin));
    let height = height.min(frame_area.height);

    Rect {
        x: frame_area.x + frame_area.width.saturating_sub(width + margin),
        y: frame_area.y + margin.min(frame_area.height.saturating_sub(height)),
        width,
        height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
