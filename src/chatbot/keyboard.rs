//! Inline keyboard layout.

use std::fmt;

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardError {
    /// Layout must be 1 (one button per row) or 2 (two per row).
    InvalidLayout(u8),
    LengthMismatch { labels: usize, payloads: usize },
}

impl fmt::Display for KeyboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLayout(layout) => write!(f, "wrong layout: {layout}"),
            Self::LengthMismatch { labels, payloads } => {
                write!(f, "different text and data length ({labels} labels, {payloads} payloads)")
            }
        }
    }
}

impl std::error::Error for KeyboardError {}

/// Build an inline keyboard of callback buttons.
///
/// With layout 2 consecutive buttons are paired; an odd last button gets a row
/// of its own.
pub fn make_buttons(
    labels: &[&str],
    payloads: &[&str],
    layout: u8,
) -> Result<InlineKeyboardMarkup, KeyboardError> {
    let per_row = match layout {
        1 | 2 => layout as usize,
        other => return Err(KeyboardError::InvalidLayout(other)),
    };
    if labels.len() != payloads.len() {
        return Err(KeyboardError::LengthMismatch {
            labels: labels.len(),
            payloads: payloads.len(),
        });
    }

    let buttons: Vec<InlineKeyboardButton> = labels
        .iter()
        .zip(payloads)
        .map(|(label, data)| InlineKeyboardButton::callback(*label, *data))
        .collect();

    let rows: Vec<Vec<InlineKeyboardButton>> =
        buttons.chunks(per_row).map(|row| row.to_vec()).collect();

    Ok(InlineKeyboardMarkup::new(rows))
}
