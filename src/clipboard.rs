//! Clipboard integration.

use crate::data::Professor;
use crate::error::Result;
use crate::list::view::rating_line;
use arboard::Clipboard;

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Copy a professor's details to clipboard.
pub fn copy_professor(professor: &Professor) -> Result<()> {
    copy_to_clipboard(&professor_info(professor))
}

/// Plain-text block describing a professor.
pub fn professor_info(professor: &Professor) -> String {
    let mut text = format!("Professor: {}\n", professor.name);
    text.push_str(&format!("Class: {}\n", professor.class_name));
    text.push_str(&format!("Department: {}\n", professor.department));
    text.push_str(&format!(
        "Average Grade: {}\n",
        professor.avg_grade.as_deref().unwrap_or("N/A")
    ));
    if let Some(rating) = rating_line(professor) {
        text.push_str(&rating);
        text.push('\n');
    }
    text
}
