//! Plain-text share messages handed to the platform share sheet.
//!
//! Share-sheet failures belong to the caller; these helpers only build text.

use crate::model::place::Coordinates;
use crate::notes::NatureNote;

/// `title`, `address`, then coordinates rounded to four decimals.
pub fn place_share_message(title: &str, address: &str, coords: Coordinates) -> String {
    format!("{title}\n{address}\n{:.4}, {:.4}", coords.lat, coords.lng)
}

/// Note title, a blank line, then the note body.
pub fn note_share_message(note: &NatureNote) -> String {
    format!("{}\n\n{}", note.title, note.body)
}

#[cfg(test)]
mod tests {
    use super::{note_share_message, place_share_message};
    use crate::model::place::Coordinates;
    use crate::notes::find_note;

    #[test]
    fn place_message_pads_coordinates_to_four_decimals() {
        let message = place_share_message(
            "Table Rock Welcome Centre",
            "6650 Niagara Parkway",
            Coordinates::new(43.079, -79.074),
        );
        assert_eq!(
            message,
            "Table Rock Welcome Centre\n6650 Niagara Parkway\n43.0790, -79.0740"
        );
    }

    #[test]
    fn note_message_separates_title_and_body() {
        let note = find_note("n1").unwrap();
        let message = note_share_message(note);
        assert!(message.starts_with("Niagara Falls moves slowly upstream\n\n"));
        assert!(message.ends_with("each year."));
    }
}
