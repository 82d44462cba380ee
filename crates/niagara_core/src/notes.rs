//! Nature notes: short trivia cards about the falls.

/// One trivia card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NatureNote {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

static NATURE_NOTES: &[NatureNote] = &[
    NatureNote {
        id: "n1",
        title: "Niagara Falls moves slowly upstream",
        body: "Erosion causes the falls to retreat about 30 centimeters each year.",
    },
    NatureNote {
        id: "n2",
        title: "More than half the water flows over Horseshoe Falls",
        body: "This section carries the greatest volume and power of the entire system.",
    },
    NatureNote {
        id: "n3",
        title: "The mist creates its own microclimate",
        body: "Constant moisture supports unique plants and cooler air near the river.",
    },
    NatureNote {
        id: "n4",
        title: "Niagara Falls never completely freeze",
        body: "Even in winter, the water keeps moving due to its immense volume.",
    },
    NatureNote {
        id: "n5",
        title: "The river drops over 50 meters in height",
        body: "This rapid change creates the sound and mist felt far beyond the falls.",
    },
    NatureNote {
        id: "n6",
        title: "Mist can travel several kilometers",
        body: "On windy days, fine water particles reach surrounding parks and streets.",
    },
    NatureNote {
        id: "n7",
        title: "Niagara Gorge reveals ancient rock layers",
        body: "Some formations exposed here are more than 400 million years old.",
    },
    NatureNote {
        id: "n8",
        title: "Ice bridges once formed naturally",
        body: "Before regulation, thick ice sometimes spanned the river above the falls.",
    },
    NatureNote {
        id: "n9",
        title: "Water flow is partially controlled at night",
        body: "Diversions help generate hydroelectric power while preserving the falls.",
    },
    NatureNote {
        id: "n10",
        title: "Rainbows appear most often in the afternoon",
        body: "The sun\u{2019}s position and persistent mist create ideal conditions for refraction.",
    },
];

pub fn nature_notes() -> &'static [NatureNote] {
    NATURE_NOTES
}

pub fn find_note(id: &str) -> Option<&'static NatureNote> {
    NATURE_NOTES.iter().find(|note| note.id == id)
}
