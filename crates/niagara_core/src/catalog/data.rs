use super::{Category, Place};
use crate::model::place::Coordinates;

pub static CATEGORIES: &[Category] = &[
    Category {
        key: "iconic",
        title: "Iconic Viewpoints",
    },
    Category {
        key: "quiet",
        title: "Quiet Nature Views",
    },
    Category {
        key: "heritage",
        title: "Heritage & Scenic Spots",
    },
];

pub static PLACES: &[Place] = &[
    Place {
        id: "p1",
        category: "iconic",
        title: "Horseshoe Falls Overlook",
        description: "The most powerful and expansive view of Niagara Falls, where the water curves inward and disappears into mist.",
        summary: "The most powerful, sweeping view into the Horseshoe curve.",
        address: "Niagara Parkway, Niagara Falls, ON, Canada",
        coords: Coordinates::new(43.0799, -79.0747),
    },
    Place {
        id: "p2",
        category: "iconic",
        title: "Skylon Tower Observation Deck",
        description: "A higher perspective offering a full panoramic view of the falls and the surrounding landscape.",
        summary: "A high vantage point with full panoramic city-and-falls views.",
        address: "5200 Robinson St, Niagara Falls, ON L2G 2A3, Canada",
        coords: Coordinates::new(43.0822, -79.0789),
    },
    Place {
        id: "p3",
        category: "iconic",
        title: "Table Rock Welcome Centre",
        description: "A close vantage point where the sound and scale of the falls feel immediate and overwhelming.",
        summary: "Close enough to feel the scale, sound, and mist.",
        address: "6650 Niagara Parkway, Niagara Falls, ON L2E 3E8, Canada",
        coords: Coordinates::new(43.079, -79.074),
    },
    Place {
        id: "p4",
        category: "iconic",
        title: "Niagara Falls State Park Viewpoint",
        description: "A classic public viewpoint offering balanced views of both American and Horseshoe Falls.",
        summary: "A classic viewpoint across American and Horseshoe Falls.",
        address: "332 Prospect St, Niagara Falls, NY 14303, USA",
        coords: Coordinates::new(43.0826, -79.0703),
    },
    Place {
        id: "p5",
        category: "quiet",
        title: "Dufferin Islands",
        description: "A peaceful chain of small islands with calm water, bridges, and shaded walking paths.",
        summary: "Peaceful islands with bridges and shaded paths.",
        address: "Niagara Parkway, Niagara Falls, ON, Canada",
        coords: Coordinates::new(43.0865, -79.0674),
    },
    Place {
        id: "p6",
        category: "quiet",
        title: "Whirlpool Aero Car Lookout",
        description: "A dramatic view into the Niagara Whirlpool, where the river twists far below the cliffs.",
        summary: "Dramatic views into the Niagara Whirlpool below the cliffs.",
        address: "3850 Niagara Parkway, Niagara Falls, ON L2E 6S5, Canada",
        coords: Coordinates::new(43.1205, -79.0671),
    },
    Place {
        id: "p7",
        category: "quiet",
        title: "Niagara Glen Lookout",
        description: "A rugged natural overlook above ancient rock formations and fast-moving river currents.",
        summary: "A rugged overlook above ancient rock formations and rapids.",
        address: "Niagara Glen Nature Reserve, Niagara Falls, ON, Canada",
        coords: Coordinates::new(43.1316, -79.0663),
    },
    Place {
        id: "p8",
        category: "quiet",
        title: "Rapids View Area",
        description: "A quiet place to observe the river before it reaches the falls, fast, controlled, and powerful.",
        summary: "Quiet spot to watch fast water before the falls.",
        address: "Niagara Parkway, Niagara Falls, ON, Canada",
        coords: Coordinates::new(43.1182, -79.0654),
    },
    Place {
        id: "p9",
        category: "heritage",
        title: "Old Scow Viewpoint",
        description: "A historic river scene featuring the remains of a stranded barge lodged near the rapids.",
        summary: "Historic view of the stranded scow near the rapids.",
        address: "Niagara Parkway, Niagara Falls, ON, Canada",
        coords: Coordinates::new(43.0869, -79.0625),
    },
    Place {
        id: "p10",
        category: "heritage",
        title: "Rainbow Bridge Viewpoint",
        description: "A scenic crossing point offering wide river views between Canada and the United States.",
        summary: "Bridge vantage point with wide river views and the border.",
        address: "Rainbow Bridge, Niagara Falls, ON / NY",
        coords: Coordinates::new(43.0893, -79.0714),
    },
    Place {
        id: "p11",
        category: "heritage",
        title: "Queen Victoria Park",
        description: "A historic landscaped park with classic walking paths and framed fall viewpoints.",
        summary: "Historic landscaped park framing classic falls scenes.",
        address: "6345 Niagara Parkway, Niagara Falls, ON, Canada",
        coords: Coordinates::new(43.0808, -79.0759),
    },
    Place {
        id: "p12",
        category: "heritage",
        title: "Oakes Garden Theatre",
        description: "A sunken classical garden overlooking the river, blending architecture and nature.",
        summary: "A sunken garden-amphitheatre with river outlook.",
        address: "Niagara Parkway, Niagara Falls, ON L2E 3E8, Canada",
        coords: Coordinates::new(43.0906, -79.0735),
    },
];
