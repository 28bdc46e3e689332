pub const ACTIONS: &[&str] = &[
    "SEED/POTENTIAL",
    "RELEASING",
    "REORGANIZING",
    "REVALUING",
    "UNDERSTANDING",
    "SHARING",
    "REALIZING",
    "IMPROVING",
    "EXPRESSING",
    "DECIDING",
    "ORGANIZING",
    "FOCUSING",
];

pub const GENDERS: &[&str] = &[
    "Feminine",
    "Masculine",
    "Feminine",
    "Masculine",
    "Feminine",
    "Masculine",
    "Feminine",
    "Masculine",
    "Feminine",
    "Masculine",
    "Feminine",
    "Masculine",
];

pub const ELEMENTS: &[&str] = &[
    "MUTABLE WATER",
    "FIXED AIR",
    "CARDINAL EARTH",
    "MUTABLE FIRE",
    "FIXED WATER",
    "CARDINAL AIR",
    "MUTABLE EARTH",
    "FIXED FIRE",
    "CARDINAL WATER",
    "MUTABLE AIR",
    "FIXED EARTH",
    "CARDINAL FIRE",
];

// three per sign, "???" marks readings still missing
pub const QUALITIES: &[&str] = &[
    "vicissitudes",
    "self-sacrifice",
    "verity",
    "repression",
    "inspiration",
    "originality",
    "idealism",
    "martyrdom?",
    "organization",
    "illumination",
    "exploration",
    "devotion",
    "???",
    "responsibility",
    "resourcefulness",
    "expiation???",
    "independence",
    "policy",
    "???",
    "experience",
    "achievement",
    "ambition",
    "reformation",
    "rulership",
    "research",
    "revelation",
    "???",
    "reason",
    "fidelity",
    "intuition",
    "mastership",
    "struggle",
    "determination",
    "???",
    "???",
    "activity",
];

// U+FE0E forces the text presentation of Sagittarius
pub const ZODIAC_SYMBOLS: &[&str] = &[
    "♓", "♒", "♑", "♐\u{FE0E}", "♏", "♎", "♍", "♌", "♋", "♊", "♉", "♈",
];

pub const ZODIAC_THEMES: &[&str] = &[
    "Endings",
    "Goals and Ideals",
    "Mount Meru",
    "Higher Mind",
    "Death and Rebirth",
    "Relationships",
    "Health and Service",
    "Creative Expression",
    "Foundations",
    "Lower Mind",
    "Materiality",
    "New Beginnings",
];

/// Aspect formed with the first slot, one entry per 30°.
pub const ASPECTS: &[&str] = &[
    "CONJUNCTION",
    "SEMI-SEXTILE",
    "SEXTILE",
    "SQUARE",
    "TRINE",
    "QUINCUNX",
    "OPPOSITION",
    "QUINCUNX",
    "TRINE",
    "SQUARE",
    "SEXTILE",
    "SEMI-SEXTILE",
];

/// Quadrant names on the diagonals, clockwise from the top; the cardinal slots stay empty.
/// PHYSICAL sits in the upper-left.
pub const QUADRANTS: &[&str] = &[
    "",
    "VITAL",
    "",
    "MENTAL",
    "",
    "SPIRITUAL",
    "",
    "PHYSICAL",
];

pub const TITLE: &str = "The Gnostic Circle";

/// Subtitle lines keyed by their row in the title grid.
pub const SUBTITLES: &[(usize, &str)] = &[
    (2, "THE ARCHETYPAL FORMS"),
    (3, "AND"),
    (4, "RHYTHMS OF EXISTENCE"),
    (8, "Map of Human"),
    (9, "Cosmology"),
];
