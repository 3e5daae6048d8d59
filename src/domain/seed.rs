//! Sample data inserted by the first-ever bootstrap.

/// Author half of a seed pair.
#[derive(Debug, Clone, Copy)]
pub struct SeedAuthor {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub middle_name: Option<&'static str>,
}

/// One book together with the author it is inserted under.
#[derive(Debug, Clone, Copy)]
pub struct SeedRecord {
    pub title: &'static str,
    pub author: SeedAuthor,
}

pub const DEFAULT_SEED: &[SeedRecord] = &[
    SeedRecord {
        title: "A Byte of Python",
        author: SeedAuthor {
            first_name: "Swaroop C. H.",
            last_name: "C",
            middle_name: Some("H"),
        },
    },
    SeedRecord {
        title: "Moby-Dick; or, The Whale",
        author: SeedAuthor {
            first_name: "Herman",
            last_name: "Melville",
            middle_name: None,
        },
    },
    SeedRecord {
        title: "War and Peace",
        author: SeedAuthor {
            first_name: "Leo",
            last_name: "Tolstoy",
            middle_name: None,
        },
    },
];
