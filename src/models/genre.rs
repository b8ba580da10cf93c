use serde::{Deserialize, Serialize};

/// A genre as listed by the metadata service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// Finds a genre by name, ignoring case. The match is exact otherwise:
/// no trimming, no prefix matching.
pub fn find_by_name<'a>(genres: &'a [Genre], name: &str) -> Option<&'a Genre> {
    let wanted = name.to_lowercase();
    genres.iter().find(|g| g.name.to_lowercase() == wanted)
}
