use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteAction {
    Add,
    Remove,
}

impl FavoriteAction {
    /// Parse the wire form. Anything but "add"/"remove" is rejected by the
    /// handler as a validation failure.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "add" => Some(FavoriteAction::Add),
            "remove" => Some(FavoriteAction::Remove),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteRequest {
    pub restaurant_id: i64,
    pub action: String,
}
