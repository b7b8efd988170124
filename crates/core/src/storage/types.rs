use crate::sauna::Post;

/// Optional equality filters for post listings. Absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub sauna_id: Option<String>,
    pub user_id: Option<String>,
}

impl PostFilter {
    pub fn for_sauna(sauna_id: impl Into<String>) -> Self {
        Self {
            sauna_id: Some(sauna_id.into()),
            user_id: None,
        }
    }

    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            sauna_id: None,
            user_id: Some(user_id.into()),
        }
    }

    /// Returns true if the post satisfies every present filter.
    pub fn matches(&self, post: &Post) -> bool {
        self.sauna_id
            .as_deref()
            .is_none_or(|sauna_id| post.sauna_id == sauna_id)
            && self
                .user_id
                .as_deref()
                .is_none_or(|user_id| post.user_id == user_id)
    }
}
