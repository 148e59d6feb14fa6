//! Display records handed to the selection tree.

/// One selectable row as the tree displays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafRecord {
    /// Ordinal label shown to the user ("1", "2", "PV1", ...).
    pub key: String,

    /// Display title.
    pub title: String,

    /// Free-text annotation such as "会员". May be empty.
    pub badge: String,

    /// Duration in seconds, if known.
    pub duration: Option<u64>,
}

impl LeafRecord {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            badge: String::new(),
            duration: None,
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = badge.into();
        self
    }

    pub fn with_duration(mut self, seconds: u64) -> Self {
        self.duration = Some(seconds);
        self
    }
}

/// A named bucket of leaf records, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRecord {
    pub key: String,
    pub leaves: Vec<LeafRecord>,

    /// Whether the group row should show the shared top-level title.
    pub multi_part: bool,
}

impl GroupRecord {
    pub fn new(key: impl Into<String>, leaves: Vec<LeafRecord>) -> Self {
        Self {
            key: key.into(),
            leaves,
            multi_part: false,
        }
    }

    pub fn multi_part(mut self, multi_part: bool) -> Self {
        self.multi_part = multi_part;
        self
    }
}
