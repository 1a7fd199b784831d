/// Offset pagination for collection endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u32,
    pub skip: u32,
}

impl Page {
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Build a page. A `limit` of zero selects nothing.
    pub fn new(limit: Option<u32>, skip: Option<u32>) -> Self {
        Self {
            limit: limit.unwrap_or(Self::DEFAULT_LIMIT),
            skip: skip.unwrap_or(0),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}
