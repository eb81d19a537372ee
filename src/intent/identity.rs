use std::fmt;

/// Identifier of one tooltip instance, also used as its element id
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TooltipId(String);

impl TooltipId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id generated for the `n`th tooltip of a coordinator
    pub fn generated(n: u64) -> Self {
        Self(format!("tooltip-{}", n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TooltipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TooltipId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TooltipId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
