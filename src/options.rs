use serde::{Deserialize, Serialize};

/// Output settings for [`Document`](crate::serialize::Document).
///
/// Field names are not configurable: a node field called `type` is always
/// written as `type_` so it cannot shadow the tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// `type` tag of the object wrapping the root.
    pub program_tag: String,
    /// Also emit `line`/`column` for nodes the parser positioned.
    pub line_columns: bool,
    /// Emit the bound token literal as `text`.
    pub token_text: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            program_tag: "Program".to_string(),
            line_columns: false,
            token_text: true,
        }
    }
}
