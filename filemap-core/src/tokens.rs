use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Built-in rebrand table. Order matters: the first pair whose old token
/// occurs in a filename decides that file's new name.
pub const DEFAULT_TOKENS: &[(&str, &str)] = &[
    ("JSString", "TiString"),
    ("JavaScript", "Ti"),
    ("JSRetain", "TiRetain"),
    ("JSRelease", "TiRelease"),
    ("JSObject", "TiObject"),
    ("JSLock", "TiLock"),
    ("JSUnlock", "TiUnlock"),
    ("JSCell", "TiCell"),
    ("JSClass", "TiClass"),
    ("JSStatic", "TiStatic"),
    ("JSContext", "TiContext"),
    ("JSGlobal", "TiGlobal"),
    ("JSValue", "TiValue"),
    ("JSArray", "TiArray"),
    ("JSByte", "TiArray"),
    ("JSFunction", "TiFunction"),
    ("JSProperty", "TiProperty"),
    ("ExecState", "TiExcState"),
    ("JSGlobalData", "TiGlobalData"),
    ("kJS", "kTI"),
    ("JSEvaluate", "TiEval"),
    ("JSCheck", "TiCheck"),
    ("JSGarbage", "TiGarbage"),
    ("JSType", "TiType"),
    ("JSAPI", "TiAPI"),
    ("JSCallback", "TiCallback"),
    ("JSProfile", "TiProfile"),
    ("JSBase", "TiBase"),
    ("JSChar", "TiChar"),
    ("WTFMain", "WTIMain"),
];

/// A single rewrite rule: `old` found in a filename is replaced by `new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub old: String,
    pub new: String,
}

impl TokenPair {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }
}

/// Ordered, immutable sequence of token pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    pairs: Vec<TokenPair>,
}

impl MappingTable {
    /// Build a table from explicit pairs.
    ///
    /// Rejects an empty table and any pair with an empty old token, since an
    /// empty needle would match every filename.
    pub fn new(pairs: Vec<TokenPair>) -> Result<Self, ConfigError> {
        if pairs.is_empty() {
            return Err(ConfigError::EmptyMappingTable);
        }
        for (index, pair) in pairs.iter().enumerate() {
            if pair.old.is_empty() {
                return Err(ConfigError::EmptyOldToken { index });
            }
        }
        Ok(Self { pairs })
    }

    pub fn pairs(&self) -> &[TokenPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenPair> {
        self.pairs.iter()
    }

    /// First pair whose old token occurs anywhere in `name`.
    pub fn first_match(&self, name: &str) -> Option<&TokenPair> {
        self.iter().find(|pair| name.contains(pair.old.as_str()))
    }

    /// New filename for `name`, or `None` if no token matches.
    pub fn rename(&self, name: &str) -> Option<String> {
        self.first_match(name)
            .map(|pair| name.replace(pair.old.as_str(), &pair.new))
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        Self {
            pairs: DEFAULT_TOKENS
                .iter()
                .map(|(old, new)| TokenPair::new(*old, *new))
                .collect(),
        }
    }
}
