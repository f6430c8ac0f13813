use serde::ser::{Serialize, SerializeMap, Serializer};

/// A face property value as it appears in the generated Lisp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Emitted verbatim: `bold`, `t`, `(:style wave)`.
    Symbol(String),
    /// Emitted as a quoted string, used for colors.
    Text(String),
}

impl Value {
    pub fn to_lisp(&self) -> String {
        match self {
            Value::Symbol(s) => s.clone(),
            Value::Text(s) => lisp_string(s),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Symbol(s) | Value::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// Quotes `s` as an Emacs Lisp string literal.
pub fn lisp_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Property keys in first-write order. Rewriting a key keeps its slot.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FaceProperties {
    entries: Vec<(String, Value)>,
}

impl FaceProperties {
    pub fn set(&mut self, key: &str, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn extend(&mut self, other: &FaceProperties) {
        for (key, value) in &other.entries {
            self.set(key, value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FaceProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FaceSpec {
    pub face: String,
    pub properties: FaceProperties,
}

#[derive(Debug)]
pub struct Theme {
    pub name: String,
    pub source_url: String,
    pub faces: Vec<FaceSpec>,
}

impl Theme {
    pub fn file_name(&self) -> String {
        format!("{}-theme.el", self.name)
    }
}
