use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, info};

use crate::dump::_dump::Dump;
use crate::dump::token::Token;

use super::_theme::{FaceProperties, FaceSpec, Theme, Value};
use super::tables::{ATTRIBUTE_PROPERTIES, GROUP_FACES};

/// Keys consulted for the attribute list, highest priority first.
const ATTRIBUTE_KEYS: [&str; 3] = ["gui", "term", "cterm"];

#[derive(Debug, Clone)]
pub struct Mappings {
    groups: HashMap<String, Vec<String>>,
    attributes: HashMap<String, FaceProperties>,
}

static BUILTIN: OnceLock<Mappings> = OnceLock::new();

impl Mappings {
    pub fn builtin() -> &'static Mappings {
        BUILTIN.get_or_init(|| {
            let groups: HashMap<String, Vec<String>> = GROUP_FACES
                .iter()
                .map(|(group, faces)| {
                    let faces: Vec<String> = faces.iter().map(|f| f.to_string()).collect();
                    (group.to_string(), faces)
                })
                .collect();

            let attributes: HashMap<String, FaceProperties> = ATTRIBUTE_PROPERTIES
                .iter()
                .map(|(keyword, props)| {
                    let mut properties = FaceProperties::default();
                    for (key, value) in props.iter() {
                        properties.set(key, Value::Symbol(value.to_string()));
                    }
                    (keyword.to_string(), properties)
                })
                .collect();

            Mappings { groups, attributes }
        })
    }

    /// The built-in table with `extra` groups layered on top. An entry
    /// with no faces is skipped so every mapped group keeps a target.
    pub fn with_groups(extra: &HashMap<String, Vec<String>>) -> Mappings {
        let mut mappings = Self::builtin().clone();
        for (group, faces) in extra {
            if faces.is_empty() {
                debug!(group = group.as_str(), "ignoring group override with no faces");
                continue;
            }
            mappings.groups.insert(group.clone(), faces.clone());
        }
        mappings
    }

    pub fn faces(&self, group: &str) -> Option<&[String]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    pub fn attribute(&self, keyword: &str) -> Option<&FaceProperties> {
        self.attributes.get(keyword)
    }
}

/// `NONE` means the same as no value at all.
pub fn normalize(value: Option<&str>) -> Option<&str> {
    value.filter(|v| *v != "NONE")
}

fn token_value<'a>(tokens: &'a [Token], key: &str) -> Option<&'a str> {
    tokens
        .iter()
        .find(|t| t.key == key)
        .and_then(|t| t.value.as_deref())
}

fn attribute_properties(list: &str, mappings: &Mappings) -> FaceProperties {
    let mut properties = FaceProperties::default();
    for keyword in list.split(',').filter(|k| !k.is_empty()) {
        if let Some(props) = mappings.attribute(keyword) {
            properties.extend(props);
        }
    }
    properties
}

/// Turns one tokenized `:highlight` line into face specs, one per face
/// mapped from its group. Unmapped groups yield nothing.
pub fn map_line(tokens: &[Token], mappings: &Mappings) -> Vec<FaceSpec> {
    let Some((group, rest)) = tokens.split_first() else {
        return vec![];
    };
    let Some(faces) = mappings.faces(&group.key) else {
        return vec![];
    };

    let foreground = normalize(token_value(rest, "guifg"));
    let background = normalize(token_value(rest, "guibg"));
    let attributes = ATTRIBUTE_KEYS
        .iter()
        .find_map(|key| normalize(token_value(rest, key)));

    let mut properties = match attributes {
        Some(list) => attribute_properties(list, mappings),
        None => FaceProperties::default(),
    };
    if let Some(bg) = background {
        properties.set("background", Value::Text(bg.to_string()));
    }
    if let Some(fg) = foreground {
        properties.set("foreground", Value::Text(fg.to_string()));
    }

    debug!(
        group = group.key.as_str(),
        faces = faces.len(),
        properties = properties.len(),
        "mapped highlight group"
    );

    faces
        .iter()
        .map(|face| FaceSpec {
            face: face.clone(),
            properties: properties.clone(),
        })
        .collect()
}

pub fn convert(name: &str, source_url: &str, dump: &Dump, mappings: &Mappings) -> Theme {
    let faces: Vec<FaceSpec> = dump
        .tokenized()
        .flat_map(|tokens| map_line(&tokens, mappings))
        .collect();

    info!(
        theme = name,
        source = dump.source.as_deref().unwrap_or("-"),
        lines = dump.len(),
        faces = faces.len(),
        "converted highlight dump"
    );

    Theme {
        name: name.to_string(),
        source_url: source_url.to_string(),
        faces,
    }
}
