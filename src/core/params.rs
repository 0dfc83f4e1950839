// Copyright @yucwang 2026

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use quick_xml::events::{ BytesStart, Event };
use quick_xml::Reader;

use crate::math::constants::Float;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
    MissingKey(String),
    NotNumeric { key: String, value: String },
    InvalidRadius(Float),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "failed to read parameters: {}", err),
            ConfigError::Parse(msg) => write!(f, "invalid parameter file: {}", msg),
            ConfigError::MissingKey(key) => write!(f, "required configuration missing: {}", key),
            ConfigError::NotNumeric { key, value } => write!(f, "value not numeric: {} = {:?}", key, value),
            ConfigError::InvalidRadius(r) => write!(f, "tracking volume radius must be positive, got {}", r),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Snapshot of a key-value parameter server, keyed by global name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamStore {
    values: BTreeMap<String, String>,
}

// `/a/b` and `a/b` name the same parameter.
fn resolve_name(key: &str) -> String {
    key.trim().trim_start_matches('/').to_string()
}

impl ParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(resolve_name(key), value.trim().to_string());
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn get_opt(&self, key: &str) -> Option<&str> {
        self.values.get(&resolve_name(key)).map(|v| v.as_str())
    }

    pub fn get(&self, key: &str) -> Result<&str, ConfigError> {
        self.get_opt(key).ok_or_else(|| ConfigError::MissingKey(resolve_name(key)))
    }

    pub fn get_float(&self, key: &str) -> Result<Float, ConfigError> {
        let value = self.get(key)?;
        parse_float(key, value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(&resolve_name(key))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parses `key = value` or `key: value` lines. `#` outside quotes starts a
    /// comment. A `key:` line with no value opens a namespace for the lines
    /// indented below it, as in `rosparam dump` output.
    pub fn from_key_values(text: &str) -> Result<Self, ConfigError> {
        let mut params = ParamStore::new();
        let mut namespaces: Vec<(usize, String)> = Vec::new();

        for (lineno, raw) in text.lines().enumerate() {
            let lineno = lineno + 1;
            let content = strip_comment(raw).trim_end();
            let line = content.trim_start();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('-') {
                return Err(ConfigError::Parse(format!("line {}: lists are not supported", lineno)));
            }

            let indent = content.len() - line.len();
            while namespaces.last().map_or(false, |(level, _)| *level >= indent) {
                namespaces.pop();
            }
            if indent > 0 && namespaces.is_empty() {
                return Err(ConfigError::Parse(format!("line {}: unexpected indentation", lineno)));
            }

            let sep = line.find(|c: char| c == '=' || c == ':')
                .ok_or_else(|| ConfigError::Parse(format!("line {}: expected `key = value`", lineno)))?;
            let key = line[..sep].trim();
            if key.is_empty() {
                return Err(ConfigError::Parse(format!("line {}: empty key", lineno)));
            }

            let value = line[sep + 1..].trim();
            if value.is_empty() {
                if &line[sep..sep + 1] == "=" {
                    return Err(ConfigError::Parse(format!("line {}: empty value for {}", lineno, key)));
                }
                namespaces.push((indent, key.trim_matches('/').to_string()));
                continue;
            }

            let mut name: Vec<&str> = namespaces.iter().map(|(_, ns)| ns.as_str()).collect();
            name.push(key.trim_start_matches('/'));
            params.set(&name.join("/"), unquote(value));
        }

        Ok(params)
    }

    /// Parses `<param name=".." value=".."/>` elements of a roslaunch file,
    /// prefixing names with the enclosing `<group ns="..">` namespaces and
    /// `<node name="..">` private namespaces.
    pub fn from_launch_xml(xml: &str) -> Result<Self, ConfigError> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);
        let mut buf = Vec::new();

        let mut namespaces: Vec<String> = Vec::new();
        let mut params = ParamStore::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Eof) => break,
                Ok(Event::Start(e)) => {
                    match e.name().as_ref() {
                        b"group" => namespaces.push(attribute(&e, b"ns").unwrap_or_default()),
                        b"node" => namespaces.push(attribute(&e, b"name").unwrap_or_default()),
                        b"param" => read_param(&e, &namespaces, &mut params)?,
                        _ => {}
                    }
                }
                Ok(Event::Empty(e)) => {
                    if e.name().as_ref() == b"param" {
                        read_param(&e, &namespaces, &mut params)?;
                    }
                }
                Ok(Event::End(e)) => {
                    if matches!(e.name().as_ref(), b"group" | b"node") {
                        namespaces.pop();
                    }
                }
                Err(e) => {
                    return Err(ConfigError::Parse(e.to_string()));
                }
                _ => {}
            }

            buf.clear();
        }

        Ok(params)
    }
}

/// Loads a parameter snapshot; `.xml` and `.launch` files are read as
/// roslaunch XML, anything else as `key = value` lines.
pub fn load_params<P: AsRef<Path>>(path: P) -> Result<ParamStore, ConfigError> {
    let path = path.as_ref();
    log::info!("Loading parameters from: {}.", path.display());
    let text = fs::read_to_string(path)?;

    let is_xml = matches!(path.extension().and_then(|ext| ext.to_str()), Some("xml") | Some("launch"));
    let params = if is_xml {
        ParamStore::from_launch_xml(&text)?
    } else {
        ParamStore::from_key_values(&text)?
    };

    log::info!("Parameters loaded, {} keys.", params.len());
    Ok(params)
}

fn parse_float(key: &str, value: &str) -> Result<Float, ConfigError> {
    value.parse::<Float>().map_err(|_| ConfigError::NotNumeric {
        key: resolve_name(key),
        value: value.to_string(),
    })
}

fn strip_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    for (idx, c) in line.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '#' => return &line[..idx],
            None => {}
        }
    }
    line
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn attribute(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| attr.unescape_value().unwrap_or_default().to_string())
}

fn read_param(e: &BytesStart, namespaces: &[String], params: &mut ParamStore) -> Result<(), ConfigError> {
    let name = attribute(e, b"name").ok_or_else(|| ConfigError::Parse("param without name".to_string()))?;
    let value = attribute(e, b"value")
        .ok_or_else(|| ConfigError::Parse(format!("param {} without value", name)))?;
    let full_name = join_name(namespaces, &name);
    log::debug!("param {} = {}", full_name, value);
    params.set(&full_name, &value);
    Ok(())
}

fn join_name(namespaces: &[String], name: &str) -> String {
    if name.starts_with('/') {
        return name.to_string();
    }

    let mut parts: Vec<&str> = Vec::new();
    for ns in namespaces {
        if ns.starts_with('/') {
            parts.clear();
        }
        let ns = ns.trim_matches('/');
        if !ns.is_empty() {
            parts.push(ns);
        }
    }
    parts.push(name);
    parts.join("/")
}
