//! Flag declarations and typed value storage.
//!
//! A [`FlagSet`] is a named collection of flag specs. Declaration order is
//! preserved: it drives the order of missing-flag aggregation. Values are
//! mutated exactly once per parse session, by [`parser::parse`](super::parser::parse).

use super::error::CliError;

/// The four value shapes a flag can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagKind {
    String,
    Bool,
    Int,
    StringList,
}

/// Current (or default) value of a flag.
#[derive(Clone, Debug, PartialEq)]
pub enum FlagValue {
    String(String),
    Bool(bool),
    Int(i64),
    StringList(Vec<String>),
}

impl FlagValue {
    pub fn kind(&self) -> FlagKind {
        match self {
            FlagValue::String(_) => FlagKind::String,
            FlagValue::Bool(_) => FlagKind::Bool,
            FlagValue::Int(_) => FlagKind::Int,
            FlagValue::StringList(_) => FlagKind::StringList,
        }
    }

    /// Textual representation used by the required-flag check. An empty
    /// string means "unset". Bool and int values are never textually empty,
    /// so marking them required cannot distinguish an explicit `false`/`0`
    /// from "never provided"; that limitation is kept on purpose.
    fn textual(&self) -> String {
        match self {
            FlagValue::String(s) => s.clone(),
            FlagValue::Bool(b) => b.to_string(),
            FlagValue::Int(n) => n.to_string(),
            FlagValue::StringList(items) => items.join(","),
        }
    }
}

#[derive(Clone, Debug)]
struct Flag {
    name: String,
    usage: String,
    value: FlagValue,
    required: bool,
}

/// A named, ordered collection of flag declarations.
#[derive(Clone, Debug)]
pub struct FlagSet {
    name: String,
    flags: Vec<Flag>,
}

impl FlagSet {
    pub fn new(name: impl Into<String>) -> Self {
        FlagSet {
            name: name.into(),
            flags: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Declare a string flag.
    ///
    /// # Panics
    ///
    /// Panics if a flag with the same name already exists in this set; a
    /// duplicate declaration is a programmer error caught at startup.
    pub fn add_str(&mut self, name: &str, default: &str, usage: &str) {
        self.declare(name, FlagValue::String(default.to_string()), usage);
    }

    /// Declare a boolean flag. See [`FlagSet::add_str`] for panics.
    pub fn add_bool(&mut self, name: &str, default: bool, usage: &str) {
        self.declare(name, FlagValue::Bool(default), usage);
    }

    /// Declare a base-10 integer flag. See [`FlagSet::add_str`] for panics.
    pub fn add_int(&mut self, name: &str, default: i64, usage: &str) {
        self.declare(name, FlagValue::Int(default), usage);
    }

    /// Declare a comma-separated string list flag. See [`FlagSet::add_str`]
    /// for panics.
    pub fn add_list(&mut self, name: &str, default: &[&str], usage: &str) {
        let items = default.iter().map(|s| s.to_string()).collect();
        self.declare(name, FlagValue::StringList(items), usage);
    }

    /// Mark a previously declared flag as required.
    ///
    /// # Panics
    ///
    /// Panics if no flag with that name exists.
    pub fn mark_required(&mut self, name: &str) {
        let set = &self.name;
        let flag = self
            .flags
            .iter_mut()
            .find(|f| f.name == name)
            .unwrap_or_else(|| panic!("cannot require unknown flag --{name} in set {set}"));
        flag.required = true;
    }

    fn declare(&mut self, name: &str, default: FlagValue, usage: &str) {
        assert!(
            !name.is_empty() && !name.starts_with('-'),
            "invalid flag name {name:?} in set {}",
            self.name
        );
        assert!(
            self.lookup(name).is_none(),
            "duplicate flag --{name} in set {}",
            self.name
        );
        self.flags.push(Flag {
            name: name.to_string(),
            usage: usage.to_string(),
            value: default,
            required: false,
        });
    }

    fn lookup(&self, name: &str) -> Option<&Flag> {
        self.flags.iter().find(|f| f.name == name)
    }

    pub fn kind_of(&self, name: &str) -> Option<FlagKind> {
        self.lookup(name).map(|f| f.value.kind())
    }

    pub fn usage_of(&self, name: &str) -> Option<&str> {
        self.lookup(name).map(|f| f.usage.as_str())
    }

    /// Bind a raw textual value to a flag, converting per its kind.
    pub fn set(&mut self, name: &str, raw: &str) -> Result<(), CliError> {
        let flag = match self.flags.iter_mut().find(|f| f.name == name) {
            Some(flag) => flag,
            None => return Err(CliError::Parse(format!("unknown flag: --{name}"))),
        };
        flag.value = match flag.value.kind() {
            FlagKind::String => FlagValue::String(raw.to_string()),
            FlagKind::Bool => match raw {
                "true" => FlagValue::Bool(true),
                "false" => FlagValue::Bool(false),
                other => {
                    return Err(CliError::Parse(format!(
                        "invalid boolean value {other:?} for flag --{name}"
                    )));
                }
            },
            FlagKind::Int => match raw.parse::<i64>() {
                Ok(n) => FlagValue::Int(n),
                Err(_) => {
                    return Err(CliError::Parse(format!(
                        "invalid value {raw:?} for flag --{name}: expected an integer"
                    )));
                }
            },
            // An explicit empty value clears the list; this is a
            // normalization rule, not a no-op.
            FlagKind::StringList => {
                if raw.is_empty() {
                    FlagValue::StringList(Vec::new())
                } else {
                    FlagValue::StringList(raw.split(',').map(str::to_string).collect())
                }
            }
        };
        Ok(())
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match &self.lookup(name)?.value {
            FlagValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.lookup(name)?.value {
            FlagValue::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.lookup(name)?.value {
            FlagValue::Int(n) => Some(n),
            _ => None,
        }
    }

    pub fn get_list(&self, name: &str) -> Option<&[String]> {
        match &self.lookup(name)?.value {
            FlagValue::StringList(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Names of required flags whose textual value is empty, in declaration
    /// order. Empty result means validation passed.
    pub fn validate_required(&self) -> Vec<String> {
        self.flags
            .iter()
            .filter(|f| f.required && f.value.textual().is_empty())
            .map(|f| f.name.clone())
            .collect()
    }
}
