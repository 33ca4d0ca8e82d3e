//! Ordered registry of unique names
//!
//! Backs the category and merchant pick lists. Entries keep their insertion
//! position: a rename replaces an entry in place and a delete closes the gap.
//! Names are compared exactly (case-sensitive) after trimming.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of unique, trimmed, non-empty names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct NameList {
    names: Vec<String>,
}

impl NameList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from names, rejecting blanks and duplicates
    pub fn try_from_names<I, S>(names: I) -> Result<Self, NameListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for name in names {
            list.add(name.as_ref())?;
        }
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Get the name at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Position of an exact (trimmed) name
    pub fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.names.iter().position(|n| n == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Append a name, returning the stored (trimmed) value
    pub fn add(&mut self, name: &str) -> Result<&str, NameListError> {
        let name = Self::clean(name)?;
        if self.contains(&name) {
            return Err(NameListError::Duplicate(name));
        }
        self.names.push(name);
        Ok(self.names.last().map(String::as_str).unwrap_or_default())
    }

    /// Replace the entry at `index`, returning the previous name
    ///
    /// Renaming an entry to its own current value is allowed.
    pub fn rename_at(&mut self, index: usize, new_name: &str) -> Result<String, NameListError> {
        if index >= self.names.len() {
            return Err(NameListError::OutOfRange(index));
        }
        let new_name = Self::clean(new_name)?;
        if let Some(existing) = self.position(&new_name) {
            if existing != index {
                return Err(NameListError::Duplicate(new_name));
            }
        }
        Ok(std::mem::replace(&mut self.names[index], new_name))
    }

    /// Rename an entry looked up by its current name
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<String, NameListError> {
        let index = self
            .position(old_name)
            .ok_or_else(|| NameListError::Missing(old_name.trim().to_string()))?;
        self.rename_at(index, new_name)
    }

    /// Remove the entry at `index`, returning it
    pub fn remove_at(&mut self, index: usize) -> Result<String, NameListError> {
        if index >= self.names.len() {
            return Err(NameListError::OutOfRange(index));
        }
        Ok(self.names.remove(index))
    }

    /// Remove an entry looked up by name
    pub fn remove(&mut self, name: &str) -> Result<String, NameListError> {
        let index = self
            .position(name)
            .ok_or_else(|| NameListError::Missing(name.trim().to_string()))?;
        self.remove_at(index)
    }

    fn clean(name: &str) -> Result<String, NameListError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NameListError::Empty);
        }
        Ok(name.to_string())
    }
}

impl TryFrom<Vec<String>> for NameList {
    type Error = NameListError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::try_from_names(names)
    }
}

impl From<NameList> for Vec<String> {
    fn from(list: NameList) -> Self {
        list.names
    }
}

/// Reasons a name list edit is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameListError {
    Empty,
    Duplicate(String),
    Missing(String),
    OutOfRange(usize),
}

impl fmt::Display for NameListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Name cannot be empty"),
            Self::Duplicate(name) => write!(f, "\"{}\" already exists", name),
            Self::Missing(name) => write!(f, "\"{}\" does not exist", name),
            Self::OutOfRange(index) => write!(f, "No entry at position {}", index),
        }
    }
}

impl std::error::Error for NameListError {}
