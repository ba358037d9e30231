use crate::errors::{AppError, AppResult};
use crate::models::label::LABEL_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static id → display name lookup (mushroom types, restaurants).
///
/// Names end up inside encoded labels, so a name containing the label
/// separator `" - "` would make every label built from it undecodable.
/// Such catalogs are rejected when they are built or loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<u32, String>", into = "BTreeMap<u32, String>")]
pub struct Catalog {
    #[serde(skip)]
    kind: &'static str,
    entries: BTreeMap<u32, String>,
}

impl Catalog {
    pub fn new<I, S>(kind: &'static str, entries: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (id, name) in entries {
            let name = name.into();
            validate_name(id, &name)?;
            map.insert(id, name);
        }

        Ok(Self { kind, entries: map })
    }

    pub fn name(&self, id: u32) -> AppResult<&str> {
        self.entries
            .get(&id)
            .map(String::as_str)
            .ok_or(AppError::InvalidCatalogId {
                kind: self.kind,
                id,
            })
    }

    /// All ids whose display name is `name`.
    /// More than one result means the name alone cannot recover the id.
    pub fn ids_for(&self, name: &str) -> Vec<u32> {
        self.entries
            .iter()
            .filter(|(_, n)| n.as_str() == name)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.entries.iter().map(|(id, n)| (*id, n.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn with_kind(mut self, kind: &'static str) -> Self {
        self.kind = kind;
        self
    }
}

fn validate_name(id: u32, name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::Config(format!("catalog entry {id} has an empty name")));
    }
    if name.contains(LABEL_SEPARATOR) {
        return Err(AppError::Config(format!(
            "catalog entry {id} ('{name}') contains the label separator '{LABEL_SEPARATOR}'"
        )));
    }
    Ok(())
}

impl TryFrom<BTreeMap<u32, String>> for Catalog {
    type Error = AppError;

    fn try_from(map: BTreeMap<u32, String>) -> AppResult<Self> {
        Catalog::new("catalog", map)
    }
}

impl From<Catalog> for BTreeMap<u32, String> {
    fn from(c: Catalog) -> Self {
        c.entries
    }
}

/// Both lookups used to build labels, injected wherever they are needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogs {
    #[serde(default = "default_mushroom_types")]
    pub mushroom_types: Catalog,
    #[serde(default = "default_restaurants")]
    pub restaurants: Catalog,
}

impl Catalogs {
    pub fn new(mushroom_types: Catalog, restaurants: Catalog) -> Self {
        Self {
            mushroom_types: mushroom_types.with_kind("mushroom type"),
            restaurants: restaurants.with_kind("restaurant"),
        }
    }

    /// Restore the catalog kinds after deserialisation (serde only sees the maps).
    pub(crate) fn normalized(self) -> Self {
        Self::new(self.mushroom_types, self.restaurants)
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self {
            mushroom_types: default_mushroom_types(),
            restaurants: default_restaurants(),
        }
    }
}

pub fn default_mushroom_types() -> Catalog {
    Catalog {
        kind: "mushroom type",
        entries: BTreeMap::from([
            (1, "Blue Oyster".to_string()),
            (2, "Lion's Mane".to_string()),
        ]),
    }
}

pub fn default_restaurants() -> Catalog {
    Catalog {
        kind: "restaurant",
        entries: BTreeMap::from([
            (1, "Restaurant A".to_string()),
            (2, "Restaurant B".to_string()),
            (3, "Restaurant C".to_string()),
        ]),
    }
}
