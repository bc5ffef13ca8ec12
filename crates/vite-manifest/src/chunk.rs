use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One build output unit described by the manifest.
///
/// Field names are matched case-insensitively when deserializing, so
/// `isEntry`, `IsEntry` and `isentry` are all accepted. Unknown fields are
/// ignored and `null` is treated like an absent field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkRecord {
    /// Output file, relative to the web root
    pub file: String,

    /// Original source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Chunk name assigned by the bundler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Top-level entry point (vs shared/imported chunk)
    pub is_entry: bool,

    /// Entry reached only through `import()`
    pub is_dynamic_entry: bool,

    /// Stylesheets emitted for this chunk
    pub css: Vec<String>,

    /// Non-CSS static assets referenced by this chunk
    pub assets: Vec<String>,

    /// Manifest keys of statically imported chunks (for preloading)
    pub imports: Vec<String>,

    /// Manifest keys of lazily loaded chunks
    pub dynamic_imports: Vec<String>,
}

impl ChunkRecord {
    /// Whether this chunk also ships stylesheets.
    pub fn has_css(&self) -> bool {
        !self.css.is_empty()
    }
}

enum Field {
    File,
    Src,
    Name,
    IsEntry,
    IsDynamicEntry,
    Css,
    Assets,
    Imports,
    DynamicImports,
    Ignored,
}

impl Field {
    fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "file" => Field::File,
            "src" => Field::Src,
            "name" => Field::Name,
            "isentry" => Field::IsEntry,
            "isdynamicentry" => Field::IsDynamicEntry,
            "css" => Field::Css,
            "assets" => Field::Assets,
            "imports" => Field::Imports,
            "dynamicimports" => Field::DynamicImports,
            _ => Field::Ignored,
        }
    }
}

impl<'de> Deserialize<'de> for ChunkRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ChunkRecordVisitor)
    }
}

struct ChunkRecordVisitor;

impl<'de> Visitor<'de> for ChunkRecordVisitor {
    type Value = ChunkRecord;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a manifest chunk object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<ChunkRecord, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut file: Option<String> = None;
        let mut src = None;
        let mut name = None;
        let mut is_entry = false;
        let mut is_dynamic_entry = false;
        let mut css = Vec::new();
        let mut assets = Vec::new();
        let mut imports = Vec::new();
        let mut dynamic_imports = Vec::new();

        // Repeated fields (in any casing) overwrite earlier ones
        while let Some(key) = map.next_key::<String>()? {
            match Field::from_name(&key) {
                Field::File => file = map.next_value()?,
                Field::Src => src = map.next_value()?,
                Field::Name => name = map.next_value()?,
                Field::IsEntry => is_entry = map.next_value::<Option<bool>>()?.unwrap_or_default(),
                Field::IsDynamicEntry => {
                    is_dynamic_entry = map.next_value::<Option<bool>>()?.unwrap_or_default()
                }
                Field::Css => css = next_list(&mut map)?,
                Field::Assets => assets = next_list(&mut map)?,
                Field::Imports => imports = next_list(&mut map)?,
                Field::DynamicImports => dynamic_imports = next_list(&mut map)?,
                Field::Ignored => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let file = file.ok_or_else(|| <A::Error as de::Error>::missing_field("file"))?;
        if file.is_empty() {
            return Err(de::Error::invalid_value(
                Unexpected::Str(&file),
                &"a non-empty output file path",
            ));
        }

        Ok(ChunkRecord {
            file,
            src,
            name,
            is_entry,
            is_dynamic_entry,
            css,
            assets,
            imports,
            dynamic_imports,
        })
    }
}

fn next_list<'de, A>(map: &mut A) -> Result<Vec<String>, A::Error>
where
    A: MapAccess<'de>,
{
    Ok(map.next_value::<Option<Vec<String>>>()?.unwrap_or_default())
}
