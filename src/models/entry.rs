use serde::{Deserialize, Serialize};

/// A node in the explorer tree, discriminated on the wire by `entryType`.
///
/// The serialized shape matches the startup document: common fields `id`,
/// `name`, `entryType`, `dateModified`, plus `children` for folders and
/// `fileType`/`size`/`content` for files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entryType", rename_all = "lowercase")]
pub enum Entry {
    Folder(Folder),
    File(File),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub date_modified: String,
    #[serde(default)]
    pub children: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub date_modified: String,
    /// Display tag only, e.g. `Document/txt` or `image/png`. Icon selection
    /// happens in the rendering layer.
    #[serde(default)]
    pub file_type: String,
    /// Human-readable size string, carried opaquely for display.
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    /// Anything that is not explicitly a folder is treated as a file.
    #[default]
    File,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Folder => "folder",
            EntryKind::File => "file",
        }
    }
}

impl Entry {
    pub fn id(&self) -> &str {
        match self {
            Entry::Folder(folder) => &folder.id,
            Entry::File(file) => &file.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::Folder(folder) => &folder.name,
            Entry::File(file) => &file.name,
        }
    }

    pub fn date_modified(&self) -> &str {
        match self {
            Entry::Folder(folder) => &folder.date_modified,
            Entry::File(file) => &file.date_modified,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Folder(_) => EntryKind::Folder,
            Entry::File(_) => EntryKind::File,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Entry::Folder(_))
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Entry::Folder(folder) => Some(folder),
            Entry::File(_) => None,
        }
    }

    pub fn as_folder_mut(&mut self) -> Option<&mut Folder> {
        match self {
            Entry::Folder(folder) => Some(folder),
            Entry::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Entry::File(file) => Some(file),
            Entry::Folder(_) => None,
        }
    }

    /// Direct children; files have none.
    pub fn children(&self) -> &[Entry] {
        match self {
            Entry::Folder(folder) => &folder.children,
            Entry::File(_) => &[],
        }
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Entry::Folder(folder) => folder.name = name.into(),
            Entry::File(file) => file.name = name.into(),
        }
    }

    pub(crate) fn set_date_modified(&mut self, date: impl Into<String>) {
        match self {
            Entry::Folder(folder) => folder.date_modified = date.into(),
            Entry::File(file) => file.date_modified = date.into(),
        }
    }
}
