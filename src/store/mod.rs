mod lookup;

use std::collections::BTreeSet;

use time::macros::format_description;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::core::errors::{Error, Result};
use crate::models::entry::{Entry, EntryKind, File, Folder};
use crate::views;

/// File-type tag assigned when a create request does not carry one.
const DEFAULT_FILE_TYPE: &str = "Document/txt";
/// Size placeholder for freshly created files; real sizes come from the
/// startup document and are display strings only.
const NEW_FILE_SIZE: &str = "—";

/// Arguments for [`ExplorerStore::create_entry`].
#[derive(Debug, Clone, Default)]
pub struct CreateEntry {
    pub parent_id: String,
    pub kind: EntryKind,
    pub name: String,
    pub file_type: Option<String>,
    pub content: Option<String>,
}

/// The canonical explorer state: one owned tree plus the navigation pointers
/// derived UIs read from it.
///
/// All mutation goes through the command methods below. Each command either
/// applies fully or leaves every field untouched and records its error in the
/// last-error slot; a later successful command clears the slot.
#[derive(Debug, Clone)]
pub struct ExplorerStore {
    root: Entry,
    root_id: String,
    expanded_ids: BTreeSet<String>,
    current_folder_id: String,
    selected_entry_id: Option<String>,
    last_error: Option<Error>,
}

impl ExplorerStore {
    /// Builds a store around an already-parsed tree. The root must be a
    /// folder; the initial current folder is the first folder directly under
    /// the root (the root itself when it has none), and the path to it starts
    /// expanded.
    pub fn new(root: Entry) -> Result<Self> {
        if !root.is_folder() {
            return Err(Error::NotAFolder {
                id: root.id().to_string(),
            });
        }
        let root_id = root.id().to_string();
        let current_folder_id = views::default_folder_id(&root);
        let mut expanded_ids = BTreeSet::new();
        expanded_ids.insert(root_id.clone());
        expanded_ids.insert(current_folder_id.clone());
        Ok(Self {
            root,
            root_id,
            expanded_ids,
            current_folder_id,
            selected_entry_id: None,
            last_error: None,
        })
    }

    /// Parses the startup JSON document (the nested entry tree) and builds
    /// a store from it.
    pub fn from_json(data: &str) -> Result<Self> {
        let root = serde_json::from_str(data).map_err(|err| Error::InvalidData(err.to_string()))?;
        Self::new(root)
    }

    // ---- commands -------------------------------------------------------

    /// Points the content pane at `folder_id`. Clears the selection and
    /// expands the path to the folder.
    pub fn set_current_folder(&mut self, folder_id: &str) -> Result<()> {
        let outcome = self.try_set_current_folder(folder_id);
        self.finish(outcome)
    }

    /// Selects an entry, or clears the selection when `entry_id` is `None`.
    /// Selecting a file also navigates to its parent folder.
    pub fn select_entry(&mut self, entry_id: Option<&str>) -> Result<()> {
        let outcome = self.try_select_entry(entry_id);
        self.finish(outcome)
    }

    /// Creates a folder or file under `parent_id` and returns the fresh id.
    /// The new entry becomes the selection and its parent the current folder.
    pub fn create_entry(&mut self, request: CreateEntry) -> Result<String> {
        let outcome = self.try_create_entry(request);
        self.finish(outcome)
    }

    pub fn rename_entry(&mut self, id: &str, new_name: &str) -> Result<()> {
        let outcome = self.try_rename_entry(id, new_name);
        self.finish(outcome)
    }

    /// Detaches an entry from its parent. The root cannot be deleted.
    pub fn delete_entry(&mut self, id: &str) -> Result<()> {
        let outcome = self.try_delete_entry(id);
        self.finish(outcome)
    }

    /// Replaces the expansion set wholesale. Expansion state is advisory
    /// (tree-view rendering only), so the ids are not validated.
    pub fn set_expanded_ids<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.expanded_ids = ids.into_iter().collect();
        self.last_error = None;
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    // ---- reads ----------------------------------------------------------

    pub fn root(&self) -> &Entry {
        &self.root
    }

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    pub fn expanded_ids(&self) -> &BTreeSet<String> {
        &self.expanded_ids
    }

    pub fn current_folder_id(&self) -> &str {
        &self.current_folder_id
    }

    pub fn selected_entry_id(&self) -> Option<&str> {
        self.selected_entry_id.as_deref()
    }

    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Resolves an id anywhere in the tree.
    pub fn find_entry(&self, id: &str) -> Option<&Entry> {
        lookup::find_with_parent(&self.root, id).map(|found| found.node)
    }

    /// The folder the content pane is showing. `None` only if the current
    /// folder was deleted out from under a stale id, which the delete
    /// command itself prevents.
    pub fn current_folder(&self) -> Option<&Folder> {
        self.find_entry(&self.current_folder_id)
            .and_then(Entry::as_folder)
    }

    // ---- internals ------------------------------------------------------

    fn finish<T>(&mut self, outcome: Result<T>) -> Result<T> {
        match &outcome {
            Ok(_) => self.last_error = None,
            Err(err) => {
                tracing::debug!(error = %err, "command rejected");
                self.last_error = Some(err.clone());
            }
        }
        outcome
    }

    fn try_set_current_folder(&mut self, folder_id: &str) -> Result<()> {
        let found = lookup::find_with_parent(&self.root, folder_id).ok_or_else(|| Error::NotFound {
            id: folder_id.to_string(),
        })?;
        if !found.node.is_folder() {
            return Err(Error::NotAFolder {
                id: folder_id.to_string(),
            });
        }
        self.current_folder_id = folder_id.to_string();
        self.selected_entry_id = None;
        // Navigating reveals the target in the tree view.
        self.expanded_ids
            .extend(views::expansion_path(&self.root, folder_id));
        Ok(())
    }

    fn try_select_entry(&mut self, entry_id: Option<&str>) -> Result<()> {
        let Some(entry_id) = entry_id else {
            self.selected_entry_id = None;
            return Ok(());
        };
        let (is_folder, parent_id) = {
            let found = lookup::find_with_parent(&self.root, entry_id).ok_or_else(|| {
                Error::NotFound {
                    id: entry_id.to_string(),
                }
            })?;
            (found.node.is_folder(), found.parent.map(|parent| parent.id.clone()))
        };
        self.selected_entry_id = Some(entry_id.to_string());
        if !is_folder {
            if let Some(parent_id) = parent_id {
                self.current_folder_id = parent_id;
            }
        }
        self.expanded_ids
            .extend(views::expansion_path(&self.root, entry_id));
        Ok(())
    }

    fn try_create_entry(&mut self, request: CreateEntry) -> Result<String> {
        if request.parent_id.trim().is_empty() {
            return Err(Error::MissingField { field: "parentId" });
        }
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::MissingField { field: "name" });
        }

        {
            let parent = lookup::find_with_parent(&self.root, &request.parent_id)
                .and_then(|found| found.node.as_folder())
                .ok_or_else(|| Error::NotAFolder {
                    id: request.parent_id.clone(),
                })?;
            if lookup::has_name_conflict(parent, &name, None) {
                return Err(Error::NameConflict { name });
            }
        }

        let id = Uuid::new_v4().to_string();
        let stamp = today_stamp();
        let entry = match request.kind {
            EntryKind::Folder => Entry::Folder(Folder {
                id: id.clone(),
                name,
                date_modified: stamp,
                children: Vec::new(),
            }),
            EntryKind::File => Entry::File(File {
                id: id.clone(),
                name,
                date_modified: stamp,
                file_type: request
                    .file_type
                    .unwrap_or_else(|| DEFAULT_FILE_TYPE.to_string()),
                size: NEW_FILE_SIZE.to_string(),
                content: request.content.unwrap_or_default(),
            }),
        };

        let parent = lookup::find_folder_mut(&mut self.root, &request.parent_id).ok_or_else(|| {
            Error::NotAFolder {
                id: request.parent_id.clone(),
            }
        })?;
        parent.children.push(entry);
        tracing::debug!(id = %id, parent = %request.parent_id, "created entry");

        self.expanded_ids.insert(request.parent_id.clone());
        self.current_folder_id = request.parent_id;
        self.selected_entry_id = Some(id.clone());
        Ok(id)
    }

    fn try_rename_entry(&mut self, id: &str, new_name: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(Error::MissingField { field: "id" });
        }
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return Err(Error::MissingField { field: "newName" });
        }

        {
            let found = lookup::find_with_parent(&self.root, id).ok_or_else(|| Error::NotFound {
                id: id.to_string(),
            })?;
            // The root has no siblings; checking against its own children
            // keeps it from taking the name of an entry directly under it.
            let scope = found.parent.or_else(|| found.node.as_folder());
            let conflict = scope
                .map_or(false, |folder| lookup::has_name_conflict(folder, trimmed, Some(id)));
            if conflict {
                return Err(Error::NameConflict {
                    name: trimmed.to_string(),
                });
            }
        }

        let node = lookup::find_entry_mut(&mut self.root, id).ok_or_else(|| Error::NotFound {
            id: id.to_string(),
        })?;
        node.set_name(trimmed);
        node.set_date_modified(today_stamp());
        Ok(())
    }

    fn try_delete_entry(&mut self, id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(Error::MissingField { field: "id" });
        }
        if id == self.root_id {
            return Err(Error::RootDeletionForbidden);
        }
        let parent_id = lookup::find_with_parent(&self.root, id)
            .and_then(|found| found.parent.map(|parent| parent.id.clone()))
            .ok_or_else(|| Error::NotFound { id: id.to_string() })?;

        let parent = lookup::find_folder_mut(&mut self.root, &parent_id).ok_or_else(|| {
            Error::NotFound {
                id: parent_id.clone(),
            }
        })?;
        parent.children.retain(|child| child.id() != id);
        tracing::debug!(id = %id, parent = %parent_id, "deleted entry");

        if self.selected_entry_id.as_deref() == Some(id) {
            self.selected_entry_id = None;
        }
        if self.current_folder_id == id {
            self.current_folder_id = parent_id;
        }
        Ok(())
    }
}

/// Current date as the `YYYY-MM-DD` stamp the tree stores.
fn today_stamp() -> String {
    let format = format_description!("[year]-[month]-[day]");
    OffsetDateTime::now_utc()
        .date()
        .format(&format)
        .unwrap_or_default()
}
