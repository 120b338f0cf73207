use time::macros::format_description;
use time::Date;

use crate::models::entry::{File, Folder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// One-line description of a folder's direct contents for the listing
/// header, e.g. `3 folders • 2 files`.
pub fn folder_summary(folder: &Folder) -> String {
    let folders = folder.children.iter().filter(|c| c.is_folder()).count();
    let files = folder.children.len() - folders;
    match (folders, files) {
        (0, 0) => "Empty folder".to_string(),
        (f, 0) => format!("{f} folders"),
        (0, n) => format!("{n} files"),
        (f, n) => format!("{f} folders • {n} files"),
    }
}

/// Orders files by their last-modified date. Entries whose date does not
/// parse are left where they are; the dated entries sort around them, ties
/// staying in relative order.
pub fn sort_files_by_date<'a>(files: &[&'a File], order: SortOrder) -> Vec<&'a File> {
    let keys: Vec<Option<Date>> = files
        .iter()
        .map(|file| parse_date(&file.date_modified))
        .collect();

    let mut dated: Vec<(Date, &'a File)> = keys
        .iter()
        .copied()
        .zip(files.iter().copied())
        .filter_map(|(key, file)| key.map(|date| (date, file)))
        .collect();
    dated.sort_by(|a, b| {
        let by_date = a.0.cmp(&b.0);
        match order {
            SortOrder::Ascending => by_date,
            SortOrder::Descending => by_date.reverse(),
        }
    });

    let mut in_order = dated.into_iter().map(|(_, file)| file);
    keys.iter()
        .zip(files.iter().copied())
        .map(|(key, file)| {
            if key.is_some() {
                in_order.next().unwrap_or(file)
            } else {
                file
            }
        })
        .collect()
}

fn parse_date(value: &str) -> Option<Date> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value.trim(), &format).ok()
}
