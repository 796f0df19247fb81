/*
 * models/version.rs
 *
 * docwell-core - Documentation workspace service
 * Copyright (C) 2019-2020 Ammon Smith
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use super::prelude::*;

/// One saved revision of a document. Rows are append-only.
#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq, Eq)]
pub struct DocumentVersion {
    version_id: VersionId,
    document_id: DocumentId,
    version: i32,
    title: String,
    content: String,
    created_by: UserId,
    created_at: NaiveDateTime,
    change_summary: Option<String>,
}

impl DocumentVersion {
    pub const INITIAL_SUMMARY: &'static str = "Initial version";

    pub fn update_summary(version: i32) -> String {
        format!("Updated to version {}", version)
    }

    pub fn restore_summary(restored: i32) -> String {
        format!("Restored version {}", restored)
    }

    #[inline]
    pub fn id(&self) -> VersionId {
        self.version_id
    }

    #[inline]
    pub fn document_id(&self) -> DocumentId {
        self.document_id
    }

    #[inline]
    pub fn version(&self) -> i32 {
        self.version
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn created_by(&self) -> UserId {
        self.created_by
    }

    #[inline]
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    #[inline]
    pub fn change_summary(&self) -> Option<&str> {
        self.change_summary.ref_map(|s| s.as_str())
    }
}
