/*
 * document/manager.rs
 *
 * docwell - Documentation workspace service
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

use super::models::{DocumentEdit, NewDocument, NewDocumentInput, NewVersion, SaveDocument};
use crate::manager_prelude::*;
use crate::schema::{collections, document_versions, documents, workspaces};
use diesel::dsl::max;
use diesel::sqlite::Sqlite;
use docwell_core::markdown;

const EXCERPT_LENGTH: usize = 200;

/// Uses the given excerpt, or the start of the document's first paragraph.
fn pick_excerpt(explicit: Option<&str>, content: &str) -> Option<String> {
    match non_empty(explicit) {
        Some(excerpt) => Some(excerpt.to_string()),
        None => markdown::excerpt(content, EXCERPT_LENGTH),
    }
}

make_manager!(DocumentManager, "document manager");

impl DocumentManager<'_> {
    fn next_index(&mut self, collection_id: CollectionId, parent_id: Option<DocumentId>) -> Result<i32> {
        let query = documents::table
            .filter(documents::collection_id.eq(collection_id))
            .select(max(documents::order_index))
            .into_boxed::<Sqlite>();

        let query = match parent_id {
            Some(parent_id) => query.filter(documents::parent_id.eq(parent_id)),
            None => query.filter(documents::parent_id.is_null()),
        };

        let max_index = query.get_result::<Option<i32>>(self.conn)?;
        Ok(next_order_index(max_index))
    }

    /// Inserts a document at version 1 along with its first history entry.
    /// Must be called inside a transaction.
    pub fn create(
        &mut self,
        collection_id: CollectionId,
        author: UserId,
        input: NewDocumentInput,
        template: Option<&Template>,
    ) -> Result<Document> {
        let title = require_text(input.title, "Title cannot be empty")?;
        let slug = resolve_slug(input.slug, title)?;

        if let Some(parent_id) = input.parent_id {
            match self.get_from_id(parent_id)? {
                Some(parent) if parent.collection_id() == collection_id => (),
                _ => {
                    warn!(
                        "Parent document ID {} is not in collection ID {}",
                        parent_id, collection_id,
                    );

                    return Err(Error::DocumentNotFound);
                }
            }
        }

        let content = match template {
            Some(template) if input.content.trim().is_empty() => template.content(),
            _ => input.content,
        };

        let excerpt = pick_excerpt(input.excerpt, content);
        let order_index = self.next_index(collection_id, input.parent_id)?;

        info!(
            "Creating document '{}' in collection ID {} at position {}",
            slug, collection_id, order_index,
        );

        let timestamp = now();
        let model = NewDocument {
            collection_id,
            parent_id: input.parent_id,
            title,
            slug: &slug,
            content,
            excerpt: excerpt.as_deref(),
            icon: non_empty(input.icon),
            order_index,
            is_published: false,
            template: template.map(|template| template.name()),
            version: Document::FIRST_VERSION,
            created_by: author,
            created_at: timestamp,
            updated_at: timestamp,
        };

        let document = diesel::insert_into(documents::table)
            .values(&model)
            .get_result::<Document>(self.conn)
            .map_err(|error| Error::on_conflict(error, Error::DocumentExists))?;

        self.append_version(&document, author, DocumentVersion::INITIAL_SUMMARY)?;
        Ok(document)
    }

    /// Records the document's current state as a history entry.
    fn append_version(
        &mut self,
        document: &Document,
        author: UserId,
        summary: &str,
    ) -> Result<DocumentVersion> {
        debug!(
            "Appending version {} of document ID {} ('{}')",
            document.version(),
            document.id(),
            summary,
        );

        let model = NewVersion {
            document_id: document.id(),
            version: document.version(),
            title: document.title(),
            content: document.content(),
            created_by: author,
            created_at: document.updated_at(),
            change_summary: Some(summary),
        };

        let version = diesel::insert_into(document_versions::table)
            .values(&model)
            .get_result::<DocumentVersion>(self.conn)?;

        Ok(version)
    }

    /// Saves new content if the document is still at `edit.expected_version`,
    /// bumping the version and appending a history entry.
    /// Must be called inside a transaction.
    pub fn save(&mut self, id: DocumentId, author: UserId, edit: DocumentEdit, summary: &str) -> Result<Document> {
        let title = require_text(edit.title, "Title cannot be empty")?;
        let excerpt = pick_excerpt(edit.excerpt, edit.content);
        let version = match edit.expected_version.checked_add(1) {
            Some(version) => version,
            None => return self.stale_save(id, edit.expected_version),
        };

        let model = SaveDocument {
            title,
            content: edit.content,
            excerpt: excerpt.as_deref(),
            version,
            updated_by: Some(author),
            updated_at: now(),
        };

        info!(
            "Saving document ID {} from version {} as user ID {}",
            id, edit.expected_version, author,
        );

        let updated = diesel::update(
            documents::table
                .filter(documents::document_id.eq(id))
                .filter(documents::version.eq(edit.expected_version)),
        )
        .set(&model)
        .get_result::<Document>(self.conn)
        .optional()?;

        let document = match updated {
            Some(document) => document,
            None => return self.stale_save(id, edit.expected_version),
        };

        self.append_version(&document, author, summary)?;
        Ok(document)
    }

    fn stale_save<T>(&mut self, id: DocumentId, expected: i32) -> Result<T> {
        let current = self.get_from_id(id)?.ok_or(Error::DocumentNotFound)?;

        warn!(
            "Rejecting stale save of document ID {}: expected version {}, found {}",
            id,
            expected,
            current.version(),
        );

        Err(Error::VersionConflict {
            expected,
            actual: current.version(),
        })
    }

    /// Publishes or unpublishes a document.
    /// `published_at` is kept across repeated publishes and cleared on unpublish.
    pub fn set_published(&mut self, id: DocumentId, published: bool) -> Result<Document> {
        let document = self.get_from_id(id)?.ok_or(Error::DocumentNotFound)?;
        let published_at = if published {
            document.published_at().or_else(|| Some(now()))
        } else {
            None
        };

        info!(
            "Marking document ID {} as {}",
            id,
            if published { "published" } else { "draft" },
        );

        let document = diesel::update(documents::table.filter(documents::document_id.eq(id)))
            .set((
                documents::is_published.eq(published),
                documents::published_at.eq(published_at),
            ))
            .get_result::<Document>(self.conn)?;

        Ok(document)
    }

    pub fn get_from_id(&mut self, id: DocumentId) -> Result<Option<Document>> {
        debug!("Getting document for ID {}", id);

        let document = documents::table
            .filter(documents::document_id.eq(id))
            .first::<Document>(self.conn)
            .optional()?;

        Ok(document)
    }

    /// Finds a document by slug anywhere in a workspace.
    /// If several collections hold the slug, the earliest collection wins.
    pub fn get_from_slugs(&mut self, workspace_slug: &str, slug: &str) -> Result<Option<Document>> {
        debug!("Getting document '{}' in workspace '{}'", slug, workspace_slug);

        let document = documents::table
            .inner_join(collections::table.inner_join(workspaces::table))
            .filter(workspaces::slug.eq(workspace_slug))
            .filter(documents::slug.eq(slug))
            .order_by((collections::order_index.asc(), collections::collection_id.asc()))
            .select(documents::all_columns)
            .first::<Document>(self.conn)
            .optional()?;

        Ok(document)
    }

    /// Gets the workspace a document lives in.
    pub fn workspace_of(&mut self, document: &Document) -> Result<Workspace> {
        let workspace = collections::table
            .inner_join(workspaces::table)
            .filter(collections::collection_id.eq(document.collection_id()))
            .select(workspaces::all_columns)
            .first::<Workspace>(self.conn)?;

        Ok(workspace)
    }

    /// Lists every document in a collection by position.
    pub fn list(&mut self, collection_id: CollectionId) -> Result<Vec<Document>> {
        debug!("Listing documents in collection ID {}", collection_id);

        let documents = documents::table
            .filter(documents::collection_id.eq(collection_id))
            .order_by((documents::order_index.asc(), documents::document_id.asc()))
            .load::<Document>(self.conn)?;

        Ok(documents)
    }

    /// Lists the top-level documents of a collection by position.
    pub fn list_roots(&mut self, collection_id: CollectionId) -> Result<Vec<Document>> {
        debug!("Listing root documents in collection ID {}", collection_id);

        let documents = documents::table
            .filter(documents::collection_id.eq(collection_id))
            .filter(documents::parent_id.is_null())
            .order_by((documents::order_index.asc(), documents::document_id.asc()))
            .load::<Document>(self.conn)?;

        Ok(documents)
    }

    pub fn list_children(&mut self, parent_id: DocumentId) -> Result<Vec<Document>> {
        debug!("Listing children of document ID {}", parent_id);

        let documents = documents::table
            .filter(documents::parent_id.eq(parent_id))
            .order_by((documents::order_index.asc(), documents::document_id.asc()))
            .load::<Document>(self.conn)?;

        Ok(documents)
    }

    /// Lists a document's history, newest first.
    pub fn versions(&mut self, id: DocumentId) -> Result<Vec<DocumentVersion>> {
        debug!("Listing versions of document ID {}", id);

        let versions = document_versions::table
            .filter(document_versions::document_id.eq(id))
            .order_by(document_versions::version.desc())
            .load::<DocumentVersion>(self.conn)?;

        Ok(versions)
    }

    pub fn version(&mut self, id: DocumentId, version: i32) -> Result<Option<DocumentVersion>> {
        debug!("Getting version {} of document ID {}", version, id);

        let version = document_versions::table
            .filter(document_versions::document_id.eq(id))
            .filter(document_versions::version.eq(version))
            .first::<DocumentVersion>(self.conn)
            .optional()?;

        Ok(version)
    }
}
