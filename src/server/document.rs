/*
 * server/document.rs
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

use super::access::{require_permission, require_visible, workspace_visibility};
use super::Server;
use crate::collection::CollectionManager;
use crate::document::{DocumentEdit, DocumentManager, NewDocumentInput};
use crate::manager_prelude::*;
use crate::template::TemplateManager;
use crate::workspace::WorkspaceManager;
use docwell_core::markdown::{self, Heading};
use either::*;

impl Server {
    /// Creates a document at version 1, recording its first history entry.
    /// Requires the editor role.
    pub fn create_document(
        &self,
        actor: UserId,
        workspace_slug: &str,
        collection_slug: &str,
        input: NewDocumentInput,
    ) -> Result<Document> {
        self.transaction(|conn| {
            let workspace = WorkspaceManager::new(conn)
                .get_from_slug(workspace_slug)?
                .ok_or(Error::WorkspaceNotFound)?;

            require_permission(conn, workspace.team_id(), actor, Permission::EditContent)?;

            let collection = CollectionManager::new(conn)
                .get_from_slug(workspace.id(), collection_slug)?
                .ok_or(Error::CollectionNotFound)?;

            let template = match input.template_id {
                Some(template_id) => match TemplateManager::new(conn).get_from_id(template_id)? {
                    Some(template) if template.workspace_id() == workspace.id() => Some(template),
                    _ => return Err(Error::TemplateNotFound),
                },
                None => None,
            };

            DocumentManager::new(conn).create(collection.id(), actor, input, template.as_ref())
        })
    }

    /// Gets a document either by ID or by its workspace and document slugs.
    ///
    /// Team members of the owning workspace see drafts. Anyone else, including
    /// an anonymous `reader`, only sees published documents of a public workspace.
    pub fn get_document(
        &self,
        reader: Option<UserId>,
        reference: Either<DocumentId, (&str, &str)>,
    ) -> Result<Document> {
        self.transaction(|conn| {
            let document = match reference {
                Left(id) => DocumentManager::new(conn).get_from_id(id)?,
                Right((workspace_slug, slug)) => {
                    let workspace = WorkspaceManager::new(conn)
                        .get_from_slug(workspace_slug)?
                        .ok_or(Error::WorkspaceNotFound)?;

                    workspace_visibility(conn, &workspace, reader)?;
                    DocumentManager::new(conn).get_from_slugs(workspace_slug, slug)?
                }
            };

            let document = document.ok_or(Error::DocumentNotFound)?;
            require_visible(conn, &document, reader)?;
            Ok(document)
        })
    }

    /// Lists the documents of a collection visible to `reader`, ordered by `order_index`.
    pub fn list_documents(&self, reader: Option<UserId>, collection_id: CollectionId) -> Result<Vec<Document>> {
        self.transaction(|conn| {
            let collection = CollectionManager::new(conn)
                .get_from_id(collection_id)?
                .ok_or(Error::CollectionNotFound)?;

            let workspace = WorkspaceManager::new(conn)
                .get_from_id(collection.workspace_id())?
                .ok_or(Error::WorkspaceNotFound)?;

            let visibility = workspace_visibility(conn, &workspace, reader)?;
            let mut documents = DocumentManager::new(conn).list(collection_id)?;
            documents.retain(|document| visibility.shows(document));
            Ok(documents)
        })
    }

    /// Lists the documents nested directly under the given one.
    pub fn document_children(&self, reader: Option<UserId>, id: DocumentId) -> Result<Vec<Document>> {
        self.transaction(|conn| {
            let parent = DocumentManager::new(conn)
                .get_from_id(id)?
                .ok_or(Error::DocumentNotFound)?;

            let visibility = require_visible(conn, &parent, reader)?;
            let mut children = DocumentManager::new(conn).list_children(id)?;
            children.retain(|document| visibility.shows(document));
            Ok(children)
        })
    }

    /// Saves an edit, producing the next version.
    ///
    /// The save only applies if the document is still at `edit.expected_version`.
    /// Otherwise it fails with `VersionConflict` and nothing is written.
    pub fn save_document(&self, actor: UserId, id: DocumentId, edit: DocumentEdit) -> Result<Document> {
        self.transaction(|conn| {
            editable_document(conn, actor, id)?;

            let summary = DocumentVersion::update_summary(edit.expected_version.saturating_add(1));
            DocumentManager::new(conn).save(id, actor, edit, &summary)
        })
    }

    /// Publishes or unpublishes a document. Requires the editor role.
    pub fn set_document_published(
        &self,
        actor: UserId,
        id: DocumentId,
        published: bool,
    ) -> Result<Document> {
        self.transaction(|conn| {
            editable_document(conn, actor, id)?;
            DocumentManager::new(conn).set_published(id, published)
        })
    }

    /// Lists a document's history, newest first. Requires team membership.
    pub fn list_versions(&self, actor: UserId, id: DocumentId) -> Result<Vec<DocumentVersion>> {
        self.transaction(|conn| {
            member_document(conn, actor, id)?;
            DocumentManager::new(conn).versions(id)
        })
    }

    pub fn get_version(&self, actor: UserId, id: DocumentId, version: i32) -> Result<DocumentVersion> {
        self.transaction(|conn| {
            member_document(conn, actor, id)?;

            DocumentManager::new(conn)
                .version(id, version)?
                .ok_or(Error::VersionNotFound)
        })
    }

    /// Restores the title and content of an earlier version as a new version.
    ///
    /// This is a save like any other: `expected_version` must match the
    /// document's current version, and history is only ever appended to.
    pub fn restore_version(
        &self,
        actor: UserId,
        id: DocumentId,
        expected_version: i32,
        version: i32,
    ) -> Result<Document> {
        self.transaction(|conn| {
            editable_document(conn, actor, id)?;

            let mut documents = DocumentManager::new(conn);
            let old = documents
                .version(id, version)?
                .ok_or(Error::VersionNotFound)?;

            let edit = DocumentEdit {
                expected_version,
                title: old.title(),
                content: old.content(),
                excerpt: None,
            };

            let summary = DocumentVersion::restore_summary(version);
            documents.save(id, actor, edit, &summary)
        })
    }

    /// Headings of a document, for its table of contents.
    pub fn document_outline(&self, reader: Option<UserId>, id: DocumentId) -> Result<Vec<Heading>> {
        let document = self.get_document(reader, Left(id))?;

        Ok(markdown::outline(document.content()))
    }

    /* Public reading */

    /// Gets a published document from a public workspace.
    /// Anything else is reported as not found.
    pub fn get_public_document(&self, workspace_slug: &str, slug: &str) -> Result<Document> {
        self.get_document(None, Right((workspace_slug, slug)))
    }

    /// Renders a public document to HTML.
    pub fn render_document(&self, workspace_slug: &str, slug: &str) -> Result<String> {
        let document = self.get_public_document(workspace_slug, slug)?;

        Ok(markdown::render(document.content()))
    }
}

/// Loads a document, checking the actor may edit documents in its workspace.
fn editable_document(conn: &mut SqliteConnection, actor: UserId, id: DocumentId) -> Result<Document> {
    let mut documents = DocumentManager::new(conn);
    let document = documents.get_from_id(id)?.ok_or(Error::DocumentNotFound)?;
    let workspace = documents.workspace_of(&document)?;

    require_permission(conn, workspace.team_id(), actor, Permission::EditContent)?;
    Ok(document)
}

/// Loads a document, checking the actor belongs to the team owning it.
fn member_document(conn: &mut SqliteConnection, actor: UserId, id: DocumentId) -> Result<Document> {
    let mut documents = DocumentManager::new(conn);
    let document = documents.get_from_id(id)?.ok_or(Error::DocumentNotFound)?;
    let workspace = documents.workspace_of(&document)?;

    require_permission(conn, workspace.team_id(), actor, Permission::ViewContent)?;
    Ok(document)
}
