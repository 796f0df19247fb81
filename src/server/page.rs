/*
 * server/page.rs
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

use super::access::require_space_owner;
use super::Server;
use crate::manager_prelude::*;
use crate::page::{NewPageInput, PageChanges, PageManager};
use crate::space::SpaceManager;
use docwell_core::markdown;

impl Server {
    /// Adds a page to the end of its sibling list.
    /// Only the space's owner may add pages.
    pub fn create_page(&self, actor: UserId, space_slug: &str, input: NewPageInput) -> Result<Page> {
        self.transaction(|conn| {
            let space = SpaceManager::new(conn)
                .get_from_slug(space_slug)?
                .ok_or(Error::SpaceNotFound)?;

            require_space_owner(&space, actor)?;
            PageManager::new(conn).create(space.id(), actor, input)
        })
    }

    pub fn get_page(&self, space_slug: &str, page_slug: &str) -> Result<Page> {
        self.transaction(|conn| {
            let space = SpaceManager::new(conn)
                .get_from_slug(space_slug)?
                .ok_or(Error::SpaceNotFound)?;

            PageManager::new(conn)
                .get_from_slug(space.id(), page_slug)?
                .ok_or(Error::PageNotFound)
        })
    }

    pub fn get_page_by_id(&self, id: PageId) -> Result<Page> {
        let mut conn = self.conn();

        PageManager::new(&mut conn)
            .get_from_id(id)?
            .ok_or(Error::PageNotFound)
    }

    /// Lists every page of a space, ordered by `order_index`.
    pub fn list_pages(&self, space_id: SpaceId) -> Result<Vec<Page>> {
        let mut conn = self.conn();

        PageManager::new(&mut conn).list(space_id)
    }

    /// Lists the top-level pages of a space for its navigation tree.
    pub fn page_tree(&self, space_id: SpaceId) -> Result<Vec<Page>> {
        let mut conn = self.conn();

        PageManager::new(&mut conn).list_roots(space_id)
    }

    pub fn edit_page(&self, actor: UserId, id: PageId, changes: PageChanges) -> Result<Page> {
        self.transaction(|conn| {
            let page = owned_page(conn, actor, id)?;

            if !changes.has_changes() {
                debug!("No changes to page ID {}", id);
                return Ok(page);
            }

            PageManager::new(conn).edit(id, changes)
        })
    }

    /// Deletes a page. Any child pages are moved to the top level.
    pub fn delete_page(&self, actor: UserId, id: PageId) -> Result<()> {
        self.transaction(|conn| {
            owned_page(conn, actor, id)?;

            if PageManager::new(conn).delete(id)? {
                Ok(())
            } else {
                Err(Error::PageNotFound)
            }
        })
    }

    /* Public reading */

    /// Lists the published pages of a public space.
    pub fn list_published_pages(&self, space_slug: &str) -> Result<Vec<Page>> {
        let space = self.get_public_space(space_slug)?;
        let mut conn = self.conn();

        PageManager::new(&mut conn).list_published(space.id())
    }

    /// Gets a published page of a public space.
    /// Drafts and pages of private spaces are reported as not found.
    pub fn get_published_page(&self, space_slug: &str, page_slug: &str) -> Result<Page> {
        let space = self.get_public_space(space_slug)?;
        let mut conn = self.conn();

        match PageManager::new(&mut conn).get_from_slug(space.id(), page_slug)? {
            Some(page) if page.is_published() => Ok(page),
            _ => Err(Error::PageNotFound),
        }
    }

    /// Renders a published page to HTML.
    pub fn render_published_page(&self, space_slug: &str, page_slug: &str) -> Result<String> {
        let page = self.get_published_page(space_slug, page_slug)?;

        Ok(markdown::render(page.content()))
    }
}

fn owned_page(conn: &mut SqliteConnection, actor: UserId, id: PageId) -> Result<Page> {
    let page = PageManager::new(conn)
        .get_from_id(id)?
        .ok_or(Error::PageNotFound)?;

    let space = SpaceManager::new(conn)
        .get_from_id(page.space_id())?
        .ok_or(Error::SpaceNotFound)?;

    require_space_owner(&space, actor)?;
    Ok(page)
}
