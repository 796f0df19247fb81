/*
 * page/manager.rs
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

use super::models::{NewPage, NewPageInput, PageChanges, UpdatePage};
use crate::manager_prelude::*;
use crate::schema::pages;
use diesel::dsl::max;
use diesel::sqlite::Sqlite;

make_manager!(PageManager, "page manager");

impl PageManager<'_> {
    /// Finds the `order_index` for a new page placed under `parent_id`.
    fn next_index(&mut self, space_id: SpaceId, parent_id: Option<PageId>) -> Result<i32> {
        let query = pages::table
            .filter(pages::space_id.eq(space_id))
            .select(max(pages::order_index))
            .into_boxed::<Sqlite>();

        let query = match parent_id {
            Some(parent_id) => query.filter(pages::parent_id.eq(parent_id)),
            None => query.filter(pages::parent_id.is_null()),
        };

        let max_index = query.get_result::<Option<i32>>(self.conn)?;
        Ok(next_order_index(max_index))
    }

    pub fn create(
        &mut self,
        space_id: SpaceId,
        created_by: UserId,
        input: NewPageInput,
    ) -> Result<Page> {
        let title = require_text(input.title, "Title cannot be empty")?;
        let slug = resolve_slug(input.slug, title)?;

        if let Some(parent_id) = input.parent_id {
            match self.get_from_id(parent_id)? {
                Some(parent) if parent.space_id() == space_id => (),
                _ => {
                    warn!("Parent page ID {} is not in space ID {}", parent_id, space_id);
                    return Err(Error::PageNotFound);
                }
            }
        }

        let order_index = self.next_index(space_id, input.parent_id)?;

        info!(
            "Creating page '{}' in space ID {} at position {}",
            slug, space_id, order_index,
        );

        let timestamp = now();
        let model = NewPage {
            space_id,
            title,
            slug: &slug,
            content: input.content,
            parent_id: input.parent_id,
            order_index,
            is_published: input.is_published,
            created_by,
            created_at: timestamp,
            updated_at: timestamp,
        };

        diesel::insert_into(pages::table)
            .values(&model)
            .get_result::<Page>(self.conn)
            .map_err(|error| Error::on_conflict(error, Error::PageExists))
    }

    pub fn get_from_id(&mut self, id: PageId) -> Result<Option<Page>> {
        debug!("Getting page for ID {}", id);

        let page = pages::table
            .filter(pages::page_id.eq(id))
            .first::<Page>(self.conn)
            .optional()?;

        Ok(page)
    }

    pub fn get_from_slug(&mut self, space_id: SpaceId, slug: &str) -> Result<Option<Page>> {
        debug!("Getting page '{}' in space ID {}", slug, space_id);

        let page = pages::table
            .filter(pages::space_id.eq(space_id))
            .filter(pages::slug.eq(slug))
            .first::<Page>(self.conn)
            .optional()?;

        Ok(page)
    }

    /// Lists all pages in a space by position.
    pub fn list(&mut self, space_id: SpaceId) -> Result<Vec<Page>> {
        debug!("Listing pages in space ID {}", space_id);

        let pages = pages::table
            .filter(pages::space_id.eq(space_id))
            .order_by((pages::order_index.asc(), pages::page_id.asc()))
            .load::<Page>(self.conn)?;

        Ok(pages)
    }

    /// Lists the top-level pages of a space by position.
    pub fn list_roots(&mut self, space_id: SpaceId) -> Result<Vec<Page>> {
        debug!("Listing root pages in space ID {}", space_id);

        let pages = pages::table
            .filter(pages::space_id.eq(space_id))
            .filter(pages::parent_id.is_null())
            .order_by((pages::order_index.asc(), pages::page_id.asc()))
            .load::<Page>(self.conn)?;

        Ok(pages)
    }

    pub fn list_published(&mut self, space_id: SpaceId) -> Result<Vec<Page>> {
        debug!("Listing published pages in space ID {}", space_id);

        let pages = pages::table
            .filter(pages::space_id.eq(space_id))
            .filter(pages::is_published.eq(true))
            .order_by((pages::order_index.asc(), pages::page_id.asc()))
            .load::<Page>(self.conn)?;

        Ok(pages)
    }

    pub fn edit(&mut self, id: PageId, changes: PageChanges) -> Result<Page> {
        let title = match changes.title {
            Some(title) => Some(require_text(title, "Title cannot be empty")?),
            None => None,
        };

        let model = UpdatePage {
            title,
            content: changes.content,
            is_published: changes.is_published,
            updated_at: now(),
        };

        info!("Editing page ID {}, data: {:?}", id, &model);

        diesel::update(pages::table.filter(pages::page_id.eq(id)))
            .set(&model)
            .get_result::<Page>(self.conn)
            .optional()?
            .ok_or(Error::PageNotFound)
    }

    /// Deletes a page. Its children become top-level pages, placed after
    /// the existing ones in their previous order.
    /// Must be called inside a transaction.
    pub fn delete(&mut self, id: PageId) -> Result<bool> {
        info!("Deleting page ID {}", id);

        let page = match self.get_from_id(id)? {
            Some(page) => page,
            None => return Ok(false),
        };

        let children = pages::table
            .filter(pages::parent_id.eq(id))
            .order_by((pages::order_index.asc(), pages::page_id.asc()))
            .load::<Page>(self.conn)?;

        let first_index = self.next_index(page.space_id(), None)?;

        for (order_index, child) in (first_index..).zip(&children) {
            diesel::update(pages::table.filter(pages::page_id.eq(child.id())))
                .set((
                    pages::parent_id.eq(None::<PageId>),
                    pages::order_index.eq(order_index),
                ))
                .execute(self.conn)?;
        }

        debug!("Moved {} child pages to the top level", children.len());

        let rows = diesel::delete(pages::table.filter(pages::page_id.eq(id))).execute(self.conn)?;

        Ok(rows_to_result(rows))
    }
}
