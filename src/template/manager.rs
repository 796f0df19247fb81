/*
 * template/manager.rs
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

use super::models::{NewTemplate, NewTemplateInput};
use crate::manager_prelude::*;
use crate::schema::templates;

make_manager!(TemplateManager, "template manager");

impl TemplateManager<'_> {
    /// Adds a template. A new default template replaces the previous default.
    /// Must be called inside a transaction.
    pub fn create(&mut self, workspace_id: WorkspaceId, input: NewTemplateInput) -> Result<Template> {
        let name = require_text(input.name, "Template name cannot be empty")?;

        info!("Creating template '{}' in workspace ID {}", name, workspace_id);

        if input.is_default {
            let cleared = diesel::update(
                templates::table
                    .filter(templates::workspace_id.eq(workspace_id))
                    .filter(templates::is_default.eq(true)),
            )
            .set(templates::is_default.eq(false))
            .execute(self.conn)?;

            debug!("Cleared default flag on {} templates", cleared);
        }

        let model = NewTemplate {
            workspace_id,
            name,
            description: non_empty(input.description),
            content: input.content,
            icon: non_empty(input.icon),
            is_default: input.is_default,
            created_at: now(),
        };

        let template = diesel::insert_into(templates::table)
            .values(&model)
            .get_result::<Template>(self.conn)?;

        Ok(template)
    }

    pub fn get_from_id(&mut self, id: TemplateId) -> Result<Option<Template>> {
        debug!("Getting template for ID {}", id);

        let template = templates::table
            .filter(templates::template_id.eq(id))
            .first::<Template>(self.conn)
            .optional()?;

        Ok(template)
    }

    /// Lists a workspace's templates, default first, then by name.
    pub fn list(&mut self, workspace_id: WorkspaceId) -> Result<Vec<Template>> {
        debug!("Listing templates in workspace ID {}", workspace_id);

        let templates = templates::table
            .filter(templates::workspace_id.eq(workspace_id))
            .order_by((
                templates::is_default.desc(),
                templates::name.asc(),
                templates::template_id.asc(),
            ))
            .load::<Template>(self.conn)?;

        Ok(templates)
    }
}
