/*
 * workspace/models.rs
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

use crate::schema::workspaces;
use chrono::NaiveDateTime;
use docwell_core::models::Theme;
use docwell_core::types::TeamId;

/// Fields supplied when creating a workspace.
/// An absent `slug` is derived from the name.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct NewWorkspaceInput<'a> {
    pub name: &'a str,
    pub slug: Option<&'a str>,
    pub description: Option<&'a str>,
    pub icon: Option<&'a str>,
    pub is_public: bool,
    pub theme: Theme,
}

/// Settings changes. `Some(None)` clears an optional field.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct WorkspaceChanges<'a> {
    pub name: Option<&'a str>,
    pub description: Option<Option<&'a str>>,
    pub icon: Option<Option<&'a str>>,
    pub is_public: Option<bool>,
    pub theme: Option<Theme>,
    pub custom_domain: Option<Option<&'a str>>,
}

impl WorkspaceChanges<'_> {
    pub fn has_changes(&self) -> bool {
        self.name.is_some()
            || self.description.is_some()
            || self.icon.is_some()
            || self.is_public.is_some()
            || self.theme.is_some()
            || self.custom_domain.is_some()
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = workspaces)]
pub struct NewWorkspace<'a> {
    pub team_id: TeamId,
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub icon: Option<&'a str>,
    pub is_public: bool,
    pub theme: Theme,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = workspaces)]
pub struct UpdateWorkspace<'a> {
    pub name: Option<&'a str>,
    pub description: Option<Option<&'a str>>,
    pub icon: Option<Option<&'a str>>,
    pub is_public: Option<bool>,
    pub theme: Option<Theme>,
    pub custom_domain: Option<Option<&'a str>>,
    pub updated_at: NaiveDateTime,
}
