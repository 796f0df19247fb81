/*
 * models/workspace.rs
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
use diesel::deserialize::FromSqlRow;
use diesel::expression::AsExpression;
use diesel::sql_types::Text;

#[derive(
    Serialize, Deserialize, AsExpression, FromSqlRow, Debug, Copy, Clone, Hash, PartialEq, Eq,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Default,
    Minimal,
    Modern,
    Classic,
}

make_text_enum!(theme_impl, Theme, InvalidTheme, {
    Default => "default",
    Minimal => "minimal",
    Modern => "modern",
    Classic => "classic",
});

impl Default for Theme {
    #[inline]
    fn default() -> Self {
        Theme::Default
    }
}

#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    workspace_id: WorkspaceId,
    team_id: TeamId,
    name: String,
    slug: String,
    description: Option<String>,
    icon: Option<String>,
    is_public: bool,
    theme: Theme,
    custom_domain: Option<String>,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl Workspace {
    #[inline]
    pub fn id(&self) -> WorkspaceId {
        self.workspace_id
    }

    #[inline]
    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.ref_map(|s| s.as_str())
    }

    #[inline]
    pub fn icon(&self) -> Option<&str> {
        self.icon.ref_map(|s| s.as_str())
    }

    #[inline]
    pub fn is_public(&self) -> bool {
        self.is_public
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[inline]
    pub fn custom_domain(&self) -> Option<&str> {
        self.custom_domain.ref_map(|s| s.as_str())
    }

    #[inline]
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn theme_names() {
        assert_eq!("Modern".parse::<Theme>().unwrap(), Theme::Modern);
        assert_eq!(Theme::default().fixed_name(), "default");
        assert_eq!(Theme::ALL.len(), 4);
        assert!("neon".parse::<Theme>().is_err());
    }
}
