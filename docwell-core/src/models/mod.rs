/*
 * models/mod.rs
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

mod collection;
mod comment;
mod document;
mod page;
mod space;
mod team;
mod template;
mod user;
mod version;
mod view;
mod workspace;

mod prelude {
    pub use crate::roles::Role;
    pub use crate::types::*;
    pub use chrono::prelude::*;
    pub use diesel::prelude::*;
    pub use ref_map::*;
}

pub use self::collection::Collection;
pub use self::comment::{Comment, CommentWithAuthor};
pub use self::document::Document;
pub use self::page::Page;
pub use self::space::Space;
pub use self::team::{Team, TeamMember, TeamMemberWithUser};
pub use self::template::Template;
pub use self::user::User;
pub use self::version::DocumentVersion;
pub use self::view::PageView;
pub use self::workspace::{Theme, Workspace};
