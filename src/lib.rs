/*
 * lib.rs
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

#![deny(missing_debug_implementations)]

extern crate chrono;

#[macro_use]
extern crate diesel;
extern crate diesel_migrations;
extern crate docwell_core;
extern crate either;
extern crate libsqlite3_sys;

#[macro_use]
extern crate log;
extern crate parking_lot;

#[macro_use]
extern crate serde;

#[macro_use]
mod macros;

#[cfg(test)]
mod test;

mod collection;
mod comment;
mod document;
mod member;
mod page;
mod schema;
mod server;
mod space;
mod team;
mod template;
mod user;
mod utils;
mod view;
mod workspace;

pub use self::collection::{CollectionOverview, NewCollectionInput};
pub use self::document::{DocumentEdit, NewDocumentInput};
pub use self::page::{NewPageInput, PageChanges};
pub use self::server::{Config, Server};
pub use self::space::{NewSpaceInput, SpaceChanges};
pub use self::template::NewTemplateInput;
pub use self::workspace::{NewWorkspaceInput, WorkspaceChanges};

pub use docwell_core::{markdown, Error, SendableError, StdResult};

pub mod prelude {
    pub use super::{
        CollectionOverview, Config, DocumentEdit, NewCollectionInput, NewDocumentInput,
        NewPageInput, NewSpaceInput, NewTemplateInput, NewWorkspaceInput, PageChanges, Server,
        SpaceChanges, WorkspaceChanges,
    };
    pub use docwell_core::prelude::*;
    pub use docwell_core::Result;
}

mod manager_prelude {
    pub use crate::utils::{next_order_index, non_empty, now, require_text, rows_to_result};
    pub use chrono::prelude::*;
    pub use diesel::prelude::*;
    pub use diesel::sqlite::SqliteConnection;
    pub use docwell_core::prelude::*;
    pub use docwell_core::Result;
    pub use std::fmt::{self, Debug};
}

pub type Result<T> = StdResult<T, Error>;
