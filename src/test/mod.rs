/*
 * test/mod.rs
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

extern crate color_backtrace;
extern crate tempfile;

mod comment;
mod factory;
mod member;
mod page;
mod persistence;
mod team;
mod user;
mod workspace;

mod prelude {
    pub use super::factory::*;
    pub use super::{create_server, run};
    pub use crate::prelude::*;
    pub use either::*;
}

use crate::prelude::*;

pub fn create_server() -> Server {
    color_backtrace::install();

    let config = Config {
        database_url: ":memory:",
    };

    Server::new(config).expect("Unable to create docwell server")
}

/// Runs a test against a fresh in-memory database.
pub fn run<F>(f: F)
where
    F: FnOnce(&Server),
{
    let server = create_server();
    f(&server);
}
