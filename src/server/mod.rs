/*
 * server/mod.rs
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

mod access;
mod collection;
mod comment;
mod document;
mod member;
mod page;
mod space;
mod team;
mod template;
mod user;
mod view;
mod workspace;

use crate::manager_prelude::*;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{Mutex, MutexGuard};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(Debug, Clone)]
pub struct Config<'a> {
    /// Path to the SQLite database file, or `:memory:`.
    pub database_url: &'a str,
}

pub struct Server {
    conn: Mutex<SqliteConnection>,
}

impl Server {
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating docwell::Server, opening database '{}'", config.database_url);

        let mut conn = match SqliteConnection::establish(config.database_url) {
            Ok(conn) => conn,
            Err(error) => {
                error!("Error establishing SQLite connection: {}", error);

                return Err(Error::DatabaseConnection(error));
            }
        };

        diesel::sql_query("PRAGMA foreign_keys = ON").execute(&mut conn)?;

        match conn.run_pending_migrations(MIGRATIONS) {
            Ok(applied) => {
                for version in applied {
                    info!("Applied migration {}", version);
                }
            }
            Err(error) => {
                error!("Error running database migrations: {}", error);

                return Err(Error::Migration(error.to_string()));
            }
        }

        Ok(Server {
            conn: Mutex::new(conn),
        })
    }

    /* Helper methods */

    #[inline]
    fn conn(&self) -> MutexGuard<'_, SqliteConnection> {
        trace!("Acquiring database connection");

        self.conn.lock()
    }

    /// Runs `f` inside a transaction, rolling back if it returns an error.
    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T>,
    {
        let mut conn = self.conn();

        conn.transaction::<T, Error, _>(f)
    }
}

impl Debug for Server {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("docwell::Server")
            .field("conn", &"SqliteConnection { .. }")
            .finish()
    }
}
