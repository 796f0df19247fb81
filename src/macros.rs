/*
 * macros.rs
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

// Declares a manager borrowing the connection for the duration of one operation.
macro_rules! make_manager {
    ($name:ident, $description:expr) => {
        pub struct $name<'c> {
            conn: &'c mut SqliteConnection,
        }

        impl<'c> $name<'c> {
            #[inline]
            pub fn new(conn: &'c mut SqliteConnection) -> Self {
                trace!("Creating {}", $description);

                $name { conn }
            }
        }

        impl Debug for $name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("conn", &"SqliteConnection { .. }")
                    .finish()
            }
        }
    };
}
