/*
 * test/persistence.rs
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

use super::prelude::*;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tempfile::tempdir;

#[test]
fn reopen_database() {
    color_backtrace::install();

    let directory = tempdir().expect("Unable to create temp dir");
    let path = directory.path().join("docwell.sqlite3");
    let database_url = path.to_str().expect("Temp path is not UTF-8");

    let space_id = {
        let server = Server::new(Config { database_url }).expect("Unable to create server");
        let owner = create_user(&server, "Alice");
        let space = create_space(&server, &owner, "Persistent", true);
        create_page(&server, &owner, &space, "Home", "# Home\n");

        space.id()
    };

    // Migrations have already run, opening again must not fail
    let server = Server::new(Config { database_url }).expect("Unable to reopen server");

    let space = server.get_space("persistent").expect("Space was not saved");
    assert_eq!(space.id(), space_id);

    let page = server
        .get_published_page("persistent", "home")
        .expect("Page was not saved");
    assert_eq!(page.title(), "Home");
}

#[test]
fn append_only_history() {
    color_backtrace::install();

    let directory = tempdir().expect("Unable to create temp dir");
    let path = directory.path().join("docwell.sqlite3");
    let database_url = path.to_str().expect("Temp path is not UTF-8");

    let server = Server::new(Config { database_url }).expect("Unable to create server");
    let fixture = create_fixture(&server);
    let document = create_document(
        &server,
        &fixture.editor,
        &fixture.workspace,
        &fixture.collection,
        "Audit Log",
        "Nothing happened",
    );

    let mut conn = SqliteConnection::establish(database_url).expect("Unable to open database");

    diesel::sql_query("UPDATE document_versions SET content = 'Something happened'")
        .execute(&mut conn)
        .expect_err("History row was updated");

    diesel::sql_query("DELETE FROM document_versions")
        .execute(&mut conn)
        .expect_err("History row was deleted");

    let versions = server
        .list_versions(fixture.editor.id(), document.id())
        .expect("Unable to list versions");
    assert_eq!(versions.len(), 1);
    assert_eq!(versions[0].content(), "Nothing happened");
}
