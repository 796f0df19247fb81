/*
 * schema.rs
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

table! {
    collections (collection_id) {
        collection_id -> BigInt,
        workspace_id -> BigInt,
        name -> Text,
        slug -> Text,
        description -> Nullable<Text>,
        icon -> Nullable<Text>,
        order_index -> Integer,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    comments (comment_id) {
        comment_id -> BigInt,
        document_id -> BigInt,
        user_id -> BigInt,
        content -> Text,
        resolved -> Bool,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    document_versions (version_id) {
        version_id -> BigInt,
        document_id -> BigInt,
        version -> Integer,
        title -> Text,
        content -> Text,
        created_by -> BigInt,
        created_at -> Timestamp,
        change_summary -> Nullable<Text>,
    }
}

table! {
    documents (document_id) {
        document_id -> BigInt,
        collection_id -> BigInt,
        parent_id -> Nullable<BigInt>,
        title -> Text,
        slug -> Text,
        content -> Text,
        excerpt -> Nullable<Text>,
        icon -> Nullable<Text>,
        order_index -> Integer,
        is_published -> Bool,
        template -> Nullable<Text>,
        version -> Integer,
        created_by -> BigInt,
        updated_by -> Nullable<BigInt>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
        published_at -> Nullable<Timestamp>,
    }
}

table! {
    page_views (view_id) {
        view_id -> BigInt,
        document_id -> BigInt,
        visitor_id -> Text,
        user_id -> Nullable<BigInt>,
        viewed_at -> Timestamp,
    }
}

table! {
    pages (page_id) {
        page_id -> BigInt,
        space_id -> BigInt,
        title -> Text,
        slug -> Text,
        content -> Text,
        parent_id -> Nullable<BigInt>,
        order_index -> Integer,
        is_published -> Bool,
        created_by -> BigInt,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    spaces (space_id) {
        space_id -> BigInt,
        name -> Text,
        slug -> Text,
        description -> Nullable<Text>,
        owner_id -> BigInt,
        is_public -> Bool,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    team_members (member_id) {
        member_id -> BigInt,
        team_id -> BigInt,
        user_id -> BigInt,
        role -> Text,
        created_at -> Timestamp,
    }
}

table! {
    teams (team_id) {
        team_id -> BigInt,
        name -> Text,
        slug -> Text,
        avatar_url -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    templates (template_id) {
        template_id -> BigInt,
        workspace_id -> BigInt,
        name -> Text,
        description -> Nullable<Text>,
        content -> Text,
        icon -> Nullable<Text>,
        is_default -> Bool,
        created_at -> Timestamp,
    }
}

table! {
    users (user_id) {
        user_id -> BigInt,
        email -> Text,
        name -> Text,
        created_at -> Timestamp,
    }
}

table! {
    workspaces (workspace_id) {
        workspace_id -> BigInt,
        team_id -> BigInt,
        name -> Text,
        slug -> Text,
        description -> Nullable<Text>,
        icon -> Nullable<Text>,
        is_public -> Bool,
        theme -> Text,
        custom_domain -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

joinable!(collections -> workspaces (workspace_id));
joinable!(comments -> documents (document_id));
joinable!(comments -> users (user_id));
joinable!(document_versions -> documents (document_id));
joinable!(documents -> collections (collection_id));
joinable!(page_views -> documents (document_id));
joinable!(pages -> spaces (space_id));
joinable!(spaces -> users (owner_id));
joinable!(team_members -> teams (team_id));
joinable!(team_members -> users (user_id));
joinable!(templates -> workspaces (workspace_id));
joinable!(workspaces -> teams (team_id));

allow_tables_to_appear_in_same_query!(
    collections,
    comments,
    document_versions,
    documents,
    page_views,
    pages,
    spaces,
    team_members,
    teams,
    templates,
    users,
    workspaces,
);
