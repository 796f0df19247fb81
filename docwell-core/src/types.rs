/*
 * types.rs
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

make_id_type!(user_id, UserId);
make_id_type!(space_id, SpaceId);
make_id_type!(page_id, PageId);
make_id_type!(team_id, TeamId);
make_id_type!(member_id, MemberId);
make_id_type!(workspace_id, WorkspaceId);
make_id_type!(collection_id, CollectionId);
make_id_type!(document_id, DocumentId);
make_id_type!(version_id, VersionId);
make_id_type!(comment_id, CommentId);
make_id_type!(template_id, TemplateId);
make_id_type!(view_id, ViewId);
