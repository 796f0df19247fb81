/*
 * macros.rs
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

macro_rules! make_id_type {
    ($module:ident, $name:tt) => {
        mod $module {
            use diesel::backend::Backend;
            use diesel::deserialize::{self, FromSql, FromSqlRow};
            use diesel::expression::AsExpression;
            use diesel::serialize::{self, Output, ToSql};
            use diesel::sql_types::BigInt;
            use std::borrow::Borrow;
            use std::fmt::{self, Display};

            #[derive(
                Serialize,
                Deserialize,
                AsExpression,
                FromSqlRow,
                Debug,
                Copy,
                Clone,
                Hash,
                PartialOrd,
                Ord,
                PartialEq,
                Eq,
            )]
            #[diesel(sql_type = BigInt)]
            pub struct $name(i64);

            impl $name {
                #[inline]
                pub fn to_i64(self) -> i64 {
                    self.0
                }

                #[inline]
                pub fn from_raw(value: i64) -> Self {
                    debug!("Creating raw {} with value {}", stringify!($name), value);

                    $name(value)
                }
            }

            impl From<$name> for i64 {
                #[inline]
                fn from(id: $name) -> i64 {
                    id.0
                }
            }

            impl AsRef<i64> for $name {
                #[inline]
                fn as_ref(&self) -> &i64 {
                    &self.0
                }
            }

            impl Borrow<i64> for $name {
                #[inline]
                fn borrow(&self) -> &i64 {
                    &self.0
                }
            }

            impl Display for $name {
                #[inline]
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl<DB> FromSql<BigInt, DB> for $name
            where
                DB: Backend,
                i64: FromSql<BigInt, DB>,
            {
                #[inline]
                fn from_sql(bytes: DB::RawValue<'_>) -> deserialize::Result<Self> {
                    let id = <i64 as FromSql<BigInt, DB>>::from_sql(bytes)?;
                    Ok($name(id))
                }
            }

            impl<DB> ToSql<BigInt, DB> for $name
            where
                DB: Backend,
                i64: ToSql<BigInt, DB>,
            {
                #[inline]
                fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, DB>) -> serialize::Result {
                    <i64 as ToSql<BigInt, DB>>::to_sql(&self.0, out)
                }
            }
        }

        pub use self::$module::$name;
    };
}

// Closed string enums stored in a Text column.
// Unknown values are rejected when read back.
macro_rules! make_text_enum {
    ($module:ident, $name:tt, $error:ident, { $($variant:ident => $value:literal,)+ }) => {
        mod $module {
            use crate::Error;
            use diesel::backend::Backend;
            use diesel::deserialize::{self, FromSql};
            use diesel::serialize::{self, Output, ToSql};
            use diesel::sql_types::Text;
            use std::fmt::{self, Display};
            use std::str::FromStr;

            impl super::$name {
                pub const ALL: &'static [super::$name] = &[$(super::$name::$variant,)+];

                /// The lowercase name stored in the database.
                /// Cannot change without a migration.
                pub fn fixed_name(self) -> &'static str {
                    match self {
                        $(super::$name::$variant => $value,)+
                    }
                }
            }

            impl FromStr for super::$name {
                type Err = Error;

                fn from_str(value: &str) -> Result<Self, Error> {
                    let lowercase = value.trim().to_ascii_lowercase();

                    match lowercase.as_str() {
                        $($value => Ok(super::$name::$variant),)+
                        _ => Err(Error::$error(value.to_string())),
                    }
                }
            }

            impl Display for super::$name {
                #[inline]
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str(self.fixed_name())
                }
            }

            impl<DB> FromSql<Text, DB> for super::$name
            where
                DB: Backend,
                String: FromSql<Text, DB>,
            {
                fn from_sql(bytes: DB::RawValue<'_>) -> deserialize::Result<Self> {
                    let value = <String as FromSql<Text, DB>>::from_sql(bytes)?;
                    let parsed = value.parse::<super::$name>()?;
                    Ok(parsed)
                }
            }

            impl<DB> ToSql<Text, DB> for super::$name
            where
                DB: Backend,
                str: ToSql<Text, DB>,
            {
                fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, DB>) -> serialize::Result {
                    <str as ToSql<Text, DB>>::to_sql(self.fixed_name(), out)
                }
            }
        }
    };
}
