//! The Person entity: one row in the `person` table.

use serde::{Deserialize, Serialize};

/// Field names are PascalCase on the wire (`{"Id":1,"Name":"Ana"}`).
/// `id` is a surrogate key assigned by the store on insert and immutable
/// afterwards; clients may omit it (or send 0) when creating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Person {
    #[serde(default)]
    pub id: i32,
    pub name: String,
}
