use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use sea_orm::{DerivePartialModel, FromQueryResult, Set};
use serde::Serialize;

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name, copied onto comments.
    pub name: String,
    /// User's unique email address.
    pub email: String,
    /// Avatar URL, copied onto comments.
    pub avatar: String,
    /// Argon2 password hash. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comment::Entity")]
    Comments,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// The public face of a user: what a comment needs from its author.
/// Selecting through this model keeps `password_hash` out of the query.
#[derive(Clone, Debug, PartialEq, DerivePartialModel, FromQueryResult, Serialize)]
#[sea_orm(entity = "Entity")]
pub struct AuthorProfile {
    pub id: i64,
    pub name: String,
    pub avatar: String,
}

impl Model {
    pub async fn create(
        db: &DbConn,
        name: &str,
        email: &str,
        avatar: &str,
        password: &str,
    ) -> Result<Model, DbErr> {
        let user = ActiveModel {
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            avatar: Set(avatar.to_owned()),
            password_hash: Set(Self::hash_password(password)?),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        user.insert(db).await
    }

    pub async fn find_profile(db: &DbConn, id: i64) -> Result<Option<AuthorProfile>, DbErr> {
        Entity::find_by_id(id)
            .into_partial_model::<AuthorProfile>()
            .one(db)
            .await
    }

    fn hash_password(password: &str) -> Result<String, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DbErr::Custom(format!("Password hashing failed: {e}")))
    }
}
