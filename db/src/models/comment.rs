use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A comment left on a post. `name` and `avatar` are copied from the author
/// at creation time so listings never join against `users`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "comments")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    #[serde(rename = "post")]
    pub post_id: i64,
    #[serde(rename = "user")]
    pub user_id: i64,

    pub name: String,
    pub avatar: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_delete = "Cascade"
    )]
    Post,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        post_id: i64,
        user_id: i64,
        content: &str,
        name: &str,
        avatar: &str,
    ) -> Result<Model, DbErr> {
        let comment = ActiveModel {
            post_id: Set(post_id),
            user_id: Set(user_id),
            content: Set(content.to_owned()),
            name: Set(name.to_owned()),
            avatar: Set(avatar.to_owned()),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        comment.insert(db).await
    }

    /// Every comment, newest first. Rows sharing a timestamp fall back to
    /// insertion order, latest first.
    pub async fn find_all_newest_first(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(db)
            .await
    }
}
