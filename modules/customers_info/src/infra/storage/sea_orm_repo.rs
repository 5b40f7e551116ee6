//! SeaORM-backed repository implementation for the domain port.
//!
//! Reads run directly on the pooled connection; each write opens its own
//! transaction, commits on success, and rolls back on any failure (an
//! uncommitted transaction rolls back when dropped), so the storage session
//! is acquired and released around every operation.

use anyhow::Context;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::contract::model::Customer;
use crate::domain::filter::{CustomerFilter, FieldPredicate};
use crate::domain::repo::CustomersRepository;
use crate::infra::storage::entity::{
    ActiveModel as CustomerAM, Column, Entity as CustomerEntity,
};

/// SeaORM repository impl. Holds the shared connection handle.
pub struct SeaOrmCustomersRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomersRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Lower a normalized filter to one conjoined SeaORM condition.
///
/// Exhaustive over the known predicate kinds; there is no fallthrough arm,
/// so an unknown filter field cannot reach this point at all. An empty
/// filter yields a bare `Condition::all()`, which renders with no WHERE
/// clause: every row matches.
///
/// Substring predicates embed the value between `%` markers without
/// escaping, so LIKE metacharacters in a filter value act as wildcards.
fn filter_condition(filter: &CustomerFilter) -> Condition {
    let mut cond = Condition::all();
    for predicate in filter.predicates() {
        cond = cond.add(match predicate {
            FieldPredicate::IdEquals(id) => Column::Id.eq(*id),
            FieldPredicate::FullNameContains(v) => Column::FullName.like(format!("%{v}%")),
            FieldPredicate::LastNameContains(v) => Column::LastName.like(format!("%{v}%")),
            FieldPredicate::EmailContains(v) => Column::Email.like(format!("%{v}%")),
            FieldPredicate::ActiveEquals(flag) => Column::Active.eq(*flag),
        });
    }
    cond
}

fn to_active_model(c: Customer) -> CustomerAM {
    CustomerAM {
        id: Set(c.id),
        full_name: Set(c.full_name),
        last_name: Set(c.last_name),
        email: Set(c.email),
        created_at: Set(c.created_at),
        active: Set(c.active),
    }
}

#[async_trait::async_trait]
impl CustomersRepository for SeaOrmCustomersRepository {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Customer>> {
        let found = CustomerEntity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn email_exists(&self, email: &str) -> anyhow::Result<bool> {
        let count = CustomerEntity::find()
            .filter(Column::Email.eq(email))
            .count(&self.db)
            .await
            .context("email_exists failed")?;
        Ok(count > 0)
    }

    async fn insert(&self, c: Customer) -> anyhow::Result<()> {
        let txn = self.db.begin().await.context("begin failed")?;
        let _ = to_active_model(c)
            .insert(&txn)
            .await
            .context("insert failed")?;
        txn.commit().await.context("commit failed")?;
        Ok(())
    }

    async fn update(&self, c: Customer) -> anyhow::Result<()> {
        let txn = self.db.begin().await.context("begin failed")?;
        let _ = to_active_model(c)
            .update(&txn)
            .await
            .context("update failed")?;
        txn.commit().await.context("commit failed")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let txn = self.db.begin().await.context("begin failed")?;
        let res = CustomerEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .context("delete failed")?;
        txn.commit().await.context("commit failed")?;
        Ok(res.rows_affected > 0)
    }

    async fn list(&self, limit: u32, offset: u32) -> anyhow::Result<Vec<Customer>> {
        let rows = CustomerEntity::find()
            .order_by_asc(Column::CreatedAt)
            .limit(limit as u64)
            .offset(offset as u64)
            .all(&self.db)
            .await
            .context("list failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_filter(&self, filter: &CustomerFilter) -> anyhow::Result<Vec<Customer>> {
        let rows = CustomerEntity::find()
            .filter(filter_condition(filter))
            .all(&self.db)
            .await
            .context("find_by_filter failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
