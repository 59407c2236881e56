use crate::{
    abstract_trait::employee::EmployeeRepositoryTrait,
    domain::response::report::EmployeeInboundOrdersReport,
    model::Employee,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct EmployeeRepository {
    db: ConnectionPool,
}

impl EmployeeRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepositoryTrait for EmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        info!("🔍 Fetching all employees");

        sqlx::query_as::<_, Employee>(
            r#"
            SELECT
                id,
                card_number_id,
                first_name,
                last_name,
                warehouse_id
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch employees: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, RepositoryError> {
        info!("🔍 Fetching employee id={id}");

        sqlx::query_as::<_, Employee>(
            r#"
            SELECT
                id,
                card_number_id,
                first_name,
                last_name,
                warehouse_id
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch employee {id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn card_number_taken(
        &self,
        value: &str,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM employees WHERE card_number_id = $1 AND id <> $2)",
        )
        .bind(value)
        .bind(exclude_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to check card number id: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn create(&self, value: &Employee) -> Result<i32, RepositoryError> {
        info!("🆕 Creating employee");

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO employees (card_number_id, first_name, last_name, warehouse_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&value.card_number_id)
        .bind(&value.first_name)
        .bind(&value.last_name)
        .bind(value.warehouse_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create employee: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Created employee id={id}");
        Ok(id)
    }

    async fn update(&self, value: &Employee) -> Result<bool, RepositoryError> {
        info!("🔄 Updating employee id={}", value.id);

        let result = sqlx::query(
            r#"
            UPDATE employees
            SET
                card_number_id = $2,
                first_name = $3,
                last_name = $4,
                warehouse_id = $5
            WHERE id = $1
            "#,
        )
        .bind(value.id)
        .bind(&value.card_number_id)
        .bind(&value.first_name)
        .bind(&value.last_name)
        .bind(value.warehouse_id)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update employee {}: {e:?}", value.id);
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        info!("🗑️ Deleting employee id={id}");

        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete employee {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn report_inbound_orders(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<EmployeeInboundOrdersReport>, RepositoryError> {
        info!("📊 Counting inbound orders per employee (employee={id:?})");

        sqlx::query_as::<_, EmployeeInboundOrdersReport>(
            r#"
            SELECT
                e.id,
                e.card_number_id,
                e.first_name,
                e.last_name,
                e.warehouse_id,
                COUNT(io.id)::BIGINT AS inbound_orders_count
            FROM employees e
            LEFT JOIN inbound_orders io ON io.employee_id = e.id
            WHERE ($1::INTEGER IS NULL OR e.id = $1)
            GROUP BY e.id, e.card_number_id, e.first_name, e.last_name, e.warehouse_id
            ORDER BY e.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to build inbound orders report: {e:?}");
            RepositoryError::from(e)
        })
    }
}
