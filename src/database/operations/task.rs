use async_trait::async_trait;
use sqlx::Executor;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::database::models::task::TaskEntity;

/// 任务存储抽象，请求处理只依赖这个接口
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// 查询全部任务，顺序由数据库扫描决定
    async fn list_tasks(&self) -> Result<Vec<TaskEntity>, sqlx::Error>;

    /// 插入一条任务并立即提交
    async fn insert_task(&self, title: &str) -> Result<(), sqlx::Error>;
}

/// 基于 Postgres 连接池的任务存储
#[derive(Clone)]
pub struct PgTaskStore {
    pool: PgPool,
}

impl PgTaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 建立连接池，进程生命周期内只调用一次
    pub async fn connect(options: PgConnectOptions) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .after_connect(|conn, _meta| {
                Box::pin(async move {
                    conn.execute("SET application_name = 'taskboard_api';")
                        .await?;
                    Ok(())
                })
            })
            .connect_with(options)
            .await?;

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn list_tasks(&self) -> Result<Vec<TaskEntity>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, TaskEntity>("SELECT id, title FROM tasks")
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("Loaded {} tasks from database", tasks.len());
        Ok(tasks)
    }

    async fn insert_task(&self, title: &str) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO tasks (title) VALUES ($1)")
            .bind(title)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
