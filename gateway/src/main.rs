/*
 * Responsibility
 * - tokio runtime 起動
 * - app::run() の呼び出し（ロジックは置かない）
 */
use gateway::app;
use gateway::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    app::run().await
}
