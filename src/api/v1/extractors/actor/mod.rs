/*!
 * Actor extractor
 *
 * Responsibility:
 * - リクエストの主体 (Actor) を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - Actor
 * - CurrentActor
 */

mod core;
mod types;

pub use self::core::CurrentActor;
pub use types::Actor;
