/*
 * Responsibility
 * - services の公開インターフェース (re-export)
 */
pub mod forward;
pub mod token_validator;
