/// Check-env command functionality
pub mod check_env;
/// Db-inspect command functionality
pub mod db_inspect;
