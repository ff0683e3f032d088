pub mod expense_service;
pub mod summary_service;
