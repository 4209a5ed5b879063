//! Typed read-only contracts for external collaborators.
//!
//! Payroll, the employee directory, company settings, the holiday
//! service, and the audit log live outside this system. Each is consumed
//! through an explicit typed contract: the aggregation logic never
//! guesses at field shapes.

pub mod audit;
pub mod employee;
pub mod error;
pub mod holiday;
pub mod payroll;
pub mod settings;

pub use audit::{AuditEvent, AuditLog, AuditSeverity};
pub use employee::{Employee, EmployeeDirectory, EmployeeStatus};
pub use error::ContractError;
pub use holiday::{HolidayOverride, HolidaySource};
pub use payroll::{
    DeductionKind, EmployerTax, EmployerTaxKind, PayrollDeduction, PayrollRecord, PayrollRun,
    PayrollRunStatus, PayrollSource,
};
pub use settings::{CompanyDetails, CompanySettings};
